#![forbid(unsafe_code)]

//! The eleven-glyph border style.

use std::fmt;
use std::str::FromStr;

use crate::arms::Arms;

/// Number of glyphs in a style string.
pub const GLYPH_COUNT: usize = 11;

/// A style string with the wrong number of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// The string did not hold exactly [`GLYPH_COUNT`] characters.
    InvalidLength { length: usize },
    /// No preset with this name.
    UnknownPreset { name: String },
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { length } => write!(
                f,
                "invalid style string: must be exactly {GLYPH_COUNT} characters long, {length} provided"
            ),
            Self::UnknownPreset { name } => write!(f, "unknown table style '{name}'"),
        }
    }
}

impl std::error::Error for StyleError {}

/// Characters used to draw a table's borders and separators.
///
/// Glyphs are expected to be one display cell wide; they need not be
/// distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub vertical: char,
    pub horizontal: char,
    /// Interior crossing of a vertical and a horizontal separator.
    pub joint: char,
    /// A horizontal separator meeting the left border.
    pub joint_left: char,
    /// A horizontal separator meeting the right border.
    pub joint_right: char,
    /// A vertical separator meeting the top border.
    pub joint_top: char,
    /// A vertical separator meeting the bottom border.
    pub joint_bottom: char,
}

impl StyleSet {
    /// Double-line box drawing (`╔╗╚╝║═╬╠╣╦╩`). The default.
    pub const DOUBLE: Self = Self::from_glyphs([
        '╔', '╗', '╚', '╝', '║', '═', '╬', '╠', '╣', '╦', '╩',
    ]);

    /// Single-line box drawing (`┌┐└┘│─┼├┤┬┴`).
    pub const THIN: Self = Self::from_glyphs([
        '┌', '┐', '└', '┘', '│', '─', '┼', '├', '┤', '┬', '┴',
    ]);

    /// Single line with rounded corners (`╭╮╰╯│─┼├┤┬┴`).
    pub const ROUNDED: Self = Self::from_glyphs([
        '╭', '╮', '╰', '╯', '│', '─', '┼', '├', '┤', '┬', '┴',
    ]);

    /// Heavy (thick) lines (`┏┓┗┛┃━╋┣┫┳┻`).
    pub const HEAVY: Self = Self::from_glyphs([
        '┏', '┓', '┗', '┛', '┃', '━', '╋', '┣', '┫', '┳', '┻',
    ]);

    /// ASCII-only (`++++|-+++++`).
    pub const ASCII: Self = Self::from_glyphs([
        '+', '+', '+', '+', '|', '-', '+', '+', '+', '+', '+',
    ]);

    /// Preset names accepted by [`StyleSet::named`].
    pub const PRESET_NAMES: [&'static str; 5] = ["double", "thin", "rounded", "heavy", "ascii"];

    /// Build from glyphs in style-string order: top-left, top-right,
    /// bottom-left, bottom-right, vertical, horizontal, joint, joint-left,
    /// joint-right, joint-top, joint-bottom.
    pub const fn from_glyphs(g: [char; GLYPH_COUNT]) -> Self {
        Self {
            top_left: g[0],
            top_right: g[1],
            bottom_left: g[2],
            bottom_right: g[3],
            vertical: g[4],
            horizontal: g[5],
            joint: g[6],
            joint_left: g[7],
            joint_right: g[8],
            joint_top: g[9],
            joint_bottom: g[10],
        }
    }

    /// Glyphs in style-string order.
    pub const fn glyphs(&self) -> [char; GLYPH_COUNT] {
        [
            self.top_left,
            self.top_right,
            self.bottom_left,
            self.bottom_right,
            self.vertical,
            self.horizontal,
            self.joint,
            self.joint_left,
            self.joint_right,
            self.joint_top,
            self.joint_bottom,
        ]
    }

    /// Look up a preset by name (case-insensitive).
    pub fn named(name: &str) -> Result<Self, StyleError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "double" | "default" => Ok(Self::DOUBLE),
            "thin" | "single" => Ok(Self::THIN),
            "rounded" => Ok(Self::ROUNDED),
            "heavy" => Ok(Self::HEAVY),
            "ascii" => Ok(Self::ASCII),
            _ => Err(StyleError::UnknownPreset {
                name: name.to_owned(),
            }),
        }
    }

    /// Glyph drawing the given set of arms at an intersection.
    ///
    /// Lone or straight-through arms fall back to the plain edge glyphs; an
    /// intersection with no arms is a space.
    pub fn junction(&self, arms: Arms) -> char {
        let up = arms.contains(Arms::UP);
        let down = arms.contains(Arms::DOWN);
        let left = arms.contains(Arms::LEFT);
        let right = arms.contains(Arms::RIGHT);
        match (up, down, left, right) {
            (false, true, false, true) => self.top_left,
            (false, true, true, false) => self.top_right,
            (true, false, false, true) => self.bottom_left,
            (true, false, true, false) => self.bottom_right,
            (true, true, true, true) => self.joint,
            (true, true, false, true) => self.joint_left,
            (true, true, true, false) => self.joint_right,
            (false, true, true, true) => self.joint_top,
            (true, false, true, true) => self.joint_bottom,
            (_, _, false, false) if up || down => self.vertical,
            (false, false, _, _) if left || right => self.horizontal,
            _ => ' ',
        }
    }
}

impl Default for StyleSet {
    fn default() -> Self {
        Self::DOUBLE
    }
}

impl FromStr for StyleSet {
    type Err = StyleError;

    /// Parse an eleven-character style string.
    ///
    /// Length is counted in Unicode scalar values.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut glyphs = [' '; GLYPH_COUNT];
        let mut length = 0;
        for ch in s.chars() {
            if let Some(slot) = glyphs.get_mut(length) {
                *slot = ch;
            }
            length += 1;
        }
        if length != GLYPH_COUNT {
            return Err(StyleError::InvalidLength { length });
        }
        Ok(Self::from_glyphs(glyphs))
    }
}

impl fmt::Display for StyleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs().iter().try_for_each(|c| fmt::Write::write_char(f, *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_match_their_strings() {
        assert_eq!("╔╗╚╝║═╬╠╣╦╩".parse::<StyleSet>(), Ok(StyleSet::DOUBLE));
        assert_eq!("┌┐└┘│─┼├┤┬┴".parse::<StyleSet>(), Ok(StyleSet::THIN));
        assert_eq!(StyleSet::default(), StyleSet::DOUBLE);
    }

    #[test]
    fn string_order_is_positional() {
        let style: StyleSet = "abcdefghijk".parse().unwrap();
        assert_eq!(style.top_left, 'a');
        assert_eq!(style.top_right, 'b');
        assert_eq!(style.bottom_left, 'c');
        assert_eq!(style.bottom_right, 'd');
        assert_eq!(style.vertical, 'e');
        assert_eq!(style.horizontal, 'f');
        assert_eq!(style.joint, 'g');
        assert_eq!(style.joint_left, 'h');
        assert_eq!(style.joint_right, 'i');
        assert_eq!(style.joint_top, 'j');
        assert_eq!(style.joint_bottom, 'k');
        assert_eq!(style.to_string(), "abcdefghijk");
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert_eq!(
            "╔╗╚╝║═╬╠╣╦".parse::<StyleSet>(),
            Err(StyleError::InvalidLength { length: 10 })
        );
        assert_eq!(
            "╔╗╚╝║═╬╠╣╦╩╩".parse::<StyleSet>(),
            Err(StyleError::InvalidLength { length: 12 })
        );
        assert_eq!(
            "".parse::<StyleSet>(),
            Err(StyleError::InvalidLength { length: 0 })
        );
    }

    #[test]
    fn duplicate_glyphs_are_fine() {
        let style: StyleSet = "###########".parse().unwrap();
        assert!(style.glyphs().iter().all(|&c| c == '#'));
    }

    #[test]
    fn length_counts_chars_not_bytes() {
        // 11 multi-byte glyphs: 33 bytes.
        let s = "╭╮╰╯│─┼├┤┬┴";
        assert_eq!(s.len(), 33);
        assert_eq!(s.parse::<StyleSet>(), Ok(StyleSet::ROUNDED));
    }

    #[test]
    fn named_presets() {
        for name in StyleSet::PRESET_NAMES {
            assert!(StyleSet::named(name).is_ok(), "{name}");
        }
        assert_eq!(StyleSet::named("HEAVY"), Ok(StyleSet::HEAVY));
        assert!(matches!(
            StyleSet::named("dotted"),
            Err(StyleError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn junction_table() {
        let s = StyleSet::THIN;
        assert_eq!(s.junction(Arms::DOWN | Arms::RIGHT), '┌');
        assert_eq!(s.junction(Arms::DOWN | Arms::LEFT), '┐');
        assert_eq!(s.junction(Arms::UP | Arms::RIGHT), '└');
        assert_eq!(s.junction(Arms::UP | Arms::LEFT), '┘');
        assert_eq!(s.junction(Arms::all()), '┼');
        assert_eq!(s.junction(Arms::VERTICAL | Arms::RIGHT), '├');
        assert_eq!(s.junction(Arms::VERTICAL | Arms::LEFT), '┤');
        assert_eq!(s.junction(Arms::HORIZONTAL | Arms::DOWN), '┬');
        assert_eq!(s.junction(Arms::HORIZONTAL | Arms::UP), '┴');
        assert_eq!(s.junction(Arms::VERTICAL), '│');
        assert_eq!(s.junction(Arms::UP), '│');
        assert_eq!(s.junction(Arms::HORIZONTAL), '─');
        assert_eq!(s.junction(Arms::RIGHT), '─');
        assert_eq!(s.junction(Arms::empty()), ' ');
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Any eleven characters parse, and display gives them back.
            #[test]
            fn eleven_chars_round_trip(glyphs in proptest::collection::vec(any::<char>(), GLYPH_COUNT)) {
                let s: String = glyphs.iter().collect();
                let style: StyleSet = s.parse().unwrap();
                prop_assert_eq!(style.to_string(), s);
            }

            /// Any other length fails with that length.
            #[test]
            fn other_lengths_fail(len in (0usize..30).prop_filter("not eleven", |l| *l != GLYPH_COUNT)) {
                let s = "x".repeat(len);
                prop_assert_eq!(s.parse::<StyleSet>(), Err(StyleError::InvalidLength { length: len }));
            }
        }
    }
}
