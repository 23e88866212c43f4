#![forbid(unsafe_code)]

//! Cell content alignment.

use std::fmt;
use std::str::FromStr;

/// Horizontal placement of content inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    /// Flush left, padding on the right.
    Left,
    /// Centered; odd slack puts the extra space on the left.
    #[default]
    Center,
    /// Flush right, padding on the left.
    Right,
}

/// Vertical placement of content inside a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    /// Content at the top, blank lines below.
    Top,
    /// Centered; odd slack puts the extra blank line above.
    #[default]
    Middle,
    /// Content at the bottom, blank lines above.
    Bottom,
}

/// Combined vertical and horizontal alignment of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    TopLeft,
    TopCenter,
    TopRight,
    MiddleLeft,
    #[default]
    MiddleCenter,
    MiddleRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl Alignment {
    /// Shorthand for [`Alignment::MiddleCenter`].
    pub const CENTER: Self = Self::MiddleCenter;
    /// Shorthand for [`Alignment::MiddleLeft`].
    pub const LEFT: Self = Self::MiddleLeft;
    /// Shorthand for [`Alignment::MiddleRight`].
    pub const RIGHT: Self = Self::MiddleRight;

    /// All nine alignments, row-major from top-left.
    pub const ALL: [Self; 9] = [
        Self::TopLeft,
        Self::TopCenter,
        Self::TopRight,
        Self::MiddleLeft,
        Self::MiddleCenter,
        Self::MiddleRight,
        Self::BottomLeft,
        Self::BottomCenter,
        Self::BottomRight,
    ];

    /// Compose from the two axes.
    pub const fn new(vertical: VerticalAlignment, horizontal: HorizontalAlignment) -> Self {
        use HorizontalAlignment as H;
        use VerticalAlignment as V;
        match (vertical, horizontal) {
            (V::Top, H::Left) => Self::TopLeft,
            (V::Top, H::Center) => Self::TopCenter,
            (V::Top, H::Right) => Self::TopRight,
            (V::Middle, H::Left) => Self::MiddleLeft,
            (V::Middle, H::Center) => Self::MiddleCenter,
            (V::Middle, H::Right) => Self::MiddleRight,
            (V::Bottom, H::Left) => Self::BottomLeft,
            (V::Bottom, H::Center) => Self::BottomCenter,
            (V::Bottom, H::Right) => Self::BottomRight,
        }
    }

    /// The vertical component.
    pub const fn vertical(self) -> VerticalAlignment {
        match self {
            Self::TopLeft | Self::TopCenter | Self::TopRight => VerticalAlignment::Top,
            Self::MiddleLeft | Self::MiddleCenter | Self::MiddleRight => VerticalAlignment::Middle,
            Self::BottomLeft | Self::BottomCenter | Self::BottomRight => VerticalAlignment::Bottom,
        }
    }

    /// The horizontal component.
    pub const fn horizontal(self) -> HorizontalAlignment {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => HorizontalAlignment::Left,
            Self::TopCenter | Self::MiddleCenter | Self::BottomCenter => HorizontalAlignment::Center,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => HorizontalAlignment::Right,
        }
    }

    /// Canonical kebab-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopLeft => "top-left",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::MiddleLeft => "middle-left",
            Self::MiddleCenter => "middle-center",
            Self::MiddleRight => "middle-right",
            Self::BottomLeft => "bottom-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An alignment name that is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlignmentError {
    pub input: String,
}

impl fmt::Display for ParseAlignmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown alignment '{}'", self.input)
    }
}

impl std::error::Error for ParseAlignmentError {}

impl FromStr for Alignment {
    type Err = ParseAlignmentError;

    /// Parse `top-left`, `middle_center`, `BOTTOM-RIGHT`, or the shorthands
    /// `left`, `center`, `right`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        match normalized.as_str() {
            "left" => return Ok(Self::LEFT),
            "center" | "centre" => return Ok(Self::CENTER),
            "right" => return Ok(Self::RIGHT),
            _ => {}
        }
        Self::ALL
            .into_iter()
            .find(|a| a.as_str() == normalized)
            .ok_or_else(|| ParseAlignmentError {
                input: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthands_resolve_to_middle_row() {
        assert_eq!(Alignment::CENTER, Alignment::MiddleCenter);
        assert_eq!(Alignment::LEFT, Alignment::MiddleLeft);
        assert_eq!(Alignment::RIGHT, Alignment::MiddleRight);
        assert_eq!(Alignment::default(), Alignment::CENTER);
    }

    #[test]
    fn components_round_trip() {
        for a in Alignment::ALL {
            assert_eq!(Alignment::new(a.vertical(), a.horizontal()), a);
        }
    }

    #[test]
    fn parse_accepts_common_spellings() {
        assert_eq!("top-left".parse(), Ok(Alignment::TopLeft));
        assert_eq!("BOTTOM_RIGHT".parse(), Ok(Alignment::BottomRight));
        assert_eq!(" center ".parse(), Ok(Alignment::MiddleCenter));
        assert_eq!("right".parse(), Ok(Alignment::MiddleRight));
        assert!("sideways".parse::<Alignment>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for a in Alignment::ALL {
            assert_eq!(a.to_string().parse(), Ok(a));
        }
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Case and separator spelling never change the parsed alignment.
            #[test]
            fn parse_ignores_case_and_separator(
                index in 0usize..9,
                upper in proptest::collection::vec(any::<bool>(), 13),
                snake in any::<bool>(),
            ) {
                let a = Alignment::ALL[index];
                let spelled: String = a
                    .as_str()
                    .chars()
                    .zip(upper.iter().cycle())
                    .map(|(ch, &up)| match ch {
                        '-' if snake => '_',
                        _ if up => ch.to_ascii_uppercase(),
                        _ => ch,
                    })
                    .collect();
                prop_assert_eq!(spelled.parse::<Alignment>(), Ok(a));
            }
        }
    }
}
