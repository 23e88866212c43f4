#![forbid(unsafe_code)]

//! Display-width measurement.
//!
//! Widths are terminal cells, not characters: CJK ideographs and most emoji
//! take two cells, combining marks take none. Measurement walks grapheme
//! clusters so a base character and its marks are measured together.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width and height of a block of text, in cells and lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BlockSize {
    /// Widest line, in display cells.
    pub width: usize,
    /// Number of lines.
    pub height: usize,
}

impl BlockSize {
    /// Create a new block size.
    #[inline]
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Whether `self` fits inside `other` on both axes.
    #[inline]
    pub const fn fits_in(self, other: Self) -> bool {
        self.width <= other.width && self.height <= other.height
    }
}

/// Display width of a single grapheme cluster.
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    grapheme.width()
}

/// Display width of `text` in terminal cells.
///
/// Printable ASCII takes the byte-length fast path.
#[must_use]
pub fn display_width(text: &str) -> usize {
    if is_ascii_only(text) {
        return text.len();
    }
    text.graphemes(true).map(grapheme_width).sum()
}

/// Whether `text` is printable ASCII only (one cell per byte).
#[inline]
#[must_use]
pub fn is_ascii_only(text: &str) -> bool {
    text.bytes().all(|b| (0x20..0x7f).contains(&b))
}

/// Split cell content into its literal lines.
///
/// Splits on `\n`, dropping a trailing `\r` from each line. The empty string
/// is one empty line and a trailing newline adds a final empty line, so the
/// line count always matches what the caller wrote.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Natural block size of cell content.
#[must_use]
pub fn measure(text: &str) -> BlockSize {
    split_lines(text).fold(BlockSize::default(), |acc, line| BlockSize {
        width: acc.width.max(display_width(line)),
        height: acc.height + 1,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_width_is_byte_length() {
        assert_eq!(display_width("hello"), 5);
        assert_eq!(display_width(""), 0);
        assert_eq!(display_width("a b c"), 5);
    }

    #[test]
    fn wide_glyphs_count_twice() {
        assert_eq!(display_width("中文"), 4);
        assert_eq!(display_width("a中b"), 4);
        assert_eq!(display_width("ｈｉ"), 4);
    }

    #[test]
    fn combining_marks_are_free() {
        assert_eq!(display_width("e\u{301}"), 1);
        assert_eq!(display_width("cafe\u{301}"), 4);
    }

    #[test]
    fn accented_precomposed() {
        assert_eq!(display_width("héllo"), 5);
        assert!(!is_ascii_only("héllo"));
    }

    #[test]
    fn split_keeps_empty_lines() {
        assert_eq!(split_lines("").collect::<Vec<_>>(), vec![""]);
        assert_eq!(split_lines("a\n").collect::<Vec<_>>(), vec!["a", ""]);
        assert_eq!(split_lines("a\r\nb").collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(split_lines("\n\n").count(), 3);
    }

    #[test]
    fn measure_takes_widest_line() {
        assert_eq!(measure(""), BlockSize::new(0, 1));
        assert_eq!(measure("abc"), BlockSize::new(3, 1));
        assert_eq!(measure("a\nabcd\nab"), BlockSize::new(4, 3));
        assert_eq!(measure("x\n中文字"), BlockSize::new(6, 2));
    }

    #[test]
    fn fits_in_checks_both_axes() {
        let small = BlockSize::new(2, 2);
        assert!(small.fits_in(BlockSize::new(2, 2)));
        assert!(small.fits_in(BlockSize::new(3, 5)));
        assert!(!small.fits_in(BlockSize::new(1, 5)));
        assert!(!small.fits_in(BlockSize::new(5, 1)));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Printable ASCII is one cell per byte.
            #[test]
            fn ascii_width_matches_len(text in "[ -~]{0,40}") {
                prop_assert_eq!(display_width(&text), text.len());
            }

            /// CJK ideographs are two cells each, however they are mixed with ASCII.
            #[test]
            fn cjk_counts_double(ascii in "[a-z]{0,10}", cjk in "[\u{4E00}-\u{4FFF}]{0,10}") {
                let text = format!("{ascii}{cjk}");
                prop_assert_eq!(display_width(&text), ascii.len() + 2 * cjk.chars().count());
            }

            /// Height equals newline count + 1.
            #[test]
            fn height_counts_newlines(parts in proptest::collection::vec("[a-z]{0,5}", 1..6)) {
                let text = parts.join("\n");
                prop_assert_eq!(measure(&text).height, parts.len());
            }
        }
    }
}
