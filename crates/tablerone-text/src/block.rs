#![forbid(unsafe_code)]

//! Aligned text blocks.
//!
//! [`render_block`] turns cell content into exactly `height` lines of exactly
//! `width` display cells, padding with spaces and blank lines according to an
//! [`Alignment`]. Content never gets cut: if it does not fit, the caller's
//! sizing was wrong and a [`BlockOverflow`] comes back instead.

use std::fmt;

use tablerone_core::{Alignment, HorizontalAlignment, VerticalAlignment};

use crate::width::{BlockSize, display_width, measure, split_lines};

/// Content that does not fit the box it was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockOverflow {
    /// Box the content was asked to fill.
    pub available: BlockSize,
    /// Natural size of the content.
    pub needed: BlockSize,
}

impl fmt::Display for BlockOverflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "content of {}x{} does not fit a {}x{} box",
            self.needed.width, self.needed.height, self.available.width, self.available.height
        )
    }
}

impl std::error::Error for BlockOverflow {}

/// Split `slack` into `(before, after)`, putting the odd unit before.
#[inline]
fn split_slack(slack: usize) -> (usize, usize) {
    let before = slack.div_ceil(2);
    (before, slack - before)
}

/// Blank lines to place `(above, below)` content of `lines` lines in a box
/// `height` lines tall.
///
/// Returns `None` when the content is taller than the box.
#[must_use]
pub fn vertical_slack(
    lines: usize,
    height: usize,
    alignment: VerticalAlignment,
) -> Option<(usize, usize)> {
    let slack = height.checked_sub(lines)?;
    Some(match alignment {
        VerticalAlignment::Top => (0, slack),
        VerticalAlignment::Middle => split_slack(slack),
        VerticalAlignment::Bottom => (slack, 0),
    })
}

/// Pad one line to exactly `width` display cells.
///
/// Returns `None` when the line is wider than `width`.
#[must_use]
pub fn align_line(line: &str, width: usize, alignment: HorizontalAlignment) -> Option<String> {
    let slack = width.checked_sub(display_width(line))?;
    let (left, right) = match alignment {
        HorizontalAlignment::Left => (0, slack),
        HorizontalAlignment::Center => split_slack(slack),
        HorizontalAlignment::Right => (slack, 0),
    };
    let mut out = String::with_capacity(line.len() + slack);
    out.extend(std::iter::repeat_n(' ', left));
    out.push_str(line);
    out.extend(std::iter::repeat_n(' ', right));
    Some(out)
}

/// Render `text` into a `width` × `height` block of lines.
///
/// Every returned line is exactly `width` display cells wide and exactly
/// `height` lines come back.
pub fn render_block(
    text: &str,
    width: usize,
    height: usize,
    alignment: Alignment,
) -> Result<Vec<String>, BlockOverflow> {
    let overflow = || BlockOverflow {
        available: BlockSize::new(width, height),
        needed: measure(text),
    };

    let line_count = split_lines(text).count();
    let (above, below) =
        vertical_slack(line_count, height, alignment.vertical()).ok_or_else(overflow)?;

    let blank = " ".repeat(width);
    let mut out = Vec::with_capacity(height);
    out.extend(std::iter::repeat_n(blank.clone(), above));
    for line in split_lines(text) {
        let padded = align_line(line, width, alignment.horizontal()).ok_or_else(overflow)?;
        out.push(padded);
    }
    out.extend(std::iter::repeat_n(blank, below));
    Ok(out)
}
