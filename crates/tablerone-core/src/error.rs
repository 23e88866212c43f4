#![forbid(unsafe_code)]

//! Errors describing a grid that cannot be turned into a table.

use std::fmt;

use crate::cell::Direction;

/// A grid that cannot be laid out.
///
/// Every variant names the offending position (0-indexed row and column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// A row's length differs from the first row's.
    NonRectangular {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A merge directive points past the edge of the grid.
    MergeOffGrid {
        row: usize,
        col: usize,
        direction: Direction,
    },
    /// A merge directive that no content cell ever reaches, either because it
    /// points at another directive facing away or because directives form a
    /// cycle.
    DanglingMerge {
        row: usize,
        col: usize,
        direction: Direction,
    },
    /// Absorbing this directive would leave a span that is not a rectangle.
    NonRectangularMerge { row: usize, col: usize },
    /// Markdown output cannot express merged cells.
    MergeInMarkdown { row: usize, col: usize },
}

impl TableError {
    /// Offending position as `(row, col)`.
    ///
    /// For a ragged row the column is the first missing or extra cell.
    pub const fn position(&self) -> (usize, usize) {
        match *self {
            Self::NonRectangular {
                row,
                expected,
                found,
            } => (row, if expected < found { expected } else { found }),
            Self::MergeOffGrid { row, col, .. }
            | Self::DanglingMerge { row, col, .. }
            | Self::NonRectangularMerge { row, col }
            | Self::MergeInMarkdown { row, col } => (row, col),
        }
    }
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonRectangular {
                row,
                expected,
                found,
            } => write!(
                f,
                "invalid table: row {row} has {found} cells, expected {expected}"
            ),
            Self::MergeOffGrid {
                row,
                col,
                direction,
            } => write!(
                f,
                "invalid table: merge {direction} at ({row}, {col}) points off the grid"
            ),
            Self::DanglingMerge {
                row,
                col,
                direction,
            } => write!(
                f,
                "invalid table: merge {direction} at ({row}, {col}) does not reach any content"
            ),
            Self::NonRectangularMerge { row, col } => write!(
                f,
                "invalid table: merge at ({row}, {col}) produces a non-rectangular span"
            ),
            Self::MergeInMarkdown { row, col } => write!(
                f,
                "invalid table: markdown cannot merge cells, found merge at ({row}, {col})"
            ),
        }
    }
}

impl std::error::Error for TableError {}
