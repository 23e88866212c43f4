#![forbid(unsafe_code)]

//! Resolved span geometry.

/// A rectangular block of grid positions owned by one content value.
///
/// Uses grid coordinates (0-indexed, origin at the top-left cell). Extents
/// are always at least 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First row (inclusive).
    pub row: usize,
    /// First column (inclusive).
    pub col: usize,
    /// Number of rows covered.
    pub height: usize,
    /// Number of columns covered.
    pub width: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(row: usize, col: usize, height: usize, width: usize) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// A 1×1 span at the given position.
    #[inline]
    pub const fn single(row: usize, col: usize) -> Self {
        Self::new(row, col, 1, 1)
    }

    /// Last row + 1.
    #[inline]
    pub const fn bottom(&self) -> usize {
        self.row + self.height
    }

    /// Last column + 1.
    #[inline]
    pub const fn right(&self) -> usize {
        self.col + self.width
    }

    /// Whether the span covers the given position.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.row && row < self.bottom() && col >= self.col && col < self.right()
    }

    /// Whether the span covers exactly one position.
    #[inline]
    pub const fn is_single(&self) -> bool {
        self.width == 1 && self.height == 1
    }

    /// Number of grid positions covered.
    #[inline]
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Extent along an axis: `width` for columns, `height` for rows.
    #[inline]
    pub const fn extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Columns => self.width,
            Axis::Rows => self.height,
        }
    }

    /// First track index along an axis.
    #[inline]
    pub const fn start(&self, axis: Axis) -> usize {
        match axis {
            Axis::Columns => self.col,
            Axis::Rows => self.row,
        }
    }
}

/// One of the two sizing axes of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Column widths (display cells).
    Columns,
    /// Row heights (lines).
    Rows,
}
