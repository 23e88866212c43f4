#![forbid(unsafe_code)]

//! Rectangular grids of cells.

use crate::cell::Cell;
use crate::error::TableError;

/// A rectangular, row-major grid of [`Cell`]s.
///
/// Zero rows or zero columns is a valid, empty grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from rows of cell-convertible values.
    ///
    /// Fails with [`TableError::NonRectangular`] when any row's length
    /// differs from the first row's.
    ///
    /// ```
    /// use tablerone_core::Grid;
    ///
    /// let grid = Grid::new([["a", "b"], ["c", "d"]]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (2, 2));
    /// ```
    pub fn new<R, C>(rows: R) -> Result<Self, TableError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<Cell>,
    {
        let mut cells = Vec::new();
        let mut cols = None;
        let mut count = 0;

        for (row, items) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(items.into_iter().map(Into::into));
            let found = cells.len() - before;
            match cols {
                None => cols = Some(found),
                Some(expected) if expected != found => {
                    return Err(TableError::NonRectangular {
                        row,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            count += 1;
        }

        Ok(Self {
            rows: count,
            cols: cols.unwrap_or(0),
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid has no positions.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Cell at `(row, col)`, if in bounds.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Iterate rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        // chunks(0) panics; a zero-column grid has no cells to chunk.
        self.cells.chunks(self.cols.max(1))
    }

    /// Iterate every position with its cell, in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    /// First merge directive in row-major order, if any.
    pub fn first_merge(&self) -> Option<(usize, usize)> {
        self.positions()
            .find(|(_, _, cell)| cell.is_merge())
            .map(|(row, col, _)| (row, col))
    }
}
