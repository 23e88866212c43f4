#![forbid(unsafe_code)]

//! Rendering options.
//!
//! [`Options`] is a plain value: padding, which interior separators are
//! drawn, whether the outer border is drawn, and how cell content is
//! aligned. Alignment may be given once for the whole table, per column, or
//! per cell, with separate overrides for the header row and the body.

use std::str::FromStr;

use tablerone_core::{Alignment, ParseAlignmentError};

use crate::error::{AlignField, AlignShape, OptionsError, PaddingError, PaddingErrors, PaddingField};

/// Blank space between content and boundaries.
///
/// The `*_no_border` values are the gap between adjacent tracks that have no
/// separator. The `*_with_border` values are the space on each side of a
/// drawn line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Padding {
    pub horizontal_no_border: usize,
    pub vertical_no_border: usize,
    pub horizontal_with_border: usize,
    pub vertical_with_border: usize,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            horizontal_no_border: 1,
            vertical_no_border: 1,
            horizontal_with_border: 1,
            vertical_with_border: 0,
        }
    }
}

impl Padding {
    /// Validate signed values, given in [`PaddingField::ALL`] order.
    ///
    /// Every negative value is reported, not just the first.
    pub fn from_signed(values: [i64; 4]) -> Result<Self, PaddingErrors> {
        let errors: Vec<PaddingError> = PaddingField::ALL
            .into_iter()
            .zip(values)
            .filter(|&(_, value)| value < 0)
            .map(|(field, value)| PaddingError { field, value })
            .collect();
        if !errors.is_empty() {
            return Err(PaddingErrors(errors));
        }
        let [h_nb, v_nb, h_b, v_b] = values.map(|v| usize::try_from(v).unwrap_or(0));
        Ok(Self {
            horizontal_no_border: h_nb,
            vertical_no_border: v_nb,
            horizontal_with_border: h_b,
            vertical_with_border: v_b,
        })
    }

    pub const fn get(&self, field: PaddingField) -> usize {
        match field {
            PaddingField::HorizontalNoBorder => self.horizontal_no_border,
            PaddingField::VerticalNoBorder => self.vertical_no_border,
            PaddingField::HorizontalWithBorder => self.horizontal_with_border,
            PaddingField::VerticalWithBorder => self.vertical_with_border,
        }
    }
}

/// Interior separator lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Separators {
    /// Line after the first column.
    pub left_col: bool,
    /// Line before the last column.
    pub right_col: bool,
    /// Line under the header row.
    pub top_row: bool,
    /// Line above the last row.
    pub bottom_row: bool,
    /// Lines between every pair of columns.
    pub vertical: bool,
    /// Lines between every pair of rows.
    pub horizontal: bool,
}

impl Separators {
    /// Every separator on.
    pub const ALL: Self = Self {
        left_col: true,
        right_col: true,
        top_row: true,
        bottom_row: true,
        vertical: true,
        horizontal: true,
    };

    /// Whether interior column boundary `b` (of `cols + 1`) carries a line.
    pub const fn column_rule(&self, b: usize, cols: usize) -> bool {
        if b == 0 || b >= cols {
            return false;
        }
        self.vertical || (self.left_col && b == 1) || (self.right_col && b + 1 == cols)
    }

    /// Whether interior row boundary `b` (of `rows + 1`) carries a line.
    pub const fn row_rule(&self, b: usize, rows: usize) -> bool {
        if b == 0 || b >= rows {
            return false;
        }
        self.horizontal || (self.top_row && b == 1) || (self.bottom_row && b + 1 == rows)
    }
}

/// Alignment for a region of the table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AlignSpec {
    /// Same alignment everywhere.
    Single(Alignment),
    /// One alignment per column.
    PerColumn(Vec<Alignment>),
    /// One alignment per cell, row-major.
    PerCell(Vec<Vec<Alignment>>),
}

impl Default for AlignSpec {
    fn default() -> Self {
        Self::Single(Alignment::CENTER)
    }
}

impl From<Alignment> for AlignSpec {
    fn from(a: Alignment) -> Self {
        Self::Single(a)
    }
}

impl From<Vec<Alignment>> for AlignSpec {
    fn from(v: Vec<Alignment>) -> Self {
        Self::PerColumn(v)
    }
}

impl From<Vec<Vec<Alignment>>> for AlignSpec {
    fn from(v: Vec<Vec<Alignment>>) -> Self {
        Self::PerCell(v)
    }
}

impl AlignSpec {
    /// Alignment at `(row, col)` within the region it applies to.
    pub fn get(&self, row: usize, col: usize) -> Option<Alignment> {
        match self {
            Self::Single(a) => Some(*a),
            Self::PerColumn(v) => v.get(col).copied(),
            Self::PerCell(m) => m.get(row).and_then(|r| r.get(col)).copied(),
        }
    }

    /// Check the shape against a region of `rows` × `cols` cells.
    fn check(&self, field: AlignField, rows: usize, cols: usize) -> Result<(), OptionsError> {
        let mismatch = |expected, found| OptionsError::AlignmentShape {
            field,
            expected,
            found,
        };
        match self {
            Self::Single(_) => Ok(()),
            Self::PerColumn(v) if v.len() == cols => Ok(()),
            Self::PerColumn(v) => Err(mismatch(
                AlignShape::Columns(cols),
                AlignShape::Columns(v.len()),
            )),
            Self::PerCell(m) => {
                let bad_row = m.iter().find(|r| r.len() != cols);
                if m.len() == rows && bad_row.is_none() {
                    return Ok(());
                }
                let found_cols = bad_row.or(m.first()).map_or(0, Vec::len);
                Err(mismatch(
                    AlignShape::Matrix { rows, cols },
                    AlignShape::Matrix {
                        rows: m.len(),
                        cols: found_cols,
                    },
                ))
            }
        }
    }
}

impl FromStr for AlignSpec {
    type Err = ParseAlignmentError;

    /// `center` is a single alignment, `left,center,right` one per column,
    /// and `left,right;center,center` one per cell with rows split on `;`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_row = |row: &str| {
            row.split(',')
                .map(str::parse::<Alignment>)
                .collect::<Result<Vec<_>, _>>()
        };
        if s.contains(';') {
            let rows = s
                .split(';')
                .map(parse_row)
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Self::PerCell(rows))
        } else if s.contains(',') {
            Ok(Self::PerColumn(parse_row(s)?))
        } else {
            Ok(Self::Single(s.parse()?))
        }
    }
}

/// How a table is rendered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Options {
    pub padding: Padding,
    pub separators: Separators,
    /// Draw the frame around the table.
    pub outer_border: bool,
    /// Alignment for every cell not covered by an override.
    pub align: AlignSpec,
    /// Override for row 0.
    pub align_header: Option<AlignSpec>,
    /// Override for rows 1 and below, indexed from the first body row.
    pub align_body: Option<AlignSpec>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            padding: Padding::default(),
            separators: Separators::default(),
            outer_border: true,
            align: AlignSpec::default(),
            align_header: None,
            align_body: None,
        }
    }
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check that every alignment spec matches a `rows` × `cols` grid.
    pub fn validate(&self, rows: usize, cols: usize) -> Result<(), OptionsError> {
        self.align.check(AlignField::Align, rows, cols)?;
        if let Some(header) = &self.align_header {
            header.check(AlignField::AlignHeader, 1, cols)?;
        }
        if let Some(body) = &self.align_body {
            body.check(AlignField::AlignBody, rows.saturating_sub(1), cols)?;
        }
        Ok(())
    }

    /// Effective alignment of the cell at `(row, col)`.
    ///
    /// Falls back to the default alignment outside an `AlignSpec`'s shape, which
    /// [`Options::validate`] rules out.
    pub fn alignment_at(&self, row: usize, col: usize) -> Alignment {
        let (spec, region_row) = match (row, &self.align_header, &self.align_body) {
            (0, Some(header), _) => (header, 0),
            (r, _, Some(body)) if r > 0 => (body, r - 1),
            (r, _, _) => (&self.align, r),
        };
        spec.get(region_row, col).unwrap_or_default()
    }
}
