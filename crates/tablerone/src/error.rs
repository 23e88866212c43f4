#![forbid(unsafe_code)]

//! Errors surfaced by the facade.

use std::fmt;

use tablerone_core::TableError;
use tablerone_style::StyleError;
use tablerone_text::BlockOverflow;

/// Which padding option a [`PaddingError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingField {
    HorizontalNoBorder,
    VerticalNoBorder,
    HorizontalWithBorder,
    VerticalWithBorder,
}

impl PaddingField {
    /// Declaration order; errors are reported in this order.
    pub const ALL: [Self; 4] = [
        Self::HorizontalNoBorder,
        Self::VerticalNoBorder,
        Self::HorizontalWithBorder,
        Self::VerticalWithBorder,
    ];

    /// Option name as accepted by the builder and the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HorizontalNoBorder => "padding_horizontal_no_border",
            Self::VerticalNoBorder => "padding_vertical_no_border",
            Self::HorizontalWithBorder => "padding_horizontal_with_border",
            Self::VerticalWithBorder => "padding_vertical_with_border",
        }
    }
}

impl fmt::Display for PaddingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single negative padding value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingError {
    pub field: PaddingField,
    pub value: i64,
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} value must be non-negative, {} provided",
            self.field, self.value
        )
    }
}

impl std::error::Error for PaddingError {}

/// Every negative padding value found in one validation pass.
///
/// Never empty when returned as an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingErrors(pub Vec<PaddingError>);

impl PaddingErrors {
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &PaddingError> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fields that failed, in declaration order.
    pub fn fields(&self) -> Vec<PaddingField> {
        self.0.iter().map(|e| e.field).collect()
    }
}

impl fmt::Display for PaddingErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid option(s) provided")?;
        for (i, err) in self.0.iter().enumerate() {
            f.write_str(if i == 0 { ": " } else { "; " })?;
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for PaddingErrors {}

/// Which alignment option an [`OptionsError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlignField {
    Align,
    AlignHeader,
    AlignBody,
}

impl AlignField {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Align => "align",
            Self::AlignHeader => "align_header",
            Self::AlignBody => "align_body",
        }
    }
}

impl fmt::Display for AlignField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Shape of an alignment specification, for error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignShape {
    /// A per-column list of this length.
    Columns(usize),
    /// A per-cell matrix; `cols` is the width of the first offending row.
    Matrix { rows: usize, cols: usize },
}

impl fmt::Display for AlignShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Columns(n) => write!(f, "{n} column(s)"),
            Self::Matrix { rows, cols } => write!(f, "{rows}x{cols} cells"),
        }
    }
}

/// An option that does not fit the grid it is applied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionsError {
    AlignmentShape {
        field: AlignField,
        expected: AlignShape,
        found: AlignShape,
    },
}

impl fmt::Display for OptionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlignmentShape {
                field,
                expected,
                found,
            } => write!(
                f,
                "invalid option: {field} must cover {expected}, {found} provided"
            ),
        }
    }
}

impl std::error::Error for OptionsError {}

/// Top-level error type for tablerone.
#[derive(Debug)]
pub enum Error {
    /// Malformed or unknown border style.
    Style(StyleError),
    /// Malformed grid or merge directives.
    Table(TableError),
    /// Alignment that does not match the grid.
    Options(OptionsError),
    /// One or more negative padding values.
    Padding(PaddingErrors),
    /// Layout produced a box too small for its content. Indicates a bug.
    Internal(BlockOverflow),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Style(err) => write!(f, "{err}"),
            Self::Table(err) => write!(f, "{err}"),
            Self::Options(err) => write!(f, "{err}"),
            Self::Padding(err) => write!(f, "{err}"),
            Self::Internal(err) => write!(f, "internal layout error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Style(err) => Some(err),
            Self::Table(err) => Some(err),
            Self::Options(err) => Some(err),
            Self::Padding(err) => Some(err),
            Self::Internal(err) => Some(err),
        }
    }
}

impl From<StyleError> for Error {
    fn from(err: StyleError) -> Self {
        Self::Style(err)
    }
}

impl From<TableError> for Error {
    fn from(err: TableError) -> Self {
        Self::Table(err)
    }
}

impl From<OptionsError> for Error {
    fn from(err: OptionsError) -> Self {
        Self::Options(err)
    }
}

impl From<PaddingErrors> for Error {
    fn from(err: PaddingErrors) -> Self {
        Self::Padding(err)
    }
}

impl From<BlockOverflow> for Error {
    fn from(err: BlockOverflow) -> Self {
        Self::Internal(err)
    }
}

/// Standard result type for tablerone APIs.
pub type Result<T> = std::result::Result<T, Error>;
