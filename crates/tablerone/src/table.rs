#![forbid(unsafe_code)]

//! Builder for one-off rendering.
//!
//! Every option has its own setter. A complete [`Options`] value passed to
//! [`Table::options`] takes precedence over all of them.

use tablerone_core::Grid;
use tablerone_style::StyleSet;

use crate::error::{PaddingErrors, Result};
use crate::markdown::render_markdown;
use crate::options::{AlignSpec, Options, Padding, Separators};
use crate::unicode::render;

/// A grid plus everything needed to render it.
#[derive(Debug, Clone)]
pub struct Table {
    grid: Grid,
    style: StyleSet,
    padding: [i64; 4],
    separators: Separators,
    outer_border: bool,
    align: AlignSpec,
    align_header: Option<AlignSpec>,
    align_body: Option<AlignSpec>,
    options: Option<Options>,
}

impl Table {
    /// Wrap a grid with default options and the double-line style.
    pub fn new(grid: Grid) -> Self {
        let defaults = Options::default();
        let p = defaults.padding;
        Self {
            grid,
            style: StyleSet::default(),
            padding: [
                p.horizontal_no_border,
                p.vertical_no_border,
                p.horizontal_with_border,
                p.vertical_with_border,
            ]
            .map(|v| i64::try_from(v).unwrap_or(i64::MAX)),
            separators: defaults.separators,
            outer_border: defaults.outer_border,
            align: defaults.align,
            align_header: defaults.align_header,
            align_body: defaults.align_body,
            options: None,
        }
    }

    /// The wrapped grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Border glyphs (default [`StyleSet::DOUBLE`]).
    #[must_use]
    pub fn style(mut self, style: StyleSet) -> Self {
        self.style = style;
        self
    }

    /// Use `options` as is, ignoring every other option setter.
    #[must_use]
    pub fn options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Spaces between columns with no separator (default 1).
    #[must_use]
    pub fn padding_horizontal_no_border(mut self, value: i64) -> Self {
        self.padding[0] = value;
        self
    }

    /// Blank lines between rows with no separator (default 1).
    #[must_use]
    pub fn padding_vertical_no_border(mut self, value: i64) -> Self {
        self.padding[1] = value;
        self
    }

    /// Spaces beside each vertical rule (default 1).
    #[must_use]
    pub fn padding_horizontal_with_border(mut self, value: i64) -> Self {
        self.padding[2] = value;
        self
    }

    /// Blank lines beside each horizontal rule (default 0).
    #[must_use]
    pub fn padding_vertical_with_border(mut self, value: i64) -> Self {
        self.padding[3] = value;
        self
    }

    /// Line after the first column.
    #[must_use]
    pub fn left_col_separator(mut self, on: bool) -> Self {
        self.separators.left_col = on;
        self
    }

    /// Line before the last column.
    #[must_use]
    pub fn right_col_separator(mut self, on: bool) -> Self {
        self.separators.right_col = on;
        self
    }

    /// Line under the header row.
    #[must_use]
    pub fn top_row_separator(mut self, on: bool) -> Self {
        self.separators.top_row = on;
        self
    }

    /// Line above the last row.
    #[must_use]
    pub fn bottom_row_separator(mut self, on: bool) -> Self {
        self.separators.bottom_row = on;
        self
    }

    /// Line between every pair of columns.
    #[must_use]
    pub fn vertical_separator(mut self, on: bool) -> Self {
        self.separators.vertical = on;
        self
    }

    /// Line between every pair of rows.
    #[must_use]
    pub fn horizontal_separator(mut self, on: bool) -> Self {
        self.separators.horizontal = on;
        self
    }

    /// Frame around the whole table (default on).
    #[must_use]
    pub fn outer_border(mut self, on: bool) -> Self {
        self.outer_border = on;
        self
    }

    /// Alignment for every cell without a header or body override.
    #[must_use]
    pub fn align(mut self, spec: impl Into<AlignSpec>) -> Self {
        self.align = spec.into();
        self
    }

    /// Alignment for the header row.
    #[must_use]
    pub fn align_header(mut self, spec: impl Into<AlignSpec>) -> Self {
        self.align_header = Some(spec.into());
        self
    }

    /// Alignment for rows after the header, indexed from the first body row.
    #[must_use]
    pub fn align_body(mut self, spec: impl Into<AlignSpec>) -> Self {
        self.align_body = Some(spec.into());
        self
    }

    /// The effective options, after padding validation.
    pub fn resolved_options(&self) -> std::result::Result<Options, PaddingErrors> {
        if let Some(options) = &self.options {
            return Ok(options.clone());
        }
        Ok(Options {
            padding: Padding::from_signed(self.padding)?,
            separators: self.separators,
            outer_border: self.outer_border,
            align: self.align.clone(),
            align_header: self.align_header.clone(),
            align_body: self.align_body.clone(),
        })
    }

    /// Render as a box-drawn table.
    pub fn render(&self) -> Result<String> {
        let options = self.resolved_options()?;
        render(&self.grid, &self.style, &options)
    }

    /// Render as a markdown table.
    pub fn to_markdown(&self) -> Result<String> {
        let options = self.resolved_options()?;
        render_markdown(&self.grid, &options)
    }
}
