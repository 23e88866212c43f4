#![forbid(unsafe_code)]

//! tablerone: text tables with merged cells.
//!
//! A [`Grid`] of cells is rendered either as a Unicode box-drawn table or as
//! a markdown table. Cells can merge into a neighbour in any direction;
//! merged regions become one rectangular span whose content is laid out
//! across every column and row it covers, with the separators inside it
//! removed.
//!
//! # Example
//! ```
//! use tablerone::prelude::*;
//!
//! let grid = Grid::new(vec![
//!     vec![Cell::from("name"), Cell::from(Direction::Left)],
//!     vec![Cell::from("a"), Cell::from(1)],
//! ])?;
//! let out = Table::new(grid)
//!     .style(StyleSet::THIN)
//!     .vertical_separator(true)
//!     .horizontal_separator(true)
//!     .render()?;
//! assert_eq!(out, "┌───────┐\n│  name │\n├───┬───┤\n│ a │ 1 │\n└───┴───┘");
//! # Ok::<(), tablerone::Error>(())
//! ```

mod border;
mod canvas;
pub mod error;
pub mod markdown;
pub mod options;
pub mod table;
pub mod unicode;

pub use error::{
    AlignField, AlignShape, Error, OptionsError, PaddingError, PaddingErrors, PaddingField, Result,
};
pub use markdown::render_markdown;
pub use options::{AlignSpec, Options, Padding, Separators};
pub use table::Table;
pub use unicode::render;

pub use tablerone_core::{
    Alignment, Cell, Direction, DisplayContent, Grid, HorizontalAlignment, Span, TableError,
    VerticalAlignment,
};
pub use tablerone_style::{GLYPH_COUNT, StyleError, StyleSet};

pub mod prelude {
    pub use crate::{
        AlignSpec, Alignment, Cell, Direction, Error, Grid, Options, Result, StyleSet, Table,
        render, render_markdown,
    };
}
