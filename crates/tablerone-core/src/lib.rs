#![forbid(unsafe_code)]

//! Core: the cell model, grids, resolved spans, alignment and table errors.
//!
//! Everything here is plain data. Merge resolution and sizing live in
//! `tablerone-layout`; drawing lives in `tablerone`.

pub mod alignment;
pub mod cell;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod logging;

pub use alignment::{Alignment, HorizontalAlignment, ParseAlignmentError, VerticalAlignment};
pub use cell::{Cell, DisplayContent, Direction};
pub use error::TableError;
pub use geometry::{Axis, Span};
pub use grid::Grid;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, trace_span, warn};
