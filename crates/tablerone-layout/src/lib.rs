#![forbid(unsafe_code)]

//! Layout for tablerone.
//!
//! Two steps turn a [`Grid`](tablerone_core::Grid) into geometry:
//!
//! - [`resolve_spans`] walks merge directives and partitions the grid into
//!   rectangular spans, one per content cell.
//! - [`compute_layout`] sizes every column and row so each span's content
//!   fits the box its tracks (and the boundaries between them) add up to.
//!
//! # Example
//! ```
//! use tablerone_core::{Cell, Direction, Grid};
//! use tablerone_layout::{Boundary, compute_layout, resolve_spans};
//! use tablerone_text::measure;
//!
//! let grid = Grid::new(vec![
//!     vec![Cell::from("wide header"), Cell::from(Direction::Left)],
//!     vec![Cell::from("a"), Cell::from("b")],
//! ])
//! .unwrap();
//! let spans = resolve_spans(&grid).unwrap();
//! assert_eq!(spans.len(), 3);
//!
//! let sizes: Vec<_> = spans.iter().map(|m| measure(spans.content(&grid, m))).collect();
//! let layout = compute_layout(
//!     &spans,
//!     &sizes,
//!     vec![Boundary::Open, Boundary::Gap(1), Boundary::Open],
//!     vec![Boundary::Open, Boundary::Gap(0), Boundary::Open],
//! );
//! // "a" and "b" plus the one-cell gap must hold the 11-cell header.
//! assert_eq!(layout.columns.sizes(), &[5, 5]);
//! ```

pub mod merge;
pub mod sizing;

pub use merge::{MergedCell, SpanMap, resolve_spans};
pub use sizing::{AxisLayout, AxisSlot, Boundary, Layout, compute_layout, distribute_deficit};
