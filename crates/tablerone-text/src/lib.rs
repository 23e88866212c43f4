#![forbid(unsafe_code)]

//! Text handling for tablerone.
//!
//! - [`display_width`] - terminal cell width of a string
//! - [`split_lines`] / [`measure`] - the natural block size of cell content
//! - [`render_block`] - fit content into an exact width × height box
//!
//! # Example
//! ```
//! use tablerone_core::Alignment;
//! use tablerone_text::{BlockSize, measure, render_block};
//!
//! assert_eq!(measure("ab\n中文"), BlockSize::new(4, 2));
//!
//! let lines = render_block("ab", 4, 3, Alignment::BottomRight).unwrap();
//! assert_eq!(lines, vec!["    ", "    ", "  ab"]);
//! ```

pub mod block;
pub mod width;

pub use block::{BlockOverflow, align_line, render_block, vertical_slack};
pub use width::{BlockSize, display_width, grapheme_width, is_ascii_only, measure, split_lines};
