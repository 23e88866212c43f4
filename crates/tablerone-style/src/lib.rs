#![forbid(unsafe_code)]

//! Border styles for tablerone.
//!
//! A [`StyleSet`] is eleven glyphs: four corners, the two straight edges and
//! five junctions. [`Arms`] describes which lines meet at an intersection and
//! [`StyleSet::junction`] picks the glyph that draws them.

pub mod arms;
pub mod style_set;

pub use arms::Arms;
pub use style_set::{GLYPH_COUNT, StyleError, StyleSet};
