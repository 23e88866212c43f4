#![forbid(unsafe_code)]

//! Border and separator painting.
//!
//! Which boundaries carry a line is decided once per axis from [`Options`].
//! Painting then walks every canvas position, classifies it by what sits
//! there on each axis, and picks a glyph. Line segments that would cross the
//! inside of a merged span are dropped, and the intersections around them
//! lose the matching arm.

use tablerone_layout::{AxisSlot, Boundary, Layout, SpanMap};
use tablerone_style::{Arms, StyleSet};

use crate::canvas::Canvas;
use crate::options::Options;

/// Column boundaries for a table `cols` wide.
pub(crate) fn column_boundaries(options: &Options, cols: usize) -> Vec<Boundary> {
    let padding = options.padding;
    boundaries(
        cols,
        options.outer_border,
        |b| options.separators.column_rule(b, cols),
        padding.horizontal_with_border,
        padding.horizontal_no_border,
    )
}

/// Row boundaries for a table `rows` tall.
pub(crate) fn row_boundaries(options: &Options, rows: usize) -> Vec<Boundary> {
    let padding = options.padding;
    boundaries(
        rows,
        options.outer_border,
        |b| options.separators.row_rule(b, rows),
        padding.vertical_with_border,
        padding.vertical_no_border,
    )
}

fn boundaries(
    tracks: usize,
    outer_border: bool,
    ruled: impl Fn(usize) -> bool,
    with_border: usize,
    no_border: usize,
) -> Vec<Boundary> {
    (0..=tracks)
        .map(|b| {
            if b == 0 || b == tracks {
                if outer_border {
                    Boundary::Rule {
                        padding: with_border,
                    }
                } else {
                    Boundary::Open
                }
            } else if ruled(b) {
                Boundary::Rule {
                    padding: with_border,
                }
            } else {
                Boundary::Gap(no_border)
            }
        })
        .collect()
}

/// Paints lines and junctions for one laid-out table.
pub(crate) struct BorderPainter<'a> {
    style: &'a StyleSet,
    spans: &'a SpanMap,
    layout: &'a Layout,
}

impl<'a> BorderPainter<'a> {
    pub(crate) fn new(style: &'a StyleSet, spans: &'a SpanMap, layout: &'a Layout) -> Self {
        Self {
            style,
            spans,
            layout,
        }
    }

    /// Whether the vertical line on column boundary `cb` is drawn beside
    /// row `r`.
    fn vertical_segment(&self, r: usize, cb: usize) -> bool {
        self.layout.columns.is_edge(cb) || !self.spans.same_span((r, cb - 1), (r, cb))
    }

    /// Whether the horizontal line on row boundary `rb` is drawn beside
    /// column `c`.
    fn horizontal_segment(&self, rb: usize, c: usize) -> bool {
        self.layout.rows.is_edge(rb) || !self.spans.same_span((rb - 1, c), (rb, c))
    }

    fn arms(&self, rb: usize, cb: usize) -> Arms {
        let rows = self.layout.rows.len();
        let cols = self.layout.columns.len();
        Arms::from_sides(
            rb > 0 && self.vertical_segment(rb - 1, cb),
            rb < rows && self.vertical_segment(rb, cb),
            cb > 0 && self.horizontal_segment(rb, cb - 1),
            cb < cols && self.horizontal_segment(rb, cb),
        )
    }

    fn glyph_at(&self, y: AxisSlot, x: AxisSlot) -> Option<char> {
        let style = self.style;
        match (y, x) {
            (AxisSlot::Track(r), AxisSlot::Rule(cb)) => {
                self.vertical_segment(r, cb).then_some(style.vertical)
            }
            (AxisSlot::Rule(rb), AxisSlot::Track(c)) => {
                self.horizontal_segment(rb, c).then_some(style.horizontal)
            }
            (AxisSlot::Rule(rb), AxisSlot::Rule(cb)) => Some(style.junction(self.arms(rb, cb))),
            // A vertical line passing through an unruled row gap.
            (AxisSlot::Gap(rb), AxisSlot::Rule(cb)) => (self.vertical_segment(rb - 1, cb)
                && self.vertical_segment(rb, cb))
            .then_some(style.vertical),
            (AxisSlot::Rule(rb), AxisSlot::Gap(cb)) => (self.horizontal_segment(rb, cb - 1)
                && self.horizontal_segment(rb, cb))
            .then_some(style.horizontal),
            _ => None,
        }
    }

    /// Draw every line glyph onto `canvas`.
    pub(crate) fn paint(&self, canvas: &mut Canvas) {
        for (y, &ys) in self.layout.rows.slots().iter().enumerate() {
            for (x, &xs) in self.layout.columns.slots().iter().enumerate() {
                if let Some(ch) = self.glyph_at(ys, xs) {
                    canvas.put_glyph(x, y, ch);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Separators;

    #[test]
    fn default_options_rule_only_the_edges() {
        let o = Options::default();
        assert_eq!(
            column_boundaries(&o, 2),
            vec![
                Boundary::Rule { padding: 1 },
                Boundary::Gap(1),
                Boundary::Rule { padding: 1 }
            ]
        );
        assert_eq!(
            row_boundaries(&o, 2),
            vec![
                Boundary::Rule { padding: 0 },
                Boundary::Gap(1),
                Boundary::Rule { padding: 0 }
            ]
        );
    }

    #[test]
    fn no_outer_border_opens_the_edges() {
        let o = Options {
            outer_border: false,
            separators: Separators {
                vertical: true,
                ..Separators::default()
            },
            ..Options::default()
        };
        assert_eq!(
            column_boundaries(&o, 3),
            vec![
                Boundary::Open,
                Boundary::Rule { padding: 1 },
                Boundary::Rule { padding: 1 },
                Boundary::Open
            ]
        );
        assert_eq!(row_boundaries(&o, 1), vec![Boundary::Open, Boundary::Open]);
    }

    #[test]
    fn empty_axis_has_one_boundary() {
        assert_eq!(column_boundaries(&Options::default(), 0).len(), 1);
    }
}
