#![forbid(unsafe_code)]

//! Track sizing.
//!
//! A table has two axes of tracks (columns and rows) separated by
//! boundaries. Each span asks its covered tracks, plus the interior boundaries
//! between them, for at least its content's natural size. Sizing starts from
//! the widest single-track occupant and then grows tracks under multi-track
//! spans, narrowest spans first, just enough to satisfy each one.

use tablerone_core::Axis;
use tablerone_text::BlockSize;

use crate::merge::SpanMap;

/// What separates two adjacent tracks, or a track from the table edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// Nothing at all. Only meaningful at the table edge.
    Open,
    /// Blank cells with no line drawn.
    Gap(usize),
    /// A drawn line with `padding` blank cells on each content side.
    Rule { padding: usize },
}

impl Boundary {
    /// Cells taken by this boundary between two tracks.
    pub const fn interior_width(self) -> usize {
        match self {
            Self::Open => 0,
            Self::Gap(width) => width,
            Self::Rule { padding } => 2 * padding + 1,
        }
    }

    /// Cells taken by this boundary at the table edge.
    pub const fn edge_width(self) -> usize {
        match self {
            Self::Open => 0,
            Self::Gap(width) => width,
            Self::Rule { padding } => padding + 1,
        }
    }

    /// Whether a line is drawn here.
    pub const fn is_rule(self) -> bool {
        matches!(self, Self::Rule { .. })
    }
}

/// What occupies one offset along an axis of the drawn table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisSlot {
    /// Content or padding belonging to a track.
    Track(usize),
    /// The line glyph of a ruled boundary.
    Rule(usize),
    /// Blank space of an unruled interior boundary.
    Gap(usize),
}

/// Sized tracks along one axis, with their boundaries and offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisLayout {
    sizes: Vec<usize>,
    boundaries: Vec<Boundary>,
    starts: Vec<usize>,
    slots: Vec<AxisSlot>,
}

impl AxisLayout {
    /// Lay out tracks of the given sizes between `boundaries`.
    ///
    /// `boundaries` holds one more entry than `sizes`: index `b` sits before
    /// track `b`, the last entry after the final track.
    pub fn new(sizes: Vec<usize>, boundaries: Vec<Boundary>) -> Self {
        debug_assert_eq!(boundaries.len(), sizes.len() + 1);
        let n = sizes.len();
        let mut starts = Vec::with_capacity(n);
        let mut slots = Vec::new();
        for (b, boundary) in boundaries.iter().enumerate() {
            let before = b.checked_sub(1);
            let after = (b < n).then_some(b);
            match *boundary {
                Boundary::Open => {}
                Boundary::Gap(width) => {
                    // An edge gap is dead space owned by its only neighbour.
                    let slot = match (before, after) {
                        (Some(_), Some(_)) => AxisSlot::Gap(b),
                        (Some(t), None) | (None, Some(t)) => AxisSlot::Track(t),
                        (None, None) => AxisSlot::Gap(b),
                    };
                    slots.extend(std::iter::repeat_n(slot, width));
                }
                Boundary::Rule { padding } => {
                    if let Some(t) = before {
                        slots.extend(std::iter::repeat_n(AxisSlot::Track(t), padding));
                    }
                    slots.push(AxisSlot::Rule(b));
                    if let Some(t) = after {
                        slots.extend(std::iter::repeat_n(AxisSlot::Track(t), padding));
                    }
                }
            }
            if let Some(t) = after {
                starts.push(slots.len());
                slots.extend(std::iter::repeat_n(AxisSlot::Track(t), sizes[t]));
            }
        }
        Self {
            sizes,
            boundaries,
            starts,
            slots,
        }
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    /// Whether there are no tracks.
    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Content size of each track.
    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Boundary `b` (0 = leading edge, `len()` = trailing edge).
    pub fn boundary(&self, b: usize) -> Option<Boundary> {
        self.boundaries.get(b).copied()
    }

    /// Whether boundary `b` is the leading or trailing edge.
    pub fn is_edge(&self, b: usize) -> bool {
        b == 0 || b == self.sizes.len()
    }

    /// Offset of track `t`'s first content cell.
    pub fn start(&self, t: usize) -> usize {
        self.starts[t]
    }

    /// Offset one past track `t`'s last content cell.
    pub fn end(&self, t: usize) -> usize {
        self.starts[t] + self.sizes[t]
    }

    /// Offset and length of the box covering `extent` tracks from `first`,
    /// interior boundaries included.
    pub fn extent_box(&self, first: usize, extent: usize) -> (usize, usize) {
        let start = self.start(first);
        (start, self.end(first + extent - 1) - start)
    }

    /// Total drawn length of the axis.
    pub fn total(&self) -> usize {
        self.slots.len()
    }

    /// What occupies each offset, in order.
    pub fn slots(&self) -> &[AxisSlot] {
        &self.slots
    }
}

/// Column and row layout of a table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub columns: AxisLayout,
    pub rows: AxisLayout,
}

/// Grow `tracks` by exactly `deficit` cells in total.
///
/// Shares are proportional to current sizes (even when all are zero).
/// Floored shares come first; leftover cells go one each to the largest
/// fractional remainders, ties to the lower index. No track shrinks.
pub fn distribute_deficit(tracks: &mut [usize], deficit: usize) {
    if tracks.is_empty() || deficit == 0 {
        return;
    }
    let total: usize = tracks.iter().sum();
    let weights: Vec<u128> = if total == 0 {
        vec![1; tracks.len()]
    } else {
        tracks.iter().map(|&t| t as u128).collect()
    };
    let weight_sum: u128 = weights.iter().sum();

    let mut given = 0;
    let mut remainders = Vec::with_capacity(tracks.len());
    for (i, (track, weight)) in tracks.iter_mut().zip(&weights).enumerate() {
        let scaled = deficit as u128 * weight;
        let share = (scaled / weight_sum) as usize;
        *track += share;
        given += share;
        remainders.push((scaled % weight_sum, i));
    }

    remainders.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    for &(_, i) in remainders.iter().take(deficit - given) {
        tracks[i] += 1;
    }
}

/// Size one axis: `needs` lists `(first track, extent, natural size)` per span.
fn size_axis(count: usize, boundaries: &[Boundary], needs: &[(usize, usize, usize)]) -> Vec<usize> {
    let mut sizes = vec![0; count];
    for &(first, _, need) in needs.iter().filter(|(_, extent, _)| *extent == 1) {
        sizes[first] = sizes[first].max(need);
    }

    let mut spanning: Vec<_> = needs.iter().filter(|(_, extent, _)| *extent > 1).collect();
    // Stable: equal extents keep row-major span order.
    spanning.sort_by_key(|(_, extent, _)| *extent);

    for &&(first, extent, need) in &spanning {
        let tracks = first..first + extent;
        let interior: usize = (first + 1..first + extent)
            .map(|b| boundaries[b].interior_width())
            .sum();
        let available: usize = sizes[tracks.clone()].iter().sum::<usize>() + interior;
        if need > available {
            distribute_deficit(&mut sizes[tracks], need - available);
        }
    }
    sizes
}

/// Size every column and row of `spans`.
///
/// `natural` holds each span's content size, in span order. Boundaries are
/// given per axis, one more than the track count.
pub fn compute_layout(
    spans: &SpanMap,
    natural: &[BlockSize],
    column_boundaries: Vec<Boundary>,
    row_boundaries: Vec<Boundary>,
) -> Layout {
    debug_assert_eq!(natural.len(), spans.len());

    let needs = |axis: Axis| -> Vec<(usize, usize, usize)> {
        spans
            .iter()
            .zip(natural)
            .map(|(merged, size)| {
                let need = match axis {
                    Axis::Columns => size.width,
                    Axis::Rows => size.height,
                };
                (merged.span.start(axis), merged.span.extent(axis), need)
            })
            .collect()
    };

    let widths = size_axis(spans.cols(), &column_boundaries, &needs(Axis::Columns));
    let heights = size_axis(spans.rows(), &row_boundaries, &needs(Axis::Rows));
    tablerone_core::trace!(?widths, ?heights, "sized tracks");

    Layout {
        columns: AxisLayout::new(widths, column_boundaries),
        rows: AxisLayout::new(heights, row_boundaries),
    }
}
