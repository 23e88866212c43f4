#![forbid(unsafe_code)]

//! Merge resolution.
//!
//! Every merge directive names the neighbour it borrows content from.
//! Following those links from any directive must end at a content cell; the
//! content cell and every directive that reaches it form one span, and that
//! span must be a filled rectangle.
//!
//! Resolution is a pure function of the grid. Errors are reported in a fixed
//! order (off-grid links first, then dangling links, then shapes), each at the
//! first offending position in row-major order.

use tablerone_core::{Cell, Grid, Span, TableError};

/// One resolved span and the position of the content cell that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MergedCell {
    /// Covered rectangle.
    pub span: Span,
    /// Position `(row, col)` of the content cell inside `span`.
    pub origin: (usize, usize),
}

/// The partition of a grid into spans.
///
/// Spans are ordered by their top-left corner in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpanMap {
    rows: usize,
    cols: usize,
    cells: Vec<MergedCell>,
    /// Span index for each grid position, row-major.
    owner: Vec<usize>,
}

impl SpanMap {
    /// Number of grid rows.
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns.
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether there are no spans (empty grid).
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate spans in row-major order of their top-left corners.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &MergedCell> {
        self.cells.iter()
    }

    /// Span by index.
    pub fn get(&self, index: usize) -> Option<&MergedCell> {
        self.cells.get(index)
    }

    /// Index of the span covering `(row, col)`.
    pub fn owner(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            self.owner.get(row * self.cols + col).copied()
        } else {
            None
        }
    }

    /// Whether both positions belong to the same span.
    ///
    /// Out-of-bounds positions never share a span.
    pub fn same_span(&self, a: (usize, usize), b: (usize, usize)) -> bool {
        match (self.owner(a.0, a.1), self.owner(b.0, b.1)) {
            (Some(x), Some(y)) => x == y,
            _ => false,
        }
    }

    /// Text of the content cell that fills `merged`.
    pub fn content<'g>(&self, grid: &'g Grid, merged: &MergedCell) -> &'g str {
        grid.get(merged.origin.0, merged.origin.1)
            .and_then(Cell::as_content)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Link {
    Unvisited,
    Walking,
    Root(usize),
    Dead,
}

/// Step from `(row, col)` one cell in the directive's direction.
fn target(grid: &Grid, row: usize, col: usize, cell: &Cell) -> Option<(usize, usize)> {
    let (dr, dc) = cell.as_merge()?.delta();
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < grid.rows() && c < grid.cols()).then_some((r, c))
}

/// Partition `grid` into rectangular spans.
///
/// A grid without merge directives yields one 1×1 span per position.
pub fn resolve_spans(grid: &Grid) -> Result<SpanMap, TableError> {
    let _span = tablerone_core::debug_span!("resolve_spans", rows = grid.rows(), cols = grid.cols())
        .entered();

    let (rows, cols) = (grid.rows(), grid.cols());
    if grid.is_empty() {
        return Ok(SpanMap {
            rows,
            cols,
            ..SpanMap::default()
        });
    }

    for (row, col, cell) in grid.positions() {
        let Some(direction) = cell.as_merge() else {
            continue;
        };
        if target(grid, row, col, cell).is_none() {
            return Err(TableError::MergeOffGrid {
                row,
                col,
                direction,
            });
        }
    }

    // Follow each chain of directives to its content cell. Positions on a
    // chain that loops back on itself are dead.
    let index = |r: usize, c: usize| r * cols + c;
    let mut links = vec![Link::Unvisited; rows * cols];
    let mut path = Vec::new();
    for (row, col, _) in grid.positions() {
        let mut pos = (row, col);
        let resolved = loop {
            let i = index(pos.0, pos.1);
            match links[i] {
                Link::Root(root) => break Link::Root(root),
                Link::Dead | Link::Walking => break Link::Dead,
                Link::Unvisited => {}
            }
            let Some(cell) = grid.get(pos.0, pos.1) else {
                break Link::Dead;
            };
            if !cell.is_merge() {
                links[i] = Link::Root(i);
                break Link::Root(i);
            }
            links[i] = Link::Walking;
            path.push(i);
            match target(grid, pos.0, pos.1, cell) {
                Some(next) => pos = next,
                None => break Link::Dead,
            }
        };
        for i in path.drain(..) {
            links[i] = resolved;
        }
    }

    let dangling = grid.positions().find_map(|(row, col, cell)| {
        let direction = cell.as_merge()?;
        (links[index(row, col)] == Link::Dead).then_some((row, col, direction))
    });
    if let Some((row, col, direction)) = dangling {
        tablerone_core::debug!(row, col, "dangling merge directive");
        return Err(TableError::DanglingMerge {
            row,
            col,
            direction,
        });
    }

    // Bounding box of each root's members.
    let mut boxes: Vec<Option<(usize, usize, usize, usize, usize)>> = vec![None; rows * cols];
    for (row, col, _) in grid.positions() {
        let Link::Root(root) = links[index(row, col)] else {
            continue;
        };
        let entry = boxes[root].get_or_insert((row, col, row, col, 0));
        entry.0 = entry.0.min(row);
        entry.1 = entry.1.min(col);
        entry.2 = entry.2.max(row);
        entry.3 = entry.3.max(col);
        entry.4 += 1;
    }

    let mut cells = Vec::new();
    let mut span_of_root = vec![usize::MAX; rows * cols];
    for (root, bbox) in boxes.iter().enumerate() {
        let Some((top, left, bottom, right, members)) = *bbox else {
            continue;
        };
        let span = Span::new(top, left, bottom - top + 1, right - left + 1);
        if span.area() != members {
            let hole = (span.row..span.bottom())
                .flat_map(|r| (span.col..span.right()).map(move |c| (r, c)))
                .find(|&(r, c)| links[index(r, c)] != Link::Root(root))
                .unwrap_or((span.row, span.col));
            return Err(TableError::NonRectangularMerge {
                row: hole.0,
                col: hole.1,
            });
        }
        span_of_root[root] = cells.len();
        cells.push(MergedCell {
            span,
            origin: (root / cols, root % cols),
        });
    }

    // Roots were visited in row-major order of the content cell; re-sort by
    // top-left corner and remap.
    let mut order: Vec<usize> = (0..cells.len()).collect();
    order.sort_by_key(|&i| (cells[i].span.row, cells[i].span.col));
    let mut rank = vec![0; cells.len()];
    for (new, &old) in order.iter().enumerate() {
        rank[old] = new;
    }
    let cells: Vec<MergedCell> = order.iter().map(|&i| cells[i]).collect();

    let owner = (0..rows * cols)
        .map(|i| match links[i] {
            Link::Root(root) => rank[span_of_root[root]],
            _ => 0,
        })
        .collect();

    tablerone_core::trace!(spans = cells.len(), "resolved spans");
    Ok(SpanMap {
        rows,
        cols,
        cells,
        owner,
    })
}
