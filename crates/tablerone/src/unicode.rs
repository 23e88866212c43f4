#![forbid(unsafe_code)]

//! Box-drawing output.

use tablerone_core::Grid;
use tablerone_layout::{compute_layout, resolve_spans};
use tablerone_style::StyleSet;
use tablerone_text::{BlockSize, measure, render_block};

use crate::border::{BorderPainter, column_boundaries, row_boundaries};
use crate::canvas::Canvas;
use crate::error::Result;
use crate::options::Options;

/// Render `grid` as a box-drawn table.
///
/// Lines are joined with `\n` with no trailing newline. Every line has the
/// same display width.
pub fn render(grid: &Grid, style: &StyleSet, options: &Options) -> Result<String> {
    let _span = tablerone_core::debug_span!(
        "render",
        mode = "unicode",
        rows = grid.rows(),
        cols = grid.cols()
    )
    .entered();

    options.validate(grid.rows(), grid.cols())?;
    let spans = resolve_spans(grid)?;
    if grid.is_empty() {
        return Ok(String::new());
    }

    let natural: Vec<BlockSize> = spans
        .iter()
        .map(|merged| measure(spans.content(grid, merged)))
        .collect();
    let layout = compute_layout(
        &spans,
        &natural,
        column_boundaries(options, grid.cols()),
        row_boundaries(options, grid.rows()),
    );
    tablerone_core::debug!(
        width = layout.columns.total(),
        height = layout.rows.total(),
        spans = spans.len(),
        "laid out table"
    );

    let mut canvas = Canvas::new(layout.columns.total(), layout.rows.total());
    BorderPainter::new(style, &spans, &layout).paint(&mut canvas);

    for merged in spans.iter() {
        let span = merged.span;
        let (x, width) = layout.columns.extent_box(span.col, span.width);
        let (y, height) = layout.rows.extent_box(span.row, span.height);
        let alignment = options.alignment_at(span.row, span.col);
        let block = render_block(spans.content(grid, merged), width, height, alignment)?;
        for (dy, line) in block.into_iter().enumerate() {
            canvas.put_text(x, y + dy, width, line);
        }
    }

    Ok(canvas.into_lines().join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::options::{AlignSpec, Padding, Separators};
    use tablerone_core::{Alignment, Cell, Direction, TableError};

    fn grid(rows: Vec<Vec<Cell>>) -> Grid {
        Grid::new(rows).unwrap()
    }

    fn numbers() -> Grid {
        grid(vec![
            vec![1.into(), 2.into()],
            vec![3.into(), 4.into()],
        ])
    }

    #[test]
    fn default_two_by_two() {
        let out = render(&numbers(), &StyleSet::DOUBLE, &Options::default()).unwrap();
        assert_eq!(out, "╔═════╗\n║ 1 2 ║\n║     ║\n║ 3 4 ║\n╚═════╝");
    }

    #[test]
    fn all_separators() {
        let o = Options {
            separators: Separators::ALL,
            ..Options::default()
        };
        let out = render(&numbers(), &StyleSet::DOUBLE, &o).unwrap();
        assert_eq!(
            out,
            "╔═══╦═══╗\n║ 1 ║ 2 ║\n╠═══╬═══╣\n║ 3 ║ 4 ║\n╚═══╩═══╝"
        );
    }

    #[test]
    fn single_cell_round_trip() {
        let out = render(&grid(vec![vec!["x".into()]]), &StyleSet::DOUBLE, &Options::default())
            .unwrap();
        assert_eq!(out, "╔═══╗\n║ x ║\n╚═══╝");

        let bare = Options {
            outer_border: false,
            ..Options::default()
        };
        let out = render(&grid(vec![vec!["x".into()]]), &StyleSet::DOUBLE, &bare).unwrap();
        assert_eq!(out, "x");
    }

    #[test]
    fn merged_header_absorbs_separator() {
        let g = grid(vec![
            vec!["ab".into(), Direction::Left.into()],
            vec![1.into(), 2.into()],
        ]);
        let o = Options {
            separators: Separators::ALL,
            ..Options::default()
        };
        let out = render(&g, &StyleSet::THIN, &o).unwrap();
        assert_eq!(
            out,
            "┌───────┐\n│   ab  │\n├───┬───┤\n│ 1 │ 2 │\n└───┴───┘"
        );
    }

    #[test]
    fn vertical_merge_absorbs_row_separator() {
        let g = grid(vec![
            vec!["a".into(), "b".into()],
            vec![Direction::Up.into(), "c".into()],
        ]);
        let o = Options {
            separators: Separators::ALL,
            align: AlignSpec::Single(Alignment::TopLeft),
            ..Options::default()
        };
        let out = render(&g, &StyleSet::THIN, &o).unwrap();
        assert_eq!(
            out,
            "┌───┬───┐\n│ a │ b │\n│   ├───┤\n│   │ c │\n└───┴───┘"
        );
    }

    #[test]
    fn right_alignment_only_moves_content() {
        let g = grid(vec![vec!["wide".into()], vec!["x".into()]]);
        let center = render(&g, &StyleSet::DOUBLE, &Options::default()).unwrap();
        let right = render(
            &g,
            &StyleSet::DOUBLE,
            &Options {
                align: AlignSpec::Single(Alignment::RIGHT),
                ..Options::default()
            },
        )
        .unwrap();
        assert_ne!(center, right);
        assert_eq!(center.lines().count(), right.lines().count());
        assert!(right.contains("║    x ║"));
        assert!(center.contains("║   x  ║"));
    }

    #[test]
    fn zero_padding_is_tight() {
        let o = Options {
            padding: Padding {
                horizontal_no_border: 0,
                vertical_no_border: 0,
                horizontal_with_border: 0,
                vertical_with_border: 0,
            },
            ..Options::default()
        };
        let out = render(&numbers(), &StyleSet::ASCII, &o).unwrap();
        assert_eq!(out, "+--+\n|12|\n|34|\n+--+");
    }

    #[test]
    fn multiline_content() {
        let g = grid(vec![vec!["a\nbb".into(), "c".into()]]);
        let o = Options {
            align: AlignSpec::Single(Alignment::TopLeft),
            ..Options::default()
        };
        let out = render(&g, &StyleSet::THIN, &o).unwrap();
        assert_eq!(out, "┌──────┐\n│ a  c │\n│ bb   │\n└──────┘");
    }

    #[test]
    fn empty_grid_is_empty_string() {
        let g = Grid::new(Vec::<Vec<Cell>>::new()).unwrap();
        assert_eq!(render(&g, &StyleSet::DOUBLE, &Options::default()).unwrap(), "");
    }

    #[test]
    fn merge_errors_surface() {
        let g = grid(vec![vec![Direction::Left.into(), "a".into()]]);
        let err = render(&g, &StyleSet::DOUBLE, &Options::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::Table(TableError::MergeOffGrid { row: 0, col: 0, .. })
        ));
    }
}
