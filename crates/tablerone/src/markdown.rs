#![forbid(unsafe_code)]

//! GitHub-flavored markdown output.
//!
//! Markdown tables cannot merge cells, so any merge directive is an error.
//! Padding, separators and border style have no meaning here and are
//! ignored; only alignment carries over, through the delimiter row.

use tablerone_core::{Grid, HorizontalAlignment, TableError};
use tablerone_text::{align_line, display_width};

use crate::error::Result;
use crate::options::Options;

/// Narrowest column the delimiter row can express every alignment in.
const MIN_COLUMN_WIDTH: usize = 3;

/// Escape content for a single markdown cell.
///
/// Backslashes are doubled first so a literal `\|` cannot unescape the pipe.
fn escape(content: &str) -> String {
    content
        .replace('\\', "\\\\")
        .replace('|', "\\|")
        .replace("\r\n", "<br>")
        .replace('\n', "<br>")
}

fn delimiter(width: usize, alignment: HorizontalAlignment) -> String {
    match alignment {
        HorizontalAlignment::Left => format!(":{}", "-".repeat(width - 1)),
        HorizontalAlignment::Center => format!(":{}:", "-".repeat(width - 2)),
        HorizontalAlignment::Right => format!("{}:", "-".repeat(width - 1)),
    }
}

fn write_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    out.push('|');
    for cell in cells {
        out.push(' ');
        out.push_str(cell);
        out.push_str(" |");
    }
}

/// Render `grid` as a markdown table.
///
/// Row 0 is the header. Column alignment comes from the first body row, or
/// from the header when there is no body.
pub fn render_markdown(grid: &Grid, options: &Options) -> Result<String> {
    let _span = tablerone_core::debug_span!(
        "render",
        mode = "markdown",
        rows = grid.rows(),
        cols = grid.cols()
    )
    .entered();

    if let Some((row, col)) = grid.first_merge() {
        return Err(TableError::MergeInMarkdown { row, col }.into());
    }
    options.validate(grid.rows(), grid.cols())?;
    if grid.is_empty() {
        return Ok(String::new());
    }

    let escaped: Vec<Vec<String>> = grid
        .iter_rows()
        .map(|row| {
            row.iter()
                .map(|cell| escape(cell.as_content().unwrap_or_default()))
                .collect()
        })
        .collect();

    let widths: Vec<usize> = (0..grid.cols())
        .map(|c| {
            escaped
                .iter()
                .map(|row| display_width(&row[c]))
                .fold(MIN_COLUMN_WIDTH, usize::max)
        })
        .collect();

    let alignment_row = usize::from(grid.rows() > 1);
    let alignments: Vec<HorizontalAlignment> = (0..grid.cols())
        .map(|c| options.alignment_at(alignment_row, c).horizontal())
        .collect();
    tablerone_core::trace!(?widths, ?alignments, "markdown columns");

    let padded: Vec<Vec<String>> = escaped
        .iter()
        .map(|row| {
            row.iter()
                .zip(widths.iter().zip(&alignments))
                .map(|(cell, (&width, &alignment))| {
                    align_line(cell, width, alignment).unwrap_or_else(|| cell.clone())
                })
                .collect()
        })
        .collect();

    let rule: Vec<String> = widths
        .iter()
        .zip(&alignments)
        .map(|(&width, &alignment)| delimiter(width, alignment))
        .collect();

    let mut out = String::new();
    for (i, row) in padded.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_row(&mut out, row.iter().map(String::as_str));
        if i == 0 {
            out.push('\n');
            write_row(&mut out, rule.iter().map(String::as_str));
        }
    }
    Ok(out)
}
