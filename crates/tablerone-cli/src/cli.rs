#![forbid(unsafe_code)]

//! Command-line argument parsing.
//!
//! Parses args by hand to keep the binary lean. Supports environment
//! variable overrides via the `TABLERONE_*` prefix; explicit flags win.

use std::env;
use std::fmt;
use std::path::PathBuf;

use tablerone::{AlignSpec, GLYPH_COUNT, Separators, StyleError, StyleSet, Table};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const HELP_TEXT: &str = "\
tablerone: render a JSON grid as a text table

USAGE:
    tablerone [OPTIONS] [FILE]

Reads a JSON array of rows from FILE, or stdin when FILE is absent or '-'.
Each cell is a string, number, boolean or null, or a merge directive
{\"merge\": \"up\" | \"down\" | \"left\" | \"right\"}.

OPTIONS:
    --style=STYLE                         Preset (double, thin, rounded, heavy, ascii)
                                          or an 11-character glyph string
    --markdown                            Emit a markdown table
    --padding-horizontal-no-border=N      Gap between unseparated columns (default: 1)
    --padding-vertical-no-border=N        Gap between unseparated rows (default: 1)
    --padding-horizontal-with-border=N    Space beside vertical lines (default: 1)
    --padding-vertical-with-border=N      Space beside horizontal lines (default: 0)
    --left-col-separator                  Line after the first column
    --right-col-separator                 Line before the last column
    --top-row-separator                   Line under the header row
    --bottom-row-separator                Line above the last row
    --vertical-separator                  Lines between all columns
    --horizontal-separator                Lines between all rows
    --no-border                           Omit the outer frame
    --align=SPEC                          Alignment for all cells
    --align-header=SPEC                   Alignment for the header row
    --align-body=SPEC                     Alignment for body rows
    --help, -h                            Show this help message
    --version, -V                         Show version

SPEC is one alignment (e.g. 'top-left', 'center'), a comma-separated list
with one per column, or ';'-separated rows of such lists, one per cell.

ENVIRONMENT VARIABLES:
    TABLERONE_STYLE       Override --style
    TABLERONE_ALIGN       Override --align
    TABLERONE_MARKDOWN    Markdown output when set to 1, true or yes
    TABLERONE_LOG         Log filter (falls back to RUST_LOG), logs go to stderr";

/// A bad argument or environment value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for UsageError {}

/// What the invocation asks for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Render(Opts),
    Help,
    Version,
}

/// Parsed command-line options.
#[derive(Debug, Clone, PartialEq)]
pub struct Opts {
    /// Style preset name or glyph string.
    pub style: String,
    pub markdown: bool,
    /// Padding overrides in `horizontal_no_border`, `vertical_no_border`,
    /// `horizontal_with_border`, `vertical_with_border` order.
    pub padding: [Option<i64>; 4],
    pub separators: Separators,
    pub outer_border: bool,
    pub align: Option<AlignSpec>,
    pub align_header: Option<AlignSpec>,
    pub align_body: Option<AlignSpec>,
    /// Input file; `None` reads stdin.
    pub input: Option<PathBuf>,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            style: "double".into(),
            markdown: false,
            padding: [None; 4],
            separators: Separators::default(),
            outer_border: true,
            align: None,
            align_header: None,
            align_body: None,
            input: None,
        }
    }
}

const PADDING_FLAGS: [&str; 4] = [
    "--padding-horizontal-no-border=",
    "--padding-vertical-no-border=",
    "--padding-horizontal-with-border=",
    "--padding-vertical-with-border=",
];

fn parse_align(flag: &str, value: &str) -> Result<AlignSpec, UsageError> {
    value
        .parse()
        .map_err(|e| UsageError(format!("Invalid {flag} value: {e}")))
}

fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Opts {
    /// Parse the process arguments and environment.
    pub fn parse() -> Result<Command, UsageError> {
        Self::parse_from(env::args().skip(1), |key| env::var(key).ok())
    }

    /// Parse `args` (without the program name), reading environment
    /// overrides through `var`.
    pub fn parse_from<I, F>(args: I, var: F) -> Result<Command, UsageError>
    where
        I: IntoIterator<Item = String>,
        F: Fn(&str) -> Option<String>,
    {
        let mut opts = Self::default();

        if let Some(val) = var("TABLERONE_STYLE") {
            opts.style = val;
        }
        if let Some(val) = var("TABLERONE_ALIGN") {
            opts.align = Some(parse_align("TABLERONE_ALIGN", &val)?);
        }
        if let Some(val) = var("TABLERONE_MARKDOWN") {
            opts.markdown = truthy(&val);
        }

        for arg in args {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--markdown" => opts.markdown = true,
                "--no-border" => opts.outer_border = false,
                "--left-col-separator" => opts.separators.left_col = true,
                "--right-col-separator" => opts.separators.right_col = true,
                "--top-row-separator" => opts.separators.top_row = true,
                "--bottom-row-separator" => opts.separators.bottom_row = true,
                "--vertical-separator" => opts.separators.vertical = true,
                "--horizontal-separator" => opts.separators.horizontal = true,
                "-" => opts.input = None,
                other => {
                    if let Some(val) = other.strip_prefix("--style=") {
                        opts.style = val.to_string();
                    } else if let Some(val) = other.strip_prefix("--align=") {
                        opts.align = Some(parse_align("--align", val)?);
                    } else if let Some(val) = other.strip_prefix("--align-header=") {
                        opts.align_header = Some(parse_align("--align-header", val)?);
                    } else if let Some(val) = other.strip_prefix("--align-body=") {
                        opts.align_body = Some(parse_align("--align-body", val)?);
                    } else if let Some((i, val)) = PADDING_FLAGS
                        .iter()
                        .enumerate()
                        .find_map(|(i, &flag)| other.strip_prefix(flag).map(|v| (i, v)))
                    {
                        let flag = PADDING_FLAGS[i].trim_end_matches('=');
                        let n = val
                            .parse::<i64>()
                            .map_err(|_| UsageError(format!("Invalid {flag} value: {val}")))?;
                        opts.padding[i] = Some(n);
                    } else if other.starts_with('-') {
                        return Err(UsageError(format!("Unknown argument: {other}")));
                    } else if opts.input.is_some() {
                        return Err(UsageError(format!("Unexpected extra input: {other}")));
                    } else {
                        opts.input = Some(PathBuf::from(other));
                    }
                }
            }
        }

        Ok(Command::Render(opts))
    }

    /// Resolve `style` to glyphs: a preset name first, then a glyph string.
    pub fn style_set(&self) -> Result<StyleSet, StyleError> {
        let style = self.style.as_str();
        StyleSet::named(style).or_else(|unknown| {
            let looks_like_name = style.chars().all(|c| c.is_ascii_alphabetic());
            if looks_like_name && style.chars().count() != GLYPH_COUNT {
                Err(unknown)
            } else {
                style.parse()
            }
        })
    }

    /// Apply every option except the style to a table builder.
    pub fn configure(&self, table: Table) -> Table {
        let mut table = table
            .left_col_separator(self.separators.left_col)
            .right_col_separator(self.separators.right_col)
            .top_row_separator(self.separators.top_row)
            .bottom_row_separator(self.separators.bottom_row)
            .vertical_separator(self.separators.vertical)
            .horizontal_separator(self.separators.horizontal)
            .outer_border(self.outer_border);
        let [h_nb, v_nb, h_b, v_b] = self.padding;
        if let Some(n) = h_nb {
            table = table.padding_horizontal_no_border(n);
        }
        if let Some(n) = v_nb {
            table = table.padding_vertical_no_border(n);
        }
        if let Some(n) = h_b {
            table = table.padding_horizontal_with_border(n);
        }
        if let Some(n) = v_b {
            table = table.padding_vertical_with_border(n);
        }
        if let Some(spec) = &self.align {
            table = table.align(spec.clone());
        }
        if let Some(spec) = &self.align_header {
            table = table.align_header(spec.clone());
        }
        if let Some(spec) = &self.align_body {
            table = table.align_body(spec.clone());
        }
        table
    }
}
