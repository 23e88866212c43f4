#![forbid(unsafe_code)]

//! Command-line front end for tablerone.
//!
//! Reads a JSON grid, applies options from flags and `TABLERONE_*`
//! environment variables, and prints the rendered table.

pub mod cli;
pub mod input;

use std::fmt;
use std::io::{self, Read};

use tablerone::Table;
use tracing_subscriber::EnvFilter;

use crate::cli::Opts;
use crate::input::{InputError, parse_grid};

/// Anything that stops a render run.
#[derive(Debug)]
pub enum RunError {
    Io(io::Error),
    Input(InputError),
    Render(tablerone::Error),
}

impl fmt::Display for RunError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "cannot read input: {err}"),
            Self::Input(err) => write!(f, "{err}"),
            Self::Render(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for RunError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Input(err) => Some(err),
            Self::Render(err) => Some(err),
        }
    }
}

impl From<io::Error> for RunError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<InputError> for RunError {
    fn from(err: InputError) -> Self {
        Self::Input(err)
    }
}

impl From<tablerone::Error> for RunError {
    fn from(err: tablerone::Error) -> Self {
        Self::Render(err)
    }
}

/// Install a stderr subscriber filtered by `TABLERONE_LOG`, then
/// `RUST_LOG`, defaulting to warnings only.
pub fn init_logging() {
    let filter = EnvFilter::try_from_env("TABLERONE_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

/// Read the input named by `opts`, or stdin.
pub fn read_input(opts: &Opts) -> Result<String, RunError> {
    match &opts.input {
        Some(path) => {
            tracing::debug!(path = %path.display(), "reading input file");
            Ok(std::fs::read_to_string(path)?)
        }
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Render JSON `text` according to `opts`.
pub fn render_input(opts: &Opts, text: &str) -> Result<String, RunError> {
    let style = opts.style_set().map_err(tablerone::Error::from)?;
    let grid = parse_grid(text)?;
    let table = opts.configure(Table::new(grid).style(style));
    let out = if opts.markdown {
        table.to_markdown()?
    } else {
        table.render()?
    };
    Ok(out)
}
