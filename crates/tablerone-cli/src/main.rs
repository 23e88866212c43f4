#![forbid(unsafe_code)]

//! tablerone binary entry point.

use std::process;

use tablerone_cli::cli::{self, Command, Opts};

fn main() {
    let opts = match Opts::parse() {
        Ok(Command::Render(opts)) => opts,
        Ok(Command::Help) => {
            println!("{}", cli::HELP_TEXT);
            return;
        }
        Ok(Command::Version) => {
            println!("tablerone {}", cli::VERSION);
            return;
        }
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Run with --help for usage information.");
            process::exit(2);
        }
    };

    tablerone_cli::init_logging();

    let result = tablerone_cli::read_input(&opts)
        .and_then(|text| tablerone_cli::render_input(&opts, &text));
    match result {
        Ok(table) => println!("{table}"),
        Err(e) => {
            tracing::error!(error = %e, "render failed");
            eprintln!("tablerone: {e}");
            process::exit(1);
        }
    }
}
