use crate::render::ColorMode;
use clap::Parser;
use std::path::PathBuf;

/// appt: list appointments by time
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Prints the appointment book path
    #[arg(long, short, conflicts_with = "text")]
    pub path: bool,
    /// Appointment book to read instead of the configured one.
    #[arg(long, short, env = "APPT_BOOK")]
    pub book: Option<PathBuf>,
    /// Control ANSI colors in output.
    /// By default, colors are disabled when output is redirected (e.g with `>` or `|`).
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
    /// Log debug output to stderr. `RUST_LOG` takes precedence.
    #[arg(long, short)]
    pub verbose: bool,
    /// Command to run (e.g., `appt lap time/past`). Without it, commands are read from stdin.
    #[arg()]
    pub text: Vec<String>,
}

impl Cli {
    pub fn new() -> Self {
        Cli::parse()
    }
}
