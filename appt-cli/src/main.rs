mod cli;
mod logger;
mod render;
mod session;

use anyhow::Result;
use appt_core::{Appt, Config};
use cli::Cli;
use session::Session;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("appt: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    logger::init_logger(cli.verbose);

    let mut config = Config::load()?;
    if let Some(book) = &cli.book {
        config.appointments_file = book.clone();
    }
    let appt = Appt::with_config(config)?;

    Session::new(cli, appt).run()
}
