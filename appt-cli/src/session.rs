use crate::{
    cli::Cli,
    render::{RenderOptions, Renderer},
};
use anyhow::Result;
use appt_core::{Appt, CommandResult};
use std::io::{self, BufRead};
use tracing::debug;

/// Runs commands from the command line, or line by line from stdin.
pub struct Session {
    cli: Cli,
    renderer: Renderer,
    appt: Appt,
}

impl Session {
    pub fn new(cli: Cli, appt: Appt) -> Self {
        let renderer = Renderer::new(RenderOptions {
            datetime_format: appt.config.datetime_format.clone(),
            use_color: cli.color.use_color(),
        });
        Self {
            cli,
            renderer,
            appt,
        }
    }

    pub fn run(mut self) -> Result<()> {
        if self.cli.path {
            self.renderer
                .print_info(&format!("{}", self.appt.config.appointments_file.display()));
            return Ok(());
        }

        if !self.cli.text.is_empty() {
            let line = self.cli.text.join(" ");
            return self.run_line(&line);
        }

        self.read_lines(io::stdin().lock())
    }

    fn run_line(&mut self, line: &str) -> Result<()> {
        let result = self.appt.execute(line)?;
        self.show(&result);
        Ok(())
    }

    /// Errors are reported and the next line is read; only I/O failures stop the loop.
    fn read_lines(&mut self, input: impl BufRead) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            if let Err(e) = self.run_line(&line) {
                self.renderer.print_error(&e.to_string());
            }
        }
        debug!("end of input");
        Ok(())
    }

    fn show(&self, result: &CommandResult) {
        self.renderer.print_info(&result.feedback_to_user);
        if result.show_appointments {
            self.renderer
                .print_appointments(&self.appt.filtered_appointments());
        }
    }
}
