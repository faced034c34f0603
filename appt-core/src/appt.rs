use crate::{
    Config,
    appointments::Appointment,
    commands::CommandResult,
    model::{AppointmentBook, Model, ModelManager},
    parser::parse_command,
};
use anyhow::Result;
use tracing::debug;

/// Entry point for front ends: owns the config and the appointment model and
/// runs user command lines against them.
#[derive(Debug)]
pub struct Appt {
    pub config: Config,
    model: ModelManager,
}

impl Appt {
    /// Creates a new `Appt` instance, loading configuration from standard paths.
    pub fn new() -> Result<Self> {
        let config = Config::load()?;
        Self::with_config(config)
    }

    /// Creates a new `Appt` instance with a specific `Config`, reading its appointment book.
    pub fn with_config(config: Config) -> Result<Self> {
        let book = AppointmentBook::load(&config.appointments_file)?;
        Ok(Self {
            config,
            model: ModelManager::new(book.appointments),
        })
    }

    /// Parses and runs one line of user input.
    ///
    /// The model is only touched once the whole line has parsed.
    pub fn execute(&mut self, input: &str) -> Result<CommandResult> {
        let command = parse_command(input)?;
        debug!(%command, "executing");
        command.execute(&mut self.model)
    }

    pub fn filtered_appointments(&self) -> Vec<&Appointment> {
        self.model.filtered_appointment_list()
    }
}
