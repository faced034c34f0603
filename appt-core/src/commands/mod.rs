mod command_result;
mod list_appointments;

pub use command_result::CommandResult;
pub use list_appointments::ListAppointmentsCommand;

use crate::model::Model;
use anyhow::Result;
use std::fmt;

/// A parsed, ready-to-run user command.
pub trait Command: fmt::Debug + fmt::Display {
    /// Runs the command against `model` and reports what the UI should show.
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult>;
}
