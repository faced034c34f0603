pub mod appointments;
pub mod appt;
pub mod commands;
pub mod config;
pub mod model;
pub mod parser;

#[cfg(test)]
mod tests;

pub use appointments::{Appointment, AppointmentTimePredicate, TimeFilter};
pub use appt::Appt;
pub use commands::{Command, CommandResult, ListAppointmentsCommand};
pub use config::Config;
pub use model::{AppointmentBook, AppointmentFilter, Model, ModelManager};
pub use parser::{ParseError, parse_command};
