use super::{Command, CommandResult};
use crate::appointments::{AppointmentTimePredicate, TimeFilter};
use crate::model::{AppointmentFilter, Model, PREDICATE_SHOW_ALL_APPOINTMENTS};
use anyhow::Result;
use std::{any, fmt};
use tracing::debug;

/// Lists appointments, narrowed by a [`TimeFilter`].
///
/// The default command shows today's and upcoming appointments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListAppointmentsCommand {
    time_filter: TimeFilter,
}

impl ListAppointmentsCommand {
    pub const COMMAND_WORD: &'static str = "lap";

    pub const MESSAGE_SUCCESS: &'static str = "Listed all active appointments";

    pub const MESSAGE_USAGE: &'static str = "lap: Lists appointments.\n\
        Parameters: [time/TIME_FILTER]\n\
        TIME_FILTER can be: all, past, today, upcoming\n\
        If no time filter is specified, shows today and upcoming appointments.\n\
        Examples:\n  \
        lap (shows today and upcoming appointments)\n  \
        lap time/past (shows past appointments)\n";

    pub fn new(time_filter: TimeFilter) -> Self {
        Self { time_filter }
    }

    pub fn time_filter(&self) -> TimeFilter {
        self.time_filter
    }
}

impl Command for ListAppointmentsCommand {
    fn execute(&self, model: &mut dyn Model) -> Result<CommandResult> {
        let filter = match self.time_filter {
            // Reset instead of building an always-true predicate.
            TimeFilter::All => PREDICATE_SHOW_ALL_APPOINTMENTS,
            time_filter => AppointmentFilter::Time(AppointmentTimePredicate::new(time_filter)),
        };
        debug!(time_filter = %self.time_filter, "listing appointments");
        model.update_filtered_appointment_list(filter);

        Ok(CommandResult::new(
            Self::MESSAGE_SUCCESS,
            false,
            false,
            true,
            false,
        ))
    }
}

impl fmt::Display for ListAppointmentsCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{{timeFilter={}}}",
            any::type_name::<Self>(),
            self.time_filter
        )
    }
}
