use super::{AppointmentFilter, Model};
use crate::appointments::Appointment;
use chrono::{Local, NaiveDateTime};
use tracing::debug;

/// In-memory [`Model`] over a list of appointments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelManager {
    appointments: Vec<Appointment>,
    filter: AppointmentFilter,
    /// Instant the filter is evaluated against. `None` reads the local clock.
    reference_time: Option<NaiveDateTime>,
}

impl ModelManager {
    pub fn new(appointments: Vec<Appointment>) -> Self {
        Self {
            appointments,
            ..Default::default()
        }
    }

    /// Pins "now" for filter evaluation instead of reading the clock.
    pub fn with_reference_time(mut self, now: NaiveDateTime) -> Self {
        self.reference_time = Some(now);
        self
    }

    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn filter(&self) -> AppointmentFilter {
        self.filter
    }

    fn now(&self) -> NaiveDateTime {
        self.reference_time
            .unwrap_or_else(|| Local::now().naive_local())
    }
}

impl Model for ModelManager {
    fn update_filtered_appointment_list(&mut self, filter: AppointmentFilter) {
        debug!(?filter, "updating appointment filter");
        self.filter = filter;
    }

    fn filtered_appointment_list(&self) -> Vec<&Appointment> {
        let now = self.now();
        self.appointments
            .iter()
            .filter(|appointment| self.filter.test_at(appointment, now))
            .collect()
    }
}
