//! The collaborator commands act on: the appointment collection and its active filter.
mod appointment_book;
mod model_manager;

pub use appointment_book::AppointmentBook;
pub use model_manager::ModelManager;

use crate::appointments::{Appointment, AppointmentTimePredicate};
use chrono::NaiveDateTime;

/// Always-true filter: resets the view to every appointment.
pub const PREDICATE_SHOW_ALL_APPOINTMENTS: AppointmentFilter = AppointmentFilter::ShowAll;

/// What the filtered appointment view is currently narrowed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    #[default]
    ShowAll,
    Time(AppointmentTimePredicate),
}

impl AppointmentFilter {
    pub fn test_at(&self, appointment: &Appointment, now: NaiveDateTime) -> bool {
        match self {
            AppointmentFilter::ShowAll => true,
            AppointmentFilter::Time(predicate) => predicate.test_at(appointment, now),
        }
    }
}

impl From<AppointmentTimePredicate> for AppointmentFilter {
    fn from(predicate: AppointmentTimePredicate) -> Self {
        AppointmentFilter::Time(predicate)
    }
}

/// The API commands use to read and narrow the appointment view.
pub trait Model {
    /// Replaces the active appointment filter.
    fn update_filtered_appointment_list(&mut self, filter: AppointmentFilter);

    /// Appointments that pass the active filter, in book order.
    fn filtered_appointment_list(&self) -> Vec<&Appointment>;
}
