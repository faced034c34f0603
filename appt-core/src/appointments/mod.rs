mod appointment;
mod time_filter;
mod time_predicate;

pub use appointment::Appointment;
pub use time_filter::TimeFilter;
pub use time_predicate::AppointmentTimePredicate;
