use super::{Appointment, TimeFilter};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;

/// Seconds from midnight to 23:59:59.
const LAST_WHOLE_SECOND_OF_DAY: i64 = 23 * 60 * 60 + 59 * 60 + 59;

/// Tests whether an [`Appointment`]'s date-time falls inside a [`TimeFilter`] window.
///
/// The predicate holds no clock. [`test_at`](Self::test_at) takes the reference
/// instant explicitly; [`test`](Self::test) reads the local clock and delegates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentTimePredicate {
    time_filter: TimeFilter,
}

impl AppointmentTimePredicate {
    pub fn new(time_filter: TimeFilter) -> Self {
        Self { time_filter }
    }

    pub fn time_filter(&self) -> TimeFilter {
        self.time_filter
    }

    /// Evaluates the predicate against the current local time.
    pub fn test(&self, appointment: &Appointment) -> bool {
        self.test_at(appointment, Local::now().naive_local())
    }

    /// Evaluates the predicate with `now` as the reference instant.
    ///
    /// - `Past`: strictly before `now`.
    /// - `Today`: from 00:00:00 to 23:59:59 of `now`'s date, both inclusive.
    /// - `Upcoming`: strictly after `now`.
    /// - `TodayAndUpcoming`: at or after 00:00:00 of `now`'s date.
    pub fn test_at(&self, appointment: &Appointment, now: NaiveDateTime) -> bool {
        let appointment_time = appointment.datetime;
        let today = now.date();

        match self.time_filter {
            TimeFilter::All => true,
            TimeFilter::Past => appointment_time < now,
            TimeFilter::Today => {
                appointment_time >= start_of_day(today) && appointment_time <= end_of_day(today)
            }
            TimeFilter::Upcoming => appointment_time > now,
            TimeFilter::TodayAndUpcoming => appointment_time >= start_of_day(today),
        }
    }
}

impl fmt::Display for AppointmentTimePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AppointmentTimePredicate{{timeFilter={}}}", self.time_filter)
    }
}

fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// 23:59:59 on `date`. Instants with a fractional second past it are not covered.
fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::seconds(LAST_WHOLE_SECOND_OF_DAY)
}
