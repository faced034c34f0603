use crate::{
    Appointment, Command, CommandResult, ModelManager,
    parser::Parser,
};
use chrono::{NaiveDate, NaiveDateTime};
use std::fmt::Debug;

/// Builds a date-time, panicking on impossible values.
pub fn dt(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, min, sec))
        .expect("valid date-time")
}

/// The "now" every deterministic test runs against: Friday 15 Aug 2025, 14:30.
pub fn reference_now() -> NaiveDateTime {
    dt(2025, 8, 15, 14, 30, 0)
}

pub fn appointment_at(datetime: NaiveDateTime) -> Appointment {
    Appointment::new(datetime, "Alice Pauline", "Benson Meier")
}

/// Appointments around [`reference_now`]:
/// one yesterday, one earlier today, two later today (the last at 23:59:59) and one next week.
pub fn typical_appointments() -> Vec<Appointment> {
    vec![
        Appointment::new(dt(2025, 8, 14, 10, 0, 0), "Alice Pauline", "Benson Meier"),
        Appointment::new(dt(2025, 8, 15, 9, 0, 0), "Carl Kurz", "Benson Meier"),
        Appointment::new(dt(2025, 8, 15, 18, 0, 0), "Daniel Meier", "George Best"),
        Appointment::new(dt(2025, 8, 15, 23, 59, 59), "Elle Meyer", "George Best"),
        Appointment::new(dt(2025, 8, 20, 11, 0, 0), "Fiona Kunz", "Benson Meier"),
    ]
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_appointments()).with_reference_time(reference_now())
}

/// Asserts that `parser` turns `args` into `expected`.
pub fn assert_parse_success<P>(parser: &P, args: &str, expected: P::Output)
where
    P: Parser,
    P::Output: PartialEq + Debug,
{
    match parser.parse(args) {
        Ok(command) => assert_eq!(command, expected, "parsing {args:?}"),
        Err(e) => panic!("parsing {args:?} failed: {e}"),
    }
}

/// Asserts that `parser` rejects `args` with exactly `expected_message`.
pub fn assert_parse_failure<P: Parser>(parser: &P, args: &str, expected_message: &str) {
    match parser.parse(args) {
        Ok(command) => panic!("parsing {args:?} should fail, got {command}"),
        Err(e) => assert_eq!(e.to_string(), expected_message, "parsing {args:?}"),
    }
}

/// Runs `command` on `model` and checks both the result and the resulting model.
pub fn assert_command_success(
    command: &dyn Command,
    mut model: ModelManager,
    expected_result: CommandResult,
    expected_model: ModelManager,
) {
    let result = command
        .execute(&mut model)
        .unwrap_or_else(|e| panic!("{command} failed: {e}"));
    assert_eq!(result, expected_result);
    assert_eq!(model, expected_model);
}

