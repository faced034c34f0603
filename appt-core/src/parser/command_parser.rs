use super::{ListAppointmentsCommandParser, ParseError, Parser};
use crate::commands::{Command, ListAppointmentsCommand};
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, warn};

/// Shown when a blank line is entered.
pub const MESSAGE_AVAILABLE_COMMANDS: &str = "Available commands:\n\
    lap [time/TIME_FILTER]: Lists appointments.";

/// `<command word><arguments>`, where the arguments keep their leading whitespace.
static BASIC_COMMAND_FORMAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)^(?P<command_word>\S+)(?P<arguments>.*)$").expect("valid command regex")
});

/// Parses a full line of user input into the command it names.
pub fn parse_command(user_input: &str) -> Result<Box<dyn Command>, ParseError> {
    let Some(captures) = BASIC_COMMAND_FORMAT.captures(user_input.trim()) else {
        return Err(ParseError::InvalidCommandFormat {
            usage: MESSAGE_AVAILABLE_COMMANDS,
        });
    };

    let command_word = &captures["command_word"];
    let arguments = &captures["arguments"];
    debug!(command_word, arguments, "parsing command");

    match command_word {
        ListAppointmentsCommand::COMMAND_WORD => {
            Ok(Box::new(ListAppointmentsCommandParser.parse(arguments)?))
        }
        _ => {
            warn!(command_word, "unknown command");
            Err(ParseError::UnknownCommand)
        }
    }
}
