mod argument_tokenizer;
mod cli_syntax;
mod command_parser;
mod error;
mod list_appointments_parser;

pub use argument_tokenizer::{ArgumentMultimap, tokenize};
pub use cli_syntax::{PREFIX_TIME_FILTER, Prefix};
pub use command_parser::{MESSAGE_AVAILABLE_COMMANDS, parse_command};
pub use error::ParseError;
pub use list_appointments_parser::ListAppointmentsCommandParser;

use crate::commands::Command;

/// Turns the argument text that follows a command word into a command.
pub trait Parser {
    type Output: Command;

    fn parse(&self, args: &str) -> Result<Self::Output, ParseError>;
}
