use super::Prefix;
use crate::appointments::TimeFilter;
use thiserror::Error;

/// User input that could not be turned into a command.
///
/// The `Display` output is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: &'static str },
    #[error(
        "Invalid time filter: {}. Valid options are: {}",
        .value,
        TimeFilter::valid_keywords()
    )]
    InvalidTimeFilter { value: String },
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        join_prefixes(.prefixes)
    )]
    DuplicatePrefixes { prefixes: Vec<Prefix> },
    #[error("Unknown command")]
    UnknownCommand,
}

fn join_prefixes(prefixes: &[Prefix]) -> String {
    prefixes
        .iter()
        .map(Prefix::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PREFIX_TIME_FILTER;

    #[test]
    fn messages() {
        assert_eq!(
            ParseError::InvalidCommandFormat { usage: "usage" }.to_string(),
            "Invalid command format! \nusage"
        );
        assert_eq!(
            ParseError::InvalidTimeFilter { value: "soon".into() }.to_string(),
            "Invalid time filter: soon. Valid options are: all, past, today, upcoming"
        );
        assert_eq!(
            ParseError::DuplicatePrefixes { prefixes: vec![PREFIX_TIME_FILTER] }.to_string(),
            "Multiple values specified for the following single-valued field(s): time/"
        );
        assert_eq!(ParseError::UnknownCommand.to_string(), "Unknown command");
    }
}
