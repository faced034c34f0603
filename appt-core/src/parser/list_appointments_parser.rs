use super::{PREFIX_TIME_FILTER, ParseError, Parser, tokenize};
use crate::appointments::TimeFilter;
use crate::commands::ListAppointmentsCommand;
use tracing::debug;

/// Parses the arguments of `lap`: nothing, or a single `time/<filter>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListAppointmentsCommandParser;

impl Parser for ListAppointmentsCommandParser {
    type Output = ListAppointmentsCommand;

    fn parse(&self, args: &str) -> Result<ListAppointmentsCommand, ParseError> {
        let arg_multimap = tokenize(args, &[PREFIX_TIME_FILTER]);

        if !arg_multimap.preamble().is_empty() {
            return Err(ParseError::InvalidCommandFormat {
                usage: ListAppointmentsCommand::MESSAGE_USAGE,
            });
        }

        arg_multimap.verify_no_duplicate_prefixes_for(&[PREFIX_TIME_FILTER])?;

        let Some(value) = arg_multimap.value(PREFIX_TIME_FILTER) else {
            debug!("no time filter given, using the default");
            return Ok(ListAppointmentsCommand::default());
        };

        let time_filter = parse_time_filter(value)?;
        Ok(ListAppointmentsCommand::new(time_filter))
    }
}

fn parse_time_filter(value: &str) -> Result<TimeFilter, ParseError> {
    let normalized = value.to_lowercase().trim().to_string();
    TimeFilter::from_keyword(&normalized).ok_or(ParseError::InvalidTimeFilter { value: normalized })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{assert_parse_failure, assert_parse_success};

    fn expect(filter: TimeFilter) -> ListAppointmentsCommand {
        ListAppointmentsCommand::new(filter)
    }

    #[test]
    fn no_args_uses_default_filter() {
        let parser = ListAppointmentsCommandParser;
        assert_parse_success(&parser, "", ListAppointmentsCommand::default());
        assert_parse_success(&parser, "   ", ListAppointmentsCommand::default());
        assert_parse_success(&parser, "\t ", expect(TimeFilter::TodayAndUpcoming));
    }

    #[test]
    fn each_keyword_maps_to_its_filter() {
        let parser = ListAppointmentsCommandParser;
        assert_parse_success(&parser, " time/all", expect(TimeFilter::All));
        assert_parse_success(&parser, " time/past", expect(TimeFilter::Past));
        assert_parse_success(&parser, " time/today", expect(TimeFilter::Today));
        assert_parse_success(&parser, " time/upcoming", expect(TimeFilter::Upcoming));
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let parser = ListAppointmentsCommandParser;
        assert_parse_success(&parser, " time/ALL", expect(TimeFilter::All));
        assert_parse_success(&parser, " time/All", expect(TimeFilter::All));
        assert_parse_success(&parser, " time/PaSt", expect(TimeFilter::Past));
        assert_parse_success(&parser, " time/ToDaY", expect(TimeFilter::Today));
        assert_parse_success(&parser, " time/UpCoMiNg", expect(TimeFilter::Upcoming));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let parser = ListAppointmentsCommandParser;
        assert_parse_success(&parser, "   time/past", expect(TimeFilter::Past));
        assert_parse_success(&parser, " time/  today   ", expect(TimeFilter::Today));
    }

    #[test]
    fn unknown_filter_is_rejected() {
        let parser = ListAppointmentsCommandParser;
        assert_parse_failure(
            &parser,
            " time/invalid",
            "Invalid time filter: invalid. Valid options are: all, past, today, upcoming",
        );
        assert_parse_failure(
            &parser,
            " time/",
            "Invalid time filter: . Valid options are: all, past, today, upcoming",
        );
        assert_parse_failure(
            &parser,
            " time/SOON",
            "Invalid time filter: soon. Valid options are: all, past, today, upcoming",
        );
        assert_parse_failure(
            &parser,
            " time/today_and_upcoming",
            "Invalid time filter: today_and_upcoming. Valid options are: all, past, today, upcoming",
        );
    }

    #[test]
    fn preamble_is_rejected_before_the_filter_is_checked() {
        let parser = ListAppointmentsCommandParser;
        let expected = format!(
            "Invalid command format! \n{}",
            ListAppointmentsCommand::MESSAGE_USAGE
        );
        assert_parse_failure(&parser, "some random text", &expected);
        assert_parse_failure(&parser, "abc time/all", &expected);
        assert_parse_failure(&parser, "123 time/past", &expected);
        assert_parse_failure(&parser, "abc time/bogus", &expected);
    }

    #[test]
    fn only_one_time_filter_is_allowed() {
        let parser = ListAppointmentsCommandParser;
        let expected = "Multiple values specified for the following single-valued field(s): time/";
        assert_parse_failure(&parser, " time/all time/past", expected);
        assert_parse_failure(&parser, " time/today time/upcoming", expected);
        assert_parse_failure(&parser, " time/bogus time/nope", expected);
    }
}
