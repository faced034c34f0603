use strum_macros::{AsRefStr, Display, EnumIter};

/// The time windows the appointment list can be narrowed to.
///
/// Displays as the upper snake case name (e.g. `TODAY_AND_UPCOMING`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter, AsRefStr, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TimeFilter {
    All,
    Past,
    Today,
    Upcoming,
    /// Everything from the start of today onwards. Used when no filter is given.
    #[default]
    TodayAndUpcoming,
}

impl TimeFilter {
    /// Filters a user can name after `time/`, in the order help text lists them.
    pub const SELECTABLE: [TimeFilter; 4] = [
        TimeFilter::All,
        TimeFilter::Past,
        TimeFilter::Today,
        TimeFilter::Upcoming,
    ];

    /// The word a user types to pick this filter, if it can be picked at all.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            TimeFilter::All => Some("all"),
            TimeFilter::Past => Some("past"),
            TimeFilter::Today => Some("today"),
            TimeFilter::Upcoming => Some("upcoming"),
            TimeFilter::TodayAndUpcoming => None,
        }
    }

    /// Case-insensitive keyword lookup. Surrounding whitespace is ignored.
    pub fn from_keyword(input: &str) -> Option<TimeFilter> {
        let input = input.trim();
        Self::SELECTABLE.into_iter().find(|filter| {
            filter
                .keyword()
                .is_some_and(|keyword| keyword.eq_ignore_ascii_case(input))
        })
    }

    /// Comma separated list of the accepted keywords, e.g. `all, past, today, upcoming`.
    pub fn valid_keywords() -> String {
        Self::SELECTABLE
            .iter()
            .filter_map(|filter| filter.keyword())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
