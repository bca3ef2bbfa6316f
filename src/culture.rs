use crate::prelude::*;
use crate::style::ParseStyle;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Locale-aware parsing primitives consumed by the parser core.
///
/// The core never inspects the culture beyond calling these two methods, so
/// callers can substitute their own locale rules entirely.
pub trait Culture {
    /// Attempts an exact-format parse of `input` against `pattern` (strftime
    /// syntax) under the given style.
    fn parse_pattern(&self, input: &str, pattern: &str, style: ParseStyle) -> Option<NaiveDateTime>;

    /// Attempts a free-form parse of `input` using the locale's general
    /// date-recognition rules under the given style.
    fn parse_default(&self, input: &str, style: ParseStyle) -> Option<NaiveDateTime>;
}

/// Which component comes first in this locale's ambiguous numeric dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum DateOrder {
    /// `31/05/2024`
    #[display(fmt = "day-first")]
    DayFirst,
    /// `05/31/2024`
    #[display(fmt = "month-first")]
    MonthFirst,
    /// `2024-05-31`
    #[display(fmt = "year-first")]
    YearFirst,
}

/// Free-parse patterns tried for year-first locales, most specific first.
const YEAR_FIRST_PATTERNS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
];

/// Free-parse patterns for month-first locales. ISO input is understood
/// everywhere, so it closes the list.
const MONTH_FIRST_PATTERNS: &[&str] = &[
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y",
    "%m-%d-%Y",
    "%B %d, %Y",
    "%b %d, %Y",
    "%Y-%m-%d",
];

/// Free-parse patterns for day-first locales.
const DAY_FIRST_PATTERNS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d/%m/%Y",
    "%d.%m.%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d",
];

/// A [`Culture`] backed by a fixed table of locale-default patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Locale {
    order: DateOrder,
}

impl Locale {
    /// Creates a locale with the given date component order.
    pub const fn new(order: DateOrder) -> Self {
        Self { order }
    }

    /// ISO 8601 conventions, year first.
    pub const fn iso() -> Self {
        Self::new(DateOrder::YearFirst)
    }

    /// United States conventions, month first.
    pub const fn us() -> Self {
        Self::new(DateOrder::MonthFirst)
    }

    /// Most European conventions, day first.
    pub const fn european() -> Self {
        Self::new(DateOrder::DayFirst)
    }

    /// Returns the date component order of this locale.
    pub const fn order(&self) -> DateOrder {
        self.order
    }

    /// The ordered pattern table used by the free-form parse.
    pub const fn default_patterns(&self) -> &'static [&'static str] {
        match self.order {
            DateOrder::DayFirst => DAY_FIRST_PATTERNS,
            DateOrder::MonthFirst => MONTH_FIRST_PATTERNS,
            DateOrder::YearFirst => YEAR_FIRST_PATTERNS,
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::iso()
    }
}

impl Culture for Locale {
    fn parse_pattern(&self, input: &str, pattern: &str, style: ParseStyle) -> Option<NaiveDateTime> {
        let normalized = style.normalize(input)?;
        parse_with_pattern(normalized.as_ref(), pattern)
    }

    fn parse_default(&self, input: &str, style: ParseStyle) -> Option<NaiveDateTime> {
        let normalized = style.normalize(input)?;
        self.default_patterns()
            .iter()
            .find_map(|pattern| parse_with_pattern(normalized.as_ref(), pattern))
    }
}

/// Parses `input` against a single strftime pattern. Date-only patterns take
/// midnight as the default time.
fn parse_with_pattern(input: &str, pattern: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = NaiveDateTime::parse_from_str(input, pattern) {
        return Some(parsed);
    }
    NaiveDate::parse_from_str(input, pattern)
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}
