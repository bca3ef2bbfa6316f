mod adjust;
mod calendar;
mod consts;
mod culture;
mod parse;
mod prelude;
mod style;

pub use adjust::{
    OutOfRange, last_day_of_month, remove_days, remove_months, remove_years, set_day, set_month,
    set_year,
};
pub use calendar::{days_in_month, is_leap_year};
pub use consts::*;
pub use culture::{Culture, DateOrder, Locale};
pub use parse::{ParseError, parse_exact, parse_exact_any_style, try_parse, try_parse_any_style};
pub use style::ParseStyle;
