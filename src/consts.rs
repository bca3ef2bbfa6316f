/// Minimum valid year (inclusive) for the year-setting clamp
pub const MIN_YEAR: i32 = 1;

/// Maximum valid year (inclusive) for the year-setting clamp
pub const MAX_YEAR: i32 = 9999;

/// Minimum valid month (January)
pub const MIN_MONTH: u32 = 1;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month, used as the lower clamp bound
pub const MIN_DAY: u32 = 1;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Months in a year, used when year offsets are applied as month offsets
pub const MONTHS_PER_YEAR: u32 = 12;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;
