/// Earliest representable year (inclusive)
pub const MIN_YEAR: u16 = 1;

/// Latest representable year (inclusive), keeps the year four digits wide
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year (index 0 unused, months are 1-indexed)
pub const DAYS_IN_MONTH: [u8; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Days in one full 400 year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;

/// Date component separator (ISO 8601 calendar date)
pub const DATE_SEPARATOR: char = '-';
/// Range separator (ISO 8601 interval)
pub const RANGE_SEPARATOR: char = '/';

/// Digit widths of the canonical `YYYY-MM-DD` form
pub(crate) const YEAR_WIDTH: usize = 4;
pub(crate) const MONTH_WIDTH: usize = 2;
pub(crate) const DAY_WIDTH: usize = 2;
