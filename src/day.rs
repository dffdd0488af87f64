use std::str::FromStr;

use crate::consts::{
    CENTURY_CYCLE, DATE_SEPARATOR, DAY_WIDTH, DAYS_IN_MONTH, DAYS_PER_GREGORIAN_CYCLE, DECEMBER,
    FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, JANUARY, LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR,
    MIN_DAY, MIN_YEAR, MONTH_WIDTH, YEAR_WIDTH,
};
use crate::prelude::*;

/// A calendar date at day granularity.
///
/// There is no time-of-day and no time zone: two values compare in calendar
/// order, and stepping moves by whole days. Years run from `MIN_YEAR` to
/// `MAX_YEAR` in the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{:04}-{:02}-{:02}", year, month, day)]
pub struct CalendarDay {
    // Field order drives the derived `Ord`.
    year:  u16,
    month: u8,
    day:   u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid date format: {_0} (expected YYYY-MM-DD)")]
    InvalidFormat(String),
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year:04}-{month:02}")]
    InvalidDay { year: u16, month: u8, day: u8 },
    #[display(fmt = "Empty date string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}

impl CalendarDay {
    /// Creates a day, validating month and day against the calendar.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidYear`, `InvalidMonth` or `InvalidDay` when a
    /// component is out of range.
    pub const fn new(year: u16, month: u8, day: u8) -> Result<Self, ParseError> {
        if year < MIN_YEAR || year > MAX_YEAR {
            return Err(ParseError::InvalidYear(year));
        }
        if month == 0 || month > MAX_MONTH {
            return Err(ParseError::InvalidMonth(month));
        }
        if day < MIN_DAY || day > days_in_month(year, month) {
            return Err(ParseError::InvalidDay { year, month, day });
        }
        Ok(Self { year, month, day })
    }

    /// Earliest representable day, `0001-01-01`.
    pub const MIN: Self = Self { year: MIN_YEAR, month: JANUARY, day: MIN_DAY };

    /// Latest representable day, `9999-12-31`.
    pub const MAX: Self = Self { year: MAX_YEAR, month: DECEMBER, day: 31 };

    #[inline]
    pub const fn year(self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(self) -> u8 {
        self.day
    }

    /// The following day, rolling over month and year ends.
    /// Returns `None` after `CalendarDay::MAX`.
    pub const fn succ(self) -> Option<Self> {
        if self.day < days_in_month(self.year, self.month) {
            return Some(Self { day: self.day + 1, ..self });
        }
        if self.month < DECEMBER {
            return Some(Self { month: self.month + 1, day: MIN_DAY, ..self });
        }
        if self.year >= MAX_YEAR {
            return None;
        }
        Some(Self { year: self.year + 1, month: JANUARY, day: MIN_DAY })
    }

    /// The preceding day, rolling back over month and year starts.
    /// Returns `None` before `CalendarDay::MIN`.
    pub const fn pred(self) -> Option<Self> {
        if self.day > MIN_DAY {
            return Some(Self { day: self.day - 1, ..self });
        }
        if self.month > JANUARY {
            let month = self.month - 1;
            return Some(Self { month, day: days_in_month(self.year, month), ..self });
        }
        if self.year <= MIN_YEAR {
            return None;
        }
        let year = self.year - 1;
        Some(Self { year, month: DECEMBER, day: days_in_month(year, DECEMBER) })
    }

    /// Number of days since `0001-01-01`, which has ordinal 0.
    pub fn to_ordinal(self) -> i64 {
        let prior_years = i64::from(self.year) - 1;
        let before_year = prior_years * 365 + prior_years / 4 - prior_years / 100 + prior_years / 400;
        let before_month: i64 = (JANUARY..self.month)
            .map(|m| i64::from(days_in_month(self.year, m)))
            .sum();
        before_year + before_month + i64::from(self.day) - 1
    }

    /// Inverse of [`CalendarDay::to_ordinal`].
    /// Returns `None` for ordinals outside `MIN..=MAX`.
    pub fn from_ordinal(ordinal: i64) -> Option<Self> {
        if ordinal < 0 {
            return None;
        }
        let cycles = ordinal / DAYS_PER_GREGORIAN_CYCLE;
        let mut rem = ordinal % DAYS_PER_GREGORIAN_CYCLE;

        // The last day of a 400 year cycle would otherwise land in a fifth century.
        let centuries = (rem / 36_524).min(3);
        rem -= centuries * 36_524;
        let quads = rem / 1_461;
        rem -= quads * 1_461;
        // Same for the last day of a leap year inside a 4 year block.
        let years = (rem / 365).min(3);
        rem -= years * 365;

        let year = u16::try_from(cycles * 400 + centuries * 100 + quads * 4 + years + 1).ok()?;
        if year > MAX_YEAR {
            return None;
        }

        let mut month = JANUARY;
        loop {
            let len = i64::from(days_in_month(year, month));
            if rem < len {
                break;
            }
            rem -= len;
            month += 1;
        }
        let day = u8::try_from(rem + 1).ok()?;
        Some(Self { year, month, day })
    }

    /// Moves by `days` (negative goes backwards).
    /// Returns `None` when the result leaves the representable years.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        self.to_ordinal().checked_add(days).and_then(Self::from_ordinal)
    }

    /// Signed number of days from `self` to `other`; positive when `other` is later.
    pub fn days_until(self, other: Self) -> i64 {
        other.to_ordinal() - self.to_ordinal()
    }
}

impl FromStr for CalendarDay {
    type Err = ParseError;

    /// Parses the canonical `YYYY-MM-DD` form only. Component widths are fixed.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(ParseError::InvalidFormat(trimmed.to_owned()));
        };

        let year = parse_component::<u16>(year, YEAR_WIDTH, trimmed)?;
        let month = parse_component::<u8>(month, MONTH_WIDTH, trimmed)?;
        let day = parse_component::<u8>(day, DAY_WIDTH, trimmed)?;

        Self::new(year, month, day)
    }
}

fn parse_component<T: FromStr>(part: &str, width: usize, input: &str) -> Result<T, ParseError> {
    if part.len() != width || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidFormat(input.to_owned()));
    }
    part.parse::<T>()
        .map_err(|_| ParseError::InvalidFormat(input.to_owned()))
}

impl serde::Serialize for CalendarDay {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for CalendarDay {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}
