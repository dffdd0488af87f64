use std::{iter::FusedIterator, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, ParseError, RANGE_SEPARATOR, prelude::*};

/// An inclusive span of calendar days.
/// The start day is always less than or equal to the end day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DayRange {
    start: CalendarDay,
    end:   CalendarDay,
}

/// Error type for day range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Start day is after end day.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: CalendarDay, end: CalendarDay },

    /// Error parsing one of the two days.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DayRange {
    /// Creates a new range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if start > end.
    pub fn new(start: CalendarDay, end: CalendarDay) -> Result<Self, RangeError> {
        if start > end {
            return Err(RangeError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    pub const fn single(day: CalendarDay) -> Self {
        Self { start: day, end: day }
    }

    pub const fn start(&self) -> CalendarDay {
        self.start
    }

    pub const fn end(&self) -> CalendarDay {
        self.end
    }

    /// Returns both start and end days as a tuple
    pub const fn dates(&self) -> (CalendarDay, CalendarDay) {
        (self.start, self.end)
    }

    pub fn contains(&self, day: CalendarDay) -> bool {
        self.start <= day && day <= self.end
    }

    /// Checks if the two ranges share at least one day
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Number of days in the range, counting both ends. Never zero.
    pub fn len(&self) -> usize {
        // `start <= end`, so the difference is non-negative and below 3.7 million.
        usize::try_from(self.start.days_until(self.end)).unwrap_or(0) + 1
    }

    /// Always false; a range holds at least its start day.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Iterates every day from start to end, ascending.
    pub fn days(&self) -> Days {
        Days {
            front:     self.start,
            back:      self.end,
            remaining: self.len(),
        }
    }
}

impl IntoIterator for DayRange {
    type Item = CalendarDay;
    type IntoIter = Days;

    fn into_iter(self) -> Self::IntoIter {
        self.days()
    }
}

/// Iterator over the days of a [`DayRange`], created by [`DayRange::days`].
///
/// Each step is a single `succ`/`pred`, so walking a range is linear in its length.
#[derive(Debug, Clone)]
pub struct Days {
    front:     CalendarDay,
    back:      CalendarDay,
    remaining: usize,
}

impl Iterator for Days {
    type Item = CalendarDay;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            // remaining > 0 means front < back, so succ exists.
            self.front = current.succ()?;
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Days {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = current.pred()?;
        }
        Some(current)
    }
}

impl ExactSizeIterator for Days {}

impl FusedIterator for Days {}

impl FromStr for DayRange {
    type Err = RangeError;

    /// Parses `START/END`, both in canonical `YYYY-MM-DD` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();
        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (start_str, end_str) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;

                let start = start_str.parse::<CalendarDay>()?;
                let end = end_str.parse::<CalendarDay>()?;

                Self::new(start, end)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for DayRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DayRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
