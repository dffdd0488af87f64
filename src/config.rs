//! Parameters a host passes when it opens the picker.

use serde::{Deserialize, Deserializer};

use crate::{Bounds, CalendarDay, ParseError};

/// Errors raised while turning host parameters into a picker.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// `minDate` falls after `maxDate`.
    #[error("Invalid bounds: min date ({min}) is after max date ({max})")]
    InvalidBounds { min: CalendarDay, max: CalendarDay },

    /// A date string was not a canonical calendar date.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Open parameters of a range picker.
///
/// Deserializes from camelCase keys (`minDate`, `maxDate`, `initialStart`,
/// `initialEnd`). Missing keys and empty strings both mean "not set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PickerConfig {
    #[serde(deserialize_with = "optional_day")]
    pub min_date:      Option<CalendarDay>,
    #[serde(deserialize_with = "optional_day")]
    pub max_date:      Option<CalendarDay>,
    #[serde(deserialize_with = "optional_day")]
    pub initial_start: Option<CalendarDay>,
    #[serde(deserialize_with = "optional_day")]
    pub initial_end:   Option<CalendarDay>,
}

impl PickerConfig {
    #[must_use]
    pub const fn with_bounds(mut self, min_date: Option<CalendarDay>, max_date: Option<CalendarDay>) -> Self {
        self.min_date = min_date;
        self.max_date = max_date;
        self
    }

    #[must_use]
    pub const fn with_initial_range(
        mut self,
        initial_start: Option<CalendarDay>,
        initial_end: Option<CalendarDay>,
    ) -> Self {
        self.initial_start = initial_start;
        self.initial_end = initial_end;
        self
    }

    /// Builds a config from the date strings a host usually holds.
    /// Empty strings count as absent.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for a non-empty string that is not `YYYY-MM-DD`.
    pub fn from_strs(
        min_date: &str,
        max_date: &str,
        initial_start: &str,
        initial_end: &str,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            min_date:      parse_optional(min_date)?,
            max_date:      parse_optional(max_date)?,
            initial_start: parse_optional(initial_start)?,
            initial_end:   parse_optional(initial_end)?,
        })
    }

    /// # Errors
    /// Returns `ConfigError::InvalidBounds` if `min_date > max_date`.
    pub fn bounds(&self) -> Result<Bounds, ConfigError> {
        Bounds::new(self.min_date, self.max_date)
    }
}

fn parse_optional(s: &str) -> Result<Option<CalendarDay>, ParseError> {
    match s.parse::<CalendarDay>() {
        Ok(day) => Ok(Some(day)),
        Err(ParseError::EmptyInput) => Ok(None),
        Err(err) => Err(err),
    }
}

fn optional_day<'de, D>(deserializer: D) -> Result<Option<CalendarDay>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = Option::<String>::deserialize(deserializer)?;
    match s {
        Some(s) => parse_optional(&s).map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}
