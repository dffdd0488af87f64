//! The three-state range selection and its tap protocol.

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, DayRange, SelectionError};

/// Where a two-tap range selection currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionState {
    /// No start chosen.
    #[default]
    Empty,
    /// Start chosen, waiting for the end.
    PartialRange { start: CalendarDay },
    /// Both ends chosen. `DayRange` keeps `start <= end`.
    CompleteRange(DayRange),
}

impl SelectionState {
    /// Builds the state a picker opens with from optional initial days.
    ///
    /// # Errors
    /// Returns `SelectionError::InvalidInitialRange` when both days are given
    /// and the start falls after the end. The pair is never swapped.
    pub fn seeded(
        initial_start: Option<CalendarDay>,
        initial_end: Option<CalendarDay>,
    ) -> Result<Self, SelectionError> {
        match (initial_start, initial_end) {
            (Some(start), Some(end)) => DayRange::new(start, end)
                .map(Self::CompleteRange)
                .map_err(|_| SelectionError::InvalidInitialRange { start, end }),
            (Some(start), None) | (None, Some(start)) => Ok(Self::PartialRange { start }),
            (None, None) => Ok(Self::Empty),
        }
    }

    /// Applies one tap and returns the resulting state.
    ///
    /// A tap on an empty or complete selection starts over. While only a start
    /// is chosen, an earlier day replaces the start and any other day closes
    /// the range.
    #[must_use]
    pub fn advance(self, day: CalendarDay) -> Self {
        match self {
            Self::Empty | Self::CompleteRange(_) => Self::PartialRange { start: day },
            // `DayRange::new` only refuses a day before the start.
            Self::PartialRange { start } => match DayRange::new(start, day) {
                Ok(range) => Self::CompleteRange(range),
                Err(_) => Self::PartialRange { start: day },
            },
        }
    }

    pub const fn start(&self) -> Option<CalendarDay> {
        match self {
            Self::Empty => None,
            Self::PartialRange { start } => Some(*start),
            Self::CompleteRange(range) => Some(range.start()),
        }
    }

    pub const fn end(&self) -> Option<CalendarDay> {
        match self {
            Self::CompleteRange(range) => Some(range.end()),
            Self::Empty | Self::PartialRange { .. } => None,
        }
    }

    /// The selected range, once both ends are chosen.
    pub const fn range(&self) -> Option<DayRange> {
        match self {
            Self::CompleteRange(range) => Some(*range),
            Self::Empty | Self::PartialRange { .. } => None,
        }
    }

    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::CompleteRange(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{complete, day, partial};

    #[test]
    fn test_seeded_cases() {
        struct TestCase {
            start:       Option<CalendarDay>,
            end:         Option<CalendarDay>,
            expected:    Result<SelectionState, SelectionError>,
            description: &'static str,
        }

        let cases = [
            TestCase {
                start:       None,
                end:         None,
                expected:    Ok(SelectionState::Empty),
                description: "nothing supplied",
            },
            TestCase {
                start:       Some(day(2024, 5, 10)),
                end:         None,
                expected:    Ok(partial(day(2024, 5, 10))),
                description: "start only",
            },
            TestCase {
                start:       None,
                end:         Some(day(2024, 5, 15)),
                expected:    Ok(partial(day(2024, 5, 15))),
                description: "end only",
            },
            TestCase {
                start:       Some(day(2024, 5, 10)),
                end:         Some(day(2024, 5, 15)),
                expected:    Ok(complete(day(2024, 5, 10), day(2024, 5, 15))),
                description: "ordered pair",
            },
            TestCase {
                start:       Some(day(2024, 5, 10)),
                end:         Some(day(2024, 5, 10)),
                expected:    Ok(complete(day(2024, 5, 10), day(2024, 5, 10))),
                description: "single day pair",
            },
            TestCase {
                start:       Some(day(2024, 5, 15)),
                end:         Some(day(2024, 5, 10)),
                expected:    Err(SelectionError::InvalidInitialRange {
                    start: day(2024, 5, 15),
                    end:   day(2024, 5, 10),
                }),
                description: "start after end is rejected, not swapped",
            },
        ];

        for case in &cases {
            assert_eq!(
                SelectionState::seeded(case.start, case.end),
                case.expected,
                "{}",
                case.description
            );
        }
    }

    #[test]
    fn test_tap_sequence_from_empty() {
        let state = SelectionState::Empty.advance(day(2024, 5, 10));
        assert_eq!(state, partial(day(2024, 5, 10)));

        let state = state.advance(day(2024, 5, 15));
        assert_eq!(state, complete(day(2024, 5, 10), day(2024, 5, 15)));
    }

    #[test]
    fn test_earlier_tap_replaces_start() {
        let state = partial(day(2024, 5, 10)).advance(day(2024, 5, 3));
        assert_eq!(state, partial(day(2024, 5, 3)));
    }

    #[test]
    fn test_same_day_tap_completes_single_day_range() {
        let state = partial(day(2024, 5, 10)).advance(day(2024, 5, 10));
        assert_eq!(state, complete(day(2024, 5, 10), day(2024, 5, 10)));
    }

    #[test]
    fn test_third_tap_resets() {
        let state = complete(day(2024, 5, 10), day(2024, 5, 15));

        assert_eq!(state.advance(day(2024, 6, 1)), partial(day(2024, 6, 1)));
        // Inside or before the old range makes no difference.
        assert_eq!(state.advance(day(2024, 5, 12)), partial(day(2024, 5, 12)));
        assert_eq!(state.advance(day(2024, 5, 1)), partial(day(2024, 5, 1)));
    }

    #[test]
    fn test_accessors() {
        assert_eq!(SelectionState::Empty.start(), None);
        assert_eq!(SelectionState::Empty.end(), None);
        assert_eq!(SelectionState::Empty.range(), None);

        let p = partial(day(2024, 5, 10));
        assert_eq!(p.start(), Some(day(2024, 5, 10)));
        assert_eq!(p.end(), None);
        assert!(!p.is_complete());

        let c = complete(day(2024, 5, 10), day(2024, 5, 15));
        assert_eq!(c.start(), Some(day(2024, 5, 10)));
        assert_eq!(c.end(), Some(day(2024, 5, 15)));
        assert!(c.is_complete());
        assert_eq!(c.range().map(|r| r.len()), Some(6));
    }

    #[test]
    fn test_default_is_empty() {
        assert_eq!(SelectionState::default(), SelectionState::Empty);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(partial(day(2024, 5, 10))).expect("serialize partial");
        assert_eq!(json, serde_json::json!({ "partialRange": { "start": "2024-05-10" } }));

        let json = serde_json::to_value(complete(day(2024, 5, 10), day(2024, 5, 15))).expect("serialize complete");
        assert_eq!(json, serde_json::json!({ "completeRange": "2024-05-10/2024-05-15" }));

        let json = serde_json::to_value(SelectionState::Empty).expect("serialize empty");
        assert_eq!(json, serde_json::json!("empty"));

        let parsed: SelectionState =
            serde_json::from_value(serde_json::json!({ "completeRange": "2024-05-10/2024-05-15" }))
                .expect("deserialize complete");
        assert_eq!(parsed, complete(day(2024, 5, 10), day(2024, 5, 15)));
    }
}
