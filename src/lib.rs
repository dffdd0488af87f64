//! Day-granularity date range selection for calendar pickers.
//!
//! A user taps a start day and then an end day; the selection lives in a
//! [`SelectionState`] and every day of a complete range is reported through a
//! [`HighlightSpan`] for the calendar to paint. [`RangePicker`] wraps this in
//! the open / confirm / cancel lifecycle of a modal picker.
//!
//! ```
//! use calendar_range::{CalendarDay, RangeSelector, SelectionState};
//!
//! let mut selector = RangeSelector::default();
//! let start: CalendarDay = "2024-01-30".parse()?;
//! let end: CalendarDay = "2024-02-02".parse()?;
//!
//! selector.on_day_tapped(start);
//! assert!(matches!(selector.on_day_tapped(end), SelectionState::CompleteRange(_)));
//!
//! let days: Vec<String> = selector.highlights().days().map(|d| d.to_string()).collect();
//! assert_eq!(days, ["2024-01-30", "2024-01-31", "2024-02-01", "2024-02-02"]);
//! # Ok::<(), calendar_range::ParseError>(())
//! ```

mod bounds;
mod config;
mod consts;
mod day;
mod highlight;
mod picker;
mod prelude;
mod range;
mod selection;
mod selector;
#[cfg(test)]
mod test_utils;

pub use bounds::Bounds;
pub use config::{ConfigError, PickerConfig};
pub use consts::*;
pub use day::{CalendarDay, ParseError, days_in_month, is_leap_year};
pub use highlight::{DayMarking, HighlightSpan, compute_highlights};
pub use picker::RangePicker;
pub use range::{DayRange, Days, RangeError};
pub use selection::SelectionState;
pub use selector::{RangeSelector, SelectionError, confirm};
