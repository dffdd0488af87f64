//! Shared constructors for unit tests.

use crate::{CalendarDay, DayRange, SelectionState};

pub fn day(year: u16, month: u8, day: u8) -> CalendarDay {
    CalendarDay::new(year, month, day).expect("test date should be valid")
}

pub fn range(start: CalendarDay, end: CalendarDay) -> DayRange {
    DayRange::new(start, end).expect("test range should be ordered")
}

pub fn complete(start: CalendarDay, end: CalendarDay) -> SelectionState {
    SelectionState::CompleteRange(range(start, end))
}

pub fn partial(start: CalendarDay) -> SelectionState {
    SelectionState::PartialRange { start }
}
