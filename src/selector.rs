use tracing::{debug, trace, warn};

use crate::{Bounds, CalendarDay, DayRange, HighlightSpan, SelectionState, compute_highlights};

/// Conditions the selector can run into.
///
/// `InvalidInitialRange` and `OutOfBounds` are recovered inside
/// [`RangeSelector`] and only logged; `IncompleteSelection` is returned to the
/// caller of [`confirm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// Initial start supplied after the initial end.
    #[error("Invalid initial range: start ({start}) is after end ({end})")]
    InvalidInitialRange { start: CalendarDay, end: CalendarDay },

    /// Tapped day lies outside the configured bounds.
    #[error("Day {day} is outside the selectable bounds")]
    OutOfBounds { day: CalendarDay },

    /// Confirmation requested before both ends were chosen.
    #[error("Selection is incomplete: both a start and an end day are required")]
    IncompleteSelection,
}

/// Returns the selected range of a complete selection.
///
/// # Errors
/// Returns `SelectionError::IncompleteSelection` for `Empty` and `PartialRange`.
pub const fn confirm(state: &SelectionState) -> Result<DayRange, SelectionError> {
    match state.range() {
        Some(range) => Ok(range),
        None => Err(SelectionError::IncompleteSelection),
    }
}

/// Owns the selection of one picker presentation and applies taps to it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RangeSelector {
    state:  SelectionState,
    bounds: Bounds,
}

impl RangeSelector {
    /// An empty selection limited to `bounds`.
    pub const fn new(bounds: Bounds) -> Self {
        Self {
            state: SelectionState::Empty,
            bounds,
        }
    }

    /// Resets the selection from optional initial days.
    ///
    /// An initial start after the initial end leaves the selection empty.
    /// Initial days are not checked against the bounds.
    pub fn initialize(
        &mut self,
        initial_start: Option<CalendarDay>,
        initial_end: Option<CalendarDay>,
    ) -> SelectionState {
        self.state = SelectionState::seeded(initial_start, initial_end).unwrap_or_else(|err| {
            warn!(error = %err, "discarding initial range");
            SelectionState::Empty
        });
        trace!(state = ?self.state, "selection initialized");
        self.state
    }

    pub const fn state(&self) -> SelectionState {
        self.state
    }

    pub const fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Applies a tap and returns the new state.
    ///
    /// Days outside the bounds leave the selection unchanged.
    pub fn on_day_tapped(&mut self, day: CalendarDay) -> SelectionState {
        if let Err(err) = self.bounds.check(day) {
            debug!(error = %err, "ignoring tap");
            return self.state;
        }

        let previous = self.state;
        self.state = previous.advance(day);
        trace!(%day, from = ?previous, to = ?self.state, "selection advanced");
        self.state
    }

    /// Highlight span of the current selection.
    pub fn highlights(&self) -> HighlightSpan {
        compute_highlights(&self.state)
    }

    /// Whether a confirm control should be enabled.
    pub const fn can_confirm(&self) -> bool {
        self.state.is_complete()
    }

    /// # Errors
    /// Returns `SelectionError::IncompleteSelection` until both ends are chosen.
    pub fn confirm(&self) -> Result<DayRange, SelectionError> {
        let range = confirm(&self.state)?;
        debug!(%range, "selection confirmed");
        Ok(range)
    }

    /// Abandons the selection. The state is left as is; the selector is
    /// expected to be dropped.
    pub fn cancel(&self) {
        debug!(state = ?self.state, "selection cancelled");
    }

    /// Day the calendar should show first: the selection start, else `today`.
    pub fn focus_day(&self, today: CalendarDay) -> CalendarDay {
        self.state.start().unwrap_or(today)
    }
}
