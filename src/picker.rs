//! Host-facing picker session.
//!
//! A [`RangePicker`] follows the host's visibility flag: making it visible
//! opens a fresh selection seeded from its [`PickerConfig`], hiding it drops
//! that selection. While open, taps are forwarded to a [`RangeSelector`] and
//! each one hands back the [`HighlightSpan`] to render.

use tracing::debug;

use crate::{
    Bounds, CalendarDay, ConfigError, DayRange, HighlightSpan, ParseError, PickerConfig, RangeSelector,
    SelectionError, SelectionState,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangePicker {
    config:   PickerConfig,
    bounds:   Bounds,
    selector: Option<RangeSelector>,
}

impl RangePicker {
    /// Creates a hidden picker.
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidBounds` if the config's min date is after its max date.
    pub fn new(config: PickerConfig) -> Result<Self, ConfigError> {
        let bounds = config.bounds()?;
        Ok(Self {
            config,
            bounds,
            selector: None,
        })
    }

    pub const fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub const fn is_visible(&self) -> bool {
        self.selector.is_some()
    }

    /// Mirrors the host's visibility flag.
    ///
    /// Showing an already visible picker keeps its current selection.
    pub fn set_visible(&mut self, visible: bool) {
        match (visible, self.selector.is_some()) {
            (true, false) => self.open(),
            (false, true) => self.close(),
            _ => {},
        }
    }

    fn open(&mut self) {
        let mut selector = RangeSelector::new(self.bounds);
        let state = selector.initialize(self.config.initial_start, self.config.initial_end);
        debug!(?state, "picker opened");
        self.selector = Some(selector);
    }

    fn close(&mut self) {
        self.selector = None;
        debug!("picker closed");
    }

    /// Current selection; `Empty` while hidden.
    pub fn selection(&self) -> SelectionState {
        self.selector.as_ref().map_or(SelectionState::Empty, RangeSelector::state)
    }

    /// Highlight span to render; empty while hidden.
    pub fn highlights(&self) -> HighlightSpan {
        self.selector
            .as_ref()
            .map(RangeSelector::highlights)
            .unwrap_or_default()
    }

    /// Forwards a tapped day and returns the span to render next.
    /// Ignored while hidden.
    pub fn tap(&mut self, day: CalendarDay) -> HighlightSpan {
        match self.selector.as_mut() {
            Some(selector) => {
                selector.on_day_tapped(day);
                selector.highlights()
            },
            None => {
                debug!(%day, "tap on hidden picker ignored");
                HighlightSpan::default()
            },
        }
    }

    /// Like [`RangePicker::tap`], for a calendar that reports `YYYY-MM-DD` strings.
    ///
    /// # Errors
    /// Returns `ParseError` if `day` is not a canonical calendar date; the
    /// selection is left untouched.
    pub fn tap_str(&mut self, day: &str) -> Result<HighlightSpan, ParseError> {
        let day = day.parse::<CalendarDay>()?;
        Ok(self.tap(day))
    }

    /// Whether the confirm control should be enabled.
    pub fn confirm_enabled(&self) -> bool {
        self.selector.as_ref().is_some_and(RangeSelector::can_confirm)
    }

    /// Day the calendar should open on: the selection start, else `today`.
    pub fn focus_day(&self, today: CalendarDay) -> CalendarDay {
        self.selector
            .as_ref()
            .map_or(today, |selector| selector.focus_day(today))
    }

    /// Confirms a complete selection.
    ///
    /// Calls `on_select` with the start and end as `YYYY-MM-DD` strings, then
    /// closes the picker.
    ///
    /// # Errors
    /// Returns `SelectionError::IncompleteSelection` if the picker is hidden or
    /// the range is not complete. Nothing is called and the picker stays as it was.
    pub fn confirm<F>(&mut self, on_select: F) -> Result<DayRange, SelectionError>
    where
        F: FnOnce(String, String),
    {
        let range = self
            .selector
            .as_ref()
            .ok_or(SelectionError::IncompleteSelection)?
            .confirm()?;

        on_select(range.start().to_string(), range.end().to_string());
        self.close();
        Ok(range)
    }

    /// Closes the picker without reporting a range.
    pub fn cancel(&mut self) {
        if let Some(selector) = &self.selector {
            selector.cancel();
        }
        self.close();
    }
}
