//! Per-day markings a calendar renderer needs to paint the selected range.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CalendarDay, SelectionState, prelude::*};

/// How a single highlighted day sits within the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMarking {
    pub is_range_start: bool,
    pub is_range_end:   bool,
}

/// Ordered map from every highlighted day to its marking.
///
/// Derived from a [`SelectionState`] on demand; it is never kept alongside the
/// state it was computed from.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deref, From, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighlightSpan(BTreeMap<CalendarDay, DayMarking>);

impl HighlightSpan {
    /// Highlighted days in ascending order.
    pub fn days(&self) -> impl DoubleEndedIterator<Item = CalendarDay> + '_ {
        self.0.keys().copied()
    }

    pub fn marking(&self, day: CalendarDay) -> Option<DayMarking> {
        self.0.get(&day).copied()
    }
}

/// Computes the highlight span for `state`.
///
/// Empty unless the selection is complete; otherwise one entry per day of the
/// range, start and end flagged. A single-day range gets one entry with both
/// flags set.
pub fn compute_highlights(state: &SelectionState) -> HighlightSpan {
    let Some(range) = state.range() else {
        return HighlightSpan::default();
    };

    let (start, end) = range.dates();
    range
        .days()
        .map(|day| {
            let marking = DayMarking {
                is_range_start: day == start,
                is_range_end:   day == end,
            };
            (day, marking)
        })
        .collect::<BTreeMap<_, _>>()
        .into()
}
