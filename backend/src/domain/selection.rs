//! Date selection state machines for the booking calendar.
//!
//! Selection state is owned by the booking flow and mutated exclusively
//! through the events defined here, so the rendered calendar and the draft
//! can never disagree about what is selected. Single-date selection covers
//! tours and yacht day-charters; two-endpoint range selection covers hotel
//! stays.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{CalendarFocusDate, DateBounds, DaySelection};
use tracing::debug;

use crate::domain::calendar::is_date_disabled;

/// Single-date selection for tour and yacht bookings
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SingleSelection {
    pub date: Option<NaiveDate>,
}

impl SingleSelection {
    pub fn select(&mut self, date: NaiveDate) {
        self.date = Some(date);
    }

    pub fn clear(&mut self) {
        self.date = None;
    }
}

/// Two-endpoint range selection for hotel stays.
///
/// Whenever both endpoints are set, `end` is strictly later than `start`.
/// A range can never have `start == end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RangeSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

/// Derived state of a range selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeState {
    /// Neither endpoint set
    NoStart,
    /// Start set, awaiting end
    HasStart(NaiveDate),
    /// Both endpoints set, end strictly after start
    HasRange(NaiveDate, NaiveDate),
}

impl RangeSelection {
    pub fn state(&self) -> RangeState {
        match (self.start, self.end) {
            (None, _) => RangeState::NoStart,
            (Some(start), None) => RangeState::HasStart(start),
            (Some(start), Some(end)) => RangeState::HasRange(start, end),
        }
    }

    /// Apply a calendar click to the selection.
    ///
    /// - `NoStart`: the click becomes the start.
    /// - `HasStart`: a click after the start completes the range; a click on
    ///   or before the start replaces the start.
    /// - `HasRange`: any click restarts endpoint selection with the clicked
    ///   date as the new lone start and the end cleared.
    pub fn click(&mut self, date: NaiveDate) {
        match self.state() {
            RangeState::NoStart => {
                self.start = Some(date);
            }
            RangeState::HasStart(start) => {
                if date > start {
                    self.end = Some(date);
                } else {
                    // Equal clicks replace the start rather than forming a
                    // zero-length range.
                    self.start = Some(date);
                }
            }
            RangeState::HasRange(_, _) => {
                self.start = Some(date);
                self.end = None;
            }
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self.state(), RangeState::HasRange(_, _))
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }

    /// Display classification for a calendar day. Rendering only; the state
    /// machine never reads this back.
    pub fn classify(&self, date: NaiveDate) -> DaySelection {
        match (self.start, self.end) {
            (Some(start), _) if date == start => DaySelection::Start,
            (_, Some(end)) if date == end => DaySelection::End,
            (Some(start), Some(end)) if date > start && date < end => DaySelection::InRange,
            _ => DaySelection::None,
        }
    }
}

/// Selection held by a date picker instance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Selection {
    Single(SingleSelection),
    Range(RangeSelection),
}

impl Selection {
    pub fn classify(&self, date: NaiveDate) -> DaySelection {
        match self {
            Selection::Single(single) => match single.date {
                Some(selected) if selected == date => DaySelection::Start,
                _ => DaySelection::None,
            },
            Selection::Range(range) => range.classify(date),
        }
    }
}

/// Events a date picker can receive from the UI layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DatePickerEvent {
    PreviousMonth,
    NextMonth,
    ClickDate(NaiveDate),
}

/// Selection change emitted to the owner of the picker
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionChange {
    Date(NaiveDate),
    Range(RangeSelection),
}

/// Reducer-style date picker: one displayed month, one selection, one
/// transition function. The displayed month is independent of the selection
/// and navigation is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DatePicker {
    pub focus: CalendarFocusDate,
    pub bounds: DateBounds,
    pub selection: Selection,
}

impl DatePicker {
    /// Picker in single-date mode, focused on the current month
    pub fn single(bounds: DateBounds) -> Self {
        Self {
            focus: CalendarFocusDate::default(),
            bounds,
            selection: Selection::Single(SingleSelection::default()),
        }
    }

    /// Picker in range mode, focused on the current month
    pub fn range(bounds: DateBounds) -> Self {
        Self {
            focus: CalendarFocusDate::default(),
            bounds,
            selection: Selection::Range(RangeSelection::default()),
        }
    }

    pub fn with_focus(mut self, month: u32, year: u32) -> Self {
        self.focus = CalendarFocusDate { month, year };
        self
    }

    /// Handle a picker event and report any resulting selection change.
    ///
    /// Clicks on disabled dates are silently ignored - disabled days are not
    /// interactive, so an inert click is a no-op rather than an error.
    pub fn apply(&mut self, event: DatePickerEvent, today: NaiveDate) -> Option<SelectionChange> {
        match event {
            DatePickerEvent::PreviousMonth => {
                self.focus = self.focus.previous();
                None
            }
            DatePickerEvent::NextMonth => {
                self.focus = self.focus.next();
                None
            }
            DatePickerEvent::ClickDate(date) => {
                if is_date_disabled(date, today, &self.bounds) {
                    debug!("Ignoring click on disabled date {}", date);
                    return None;
                }
                match &mut self.selection {
                    Selection::Single(single) => {
                        single.select(date);
                        Some(SelectionChange::Date(date))
                    }
                    Selection::Range(range) => {
                        range.click(date);
                        Some(SelectionChange::Range(*range))
                    }
                }
            }
        }
    }
}
