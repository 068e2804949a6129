//! Calendar domain logic for the booking flow.
//!
//! This module contains all business logic related to calendar operations:
//! month grid generation, navigation, date disablement, and selection
//! highlighting. The UI should only handle presentation concerns, while all
//! calendar computations and business rules are handled here.
//!
//! "Today" is always supplied by the caller rather than read from the system
//! clock, so every operation here is deterministic under test. Only
//! [`CalendarService::get_current_date`] touches the host clock.

use chrono::{Datelike, Local, NaiveDate};
use shared::{
    CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth, CurrentDateResponse,
    DateBounds, DaySelection,
};
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

use crate::domain::selection::Selection;

/// True when `date` is inert for selection purposes: strictly before today,
/// or outside the caller-supplied min/max bounds.
pub fn is_date_disabled(date: NaiveDate, today: NaiveDate, bounds: &DateBounds) -> bool {
    if date < today {
        return true;
    }
    if let Some(min) = bounds.min {
        if date < min {
            return true;
        }
    }
    if let Some(max) = bounds.max {
        if date > max {
            return true;
        }
    }
    false
}

/// Exact year/month/day match against the render-time "now". Used only for
/// visual highlighting; carries no selection semantics.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Calendar service that handles all calendar-related business logic
#[derive(Clone)]
pub struct CalendarService {
    /// Current focus date for calendar navigation (month/year only).
    /// Kept in memory, never persisted.
    current_focus_date: Arc<Mutex<CalendarFocusDate>>,
}

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self {
            current_focus_date: Arc::new(Mutex::new(CalendarFocusDate::default())),
        }
    }

    /// Generate a calendar month grid with disablement and selection
    /// highlighting applied to every day cell.
    pub fn generate_calendar_month(
        &self,
        month: u32,
        year: u32,
        today: NaiveDate,
        bounds: &DateBounds,
        selection: &Selection,
    ) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        debug!("Generating calendar for {}/{}", month, year);
        debug!(
            "Days in month: {}, first day of week: {}",
            days_in_month, first_day
        );

        let mut calendar_days = Vec::new();

        // Empty cells before the first day of the month keep the grid aligned
        for _ in 0..first_day {
            calendar_days.push(CalendarDay {
                day: 0,
                date: None,
                disabled: true,
                is_today: false,
                selection: DaySelection::None,
                day_type: CalendarDayType::PaddingBefore,
            });
        }

        for day in 1..=days_in_month {
            let date = NaiveDate::from_ymd_opt(year as i32, month, day);
            let (disabled, today_flag, day_selection) = match date {
                Some(d) => (
                    is_date_disabled(d, today, bounds),
                    is_today(d, today),
                    selection.classify(d),
                ),
                // Unreachable for valid month/year pairs; render as inert
                None => (true, false, DaySelection::None),
            };

            calendar_days.push(CalendarDay {
                day,
                date,
                disabled,
                is_today: today_flag,
                selection: day_selection,
                day_type: CalendarDayType::MonthDay,
            });
        }

        debug!("Total calendar days created: {}", calendar_days.len());

        CalendarMonth {
            month,
            year,
            days: calendar_days,
            first_day_of_week: first_day,
        }
    }

    /// Get the number of days in a given month and year
    pub fn days_in_month(&self, month: u32, year: u32) -> u32 {
        match month {
            2 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            4 | 6 | 9 | 11 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: u32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: u32) -> u32 {
        if let Some(date) = NaiveDate::from_ymd_opt(year as i32, month, 1) {
            date.weekday().num_days_from_sunday()
        } else {
            // Invalid date, fallback to 0 (Sunday)
            0
        }
    }

    /// Get the human-readable name for a month number
    pub fn month_name(&self, month: u32) -> &'static str {
        match month {
            1 => "January",
            2 => "February",
            3 => "March",
            4 => "April",
            5 => "May",
            6 => "June",
            7 => "July",
            8 => "August",
            9 => "September",
            10 => "October",
            11 => "November",
            12 => "December",
            _ => "Invalid Month",
        }
    }

    /// Whether a date is disabled for the given render-time today and bounds
    pub fn is_date_disabled(&self, date: NaiveDate, today: NaiveDate, bounds: &DateBounds) -> bool {
        is_date_disabled(date, today, bounds)
    }

    /// Navigate to the previous month
    pub fn previous_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        let focus = CalendarFocusDate {
            month: current_month,
            year: current_year,
        }
        .previous();
        (focus.month, focus.year)
    }

    /// Navigate to the next month
    pub fn next_month(&self, current_month: u32, current_year: u32) -> (u32, u32) {
        let focus = CalendarFocusDate {
            month: current_month,
            year: current_year,
        }
        .next();
        (focus.month, focus.year)
    }

    /// Get current date information from the host clock
    pub fn get_current_date(&self) -> CurrentDateResponse {
        let now = Local::now();
        let month = now.month();
        let year = now.year() as u32;
        let day = now.day();

        let month_name = self.month_name(month);
        let formatted_date = format!("{} {}, {}", month_name, day, year);
        let iso_date = format!("{:04}-{:02}-{:02}", year, month, day);

        CurrentDateResponse {
            month,
            year,
            day,
            formatted_date,
            iso_date,
        }
    }

    /// Get the current focus date for calendar navigation
    pub fn get_focus_date(&self) -> CalendarFocusDate {
        *self.current_focus_date.lock().unwrap()
    }

    /// Set the focus date for calendar navigation
    pub fn set_focus_date(&self, month: u32, year: u32) -> Result<CalendarFocusDate, String> {
        if month < 1 || month > 12 {
            return Err(format!("Invalid month: {}. Must be between 1 and 12", month));
        }

        let new_focus_date = CalendarFocusDate { month, year };

        {
            let mut focus_date = self.current_focus_date.lock().unwrap();
            *focus_date = new_focus_date;
        }

        info!("Calendar focus set to {}/{}", month, year);
        Ok(new_focus_date)
    }

    /// Navigate to the previous month
    pub fn navigate_previous_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (prev_month, prev_year) = self.previous_month(current_focus.month, current_focus.year);

        // This should never fail since previous_month returns valid values
        self.set_focus_date(prev_month, prev_year).unwrap()
    }

    /// Navigate to the next month
    pub fn navigate_next_month(&self) -> CalendarFocusDate {
        let current_focus = self.get_focus_date();
        let (next_month, next_year) = self.next_month(current_focus.month, current_focus.year);

        // This should never fail since next_month returns valid values
        self.set_focus_date(next_month, next_year).unwrap()
    }
}

impl Default for CalendarService {
    fn default() -> Self {
        Self::new()
    }
}
