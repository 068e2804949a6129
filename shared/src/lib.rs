use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a bookable product. Immutable after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductCategory {
    Hotel,
    Tour,
    Yacht,
}

impl ProductCategory {
    /// Convert to string for storage and display
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Hotel => "hotel",
            ProductCategory::Tour => "tour",
            ProductCategory::Yacht => "yacht",
        }
    }

    /// Parse from string for storage loading
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "hotel" => Ok(ProductCategory::Hotel),
            "tour" => Ok(ProductCategory::Tour),
            "yacht" => Ok(ProductCategory::Yacht),
            _ => Err(format!("Invalid product category: {}", s)),
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A hotel, tour, or yacht offering from the catalog.
///
/// Constructed from catalog/search data and passed by reference into the
/// booking flow; the booking core never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookableProduct {
    pub id: String,
    pub name: String,
    pub location: String,
    pub category: ProductCategory,
    /// Base price in currency-agnostic units (must be non-negative)
    pub base_price: f64,
    /// ISO 4217 currency code, e.g. "USD"
    pub currency: String,
}

/// One rate tier for a hotel product (e.g. standard/deluxe/suite).
///
/// Exactly one rate option may be selected at submission time for hotel
/// bookings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateOption {
    pub id: String,
    pub name: String,
    /// Price per night for this tier
    pub nightly_price: f64,
    pub max_occupancy: u32,
}

impl RateOption {
    /// Build a rate option whose nightly price is derived from the product's
    /// base price and a tier multiplier.
    pub fn from_multiplier(
        product: &BookableProduct,
        id: &str,
        name: &str,
        multiplier: f64,
        max_occupancy: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            nightly_price: product.base_price * multiplier,
            max_occupancy,
        }
    }
}

/// Fixed hourly departure slots for yacht charters (09:00 through 16:00).
/// Any value outside this set is a caller error, not a validation concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartTime {
    #[serde(rename = "09:00")]
    NineAm,
    #[serde(rename = "10:00")]
    TenAm,
    #[serde(rename = "11:00")]
    ElevenAm,
    #[serde(rename = "12:00")]
    Noon,
    #[serde(rename = "13:00")]
    OnePm,
    #[serde(rename = "14:00")]
    TwoPm,
    #[serde(rename = "15:00")]
    ThreePm,
    #[serde(rename = "16:00")]
    FourPm,
}

impl StartTime {
    /// All slots in chronological order, for rendering the slot picker
    pub fn all() -> [StartTime; 8] {
        [
            StartTime::NineAm,
            StartTime::TenAm,
            StartTime::ElevenAm,
            StartTime::Noon,
            StartTime::OnePm,
            StartTime::TwoPm,
            StartTime::ThreePm,
            StartTime::FourPm,
        ]
    }

    /// Convert to "HH:MM" for storage and display
    pub fn as_str(&self) -> &'static str {
        match self {
            StartTime::NineAm => "09:00",
            StartTime::TenAm => "10:00",
            StartTime::ElevenAm => "11:00",
            StartTime::Noon => "12:00",
            StartTime::OnePm => "13:00",
            StartTime::TwoPm => "14:00",
            StartTime::ThreePm => "15:00",
            StartTime::FourPm => "16:00",
        }
    }

    /// Parse an "HH:MM" string into a slot
    pub fn from_string(s: &str) -> Result<Self, String> {
        match s {
            "09:00" => Ok(StartTime::NineAm),
            "10:00" => Ok(StartTime::TenAm),
            "11:00" => Ok(StartTime::ElevenAm),
            "12:00" => Ok(StartTime::Noon),
            "13:00" => Ok(StartTime::OnePm),
            "14:00" => Ok(StartTime::TwoPm),
            "15:00" => Ok(StartTime::ThreePm),
            "16:00" => Ok(StartTime::FourPm),
            _ => Err(format!("Invalid start time slot: {}", s)),
        }
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Optional min/max date bounds for a calendar instance
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DateBounds {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

/// Display classification of a calendar day relative to the current
/// selection. This is purely a rendering derivation - it must never be used
/// to reconstruct selection state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DaySelection {
    None,
    Start,
    End,
    InRange,
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum CalendarDayType {
    /// Empty padding day before the start of the month
    PaddingBefore,
    /// Actual day within the month
    MonthDay,
    /// Empty padding day after the end of the month (if needed for grid alignment)
    PaddingAfter,
}

/// Represents a single day cell in the booking calendar
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarDay {
    /// Day of month (0 for padding cells)
    pub day: u32,
    /// Full calendar date (None for padding cells)
    pub date: Option<NaiveDate>,
    /// Disabled days are inert: clicks on them must be ignored
    pub disabled: bool,
    /// Visual highlight only, carries no selection semantics
    pub is_today: bool,
    pub selection: DaySelection,
    pub day_type: CalendarDayType,
}

/// Represents a calendar month grid with selection and disablement applied
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CalendarMonth {
    pub month: u32,
    pub year: u32,
    pub days: Vec<CalendarDay>,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
}

/// Represents the current focus date for calendar navigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CalendarFocusDate {
    pub month: u32,
    pub year: u32,
}

impl Default for CalendarFocusDate {
    fn default() -> Self {
        let now = chrono::Local::now();
        Self {
            month: now.month(),
            year: now.year() as u32,
        }
    }
}

impl CalendarFocusDate {
    /// The month immediately before this one, with year rollover
    pub fn previous(&self) -> Self {
        if self.month == 1 {
            Self { month: 12, year: self.year - 1 }
        } else {
            Self { month: self.month - 1, year: self.year }
        }
    }

    /// The month immediately after this one, with year rollover
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self { month: 1, year: self.year + 1 }
        } else {
            Self { month: self.month + 1, year: self.year }
        }
    }
}

/// Current date information from the host clock
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CurrentDateResponse {
    pub month: u32,
    pub year: u32,
    pub day: u32,
    pub formatted_date: String, // e.g., "June 19, 2025"
    pub iso_date: String,       // e.g., "2025-06-19"
}

/// Finalized booking record handed to the external submission callback.
///
/// One variant per product category so that every field present is
/// meaningful for that category. Dates serialize as calendar dates
/// (YYYY-MM-DD) with no time component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NormalizedBooking {
    Hotel {
        room_id: String,
        check_in_date: NaiveDate,
        check_out_date: NaiveDate,
        guest_count: u32,
        total_price: f64,
        currency: String,
    },
    Tour {
        tour_id: String,
        tour_date: NaiveDate,
        participant_count: u32,
        total_price: f64,
        currency: String,
    },
    Yacht {
        yacht_id: String,
        booking_date: NaiveDate,
        start_time: StartTime,
        guest_count: u32,
        total_price: f64,
        currency: String,
    },
}

impl NormalizedBooking {
    pub fn total_price(&self) -> f64 {
        match self {
            NormalizedBooking::Hotel { total_price, .. } => *total_price,
            NormalizedBooking::Tour { total_price, .. } => *total_price,
            NormalizedBooking::Yacht { total_price, .. } => *total_price,
        }
    }

    pub fn currency(&self) -> &str {
        match self {
            NormalizedBooking::Hotel { currency, .. } => currency,
            NormalizedBooking::Tour { currency, .. } => currency,
            NormalizedBooking::Yacht { currency, .. } => currency,
        }
    }
}

/// Response after a booking draft passes validation and is handed off
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitBookingResponse {
    pub booking: NormalizedBooking,
    pub success_message: String,
}
