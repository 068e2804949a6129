use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use shared::{BookableProduct, ProductCategory, RateOption, StartTime};
use uuid::Uuid;

use crate::domain::selection::RangeSelection;

/// Occupancy bounds per product category: (floor, ceiling)
pub const HOTEL_GUEST_BOUNDS: (u32, u32) = (1, 10);
pub const TOUR_PARTICIPANT_BOUNDS: (u32, u32) = (1, 20);
pub const YACHT_GUEST_BOUNDS: (u32, u32) = (1, 20);

/// Bounded occupancy counter. Increment and decrement clamp silently at the
/// bounds rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Occupancy {
    pub count: u32,
    pub floor: u32,
    pub ceiling: u32,
}

impl Occupancy {
    /// New counter starting at the floor
    pub fn new(bounds: (u32, u32)) -> Self {
        Self {
            count: bounds.0,
            floor: bounds.0,
            ceiling: bounds.1,
        }
    }

    pub fn increment(&mut self) {
        if self.count < self.ceiling {
            self.count += 1;
        }
    }

    pub fn decrement(&mut self) {
        if self.count > self.floor {
            self.count -= 1;
        }
    }
}

/// In-progress hotel reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotelDraft {
    pub id: String,
    pub product: BookableProduct,
    pub stay: RangeSelection,
    pub rate: Option<RateOption>,
    pub guests: Occupancy,
    pub notes: String,
    /// Always equals the pricing service output for the current fields
    pub total_price: f64,
}

/// In-progress tour reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TourDraft {
    pub id: String,
    pub product: BookableProduct,
    pub tour_date: Option<NaiveDate>,
    pub participants: Occupancy,
    pub notes: String,
    pub total_price: f64,
}

/// In-progress yacht charter reservation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YachtDraft {
    pub id: String,
    pub product: BookableProduct,
    pub booking_date: Option<NaiveDate>,
    pub start_time: Option<StartTime>,
    pub guests: Occupancy,
    pub notes: String,
    pub total_price: f64,
}

/// The accumulating state of one in-progress reservation.
///
/// One variant per product category, each carrying only the fields relevant
/// to it. Created when the booking dialog opens for a product, discarded
/// when the dialog closes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BookingDraft {
    Hotel(HotelDraft),
    Tour(TourDraft),
    Yacht(YachtDraft),
}

impl BookingDraft {
    /// Generate a draft ID for one booking dialog instance
    pub fn generate_id() -> String {
        format!("draft::{}", Uuid::new_v4())
    }

    /// Build the category-appropriate empty draft for a product. Occupancy
    /// counters start at their floor.
    pub fn for_product(product: &BookableProduct) -> Self {
        match product.category {
            ProductCategory::Hotel => BookingDraft::Hotel(HotelDraft {
                id: Self::generate_id(),
                product: product.clone(),
                stay: RangeSelection::default(),
                rate: None,
                guests: Occupancy::new(HOTEL_GUEST_BOUNDS),
                notes: String::new(),
                total_price: 0.0,
            }),
            ProductCategory::Tour => BookingDraft::Tour(TourDraft {
                id: Self::generate_id(),
                product: product.clone(),
                tour_date: None,
                participants: Occupancy::new(TOUR_PARTICIPANT_BOUNDS),
                notes: String::new(),
                total_price: 0.0,
            }),
            ProductCategory::Yacht => BookingDraft::Yacht(YachtDraft {
                id: Self::generate_id(),
                product: product.clone(),
                booking_date: None,
                start_time: None,
                guests: Occupancy::new(YACHT_GUEST_BOUNDS),
                notes: String::new(),
                total_price: 0.0,
            }),
        }
    }

    pub fn id(&self) -> &str {
        match self {
            BookingDraft::Hotel(draft) => &draft.id,
            BookingDraft::Tour(draft) => &draft.id,
            BookingDraft::Yacht(draft) => &draft.id,
        }
    }

    pub fn product(&self) -> &BookableProduct {
        match self {
            BookingDraft::Hotel(draft) => &draft.product,
            BookingDraft::Tour(draft) => &draft.product,
            BookingDraft::Yacht(draft) => &draft.product,
        }
    }

    pub fn category(&self) -> ProductCategory {
        self.product().category
    }

    pub fn total_price(&self) -> f64 {
        match self {
            BookingDraft::Hotel(draft) => draft.total_price,
            BookingDraft::Tour(draft) => draft.total_price,
            BookingDraft::Yacht(draft) => draft.total_price,
        }
    }
}

/// Reasons a booking draft cannot be submitted yet. All of these are
/// recoverable: the dialog stays open and the draft is preserved.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BookingValidationError {
    #[error("Check-in and check-out dates are required")]
    MissingStayDates,
    #[error("A room rate must be selected")]
    MissingRateOption,
    #[error("A tour date is required")]
    MissingTourDate,
    #[error("At least one participant is required")]
    NoParticipants,
    #[error("A charter date is required")]
    MissingCharterDate,
    #[error("A departure time is required")]
    MissingStartTime,
    #[error("At least one guest is required")]
    NoGuests,
}
