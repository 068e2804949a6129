//! Booking price calculation.
//!
//! All pricing is a pure function of the draft's current fields and is
//! recomputed on every relevant field change - the stored total on a draft
//! is never an independent source of truth.

use chrono::NaiveDate;

use crate::domain::models::booking::BookingDraft;
use crate::domain::selection::RangeState;

pub struct PricingService;

impl PricingService {
    /// Number of nights between check-in and check-out.
    ///
    /// Calendar-date difference is already a whole-day count: a stay ending
    /// the next calendar day is exactly 1 night regardless of clock time.
    pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
        (check_out - check_in).num_days()
    }

    /// Total price for the draft's current field values.
    ///
    /// An incomplete draft (missing rate, incomplete range, zero occupancy)
    /// totals 0 - that is the "nothing to price yet" rendering state, not an
    /// error.
    pub fn compute_total(draft: &BookingDraft) -> f64 {
        match draft {
            BookingDraft::Hotel(hotel) => match (&hotel.rate, hotel.stay.state()) {
                (Some(rate), RangeState::HasRange(check_in, check_out)) => {
                    let nights = Self::nights_between(check_in, check_out);
                    rate.nightly_price * nights as f64
                }
                _ => 0.0,
            },
            BookingDraft::Tour(tour) => {
                if tour.participants.count >= 1 {
                    tour.product.base_price * tour.participants.count as f64
                } else {
                    0.0
                }
            }
            BookingDraft::Yacht(yacht) => {
                // Full-charter day rate per guest, not per-night
                if yacht.guests.count >= 1 {
                    yacht.product.base_price * yacht.guests.count as f64
                } else {
                    0.0
                }
            }
        }
    }
}
