//! Booking draft lifecycle and submission gating.
//!
//! This module contains the core business logic for assembling a
//! reservation: opening a draft for a product, applying field changes as
//! explicit events, keeping the displayed total in sync with the pricing
//! service, and gating submission behind a per-category completeness check.
//!
//! ## Business rules
//!
//! - Each booking dialog instance owns its draft exclusively
//! - The stored total is recomputed after every field change
//! - Hotel submission requires a complete stay range and a selected rate
//! - Tour submission requires a date and at least one participant
//! - Yacht submission requires a date, a departure slot, and at least one guest
//! - Validation failure preserves the draft; nothing is emitted

use anyhow::Result;
use chrono::NaiveDate;
use tracing::{info, warn};

use shared::{
    BookableProduct, NormalizedBooking, RateOption, StartTime, SubmitBookingResponse,
};

use crate::domain::models::booking::{BookingDraft, BookingValidationError};
use crate::domain::pricing::PricingService;
use crate::domain::selection::{RangeSelection, RangeState};

/// External collaborator that delivers a finalized booking. The network call
/// and its success/failure UI are the implementer's responsibility; the core
/// neither performs the call nor interprets its result.
pub trait BookingSubmitter: Send + Sync {
    fn submit_booking(&self, booking: &NormalizedBooking) -> Result<()>;
}

/// Field-change events a booking dialog can apply to its draft
#[derive(Debug, Clone, PartialEq)]
pub enum BookingEvent {
    /// Replace the hotel stay range (from the range date picker)
    SetStay(RangeSelection),
    /// Set the tour or charter date (from the single date picker)
    SetDate(NaiveDate),
    /// Select a hotel rate tier
    SelectRate(RateOption),
    /// Set the yacht departure slot
    SetStartTime(StartTime),
    IncrementOccupancy,
    DecrementOccupancy,
    SetNotes(String),
}

/// Service for managing booking drafts and submission
#[derive(Clone, Default)]
pub struct BookingService;

impl BookingService {
    pub fn new() -> Self {
        Self
    }

    /// Open a fresh draft for a product. The draft lives until the dialog
    /// closes; closing simply discards it.
    pub fn open_draft(&self, product: &BookableProduct) -> BookingDraft {
        info!(
            "Opening {} booking draft for product {}",
            product.category, product.id
        );
        let mut draft = BookingDraft::for_product(product);
        self.refresh_total(&mut draft);
        draft
    }

    /// Apply a field-change event to the draft, then refresh its total so
    /// the stored price always matches the pricing service output.
    ///
    /// Events that do not apply to the draft's category (e.g. a rate
    /// selection on a tour) are logged and ignored; the dialog for a
    /// category never renders controls for another category, so such an
    /// event is a caller wiring bug rather than a user error.
    pub fn handle_event(&self, draft: &mut BookingDraft, event: BookingEvent) {
        match (&mut *draft, event) {
            (BookingDraft::Hotel(hotel), BookingEvent::SetStay(stay)) => {
                hotel.stay = stay;
            }
            (BookingDraft::Hotel(hotel), BookingEvent::SelectRate(rate)) => {
                hotel.rate = Some(rate);
            }
            (BookingDraft::Hotel(hotel), BookingEvent::IncrementOccupancy) => {
                hotel.guests.increment();
            }
            (BookingDraft::Hotel(hotel), BookingEvent::DecrementOccupancy) => {
                hotel.guests.decrement();
            }
            (BookingDraft::Hotel(hotel), BookingEvent::SetNotes(notes)) => {
                hotel.notes = notes;
            }
            (BookingDraft::Tour(tour), BookingEvent::SetDate(tour_date)) => {
                tour.tour_date = Some(tour_date);
            }
            (BookingDraft::Tour(tour), BookingEvent::IncrementOccupancy) => {
                tour.participants.increment();
            }
            (BookingDraft::Tour(tour), BookingEvent::DecrementOccupancy) => {
                tour.participants.decrement();
            }
            (BookingDraft::Tour(tour), BookingEvent::SetNotes(notes)) => {
                tour.notes = notes;
            }
            (BookingDraft::Yacht(yacht), BookingEvent::SetDate(booking_date)) => {
                yacht.booking_date = Some(booking_date);
            }
            (BookingDraft::Yacht(yacht), BookingEvent::SetStartTime(start_time)) => {
                yacht.start_time = Some(start_time);
            }
            (BookingDraft::Yacht(yacht), BookingEvent::IncrementOccupancy) => {
                yacht.guests.increment();
            }
            (BookingDraft::Yacht(yacht), BookingEvent::DecrementOccupancy) => {
                yacht.guests.decrement();
            }
            (BookingDraft::Yacht(yacht), BookingEvent::SetNotes(notes)) => {
                yacht.notes = notes;
            }
            (mismatched, event) => {
                warn!(
                    "Ignoring {:?} event on {} draft",
                    event,
                    mismatched.category()
                );
            }
        }
        self.refresh_total(draft);
    }

    /// Recompute and store the draft total from its current fields
    pub fn refresh_total(&self, draft: &mut BookingDraft) {
        let total = PricingService::compute_total(draft);
        match draft {
            BookingDraft::Hotel(hotel) => hotel.total_price = total,
            BookingDraft::Tour(tour) => tour.total_price = total,
            BookingDraft::Yacht(yacht) => yacht.total_price = total,
        }
    }

    /// Gate submission behind the category-specific completeness check and
    /// produce the normalized record on success. The draft itself is never
    /// consumed or modified: a failed validation leaves the dialog open with
    /// everything the user entered intact.
    pub fn validate_for_submit(
        &self,
        draft: &BookingDraft,
    ) -> Result<NormalizedBooking, BookingValidationError> {
        match draft {
            BookingDraft::Hotel(hotel) => {
                let (check_in, check_out) = match hotel.stay.state() {
                    RangeState::HasRange(check_in, check_out) => (check_in, check_out),
                    _ => return Err(BookingValidationError::MissingStayDates),
                };
                let rate = hotel
                    .rate
                    .as_ref()
                    .ok_or(BookingValidationError::MissingRateOption)?;

                Ok(NormalizedBooking::Hotel {
                    room_id: rate.id.clone(),
                    check_in_date: check_in,
                    check_out_date: check_out,
                    guest_count: hotel.guests.count,
                    total_price: PricingService::compute_total(draft),
                    currency: hotel.product.currency.clone(),
                })
            }
            BookingDraft::Tour(tour) => {
                let tour_date = tour
                    .tour_date
                    .ok_or(BookingValidationError::MissingTourDate)?;
                if tour.participants.count < 1 {
                    return Err(BookingValidationError::NoParticipants);
                }

                Ok(NormalizedBooking::Tour {
                    tour_id: tour.product.id.clone(),
                    tour_date,
                    participant_count: tour.participants.count,
                    total_price: PricingService::compute_total(draft),
                    currency: tour.product.currency.clone(),
                })
            }
            BookingDraft::Yacht(yacht) => {
                let booking_date = yacht
                    .booking_date
                    .ok_or(BookingValidationError::MissingCharterDate)?;
                let start_time = yacht
                    .start_time
                    .ok_or(BookingValidationError::MissingStartTime)?;
                if yacht.guests.count < 1 {
                    return Err(BookingValidationError::NoGuests);
                }

                Ok(NormalizedBooking::Yacht {
                    yacht_id: yacht.product.id.clone(),
                    booking_date,
                    start_time,
                    guest_count: yacht.guests.count,
                    total_price: PricingService::compute_total(draft),
                    currency: yacht.product.currency.clone(),
                })
            }
        }
    }

    /// Validate the draft and hand the normalized record to the submitter
    pub fn submit(
        &self,
        draft: &BookingDraft,
        submitter: &dyn BookingSubmitter,
    ) -> Result<SubmitBookingResponse> {
        let booking = self.validate_for_submit(draft)?;
        submitter.submit_booking(&booking)?;

        let success_message = format!(
            "Booking request for {} created (total {:.2} {})",
            draft.product().name,
            booking.total_price(),
            booking.currency()
        );
        info!("{}", success_message);

        Ok(SubmitBookingResponse {
            booking,
            success_message,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ProductCategory;
    use std::sync::Mutex;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn product(category: ProductCategory, base_price: f64) -> BookableProduct {
        BookableProduct {
            id: format!("{}::test", category.as_str()),
            name: "Test Product".to_string(),
            location: "Paros".to_string(),
            category,
            base_price,
            currency: "USD".to_string(),
        }
    }

    fn deluxe_rate(product: &BookableProduct) -> RateOption {
        RateOption::from_multiplier(product, "rate::deluxe", "Deluxe", 1.5, 3)
    }

    fn stay(check_in: NaiveDate, check_out: NaiveDate) -> RangeSelection {
        let mut range = RangeSelection::default();
        range.click(check_in);
        range.click(check_out);
        range
    }

    /// Records submitted bookings instead of calling a network
    #[derive(Default)]
    struct RecordingSubmitter {
        submitted: Mutex<Vec<NormalizedBooking>>,
    }

    impl BookingSubmitter for RecordingSubmitter {
        fn submit_booking(&self, booking: &NormalizedBooking) -> Result<()> {
            self.submitted.lock().unwrap().push(booking.clone());
            Ok(())
        }
    }

    #[test]
    fn test_hotel_end_to_end() {
        // Base price 1000, deluxe tier at 1500/night, June 1 - June 4
        let service = BookingService::new();
        let hotel = product(ProductCategory::Hotel, 1000.0);
        let mut draft = service.open_draft(&hotel);

        service.handle_event(&mut draft, BookingEvent::SelectRate(deluxe_rate(&hotel)));
        service.handle_event(
            &mut draft,
            BookingEvent::SetStay(stay(date(2024, 6, 1), date(2024, 6, 4))),
        );
        assert_eq!(draft.total_price(), 4500.0);

        let submitter = RecordingSubmitter::default();
        let response = service.submit(&draft, &submitter).unwrap();

        match &response.booking {
            NormalizedBooking::Hotel {
                room_id,
                check_in_date,
                check_out_date,
                guest_count,
                total_price,
                currency,
            } => {
                assert_eq!(room_id, "rate::deluxe");
                assert_eq!(*check_in_date, date(2024, 6, 1));
                assert_eq!(*check_out_date, date(2024, 6, 4));
                assert_eq!(*guest_count, 1);
                assert_eq!(*total_price, 4500.0);
                assert_eq!(currency, "USD");
            }
            other => panic!("expected hotel booking, got {:?}", other),
        }
        assert_eq!(submitter.submitted.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_hotel_rejected_without_rate_even_with_dates() {
        let service = BookingService::new();
        let hotel = product(ProductCategory::Hotel, 1000.0);
        let mut draft = service.open_draft(&hotel);

        service.handle_event(
            &mut draft,
            BookingEvent::SetStay(stay(date(2024, 6, 1), date(2024, 6, 4))),
        );
        assert_eq!(
            service.validate_for_submit(&draft),
            Err(BookingValidationError::MissingRateOption)
        );

        // Selecting a rate makes the same draft submittable
        service.handle_event(&mut draft, BookingEvent::SelectRate(deluxe_rate(&hotel)));
        assert!(service.validate_for_submit(&draft).is_ok());
    }

    #[test]
    fn test_hotel_rejected_with_incomplete_range() {
        let service = BookingService::new();
        let hotel = product(ProductCategory::Hotel, 1000.0);
        let mut draft = service.open_draft(&hotel);
        service.handle_event(&mut draft, BookingEvent::SelectRate(deluxe_rate(&hotel)));

        let mut lone_start = RangeSelection::default();
        lone_start.click(date(2024, 6, 1));
        service.handle_event(&mut draft, BookingEvent::SetStay(lone_start));

        assert_eq!(
            service.validate_for_submit(&draft),
            Err(BookingValidationError::MissingStayDates)
        );
    }

    #[test]
    fn test_tour_end_to_end() {
        // Base price 300, 4 participants
        let service = BookingService::new();
        let tour = product(ProductCategory::Tour, 300.0);
        let mut draft = service.open_draft(&tour);

        service.handle_event(&mut draft, BookingEvent::SetDate(date(2024, 7, 12)));
        for _ in 0..3 {
            service.handle_event(&mut draft, BookingEvent::IncrementOccupancy);
        }
        assert_eq!(draft.total_price(), 1200.0);

        let submitter = RecordingSubmitter::default();
        let response = service.submit(&draft, &submitter).unwrap();
        match &response.booking {
            NormalizedBooking::Tour {
                participant_count,
                total_price,
                tour_date,
                ..
            } => {
                assert_eq!(*participant_count, 4);
                assert_eq!(*total_price, 1200.0);
                assert_eq!(*tour_date, date(2024, 7, 12));
            }
            other => panic!("expected tour booking, got {:?}", other),
        }
    }

    #[test]
    fn test_tour_with_zero_participants_is_rejected() {
        let service = BookingService::new();
        let tour = product(ProductCategory::Tour, 300.0);
        let mut draft = service.open_draft(&tour);
        service.handle_event(&mut draft, BookingEvent::SetDate(date(2024, 7, 12)));

        // The counter clamps at 1, so zero is only reachable by bypassing it
        if let BookingDraft::Tour(t) = &mut draft {
            t.participants.count = 0;
        }
        assert_eq!(
            service.validate_for_submit(&draft),
            Err(BookingValidationError::NoParticipants)
        );
    }

    #[test]
    fn test_yacht_end_to_end() {
        // Base price 5000, 6 guests, 14:00 departure
        let service = BookingService::new();
        let yacht = product(ProductCategory::Yacht, 5000.0);
        let mut draft = service.open_draft(&yacht);

        service.handle_event(&mut draft, BookingEvent::SetDate(date(2024, 8, 2)));
        service.handle_event(&mut draft, BookingEvent::SetStartTime(StartTime::TwoPm));
        for _ in 0..5 {
            service.handle_event(&mut draft, BookingEvent::IncrementOccupancy);
        }
        assert_eq!(draft.total_price(), 30000.0);

        let submitter = RecordingSubmitter::default();
        let response = service.submit(&draft, &submitter).unwrap();
        match &response.booking {
            NormalizedBooking::Yacht {
                start_time,
                guest_count,
                total_price,
                ..
            } => {
                assert_eq!(start_time.as_str(), "14:00");
                assert_eq!(*guest_count, 6);
                assert_eq!(*total_price, 30000.0);
            }
            other => panic!("expected yacht booking, got {:?}", other),
        }
    }

    #[test]
    fn test_yacht_rejected_without_start_time() {
        let service = BookingService::new();
        let yacht = product(ProductCategory::Yacht, 5000.0);
        let mut draft = service.open_draft(&yacht);
        service.handle_event(&mut draft, BookingEvent::SetDate(date(2024, 8, 2)));

        assert_eq!(
            service.validate_for_submit(&draft),
            Err(BookingValidationError::MissingStartTime)
        );
    }

    #[test]
    fn test_validation_failure_preserves_draft() {
        let service = BookingService::new();
        let yacht = product(ProductCategory::Yacht, 5000.0);
        let mut draft = service.open_draft(&yacht);
        service.handle_event(&mut draft, BookingEvent::SetDate(date(2024, 8, 2)));
        service.handle_event(&mut draft, BookingEvent::SetNotes("Sunset cruise".to_string()));

        let before = draft.clone();
        let submitter = RecordingSubmitter::default();
        assert!(service.submit(&draft, &submitter).is_err());

        // Nothing was emitted and the draft is untouched
        assert!(submitter.submitted.lock().unwrap().is_empty());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_total_stays_in_sync_across_events() {
        let service = BookingService::new();
        let hotel = product(ProductCategory::Hotel, 1000.0);
        let mut draft = service.open_draft(&hotel);

        let events = [
            BookingEvent::SelectRate(deluxe_rate(&hotel)),
            BookingEvent::SetStay(stay(date(2024, 6, 1), date(2024, 6, 4))),
            BookingEvent::IncrementOccupancy,
            BookingEvent::SetStay(stay(date(2024, 6, 1), date(2024, 6, 2))),
        ];

        for event in events {
            service.handle_event(&mut draft, event);
            assert_eq!(draft.total_price(), PricingService::compute_total(&draft));
        }
        // Final state: 1 night at 1500
        assert_eq!(draft.total_price(), 1500.0);
    }

    #[test]
    fn test_mismatched_event_is_ignored() {
        let service = BookingService::new();
        let tour = product(ProductCategory::Tour, 300.0);
        let mut draft = service.open_draft(&tour);

        let before = draft.clone();
        let rate = deluxe_rate(&product(ProductCategory::Hotel, 1000.0));
        service.handle_event(&mut draft, BookingEvent::SelectRate(rate));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_occupancy_clamps_through_events() {
        let service = BookingService::new();
        let hotel = product(ProductCategory::Hotel, 1000.0);
        let mut draft = service.open_draft(&hotel);

        service.handle_event(&mut draft, BookingEvent::DecrementOccupancy);
        if let BookingDraft::Hotel(h) = &draft {
            assert_eq!(h.guests.count, 1);
        }

        for _ in 0..15 {
            service.handle_event(&mut draft, BookingEvent::IncrementOccupancy);
        }
        if let BookingDraft::Hotel(h) = &draft {
            assert_eq!(h.guests.count, 10);
        }
    }
}
