//! # Kyma Booking Backend
//!
//! Domain layer for the Kyma travel-booking app (hotels, tours, yacht
//! charters). The UI layer handles presentation only; everything with
//! business meaning lives here:
//! - Calendar month grids, navigation, and date disablement
//! - Single-date and range selection state machines
//! - Price calculation and submission validation for booking drafts
//! - User preferences (favorites, language, currency) behind a storage
//!   abstraction
//!
//! All operations are synchronous: state transitions happen inside user
//! input handlers on a single logical thread, and the network delivery of a
//! finalized booking is delegated to the host through [`BookingSubmitter`].

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

pub mod domain;
pub mod storage;

pub use domain::booking_service::BookingSubmitter;
use storage::json::{JsonConnection, PreferenceRepository};

/// Main backend struct that orchestrates all services
pub struct Backend {
    pub calendar_service: domain::CalendarService,
    pub booking_service: domain::BookingService,
    pub preferences_service: domain::PreferencesService<PreferenceRepository>,
}

impl Backend {
    /// Create a new backend instance with all services, persisting
    /// preferences under the given data directory
    pub fn new(data_directory: &Path) -> Result<Self> {
        let connection = JsonConnection::new(data_directory.to_path_buf())?;
        let preference_repository = Arc::new(PreferenceRepository::new(connection));

        Ok(Self {
            calendar_service: domain::CalendarService::new(),
            booking_service: domain::BookingService::new(),
            preferences_service: domain::PreferencesService::new(preference_repository)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use shared::{BookableProduct, DateBounds, ProductCategory, RateOption};
    use tempfile::tempdir;

    use crate::domain::{BookingEvent, DatePicker, DatePickerEvent, Selection, SelectionChange};

    #[test]
    fn test_backend_wires_all_services() {
        let dir = tempdir().unwrap();
        let backend = Backend::new(dir.path()).unwrap();

        assert_eq!(backend.calendar_service.month_name(6), "June");
        assert_eq!(backend.preferences_service.language(), "en");
    }

    /// Full booking flow: calendar clicks feed the draft, the draft prices
    /// itself, validation gates the handoff.
    #[test]
    fn test_hotel_booking_flow_from_calendar_clicks() {
        let dir = tempdir().unwrap();
        let backend = Backend::new(dir.path()).unwrap();

        let today = NaiveDate::from_ymd_opt(2024, 5, 20).unwrap();
        let product = BookableProduct {
            id: "hotel::naxos::4".to_string(),
            name: "Harborfront Suites".to_string(),
            location: "Naxos".to_string(),
            category: ProductCategory::Hotel,
            base_price: 1000.0,
            currency: "EUR".to_string(),
        };

        let mut draft = backend.booking_service.open_draft(&product);
        let mut picker = DatePicker::range(DateBounds::default()).with_focus(6, 2024);

        for day in [1, 4] {
            let click = NaiveDate::from_ymd_opt(2024, 6, day).unwrap();
            if let Some(SelectionChange::Range(range)) =
                picker.apply(DatePickerEvent::ClickDate(click), today)
            {
                backend
                    .booking_service
                    .handle_event(&mut draft, BookingEvent::SetStay(range));
            }
        }

        let rate = RateOption::from_multiplier(&product, "rate::deluxe", "Deluxe", 1.5, 3);
        backend
            .booking_service
            .handle_event(&mut draft, BookingEvent::SelectRate(rate));
        assert_eq!(draft.total_price(), 4500.0);

        // The picker and the draft agree on the selection
        if let Selection::Range(range) = picker.selection {
            if let domain::models::booking::BookingDraft::Hotel(hotel) = &draft {
                assert_eq!(hotel.stay, range);
            }
        }

        assert!(backend.booking_service.validate_for_submit(&draft).is_ok());
    }
}
