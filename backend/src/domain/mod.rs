pub mod booking_service;
pub mod calendar;
pub mod models;
pub mod preferences_service;
pub mod pricing;
pub mod selection;

pub use booking_service::{BookingEvent, BookingService, BookingSubmitter};
pub use calendar::CalendarService;
pub use preferences_service::PreferencesService;
pub use pricing::PricingService;
pub use selection::{
    DatePicker, DatePickerEvent, RangeSelection, RangeState, Selection, SelectionChange,
    SingleSelection,
};
