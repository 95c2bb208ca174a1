pub mod calendar;
pub mod content_service;
pub mod flower_service;
pub mod navigation;

pub use calendar::CalendarService;
pub use content_service::{day_of_year, pick_for_date, science_event_key, ContentService};
pub use flower_service::FlowerService;
pub use navigation::{NavigationError, NavigationService};
