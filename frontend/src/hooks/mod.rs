pub mod use_calendar;
pub mod use_compact_layout;
pub mod use_keyboard_navigation;
