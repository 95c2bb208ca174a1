pub mod calendar;
pub mod daily_sidebar;
pub mod flower_card;
pub mod message_banner;
pub mod month_header;
pub mod status_pages;
