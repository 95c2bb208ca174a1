pub mod calendar_labels;
pub mod config;
pub mod logging;
pub mod speech;
