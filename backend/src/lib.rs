//! # Flora Calendar Backend
//!
//! Domain services for the bilingual 2026 flower calendar. The backend has
//! no IO layer: the embedded content catalog is parsed once at startup and
//! every operation is a synchronous call on an owned [`Backend`].
//!
//! The frontend keeps one `Backend` in its state and asks it for a fresh
//! [`MonthView`] after every navigation step and for [`DailyContent`] when
//! a day is selected.

use std::sync::Arc;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use shared::{CalendarFocusDate, DailyContent, MonthView};
use tracing::info;

pub mod catalog;
pub mod config;
pub mod domain;

pub use catalog::{CatalogError, ContentCatalog};
pub use config::{ConfigError, EngineConfig, NavigationBounds, CALENDAR_YEAR};
pub use domain::NavigationError;

/// Main backend struct that orchestrates all services
#[derive(Debug, Clone, PartialEq)]
pub struct Backend {
    config: EngineConfig,
    pub calendar_service: domain::CalendarService,
    pub navigation_service: domain::NavigationService,
    pub content_service: domain::ContentService,
    pub flower_service: domain::FlowerService,
}

impl Backend {
    /// Create a new backend from `config` using the embedded content catalog
    pub fn new(config: EngineConfig) -> Result<Self> {
        let catalog = ContentCatalog::embedded().context("Failed to load embedded content")?;
        Self::with_catalog(config, catalog)
    }

    /// Create a new backend over an already loaded catalog
    pub fn with_catalog(config: EngineConfig, catalog: ContentCatalog) -> Result<Self> {
        config.validate().context("Invalid calendar configuration")?;

        let catalog = Arc::new(catalog);
        let calendar_service = domain::CalendarService::new();
        let navigation_service =
            domain::NavigationService::new(config.bounds, config.initial_focus);
        let content_service =
            domain::ContentService::new(catalog.clone(), config.featured_book_count);
        let flower_service = domain::FlowerService::new(catalog);

        info!(
            "Calendar backend ready at {} with bounds {:?}",
            navigation_service.focus(),
            config.bounds
        );

        Ok(Backend {
            config,
            calendar_service,
            navigation_service,
            content_service,
            flower_service,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn focus(&self) -> CalendarFocusDate {
        self.navigation_service.focus()
    }

    /// Everything needed to render the focused month
    pub fn month_view(&self, today: NaiveDate) -> MonthView {
        let focus = self.focus();
        MonthView {
            focus,
            title: self.calendar_service.month_title(focus),
            grid: self
                .calendar_service
                .generate_month_grid(focus.month, focus.year, today),
            flower: self.flower_service.monthly_flower(focus.month).clone(),
            theme: self.flower_service.seasonal_theme(focus.month),
            can_go_previous: self.navigation_service.can_go_previous(),
            can_go_next: self.navigation_service.can_go_next(),
        }
    }

    pub fn daily_content(&self, date: NaiveDate) -> DailyContent {
        self.content_service.daily_content(date)
    }

    pub fn previous_month(&mut self) -> Result<CalendarFocusDate, NavigationError> {
        self.navigation_service.previous_month()
    }

    pub fn next_month(&mut self) -> Result<CalendarFocusDate, NavigationError> {
        self.navigation_service.next_month()
    }

    pub fn navigate_to_month(
        &mut self,
        month: u32,
        year: i32,
    ) -> Result<CalendarFocusDate, NavigationError> {
        self.navigation_service.navigate_to_month(month, year)
    }

    /// Reset navigation to the month containing `today`, within bounds
    pub fn recover(&mut self, today: NaiveDate) -> CalendarFocusDate {
        self.navigation_service.reset_to_today(today)
    }

    /// Date whose content the sidebar shows before a day is selected:
    /// the first day of the focused month
    pub fn focus_date_for_content(&self) -> NaiveDate {
        let focus = self.focus();
        focus.first_day().unwrap_or(NaiveDate::MIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{Language, Season};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_backend_starts_in_january_2026() {
        let backend = Backend::new(EngineConfig::default()).unwrap();
        let view = backend.month_view(date(2026, 1, 15));

        assert_eq!(view.focus, CalendarFocusDate::new(0, 2026));
        assert_eq!(view.title.get(Language::English), "January 2026");
        assert_eq!(view.title.get(Language::Chinese), "一月 2026年");
        assert_eq!(view.flower.english, "Camellia");
        assert_eq!(view.theme.season, Season::Winter);
        assert!(!view.can_go_previous);
        assert!(view.can_go_next);
        assert_eq!(view.grid.today().map(|d| d.day), Some(15));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = EngineConfig::default();
        config.languages.clear();

        let err = Backend::new(config).unwrap_err();
        assert!(err.to_string().contains("Invalid calendar configuration"));
        assert_eq!(
            err.downcast_ref::<ConfigError>(),
            Some(&ConfigError::NoLanguages)
        );
    }

    #[test]
    fn test_navigation_updates_month_view() {
        let mut backend = Backend::new(EngineConfig::default()).unwrap();

        assert!(backend.previous_month().is_err());
        for _ in 0..5 {
            backend.next_month().unwrap();
        }

        let view = backend.month_view(date(2026, 1, 1));
        assert_eq!(view.focus, CalendarFocusDate::new(5, 2026));
        assert_eq!(view.flower.english, "Lavender");
        assert_eq!(view.theme.season, Season::Summer);
        assert!(view.can_go_previous && view.can_go_next);
        assert!(view.grid.today().is_none());
    }

    #[test]
    fn test_last_month_disables_next() {
        let mut backend = Backend::new(EngineConfig::default()).unwrap();
        backend.navigate_to_month(11, 2026).unwrap();

        let view = backend.month_view(date(2026, 1, 1));
        assert!(view.can_go_previous);
        assert!(!view.can_go_next);
        assert!(matches!(
            backend.next_month(),
            Err(NavigationError::AfterEnd { .. })
        ));
    }

    #[test]
    fn test_recover_resets_to_todays_month() {
        let mut backend = Backend::new(EngineConfig::default()).unwrap();

        assert_eq!(
            backend.recover(date(2026, 8, 20)),
            CalendarFocusDate::new(7, 2026)
        );
        assert_eq!(
            backend.recover(date(2031, 8, 20)),
            CalendarFocusDate::new(11, 2026)
        );
    }

    #[test]
    fn test_focus_date_for_content() {
        let mut backend = Backend::new(EngineConfig::default()).unwrap();
        assert_eq!(backend.focus_date_for_content(), date(2026, 1, 1));

        backend.navigate_to_month(2, 2026).unwrap();
        assert_eq!(backend.focus_date_for_content(), date(2026, 3, 1));

        let content = backend.daily_content(date(2026, 3, 14));
        assert_eq!(content.day_of_year, 73);
        assert_eq!(content.science_event.map(|e| e.year), Some(1879));
        assert_eq!(content.featured_books.len(), 3);
    }

    #[test]
    fn test_unbounded_backend_crosses_years() {
        let config = EngineConfig::unbounded(CalendarFocusDate::new(11, 2026));
        let mut backend = Backend::new(config).unwrap();

        backend.next_month().unwrap();
        let view = backend.month_view(date(2027, 1, 1));
        assert_eq!(view.title.en, "January 2027");
        assert!(view.can_go_previous && view.can_go_next);
    }

    #[test]
    fn test_clones_navigate_independently() {
        let mut backend = Backend::new(EngineConfig::default()).unwrap();
        let snapshot = backend.clone();

        backend.next_month().unwrap();
        assert_eq!(backend.focus(), CalendarFocusDate::new(1, 2026));
        assert_eq!(snapshot.focus(), CalendarFocusDate::new(0, 2026));
    }
}
