use serde::{Deserialize, Serialize};
use shared::{CalendarFocusDate, Language};

/// Year the calendar is published for
pub const CALENDAR_YEAR: i32 = 2026;

/// How far navigation may move away from the initial month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationBounds {
    /// Navigation is clamped to the closed range `[min, max]`
    Bounded {
        min: CalendarFocusDate,
        max: CalendarFocusDate,
    },
    /// Any Gregorian month is reachable
    Unbounded,
}

impl NavigationBounds {
    /// January through December of a single year
    pub fn single_year(year: i32) -> Self {
        NavigationBounds::Bounded {
            min: CalendarFocusDate::new(0, year),
            max: CalendarFocusDate::new(11, year),
        }
    }

    pub fn contains(&self, focus: CalendarFocusDate) -> bool {
        match self {
            NavigationBounds::Bounded { min, max } => *min <= focus && focus <= *max,
            NavigationBounds::Unbounded => true,
        }
    }

    /// Move `focus` to the nearest month inside the bounds
    pub fn clamp(&self, focus: CalendarFocusDate) -> CalendarFocusDate {
        match self {
            NavigationBounds::Bounded { min, max } => focus.max(*min).min(*max),
            NavigationBounds::Unbounded => focus,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Navigation bounds are inverted: {min} is after {max}")]
    InvertedBounds {
        min: CalendarFocusDate,
        max: CalendarFocusDate,
    },
    #[error("Initial month {0} lies outside the navigation bounds")]
    InitialOutOfBounds(CalendarFocusDate),
    #[error("Invalid month index {0}, expected 0-11")]
    InvalidMonth(u32),
    #[error("At least one display language is required")]
    NoLanguages,
}

/// Configuration of the calendar engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub bounds: NavigationBounds,
    /// Languages the UI can switch between, first one is the default
    pub languages: Vec<Language>,
    pub initial_focus: CalendarFocusDate,
    /// How many books from the head of the book list the sidebar shows
    pub featured_book_count: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::calendar_2026()
    }
}

impl EngineConfig {
    /// The published 2026 calendar: January to December 2026 only
    pub fn calendar_2026() -> Self {
        Self {
            bounds: NavigationBounds::single_year(CALENDAR_YEAR),
            languages: vec![Language::English, Language::Chinese],
            initial_focus: CalendarFocusDate::new(0, CALENDAR_YEAR),
            featured_book_count: 3,
        }
    }

    /// Free navigation across years starting at `initial_focus`
    pub fn unbounded(initial_focus: CalendarFocusDate) -> Self {
        Self {
            bounds: NavigationBounds::Unbounded,
            initial_focus,
            ..Self::calendar_2026()
        }
    }

    /// Default UI language
    pub fn primary_language(&self) -> Language {
        self.languages.first().copied().unwrap_or(Language::English)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.languages.is_empty() {
            return Err(ConfigError::NoLanguages);
        }

        if let NavigationBounds::Bounded { min, max } = self.bounds {
            for month in [min.month, max.month] {
                if month > 11 {
                    return Err(ConfigError::InvalidMonth(month));
                }
            }
            if min > max {
                return Err(ConfigError::InvertedBounds { min, max });
            }
        }

        if self.initial_focus.month > 11 {
            return Err(ConfigError::InvalidMonth(self.initial_focus.month));
        }

        if !self.bounds.contains(self.initial_focus) {
            return Err(ConfigError::InitialOutOfBounds(self.initial_focus));
        }

        Ok(())
    }
}
