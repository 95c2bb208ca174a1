//! Month-to-month navigation over a bounded or unbounded range.

use shared::{CalendarFocusDate, Language};
use tracing::{info, warn};

use crate::config::NavigationBounds;
use crate::domain::calendar::CalendarService;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    #[error("Cannot navigate before {}", english_label(.limit))]
    BeforeStart { limit: CalendarFocusDate },
    #[error("Cannot navigate after {}", english_label(.limit))]
    AfterEnd { limit: CalendarFocusDate },
    #[error("Invalid month index {0}, expected 0-11")]
    InvalidMonth(u32),
    #[error("{} is outside the calendar range", english_label(.0))]
    OutOfRange(CalendarFocusDate),
}

fn english_label(focus: &CalendarFocusDate) -> String {
    format!(
        "{} {}",
        CalendarService::new().month_name(focus.month, Language::English),
        focus.year
    )
}

/// Tracks the month currently shown and moves it one step at a time
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationService {
    calendar: CalendarService,
    bounds: NavigationBounds,
    focus: CalendarFocusDate,
}

impl NavigationService {
    /// Start at `initial`, clamped into `bounds`
    pub fn new(bounds: NavigationBounds, initial: CalendarFocusDate) -> Self {
        Self {
            calendar: CalendarService::new(),
            bounds,
            focus: bounds.clamp(initial),
        }
    }

    pub fn focus(&self) -> CalendarFocusDate {
        self.focus
    }

    pub fn bounds(&self) -> NavigationBounds {
        self.bounds
    }

    pub fn previous_month(&mut self) -> Result<CalendarFocusDate, NavigationError> {
        if !self.can_go_previous() {
            warn!("Rejected navigation before {}", self.focus);
            return Err(NavigationError::BeforeStart { limit: self.focus });
        }

        let (month, year) = self
            .calendar
            .previous_month(self.focus.month, self.focus.year);
        self.focus = CalendarFocusDate::new(month, year);
        info!("Navigated to previous month: {}", self.focus);
        Ok(self.focus)
    }

    pub fn next_month(&mut self) -> Result<CalendarFocusDate, NavigationError> {
        if !self.can_go_next() {
            warn!("Rejected navigation after {}", self.focus);
            return Err(NavigationError::AfterEnd { limit: self.focus });
        }

        let (month, year) = self.calendar.next_month(self.focus.month, self.focus.year);
        self.focus = CalendarFocusDate::new(month, year);
        info!("Navigated to next month: {}", self.focus);
        Ok(self.focus)
    }

    /// Jump directly to `month` (0 = January) of `year`
    pub fn navigate_to_month(
        &mut self,
        month: u32,
        year: i32,
    ) -> Result<CalendarFocusDate, NavigationError> {
        if month > 11 {
            warn!("Rejected navigation to invalid month index {}", month);
            return Err(NavigationError::InvalidMonth(month));
        }

        let target = CalendarFocusDate::new(month, year);
        if !self.bounds.contains(target) {
            warn!("Rejected navigation to {}: outside bounds", target);
            return Err(NavigationError::OutOfRange(target));
        }

        self.focus = target;
        info!("Navigated to {}", self.focus);
        Ok(self.focus)
    }

    pub fn can_go_previous(&self) -> bool {
        match self.bounds {
            NavigationBounds::Bounded { min, .. } => self.focus > min,
            NavigationBounds::Unbounded => true,
        }
    }

    pub fn can_go_next(&self) -> bool {
        match self.bounds {
            NavigationBounds::Bounded { max, .. } => self.focus < max,
            NavigationBounds::Unbounded => true,
        }
    }

    /// Move focus to the month containing `today`, clamped into the bounds
    pub fn reset_to_today(&mut self, today: chrono::NaiveDate) -> CalendarFocusDate {
        let target = CalendarFocusDate::containing(today);
        self.focus = self.bounds.clamp(target);
        if self.focus != target {
            info!("Today's month {} is out of range, reset to {}", target, self.focus);
        } else {
            info!("Reset navigation to {}", self.focus);
        }
        self.focus
    }
}
