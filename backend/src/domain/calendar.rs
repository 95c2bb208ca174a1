//! Calendar domain logic for the 2026 calendar.
//!
//! This module builds the 42-cell month grid and owns the month and weekday
//! names in both display languages. Grid generation takes `today` as an
//! argument; `current_date` is the only place the host clock is read.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use shared::{
    CalendarDay, CalendarDayType, CalendarFocusDate, CalendarMonth, Language, LocalizedText,
    GRID_CELLS,
};
use tracing::debug;

const MONTH_NAMES_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const MONTH_NAMES_ZH: [&str; 12] = [
    "一月", "二月", "三月", "四月", "五月", "六月", "七月", "八月", "九月", "十月", "十一月",
    "十二月",
];

const WEEKDAY_NAMES_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
const WEEKDAY_NAMES_ZH: [&str; 7] = ["日", "一", "二", "三", "四", "五", "六"];

/// Single-letter headers for narrow layouts
const WEEKDAY_INITIALS_EN: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Calendar service that handles month grid generation and calendar names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarService;

impl CalendarService {
    /// Create a new CalendarService instance
    pub fn new() -> Self {
        Self
    }

    /// Generate the 42-cell grid for `month` (0 = January) of `year`.
    ///
    /// The grid starts with the trailing days of the previous month, then
    /// every day of the requested month, then leading days of the next month
    /// until 42 cells are filled. Only current-month cells carry a date and
    /// the today/weekend flags.
    pub fn generate_month_grid(&self, month: u32, year: i32, today: NaiveDate) -> CalendarMonth {
        let days_in_month = self.days_in_month(month, year);
        let first_day = self.first_day_of_month(month, year);

        debug!(
            "Generating grid for {}/{}: {} days, first weekday {}",
            month + 1,
            year,
            days_in_month,
            first_day
        );

        let mut days = Vec::with_capacity(GRID_CELLS);

        let (prev_month, prev_year) = self.previous_month(month, year);
        let days_in_prev_month = self.days_in_month(prev_month, prev_year);
        for offset in (0..first_day).rev() {
            days.push(CalendarDay::padding(
                days_in_prev_month - offset,
                prev_month,
                prev_year,
                CalendarDayType::PreviousMonth,
            ));
        }

        for day in 1..=days_in_month {
            let date = NaiveDate::from_ymd_opt(year, month + 1, day);
            days.push(CalendarDay {
                day,
                month,
                year,
                day_type: CalendarDayType::MonthDay,
                is_today: date == Some(today),
                is_weekend: date.map(|d| is_weekend(d.weekday())).unwrap_or(false),
                date,
            });
        }

        let (next_month, next_year) = self.next_month(month, year);
        let remaining = GRID_CELLS.saturating_sub(days.len()) as u32;
        for day in 1..=remaining {
            days.push(CalendarDay::padding(
                day,
                next_month,
                next_year,
                CalendarDayType::NextMonth,
            ));
        }

        CalendarMonth {
            focus: CalendarFocusDate::new(month, year),
            first_day_of_week: first_day,
            days_in_month,
            days,
        }
    }

    /// Get the number of days in a given month (0 = January) and year
    pub fn days_in_month(&self, month: u32, year: i32) -> u32 {
        match month {
            1 => {
                if self.is_leap_year(year) {
                    29
                } else {
                    28
                }
            }
            3 | 5 | 8 | 10 => 30,
            _ => 31,
        }
    }

    /// Check if a year is a leap year
    pub fn is_leap_year(&self, year: i32) -> bool {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }

    /// Get the first day of month (0 = Sunday, 1 = Monday, etc.)
    pub fn first_day_of_month(&self, month: u32, year: i32) -> u32 {
        match CalendarFocusDate::new(month, year).first_day() {
            Some(date) => date.weekday().num_days_from_sunday(),
            // Invalid date, fallback to 0 (Sunday)
            None => 0,
        }
    }

    /// Month before `month`, wrapping January back to December of the previous year
    pub fn previous_month(&self, month: u32, year: i32) -> (u32, i32) {
        if month == 0 {
            (11, year - 1)
        } else {
            (month - 1, year)
        }
    }

    /// Month after `month`, wrapping December forward to January of the next year
    pub fn next_month(&self, month: u32, year: i32) -> (u32, i32) {
        if month >= 11 {
            (0, year + 1)
        } else {
            (month + 1, year)
        }
    }

    /// Get the name of a month (0 = January) in the given language
    pub fn month_name(&self, month: u32, language: Language) -> &'static str {
        let names = match language {
            Language::English => &MONTH_NAMES_EN,
            Language::Chinese => &MONTH_NAMES_ZH,
        };
        names.get(month as usize).copied().unwrap_or(names[0])
    }

    /// Weekday column headers, Sunday first
    pub fn weekday_names(&self, language: Language) -> [&'static str; 7] {
        match language {
            Language::English => WEEKDAY_NAMES_EN,
            Language::Chinese => WEEKDAY_NAMES_ZH,
        }
    }

    /// Weekday headers for narrow layouts. Chinese names are already a single
    /// character.
    pub fn compact_weekday_names(&self, language: Language) -> [&'static str; 7] {
        match language {
            Language::English => WEEKDAY_INITIALS_EN,
            Language::Chinese => WEEKDAY_NAMES_ZH,
        }
    }

    /// Bilingual month title, e.g. "March 2026" / "三月 2026年"
    pub fn month_title(&self, focus: CalendarFocusDate) -> LocalizedText {
        LocalizedText::new(
            format!(
                "{} {}",
                self.month_name(focus.month, Language::English),
                focus.year
            ),
            format!(
                "{} {}年",
                self.month_name(focus.month, Language::Chinese),
                focus.year
            ),
        )
    }

    /// Format a date for human-readable display
    pub fn format_date_for_display(&self, date: NaiveDate, language: Language) -> String {
        match language {
            Language::English => format!(
                "{} {}, {}",
                self.month_name(date.month0(), language),
                date.day(),
                date.year()
            ),
            Language::Chinese => format!("{}年{}月{}日", date.year(), date.month(), date.day()),
        }
    }

    /// Current calendar date from the host clock
    pub fn current_date(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

fn is_weekend(weekday: Weekday) -> bool {
    matches!(weekday, Weekday::Sat | Weekday::Sun)
}
