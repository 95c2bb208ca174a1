use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of cells in a month grid (6 rows of 7 days)
pub const GRID_CELLS: usize = 42;

/// Number of days in a week, also the number of grid columns
pub const DAYS_PER_WEEK: usize = 7;

/// Display language of the calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "en")]
    English,
    #[serde(rename = "zh")]
    Chinese,
}

impl Language {
    /// Short language code ("en" / "zh")
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// BCP 47 tag handed to the speech synthesis API
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::English => "en-US",
            Language::Chinese => "zh-CN",
        }
    }

    /// Label shown on the language toggle button
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A piece of text available in both supported languages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub zh: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, zh: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            zh: zh.into(),
        }
    }

    /// Text for the requested language
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::English => &self.en,
            Language::Chinese => &self.zh,
        }
    }
}

/// Type of calendar day for explicit rendering logic
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum CalendarDayType {
    /// Trailing day of the previous month shown before day 1
    PreviousMonth,
    /// Actual day within the displayed month
    MonthDay,
    /// Leading day of the next month used to fill the grid
    NextMonth,
}

/// Represents a single cell in the month grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarDay {
    /// Day of month, 1-based
    pub day: u32,
    /// Month index of this cell, 0 = January
    pub month: u32,
    pub year: i32,
    pub day_type: CalendarDayType,
    pub is_today: bool,
    /// Only ever set for `MonthDay` cells
    pub is_weekend: bool,
    /// Present only for `MonthDay` cells
    pub date: Option<NaiveDate>,
}

impl CalendarDay {
    /// A padding cell borrowed from an adjacent month. Padding cells never
    /// report today or weekend.
    pub fn padding(day: u32, month: u32, year: i32, day_type: CalendarDayType) -> Self {
        Self {
            day,
            month,
            year,
            day_type,
            is_today: false,
            is_weekend: false,
            date: None,
        }
    }

    pub fn is_current_month(&self) -> bool {
        self.day_type == CalendarDayType::MonthDay
    }
}

/// The focused month for calendar navigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CalendarFocusDate {
    // Field order matters for the derived ordering: year first, then month.
    pub year: i32,
    /// Month index, 0 = January
    pub month: u32,
}

impl CalendarFocusDate {
    pub fn new(month: u32, year: i32) -> Self {
        Self { year, month }
    }

    /// Focus on the month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// First calendar day of the focused month, if the month index is valid
    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.checked_add(1)?, 1)
    }
}

impl fmt::Display for CalendarFocusDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.month + 1, self.year)
    }
}

/// A generated month grid, always `GRID_CELLS` days long
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalendarMonth {
    pub focus: CalendarFocusDate,
    pub first_day_of_week: u32, // 0 = Sunday, 1 = Monday, etc.
    pub days_in_month: u32,
    pub days: Vec<CalendarDay>,
}

impl CalendarMonth {
    /// Grid rows of seven days each
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(DAYS_PER_WEEK)
    }

    pub fn current_month_days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.days.iter().filter(|day| day.is_current_month())
    }

    pub fn today(&self) -> Option<&CalendarDay> {
        self.days.iter().find(|day| day.is_today)
    }
}

/// Flower of the month
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowerEntry {
    pub portuguese: String,
    pub english: String,
    pub chinese: String,
    /// Illustration reference, rendered as a glyph
    pub emoji: String,
    pub description: LocalizedText,
}

impl FlowerEntry {
    /// Flower name in the given UI language
    pub fn name(&self, language: Language) -> &str {
        match language {
            Language::English => &self.english,
            Language::Chinese => &self.chinese,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Winter,
    Spring,
    Summer,
    Autumn,
}

impl Season {
    /// Meteorological season of a month index (0 = January)
    pub fn for_month(month: u32) -> Self {
        match month {
            2..=4 => Season::Spring,
            5..=7 => Season::Summer,
            8..=10 => Season::Autumn,
            _ => Season::Winter,
        }
    }

    pub fn name(&self, language: Language) -> &'static str {
        match (self, language) {
            (Season::Winter, Language::English) => "Winter",
            (Season::Spring, Language::English) => "Spring",
            (Season::Summer, Language::English) => "Summer",
            (Season::Autumn, Language::English) => "Autumn",
            (Season::Winter, Language::Chinese) => "冬",
            (Season::Spring, Language::Chinese) => "春",
            (Season::Summer, Language::Chinese) => "夏",
            (Season::Autumn, Language::Chinese) => "秋",
        }
    }
}

/// Three-colour palette for one season, as CSS hex colours
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeasonalTheme {
    pub season: Season,
    pub palette: Palette,
}

impl SeasonalTheme {
    /// CSS background used behind the flower illustration
    pub fn gradient(&self) -> String {
        format!(
            "linear-gradient(135deg, {} 0%, {} 100%)",
            self.palette.primary, self.palette.accent
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: LocalizedText,
    pub author: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunFact {
    pub text: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VocabularyWord {
    pub word: String,
    pub phonetic: String,
    pub part_of_speech: String,
    pub meaning: LocalizedText,
    pub example: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoricalBook {
    pub title: LocalizedText,
    pub author: String,
    pub year: i32,
    pub summary: LocalizedText,
}

/// Science-history event attached to a calendar day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScienceEvent {
    /// Year the event happened
    pub year: i32,
    pub description: LocalizedText,
}

/// Everything the sidebar shows for one date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyContent {
    pub date: NaiveDate,
    /// 1-based, January 1 is day 1
    pub day_of_year: u32,
    pub quote: Quote,
    pub fact: FunFact,
    pub vocabulary: VocabularyWord,
    pub science_event: Option<ScienceEvent>,
    /// Event description, or the "no event" text when the day has none
    pub science_event_text: LocalizedText,
    pub featured_books: Vec<HistoricalBook>,
}

/// All data needed to render one month after a navigation transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub focus: CalendarFocusDate,
    /// "January 2026" / "一月 2026年"
    pub title: LocalizedText,
    pub grid: CalendarMonth,
    pub flower: FlowerEntry,
    pub theme: SeasonalTheme,
    pub can_go_previous: bool,
    pub can_go_next: bool,
}

/// Severity of a transient banner message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageKind {
    Info,
    Warning,
    Error,
    Success,
}

impl MessageKind {
    /// Banner background colour
    pub fn color(&self) -> &'static str {
        match self {
            MessageKind::Info => "#3498db",
            MessageKind::Warning => "#f39c12",
            MessageKind::Error => "#e74c3c",
            MessageKind::Success => "#27ae60",
        }
    }
}

/// Transient user-visible banner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl AppMessage {
    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }
}
