//! Static content tables for the flower panel and the daily sidebar.
//!
//! All tables live in `data/catalog.json`, which is embedded into the binary
//! and parsed once at startup. The parsed catalog is immutable and shared
//! between services behind an `Arc`.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;
use shared::{
    FlowerEntry, FunFact, HistoricalBook, LocalizedText, Palette, Quote, ScienceEvent, Season,
    VocabularyWord,
};
use tracing::{debug, info};

const EMBEDDED_CATALOG: &str = include_str!("../data/catalog.json");

/// One flower per month
pub const MONTHS_PER_YEAR: usize = 12;

// Leap year, so "2/29" counts as a well-formed event key.
const EVENT_KEY_REFERENCE_YEAR: i32 = 2024;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Failed to parse content catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Expected 12 monthly flowers, found {0}")]
    FlowerCount(usize),
    #[error("Content table '{0}' is empty")]
    EmptyTable(&'static str),
    #[error("Invalid science event key '{0}', expected month/day")]
    InvalidEventKey(String),
}

/// A non-empty list of entries rotated through by day of year
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRotation<T> {
    items: Vec<T>,
}

impl<T> DailyRotation<T> {
    pub fn new(table: &'static str, items: Vec<T>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::EmptyTable(table));
        }
        Ok(Self { items })
    }

    /// Entry at `seed` modulo the table length
    pub fn pick(&self, seed: usize) -> &T {
        &self.items[seed % self.items.len()]
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }
}

/// Colour palettes for the four seasons
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeasonPalettes {
    pub winter: Palette,
    pub spring: Palette,
    pub summer: Palette,
    pub autumn: Palette,
}

impl SeasonPalettes {
    pub fn palette(&self, season: Season) -> &Palette {
        match season {
            Season::Winter => &self.winter,
            Season::Spring => &self.spring,
            Season::Summer => &self.summer,
            Season::Autumn => &self.autumn,
        }
    }
}

/// Catalog layout as stored on disk, before validation
#[derive(Debug, Deserialize)]
struct RawCatalog {
    flowers: Vec<FlowerEntry>,
    themes: SeasonPalettes,
    quotes: Vec<Quote>,
    facts: Vec<FunFact>,
    vocabulary: Vec<VocabularyWord>,
    books: Vec<HistoricalBook>,
    science_events: HashMap<String, ScienceEvent>,
    no_event: LocalizedText,
}

/// Validated, immutable content tables
#[derive(Debug, Clone, PartialEq)]
pub struct ContentCatalog {
    flowers: Vec<FlowerEntry>,
    themes: SeasonPalettes,
    quotes: DailyRotation<Quote>,
    facts: DailyRotation<FunFact>,
    vocabulary: DailyRotation<VocabularyWord>,
    books: Vec<HistoricalBook>,
    science_events: HashMap<String, ScienceEvent>,
    no_event: LocalizedText,
}

impl ContentCatalog {
    /// Load the catalog compiled into the binary
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Parse and validate a catalog from JSON text
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let raw: RawCatalog = serde_json::from_str(json)?;

        if raw.flowers.len() != MONTHS_PER_YEAR {
            return Err(CatalogError::FlowerCount(raw.flowers.len()));
        }

        for key in raw.science_events.keys() {
            if parse_event_key(key).is_none() {
                return Err(CatalogError::InvalidEventKey(key.clone()));
            }
        }

        let catalog = Self {
            flowers: raw.flowers,
            themes: raw.themes,
            quotes: DailyRotation::new("quotes", raw.quotes)?,
            facts: DailyRotation::new("facts", raw.facts)?,
            vocabulary: DailyRotation::new("vocabulary", raw.vocabulary)?,
            books: raw.books,
            science_events: raw.science_events,
            no_event: raw.no_event,
        };

        info!(
            "Loaded content catalog: {} quotes, {} facts, {} words, {} books, {} science events",
            catalog.quotes.len(),
            catalog.facts.len(),
            catalog.vocabulary.len(),
            catalog.books.len(),
            catalog.science_events.len()
        );

        Ok(catalog)
    }

    /// Always exactly `MONTHS_PER_YEAR` entries, January first
    pub fn flowers(&self) -> &[FlowerEntry] {
        &self.flowers
    }

    pub fn themes(&self) -> &SeasonPalettes {
        &self.themes
    }

    pub fn quotes(&self) -> &DailyRotation<Quote> {
        &self.quotes
    }

    pub fn facts(&self) -> &DailyRotation<FunFact> {
        &self.facts
    }

    pub fn vocabulary(&self) -> &DailyRotation<VocabularyWord> {
        &self.vocabulary
    }

    pub fn books(&self) -> &[HistoricalBook] {
        &self.books
    }

    /// Exact lookup by "month/day" key
    pub fn science_event(&self, key: &str) -> Option<&ScienceEvent> {
        let event = self.science_events.get(key);
        debug!("Science event lookup for {}: {}", key, event.is_some());
        event
    }

    /// Text shown when a day has no science event
    pub fn no_event(&self) -> &LocalizedText {
        &self.no_event
    }
}

/// Parse a "month/day" key (1-based month, no padding) into a reference date
fn parse_event_key(key: &str) -> Option<NaiveDate> {
    let (month, day) = key.split_once('/')?;
    let month = month.parse::<u32>().ok()?;
    let day = day.parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(EVENT_KEY_REFERENCE_YEAR, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_catalog_json(flower_count: usize, quotes: &str) -> String {
        let flower = r#"{
            "portuguese": "Rosa", "english": "Rose", "chinese": "玫瑰", "emoji": "🌹",
            "description": { "en": "A rose", "zh": "玫瑰" }
        }"#;
        let flowers = vec![flower; flower_count].join(",");
        let palette = r##"{ "primary": "#000000", "secondary": "#ffffff", "accent": "#ff0000" }"##;
        format!(
            r#"{{
                "flowers": [{flowers}],
                "themes": {{ "winter": {palette}, "spring": {palette}, "summer": {palette}, "autumn": {palette} }},
                "quotes": {quotes},
                "facts": [{{ "text": {{ "en": "fact", "zh": "事实" }} }}],
                "vocabulary": [{{
                    "word": "Bloom", "phonetic": "/bluːm/", "part_of_speech": "verb",
                    "meaning": {{ "en": "to flower", "zh": "开花" }}, "example": "Roses bloom."
                }}],
                "books": [],
                "science_events": {{ "3/14": {{ "year": 1879, "description": {{ "en": "Einstein", "zh": "爱因斯坦" }} }} }},
                "no_event": {{ "en": "Nothing today", "zh": "今天没有" }}
            }}"#
        )
    }

    const ONE_QUOTE: &str = r#"[{ "text": { "en": "Hello", "zh": "你好" }, "author": "Anon" }]"#;

    #[test]
    fn test_embedded_catalog_loads() {
        let catalog = ContentCatalog::embedded().unwrap();

        assert_eq!(catalog.flowers().len(), MONTHS_PER_YEAR);
        assert!(!catalog.quotes().items().is_empty());
        assert!(!catalog.facts().items().is_empty());
        assert!(!catalog.vocabulary().items().is_empty());
        assert!(catalog.books().len() >= 3);
        assert_eq!(catalog.flowers()[0].english, "Camellia");
        assert_eq!(catalog.flowers()[11].english, "Poinsettia");
    }

    #[test]
    fn test_embedded_event_keys_are_sparse_and_valid() {
        let catalog = ContentCatalog::embedded().unwrap();

        assert!(catalog.science_event("3/14").is_some());
        assert!(catalog.science_event("3/15").is_none());
        assert!(catalog.science_events.len() < 30);
    }

    #[test]
    fn test_minimal_catalog_loads() {
        let catalog = ContentCatalog::from_json(&minimal_catalog_json(12, ONE_QUOTE)).unwrap();
        assert_eq!(catalog.quotes().len(), 1);
        assert_eq!(catalog.no_event().en, "Nothing today");
    }

    #[test]
    fn test_rejects_wrong_flower_count() {
        let result = ContentCatalog::from_json(&minimal_catalog_json(11, ONE_QUOTE));
        assert!(matches!(result, Err(CatalogError::FlowerCount(11))));
    }

    #[test]
    fn test_rejects_empty_rotation() {
        let result = ContentCatalog::from_json(&minimal_catalog_json(12, "[]"));
        assert!(matches!(result, Err(CatalogError::EmptyTable("quotes"))));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let result = ContentCatalog::from_json("{ \"flowers\": ");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_rejects_bad_event_key() {
        let json = minimal_catalog_json(12, ONE_QUOTE).replace("\"3/14\"", "\"13/40\"");
        let result = ContentCatalog::from_json(&json);
        assert!(matches!(result, Err(CatalogError::InvalidEventKey(key)) if key == "13/40"));
    }

    #[test]
    fn test_parse_event_key() {
        assert_eq!(parse_event_key("3/14"), NaiveDate::from_ymd_opt(2024, 3, 14));
        assert!(parse_event_key("2/29").is_some());
        assert!(parse_event_key("2/30").is_none());
        assert!(parse_event_key("03-14").is_none());
        assert!(parse_event_key("march/14").is_none());
    }

    #[test]
    fn test_daily_rotation_wraps() {
        let rotation = DailyRotation::new("numbers", vec![10, 20, 30]).unwrap();
        assert_eq!(*rotation.pick(0), 10);
        assert_eq!(*rotation.pick(4), 20);
        assert_eq!(*rotation.pick(300), 10);
        assert!(DailyRotation::<u8>::new("empty", Vec::new()).is_err());
    }
}
