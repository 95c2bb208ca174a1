//! Daily content selection.
//!
//! Quotes, facts and vocabulary rotate through their tables by day of year so
//! the same date always shows the same entries. Science events are an exact
//! lookup by "month/day" key and are absent on most days.

use std::sync::Arc;

use chrono::{Datelike, NaiveDate};
use shared::{
    DailyContent, FunFact, HistoricalBook, LocalizedText, Quote, ScienceEvent, VocabularyWord,
};
use tracing::debug;

use crate::catalog::{ContentCatalog, DailyRotation};

/// 1-based day of year, January 1 is day 1
pub fn day_of_year(date: NaiveDate) -> u32 {
    date.ordinal()
}

/// Entry for `date` from a rotation table, `day_of_year % len`
pub fn pick_for_date<T>(date: NaiveDate, table: &DailyRotation<T>) -> &T {
    table.pick(day_of_year(date) as usize)
}

/// Science event key for `date`: 1-based month and day, no padding
pub fn science_event_key(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

#[derive(Debug, Clone, PartialEq)]
pub struct ContentService {
    catalog: Arc<ContentCatalog>,
    featured_book_count: usize,
}

impl ContentService {
    pub fn new(catalog: Arc<ContentCatalog>, featured_book_count: usize) -> Self {
        Self {
            catalog,
            featured_book_count,
        }
    }

    pub fn quote_of_day(&self, date: NaiveDate) -> &Quote {
        pick_for_date(date, self.catalog.quotes())
    }

    pub fn fact_of_day(&self, date: NaiveDate) -> &FunFact {
        pick_for_date(date, self.catalog.facts())
    }

    pub fn vocabulary_of_day(&self, date: NaiveDate) -> &VocabularyWord {
        pick_for_date(date, self.catalog.vocabulary())
    }

    pub fn science_event_for_date(&self, date: NaiveDate) -> Option<&ScienceEvent> {
        self.catalog.science_event(&science_event_key(date))
    }

    /// Event description for `date`, or the catalog's "no event" text
    pub fn describe_science_event(&self, date: NaiveDate) -> LocalizedText {
        match self.science_event_for_date(date) {
            Some(event) => LocalizedText::new(
                format!("{}: {}", event.year, event.description.en),
                format!("{}年：{}", event.year, event.description.zh),
            ),
            None => self.catalog.no_event().clone(),
        }
    }

    /// The first `featured_book_count` books of the catalog
    pub fn featured_books(&self) -> &[HistoricalBook] {
        let books = self.catalog.books();
        &books[..self.featured_book_count.min(books.len())]
    }

    /// Everything the sidebar shows for `date`
    pub fn daily_content(&self, date: NaiveDate) -> DailyContent {
        let content = DailyContent {
            date,
            day_of_year: day_of_year(date),
            quote: self.quote_of_day(date).clone(),
            fact: self.fact_of_day(date).clone(),
            vocabulary: self.vocabulary_of_day(date).clone(),
            science_event: self.science_event_for_date(date).cloned(),
            science_event_text: self.describe_science_event(date),
            featured_books: self.featured_books().to_vec(),
        };

        debug!(
            "Daily content for {} (day {}): word '{}', science event: {}",
            date,
            content.day_of_year,
            content.vocabulary.word,
            content.science_event.is_some()
        );

        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn service() -> ContentService {
        let catalog = ContentCatalog::embedded().unwrap();
        ContentService::new(Arc::new(catalog), 3)
    }

    #[test]
    fn test_day_of_year_is_one_based() {
        assert_eq!(day_of_year(date(2026, 1, 1)), 1);
        assert_eq!(day_of_year(date(2026, 12, 31)), 365);
        assert_eq!(day_of_year(date(2024, 12, 31)), 366);
        assert_eq!(day_of_year(date(2026, 3, 14)), 73);
    }

    #[test]
    fn test_pick_for_date_uses_day_of_year_modulo() {
        let table = DailyRotation::new("letters", vec!['a', 'b', 'c']).unwrap();

        // Day 1 -> index 1, day 3 -> index 0
        assert_eq!(*pick_for_date(date(2026, 1, 1), &table), 'b');
        assert_eq!(*pick_for_date(date(2026, 1, 3), &table), 'a');
        assert_eq!(*pick_for_date(date(2026, 3, 14), &table), 'b');
    }

    #[test]
    fn test_selection_is_deterministic() {
        let service = service();
        let day = date(2026, 5, 20);

        assert_eq!(service.quote_of_day(day), service.quote_of_day(day));
        assert_eq!(service.daily_content(day), service.daily_content(day));
    }

    #[test]
    fn test_selection_is_within_table() {
        let service = service();
        let catalog = ContentCatalog::embedded().unwrap();

        let mut day = date(2026, 1, 1);
        while day.year() == 2026 {
            assert!(catalog.quotes().items().contains(service.quote_of_day(day)));
            assert!(catalog.facts().items().contains(service.fact_of_day(day)));
            assert!(catalog
                .vocabulary()
                .items()
                .contains(service.vocabulary_of_day(day)));
            day = day.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_science_event_key_format() {
        assert_eq!(science_event_key(date(2026, 3, 14)), "3/14");
        assert_eq!(science_event_key(date(2026, 1, 4)), "1/4");
        assert_eq!(science_event_key(date(2026, 12, 17)), "12/17");
    }

    #[test]
    fn test_science_event_on_pi_day() {
        let service = service();
        let event = service.science_event_for_date(date(2026, 3, 14)).unwrap();

        assert_eq!(event.year, 1879);
        assert!(event.description.en.contains("Einstein"));

        let text = service.describe_science_event(date(2026, 3, 14));
        assert!(text.en.starts_with("1879: "));
        assert!(text.zh.starts_with("1879年："));
    }

    #[test]
    fn test_missing_science_event_falls_back() {
        let service = service();
        let catalog = ContentCatalog::embedded().unwrap();

        assert!(service.science_event_for_date(date(2026, 3, 15)).is_none());
        assert_eq!(
            &service.describe_science_event(date(2026, 3, 15)),
            catalog.no_event()
        );

        let content = service.daily_content(date(2026, 3, 15));
        assert!(content.science_event.is_none());
        assert_eq!(&content.science_event_text, catalog.no_event());
    }

    #[test]
    fn test_featured_books_takes_head_of_list() {
        let catalog = Arc::new(ContentCatalog::embedded().unwrap());

        let three = ContentService::new(catalog.clone(), 3);
        assert_eq!(three.featured_books(), &catalog.books()[..3]);

        let all = ContentService::new(catalog.clone(), 100);
        assert_eq!(all.featured_books().len(), catalog.books().len());

        let none = ContentService::new(catalog, 0);
        assert!(none.featured_books().is_empty());
    }
}
