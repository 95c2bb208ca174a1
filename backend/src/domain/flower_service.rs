use std::sync::Arc;

use shared::{FlowerEntry, Season, SeasonalTheme};
use tracing::{debug, warn};

use crate::catalog::ContentCatalog;

/// Flower of the month and seasonal colours
#[derive(Debug, Clone, PartialEq)]
pub struct FlowerService {
    catalog: Arc<ContentCatalog>,
}

impl FlowerService {
    pub fn new(catalog: Arc<ContentCatalog>) -> Self {
        Self { catalog }
    }

    /// Flower for `month` (0 = January). Out-of-range months get January's flower.
    pub fn monthly_flower(&self, month: u32) -> &FlowerEntry {
        let flowers = self.catalog.flowers();
        match flowers.get(month as usize) {
            Some(flower) => flower,
            None => {
                warn!("No flower for month index {}, using January's", month);
                &flowers[0]
            }
        }
    }

    pub fn seasonal_theme(&self, month: u32) -> SeasonalTheme {
        let season = Season::for_month(month);
        SeasonalTheme {
            season,
            palette: self.catalog.themes().palette(season).clone(),
        }
    }

    /// Case-insensitive lookup by English, Chinese or Portuguese name
    pub fn find_flower(&self, name: &str) -> Option<&FlowerEntry> {
        let needle = name.trim().to_lowercase();
        let found = self.catalog.flowers().iter().find(|flower| {
            [&flower.english, &flower.chinese, &flower.portuguese]
                .iter()
                .any(|candidate| candidate.to_lowercase() == needle)
        });
        debug!("Flower lookup for '{}': {}", name, found.is_some());
        found
    }
}
