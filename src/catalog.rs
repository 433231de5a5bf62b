//! Destination catalog
//!
//! An ordered, read-only table of destinations. The built-in sample table
//! is what the assistant ships with; a custom table can be loaded from a
//! JSON array of records. Order matters: it breaks ties when sorting
//! recommendations by budget.

use crate::models::{BudgetLevel, Category, DestinationRecord, Season};
use crate::{Result, TravelError};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    records: Vec<DestinationRecord>,
}

impl Catalog {
    /// Build a catalog, rejecting blank or duplicate names. Names are stored
    /// trimmed.
    pub fn new(mut records: Vec<DestinationRecord>) -> Result<Self> {
        let mut seen = HashSet::new();
        for record in &mut records {
            let trimmed = record.name.trim();
            if trimmed.len() != record.name.len() {
                record.name = trimmed.to_string();
            }
            let name = record.name.as_str();
            if name.is_empty() {
                return Err(TravelError::validation(
                    "Destination name cannot be empty",
                ));
            }
            if !seen.insert(name.to_lowercase()) {
                return Err(TravelError::validation(format!(
                    "Duplicate destination '{name}' in catalog"
                )));
            }
        }
        Ok(Self { records })
    }

    /// The five destinations the assistant ships with
    #[must_use]
    pub fn sample() -> Self {
        Self {
            records: vec![
                DestinationRecord::new(
                    "Paris",
                    Category::City,
                    const { BudgetLevel::new_const(3) },
                    Season::Spring,
                    "Romantic city with museums and cafes",
                    "France",
                ),
                DestinationRecord::new(
                    "Tokyo",
                    Category::City,
                    const { BudgetLevel::new_const(4) },
                    Season::Fall,
                    "High-tech metropolis with ancient temples",
                    "Japan",
                ),
                DestinationRecord::new(
                    "Bali",
                    Category::Beach,
                    const { BudgetLevel::new_const(2) },
                    Season::Summer,
                    "Tropical beaches and yoga retreats",
                    "Indonesia",
                ),
                DestinationRecord::new(
                    "Rome",
                    Category::Historical,
                    const { BudgetLevel::new_const(3) },
                    Season::Spring,
                    "Ancient ruins and Italian cuisine",
                    "Italy",
                ),
                DestinationRecord::new(
                    "New York",
                    Category::City,
                    const { BudgetLevel::new_const(4) },
                    Season::Fall,
                    "Skyscrapers and Broadway shows",
                    "USA",
                ),
            ],
        }
    }

    /// Parse a JSON array of destination records
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<DestinationRecord> = serde_json::from_str(json)?;
        Self::new(records)
    }

    /// Load a catalog from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&contents)?;
        info!(
            "Loaded {} destinations from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    #[must_use]
    pub fn records(&self) -> &[DestinationRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DestinationRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Case-insensitive lookup by name
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&DestinationRecord> {
        let name = name.trim();
        self.records
            .iter()
            .find(|record| record.name.eq_ignore_ascii_case(name))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a DestinationRecord;
    type IntoIter = std::slice::Iter<'a, DestinationRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
