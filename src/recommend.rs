//! Recommendation filter
//!
//! Filters a catalog by the user's budget ceiling, season and destination
//! type, then orders the survivors by budget. The sort is stable, so
//! destinations with the same budget keep their catalog order.

use crate::Result;
use crate::models::{DestinationRecord, Season, UserPreferences, WeatherReading};
use crate::weather::mock_weather_for;
use rand::RngExt;
use serde::Serialize;
use tracing::debug;

/// A recommended destination paired with the weather shown next to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation<'a> {
    pub destination: &'a DestinationRecord,
    pub weather: WeatherReading,
}

/// Whether a single record satisfies all three constraints
#[must_use]
pub fn matches(record: &DestinationRecord, prefs: &UserPreferences) -> bool {
    record.budget_level <= prefs.budget_ceiling
        && prefs.season.accepts(&record.best_season)
        && prefs.category.accepts(&record.category)
}

/// Filter `catalog` by `prefs` and sort ascending by budget level.
///
/// An empty result is not an error; callers should ask the user to relax
/// their filters.
#[must_use]
pub fn recommend<'a>(
    catalog: &'a [DestinationRecord],
    prefs: &UserPreferences,
) -> Vec<&'a DestinationRecord> {
    let mut filtered: Vec<&DestinationRecord> = catalog
        .iter()
        .filter(|record| matches(record, prefs))
        .collect();

    // `sort_by_key` is stable
    filtered.sort_by_key(|record| record.budget_level);

    debug!(
        "{} of {} destinations match budget <= {}, season {}, type {}",
        filtered.len(),
        catalog.len(),
        prefs.budget_ceiling,
        prefs.season,
        prefs.category
    );

    filtered
}

/// Run [`recommend`] and attach one mock weather reading per result, drawn
/// in result order.
///
/// `month` is validated up front, so an out-of-range month fails even when
/// nothing matches.
pub fn recommend_with_weather<'a, R: RngExt + ?Sized>(
    catalog: &'a [DestinationRecord],
    prefs: &UserPreferences,
    month: u32,
    rng: &mut R,
) -> Result<Vec<Recommendation<'a>>> {
    Season::from_month(month)?;

    recommend(catalog, prefs)
        .into_iter()
        .map(|destination| {
            let weather = mock_weather_for(destination, month, &mut *rng)?;
            Ok(Recommendation {
                destination,
                weather,
            })
        })
        .collect()
}
