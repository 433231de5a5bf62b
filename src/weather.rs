//! Mock weather generator
//!
//! Produces a synthetic reading from the calendar month alone: the month
//! picks a season, the season picks a label and an inclusive temperature
//! range, and one temperature is drawn uniformly from that range.

use crate::Result;
use crate::models::{DestinationRecord, Season, WeatherReading};
use chrono::{Datelike, Local};
use rand::RngExt;
use std::ops::RangeInclusive;
use tracing::debug;

/// Conditions label and temperature range for one season
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonProfile {
    pub conditions: &'static str,
    pub temperature_celsius: RangeInclusive<i32>,
}

impl SeasonProfile {
    #[must_use]
    pub fn for_season(season: Season) -> Self {
        let (conditions, low, high) = match season {
            Season::Spring => ("🌤️ Mild", 15, 20),
            Season::Summer => ("☀️ Warm", 25, 35),
            Season::Fall => ("🍂 Cool", 10, 18),
            Season::Winter => ("❄️ Cold", 0, 10),
        };
        Self {
            conditions,
            temperature_celsius: low..=high,
        }
    }
}

/// Current local calendar month, 1 = January
#[must_use]
pub fn current_month() -> u32 {
    Local::now().month()
}

/// Mock weather for a calendar month.
///
/// Fails with a validation error when `month` is outside 1..=12.
pub fn mock_weather<R: RngExt + ?Sized>(month: u32, rng: &mut R) -> Result<WeatherReading> {
    let season = Season::from_month(month)?;
    let profile = SeasonProfile::for_season(season);
    let temperature_celsius = rng.random_range(profile.temperature_celsius);

    Ok(WeatherReading {
        temperature_celsius,
        conditions: profile.conditions.to_string(),
        season,
    })
}

/// Mock weather shown next to a destination.
///
/// The destination does not influence the reading; every destination gets
/// weather for the same month-derived season.
pub fn mock_weather_for<R: RngExt + ?Sized>(
    destination: &DestinationRecord,
    month: u32,
    rng: &mut R,
) -> Result<WeatherReading> {
    let reading = mock_weather(month, rng)?;
    debug!(
        "Mock weather for {}: {} {}",
        destination.name,
        reading.format_temperature(),
        reading.conditions
    );
    Ok(reading)
}
