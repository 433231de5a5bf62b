//! Weather reading model and display methods

use super::destination::Season;
use serde::{Deserialize, Serialize};

/// A synthetic weather reading. Not stored; computed per display request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Temperature in Celsius
    pub temperature_celsius: i32,
    /// Human-readable conditions label, e.g. "🌤️ Mild"
    pub conditions: String,
    /// Season the reading was derived from
    pub season: Season,
}

impl WeatherReading {
    /// Format temperature with unit
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{}°C", self.temperature_celsius)
    }

    /// Format the season note shown under the conditions
    #[must_use]
    pub fn format_season(&self) -> String {
        format!("({} season)", self.season)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting() {
        let reading = WeatherReading {
            temperature_celsius: -3,
            conditions: "❄️ Cold".to_string(),
            season: Season::Winter,
        };
        assert_eq!(reading.format_temperature(), "-3°C");
        assert_eq!(reading.format_season(), "(Winter season)");
    }
}
