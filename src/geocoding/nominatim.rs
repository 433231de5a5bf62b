//! OpenStreetMap Nominatim geocoder
//!
//! Nominatim reports coordinates as decimal strings and expects a
//! descriptive user agent plus at most one request per second.

use super::{Geocoder, JsonClient};
use crate::config::GeocodingConfig;
use crate::models::Location;
use crate::{ErrorCode, Result, TravelError};
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument, warn};

#[derive(Debug, Deserialize)]
pub struct NominatimPlace {
    pub lat: String,
    pub lon: String,
    pub display_name: String,
    pub name: Option<String>,
}

impl NominatimPlace {
    /// Convert to a location; the country is the last segment of the display name
    pub fn into_location(self) -> Result<Location> {
        let parse = |raw: &str, what: &str| {
            raw.trim().parse::<f64>().map_err(|_| {
                TravelError::geocoding(
                    format!("Invalid {what} '{raw}' in Nominatim response"),
                    ErrorCode::GeocodeInvalidResponse,
                )
            })
        };
        let latitude = parse(&self.lat, "latitude")?;
        let longitude = parse(&self.lon, "longitude")?;

        let country = self
            .display_name
            .rsplit(',')
            .next()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .map(str::to_string);
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| self.display_name.clone());

        Ok(Location {
            latitude,
            longitude,
            name,
            country,
        })
    }
}

pub struct NominatimGeocoder {
    client: JsonClient,
    base_url: String,
}

impl NominatimGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: JsonClient::new(config)?,
            base_url: config.endpoint().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?q={}&format=json&limit=1",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    fn name(&self) -> &str {
        "Nominatim"
    }

    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Option<Location>> {
        let places: Vec<NominatimPlace> = self.client.get_json(&self.search_url(query)).await?;

        match places.into_iter().next() {
            Some(place) => {
                let location = place.into_location()?;
                info!(
                    "Found '{}' at ({:.4}, {:.4})",
                    query, location.latitude, location.longitude
                );
                Ok(Some(location))
            }
            None => {
                warn!("No results found for location '{}'", query);
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_to_location() {
        let body = r#"[{"place_id": 1, "lat": "41.8933203", "lon": "12.4829321",
            "display_name": "Roma, Lazio, Italia", "name": "Roma"}]"#;
        let places: Vec<NominatimPlace> = serde_json::from_str(body).unwrap();
        let location = places.into_iter().next().unwrap().into_location().unwrap();

        assert_eq!(location.name, "Roma");
        assert_eq!(location.country.as_deref(), Some("Italia"));
        assert!((location.latitude - 41.893_320_3).abs() < 1e-9);
        assert!(location.has_valid_coordinates());
    }

    #[test]
    fn test_missing_name_falls_back_to_display_name() {
        let place = NominatimPlace {
            lat: "1.0".into(),
            lon: "2.0".into(),
            display_name: "Somewhere".into(),
            name: None,
        };
        let location = place.into_location().unwrap();
        assert_eq!(location.name, "Somewhere");
        assert_eq!(location.country.as_deref(), Some("Somewhere"));
    }

    #[test]
    fn test_bad_coordinates_are_invalid_response() {
        let place = NominatimPlace {
            lat: "north".into(),
            lon: "2.0".into(),
            display_name: "x".into(),
            name: None,
        };
        let err = place.into_location().unwrap_err();
        assert_eq!(err.code(), Some(ErrorCode::GeocodeInvalidResponse));
    }

    #[test]
    fn test_search_url_encodes_query() {
        let config = GeocodingConfig {
            base_url: "https://nominatim.example.org/".into(),
            ..GeocodingConfig::default()
        };
        let geocoder = NominatimGeocoder::new(&config).unwrap();
        assert_eq!(
            geocoder.search_url("New York"),
            "https://nominatim.example.org/search?q=New%20York&format=json&limit=1"
        );
    }
}
