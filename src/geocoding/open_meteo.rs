//! Open-Meteo geocoder (no API key required)

use super::{Geocoder, JsonClient};
use crate::Result;
use crate::config::GeocodingConfig;
use crate::models::Location;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{info, instrument, warn};

/// Geocoding response from `OpenMeteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    pub results: Option<Vec<GeocodingResult>>,
}

#[derive(Debug, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        let name = match result.admin1 {
            Some(region) if region != result.name => format!("{}, {}", result.name, region),
            _ => result.name,
        };
        Location {
            latitude: result.latitude,
            longitude: result.longitude,
            name,
            country: result.country,
        }
    }
}

pub struct OpenMeteoGeocoder {
    client: JsonClient,
    base_url: String,
}

impl OpenMeteoGeocoder {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        Ok(Self {
            client: JsonClient::new(config)?,
            base_url: config.endpoint().trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn search_url(&self, query: &str) -> String {
        format!(
            "{}/search?name={}&count=1&language=en&format=json",
            self.base_url,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl Geocoder for OpenMeteoGeocoder {
    fn name(&self) -> &str {
        "Open-Meteo"
    }

    #[instrument(skip(self))]
    async fn geocode(&self, query: &str) -> Result<Option<Location>> {
        let response: GeocodingResponse = self.client.get_json(&self.search_url(query)).await?;

        let location = response
            .results
            .unwrap_or_default()
            .into_iter()
            .next()
            .map(Location::from);

        match &location {
            Some(found) => info!(
                "Found '{}' at ({:.4}, {:.4})",
                query, found.latitude, found.longitude
            ),
            None => warn!("No results found for location '{}'", query),
        }
        Ok(location)
    }
}
