//! Map requests
//!
//! Resolves a destination name to a map view. Lookups go to an external,
//! rate-limited service, so every failure becomes a [`MapResult`] with a
//! warning the caller can show instead of an error.

use crate::ErrorCode;
use crate::geocoding::Geocoder;
use crate::models::Location;
use serde::Serialize;
use tracing::{info, instrument, warn};

/// Zoom level used for destination maps
pub const DEFAULT_ZOOM: u8 = 12;

/// A resolved map to display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub location: Location,
    pub zoom: u8,
}

/// Outcome of a map request
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MapResult {
    Found(MapView),
    NotFound { query: String },
    Unavailable { query: String, code: ErrorCode },
}

impl MapResult {
    /// Warning to show the user, `None` when the map was found
    #[must_use]
    pub fn warning(&self) -> Option<String> {
        match self {
            MapResult::Found(_) => None,
            MapResult::NotFound { query } if query.is_empty() => {
                Some("Enter a destination name to show it on the map".to_string())
            }
            MapResult::NotFound { query } => Some(format!("Couldn't find {query} on map")),
            MapResult::Unavailable {
                code: ErrorCode::GeocodeRateLimit,
                ..
            } => Some(
                "Map loading delayed - free service limit reached. Try again in a minute."
                    .to_string(),
            ),
            MapResult::Unavailable { .. } => {
                Some("Map service unavailable right now. Try again later.".to_string())
            }
        }
    }

    #[must_use]
    pub fn location(&self) -> Option<&Location> {
        match self {
            MapResult::Found(view) => Some(&view.location),
            _ => None,
        }
    }
}

/// Request/response front for a [`Geocoder`]
pub struct MapService {
    geocoder: Box<dyn Geocoder>,
}

impl MapService {
    #[must_use]
    pub fn new(geocoder: Box<dyn Geocoder>) -> Self {
        Self { geocoder }
    }

    /// Resolve `name` to a map view. Never fails.
    #[instrument(skip(self))]
    pub async fn on_map_request(&self, name: &str) -> MapResult {
        let query = name.trim();
        if query.is_empty() {
            return MapResult::NotFound {
                query: String::new(),
            };
        }

        match self.geocoder.geocode(query).await {
            Ok(Some(location)) => {
                info!(
                    "Map for {} at {} via {}",
                    query,
                    location.format_coordinates(),
                    self.geocoder.name()
                );
                MapResult::Found(MapView {
                    location,
                    zoom: DEFAULT_ZOOM,
                })
            }
            Ok(None) => MapResult::NotFound {
                query: query.to_string(),
            },
            Err(e) if e.code() == Some(ErrorCode::GeocodeNotFound) => MapResult::NotFound {
                query: query.to_string(),
            },
            Err(e) => {
                warn!("Map lookup for {} failed: {}", query, e);
                MapResult::Unavailable {
                    query: query.to_string(),
                    code: e.code().unwrap_or(ErrorCode::GeocodeNetworkError),
                }
            }
        }
    }
}
