//! Geocoding clients
//!
//! Resolve a destination name to coordinates through a free public
//! geocoding service. Requests are budgeted locally, transient failures are
//! retried with exponential backoff, and every failure is reported with an
//! [`ErrorCode`] so the map layer can degrade to a warning.

pub mod nominatim;
pub mod open_meteo;
pub mod rate_limit;

use crate::config::{GeocodingConfig, GeocodingProvider};
use crate::models::Location;
use crate::{ErrorCode, Result, TravelError};
use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_retry::{RetryTransientMiddleware, policies::ExponentialBackoff};
use serde::de::DeserializeOwned;
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

pub use nominatim::NominatimGeocoder;
pub use open_meteo::OpenMeteoGeocoder;
pub use rate_limit::RateLimiter;

/// Name to coordinates lookup
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Returns the name of this geocoder (for logging/debugging)
    fn name(&self) -> &str;

    /// Best match for `query`, `Ok(None)` when the service has no match
    async fn geocode(&self, query: &str) -> Result<Option<Location>>;
}

/// Build the geocoder selected in the configuration
pub fn from_config(config: &GeocodingConfig) -> Result<Box<dyn Geocoder>> {
    let geocoder: Box<dyn Geocoder> = match config.provider {
        GeocodingProvider::Nominatim => Box::new(NominatimGeocoder::new(config)?),
        GeocodingProvider::OpenMeteo => Box::new(OpenMeteoGeocoder::new(config)?),
    };
    info!("Using {} geocoder at {}", geocoder.name(), config.endpoint());
    Ok(geocoder)
}

/// Rate limited, retrying JSON-over-HTTP client shared by the geocoders
pub struct JsonClient {
    client: ClientWithMiddleware,
    rate_limiter: Mutex<RateLimiter>,
}

impl JsonClient {
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TravelError::config(format!("Failed to create HTTP client: {e}")))?;

        let retry_policy = ExponentialBackoff::builder().build_with_max_retries(config.max_retries);
        let client = ClientBuilder::new(client)
            .with(RetryTransientMiddleware::new_with_policy(retry_policy))
            .build();

        Ok(Self {
            client,
            rate_limiter: Mutex::new(RateLimiter::per_minute(config.requests_per_minute)),
        })
    }

    /// Reserve a slot in the local request budget
    fn acquire(&self) -> Result<()> {
        let mut limiter = self
            .rate_limiter
            .lock()
            .map_err(|_| TravelError::general("Rate limiter lock poisoned"))?;

        if limiter.allow_request() {
            return Ok(());
        }
        let wait_time = limiter.time_until_next_request();
        warn!(
            "Local rate limit reached, next request allowed in {:.1}s",
            wait_time.as_secs_f64()
        );
        Err(TravelError::geocoding(
            format!(
                "Rate limit exceeded. Please wait {} seconds.",
                wait_time.as_secs().max(1)
            ),
            ErrorCode::GeocodeRateLimit,
        ))
    }

    /// GET `url` and decode the JSON body
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        self.acquire()?;

        debug!("Geocoding request URL: {}", url);
        let start_time = Instant::now();

        let response = self.client.get(url).send().await.map_err(|e| {
            warn!("Network error talking to geocoder: {}", e);
            TravelError::geocoding(
                format!("Network error: {e}"),
                ErrorCode::GeocodeNetworkError,
            )
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start_time.elapsed().as_secs_f64()
        );

        if status == StatusCode::TOO_MANY_REQUESTS {
            warn!("Server rate limit exceeded (HTTP 429)");
            return Err(TravelError::geocoding(
                "Geocoding service rate limit exceeded",
                ErrorCode::GeocodeRateLimit,
            ));
        }
        if !status.is_success() {
            return Err(TravelError::geocoding(
                format!(
                    "Geocoding request failed with status: {} - {}",
                    status,
                    status.canonical_reason().unwrap_or("Unknown error")
                ),
                ErrorCode::GeocodeNetworkError,
            ));
        }

        response.json::<T>().await.map_err(|e| {
            warn!("Failed to decode geocoding response: {}", e);
            TravelError::geocoding(
                format!("Invalid geocoding response: {e}"),
                ErrorCode::GeocodeInvalidResponse,
            )
        })
    }
}
