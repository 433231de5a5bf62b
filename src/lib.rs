//! Travel assistant - budget, season and type based destination recommendations
//!
//! This library provides the destination catalog, the recommendation filter,
//! the mock weather generator, and the map lookup shell around them.

pub mod catalog;
pub mod config;
pub mod display;
pub mod error;
pub mod geocoding;
pub mod logging;
pub mod map;
pub mod models;
pub mod recommend;
pub mod weather;

// Re-export core types for public API
pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{ErrorCode, TravelError};
pub use geocoding::Geocoder;
pub use map::{MapResult, MapService};
pub use models::{
    BudgetLevel, Category, DestinationRecord, Location, Preference, Season, UserPreferences,
    WeatherReading,
};
pub use recommend::{Recommendation, recommend, recommend_with_weather};
pub use weather::{mock_weather, mock_weather_for};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelError>;
