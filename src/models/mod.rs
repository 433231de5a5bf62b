//! Data models for the travel assistant
//!
//! This module contains the core domain models organized by concern:
//! - Destination: catalog records and their value types
//! - Preferences: the user's budget, season and type constraints
//! - Weather: synthetic weather readings
//! - Location: geographic coordinates returned by geocoding

pub mod destination;
pub mod location;
pub mod preferences;
pub mod weather;

// Re-export all public types for convenient access
pub use destination::{BudgetLevel, Category, DestinationRecord, Season};
pub use location::Location;
pub use preferences::{Preference, UserPreferences};
pub use weather::WeatherReading;
