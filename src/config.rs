//! Configuration management for the travel assistant
//!
//! Handles loading configuration from files, environment variables,
//! and provides validation for all configuration settings.

use crate::TravelError;
use crate::models::{BudgetLevel, Category, Preference, Season, UserPreferences};
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the travel assistant
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Geocoding service configuration
    pub geocoding: GeocodingConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Preferences applied when the matching CLI flag is omitted
    pub defaults: DefaultsConfig,
}

/// Which geocoding service answers map requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GeocodingProvider {
    Nominatim,
    OpenMeteo,
}

/// Geocoding service configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeocodingConfig {
    /// Service used for map lookups
    pub provider: GeocodingProvider,
    /// Base URL override; empty selects the provider's public endpoint
    pub base_url: String,
    /// User agent sent with every request (Nominatim requires one)
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_seconds: u32,
    /// Maximum number of retries for transient failures
    pub max_retries: u32,
    /// Client-side request budget per minute
    pub requests_per_minute: u32,
}

/// Logging configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    pub level: String,
    /// Log format (pretty or json)
    pub format: String,
}

/// Default preference values
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Budget ceiling, 1..=4
    pub budget: Option<u8>,
    /// Season name or "Any"
    pub season: Option<String>,
    /// Destination type or "Any"
    pub category: Option<String>,
}

// Default value functions
fn default_user_agent() -> String {
    format!("travel-assistant/{}", crate::VERSION)
}

fn default_geocoding_timeout() -> u32 {
    10
}

fn default_geocoding_max_retries() -> u32 {
    2
}

fn default_requests_per_minute() -> u32 {
    // Nominatim usage policy: at most one request per second
    60
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for GeocodingConfig {
    fn default() -> Self {
        Self {
            provider: GeocodingProvider::Nominatim,
            base_url: String::new(),
            user_agent: default_user_agent(),
            timeout_seconds: default_geocoding_timeout(),
            max_retries: default_geocoding_max_retries(),
            requests_per_minute: default_requests_per_minute(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl GeocodingConfig {
    /// Base URL to use, falling back to the provider's public endpoint
    #[must_use]
    pub fn endpoint(&self) -> &str {
        if !self.base_url.is_empty() {
            return &self.base_url;
        }
        match self.provider {
            GeocodingProvider::Nominatim => "https://nominatim.openstreetmap.org",
            GeocodingProvider::OpenMeteo => "https://geocoding-api.open-meteo.com/v1",
        }
    }
}

impl DefaultsConfig {
    /// Turn the configured defaults into preferences. Unset entries mean no constraint.
    pub fn to_preferences(&self) -> crate::Result<UserPreferences> {
        let budget_ceiling = match self.budget {
            Some(level) => BudgetLevel::new(level)?,
            None => BudgetLevel::MAX,
        };
        let season: Preference<Season> = match &self.season {
            Some(season) => season.parse()?,
            None => Preference::Any,
        };
        let category: Preference<Category> = match &self.category {
            Some(category) => category.parse()?,
            None => Preference::Any,
        };
        Ok(UserPreferences {
            budget_ceiling,
            season,
            category,
        })
    }
}

impl AppConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        // Load from file if path is provided or use default location
        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file.clone())
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. TRAVEL_ASSISTANT_GEOCODING__TIMEOUT_SECONDS=5
        builder = builder.add_source(
            Environment::with_prefix("TRAVEL_ASSISTANT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let mut config: AppConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.apply_defaults();
        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("travel-assistant").join("config.toml"))
    }

    /// Apply default values to missing configuration fields
    pub fn apply_defaults(&mut self) {
        if self.geocoding.user_agent.is_empty() {
            self.geocoding.user_agent = default_user_agent();
        }
        if self.geocoding.timeout_seconds == 0 {
            self.geocoding.timeout_seconds = default_geocoding_timeout();
        }
        if self.geocoding.requests_per_minute == 0 {
            self.geocoding.requests_per_minute = default_requests_per_minute();
        }
        if self.logging.level.is_empty() {
            self.logging.level = default_log_level();
        }
        if self.logging.format.is_empty() {
            self.logging.format = default_log_format();
        }
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        self.validate_defaults()?;
        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.geocoding.timeout_seconds > 120 {
            return Err(TravelError::config("Geocoding timeout cannot exceed 120 seconds").into());
        }

        if self.geocoding.max_retries > 10 {
            return Err(TravelError::config("Geocoding max retries cannot exceed 10").into());
        }

        if self.geocoding.requests_per_minute > 600 {
            return Err(
                TravelError::config("Geocoding requests per minute cannot exceed 600").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(TravelError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(TravelError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        let endpoint = self.geocoding.endpoint();
        if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
            return Err(TravelError::config(
                "Geocoding base URL must be a valid HTTP or HTTPS URL",
            )
            .into());
        }

        Ok(())
    }

    /// Validate the default preferences
    fn validate_defaults(&self) -> Result<()> {
        self.defaults
            .to_preferences()
            .map_err(|e| TravelError::config(format!("Invalid [defaults] section: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.geocoding.provider, GeocodingProvider::Nominatim);
        assert_eq!(config.geocoding.endpoint(), "https://nominatim.openstreetmap.org");
        assert_eq!(config.geocoding.timeout_seconds, 10);
        assert_eq!(config.logging.level, "warn");
        assert!(config.geocoding.user_agent.starts_with("travel-assistant/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_open_meteo_endpoint() {
        let mut config = AppConfig::default();
        config.geocoding.provider = GeocodingProvider::OpenMeteo;
        assert_eq!(
            config.geocoding.endpoint(),
            "https://geocoding-api.open-meteo.com/v1"
        );
        config.geocoding.base_url = "http://localhost:8080".to_string();
        assert_eq!(config.geocoding.endpoint(), "http://localhost:8080");
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = AppConfig::default();
        config.logging.level = "invalid".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = AppConfig::default();
        config.geocoding.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout cannot exceed"));
    }

    #[test]
    fn test_config_validation_bad_url() {
        let mut config = AppConfig::default();
        config.geocoding.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_defaults_to_preferences() {
        let defaults = DefaultsConfig {
            budget: Some(2),
            season: Some("summer".to_string()),
            category: Some("Any".to_string()),
        };
        let prefs = defaults.to_preferences().unwrap();
        assert_eq!(prefs.budget_ceiling.get(), 2);
        assert_eq!(prefs.season, Preference::Exactly(Season::Summer));
        assert_eq!(prefs.category, Preference::Any);

        assert_eq!(
            DefaultsConfig::default().to_preferences().unwrap(),
            UserPreferences::new()
        );
    }

    #[test]
    fn test_invalid_defaults_rejected() {
        let mut config = AppConfig::default();
        config.defaults.budget = Some(9);
        let result = config.validate();
        assert!(result.unwrap_err().to_string().contains("[defaults]"));
    }

    #[test]
    fn test_apply_defaults_fills_blanks() {
        let mut config = AppConfig::default();
        config.geocoding.timeout_seconds = 0;
        config.logging.format = String::new();
        config.apply_defaults();
        assert_eq!(config.geocoding.timeout_seconds, 10);
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
[geocoding]
provider = "open-meteo"
max_retries = 4

[logging]
level = "debug"

[defaults]
budget = 3
season = "Spring"
"#
        )
        .unwrap();

        let config = AppConfig::load_from_path(Some(file.path().to_path_buf())).unwrap();
        assert_eq!(config.geocoding.provider, GeocodingProvider::OpenMeteo);
        assert_eq!(config.geocoding.max_retries, 4);
        assert_eq!(config.geocoding.timeout_seconds, 10);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.defaults.budget, Some(3));
    }

    #[test]
    fn test_config_path_generation() {
        if let Some(path) = AppConfig::get_config_path() {
            assert!(path.to_string_lossy().contains("travel-assistant"));
            assert!(path.to_string_lossy().contains("config.toml"));
        }
    }
}
