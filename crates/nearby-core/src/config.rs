use crate::error::{NearbyError, Result};
use crate::ports::WatchOptions;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
pub const DEFAULT_RADIUS_METERS: f64 = 1000.0;
pub const DEFAULT_ENTERTAINMENT_AMENITY: &str = "cinema";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 25;
pub const DEFAULT_WATCH_HIGH_ACCURACY: bool = true;
pub const DEFAULT_WATCH_MAXIMUM_AGE_MS: u64 = 10_000;
pub const DEFAULT_WATCH_TIMEOUT_MS: u64 = 5_000;

/// Configuration source for tracking where values come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfigSource {
    /// Default value
    Default,
    /// Loaded from config file
    File,
    /// Loaded from environment variable
    Environment,
    /// Provided via CLI argument
    Cli,
}

impl ConfigSource {
    /// Returns the precedence level (higher = higher priority)
    pub fn precedence(&self) -> u8 {
        match self {
            ConfigSource::Default => 0,
            ConfigSource::File => 1,
            ConfigSource::Environment => 2,
            ConfigSource::Cli => 3,
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }

    /// Update the value if the new source has higher precedence
    pub fn update(&mut self, value: T, source: ConfigSource) {
        if source.precedence() > self.source.precedence() {
            self.value = value;
            self.source = source;
        }
    }
}

/// Layered configuration for Nearby
#[derive(Debug, Clone)]
pub struct LayeredConfig {
    pub endpoint: ConfigValue<String>,
    pub radius_meters: ConfigValue<f64>,
    pub entertainment_amenity: ConfigValue<String>,
    pub request_timeout_secs: ConfigValue<u64>,
    pub sort_by_distance: ConfigValue<bool>,
    pub landmarks_file: ConfigValue<Option<PathBuf>>,
    pub watch_high_accuracy: ConfigValue<bool>,
    pub watch_maximum_age_ms: ConfigValue<u64>,
    pub watch_timeout_ms: ConfigValue<u64>,
}

/// Resolved values the query pipeline and the HTTP source need
#[derive(Debug, Clone, PartialEq)]
pub struct SearchSettings {
    pub endpoint: String,
    pub radius_meters: f64,
    pub entertainment_amenity: String,
    pub request_timeout: Duration,
    pub sort_by_distance: bool,
}

impl Default for SearchSettings {
    fn default() -> Self {
        LayeredConfig::with_defaults().search_settings()
    }
}

impl LayeredConfig {
    /// Create a new configuration with default values
    pub fn with_defaults() -> Self {
        Self {
            endpoint: ConfigValue::new(DEFAULT_ENDPOINT.to_string(), ConfigSource::Default),
            radius_meters: ConfigValue::new(DEFAULT_RADIUS_METERS, ConfigSource::Default),
            entertainment_amenity: ConfigValue::new(
                DEFAULT_ENTERTAINMENT_AMENITY.to_string(),
                ConfigSource::Default,
            ),
            request_timeout_secs: ConfigValue::new(
                DEFAULT_REQUEST_TIMEOUT_SECS,
                ConfigSource::Default,
            ),
            sort_by_distance: ConfigValue::new(false, ConfigSource::Default),
            landmarks_file: ConfigValue::new(None, ConfigSource::Default),
            watch_high_accuracy: ConfigValue::new(
                DEFAULT_WATCH_HIGH_ACCURACY,
                ConfigSource::Default,
            ),
            watch_maximum_age_ms: ConfigValue::new(
                DEFAULT_WATCH_MAXIMUM_AGE_MS,
                ConfigSource::Default,
            ),
            watch_timeout_ms: ConfigValue::new(DEFAULT_WATCH_TIMEOUT_MS, ConfigSource::Default),
        }
    }

    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| NearbyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to read config file: {}", e),
            })?;

        let file_config: FileConfig =
            toml::from_str(&content).map_err(|e| NearbyError::ConfigInvalid {
                key: "file".to_string(),
                reason: format!("Failed to parse TOML: {}", e),
            })?;

        if let Some(endpoint) = file_config.endpoint {
            self.endpoint.update(endpoint, ConfigSource::File);
        }

        if let Some(radius) = file_config.radius_meters {
            self.radius_meters.update(validate_radius(radius)?, ConfigSource::File);
        }

        if let Some(amenity) = file_config.entertainment_amenity {
            self.entertainment_amenity.update(parse_amenity(&amenity)?, ConfigSource::File);
        }

        if let Some(timeout) = file_config.request_timeout_secs {
            self.request_timeout_secs.update(validate_timeout(timeout)?, ConfigSource::File);
        }

        if let Some(sort) = file_config.sort_by_distance {
            self.sort_by_distance.update(sort, ConfigSource::File);
        }

        if let Some(landmarks) = file_config.landmarks_file {
            self.landmarks_file.update(Some(landmarks), ConfigSource::File);
        }

        if let Some(high_accuracy) = file_config.watch_high_accuracy {
            self.watch_high_accuracy.update(high_accuracy, ConfigSource::File);
        }

        if let Some(maximum_age) = file_config.watch_maximum_age_ms {
            self.watch_maximum_age_ms.update(maximum_age, ConfigSource::File);
        }

        if let Some(timeout) = file_config.watch_timeout_ms {
            self.watch_timeout_ms
                .update(validate_watch_timeout(timeout)?, ConfigSource::File);
        }

        Ok(self)
    }

    /// Load configuration from environment variables
    pub fn load_from_env(mut self) -> Self {
        // NEARBY_ENDPOINT
        if let Ok(endpoint) = env::var("NEARBY_ENDPOINT") {
            self.endpoint.update(endpoint, ConfigSource::Environment);
        }

        // NEARBY_RADIUS_METERS
        if let Ok(radius_str) = env::var("NEARBY_RADIUS_METERS") {
            match parse_radius(&radius_str) {
                Ok(radius) => self.radius_meters.update(radius, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NEARBY_RADIUS_METERS value '{}': expected a positive number of meters",
                    radius_str
                ),
            }
        }

        // NEARBY_ENTERTAINMENT_AMENITY
        if let Ok(amenity_str) = env::var("NEARBY_ENTERTAINMENT_AMENITY") {
            match parse_amenity(&amenity_str) {
                Ok(amenity) => self.entertainment_amenity.update(amenity, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NEARBY_ENTERTAINMENT_AMENITY value '{}': expected an OSM tag value such as cinema",
                    amenity_str
                ),
            }
        }

        // NEARBY_REQUEST_TIMEOUT_SECS
        if let Ok(timeout_str) = env::var("NEARBY_REQUEST_TIMEOUT_SECS") {
            match timeout_str.trim().parse::<u64>().ok().filter(|t| *t > 0) {
                Some(timeout) => {
                    self.request_timeout_secs.update(timeout, ConfigSource::Environment)
                }
                None => tracing::warn!(
                    "Invalid NEARBY_REQUEST_TIMEOUT_SECS value '{}': expected a positive integer",
                    timeout_str
                ),
            }
        }

        // NEARBY_SORT_BY_DISTANCE
        if let Ok(sort_str) = env::var("NEARBY_SORT_BY_DISTANCE") {
            match parse_bool(&sort_str) {
                Ok(sort) => self.sort_by_distance.update(sort, ConfigSource::Environment),
                Err(_) => tracing::warn!(
                    "Invalid NEARBY_SORT_BY_DISTANCE value '{}': expected true or false",
                    sort_str
                ),
            }
        }

        // NEARBY_LANDMARKS_FILE
        if let Ok(path) = env::var("NEARBY_LANDMARKS_FILE") {
            self.landmarks_file.update(Some(PathBuf::from(path)), ConfigSource::Environment);
        }

        // NEARBY_WATCH_HIGH_ACCURACY
        if let Ok(accuracy_str) = env::var("NEARBY_WATCH_HIGH_ACCURACY") {
            match parse_bool(&accuracy_str) {
                Ok(high_accuracy) => {
                    self.watch_high_accuracy.update(high_accuracy, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid NEARBY_WATCH_HIGH_ACCURACY value '{}': expected true or false",
                    accuracy_str
                ),
            }
        }

        // NEARBY_WATCH_MAXIMUM_AGE_MS
        if let Ok(age_str) = env::var("NEARBY_WATCH_MAXIMUM_AGE_MS") {
            match age_str.trim().parse::<u64>() {
                Ok(maximum_age) => {
                    self.watch_maximum_age_ms.update(maximum_age, ConfigSource::Environment)
                }
                Err(_) => tracing::warn!(
                    "Invalid NEARBY_WATCH_MAXIMUM_AGE_MS value '{}': expected milliseconds",
                    age_str
                ),
            }
        }

        // NEARBY_WATCH_TIMEOUT_MS
        if let Ok(timeout_str) = env::var("NEARBY_WATCH_TIMEOUT_MS") {
            match timeout_str.trim().parse::<u64>().ok().filter(|t| *t > 0) {
                Some(timeout) => self.watch_timeout_ms.update(timeout, ConfigSource::Environment),
                None => tracing::warn!(
                    "Invalid NEARBY_WATCH_TIMEOUT_MS value '{}': expected a positive number of milliseconds",
                    timeout_str
                ),
            }
        }

        self
    }

    /// Update configuration from CLI arguments
    pub fn update_from_cli(&mut self, overrides: CliConfigOverrides) {
        if let Some(endpoint) = overrides.endpoint {
            self.endpoint.update(endpoint, ConfigSource::Cli);
        }

        if let Some(radius) = overrides.radius_meters {
            self.radius_meters.update(radius, ConfigSource::Cli);
        }

        if let Some(amenity) = overrides.entertainment_amenity {
            match parse_amenity(&amenity) {
                Ok(amenity) => self.entertainment_amenity.update(amenity, ConfigSource::Cli),
                Err(e) => tracing::warn!(error = %e, "Ignoring amenity override"),
            }
        }

        if let Some(sort) = overrides.sort_by_distance {
            self.sort_by_distance.update(sort, ConfigSource::Cli);
        }

        if let Some(landmarks) = overrides.landmarks_file {
            self.landmarks_file.update(Some(landmarks), ConfigSource::Cli);
        }
    }

    /// Snapshot of the values used when searching
    pub fn search_settings(&self) -> SearchSettings {
        SearchSettings {
            endpoint: self.endpoint.value.clone(),
            radius_meters: self.radius_meters.value,
            entertainment_amenity: self.entertainment_amenity.value.clone(),
            request_timeout: Duration::from_secs(self.request_timeout_secs.value),
            sort_by_distance: self.sort_by_distance.value,
        }
    }

    /// Options handed to the platform when tracking starts
    pub fn watch_options(&self) -> WatchOptions {
        WatchOptions {
            high_accuracy: self.watch_high_accuracy.value,
            maximum_age: Duration::from_millis(self.watch_maximum_age_ms.value),
            timeout: Duration::from_millis(self.watch_timeout_ms.value),
        }
    }

    /// Get all configuration values as a map for inspection
    pub fn to_inspection_map(&self) -> HashMap<String, (String, ConfigSource)> {
        let mut map = HashMap::new();

        map.insert("endpoint".to_string(), (self.endpoint.value.clone(), self.endpoint.source));

        map.insert(
            "radius_meters".to_string(),
            (format!("{}", self.radius_meters.value), self.radius_meters.source),
        );

        map.insert(
            "entertainment_amenity".to_string(),
            (self.entertainment_amenity.value.clone(), self.entertainment_amenity.source),
        );

        map.insert(
            "request_timeout_secs".to_string(),
            (format!("{}", self.request_timeout_secs.value), self.request_timeout_secs.source),
        );

        map.insert(
            "sort_by_distance".to_string(),
            (format!("{}", self.sort_by_distance.value), self.sort_by_distance.source),
        );

        map.insert(
            "landmarks_file".to_string(),
            (
                self.landmarks_file
                    .value
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(built-in)".to_string()),
                self.landmarks_file.source,
            ),
        );

        map.insert(
            "watch_high_accuracy".to_string(),
            (format!("{}", self.watch_high_accuracy.value), self.watch_high_accuracy.source),
        );

        map.insert(
            "watch_maximum_age_ms".to_string(),
            (format!("{}", self.watch_maximum_age_ms.value), self.watch_maximum_age_ms.source),
        );

        map.insert(
            "watch_timeout_ms".to_string(),
            (format!("{}", self.watch_timeout_ms.value), self.watch_timeout_ms.source),
        );

        map
    }
}

/// Configuration loaded from TOML file
#[derive(Debug, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    endpoint: Option<String>,
    radius_meters: Option<f64>,
    entertainment_amenity: Option<String>,
    request_timeout_secs: Option<u64>,
    sort_by_distance: Option<bool>,
    landmarks_file: Option<PathBuf>,
    watch_high_accuracy: Option<bool>,
    watch_maximum_age_ms: Option<u64>,
    watch_timeout_ms: Option<u64>,
}

/// CLI configuration overrides
#[derive(Debug, Default)]
pub struct CliConfigOverrides {
    pub endpoint: Option<String>,
    pub radius_meters: Option<f64>,
    pub entertainment_amenity: Option<String>,
    pub sort_by_distance: Option<bool>,
    pub landmarks_file: Option<PathBuf>,
}

/// Parse a search radius in meters
pub fn parse_radius(s: &str) -> Result<f64> {
    let radius = s.trim().parse::<f64>().map_err(|_| NearbyError::ConfigInvalid {
        key: "radius_meters".to_string(),
        reason: format!("Invalid radius: {}. Use a number of meters", s),
    })?;
    validate_radius(radius)
}

fn validate_radius(radius: f64) -> Result<f64> {
    if radius.is_finite() && radius > 0.0 {
        Ok(radius)
    } else {
        Err(NearbyError::ConfigInvalid {
            key: "radius_meters".to_string(),
            reason: format!("Radius must be a positive number of meters, got {}", radius),
        })
    }
}

fn validate_timeout(secs: u64) -> Result<u64> {
    if secs > 0 {
        Ok(secs)
    } else {
        Err(NearbyError::ConfigInvalid {
            key: "request_timeout_secs".to_string(),
            reason: "Timeout must be at least one second".to_string(),
        })
    }
}

/// Parse an OSM `amenity` tag value.
///
/// The value ends up inside a quoted tag filter of the search query, so only
/// the characters OSM uses in tag values are accepted.
pub fn parse_amenity(s: &str) -> Result<String> {
    let amenity = s.trim();
    let valid = !amenity.is_empty()
        && amenity
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '_' | ';' | ':' | '-'));

    if valid {
        Ok(amenity.to_string())
    } else {
        Err(NearbyError::ConfigInvalid {
            key: "entertainment_amenity".to_string(),
            reason: format!("Invalid amenity: {:?}. Use an OSM tag value such as cinema", s),
        })
    }
}

fn validate_watch_timeout(millis: u64) -> Result<u64> {
    if millis > 0 {
        Ok(millis)
    } else {
        Err(NearbyError::ConfigInvalid {
            key: "watch_timeout_ms".to_string(),
            reason: "Watch timeout must be at least one millisecond".to_string(),
        })
    }
}

/// Parse a boolean flag from string
pub fn parse_bool(s: &str) -> Result<bool> {
    match s.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(NearbyError::ConfigInvalid {
            key: "bool".to_string(),
            reason: format!("Invalid boolean: {}. Use true or false", s),
        }),
    }
}
