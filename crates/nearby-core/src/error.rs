//! Error types for Nearby

use std::path::PathBuf;
use thiserror::Error;

use crate::models::Category;

#[derive(Debug, Error)]
pub enum NearbyError {
    // Session errors
    #[error("No active location. Turn on location tracking first")]
    NoActiveLocation,

    #[error("Location error: {0}")]
    Location(#[from] LocationError),

    // Query errors
    #[error("Failed to load {category} places: {reason}")]
    QueryFailed { category: Category, reason: String },

    #[error("POI source request failed: {0}")]
    Source(String),

    // Validation errors
    #[error("Invalid coordinate ({lat}, {lng}): {reason}")]
    InvalidCoordinate { lat: f64, lng: f64, reason: String },

    #[error("Landmark not found: {id}")]
    LandmarkNotFound { id: u32 },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl NearbyError {
    /// Build a `QueryFailed` for a category from any displayable cause
    pub fn query_failed(category: Category, reason: impl ToString) -> Self {
        Self::QueryFailed { category, reason: reason.to_string() }
    }
}

/// Failures reported by the platform location service.
///
/// None of these stop an active watch; the session keeps tracking until the
/// user toggles it off.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("geolocation is not supported by this platform")]
    Unsupported,
}

pub type Result<T> = std::result::Result<T, NearbyError>;
