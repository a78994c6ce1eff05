//! Port definitions for the platform collaborators.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::error::{LocationError, Result};
use crate::models::{Category, Coordinate, PoiResponse};

/// Opaque identifier of a live-position watch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WatchHandle(pub Uuid);

impl WatchHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for WatchHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for WatchHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Options passed to the platform when a watch starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchOptions {
    pub high_accuracy: bool,
    /// Oldest cached fix the platform may hand back
    pub maximum_age: Duration,
    /// How long the platform may take to produce a fix
    pub timeout: Duration,
}

impl Default for WatchOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            maximum_age: Duration::from_millis(10_000),
            timeout: Duration::from_millis(5_000),
        }
    }
}

/// Port for the platform location service.
///
/// Starting a watch only registers it. Fixes and failures are delivered back
/// through the owner's `on_position` / `on_location_error` callbacks, tagged
/// with the handle returned here.
pub trait LocationService {
    /// Begin watching the device position
    fn start_watch(&mut self, options: &WatchOptions) -> std::result::Result<WatchHandle, LocationError>;

    /// Cancel a watch. Unknown handles are ignored.
    fn stop_watch(&mut self, handle: WatchHandle);
}

/// Bounded-radius search handed to a POI source
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoiQuery {
    pub category: Category,
    /// Value of the `amenity` tag to search for
    pub amenity: String,
    pub origin: Coordinate,
    pub radius_meters: f64,
}

/// Port for the remote POI data source
#[async_trait]
pub trait PoiSource: Send + Sync {
    /// Run a query and return the raw response body
    async fn fetch(&self, query: &PoiQuery) -> Result<PoiResponse>;

    /// Short name used in logs
    fn name(&self) -> &str;
}

#[async_trait]
impl<T> PoiSource for Arc<T>
where
    T: PoiSource + ?Sized,
{
    async fn fetch(&self, query: &PoiQuery) -> Result<PoiResponse> {
        (**self).fetch(query).await
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_watch_options() {
        let options = WatchOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.maximum_age, Duration::from_secs(10));
        assert_eq!(options.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_watch_handles_are_unique() {
        assert_ne!(WatchHandle::new(), WatchHandle::new());
    }
}
