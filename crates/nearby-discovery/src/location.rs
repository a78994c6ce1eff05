use nearby_core::error::LocationError;
use nearby_core::ports::{LocationService, WatchHandle, WatchOptions};

/// Location service whose fixes are pushed in by the caller.
///
/// Backs the CLI (position from flags) and the HTTP API (position from
/// requests). At most one watch is active; starting a new one replaces it.
#[derive(Debug, Clone)]
pub struct ManualLocationService {
    supported: bool,
    active: Option<WatchHandle>,
    last_options: Option<WatchOptions>,
}

impl Default for ManualLocationService {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualLocationService {
    pub fn new() -> Self {
        Self { supported: true, active: None, last_options: None }
    }

    /// A platform without geolocation: every watch request fails
    pub fn unsupported() -> Self {
        Self { supported: false, active: None, last_options: None }
    }

    pub fn active_watch(&self) -> Option<WatchHandle> {
        self.active
    }

    /// Options passed to the most recent successful `start_watch`
    pub fn last_options(&self) -> Option<WatchOptions> {
        self.last_options
    }
}

impl LocationService for ManualLocationService {
    fn start_watch(&mut self, options: &WatchOptions) -> Result<WatchHandle, LocationError> {
        if !self.supported {
            return Err(LocationError::Unsupported);
        }

        if let Some(previous) = self.active.take() {
            tracing::debug!(%previous, "Replacing active watch");
        }

        let handle = WatchHandle::new();
        self.active = Some(handle);
        self.last_options = Some(*options);
        tracing::debug!(%handle, high_accuracy = options.high_accuracy, "Watch started");
        Ok(handle)
    }

    fn stop_watch(&mut self, handle: WatchHandle) {
        if self.active == Some(handle) {
            self.active = None;
            tracing::debug!(%handle, "Watch stopped");
        } else {
            tracing::debug!(%handle, "Ignoring stop for unknown watch");
        }
    }
}
