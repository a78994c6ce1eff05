//! Live-location session state.

use chrono::{DateTime, Utc};
use nearby_core::error::{NearbyError, Result};
use nearby_core::models::Coordinate;
use nearby_core::ports::WatchHandle;
use serde::Serialize;

/// Live-location lifecycle: `Idle -> Tracking -> Idle`.
///
/// The watch handle and the last fix only exist inside `Tracking`, so an idle
/// session can never hold a stale position.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum LocationSession {
    #[default]
    Idle,
    Tracking {
        handle: WatchHandle,
        since: DateTime<Utc>,
        last_position: Option<Coordinate>,
    },
}

impl LocationSession {
    pub fn is_tracking(&self) -> bool {
        matches!(self, LocationSession::Tracking { .. })
    }

    pub fn handle(&self) -> Option<WatchHandle> {
        match self {
            LocationSession::Tracking { handle, .. } => Some(*handle),
            LocationSession::Idle => None,
        }
    }

    pub fn last_position(&self) -> Option<Coordinate> {
        match self {
            LocationSession::Tracking { last_position, .. } => *last_position,
            LocationSession::Idle => None,
        }
    }

    /// Origin for dependent operations.
    ///
    /// Fails with `NoActiveLocation` when idle, and also while tracking
    /// before the first fix has arrived.
    pub fn require_position(&self) -> Result<Coordinate> {
        self.last_position().ok_or(NearbyError::NoActiveLocation)
    }

    /// Enter `Tracking` with a freshly issued handle
    pub fn start(&mut self, handle: WatchHandle) {
        *self = LocationSession::Tracking { handle, since: Utc::now(), last_position: None };
    }

    /// Return to `Idle`, handing back the watch to cancel
    pub fn stop(&mut self) -> Option<WatchHandle> {
        let handle = self.handle();
        *self = LocationSession::Idle;
        handle
    }

    /// Whether a callback tagged with `handle` belongs to the active watch
    pub fn is_current(&self, handle: WatchHandle) -> bool {
        self.handle() == Some(handle)
    }

    /// Store a fix. Returns `false` (and changes nothing) for a handle other
    /// than the active one.
    pub fn record_position(&mut self, handle: WatchHandle, position: Coordinate) -> bool {
        match self {
            LocationSession::Tracking { handle: active, last_position, .. } if *active == handle => {
                *last_position = Some(position);
                true
            }
            _ => false,
        }
    }
}
