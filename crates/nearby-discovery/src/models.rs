use nearby_core::models::{Category, Coordinate, FilterCriteria};
use serde::Serialize;

/// A nearby search captured at the moment it was issued.
///
/// Holds everything the network phase needs, so the search can run without
/// borrowing the explorer. `generation` orders it against other searches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PendingQuery {
    pub generation: u64,
    pub category: Category,
    pub origin: Coordinate,
    pub criteria: FilterCriteria,
}

/// Result of the tracking toggle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackingState {
    Idle,
    Tracking,
}

impl TrackingState {
    /// Caption of the tracking toggle
    pub fn label(&self) -> &'static str {
        match self {
            TrackingState::Idle => "My Location",
            TrackingState::Tracking => "Tracking Active",
        }
    }
}

/// What happened to a finished search when it was handed back for display
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Presentation {
    /// Results were drawn
    Shown { category: Category, count: usize },
    /// The search succeeded with nothing to show
    Empty { category: Category },
    /// The category's layer was cleared and the panel shows the failure
    Failed { category: Category, reason: String },
    /// A newer search was issued meanwhile; nothing was drawn
    Superseded { generation: u64, latest: u64 },
}

impl Presentation {
    pub fn is_rendered(&self) -> bool {
        !matches!(self, Presentation::Superseded { .. })
    }
}
