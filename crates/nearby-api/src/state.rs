use nearby_core::ports::PoiSource;
use nearby_discovery::{Explorer, ManualLocationService, PoiQueryPipeline};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared server state: one explorer for every client.
///
/// Handlers lock the explorer only to prepare a search and to present its
/// outcome; the network call runs unlocked.
pub struct AppState {
    pub explorer: Mutex<Explorer<ManualLocationService>>,
    pub pipeline: PoiQueryPipeline<Arc<dyn PoiSource>>,
}

impl AppState {
    pub fn new(
        explorer: Explorer<ManualLocationService>,
        pipeline: PoiQueryPipeline<Arc<dyn PoiSource>>,
    ) -> Self {
        Self { explorer: Mutex::new(explorer), pipeline }
    }
}
