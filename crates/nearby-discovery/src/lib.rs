//! Nearby Discovery - Location session, nearby search and the explorer
//!
//! This crate implements the user intents: following the device position,
//! searching for places around it, listing landmarks and sketching routes,
//! all rendered through one overlay registry.

pub mod explorer;
pub mod location;
pub mod models;
pub mod pipeline;
pub mod session;

pub use explorer::Explorer;
pub use location::ManualLocationService;
pub use models::{PendingQuery, Presentation, TrackingState};
pub use pipeline::{annotate, PoiQueryPipeline};
pub use session::LocationSession;
