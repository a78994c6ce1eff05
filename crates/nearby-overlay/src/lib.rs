//! Nearby Overlay - Map layers, results panel, and viewport
//!
//! The overlay registry is the single source of truth for what is drawn: four
//! named layers, the results panel listed next to the map, and the view the
//! map should show. Renderers read it (or its GeoJSON export) and never keep
//! state of their own.

pub mod drawable;
pub mod export;
pub mod layer;
pub mod panel;
pub mod registry;
pub mod viewport;

pub use drawable::{Drawable, LineStyle, Marker, MarkerIcon, Polyline};
pub use layer::Layer;
pub use panel::{EntryAction, PanelStatus, ResultEntry, ResultsPanel};
pub use registry::OverlayRegistry;
pub use viewport::Viewport;
