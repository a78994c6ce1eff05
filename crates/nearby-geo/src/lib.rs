//! Nearby Geo - Distance math and route sketches
//!
//! Great-circle distance between coordinates, and the straight-line route
//! sketch (two-point path plus the bounds that cover it).

pub mod distance;
pub mod route;

pub use distance::{distance_meters, EARTH_RADIUS_METERS};
pub use route::{Bounds, RouteSketch};
