//! Straight-line route sketch.
//!
//! Not a navigable route: no road graph, just the segment between the user and
//! a destination plus the region a map view must cover to show both ends.

use geo::{coord, Rect};
use nearby_core::models::Coordinate;
use serde::{Deserialize, Serialize};

use crate::distance::distance_meters;

/// Axis-aligned region in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// `[[south, west], [north, east]]`, the corner order map libraries take
    pub fn corners(&self) -> [[f64; 2]; 2] {
        [[self.south, self.west], [self.north, self.east]]
    }
}

impl From<Rect<f64>> for Bounds {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            south: rect.min().y,
            west: rect.min().x,
            north: rect.max().y,
            east: rect.max().x,
        }
    }
}

/// Two-point path from an origin to a destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSketch {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub bounds: Bounds,
    /// Straight-line length
    pub distance_meters: f64,
}

impl RouteSketch {
    pub fn between(origin: Coordinate, destination: Coordinate) -> Self {
        let rect = Rect::new(
            coord! { x: origin.lng(), y: origin.lat() },
            coord! { x: destination.lng(), y: destination.lat() },
        );

        Self {
            origin,
            destination,
            bounds: Bounds::from(rect),
            distance_meters: distance_meters(origin, destination),
        }
    }

    /// The path as drawn: origin first, destination last
    pub fn path(&self) -> [Coordinate; 2] {
        [self.origin, self.destination]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    #[test]
    fn test_route_bounds_cover_both_ends() {
        let origin = coord(41.3246, 69.2387);
        let destination = coord(41.3123, 69.2787);

        let route = RouteSketch::between(origin, destination);

        assert_eq!(route.bounds.south, 41.3123);
        assert_eq!(route.bounds.north, 41.3246);
        assert_eq!(route.bounds.west, 69.2387);
        assert_eq!(route.bounds.east, 69.2787);
        assert_eq!(route.bounds.corners(), [[41.3123, 69.2387], [41.3246, 69.2787]]);
    }

    #[test]
    fn test_route_path_and_length() {
        let origin = coord(41.3123, 69.2787);
        let destination = coord(41.3158, 69.2818);

        let route = RouteSketch::between(origin, destination);

        assert_eq!(route.path(), [origin, destination]);
        assert!((route.distance_meters - distance_meters(origin, destination)).abs() < 1e-9);
    }

    #[test]
    fn test_degenerate_route() {
        let here = coord(41.2995, 69.2401);
        let route = RouteSketch::between(here, here);

        assert_eq!(route.distance_meters, 0.0);
        assert_eq!(route.bounds.south, route.bounds.north);
        assert_eq!(route.bounds.corners(), [[41.2995, 69.2401], [41.2995, 69.2401]]);
    }
}
