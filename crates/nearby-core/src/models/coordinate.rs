//! WGS 84 coordinate value type.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NearbyError, Result};

/// Default map center: central Tashkent
pub const TASHKENT_CENTER: Coordinate = Coordinate::new_unchecked(41.2995, 69.2401);

/// A latitude/longitude pair in degrees.
///
/// Always in range: the only way to build one is [`Coordinate::new`], and
/// deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    lat: f64,
    lng: f64,
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = NearbyError;

    fn try_from(raw: RawCoordinate) -> Result<Self> {
        Coordinate::new(raw.lat, raw.lng)
    }
}

impl Coordinate {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(NearbyError::InvalidCoordinate {
                lat,
                lng,
                reason: "coordinates must be finite numbers".to_string(),
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(NearbyError::InvalidCoordinate {
                lat,
                lng,
                reason: "latitude must be within [-90, 90]".to_string(),
            });
        }
        if !(-180.0..=180.0).contains(&lng) {
            return Err(NearbyError::InvalidCoordinate {
                lat,
                lng,
                reason: "longitude must be within [-180, 180]".to_string(),
            });
        }
        Ok(Self { lat, lng })
    }

    /// For literals that are known to be in range
    pub(crate) const fn new_unchecked(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// `[lng, lat]` order, as GeoJSON positions expect
    pub fn to_lng_lat(&self) -> [f64; 2] {
        [self.lng, self.lat]
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_coordinate() {
        let c = Coordinate::new(41.2995, 69.2401).unwrap();
        assert_eq!(c.lat(), 41.2995);
        assert_eq!(c.lng(), 69.2401);
        assert_eq!(c.to_lng_lat(), [69.2401, 41.2995]);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
    }

    #[test]
    fn test_out_of_range_rejected() {
        assert!(Coordinate::new(90.5, 0.0).is_err());
        assert!(Coordinate::new(0.0, -180.1).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Coordinate = serde_json::from_str(r#"{"lat": 41.3, "lng": 69.2}"#).unwrap();
        assert_eq!(ok.lat(), 41.3);

        let bad = serde_json::from_str::<Coordinate>(r#"{"lat": 141.3, "lng": 69.2}"#);
        assert!(bad.is_err());
    }
}
