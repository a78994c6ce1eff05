//! Static landmark dataset.
//!
//! Loaded once at startup and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use super::Coordinate;
use crate::error::{NearbyError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LandmarkKind {
    Landmark,
    Market,
    Entertainment,
}

impl fmt::Display for LandmarkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LandmarkKind::Landmark => "landmark",
            LandmarkKind::Market => "market",
            LandmarkKind::Entertainment => "entertainment",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub id: u32,
    pub name: String,
    /// Name in the local language
    pub local_name: String,
    pub coordinate: Coordinate,
    pub kind: LandmarkKind,
    pub description: String,
}

/// Read-only collection of landmarks
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkCatalog {
    landmarks: Vec<Landmark>,
}

impl Default for LandmarkCatalog {
    fn default() -> Self {
        Self::tashkent()
    }
}

impl LandmarkCatalog {
    pub fn new(landmarks: Vec<Landmark>) -> Self {
        Self { landmarks }
    }

    /// Built-in dataset for central Tashkent
    pub fn tashkent() -> Self {
        let landmark = |id, name: &str, local_name: &str, lat, lng, kind, description: &str| {
            Landmark {
                id,
                name: name.to_string(),
                local_name: local_name.to_string(),
                coordinate: Coordinate::new_unchecked(lat, lng),
                kind,
                description: description.to_string(),
            }
        };

        Self::new(vec![
            landmark(
                1,
                "Amir Timur Square",
                "Amir Temur maydoni",
                41.3123,
                69.2787,
                LandmarkKind::Landmark,
                "Central square with statue of the Turco-Mongol conqueror",
            ),
            landmark(
                2,
                "Chorsu Bazaar",
                "Chorsu bozori",
                41.3246,
                69.2387,
                LandmarkKind::Market,
                "Historic dome-covered market with traditional goods",
            ),
            landmark(
                3,
                "Navoi Opera Theater",
                "Navoiy opera teatri",
                41.3158,
                69.2818,
                LandmarkKind::Entertainment,
                "Beautiful theater hosting opera and ballet performances",
            ),
        ])
    }

    /// Load a catalog from a JSON array of landmarks
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| NearbyError::FileRead { path: path.to_path_buf(), source: e })?;

        let landmarks: Vec<Landmark> = serde_json::from_str(&content).map_err(|e| {
            NearbyError::Serialization(format!(
                "Failed to parse landmarks from {}: {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!(count = landmarks.len(), path = %path.display(), "Loaded landmark catalog");
        Ok(Self::new(landmarks))
    }

    pub fn get(&self, id: u32) -> Result<&Landmark> {
        self.landmarks.iter().find(|l| l.id == id).ok_or(NearbyError::LandmarkNotFound { id })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Landmark> {
        self.landmarks.iter()
    }

    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }
}
