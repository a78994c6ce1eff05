//! POI records as delivered by the external source, and their annotated form.
//!
//! The source speaks loosely typed JSON (`{"elements": [...]}` with free-form
//! string tags). [`PoiResponse::into_records`] is the parse boundary: anything
//! past it is a [`PoiRecord`] with a valid coordinate and a name.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{cuisine_display_name, Category, Coordinate};

/// Raw response body of the POI source
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PoiResponse {
    #[serde(default)]
    pub elements: Vec<PoiElement>,
}

/// One raw element of the response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoiElement {
    #[serde(rename = "type", default)]
    pub element_type: Option<String>,
    pub id: i64,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lon: Option<f64>,
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl PoiResponse {
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Convert to typed records, keeping the source order.
    ///
    /// Elements without a `name` tag or without a usable coordinate are dropped.
    pub fn into_records(self) -> Vec<PoiRecord> {
        self.elements.into_iter().filter_map(PoiElement::into_record).collect()
    }
}

impl PoiElement {
    pub fn into_record(self) -> Option<PoiRecord> {
        let id = self.id;
        let (Some(lat), Some(lon)) = (self.lat, self.lon) else {
            tracing::debug!(id, "Dropping element without coordinates");
            return None;
        };

        let coordinate = match Coordinate::new(lat, lon) {
            Ok(c) => c,
            Err(e) => {
                tracing::debug!(id, error = %e, "Dropping element with invalid coordinates");
                return None;
            }
        };

        let Some(tags) = PoiTags::from_raw(self.tags) else {
            tracing::debug!(id, "Dropping element without a name tag");
            return None;
        };

        Some(PoiRecord { id, coordinate, tags })
    }
}

/// Typed tag set. `name` is required, the rest are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoiTags {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cuisine: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amenity: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub other: BTreeMap<String, String>,
}

impl PoiTags {
    /// Lift a raw tag map. Returns `None` when `name` is missing or empty;
    /// any other value, whitespace included, counts as a name.
    pub fn from_raw(mut raw: BTreeMap<String, String>) -> Option<Self> {
        let name = raw.remove("name").filter(|n| !n.is_empty())?;
        Some(Self {
            name,
            cuisine: raw.remove("cuisine"),
            diet: raw.remove("diet"),
            street: raw.remove("addr:street"),
            amenity: raw.remove("amenity"),
            other: raw,
        })
    }
}

/// A named place with a valid position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoiRecord {
    pub id: i64,
    pub coordinate: Coordinate,
    pub tags: PoiTags,
}

/// A record with its distance from the query origin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedPoi {
    #[serde(flatten)]
    pub record: PoiRecord,
    pub distance_meters: f64,
    pub category: Category,
}

impl AnnotatedPoi {
    pub fn name(&self) -> &str {
        &self.record.tags.name
    }

    pub fn coordinate(&self) -> Coordinate {
        self.record.coordinate
    }

    /// Subtitle shown under the name: the cuisine for restaurants, the
    /// amenity for venues
    pub fn label(&self) -> String {
        let tags = &self.record.tags;
        let specific = match self.category {
            Category::Restaurant => tags
                .cuisine
                .as_deref()
                .map(|c| cuisine_display_name(c).unwrap_or(c).to_string()),
            Category::Entertainment => tags.amenity.clone(),
            Category::Landmark => None,
        };
        specific.unwrap_or_else(|| self.category.fallback_label().to_string())
    }

    /// Whole meters, as displayed
    pub fn rounded_distance(&self) -> u64 {
        self.distance_meters.round() as u64
    }
}
