use nearby_core::models::Coordinate;
use serde::{Deserialize, Serialize};

/// Marker styles, one per kind of thing on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Restaurant,
    Entertainment,
    Landmark,
    User,
    Destination,
}

impl MarkerIcon {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerIcon::Restaurant => "#f97316",
            MarkerIcon::Entertainment => "#a855f7",
            MarkerIcon::Landmark => "#22c55e",
            MarkerIcon::User => "#3b82f6",
            MarkerIcon::Destination => "#ef4444",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            MarkerIcon::Restaurant => "fa-utensils",
            MarkerIcon::Entertainment => "fa-music",
            MarkerIcon::Landmark => "fa-landmark",
            MarkerIcon::User => "fa-user",
            MarkerIcon::Destination => "fa-flag",
        }
    }

    /// Stacking offset; the user marker stays above everything else
    pub fn z_index_offset(&self) -> i32 {
        match self {
            MarkerIcon::User => 1000,
            _ => 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub coordinate: Coordinate,
    pub icon: MarkerIcon,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    /// Popup offers a "get directions" action
    #[serde(default)]
    pub directions: bool,
}

impl Marker {
    pub fn new(coordinate: Coordinate, icon: MarkerIcon) -> Self {
        Self { coordinate, icon, title: None, subtitle: None, directions: false }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_directions(mut self, directions: bool) -> Self {
        self.directions = directions;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub color: String,
    pub weight: u32,
    /// SVG dash pattern, `None` for a solid line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_array: Option<String>,
}

impl LineStyle {
    /// Dashed blue line used for route sketches
    pub fn route() -> Self {
        Self { color: "#3b82f6".to_string(), weight: 4, dash_array: Some("5, 5".to_string()) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub points: Vec<Coordinate>,
    pub style: LineStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Drawable {
    Marker(Marker),
    Polyline(Polyline),
}

impl Drawable {
    pub fn as_marker(&self) -> Option<&Marker> {
        match self {
            Drawable::Marker(marker) => Some(marker),
            Drawable::Polyline(_) => None,
        }
    }
}

impl From<Marker> for Drawable {
    fn from(marker: Marker) -> Self {
        Drawable::Marker(marker)
    }
}

impl From<Polyline> for Drawable {
    fn from(polyline: Polyline) -> Self {
        Drawable::Polyline(polyline)
    }
}
