//! GeoJSON export of the overlay, for renderers and the HTTP API.

use geojson::{Feature, FeatureCollection, Geometry, Value};
use serde_json::{Map, Value as JsonValue};

use crate::drawable::{Drawable, Marker, Polyline};
use crate::layer::Layer;
use crate::registry::OverlayRegistry;

impl OverlayRegistry {
    /// Every drawable as a feature, layer by layer in draw order.
    ///
    /// Each feature carries its `layer` and styling in `properties`.
    pub fn to_feature_collection(&self) -> FeatureCollection {
        let features = self
            .layers()
            .flat_map(|(layer, drawables)| drawables.iter().map(move |d| to_feature(layer, d)))
            .collect();

        FeatureCollection { features, bbox: None, foreign_members: None }
    }
}

fn to_feature(layer: Layer, drawable: &Drawable) -> Feature {
    let (geometry, mut properties) = match drawable {
        Drawable::Marker(marker) => marker_parts(marker),
        Drawable::Polyline(line) => polyline_parts(line),
    };
    properties.insert("layer".to_string(), JsonValue::from(layer.name()));

    Feature {
        geometry: Some(geometry),
        properties: Some(properties),
        id: None,
        bbox: None,
        foreign_members: None,
    }
}

fn marker_parts(marker: &Marker) -> (Geometry, Map<String, JsonValue>) {
    let geometry = Geometry::new(Value::Point(marker.coordinate.to_lng_lat().to_vec()));

    let mut properties = Map::new();
    properties.insert("kind".to_string(), JsonValue::from("marker"));
    properties.insert("icon".to_string(), JsonValue::from(marker.icon.glyph()));
    properties.insert("color".to_string(), JsonValue::from(marker.icon.color()));
    properties.insert("z_index_offset".to_string(), JsonValue::from(marker.icon.z_index_offset()));
    properties.insert("directions".to_string(), JsonValue::from(marker.directions));
    if let Some(title) = &marker.title {
        properties.insert("title".to_string(), JsonValue::from(title.clone()));
    }
    if let Some(subtitle) = &marker.subtitle {
        properties.insert("subtitle".to_string(), JsonValue::from(subtitle.clone()));
    }

    (geometry, properties)
}

fn polyline_parts(line: &Polyline) -> (Geometry, Map<String, JsonValue>) {
    let positions = line.points.iter().map(|c| c.to_lng_lat().to_vec()).collect();
    let geometry = Geometry::new(Value::LineString(positions));

    let mut properties = Map::new();
    properties.insert("kind".to_string(), JsonValue::from("polyline"));
    properties.insert("color".to_string(), JsonValue::from(line.style.color.clone()));
    properties.insert("weight".to_string(), JsonValue::from(line.style.weight));
    if let Some(dash) = &line.style.dash_array {
        properties.insert("dash_array".to_string(), JsonValue::from(dash.clone()));
    }

    (geometry, properties)
}
