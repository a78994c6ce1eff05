//! Results panel listed next to the map.

use nearby_core::models::{AnnotatedPoi, Category, Coordinate, Landmark};
use serde::{Deserialize, Serialize};

use crate::layer::Layer;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryAction {
    ShowOnMap,
    GetDirections,
}

/// One row of the panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultEntry {
    pub layer: Layer,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_meters: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    pub coordinate: Coordinate,
    pub actions: Vec<EntryAction>,
}

impl ResultEntry {
    /// Search results always offer directions: a search needs a position
    pub fn for_poi(poi: &AnnotatedPoi) -> Self {
        Self {
            layer: Layer::for_category(poi.category),
            title: poi.name().to_string(),
            subtitle: poi.label(),
            local_name: None,
            distance_meters: Some(poi.distance_meters),
            street: poi.record.tags.street.clone(),
            coordinate: poi.coordinate(),
            actions: vec![EntryAction::ShowOnMap, EntryAction::GetDirections],
        }
    }

    pub fn for_landmark(landmark: &Landmark, directions: bool) -> Self {
        let mut actions = vec![EntryAction::ShowOnMap];
        if directions {
            actions.push(EntryAction::GetDirections);
        }

        Self {
            layer: Layer::Landmarks,
            title: landmark.name.clone(),
            subtitle: landmark.kind.to_string(),
            local_name: Some(landmark.local_name.clone()),
            distance_meters: None,
            street: None,
            coordinate: landmark.coordinate,
            actions,
        }
    }

    pub fn offers(&self, action: EntryAction) -> bool {
        self.actions.contains(&action)
    }
}

/// What the panel shows besides its rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum PanelStatus {
    /// Nothing requested yet, or explicitly cleared
    Idle,
    /// Rows are listed
    Ready,
    /// A search succeeded but found nothing
    Empty,
    /// A search for `category` failed
    Failed { category: Category, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultsPanel {
    pub status: PanelStatus,
    pub entries: Vec<ResultEntry>,
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self { status: PanelStatus::Idle, entries: Vec::new() }
    }
}

impl ResultsPanel {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Status line shown when there are no rows
    pub fn message(&self) -> Option<String> {
        match &self.status {
            PanelStatus::Idle | PanelStatus::Ready => None,
            PanelStatus::Empty => Some("No places found nearby".to_string()),
            PanelStatus::Failed { category, .. } => {
                Some(format!("Failed to load {} places. Please try again later.", category))
            }
        }
    }
}
