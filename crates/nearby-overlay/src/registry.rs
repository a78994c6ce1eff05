//! Overlay registry: named layers plus the results panel, kept in step.
//!
//! Every operation that touches a results layer updates the panel in the same
//! call, so the list and the map never disagree. The `user` layer has no panel
//! rows and is only cleared explicitly.

use nearby_core::models::{AnnotatedPoi, Category, Coordinate, LandmarkCatalog};
use nearby_geo::{Bounds, RouteSketch};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::drawable::{Drawable, LineStyle, Marker, MarkerIcon, Polyline};
use crate::layer::Layer;
use crate::panel::{PanelStatus, ResultEntry, ResultsPanel};
use crate::viewport::{Viewport, FOCUS_ZOOM, TRACKING_ZOOM};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayRegistry {
    layers: BTreeMap<Layer, Vec<Drawable>>,
    panel: ResultsPanel,
    viewport: Viewport,
}

impl Default for OverlayRegistry {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl OverlayRegistry {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            layers: Layer::ALL.into_iter().map(|layer| (layer, Vec::new())).collect(),
            panel: ResultsPanel::default(),
            viewport,
        }
    }

    pub fn layer(&self, layer: Layer) -> &[Drawable] {
        self.layers.get(&layer).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn layers(&self) -> impl Iterator<Item = (Layer, &[Drawable])> {
        self.layers.iter().map(|(layer, drawables)| (*layer, drawables.as_slice()))
    }

    pub fn panel(&self) -> &ResultsPanel {
        &self.panel
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total number of drawables across all layers
    pub fn drawable_count(&self) -> usize {
        self.layers.values().map(Vec::len).sum()
    }

    /// Append a drawable to a layer. No deduplication.
    ///
    /// Map only: result rows go through [`show_results`](Self::show_results)
    /// or [`show_landmarks`](Self::show_landmarks) so the panel follows.
    pub fn draw(&mut self, layer: Layer, drawable: impl Into<Drawable>) {
        self.layers.entry(layer).or_default().push(drawable.into());
    }

    /// Empty every layer except `user`, and the panel. Idempotent.
    pub fn clear_results(&mut self) {
        for layer in Layer::RESULTS {
            if let Some(drawables) = self.layers.get_mut(&layer) {
                drawables.clear();
            }
        }
        self.panel = ResultsPanel::default();
    }

    /// Empty only the `user` layer
    pub fn clear_user(&mut self) {
        if let Some(drawables) = self.layers.get_mut(&Layer::User) {
            drawables.clear();
        }
    }

    /// Replace all results with one marker and one row per POI.
    ///
    /// An empty slice leaves the panel in the `Empty` state rather than `Idle`.
    pub fn show_results(&mut self, category: Category, pois: &[AnnotatedPoi]) {
        self.clear_results();

        let layer = Layer::for_category(category);
        for poi in pois {
            let marker = Marker::new(poi.coordinate(), icon_for(category))
                .with_title(poi.name())
                .with_subtitle(poi.label())
                .with_directions(true);
            self.draw(layer, marker);
            self.panel.entries.push(ResultEntry::for_poi(poi));
        }

        self.panel.status = if pois.is_empty() { PanelStatus::Empty } else { PanelStatus::Ready };
        tracing::debug!(%category, count = pois.len(), "Rendered search results");
    }

    /// Drop whatever is shown for `category` and flag the failure.
    ///
    /// Rows and markers of other categories are left alone.
    pub fn show_failure(&mut self, category: Category, message: impl Into<String>) {
        let layer = Layer::for_category(category);
        if let Some(drawables) = self.layers.get_mut(&layer) {
            drawables.clear();
        }
        self.panel.entries.retain(|entry| entry.layer != layer);
        self.panel.status = PanelStatus::Failed { category, message: message.into() };
    }

    /// Replace all results with the landmark catalog
    pub fn show_landmarks(&mut self, catalog: &LandmarkCatalog, directions: bool) {
        self.clear_results();

        for landmark in catalog.iter() {
            let marker = Marker::new(landmark.coordinate, MarkerIcon::Landmark)
                .with_title(&landmark.name)
                .with_subtitle(&landmark.local_name)
                .with_directions(directions);
            self.draw(Layer::Landmarks, marker);
            self.panel.entries.push(ResultEntry::for_landmark(landmark, directions));
        }

        self.panel.status =
            if catalog.is_empty() { PanelStatus::Empty } else { PanelStatus::Ready };
    }

    /// Redraw the single user marker and follow it
    pub fn place_user(&mut self, position: Coordinate) {
        self.clear_user();
        self.draw(Layer::User, user_marker(position));
        self.viewport = Viewport::Center { center: position, zoom: TRACKING_ZOOM };
    }

    /// Draw a route sketch on the user layer and fit the view to it
    pub fn show_route(&mut self, route: &RouteSketch) {
        self.clear_user();
        self.draw(Layer::User, user_marker(route.origin));
        self.draw(Layer::User, Marker::new(route.destination, MarkerIcon::Destination));
        self.draw(
            Layer::User,
            Polyline { points: route.path().to_vec(), style: LineStyle::route() },
        );
        self.fit(route.bounds);
    }

    /// "Show on map"
    pub fn focus(&mut self, coordinate: Coordinate) {
        self.viewport = Viewport::Center { center: coordinate, zoom: FOCUS_ZOOM };
    }

    pub fn fit(&mut self, bounds: Bounds) {
        self.viewport = Viewport::Fit { bounds };
    }

    /// Every marker on a results layer has exactly one panel row, and the
    /// other way round
    pub fn is_reconciled(&self) -> bool {
        Layer::RESULTS.iter().all(|layer| {
            let markers =
                self.layer(*layer).iter().filter(|d| d.as_marker().is_some()).count();
            let rows = self.panel.entries.iter().filter(|e| e.layer == *layer).count();
            markers == rows
        })
    }
}

fn icon_for(category: Category) -> MarkerIcon {
    match category {
        Category::Restaurant => MarkerIcon::Restaurant,
        Category::Entertainment => MarkerIcon::Entertainment,
        Category::Landmark => MarkerIcon::Landmark,
    }
}

fn user_marker(position: Coordinate) -> Marker {
    Marker::new(position, MarkerIcon::User).with_title("You are here")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::panel::EntryAction;
    use nearby_core::models::{PoiRecord, PoiTags};

    fn coord(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng).unwrap()
    }

    fn poi(id: i64, name: &str, category: Category, distance: f64) -> AnnotatedPoi {
        AnnotatedPoi {
            record: PoiRecord {
                id,
                coordinate: coord(41.31 + id as f64 * 0.001, 69.28),
                tags: PoiTags { name: name.to_string(), ..PoiTags::default() },
            },
            distance_meters: distance,
            category,
        }
    }

    #[test]
    fn test_new_registry_is_empty() {
        let registry = OverlayRegistry::default();
        assert_eq!(registry.drawable_count(), 0);
        assert_eq!(registry.panel().status, PanelStatus::Idle);
        assert_eq!(registry.layers().count(), 4);
        assert_eq!(registry.viewport(), Viewport::default());
    }

    #[test]
    fn test_draw_appends_without_dedupe() {
        let mut registry = OverlayRegistry::default();
        let marker = Marker::new(coord(41.3, 69.2), MarkerIcon::Landmark);

        registry.draw(Layer::Landmarks, marker.clone());
        registry.draw(Layer::Landmarks, marker);

        assert_eq!(registry.layer(Layer::Landmarks).len(), 2);
    }

    #[test]
    fn test_clear_results_keeps_user_layer() {
        let mut registry = OverlayRegistry::default();
        registry.place_user(coord(41.3, 69.2));
        registry.show_results(Category::Restaurant, &[poi(1, "A", Category::Restaurant, 10.0)]);

        registry.clear_results();

        assert_eq!(registry.layer(Layer::User).len(), 1);
        assert!(registry.layer(Layer::Restaurants).is_empty());
        assert!(registry.panel().is_empty());
        assert_eq!(registry.panel().status, PanelStatus::Idle);
    }

    #[test]
    fn test_clear_results_is_idempotent() {
        let mut registry = OverlayRegistry::default();
        registry.place_user(coord(41.3, 69.2));
        registry.show_landmarks(&LandmarkCatalog::tashkent(), false);

        registry.clear_results();
        let after_first = registry.clone();
        registry.clear_results();

        assert_eq!(registry, after_first);

        let mut empty = OverlayRegistry::default();
        empty.clear_results();
        assert_eq!(empty, OverlayRegistry::default());
    }

    #[test]
    fn test_clear_user_only_touches_user() {
        let mut registry = OverlayRegistry::default();
        registry.show_landmarks(&LandmarkCatalog::tashkent(), true);
        registry.place_user(coord(41.3, 69.2));

        registry.clear_user();

        assert!(registry.layer(Layer::User).is_empty());
        assert_eq!(registry.layer(Layer::Landmarks).len(), 3);
        assert_eq!(registry.panel().len(), 3);
    }

    #[test]
    fn test_show_results_replaces_previous() {
        let mut registry = OverlayRegistry::default();
        registry.show_landmarks(&LandmarkCatalog::tashkent(), false);

        registry.show_results(
            Category::Entertainment,
            &[
                poi(1, "Kinoteatr", Category::Entertainment, 120.0),
                poi(2, "Magic Cinema", Category::Entertainment, 640.0),
            ],
        );

        assert!(registry.layer(Layer::Landmarks).is_empty());
        assert_eq!(registry.layer(Layer::Entertainment).len(), 2);
        assert_eq!(registry.panel().status, PanelStatus::Ready);
        let titles: Vec<&str> = registry.panel().entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Kinoteatr", "Magic Cinema"]);
        assert!(registry.is_reconciled());
    }

    #[test]
    fn test_empty_results_state() {
        let mut registry = OverlayRegistry::default();
        registry.show_results(Category::Restaurant, &[poi(1, "A", Category::Restaurant, 1.0)]);

        registry.show_results(Category::Restaurant, &[]);

        assert_eq!(registry.drawable_count(), 0);
        assert_eq!(registry.panel().status, PanelStatus::Empty);
        assert_eq!(registry.panel().message().as_deref(), Some("No places found nearby"));
        assert!(registry.is_reconciled());
    }

    #[test]
    fn test_failure_only_drops_failed_category() {
        let mut registry = OverlayRegistry::default();
        registry.show_results(Category::Restaurant, &[poi(1, "A", Category::Restaurant, 1.0)]);
        registry.draw(Layer::Entertainment, Marker::new(coord(41.3, 69.2), MarkerIcon::Entertainment));
        registry.panel.entries.push(ResultEntry::for_poi(&poi(
            2,
            "B",
            Category::Entertainment,
            2.0,
        )));

        registry.show_failure(Category::Restaurant, "timeout");

        assert!(registry.layer(Layer::Restaurants).is_empty());
        assert_eq!(registry.layer(Layer::Entertainment).len(), 1);
        assert_eq!(registry.panel().len(), 1);
        assert!(matches!(
            registry.panel().status,
            PanelStatus::Failed { category: Category::Restaurant, .. }
        ));
        assert_eq!(
            registry.panel().message().as_deref(),
            Some("Failed to load restaurant places. Please try again later.")
        );
        assert!(registry.is_reconciled());
    }

    #[test]
    fn test_landmark_directions_follow_flag() {
        let mut registry = OverlayRegistry::default();

        registry.show_landmarks(&LandmarkCatalog::tashkent(), false);
        assert!(registry.panel().entries.iter().all(|e| !e.offers(EntryAction::GetDirections)));
        assert!(registry
            .layer(Layer::Landmarks)
            .iter()
            .all(|d| !d.as_marker().map(|m| m.directions).unwrap_or(true)));

        registry.show_landmarks(&LandmarkCatalog::tashkent(), true);
        assert_eq!(registry.panel().len(), 3);
        assert!(registry.panel().entries.iter().all(|e| e.offers(EntryAction::GetDirections)));
        assert!(registry.is_reconciled());
    }

    #[test]
    fn test_place_user_keeps_single_marker() {
        let mut registry = OverlayRegistry::default();

        registry.place_user(coord(41.30, 69.24));
        registry.place_user(coord(41.31, 69.25));

        let user = registry.layer(Layer::User);
        assert_eq!(user.len(), 1);
        let marker = user[0].as_marker().unwrap();
        assert_eq!(marker.coordinate, coord(41.31, 69.25));
        assert_eq!(marker.icon.z_index_offset(), 1000);
        assert_eq!(
            registry.viewport(),
            Viewport::Center { center: coord(41.31, 69.25), zoom: TRACKING_ZOOM }
        );
    }

    #[test]
    fn test_show_route_draws_markers_and_dashed_line() {
        let mut registry = OverlayRegistry::default();
        registry.show_landmarks(&LandmarkCatalog::tashkent(), true);
        let route = RouteSketch::between(coord(41.3111, 69.2797), coord(41.3246, 69.2387));

        registry.show_route(&route);

        let user = registry.layer(Layer::User);
        assert_eq!(user.len(), 3);
        assert_eq!(user[0].as_marker().map(|m| m.icon), Some(MarkerIcon::User));
        assert_eq!(user[1].as_marker().map(|m| m.icon), Some(MarkerIcon::Destination));
        match &user[2] {
            Drawable::Polyline(line) => {
                assert_eq!(line.points.len(), 2);
                assert_eq!(line.style.dash_array.as_deref(), Some("5, 5"));
            }
            other => panic!("Expected polyline, got {:?}", other),
        }
        assert_eq!(registry.viewport(), Viewport::Fit { bounds: route.bounds });
        // Results are untouched by routing
        assert_eq!(registry.layer(Layer::Landmarks).len(), 3);
    }

    #[test]
    fn test_focus() {
        let mut registry = OverlayRegistry::default();
        registry.focus(coord(41.3158, 69.2818));
        assert_eq!(
            registry.viewport(),
            Viewport::Center { center: coord(41.3158, 69.2818), zoom: FOCUS_ZOOM }
        );
    }
}
