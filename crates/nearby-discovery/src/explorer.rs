//! Application context tying the session, the searches and the overlay
//! together.

use nearby_core::error::{LocationError, NearbyError, Result};
use nearby_core::models::{AnnotatedPoi, Category, Coordinate, FilterCriteria, LandmarkCatalog};
use nearby_core::ports::{LocationService, PoiSource, WatchHandle, WatchOptions};
use nearby_geo::RouteSketch;
use nearby_overlay::OverlayRegistry;

use crate::models::{PendingQuery, Presentation, TrackingState};
use crate::pipeline::PoiQueryPipeline;
use crate::session::LocationSession;

/// Owns everything a user intent can touch.
///
/// Constructed once and passed by reference; there is no global state.
pub struct Explorer<L>
where
    L: LocationService,
{
    location: L,
    session: LocationSession,
    registry: OverlayRegistry,
    landmarks: LandmarkCatalog,
    watch_options: WatchOptions,
    /// Generation of the most recently prepared search
    generation: u64,
}

impl<L> Explorer<L>
where
    L: LocationService,
{
    pub fn new(location: L, landmarks: LandmarkCatalog) -> Self {
        Self {
            location,
            session: LocationSession::Idle,
            registry: OverlayRegistry::default(),
            landmarks,
            watch_options: WatchOptions::default(),
            generation: 0,
        }
    }

    pub fn with_watch_options(mut self, options: WatchOptions) -> Self {
        self.watch_options = options;
        self
    }

    pub fn session(&self) -> &LocationSession {
        &self.session
    }

    pub fn registry(&self) -> &OverlayRegistry {
        &self.registry
    }

    pub fn landmarks(&self) -> &LandmarkCatalog {
        &self.landmarks
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn tracking_state(&self) -> TrackingState {
        if self.session.is_tracking() {
            TrackingState::Tracking
        } else {
            TrackingState::Idle
        }
    }

    /// Start or stop following the device position.
    ///
    /// Stopping cancels the watch, forgets the last fix and empties the `user`
    /// layer. If the platform refuses the watch the session stays idle.
    pub fn toggle_tracking(&mut self) -> Result<TrackingState> {
        if let Some(handle) = self.session.stop() {
            self.location.stop_watch(handle);
            self.registry.clear_user();
            tracing::info!(%handle, "Location tracking stopped");
            return Ok(TrackingState::Idle);
        }

        let handle = self.location.start_watch(&self.watch_options).map_err(|e| {
            tracing::warn!(error = %e, "Could not start location tracking");
            NearbyError::Location(e)
        })?;
        self.session.start(handle);
        tracing::info!(%handle, "Location tracking started");
        Ok(TrackingState::Tracking)
    }

    /// Position callback. Returns whether the fix was applied; fixes from
    /// a watch other than the active one are dropped.
    pub fn on_position(&mut self, handle: WatchHandle, position: Coordinate) -> bool {
        if !self.session.record_position(handle, position) {
            tracing::debug!(%handle, "Ignoring position from inactive watch");
            return false;
        }

        self.registry.place_user(position);
        tracing::debug!(%position, "Position updated");
        true
    }

    /// Error callback. An error from the active watch is handed back to the
    /// caller and the session keeps tracking.
    pub fn on_location_error(&mut self, handle: WatchHandle, error: LocationError) -> Result<()> {
        if !self.session.is_current(handle) {
            tracing::debug!(%handle, error = %error, "Ignoring error from inactive watch");
            return Ok(());
        }

        tracing::warn!(error = %error, "Location error");
        Err(NearbyError::Location(error))
    }

    /// Capture a nearby search at the current position.
    ///
    /// Fails with `NoActiveLocation` before anything is sent when there is no
    /// fix. Each successful call supersedes every earlier pending search.
    pub fn prepare_query(
        &mut self,
        category: Category,
        criteria: FilterCriteria,
    ) -> Result<PendingQuery> {
        if !category.is_searchable() {
            return Err(NearbyError::ConfigInvalid {
                key: "category".to_string(),
                reason: format!("'{}' cannot be searched", category),
            });
        }

        let origin = self.session.require_position()?;
        self.generation += 1;

        Ok(PendingQuery { generation: self.generation, category, origin, criteria })
    }

    /// Draw the outcome of a search, unless a newer one has been issued.
    pub fn present(
        &mut self,
        pending: &PendingQuery,
        outcome: &Result<Vec<AnnotatedPoi>>,
    ) -> Presentation {
        if pending.generation != self.generation {
            tracing::debug!(
                generation = pending.generation,
                latest = self.generation,
                "Discarding superseded search results"
            );
            return Presentation::Superseded {
                generation: pending.generation,
                latest: self.generation,
            };
        }

        match outcome {
            Ok(pois) => {
                self.registry.show_results(pending.category, pois);
                if pois.is_empty() {
                    Presentation::Empty { category: pending.category }
                } else {
                    Presentation::Shown { category: pending.category, count: pois.len() }
                }
            }
            Err(e) => {
                self.registry.show_failure(pending.category, e.to_string());
                Presentation::Failed { category: pending.category, reason: e.to_string() }
            }
        }
    }

    /// Search, then draw: `prepare_query`, `run` and `present` in one go.
    ///
    /// Callers that share the explorer across tasks should use the three
    /// steps directly and not hold a lock across `run`.
    pub async fn find_nearby<S>(
        &mut self,
        pipeline: &PoiQueryPipeline<S>,
        category: Category,
        criteria: FilterCriteria,
    ) -> Result<Vec<AnnotatedPoi>>
    where
        S: PoiSource,
    {
        let pending = self.prepare_query(category, criteria)?;
        let outcome = pipeline.run(&pending).await;
        self.present(&pending, &outcome);
        outcome
    }

    /// List every landmark; directions are offered only while tracking
    pub fn show_landmarks(&mut self) -> usize {
        let directions = self.session.is_tracking();
        self.registry.show_landmarks(&self.landmarks, directions);
        self.landmarks.len()
    }

    /// Sketch a straight route from the current position
    pub fn show_route(&mut self, destination: Coordinate) -> Result<RouteSketch> {
        let origin = self.session.require_position()?;
        let route = RouteSketch::between(origin, destination);
        self.registry.show_route(&route);

        tracing::info!(
            %destination,
            distance_meters = route.distance_meters,
            "Route sketched"
        );
        Ok(route)
    }

    pub fn show_route_to_landmark(&mut self, id: u32) -> Result<RouteSketch> {
        let destination = self.landmarks.get(id)?.coordinate;
        self.show_route(destination)
    }

    /// "Show on map"
    pub fn focus(&mut self, coordinate: Coordinate) {
        self.registry.focus(coordinate);
    }

    pub fn clear_results(&mut self) {
        self.registry.clear_results();
    }
}
