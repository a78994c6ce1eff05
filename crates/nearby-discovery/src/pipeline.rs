use nearby_core::config::{parse_amenity, SearchSettings};
use nearby_core::error::{NearbyError, Result};
use nearby_core::models::{AnnotatedPoi, Category, Coordinate, FilterCriteria, PoiRecord};
use nearby_core::ports::{PoiQuery, PoiSource};
use nearby_geo::distance_meters;

use crate::models::PendingQuery;

/// POI query pipeline: remote query, tag filters, distance annotation
pub struct PoiQueryPipeline<S>
where
    S: PoiSource,
{
    source: S,
    settings: SearchSettings,
}

impl<S> PoiQueryPipeline<S>
where
    S: PoiSource,
{
    /// Create a new query pipeline
    pub fn new(source: S, settings: SearchSettings) -> Self {
        Self { source, settings }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn settings(&self) -> &SearchSettings {
        &self.settings
    }

    /// `amenity` tag value searched for a category
    pub fn amenity_for(&self, category: Category) -> Result<&str> {
        match category {
            Category::Restaurant => Ok("restaurant"),
            Category::Entertainment => Ok(self.settings.entertainment_amenity.as_str()),
            Category::Landmark => Err(NearbyError::ConfigInvalid {
                key: "category".to_string(),
                reason: "landmarks come from the built-in catalog, not a search".to_string(),
            }),
        }
    }

    /// Build the source query for a search issued at `origin`.
    ///
    /// Fails with `ConfigInvalid` unless the amenity is a plain OSM tag value.
    pub fn query_for(&self, category: Category, origin: Coordinate) -> Result<PoiQuery> {
        Ok(PoiQuery {
            category,
            amenity: parse_amenity(self.amenity_for(category)?)?,
            origin,
            radius_meters: self.settings.radius_meters,
        })
    }

    /// Run a captured search.
    ///
    /// Any source failure becomes `QueryFailed` for the search's category.
    pub async fn run(&self, pending: &PendingQuery) -> Result<Vec<AnnotatedPoi>> {
        let query = self.query_for(pending.category, pending.origin)?;

        tracing::info!(
            source = self.source.name(),
            category = %query.category,
            amenity = %query.amenity,
            radius = query.radius_meters,
            generation = pending.generation,
            "Searching nearby places"
        );

        let response = self.source.fetch(&query).await.map_err(|e| {
            tracing::warn!(category = %query.category, error = %e, "Nearby search failed");
            NearbyError::query_failed(query.category, e)
        })?;

        let received = response.elements.len();
        let pois = annotate(
            pending.origin,
            pending.category,
            &pending.criteria,
            response.into_records(),
            self.settings.sort_by_distance,
        );

        tracing::info!(
            category = %pending.category,
            received,
            kept = pois.len(),
            "Nearby search finished"
        );

        Ok(pois)
    }
}

/// Filter records and attach their distance from `origin`.
///
/// Source order is kept unless `sort_by_distance` is set; the sort is stable.
pub fn annotate(
    origin: Coordinate,
    category: Category,
    criteria: &FilterCriteria,
    records: Vec<PoiRecord>,
    sort_by_distance: bool,
) -> Vec<AnnotatedPoi> {
    let mut pois: Vec<AnnotatedPoi> = records
        .into_iter()
        .filter(|record| criteria.accepts(category, &record.tags))
        .map(|record| AnnotatedPoi {
            distance_meters: distance_meters(origin, record.coordinate),
            record,
            category,
        })
        .collect();

    if sort_by_distance {
        pois.sort_by(|a, b| a.distance_meters.total_cmp(&b.distance_meters));
    }

    pois
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use nearby_core::models::{CuisineFilter, PoiResponse, PoiTags};
    use proptest::prelude::*;

    struct NoSource;

    #[async_trait]
    impl PoiSource for NoSource {
        async fn fetch(&self, _query: &PoiQuery) -> Result<PoiResponse> {
            Ok(PoiResponse::default())
        }

        fn name(&self) -> &str {
            "none"
        }
    }

    fn record(id: i64, lat: f64, lng: f64, cuisine: Option<&str>, diet: Option<&str>) -> PoiRecord {
        PoiRecord {
            id,
            coordinate: Coordinate::new(lat, lng).unwrap(),
            tags: PoiTags {
                name: format!("Place {}", id),
                cuisine: cuisine.map(String::from),
                diet: diet.map(String::from),
                ..PoiTags::default()
            },
        }
    }

    fn origin() -> Coordinate {
        Coordinate::new(41.3111, 69.2797).unwrap()
    }

    fn records() -> Vec<PoiRecord> {
        vec![
            record(1, 41.3150, 69.2770, Some("plov"), Some("halal")),
            record(2, 41.3135, 69.2820, Some("lagman"), None),
            record(3, 41.3090, 69.2750, Some("plov"), None),
        ]
    }

    #[test]
    fn test_annotate_keeps_source_order() {
        let pois = annotate(origin(), Category::Restaurant, &FilterCriteria::default(), records(), false);

        let ids: Vec<i64> = pois.iter().map(|p| p.record.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert!((pois[0].distance_meters - 488.788).abs() < 0.5);
        assert!((pois[1].distance_meters - 328.816).abs() < 0.5);
        assert!((pois[2].distance_meters - 456.762).abs() < 0.5);
    }

    #[test]
    fn test_annotate_sorted_by_distance() {
        let pois = annotate(origin(), Category::Restaurant, &FilterCriteria::default(), records(), true);

        let ids: Vec<i64> = pois.iter().map(|p| p.record.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_cuisine_and_halal_filters() {
        let plov = FilterCriteria::new(CuisineFilter::Only("plov".to_string()), false);
        let pois = annotate(origin(), Category::Restaurant, &plov, records(), false);
        assert_eq!(pois.len(), 2);

        let halal_plov = FilterCriteria::new(CuisineFilter::Only("plov".to_string()), true);
        let pois = annotate(origin(), Category::Restaurant, &halal_plov, records(), false);
        assert_eq!(pois.len(), 1);
        assert_eq!(pois[0].record.id, 1);
    }

    #[test]
    fn test_entertainment_ignores_restaurant_filters() {
        let criteria = FilterCriteria::new(CuisineFilter::Only("plov".to_string()), true);
        let pois = annotate(origin(), Category::Entertainment, &criteria, records(), false);

        assert_eq!(pois.len(), 3);
        assert!(pois.iter().all(|p| p.category == Category::Entertainment));
    }

    #[test]
    fn test_empty_records() {
        let pois = annotate(origin(), Category::Restaurant, &FilterCriteria::default(), Vec::new(), true);
        assert!(pois.is_empty());
    }

    #[test]
    fn test_query_rejects_amenity_outside_tag_value() {
        let settings = SearchSettings {
            entertainment_amenity: r#"cinema"](around:99999999,0,0);way["x"="y"#.to_string(),
            ..SearchSettings::default()
        };
        let pipeline = PoiQueryPipeline::new(NoSource, settings);

        let result = pipeline.query_for(Category::Entertainment, origin());
        assert!(matches!(result, Err(NearbyError::ConfigInvalid { .. })));

        let query = pipeline.query_for(Category::Restaurant, origin()).unwrap();
        assert_eq!(query.amenity, "restaurant");
        assert_eq!(query.radius_meters, 1000.0);
    }

    proptest! {
        #[test]
        fn prop_sorted_results_are_nondecreasing(
            points in proptest::collection::vec((41.0f64..42.0, 69.0f64..70.0), 0..20)
        ) {
            let records: Vec<PoiRecord> = points
                .iter()
                .enumerate()
                .map(|(i, (lat, lng))| record(i as i64, *lat, *lng, None, None))
                .collect();

            let pois = annotate(origin(), Category::Entertainment, &FilterCriteria::default(), records, true);

            prop_assert_eq!(pois.len(), points.len());
            prop_assert!(pois.windows(2).all(|w| w[0].distance_meters <= w[1].distance_meters));
        }
    }
}
