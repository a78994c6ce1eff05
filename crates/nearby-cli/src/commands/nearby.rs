//! Restaurant and entertainment search commands

use crate::cli::{EntertainmentArgs, RestaurantArgs};
use crate::output::{format_distance, OutputWriter};
use crate::output_types::NearbyOutput;
use crate::source::CliSource;
use anyhow::Result;
use nearby_core::config::LayeredConfig;
use nearby_core::models::{Category, Coordinate, CuisineFilter, FilterCriteria};
use nearby_core::NearbyError;
use nearby_discovery::PoiQueryPipeline;
use std::path::PathBuf;
use tabled::Tabled;

pub async fn restaurants(
    args: RestaurantArgs,
    fixture: Option<PathBuf>,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let criteria = FilterCriteria::new(args.cuisine.parse::<CuisineFilter>()?, args.halal);
    let origin = args.position.coordinate()?;
    search(Category::Restaurant, origin, criteria, args.geojson, fixture, config, output).await
}

pub async fn entertainment(
    args: EntertainmentArgs,
    fixture: Option<PathBuf>,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let origin = args.position.coordinate()?;
    search(
        Category::Entertainment,
        origin,
        FilterCriteria::default(),
        args.geojson,
        fixture,
        config,
        output,
    )
    .await
}

async fn search(
    category: Category,
    origin: Coordinate,
    criteria: FilterCriteria,
    geojson: bool,
    fixture: Option<PathBuf>,
    config: &LayeredConfig,
    output: &OutputWriter,
) -> Result<()> {
    let settings = config.search_settings();
    let radius_meters = settings.radius_meters;
    let pipeline = PoiQueryPipeline::new(CliSource::select(fixture, &settings)?, settings);

    let mut explorer = super::explorer(config)?;
    super::track_at(&mut explorer, origin)?;

    if let Err(e) = explorer.find_nearby(&pipeline, category, criteria).await {
        if matches!(e, NearbyError::QueryFailed { .. }) {
            if let Some(message) = explorer.registry().panel().message() {
                output.error(message);
            }
        }
        return Err(e.into());
    }

    let registry = explorer.registry();
    if geojson {
        return output.result(registry.to_feature_collection());
    }

    let panel = registry.panel();
    if output.is_json() {
        return output.result(NearbyOutput {
            category,
            origin,
            radius_meters,
            status: panel.status.clone(),
            message: panel.message(),
            results: panel.entries.clone(),
        });
    }

    output.section(format!("Nearby {} places", category));
    output.kv("Origin", origin);
    output.kv("Radius", format_distance(radius_meters));

    if let Some(message) = panel.message() {
        output.info(message);
        return Ok(());
    }

    #[derive(Tabled)]
    struct PlaceRow {
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Type")]
        label: String,
        #[tabled(rename = "Distance")]
        distance: String,
        #[tabled(rename = "Street")]
        street: String,
    }

    let rows: Vec<PlaceRow> = panel
        .entries
        .iter()
        .map(|entry| PlaceRow {
            name: entry.title.clone(),
            label: entry.subtitle.clone(),
            distance: entry.distance_meters.map(format_distance).unwrap_or_default(),
            street: entry.street.clone().unwrap_or_default(),
        })
        .collect();

    output.table(rows);
    output.success(format!("Found {} places", panel.len()));
    Ok(())
}
