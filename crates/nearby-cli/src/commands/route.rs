//! Route command

use crate::cli::RouteArgs;
use crate::output::{format_distance, OutputWriter};
use crate::output_types::RouteOutput;
use anyhow::{bail, Result};
use nearby_core::config::LayeredConfig;

pub fn execute(args: RouteArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let origin = args.position.coordinate()?;
    let mut explorer = super::explorer(config)?;
    super::track_at(&mut explorer, origin)?;

    let (route, destination_name) = match (args.landmark, args.to_lat, args.to_lng) {
        (Some(id), _, _) => {
            let route = explorer.show_route_to_landmark(id)?;
            let name = explorer.landmarks().get(id)?.name.clone();
            (route, Some(name))
        }
        (None, Some(lat), Some(lng)) => {
            (explorer.show_route(super::coordinate(lat, lng)?)?, None)
        }
        _ => bail!("Give a destination with --landmark or --to-lat/--to-lng"),
    };

    if route.distance_meters == 0.0 {
        output.warning("The destination is the current position");
    }

    if args.geojson {
        return output.result(explorer.registry().to_feature_collection());
    }

    if output.is_json() {
        return output.result(RouteOutput {
            origin: route.origin,
            destination: route.destination,
            destination_name,
            distance_meters: route.distance_meters,
            bounds: route.bounds,
            fit_bounds: route.bounds.corners(),
        });
    }

    output.section("Route");
    output.kv("From", route.origin);
    match destination_name {
        Some(name) => output.kv("To", format!("{} ({})", name, route.destination)),
        None => output.kv("To", route.destination),
    }
    output.kv("Straight-line distance", format_distance(route.distance_meters));
    let [[south, west], [north, east]] = route.bounds.corners();
    output.kv("Bounds", format!("{:.4}, {:.4} .. {:.4}, {:.4}", south, west, north, east));
    Ok(())
}
