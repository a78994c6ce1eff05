//! Landmarks command

use crate::cli::LandmarksArgs;
use crate::output::{format_distance, OutputWriter};
use crate::output_types::{LandmarkItem, LandmarksOutput};
use anyhow::Result;
use nearby_core::config::LayeredConfig;
use nearby_geo::distance_meters;
use nearby_overlay::{EntryAction, ResultEntry};
use tabled::Tabled;

pub fn execute(args: LandmarksArgs, config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut explorer = super::explorer(config)?;

    let origin = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => {
            let origin = super::coordinate(lat, lng)?;
            super::track_at(&mut explorer, origin)?;
            Some(origin)
        }
        _ => None,
    };

    explorer.show_landmarks();

    // Panel rows follow catalog order
    let items: Vec<LandmarkItem> = explorer
        .landmarks()
        .iter()
        .zip(explorer.registry().panel().entries.iter())
        .map(|(landmark, entry)| {
            let mut entry: ResultEntry = entry.clone();
            entry.distance_meters = origin.map(|o| distance_meters(o, landmark.coordinate));
            LandmarkItem { id: landmark.id, entry, description: landmark.description.clone() }
        })
        .collect();

    if output.is_json() {
        return output.result(LandmarksOutput { origin, landmarks: items });
    }

    output.section("Landmarks");

    #[derive(Tabled)]
    struct LandmarkRow {
        #[tabled(rename = "ID")]
        id: u32,
        #[tabled(rename = "Name")]
        name: String,
        #[tabled(rename = "Local name")]
        local_name: String,
        #[tabled(rename = "Kind")]
        kind: String,
        #[tabled(rename = "Distance")]
        distance: String,
        #[tabled(rename = "Directions")]
        directions: String,
    }

    let rows: Vec<LandmarkRow> = items
        .iter()
        .map(|item| LandmarkRow {
            id: item.id,
            name: item.entry.title.clone(),
            local_name: item.entry.local_name.clone().unwrap_or_default(),
            kind: item.entry.subtitle.clone(),
            distance: item.entry.distance_meters.map(format_distance).unwrap_or_else(|| "-".into()),
            directions: if item.entry.offers(EntryAction::GetDirections) { "✓" } else { "✗" }
                .to_string(),
        })
        .collect();

    output.table(rows);
    if origin.is_none() {
        output.info("Pass --lat and --lng to see distances and get directions");
    }
    Ok(())
}
