//! Config command

use crate::output::OutputWriter;
use crate::output_types::{ConfigEntry, InspectConfigOutput};
use anyhow::Result;
use nearby_core::config::LayeredConfig;
use tabled::Tabled;

pub fn execute(config: &LayeredConfig, output: &OutputWriter) -> Result<()> {
    let mut entries: Vec<ConfigEntry> = config
        .to_inspection_map()
        .into_iter()
        .map(|(key, (value, source))| ConfigEntry { key, value, source })
        .collect();

    // Sort by key for consistent output
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    if output.is_json() {
        return output.result(InspectConfigOutput { entries });
    }

    output.section("Configuration Values");

    #[derive(Tabled)]
    struct ConfigRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Value")]
        value: String,
        #[tabled(rename = "Source")]
        source: String,
    }

    let rows: Vec<ConfigRow> = entries
        .into_iter()
        .map(|entry| ConfigRow {
            key: entry.key,
            value: entry.value,
            source: format!("{:?}", entry.source),
        })
        .collect();

    output.table(rows);

    output.section("Configuration Precedence");
    output.info("CLI arguments > Environment variables > Config file > Defaults");
    Ok(())
}
