//! Cuisines command

use crate::output::OutputWriter;
use crate::output_types::CuisineItem;
use anyhow::Result;
use nearby_core::models::CUISINES;
use tabled::Tabled;

pub fn execute(output: &OutputWriter) -> Result<()> {
    let items: Vec<CuisineItem> = CUISINES
        .iter()
        .map(|(key, name)| CuisineItem { key: key.to_string(), name: name.to_string() })
        .collect();

    if output.is_json() {
        return output.result(items);
    }

    output.section("Cuisines");

    #[derive(Tabled)]
    struct CuisineRow {
        #[tabled(rename = "Key")]
        key: String,
        #[tabled(rename = "Name")]
        name: String,
    }

    output.table(
        items.into_iter().map(|item| CuisineRow { key: item.key, name: item.name }).collect(),
    );
    output.info("Use --cuisine <key> with 'nearby restaurants'");
    Ok(())
}
