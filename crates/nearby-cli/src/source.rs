//! POI source selected from the command line.

use anyhow::Result;
use async_trait::async_trait;
use nearby_core::config::SearchSettings;
use nearby_core::models::PoiResponse;
use nearby_core::ports::{PoiQuery, PoiSource};
use nearby_overpass::{FilePoiSource, OverpassClient};
use std::path::PathBuf;

pub enum CliSource {
    Overpass(OverpassClient),
    Fixture(FilePoiSource),
}

impl CliSource {
    /// `--fixture` wins over the configured endpoint
    pub fn select(fixture: Option<PathBuf>, settings: &SearchSettings) -> Result<Self> {
        match fixture {
            Some(path) => Ok(CliSource::Fixture(FilePoiSource::new(path))),
            None => Ok(CliSource::Overpass(OverpassClient::new(
                settings.endpoint.clone(),
                settings.request_timeout,
            )?)),
        }
    }
}

#[async_trait]
impl PoiSource for CliSource {
    async fn fetch(&self, query: &PoiQuery) -> nearby_core::Result<PoiResponse> {
        match self {
            CliSource::Overpass(client) => client.fetch(query).await,
            CliSource::Fixture(file) => file.fetch(query).await,
        }
    }

    fn name(&self) -> &str {
        match self {
            CliSource::Overpass(client) => client.name(),
            CliSource::Fixture(file) => file.name(),
        }
    }
}
