use async_trait::async_trait;
use nearby_core::error::{NearbyError, Result};
use nearby_core::models::PoiResponse;
use nearby_core::ports::{PoiQuery, PoiSource};
use std::path::{Path, PathBuf};

/// POI source backed by a saved response body.
///
/// Every query returns the same file contents; the pipeline does the
/// filtering. Used for offline runs and tests.
pub struct FilePoiSource {
    path: PathBuf,
}

impl FilePoiSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PoiSource for FilePoiSource {
    async fn fetch(&self, query: &PoiQuery) -> Result<PoiResponse> {
        tracing::debug!(path = %self.path.display(), amenity = %query.amenity, "Reading POI fixture");

        let content = tokio::fs::read(&self.path).await.map_err(|e| {
            NearbyError::Source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        serde_json::from_slice(&content).map_err(|e| {
            NearbyError::Source(format!("Invalid POI response in {}: {}", self.path.display(), e))
        })
    }

    fn name(&self) -> &str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nearby_core::models::{Category, Coordinate};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn query() -> PoiQuery {
        PoiQuery {
            category: Category::Restaurant,
            amenity: "restaurant".to_string(),
            origin: Coordinate::new(41.3111, 69.2797).unwrap(),
            radius_meters: 1000.0,
        }
    }

    #[tokio::test]
    async fn test_reads_fixture() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"elements": [{{"type": "node", "id": 7, "lat": 41.31, "lon": 69.28, "tags": {{"name": "Caravan"}}}}]}}"#
        )
        .unwrap();

        let source = FilePoiSource::new(file.path());
        let response = source.fetch(&query()).await.unwrap();

        assert_eq!(response.elements.len(), 1);
        assert_eq!(response.elements[0].id, 7);
    }

    #[tokio::test]
    async fn test_missing_file_is_source_error() {
        let source = FilePoiSource::new("/nonexistent/pois.json");
        let result = source.fetch(&query()).await;
        assert!(matches!(result, Err(NearbyError::Source(_))));
    }

    #[tokio::test]
    async fn test_malformed_file_is_source_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let source = FilePoiSource::new(file.path());
        assert!(matches!(source.fetch(&query()).await, Err(NearbyError::Source(_))));
    }
}
