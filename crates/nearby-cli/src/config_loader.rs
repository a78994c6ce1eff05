//! Configuration loading utilities for CLI commands

use anyhow::{Context, Result};
use nearby_core::config::{CliConfigOverrides, LayeredConfig};
use nearby_core::models::LandmarkCatalog;
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when `--config` is absent
const DEFAULT_CONFIG_FILE: &str = "nearby.toml";

/// Load layered configuration: defaults, file, environment, then CLI flags.
///
/// An explicit `--config` file must exist; the implicit `./nearby.toml` is
/// optional.
pub fn load_config(explicit: Option<&Path>, overrides: CliConfigOverrides) -> Result<LayeredConfig> {
    let mut config = LayeredConfig::with_defaults();

    let file = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => Some(PathBuf::from(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
    };

    if let Some(path) = file {
        config = config
            .load_from_file(&path)
            .with_context(|| format!("Failed to load configuration file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "Loaded configuration file");
    }

    let mut config = config.load_from_env();
    config.update_from_cli(overrides);
    Ok(config)
}

/// Landmark catalog named by the configuration, or the built-in one
pub fn load_landmarks(config: &LayeredConfig) -> Result<LandmarkCatalog> {
    match &config.landmarks_file.value {
        Some(path) => LandmarkCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load landmarks from {}", path.display())),
        None => Ok(LandmarkCatalog::tashkent()),
    }
}
