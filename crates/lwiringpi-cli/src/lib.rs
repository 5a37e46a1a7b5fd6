pub mod args;
pub mod commands;

use anyhow::{Context, Result};
use lwiringpi_core::{BackendKind, Config};
use std::path::Path;

/// Resolve the configuration: explicit file, else `$LWIRINGPI_CONFIG`, else
/// defaults. A `--backend` flag overrides whatever the file says.
pub fn load_config(path: Option<&Path>, backend: Option<BackendKind>) -> Result<Config> {
    let mut config = match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        None => Config::from_env().context("Failed to load configuration from environment")?,
    };
    if let Some(kind) = backend {
        log::debug!("--backend overrides configured {:?} with {kind:?}", config.backend);
        config.backend = kind;
    }
    Ok(config)
}
