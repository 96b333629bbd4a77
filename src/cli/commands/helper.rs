use std::env;

use anyhow::{Context, Result};

use super::super::args::{CommonArgs, PathArgs};
use crate::collections::ComponentCollection;
use crate::config::load_config;
use crate::discovery::{DiscoveryResult, discover};

/// Load config from the working directory, apply CLI overrides and discover
/// components.
pub fn load_components(common: &CommonArgs) -> Result<DiscoveryResult> {
    let cwd = env::current_dir().context("Failed to read the current directory")?;
    let mut config = load_config(&cwd)?.config;
    if let Some(root) = &common.root {
        config.components_root = root.to_string_lossy().into_owned();
    }
    discover(&cwd, &config, common.verbose)
}

/// Apply `--filter` then `--reject` to `components`.
pub fn narrow(components: &ComponentCollection, paths: &PathArgs) -> Result<ComponentCollection> {
    let mut narrowed = components.clone();
    if let Some(glob) = &paths.filter {
        narrowed = narrowed.filter_by_path(glob)?;
    }
    if let Some(glob) = &paths.reject {
        narrowed = narrowed.reject_by_path(glob)?;
    }
    Ok(narrowed)
}
