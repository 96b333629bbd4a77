//! Component discovery on disk.
//!
//! Walks the configured components root, turns every template file with a
//! configured extension into a raw component description and builds a
//! [`ComponentCollection`] from them. A sibling `<stem><configSuffix>` file
//! (e.g. `button.config.json`) supplies the component config.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use colored::Colorize;
use glob::Pattern;
use rayon::prelude::*;
use serde_json::{Map, Value, json};
use walkdir::WalkDir;

use crate::collections::ComponentCollection;
use crate::config::Config;
use crate::utils::MATCH_OPTIONS;

/// Result of discovering components.
#[derive(Debug)]
pub struct DiscoveryResult {
    pub components: ComponentCollection,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
    /// Config files that were unreadable or malformed.
    pub warning_count: usize,
}

pub fn discover(base_dir: &Path, config: &Config, verbose: bool) -> Result<DiscoveryResult> {
    let root = base_dir.join(&config.components_root);
    if !root.is_dir() {
        bail!("Components root does not exist: {}", root.display());
    }
    let root = root
        .canonicalize()
        .with_context(|| format!("Failed to resolve components root: {}", root.display()))?;

    let ignore_patterns: Vec<Pattern> = config
        .ignores
        .iter()
        .filter_map(|p| match Pattern::new(p) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                if verbose {
                    eprintln!(
                        "{} Invalid ignore pattern '{}': {}",
                        "warning:".bold().yellow(),
                        p,
                        e
                    );
                }
                None
            }
        })
        .collect();

    let mut skipped_count = 0;
    let mut sources: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                if verbose {
                    eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                }
                continue;
            }
        };
        let path = entry.path();
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = path.strip_prefix(&root).unwrap_or(path).to_string_lossy();
        if ignore_patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
        {
            continue;
        }

        if is_component_source(path, config) {
            sources.push(path.to_path_buf());
        }
    }

    // Config files are read in parallel; collect keeps walk order.
    let loaded: Vec<(Value, Option<String>)> = sources
        .par_iter()
        .map(|path| load_component(path, &root, &config.config_suffix))
        .collect();

    let mut warning_count = 0;
    let mut raws = Vec::with_capacity(loaded.len());
    for (raw, warning) in loaded {
        if let Some(warning) = warning {
            warning_count += 1;
            if verbose {
                eprintln!("{} {}", "warning:".bold().yellow(), warning);
            }
        }
        raws.push(raw);
    }

    let components = ComponentCollection::from_input(raws)
        .with_context(|| format!("Failed to build components from {}", root.display()))?;

    Ok(DiscoveryResult {
        components,
        skipped_count,
        warning_count,
    })
}

fn is_component_source(path: &Path, config: &Config) -> bool {
    let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if file_name.ends_with(&config.config_suffix) {
        return false;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| config.extensions.iter().any(|e| e == ext))
}

/// Path of the config file that sits next to `source`.
pub fn config_path_for(source: &Path, suffix: &str) -> Option<PathBuf> {
    let stem = source.file_stem()?.to_str()?;
    Some(source.with_file_name(format!("{}{}", stem, suffix)))
}

/// Build the raw description of one component, plus a warning when its
/// config file exists but cannot be used.
fn load_component(source: &Path, root: &Path, suffix: &str) -> (Value, Option<String>) {
    let (config, warning) = match config_path_for(source, suffix) {
        Some(config_path) if config_path.is_file() => match read_config(&config_path) {
            Ok(config) => (config, None),
            Err(e) => (Map::new(), Some(format!("{:#}", e))),
        },
        _ => (Map::new(), None),
    };

    let raw = json!({
        "src": {
            "path": source.to_string_lossy(),
            "cwd": root.to_string_lossy(),
        },
        "config": config,
    });
    (raw, warning)
}

fn read_config(path: &Path) -> Result<Map<String, Value>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let value: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    match value {
        Value::Object(config) => Ok(config),
        _ => bail!("Config file must contain a JSON object: {}", path.display()),
    }
}
