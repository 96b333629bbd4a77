use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".corralrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_components_root")]
    pub components_root: String,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_config_suffix")]
    pub config_suffix: String,
    #[serde(default)]
    pub ignores: Vec<String>,
}

fn default_components_root() -> String {
    "./components".to_string()
}

fn default_extensions() -> Vec<String> {
    ["hbs", "html", "njk", "twig"].map(String::from).to_vec()
}

fn default_config_suffix() -> String {
    ".config.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            components_root: default_components_root(),
            extensions: default_extensions(),
            config_suffix: default_config_suffix(),
            ignores: Vec::new(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob in `ignores` is invalid, if an extension
    /// is empty or starts with a dot, or if `configSuffix` is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for extension in &self.extensions {
            if extension.is_empty() || extension.starts_with('.') {
                bail!(
                    "Invalid entry in 'extensions': \"{}\" (use the bare extension, e.g. \"hbs\")",
                    extension
                );
            }
        }

        if self.config_suffix.is_empty() {
            bail!("'configSuffix' must not be empty");
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
