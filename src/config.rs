use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".gleanrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Locale identifiers registered in the catalog before scanning.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    /// Translation marker function name, spliced verbatim into the
    /// extraction pattern.
    #[serde(default = "default_marker")]
    pub marker: String,
    /// Path of the message catalog file, relative to the working directory.
    #[serde(default = "default_messages")]
    pub messages: String,
}

fn default_languages() -> Vec<String> {
    vec!["en".to_string(), "zh".to_string()]
}

fn default_marker() -> String {
    "_".to_string()
}

fn default_messages() -> String {
    "messages.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            languages: default_languages(),
            marker: default_marker(),
            messages: default_messages(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any field is empty; an empty locale or marker
    /// would silently produce a degenerate catalog or match every call.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must list at least one locale");
        }
        for locale in &self.languages {
            if locale.is_empty() {
                bail!("'languages' must not contain empty locale identifiers");
            }
        }
        if self.marker.is_empty() {
            bail!("'marker' must not be empty");
        }
        if self.messages.is_empty() {
            bail!("'messages' must not be empty");
        }

        Ok(())
    }
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
