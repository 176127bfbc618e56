use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_CONFIG_FILE: &str = "checklist.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config file '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub shuffle_seed: Option<u64>,
    pub log_filter: String,
    pub window_title: String,
    pub highlight_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shuffle_seed: None,
            log_filter: "info".into(),
            window_title: "Checklist".into(),
            highlight_ms: 600,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    shuffle_seed: Option<u64>,
    log_filter: Option<String>,
    window_title: Option<String>,
    highlight_ms: Option<u64>,
}

/// Defaults, then `checklist.toml` in the working directory, then `APP__*` env vars.
pub fn load_settings() -> Result<Settings, ConfigError> {
    load_settings_from(Path::new(DEFAULT_CONFIG_FILE), |key| std::env::var(key).ok())
}

/// A missing file is not an error; an unreadable or malformed one is.
pub fn load_settings_from(
    path: &Path,
    env: impl Fn(&str) -> Option<String>,
) -> Result<Settings, ConfigError> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings =
                toml::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?;
            settings.apply_file(file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    settings.apply_env(env);
    Ok(settings)
}

impl Settings {
    fn apply_file(&mut self, file_cfg: FileSettings) {
        if let Some(v) = file_cfg.shuffle_seed {
            self.shuffle_seed = Some(v);
        }
        if let Some(v) = file_cfg.log_filter {
            self.log_filter = v;
        }
        if let Some(v) = file_cfg.window_title {
            self.window_title = v;
        }
        if let Some(v) = file_cfg.highlight_ms {
            self.highlight_ms = v;
        }
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) {
        if let Some(v) = env("APP__SHUFFLE_SEED") {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                self.shuffle_seed = Some(parsed);
            }
        }

        if let Some(v) = env("RUST_LOG") {
            self.log_filter = v;
        }
        if let Some(v) = env("APP__LOG_FILTER") {
            self.log_filter = v;
        }

        if let Some(v) = env("APP__WINDOW_TITLE") {
            self.window_title = v;
        }

        if let Some(v) = env("APP__HIGHLIGHT_MS") {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                self.highlight_ms = parsed;
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
