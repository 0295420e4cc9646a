//! Settings read from `osim.toml`.
//!
//! Every key is optional. A missing default file means default settings;
//! command line flags are applied on top by the caller.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::{fs, io};

use filesystem::PrefixMatch;
use serde::Deserialize;
use shell::SessionOptions;

/// File looked up in the working directory when `--config` is not given.
pub const DEFAULT_PATH: &str = "osim.toml";

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scheduler: SchedulerConfig,
    pub filesystem: FilesystemConfig,
    pub shell: ShellConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SchedulerConfig {
    /// Round robin quantum used when `cpuscd` is not given one.
    pub default_quantum: NonZeroUsize,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        SchedulerConfig {
            default_quantum: SessionOptions::default().default_quantum,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilesystemConfig {
    pub prefix_match: PrefixMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    /// Print a greeting before the first prompt.
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig { banner: true }
    }
}

impl Config {
    /// Loads `path`, or [`DEFAULT_PATH`] if it exists when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        let path = match path {
            Some(path) => path,
            None => {
                let path = Path::new(DEFAULT_PATH);
                if !path.exists() {
                    log::debug!("no {DEFAULT_PATH}, using defaults");
                    return Ok(Config::default());
                }
                path
            }
        };

        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("loaded {}", path.display());
        Ok(config)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            prefix_match: self.filesystem.prefix_match,
            default_quantum: self.scheduler.default_quantum,
        }
    }
}
