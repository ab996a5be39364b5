//! Config file loading and settings resolution.
//!
//! Every setting comes from the first of: command line flag, config file,
//! built-in default. The file is TOML and every key is optional:
//!
//! ```toml
//! algorithm = "quicksort"
//! speed = "fast"
//! delay_secs = 0.05
//! size = 60
//! max_value = 150
//! seed = 42
//!
//! [palette]
//! pivot = "#32CD32"
//! fresh = "#00008B"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sortvis_core::{Algorithm, DataSpec, SortError, Speed, delay_from_secs};
use sortvis_tui::{Palette, SessionSettings, TuiError};
use thiserror::Error;
use tracing::debug;

use crate::cli::Cli;

/// Configuration file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Directory under the platform config dir.
pub const CONFIG_DIR: &str = "sortvis";

/// Environment variable for a custom config file path.
pub const SORTVIS_CONFIG_ENV: &str = "SORTVIS_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error(transparent)]
    Value(#[from] SortError),
}

/// Where the config path came from. Only the default location may be
/// missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    Env,
    Default,
}

/// Contents of the config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub algorithm: Option<Algorithm>,
    pub speed: Option<Speed>,
    pub delay_secs: Option<f64>,
    pub size: Option<usize>,
    pub max_value: Option<u32>,
    pub seed: Option<u64>,
    /// Role key (or `fresh`) to `#RRGGBB`.
    pub palette: BTreeMap<String, String>,
}

impl FileConfig {
    pub fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Finds the config file path.
///
/// Checks in order:
/// 1. the `--config` flag
/// 2. the `SORTVIS_CONFIG` environment variable
/// 3. `<config dir>/sortvis/config.toml`
pub fn find_config(flag: Option<&Path>) -> Option<(PathBuf, ConfigSource)> {
    if let Some(path) = flag {
        return Some((path.to_path_buf(), ConfigSource::Flag));
    }

    if let Ok(val) = std::env::var(SORTVIS_CONFIG_ENV)
        && !val.is_empty()
    {
        let path = PathBuf::from(val);
        debug!(path = %path.display(), "Using SORTVIS_CONFIG");
        return Some((path, ConfigSource::Env));
    }

    dirs::config_dir().map(|dir| (dir.join(CONFIG_DIR).join(CONFIG_FILE), ConfigSource::Default))
}

/// Loads the config file, or an empty config when the default file does
/// not exist.
pub fn load_config(flag: Option<&Path>) -> Result<FileConfig, ConfigError> {
    let Some((path, source)) = find_config(flag) else {
        return Ok(FileConfig::default());
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            debug!(path = %path.display(), "Loaded config file");
            FileConfig::parse(&content, &path)
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound && source == ConfigSource::Default => {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(FileConfig::default())
        }
        Err(source) => Err(ConfigError::Read { path, source }),
    }
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub algorithm: Algorithm,
    pub speed: Speed,
    /// Fixed delay replacing the speed preset.
    pub delay: Option<Duration>,
    pub data: DataSpec,
    pub seed: Option<u64>,
    pub palette: BTreeMap<String, String>,
}

impl Settings {
    /// Merges command line flags over the file config over defaults.
    ///
    /// A `--speed` flag also overrides a `delay_secs` from the file; a
    /// `--delay` flag overrides both.
    pub fn resolve(cli: &Cli, file: FileConfig) -> Result<Self, ConfigError> {
        let delay = match (cli.delay, cli.speed) {
            (Some(secs), _) => Some(delay_from_secs(secs)?),
            (None, Some(_)) => None,
            (None, None) => file.delay_secs.map(delay_from_secs).transpose()?,
        };

        let defaults = DataSpec::default();
        Ok(Self {
            algorithm: cli.algorithm.or(file.algorithm).unwrap_or_default(),
            speed: cli.speed.or(file.speed).unwrap_or_default(),
            delay,
            data: DataSpec::new(
                cli.size.or(file.size).unwrap_or(defaults.len),
                cli.max_value.or(file.max_value).unwrap_or(defaults.max_value),
            ),
            seed: cli.seed.or(file.seed),
            palette: file.palette,
        })
    }

    /// The pause after each frame.
    pub fn step_delay(&self) -> Duration {
        self.delay.unwrap_or_else(|| self.speed.delay())
    }

    /// The default palette with the configured overrides applied.
    pub fn palette(&self) -> Result<Palette, TuiError> {
        Palette::default().with_overrides(
            self.palette
                .iter()
                .map(|(key, hex)| (key.as_str(), hex.as_str())),
        )
    }

    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            algorithm: self.algorithm,
            speed: self.speed,
            delay: self.delay,
            data: self.data,
            seed: self.seed,
        }
    }
}
