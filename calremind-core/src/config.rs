//! Global calremind configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{CalremindError, CalremindResult};
use crate::store::Store;

static DEFAULT_DATA_FILE: &str = "~/.calremind/appointments.json";
static DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Global configuration at ~/.config/calremind/config.toml
///
/// Every key can be overridden from the environment with a `CALREMIND_`
/// prefix, using `__` for nesting (e.g. `CALREMIND_SERVER__PORT=9000`).
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub server: ServerSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            data_file: default_data_file(),
            server: ServerSettings::default(),
        }
    }
}

impl Settings {
    pub fn config_path() -> CalremindResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalremindError::Config("Could not determine config directory".into()))?
            .join("calremind");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the global config, writing a commented-out default on first run.
    pub fn load() -> CalremindResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    /// Load settings from `path` (if it exists) layered under the environment.
    pub fn load_from(path: &Path) -> CalremindResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(
                Environment::with_prefix("CALREMIND")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| CalremindError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalremindError::Config(e.to_string()))
    }

    /// The data file path with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        let full_path_str = shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn store(&self) -> Store {
        Store::new(self.data_path())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> CalremindResult<()> {
        let contents = format!(
            "\
# calremind configuration

# Where appointments are stored:
# data_file = \"{}\"

# HTTP API (calremind-server):
# [server]
# host = \"{}\"
# port = {}
",
            DEFAULT_DATA_FILE, DEFAULT_HOST, DEFAULT_PORT
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalremindError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalremindError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
