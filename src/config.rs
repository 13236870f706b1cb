use std::fmt::{self, Display};
use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::axis::Strategy;
use crate::gen::GeneratorConfig;
use crate::solver::Solver;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Config {
    pub description: String,
    #[serde(default)]
    pub strategy: Strategy,
    pub parallel_cases: bool,
    pub parallel_axes: bool,
    /// Rayon worker threads, 0 for rayon's default.
    #[serde(default)]
    pub threads: usize,
    #[serde(default)]
    pub report_time: bool,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl Config {
    pub fn solver(&self) -> Solver {
        Solver::new(self.strategy, self.parallel_axes)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            description: "Built-in defaults".to_string(),
            strategy: Strategy::Incremental,
            parallel_cases: false,
            parallel_axes: false,
            threads: 0,
            report_time: false,
            generator: GeneratorConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConfigFile {
    pub local: Config,
    pub large: Config,
    pub test: Config,
}

#[derive(Debug)]
pub enum ConfigError {
    Read(io::Error),
    Parse(toml::de::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(e) => write!(f, "failed to read config: {}", e),
            ConfigError::Parse(e) => write!(f, "failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::Parse)
    }

    pub fn profile(self, name: &str) -> Config {
        match name {
            "local" => self.local,
            "large" => self.large,
            "test" => self.test,
            _ => {
                warn!(profile = name, "unknown profile, using 'local'");
                self.local
            }
        }
    }
}

/// Reads `profile` from the file at `path`, or the built-in defaults if the
/// file does not exist.
pub fn load(path: &Path, profile: &str) -> Result<Config, ConfigError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(ConfigFile::parse(&content)?.profile(profile)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "config file not found, using built-in defaults");
            Ok(Config::default())
        }
        Err(e) => Err(ConfigError::Read(e)),
    }
}
