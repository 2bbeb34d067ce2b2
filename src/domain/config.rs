use std::path::Path;

use serde::{Deserialize, Serialize};

/// Tuning for the difficulty heuristic and the normalizer.
///
/// The defaults reproduce the published heuristic exactly; a config file only
/// needs to name the values it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// Score for a course with no prerequisites.
    pub baseline_difficulty: f64,

    /// Course levels are mapped to `(level - 1) / level_divisor`.
    pub level_divisor: f64,

    /// Upper bound of the level component of the score.
    pub max_level_component: f64,

    /// Score added per prerequisite course.
    pub prerequisite_weight: f64,

    /// Upper bound of the prerequisite component of the score.
    pub max_prerequisite_component: f64,

    /// Prerequisite text longer than this many characters produces a
    /// warning.
    pub max_prerequisite_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baseline_difficulty: default_baseline_difficulty(),
            level_divisor: default_level_divisor(),
            max_level_component: default_max_level_component(),
            prerequisite_weight: default_prerequisite_weight(),
            max_prerequisite_component: default_max_prerequisite_component(),
            max_prerequisite_length: default_max_prerequisite_length(),
        }
    }
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Read)?;
        Ok(toml::from_str(&content)?)
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(ConfigError::Write)
    }
}

/// Errors that can occur while loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("Failed to read config file: {0}")]
    Read(#[source] std::io::Error),

    /// The config file is not valid TOML for this schema.
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The config file could not be written.
    #[error("Failed to write config file: {0}")]
    Write(#[source] std::io::Error),
}

const fn default_baseline_difficulty() -> f64 {
    0.1
}

const fn default_level_divisor() -> f64 {
    4.0
}

const fn default_max_level_component() -> f64 {
    0.75
}

const fn default_prerequisite_weight() -> f64 {
    0.1
}

const fn default_max_prerequisite_component() -> f64 {
    0.3
}

const fn default_max_prerequisite_length() -> usize {
    1000
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_baseline_difficulty")]
        baseline_difficulty: f64,

        #[serde(default = "default_level_divisor")]
        level_divisor: f64,

        #[serde(default = "default_max_level_component")]
        max_level_component: f64,

        #[serde(default = "default_prerequisite_weight")]
        prerequisite_weight: f64,

        #[serde(default = "default_max_prerequisite_component")]
        max_prerequisite_component: f64,

        #[serde(default = "default_max_prerequisite_length")]
        max_prerequisite_length: usize,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                baseline_difficulty,
                level_divisor,
                max_level_component,
                prerequisite_weight,
                max_prerequisite_component,
                max_prerequisite_length,
            } => Self {
                baseline_difficulty,
                level_divisor,
                max_level_component,
                prerequisite_weight,
                max_prerequisite_component,
                max_prerequisite_length,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            baseline_difficulty: config.baseline_difficulty,
            level_divisor: config.level_divisor,
            max_level_component: config.max_level_component,
            prerequisite_weight: config.prerequisite_weight,
            max_prerequisite_component: config.max_prerequisite_component,
            max_prerequisite_length: config.max_prerequisite_length,
        }
    }
}
