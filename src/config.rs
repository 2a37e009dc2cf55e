//! Configuration management and validation.
//!
//! Holds the settings a comparison runs with: which distances to project
//! onto, how many race results to collect, the pace unit and the reference
//! distance for the consistency summary. Settings are layered: built-in
//! defaults, then an optional TOML file, then command-line overrides.

use crate::app::models::{Distance, Unit};
use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_NUM_RACES, MAX_RACES, MIN_RACES,
};
use crate::error::{PaceError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Settings for projecting and comparing race results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaceConfig {
    /// Target distances in display order
    pub distances: Vec<Distance>,

    /// Number of race result slots (2 to 5)
    pub num_races: usize,

    /// Unit paces are expressed in
    pub unit: Unit,

    /// Distance the consistency summary compares at (last selected if unset)
    pub reference_distance: Option<Distance>,
}

impl Default for PaceConfig {
    fn default() -> Self {
        Self {
            distances: Distance::DEFAULT_SELECTION.to_vec(),
            num_races: DEFAULT_NUM_RACES,
            unit: Unit::Miles,
            reference_distance: None,
        }
    }
}

impl PaceConfig {
    /// Create configuration with custom target distances
    pub fn with_distances(mut self, distances: Vec<Distance>) -> Self {
        self.distances = distances;
        self
    }

    /// Create configuration with a custom number of race slots
    pub fn with_num_races(mut self, num_races: usize) -> Self {
        self.num_races = num_races;
        self
    }

    /// Create configuration with a custom pace unit
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.unit = unit;
        self
    }

    /// Compare at an explicit distance instead of the last selected one
    pub fn with_reference_distance(mut self, distance: Distance) -> Self {
        self.reference_distance = Some(distance);
        self
    }

    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<()> {
        if self.distances.is_empty() {
            return Err(PaceError::configuration(
                "At least one target distance must be selected",
            ));
        }

        let mut seen = HashSet::new();
        for distance in &self.distances {
            if !seen.insert(distance) {
                return Err(PaceError::configuration(format!(
                    "Distance {} is selected more than once",
                    distance
                )));
            }
        }

        if !(MIN_RACES..=MAX_RACES).contains(&self.num_races) {
            return Err(PaceError::configuration(format!(
                "Number of races must be between {} and {}, found {}",
                MIN_RACES, MAX_RACES, self.num_races
            )));
        }

        if let Some(reference) = self.reference_distance {
            if !self.distances.contains(&reference) {
                return Err(PaceError::ReferenceNotSelected {
                    distance: reference.name().to_string(),
                });
            }
        }

        Ok(())
    }

    /// Default configuration file location, e.g. `~/.config/race-pace/config.toml`
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| PaceError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: PaceConfig = toml::from_str(&contents).map_err(|e| PaceError::ConfigFile {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        debug!("Loaded configuration from {}: {:?}", path.display(), config);
        Ok(config)
    }

    /// Load the file layer: an explicit path must exist, the default path is
    /// used only when present
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit_path {
            info!("Loading configuration from {}", path.display());
            return Self::from_file(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => {
                info!("Loading configuration from {}", path.display());
                Self::from_file(&path)
            }
            _ => {
                debug!("No configuration file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| PaceError::configuration(e.to_string()))
    }
}
