//! Scenario models and loaders for the Kinematics Calculator.

use std::fs::File;
use std::path::Path;

use kinematics_update::DistanceModel;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Inputs for a single interval update. Missing fields fall back to the reference scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    pub velocity_kmh: f64,
    pub acceleration_m_s2: f64,
    pub duration_s: f64,
    pub initial_distance_km: f64,
    pub remaining_fuel_kg: f64,
    pub burn_rate_kg_s: f64,
    pub distance_model: DistanceModel,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            velocity_kmh: 10_000.0,
            acceleration_m_s2: 3.0,
            duration_s: 3_600.0,
            initial_distance_km: 0.0,
            remaining_fuel_kg: 5_000.0,
            burn_rate_kg_s: 0.5,
            distance_model: DistanceModel::Linear,
        }
    }
}

/// Errors that can occur while loading scenario files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load a scenario from a `.toml` file, or from YAML for any other extension.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}
