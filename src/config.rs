/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub building: BuildingConfig,
    pub fleet: FleetConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

#[derive(Deserialize, Clone, Debug)]
pub struct BuildingConfig {
    pub min_floor: i32,
    pub max_floor: i32,
}

#[derive(Deserialize, Clone, Debug)]
pub struct FleetConfig {
    pub n_elevators: u32,
    pub elevator_capacity: u32,
}

/**
 * Simulation pacing.
 *
 * `time_scale` multiplies every profile's per-floor delay. 1.0 runs in real
 * time, 0.0 moves elevators without sleeping.
 */
#[derive(Deserialize, Clone, Debug)]
pub struct SimulationConfig {
    #[serde(default = "default_time_scale")]
    pub time_scale: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            time_scale: default_time_scale(),
        }
    }
}

/// Largest accepted `time_scale`. The slowest profile then takes 25 minutes per floor.
pub const MAX_TIME_SCALE: f64 = 1000.0;

fn default_time_scale() -> f64 {
    1.0
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse configuration file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/***************************************/
/*             Public API              */
/***************************************/
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let config_str = fs::read_to_string(path)?;
    parse_config(&config_str)
}

pub fn parse_config(config_str: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(config_str)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.building.min_floor > self.building.max_floor {
            return Err(ConfigError::Invalid(format!(
                "min_floor {} is above max_floor {}",
                self.building.min_floor, self.building.max_floor
            )));
        }
        let time_scale = self.simulation.time_scale;
        if !(0.0..=MAX_TIME_SCALE).contains(&time_scale) {
            return Err(ConfigError::Invalid(format!(
                "time_scale must be between 0 and {}, got {}",
                MAX_TIME_SCALE, time_scale
            )));
        }
        Ok(())
    }
}

/***************************************/
/*             Unit tests              */
/***************************************/
