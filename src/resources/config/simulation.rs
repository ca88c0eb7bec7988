use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::{environment::WeatherConfig, physics::PhysicsConfig};
use crate::components::{
    ControlCommands, DrydenConfig, SpatialComponent, VehicleSource, VehicleType,
};
use crate::utils::SimError;

/// Which vehicle a run flies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleSelection {
    Preset(VehicleType),
    /// Vehicle YAML, relative paths resolved against the simulation file
    File(PathBuf),
}

impl VehicleSelection {
    pub fn source(&self, base_dir: Option<&Path>) -> VehicleSource {
        match self {
            VehicleSelection::Preset(vehicle_type) => VehicleSource::Programmed(*vehicle_type),
            VehicleSelection::File(path) => match base_dir {
                Some(dir) if path.is_relative() => VehicleSource::File(dir.join(path)),
                _ => VehicleSource::File(path.clone()),
            },
        }
    }
}

/// A headless run: one vehicle flown with constant commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Simulated time (s)
    pub duration: f64,
    /// Overrides the turbulence seed when set
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub weather: WeatherConfig,
    /// Written as a single-key map, `preset: Aerosonde` or `file: quad.yaml`
    #[serde(with = "serde_yaml::with::singleton_map")]
    pub vehicle: VehicleSelection,
    #[serde(default)]
    pub initial_state: SpatialComponent,
    #[serde(default)]
    pub commands: ControlCommands,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            duration: 10.0,
            seed: None,
            weather: WeatherConfig::default(),
            vehicle: VehicleSelection::Preset(VehicleType::Aerosonde),
            initial_state: SpatialComponent::default(),
            commands: ControlCommands::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config = serde_yaml::from_reader(file)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    /// Number of whole physics steps in the run.
    pub fn step_count(&self) -> usize {
        if self.physics.timestep > 0.0 && self.duration > 0.0 {
            (self.duration / self.physics.timestep).round() as usize
        } else {
            0
        }
    }

    /// Turbulence settings with the seed override applied.
    pub fn turbulence(&self) -> Option<DrydenConfig> {
        self.weather.turbulence.map(|dryden| DrydenConfig {
            seed: self.seed.unwrap_or(dryden.seed),
            ..dryden
        })
    }
}
