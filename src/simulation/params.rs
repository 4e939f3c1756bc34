//! Simulation parameters and their validation.
//!
//! Parameters are plain serde data so a host can keep them in a JSON file and
//! override individual fields before building an [`Ecosystem`](super::ecosystem::Ecosystem).

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors raised when parameters cannot describe a valid scenario.
#[derive(Debug, Error)]
pub enum ParamsError {
    /// Grid dimensions must both be at least one cell.
    #[error("grid must be at least 1x1, got {width}x{height}")]
    InvalidDimensions {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// Grass grown probability must lie in `[0, 1]`.
    #[error("grass grown probability {0} must be between 0.0 and 1.0")]
    InvalidProbability(f64),
    /// Regrowth time cannot be negative.
    #[error("grass regrow time {0} must not be negative")]
    InvalidRegrowTime(i32),
    /// Breeding threshold must be positive.
    #[error("breed threshold {0} must be positive")]
    InvalidBreedThreshold(i64),
    /// Reading or writing a parameter file failed.
    #[error("parameter file error: {0}")]
    Io(#[from] std::io::Error),
    /// A parameter file did not contain valid JSON.
    #[error("parameter file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Simulation parameters that control the scenario and the per-tick rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Grid height in cells.
    pub height: usize,
    /// Grid width in cells.
    pub width: usize,
    /// Initial prey population.
    pub prey_count: usize,
    /// Initial predator population.
    pub predator_count: usize,
    /// Seed for the model's random source.
    pub seed: u64,
    /// Probability that a grass patch starts grown.
    pub grass_grown_probability: f64,
    /// Ticks a grazed patch stays depleted.
    pub grass_regrow_time: i32,
    /// Energy of every newly created animal.
    pub animal_initial_energy: i64,
    /// Energy at which an animal breeds.
    pub breed_threshold: i64,
    /// Energy a parent spends on one offspring.
    pub breed_cost: i64,
    /// Energy lost by every animal at the end of its turn.
    pub energy_decay: i64,
    /// Energy a prey gains from a grown patch.
    pub grass_energy: i64,
    /// Energy a predator gains from one prey.
    pub prey_energy: i64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            height: 10,
            width: 10,
            prey_count: 10,
            predator_count: 1,
            seed: 42,
            grass_grown_probability: 0.8,
            grass_regrow_time: 20,
            animal_initial_energy: 100,
            breed_threshold: 200,
            breed_cost: 100,
            energy_decay: 1,
            grass_energy: 10,
            prey_energy: 100,
        }
    }
}

impl Params {
    /// Checks that the parameters describe a scenario the model can run.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.width == 0 || self.height == 0 {
            return Err(ParamsError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.grass_grown_probability) {
            return Err(ParamsError::InvalidProbability(self.grass_grown_probability));
        }
        if self.grass_regrow_time < 0 {
            return Err(ParamsError::InvalidRegrowTime(self.grass_regrow_time));
        }
        if self.breed_threshold <= 0 {
            return Err(ParamsError::InvalidBreedThreshold(self.breed_threshold));
        }
        Ok(())
    }

    /// Number of cells in the grid.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Saves the parameters to a JSON file.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ParamsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads parameters from a JSON file. Missing fields take their default values.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        let params: Self = serde_json::from_str(&json)?;
        params.validate()?;
        Ok(params)
    }
}
