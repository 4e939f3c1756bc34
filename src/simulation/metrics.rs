//! Population metrics sampled at tick boundaries.
//!
//! The collector keeps one [`PopulationSample`] per sampling point: one after
//! construction and one after every tick. Per-tick births and deaths are kept
//! separately in [`TickReport`]s.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Population counts at one tick boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PopulationSample {
    /// Ticks completed when the sample was taken.
    pub tick: u64,
    /// Living prey.
    pub prey: usize,
    /// Living predators.
    pub predators: usize,
    /// Grass patches currently grown.
    pub grown_grass: usize,
    /// All grass patches, grown or not.
    pub grass: usize,
}

impl PopulationSample {
    /// Total number of agents of every species.
    pub fn total(&self) -> usize {
        self.prey + self.predators + self.grass
    }
}

impl fmt::Display for PopulationSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Prey: {}, Predators: {}, GrassPatch: {}",
            self.prey, self.predators, self.grass
        )
    }
}

/// Births and deaths during one tick, or accumulated over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TickReport {
    /// Prey offspring created.
    pub prey_born: usize,
    /// Predator offspring created.
    pub predators_born: usize,
    /// Prey removed by predators.
    pub prey_eaten: usize,
    /// Grown patches grazed.
    pub grass_eaten: usize,
}

impl TickReport {
    /// All offspring created.
    pub fn births(&self) -> usize {
        self.prey_born + self.predators_born
    }

    /// All agents removed.
    pub fn deaths(&self) -> usize {
        self.prey_eaten
    }

    /// Adds another report's counts into this one.
    pub fn accumulate(&mut self, other: &TickReport) {
        self.prey_born += other.prey_born;
        self.predators_born += other.predators_born;
        self.prey_eaten += other.prey_eaten;
        self.grass_eaten += other.grass_eaten;
    }
}

/// Time series of population samples.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MetricsCollector {
    samples: Vec<PopulationSample>,
}

impl MetricsCollector {
    /// Creates an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sample.
    pub fn record(&mut self, sample: PopulationSample) {
        self.samples.push(sample);
    }

    /// All samples in the order they were taken.
    pub fn samples(&self) -> &[PopulationSample] {
        &self.samples
    }

    /// Most recent sample.
    pub fn latest(&self) -> Option<&PopulationSample> {
        self.samples.last()
    }

    /// Number of samples taken.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no sample has been taken.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Prey count per sample.
    pub fn prey_series(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.prey).collect()
    }

    /// Predator count per sample.
    pub fn predator_series(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.predators).collect()
    }

    /// Grown grass count per sample.
    pub fn grown_grass_series(&self) -> Vec<usize> {
        self.samples.iter().map(|s| s.grown_grass).collect()
    }

    /// Saves the samples to a JSON file.
    pub fn save_to_file(&self, path: &str) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Loads samples from a JSON file.
    pub fn load_from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        let collector = serde_json::from_str(&json)?;
        Ok(collector)
    }
}
