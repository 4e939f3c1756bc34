//! # Ecocycle - Grass, Prey and Predator Simulation
//!
//! A discrete-time agent-based model of a three-species ecological cycle on a
//! toroidal grid. Grass regrows after grazing, prey eat grass, predators eat prey,
//! and both animal species breed once they have stored enough energy.
//!
//! ## Features
//!
//! - Toroidal multi-occupancy grid with Moore neighborhoods
//! - Closed set of agent variants (grass, prey, predator) stored in an arena
//! - Placement policy that keeps newborns away from other animals
//! - Seeded random source owned by the model for reproducible runs
//! - Population metrics sampled at every tick boundary
//! - Read-only snapshots for rendering collaborators
//!
//! ## Core Modules
//!
//! - [`simulation::ecosystem`] - Model construction and the tick loop
//! - [`simulation::grid`] - Toroidal spatial grid
//! - [`simulation::prey`] / [`simulation::predator`] - Animal behavior
//! - [`simulation::placement`] - Avoided-type placement
//! - [`simulation::metrics`] - Population sampling

/// Core simulation logic and data structures.
pub mod simulation {
    /// Agent handles, species tags and the agent arena entries.
    pub mod agent;
    /// The ecosystem model: owns the grid, agents and random source.
    pub mod ecosystem;
    /// Bounded log of notable births and predation events.
    pub mod event_log;
    /// Renewable grass patches.
    pub mod grass;
    /// Toroidal multi-occupancy grid.
    pub mod grid;
    /// Population counts sampled after each tick.
    pub mod metrics;
    /// Simulation parameters and configuration errors.
    pub mod params;
    /// Placement that avoids cells holding given species.
    pub mod placement;
    /// Predator behavior.
    pub mod predator;
    /// Prey behavior.
    pub mod prey;
    /// Read-only state views for rendering.
    pub mod snapshot;
}
