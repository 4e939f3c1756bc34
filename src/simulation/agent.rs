//! Agent handles, species tags and the rules shared by both animal species.
//!
//! Agents live in the ecosystem's arena and are addressed by [`AgentId`]. The
//! species set is closed, so behavior is dispatched with a `match` on [`Agent`].

use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ecosystem::Ecosystem;
use super::grass::GrassPatch;
use super::placement;

/// Stable handle of an agent. Handles are never reused within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AgentId(pub usize);

impl fmt::Display for AgentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Species tag of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Renewable resource.
    Grass,
    /// Grass eater.
    Prey,
    /// Prey eater.
    Predator,
}

impl Species {
    /// Species newborns keep away from.
    pub const ANIMALS: [Species; 2] = [Species::Prey, Species::Predator];
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Species::Grass => "grass",
            Species::Prey => "prey",
            Species::Predator => "predator",
        };
        f.write_str(name)
    }
}

/// Mobile agent state shared by prey and predators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    /// Stored energy. May go negative; starvation is not modeled.
    pub energy: i64,
}

impl Animal {
    /// Creates an animal with the given energy.
    pub fn new(energy: i64) -> Self {
        Self { energy }
    }
}

/// An entry of the agent arena.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Agent {
    /// A grass patch.
    Grass(GrassPatch),
    /// A prey animal.
    Prey(Animal),
    /// A predator animal.
    Predator(Animal),
}

impl Agent {
    /// Species tag of this agent.
    pub fn species(&self) -> Species {
        match self {
            Agent::Grass(_) => Species::Grass,
            Agent::Prey(_) => Species::Prey,
            Agent::Predator(_) => Species::Predator,
        }
    }

    /// Animal state, if this agent is an animal.
    pub fn animal(&self) -> Option<&Animal> {
        match self {
            Agent::Prey(animal) | Agent::Predator(animal) => Some(animal),
            Agent::Grass(_) => None,
        }
    }

    /// Mutable animal state, if this agent is an animal.
    pub fn animal_mut(&mut self) -> Option<&mut Animal> {
        match self {
            Agent::Prey(animal) | Agent::Predator(animal) => Some(animal),
            Agent::Grass(_) => None,
        }
    }

    /// Grass state, if this agent is a patch.
    pub fn grass(&self) -> Option<&GrassPatch> {
        match self {
            Agent::Grass(patch) => Some(patch),
            _ => None,
        }
    }

    /// Mutable grass state, if this agent is a patch.
    pub fn grass_mut(&mut self) -> Option<&mut GrassPatch> {
        match self {
            Agent::Grass(patch) => Some(patch),
            _ => None,
        }
    }
}

/// Moves an animal to a uniformly random neighbor cell, ignoring occupants.
pub(crate) fn wander(ecosystem: &mut Ecosystem, id: AgentId) {
    let Some(pos) = ecosystem.grid.position(id) else {
        return;
    };
    let neighbors = ecosystem.grid.neighbors(pos);
    if let Some(&dest) = neighbors.choose(&mut ecosystem.rng) {
        ecosystem.grid.move_agent(id, dest);
    }
}

/// Spends breeding energy and places one offspring next to the parent.
///
/// The newborn is put in the parent's cell first and then moved to a neighbor
/// cell holding no animal. Returns the offspring handle when breeding happened.
pub(crate) fn breed(ecosystem: &mut Ecosystem, id: AgentId) -> Option<AgentId> {
    let threshold = ecosystem.params.breed_threshold;
    let cost = ecosystem.params.breed_cost;
    let initial_energy = ecosystem.params.animal_initial_energy;

    let pos = ecosystem.grid.position(id)?;
    let species = ecosystem.species_of(id)?;
    let offspring = match species {
        Species::Prey => Agent::Prey(Animal::new(initial_energy)),
        Species::Predator => Agent::Predator(Animal::new(initial_energy)),
        Species::Grass => return None,
    };

    let animal = ecosystem.agent_mut(id).and_then(Agent::animal_mut)?;
    if animal.energy < threshold {
        return None;
    }
    animal.energy -= cost;

    let baby = ecosystem.insert(offspring);
    ecosystem.grid.place(baby, pos);
    placement::move_to_neighbor_avoiding(ecosystem, baby, &Species::ANIMALS);
    ecosystem.record_birth(species, id, baby);
    Some(baby)
}

/// Applies the end-of-turn energy loss.
pub(crate) fn metabolize(ecosystem: &mut Ecosystem, id: AgentId) {
    let decay = ecosystem.params.energy_decay;
    if let Some(animal) = ecosystem.agent_mut(id).and_then(Agent::animal_mut) {
        animal.energy -= decay;
    }
}
