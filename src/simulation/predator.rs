//! Predator behavior.

use rand::seq::IndexedRandom;

use super::agent::{self, Agent, AgentId};
use super::ecosystem::Ecosystem;

/// Runs one predator turn: move, eat, breed, decay.
pub fn step(ecosystem: &mut Ecosystem, id: AgentId) {
    wander(ecosystem, id);
    eat(ecosystem, id);
    breed(ecosystem, id);
    agent::metabolize(ecosystem, id);
}

/// Moves to a uniformly random neighbor cell.
pub fn wander(ecosystem: &mut Ecosystem, id: AgentId) {
    agent::wander(ecosystem, id);
}

/// Eats one prey chosen at random from the current cell, if any is there.
///
/// The prey is removed from the grid and the population. Returns its handle.
pub fn eat(ecosystem: &mut Ecosystem, id: AgentId) -> Option<AgentId> {
    let pos = ecosystem.grid.position(id)?;
    let prey: Vec<AgentId> = ecosystem
        .grid
        .contents(pos)
        .iter()
        .copied()
        .filter(|&other| matches!(ecosystem.agent(other), Some(Agent::Prey(_))))
        .collect();
    let &meal = prey.choose(&mut ecosystem.rng)?;

    ecosystem.remove(meal);
    let gain = ecosystem.params.prey_energy;
    if let Some(animal) = ecosystem.agent_mut(id).and_then(Agent::animal_mut) {
        animal.energy += gain;
    }
    ecosystem.record_predation(id, meal);
    Some(meal)
}

/// Breeds once if energy has reached the threshold. Returns the newborn's handle.
pub fn breed(ecosystem: &mut Ecosystem, id: AgentId) -> Option<AgentId> {
    agent::breed(ecosystem, id)
}
