//! Prey behavior.
//!
//! Each turn a prey moves to a random neighbor cell, grazes the patch it lands
//! on, breeds if it has stored enough energy, and then loses energy.

use super::agent::{self, Agent, AgentId};
use super::ecosystem::Ecosystem;

/// Runs one prey turn: move, eat, breed, decay.
pub fn step(ecosystem: &mut Ecosystem, id: AgentId) {
    wander(ecosystem, id);
    eat(ecosystem, id);
    breed(ecosystem, id);
    agent::metabolize(ecosystem, id);
}

/// Moves to a uniformly random neighbor cell. Predators are not avoided.
pub fn wander(ecosystem: &mut Ecosystem, id: AgentId) {
    agent::wander(ecosystem, id);
}

/// Grazes the patch in the current cell. Returns whether grass was eaten.
pub fn eat(ecosystem: &mut Ecosystem, id: AgentId) -> bool {
    let Some(pos) = ecosystem.grid.position(id) else {
        return false;
    };
    let patch = ecosystem
        .grid
        .contents(pos)
        .iter()
        .copied()
        .find(|&other| matches!(ecosystem.agent(other), Some(Agent::Grass(_))));
    let Some(patch) = patch else {
        return false;
    };

    let grazed = ecosystem
        .agent_mut(patch)
        .and_then(Agent::grass_mut)
        .is_some_and(|grass| grass.eat());
    if grazed {
        let gain = ecosystem.params.grass_energy;
        if let Some(animal) = ecosystem.agent_mut(id).and_then(Agent::animal_mut) {
            animal.energy += gain;
        }
        ecosystem.record_grazing();
    }
    grazed
}

/// Breeds once if energy has reached the threshold. Returns the newborn's handle.
pub fn breed(ecosystem: &mut Ecosystem, id: AgentId) -> Option<AgentId> {
    agent::breed(ecosystem, id)
}
