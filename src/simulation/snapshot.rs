//! Read-only views of the ecosystem for rendering collaborators.

use serde::{Deserialize, Serialize};

use super::agent::{AgentId, Species};
use super::grid::Pos;

/// Species-specific attributes a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Appearance {
    /// Grass is drawn differently when grown and when depleted.
    Grass {
        /// Whether the patch is grown.
        grown: bool,
    },
    /// Animals carry their energy.
    Animal {
        /// Stored energy.
        energy: i64,
    },
}

/// One agent as seen from outside the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentView {
    /// Agent handle.
    pub id: AgentId,
    /// Species tag.
    pub species: Species,
    /// Current cell.
    pub pos: Pos,
    /// Display attributes.
    pub appearance: Appearance,
}

/// State of the ecosystem at a tick boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Ticks completed.
    pub tick: u64,
    /// Living prey.
    pub prey: usize,
    /// Living predators.
    pub predators: usize,
    /// Grass patches currently grown.
    pub grown_grass: usize,
    /// Every live agent, ordered by handle.
    pub agents: Vec<AgentView>,
}

impl Snapshot {
    /// Views of the agents of one species.
    pub fn of_species(&self, species: Species) -> impl Iterator<Item = &AgentView> {
        self.agents.iter().filter(move |view| view.species == species)
    }
}
