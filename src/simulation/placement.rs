//! Placement that keeps agents out of cells already holding given species.
//!
//! Both entry points always produce a placement: when no cell qualifies they fall
//! back to an unconstrained uniform choice.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::agent::{AgentId, Species};
use super::ecosystem::Ecosystem;
use super::grid::Pos;

/// Whether any agent at `pos` belongs to one of the `avoided` species.
pub fn cell_has_species(ecosystem: &Ecosystem, pos: Pos, avoided: &[Species]) -> bool {
    ecosystem
        .grid
        .contents(pos)
        .iter()
        .filter_map(|&id| ecosystem.species_of(id))
        .any(|species| avoided.contains(&species))
}

/// All cells, in scan order, that hold no agent of the `avoided` species.
pub fn cells_without(ecosystem: &Ecosystem, avoided: &[Species]) -> Vec<Pos> {
    ecosystem
        .grid
        .coords()
        .filter(|&pos| !cell_has_species(ecosystem, pos, avoided))
        .collect()
}

/// Places `id` on a uniformly random cell free of the `avoided` species.
///
/// If every cell holds an avoided species, any cell may be chosen.
pub fn place_avoiding(ecosystem: &mut Ecosystem, id: AgentId, avoided: &[Species]) -> Pos {
    let candidates = cells_without(ecosystem, avoided);
    let dest = match candidates.choose(&mut ecosystem.rng) {
        Some(&pos) => pos,
        None => {
            let x = ecosystem.rng.random_range(0..ecosystem.grid.width());
            let y = ecosystem.rng.random_range(0..ecosystem.grid.height());
            Pos::new(x, y)
        }
    };
    ecosystem.grid.place(id, dest);
    dest
}

/// Moves `id` to a uniformly random neighbor cell free of the `avoided` species.
///
/// If every neighbor holds an avoided species, any neighbor may be chosen.
/// Returns `None` only when `id` is not on the grid.
pub fn move_to_neighbor_avoiding(
    ecosystem: &mut Ecosystem,
    id: AgentId,
    avoided: &[Species],
) -> Option<Pos> {
    let pos = ecosystem.grid.position(id)?;
    let neighbors = ecosystem.grid.neighbors(pos);
    let safe: Vec<Pos> = neighbors
        .iter()
        .copied()
        .filter(|&cell| !cell_has_species(ecosystem, cell, avoided))
        .collect();
    let pool = if safe.is_empty() { &neighbors } else { &safe };
    let &dest = pool.choose(&mut ecosystem.rng)?;
    ecosystem.grid.move_agent(id, dest);
    Some(dest)
}
