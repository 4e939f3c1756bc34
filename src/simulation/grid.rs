//! Toroidal multi-occupancy grid.
//!
//! The grid stores agent handles, never agents. Every placed agent occupies
//! exactly one cell; a cell may hold any number of agents.

use ndarray::Array2;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::agent::AgentId;

/// A cell coordinate with `0 <= x < width` and `0 <= y < height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pos {
    /// Column.
    pub x: usize,
    /// Row.
    pub y: usize,
}

impl Pos {
    /// Creates a coordinate.
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Spatial grid with wrapping edges and any number of agents per cell.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    width: usize,
    height: usize,
    /// cells[[y, x]] holds the handles of agents in that cell
    cells: Array2<Vec<AgentId>>,
    locations: HashMap<AgentId, Pos>,
}

impl SpatialGrid {
    /// Creates an empty grid. Both dimensions must be non-zero.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: Array2::from_elem((height, width), Vec::new()),
            locations: HashMap::new(),
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Maps a possibly out-of-range coordinate onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Pos {
        Pos {
            x: x.rem_euclid(self.width as i64) as usize,
            y: y.rem_euclid(self.height as i64) as usize,
        }
    }

    /// Moore neighborhood of `pos`, wrapped around the edges.
    ///
    /// Offsets are visited with `dx` outer and `dy` inner, skipping the center.
    /// Wrapped duplicates are dropped, so grids of at least 3x3 always yield
    /// exactly 8 distinct cells and smaller grids yield fewer.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut out = Vec::with_capacity(8);
        for dx in -1i64..=1 {
            for dy in -1i64..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let cell = self.wrap(pos.x as i64 + dx, pos.y as i64 + dy);
                if !out.contains(&cell) {
                    out.push(cell);
                }
            }
        }
        out
    }

    /// Handles of the agents at `pos`, in insertion order.
    pub fn contents(&self, pos: Pos) -> &[AgentId] {
        let pos = self.wrap(pos.x as i64, pos.y as i64);
        &self.cells[[pos.y, pos.x]]
    }

    /// Current cell of `id`, if it is placed.
    pub fn position(&self, id: AgentId) -> Option<Pos> {
        self.locations.get(&id).copied()
    }

    /// Every cell coordinate, `x` outer and `y` inner.
    pub fn coords(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.width).flat_map(move |x| (0..self.height).map(move |y| Pos { x, y }))
    }

    /// Number of placed agents.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether no agent is placed.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Adds `id` to the cell at `pos`. An agent that is already placed is moved instead.
    pub fn place(&mut self, id: AgentId, pos: Pos) {
        if self.locations.contains_key(&id) {
            self.move_agent(id, pos);
            return;
        }
        let pos = self.wrap(pos.x as i64, pos.y as i64);
        self.cells[[pos.y, pos.x]].push(id);
        self.locations.insert(id, pos);
    }

    /// Moves `id` from its current cell to `pos`.
    pub fn move_agent(&mut self, id: AgentId, pos: Pos) {
        self.detach(id);
        self.place(id, pos);
    }

    /// Clears `id` from the grid and returns the cell it occupied.
    pub fn remove(&mut self, id: AgentId) -> Option<Pos> {
        self.detach(id)
    }

    fn detach(&mut self, id: AgentId) -> Option<Pos> {
        let pos = self.locations.remove(&id)?;
        let cell = &mut self.cells[[pos.y, pos.x]];
        if let Some(idx) = cell.iter().position(|&other| other == id) {
            cell.remove(idx);
        }
        Some(pos)
    }
}
