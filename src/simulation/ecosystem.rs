//! The ecosystem model.
//!
//! The ecosystem owns the grid, the agent arena and the random source. It handles:
//! - Scenario setup: one grass patch per cell, then prey, then predators
//! - The tick loop: every live agent acts once, in a freshly shuffled order
//! - Population sampling after construction and after each tick
//! - Bookkeeping of births and predation

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use tracing::{debug, info, trace};

use super::agent::{Agent, AgentId, Animal, Species};
use super::event_log::{EventKind, EventLog};
use super::grass::GrassPatch;
use super::grid::{Pos, SpatialGrid};
use super::metrics::{MetricsCollector, PopulationSample, TickReport};
use super::params::{Params, ParamsError};
use super::placement;
use super::predator;
use super::prey;
use super::snapshot::{AgentView, Appearance, Snapshot};

/// The main model containing all simulation state.
///
/// Agents are stored in an arena indexed by [`AgentId`]; the grid only holds
/// handles. A removed agent leaves an empty slot so handles stay stable.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// Parameters the model was built with.
    pub params: Params,
    /// Spatial grid of agent handles.
    pub grid: SpatialGrid,
    /// Number of completed ticks.
    pub tick: u64,
    /// Cleared to ask the host to stop. The current rules never clear it.
    pub running: bool,
    /// Population samples, one per tick boundary.
    pub metrics: MetricsCollector,
    /// Recent births and predation.
    pub event_log: EventLog,
    pub(crate) rng: ChaCha12Rng,
    agents: Vec<Option<Agent>>,
    current: TickReport,
    last_tick: TickReport,
    totals: TickReport,
}

impl Ecosystem {
    /// Creates the initial scenario described by `params`.
    ///
    /// Every cell gets one grass patch, grown with probability
    /// `grass_grown_probability`. Prey and then predators are placed on cells
    /// holding no other animal where possible. An initial sample is recorded.
    pub fn new(params: &Params) -> Result<Self, ParamsError> {
        let mut ecosystem = Self::blank(params)?;

        let cells: Vec<Pos> = ecosystem.grid.coords().collect();
        for pos in cells {
            let grown = ecosystem.rng.random::<f64>() < params.grass_grown_probability;
            ecosystem.add_grass(pos, grown);
        }

        for _ in 0..params.prey_count {
            let id = ecosystem.insert(Agent::Prey(Animal::new(params.animal_initial_energy)));
            placement::place_avoiding(&mut ecosystem, id, &Species::ANIMALS);
        }

        for _ in 0..params.predator_count {
            let id = ecosystem.insert(Agent::Predator(Animal::new(params.animal_initial_energy)));
            placement::place_avoiding(&mut ecosystem, id, &Species::ANIMALS);
        }

        let sample = ecosystem.census();
        ecosystem.metrics.record(sample);

        info!(
            width = params.width,
            height = params.height,
            seed = params.seed,
            prey = sample.prey,
            predators = sample.predators,
            grown_grass = sample.grown_grass,
            "ecosystem created"
        );

        Ok(ecosystem)
    }

    /// Creates an empty grid with a seeded random source and no agents.
    ///
    /// Used to build hand-made scenarios with [`add_grass`](Self::add_grass),
    /// [`add_prey`](Self::add_prey) and [`add_predator`](Self::add_predator).
    pub fn blank(params: &Params) -> Result<Self, ParamsError> {
        params.validate()?;
        Ok(Self {
            params: params.clone(),
            grid: SpatialGrid::new(params.width, params.height),
            tick: 0,
            running: true,
            metrics: MetricsCollector::new(),
            event_log: EventLog::default(),
            rng: ChaCha12Rng::seed_from_u64(params.seed),
            agents: Vec::with_capacity(params.area() + params.prey_count + params.predator_count),
            current: TickReport::default(),
            last_tick: TickReport::default(),
            totals: TickReport::default(),
        })
    }

    /// Adds a grass patch at `pos`.
    pub fn add_grass(&mut self, pos: Pos, grown: bool) -> AgentId {
        let patch = GrassPatch::new(grown, self.params.grass_regrow_time);
        let id = self.insert(Agent::Grass(patch));
        self.grid.place(id, pos);
        id
    }

    /// Adds a prey with the given energy at `pos`.
    pub fn add_prey(&mut self, pos: Pos, energy: i64) -> AgentId {
        let id = self.insert(Agent::Prey(Animal::new(energy)));
        self.grid.place(id, pos);
        id
    }

    /// Adds a predator with the given energy at `pos`.
    pub fn add_predator(&mut self, pos: Pos, energy: i64) -> AgentId {
        let id = self.insert(Agent::Predator(Animal::new(energy)));
        self.grid.place(id, pos);
        id
    }

    /// Advances the simulation by one tick.
    ///
    /// Every agent alive at the start of the tick acts once, in an order shuffled
    /// by the model's random source. Agents eaten earlier in the tick are skipped
    /// and agents born during the tick wait for the next one.
    pub fn step(&mut self) {
        let mut order = self.live_ids();
        order.shuffle(&mut self.rng);

        self.current = TickReport::default();
        for id in order {
            if self.is_alive(id) {
                self.step_agent(id);
            }
        }

        self.tick += 1;
        self.last_tick = self.current;
        self.totals.accumulate(&self.current);

        let sample = self.census();
        self.metrics.record(sample);
        trace!(
            tick = self.tick,
            prey = sample.prey,
            predators = sample.predators,
            grown_grass = sample.grown_grass,
            "tick complete"
        );
    }

    /// Runs `ticks` steps, stopping early if `running` is cleared.
    pub fn run(&mut self, ticks: u64) {
        for _ in 0..ticks {
            if !self.running {
                break;
            }
            self.step();
        }
    }

    fn step_agent(&mut self, id: AgentId) {
        match self.species_of(id) {
            Some(Species::Grass) => {
                if let Some(patch) = self.agent_mut(id).and_then(Agent::grass_mut) {
                    patch.step();
                }
            }
            Some(Species::Prey) => prey::step(self, id),
            Some(Species::Predator) => predator::step(self, id),
            None => {}
        }
    }

    /// Returns the agent behind `id` if it is alive.
    pub fn agent(&self, id: AgentId) -> Option<&Agent> {
        self.agents.get(id.0).and_then(Option::as_ref)
    }

    /// Returns the agent behind `id` mutably if it is alive.
    pub fn agent_mut(&mut self, id: AgentId) -> Option<&mut Agent> {
        self.agents.get_mut(id.0).and_then(Option::as_mut)
    }

    /// Species of a live agent.
    pub fn species_of(&self, id: AgentId) -> Option<Species> {
        self.agent(id).map(Agent::species)
    }

    /// Whether `id` refers to a live agent.
    pub fn is_alive(&self, id: AgentId) -> bool {
        self.agent(id).is_some()
    }

    /// Handles of all live agents in ascending order.
    pub fn live_ids(&self) -> Vec<AgentId> {
        self.agents
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| AgentId(i))
            .collect()
    }

    /// Handles of the live agents of one species.
    pub fn ids_of(&self, species: Species) -> Vec<AgentId> {
        self.live_ids()
            .into_iter()
            .filter(|&id| self.species_of(id) == Some(species))
            .collect()
    }

    /// Number of live agents of one species.
    pub fn count(&self, species: Species) -> usize {
        self.agents
            .iter()
            .flatten()
            .filter(|agent| agent.species() == species)
            .count()
    }

    /// Number of grass patches currently grown.
    pub fn grown_grass(&self) -> usize {
        self.agents
            .iter()
            .flatten()
            .filter_map(Agent::grass)
            .filter(|patch| patch.is_grown())
            .count()
    }

    /// Population counts at the current tick boundary.
    pub fn census(&self) -> PopulationSample {
        PopulationSample {
            tick: self.tick,
            prey: self.count(Species::Prey),
            predators: self.count(Species::Predator),
            grown_grass: self.grown_grass(),
            grass: self.count(Species::Grass),
        }
    }

    /// Read-only view of the current state for rendering.
    pub fn snapshot(&self) -> Snapshot {
        let agents = self
            .live_ids()
            .into_iter()
            .filter_map(|id| {
                let agent = self.agent(id)?;
                let pos = self.grid.position(id)?;
                let appearance = match agent {
                    Agent::Grass(patch) => Appearance::Grass {
                        grown: patch.is_grown(),
                    },
                    Agent::Prey(animal) | Agent::Predator(animal) => Appearance::Animal {
                        energy: animal.energy,
                    },
                };
                Some(AgentView {
                    id,
                    species: agent.species(),
                    pos,
                    appearance,
                })
            })
            .collect();
        let sample = self.census();
        Snapshot {
            tick: self.tick,
            prey: sample.prey,
            predators: sample.predators,
            grown_grass: sample.grown_grass,
            agents,
        }
    }

    /// Births and deaths of the most recent tick.
    pub fn last_tick(&self) -> TickReport {
        self.last_tick
    }

    /// Births and deaths accumulated since construction.
    pub fn totals(&self) -> TickReport {
        self.totals
    }

    /// Adds an agent to the arena without placing it on the grid.
    pub(crate) fn insert(&mut self, agent: Agent) -> AgentId {
        let id = AgentId(self.agents.len());
        self.agents.push(Some(agent));
        id
    }

    /// Removes an agent from the grid and the arena. It is never stepped again.
    pub fn remove(&mut self, id: AgentId) -> Option<Agent> {
        self.grid.remove(id);
        self.agents.get_mut(id.0).and_then(Option::take)
    }

    pub(crate) fn record_birth(&mut self, species: Species, parent: AgentId, baby: AgentId) {
        let kind = match species {
            Species::Prey => {
                self.current.prey_born += 1;
                EventKind::PreyBirth
            }
            Species::Predator => {
                self.current.predators_born += 1;
                EventKind::PredatorBirth
            }
            Species::Grass => return,
        };
        debug!(tick = self.tick, %parent, %baby, %species, "new {}", species);
        self.event_log.log(
            self.tick,
            format!("{} {} was born to {}", species, baby, parent),
            kind,
        );
    }

    pub(crate) fn record_predation(&mut self, predator: AgentId, prey: AgentId) {
        self.current.prey_eaten += 1;
        debug!(tick = self.tick, %predator, %prey, "prey eaten");
        self.event_log.log(
            self.tick,
            format!("predator {} ate prey {}", predator, prey),
            EventKind::Predation,
        );
    }

    pub(crate) fn record_grazing(&mut self) {
        self.current.grass_eaten += 1;
    }
}
