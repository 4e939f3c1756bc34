#![allow(missing_docs)]

use ecocycle::simulation::agent::{Agent, Species};
use ecocycle::simulation::ecosystem::Ecosystem;
use ecocycle::simulation::event_log::EventKind;
use ecocycle::simulation::grid::Pos;
use ecocycle::simulation::params::{Params, ParamsError};
use ecocycle::simulation::snapshot::Appearance;
use std::collections::HashSet;

fn create_test_params() -> Params {
    Params {
        height: 10,
        width: 10,
        prey_count: 10,
        predator_count: 1,
        seed: 42,
        ..Params::default()
    }
}

#[test]
fn test_ecosystem_creation() {
    let params = create_test_params();
    let ecosystem = Ecosystem::new(&params).unwrap();

    assert_eq!(ecosystem.count(Species::Grass), 100);
    assert_eq!(ecosystem.count(Species::Prey), params.prey_count);
    assert_eq!(ecosystem.count(Species::Predator), params.predator_count);
    assert_eq!(ecosystem.tick, 0);
    assert!(ecosystem.running);
    assert_eq!(ecosystem.metrics.len(), 1);

    // Exactly one patch per cell
    for pos in ecosystem.grid.coords() {
        let patches = ecosystem
            .grid
            .contents(pos)
            .iter()
            .filter(|&&id| ecosystem.species_of(id) == Some(Species::Grass))
            .count();
        assert_eq!(patches, 1);
    }

    // Animals start on distinct cells while free cells remain
    let mut occupied = HashSet::new();
    for id in ecosystem
        .ids_of(Species::Prey)
        .into_iter()
        .chain(ecosystem.ids_of(Species::Predator))
    {
        let pos = ecosystem.grid.position(id).unwrap();
        assert!(occupied.insert(pos), "two animals share {:?}", pos);
        assert_eq!(ecosystem.agent(id).and_then(Agent::animal).unwrap().energy, 100);
    }
}

#[test]
fn test_invalid_params_rejected() {
    let mut params = create_test_params();
    params.width = 0;
    assert!(matches!(
        Ecosystem::new(&params),
        Err(ParamsError::InvalidDimensions { width: 0, height: 10 })
    ));

    let mut params = create_test_params();
    params.grass_grown_probability = 1.5;
    assert!(matches!(
        Ecosystem::new(&params),
        Err(ParamsError::InvalidProbability(_))
    ));

    let mut params = create_test_params();
    params.grass_regrow_time = -1;
    assert!(matches!(
        Ecosystem::blank(&params),
        Err(ParamsError::InvalidRegrowTime(-1))
    ));
}

#[test]
fn test_grass_seeding_extremes() {
    let mut params = create_test_params();
    params.prey_count = 0;
    params.predator_count = 0;

    params.grass_grown_probability = 1.0;
    let ecosystem = Ecosystem::new(&params).unwrap();
    assert_eq!(ecosystem.grown_grass(), 100);

    // Patches seeded depleted regrow on the very first tick
    params.grass_grown_probability = 0.0;
    let mut ecosystem = Ecosystem::new(&params).unwrap();
    assert_eq!(ecosystem.grown_grass(), 0);
    ecosystem.step();
    assert_eq!(ecosystem.grown_grass(), 100);
}

#[test]
fn test_simulation_step() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params).unwrap();

    ecosystem.step();

    assert_eq!(ecosystem.tick, 1);
    assert_eq!(ecosystem.metrics.len(), 2);
    assert_eq!(ecosystem.metrics.latest().unwrap().tick, 1);
    assert_eq!(*ecosystem.metrics.latest().unwrap(), ecosystem.census());
}

#[test]
fn test_population_bookkeeping() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params).unwrap();

    for _ in 0..60 {
        let before = ecosystem.census().total();
        ecosystem.step();
        let after = ecosystem.census().total();
        let report = ecosystem.last_tick();

        assert_eq!(after + report.deaths(), before + report.births());
    }

    let totals = ecosystem.totals();
    assert_eq!(
        ecosystem.count(Species::Prey) + totals.prey_eaten,
        params.prey_count + totals.prey_born
    );
    assert_eq!(
        ecosystem.count(Species::Predator),
        params.predator_count + totals.predators_born
    );
}

#[test]
fn test_same_seed_same_run() {
    let params = create_test_params();
    let mut first = Ecosystem::new(&params).unwrap();
    let mut second = Ecosystem::new(&params).unwrap();

    first.run(40);
    second.run(40);

    assert_eq!(first.metrics.prey_series(), second.metrics.prey_series());
    assert_eq!(first.metrics.predator_series(), second.metrics.predator_series());
    assert_eq!(
        first.metrics.grown_grass_series(),
        second.metrics.grown_grass_series()
    );
    assert_eq!(first.snapshot(), second.snapshot());
}

#[test]
fn test_reference_scenario() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params).unwrap();

    ecosystem.run(50);

    assert_eq!(ecosystem.tick, 50);
    assert_eq!(ecosystem.metrics.len(), 51);
    assert!(ecosystem.metrics.samples().iter().all(|s| s.grass == 100));
    assert!(ecosystem.metrics.samples().iter().all(|s| s.grown_grass <= 100));

    let totals = ecosystem.totals();
    assert!(totals.predators_born <= totals.prey_eaten);
    assert!(ecosystem.count(Species::Predator) <= params.predator_count + totals.prey_eaten);
}

#[test]
fn test_newborns_wait_for_next_tick() {
    let mut params = create_test_params();
    params.prey_count = 0;
    params.predator_count = 0;
    let mut ecosystem = Ecosystem::blank(&params).unwrap();
    let parent = ecosystem.add_prey(Pos::new(4, 4), 200);

    ecosystem.step();

    let babies: Vec<_> = ecosystem
        .ids_of(Species::Prey)
        .into_iter()
        .filter(|&id| id != parent)
        .collect();
    assert_eq!(babies.len(), 1);
    let energy = |id| ecosystem.agent(id).and_then(Agent::animal).unwrap().energy;
    assert_eq!(energy(parent), 99);
    assert_eq!(energy(babies[0]), 100);

    assert_eq!(ecosystem.last_tick().prey_born, 1);
    assert_eq!(ecosystem.event_log.count(EventKind::PreyBirth), 1);
}

#[test]
fn test_stopped_ecosystem_does_not_advance() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params).unwrap();
    ecosystem.running = false;

    ecosystem.run(10);

    assert_eq!(ecosystem.tick, 0);
    assert_eq!(ecosystem.metrics.len(), 1);
}

#[test]
fn test_snapshot_matches_state() {
    let params = create_test_params();
    let mut ecosystem = Ecosystem::new(&params).unwrap();
    ecosystem.run(5);

    let snapshot = ecosystem.snapshot();
    let census = ecosystem.census();

    assert_eq!(snapshot.tick, 5);
    assert_eq!(snapshot.prey, census.prey);
    assert_eq!(snapshot.predators, census.predators);
    assert_eq!(snapshot.grown_grass, census.grown_grass);
    assert_eq!(snapshot.agents.len(), census.total());

    let grown_views = snapshot
        .of_species(Species::Grass)
        .filter(|view| view.appearance == Appearance::Grass { grown: true })
        .count();
    assert_eq!(grown_views, census.grown_grass);

    for view in &snapshot.agents {
        assert_eq!(ecosystem.grid.position(view.id), Some(view.pos));
    }
}

#[test]
fn test_census_display() {
    let params = create_test_params();
    let ecosystem = Ecosystem::new(&params).unwrap();
    assert_eq!(
        ecosystem.census().to_string(),
        "Prey: 10, Predators: 1, GrassPatch: 100"
    );
}
