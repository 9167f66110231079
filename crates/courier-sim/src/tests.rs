//! Tests for the grid, agent state machines, scheduler, and world setup.

use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use courier_core::config::SimConfig;
use courier_core::enums::{AgentKind, CourierState, DisplayState, HungerState};
use courier_core::errors::{ConfigError, GridError, SimError};
use courier_core::types::{AgentId, DepotId, Position};

use crate::agents::courier::nearest_hungry;
use crate::agents::{Courier, CourierAction, NeedyEntity};
use crate::depot::canonical_depots;
use crate::engine::SimulationEngine;
use crate::grid::Grid;
use crate::registry::{AgentRegistry, AgentSlot};
use crate::scenario::ScenarioLayout;
use crate::scheduler::ActivationScheduler;
use crate::world_setup;

fn rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A 20x20 bounded grid with one courier at `courier_at` and the given
/// needy entities (ids 0..n, courier id n).
fn courier_fixture(
    courier_at: Position,
    entities: &[(Position, HungerState)],
    capacity: u32,
) -> (Grid, Vec<NeedyEntity>, Courier) {
    let mut grid = Grid::new(20, 20, false);
    let mut needy = Vec::new();
    for (i, (pos, state)) in entities.iter().enumerate() {
        let id = AgentId(i as u32);
        grid.place(id, *pos).unwrap();
        needy.push(NeedyEntity::with_state(id, *state));
    }
    let courier_id = AgentId(entities.len() as u32);
    grid.place(courier_id, courier_at).unwrap();
    (grid, needy, Courier::new(courier_id, DepotId(0), capacity))
}

// ---- Grid ----

#[test]
fn test_grid_place_and_query() {
    let mut grid = Grid::new(20, 20, false);
    grid.place(AgentId(0), Position::new(3, 4)).unwrap();
    grid.place(AgentId(1), Position::new(3, 4)).unwrap();

    let occupants: Vec<AgentId> = grid.agents_at(Position::new(3, 4)).collect();
    assert_eq!(occupants, vec![AgentId(0), AgentId(1)], "cells hold many agents");
    assert_eq!(grid.position_of(AgentId(1)), Some(Position::new(3, 4)));
    assert!(grid.is_cell_empty(Position::new(4, 4)));
    assert_eq!(grid.agent_count(), 2);
}

#[test]
fn test_grid_place_out_of_bounds_without_wrap() {
    let mut grid = Grid::new(20, 20, false);
    let err = grid.place(AgentId(0), Position::new(20, 0)).unwrap_err();
    assert_eq!(
        err,
        GridError::OutOfBounds {
            position: Position::new(20, 0),
            width: 20,
            height: 20
        }
    );
    assert!(grid.place(AgentId(0), Position::new(-1, 5)).is_err());
    assert_eq!(grid.agent_count(), 0);
}

#[test]
fn test_grid_place_wraps_on_torus() {
    let mut grid = Grid::new(20, 10, true);
    let pos = grid.place(AgentId(0), Position::new(21, -1)).unwrap();
    assert_eq!(pos, Position::new(1, 9));
    assert_eq!(grid.agents_at(Position::new(1, 9)).count(), 1);
}

#[test]
fn test_grid_rejects_double_placement() {
    let mut grid = Grid::new(5, 5, false);
    grid.place(AgentId(7), Position::new(0, 0)).unwrap();
    assert_eq!(
        grid.place(AgentId(7), Position::new(1, 1)),
        Err(GridError::AlreadyPlaced(AgentId(7)))
    );
}

#[test]
fn test_grid_move_updates_buckets() {
    let mut grid = Grid::new(10, 10, false);
    grid.place(AgentId(0), Position::new(2, 2)).unwrap();

    let to = grid.move_agent(AgentId(0), Position::new(3, 3)).unwrap();
    assert_eq!(to, Position::new(3, 3));
    assert!(grid.is_cell_empty(Position::new(2, 2)));
    assert_eq!(
        grid.agents_at(Position::new(3, 3)).collect::<Vec<_>>(),
        vec![AgentId(0)]
    );
    assert_eq!(grid.position_of(AgentId(0)), Some(Position::new(3, 3)));
}

#[test]
fn test_grid_move_to_same_cell_is_noop() {
    let mut grid = Grid::new(10, 10, false);
    grid.place(AgentId(0), Position::new(2, 2)).unwrap();
    assert_eq!(
        grid.move_agent(AgentId(0), Position::new(2, 2)),
        Ok(Position::new(2, 2))
    );
    assert_eq!(grid.agents_at(Position::new(2, 2)).count(), 1);
}

#[test]
fn test_grid_failed_move_leaves_agent_in_place() {
    let mut grid = Grid::new(10, 10, false);
    grid.place(AgentId(0), Position::new(0, 0)).unwrap();
    assert!(matches!(
        grid.move_agent(AgentId(0), Position::new(-1, 0)),
        Err(GridError::OutOfBounds { .. })
    ));
    assert_eq!(grid.position_of(AgentId(0)), Some(Position::new(0, 0)));
    assert_eq!(grid.agents_at(Position::new(0, 0)).count(), 1);
}

#[test]
fn test_grid_move_unknown_agent() {
    let mut grid = Grid::new(10, 10, false);
    assert_eq!(
        grid.move_agent(AgentId(3), Position::new(1, 1)),
        Err(GridError::UnknownAgent(AgentId(3)))
    );
}

#[test]
fn test_grid_cells_row_major() {
    let grid = Grid::new(3, 2, false);
    let cells: Vec<Position> = grid.cells().collect();
    assert_eq!(cells.len(), 6);
    assert_eq!(cells[0], Position::new(0, 0));
    assert_eq!(cells[2], Position::new(2, 0));
    assert_eq!(cells[3], Position::new(0, 1));
}

#[test]
fn test_grid_agents_at_out_of_bounds_is_empty() {
    let grid = Grid::new(3, 3, false);
    assert_eq!(grid.agents_at(Position::new(5, 5)).count(), 0);
}

proptest! {
    #[test]
    fn prop_wrapped_positions_always_in_bounds(
        w in 1u32..40, h in 1u32..40, x in -1000i32..1000, y in -1000i32..1000,
    ) {
        let grid = Grid::new(w, h, true);
        let pos = grid.resolve(Position::new(x, y)).unwrap();
        prop_assert!(grid.in_bounds(pos));
    }

    #[test]
    fn prop_single_steps_between_cells_stay_in_bounds(
        x in 0i32..20, y in 0i32..20, tx in 0i32..20, ty in 0i32..20,
    ) {
        let mut grid = Grid::new(20, 20, false);
        grid.place(AgentId(0), Position::new(x, y)).unwrap();
        let target = Position::new(tx, ty);
        for _ in 0..20 {
            let here = grid.position_of(AgentId(0)).unwrap();
            let next = grid.move_agent(AgentId(0), here.step_toward(&target)).unwrap();
            prop_assert!(grid.in_bounds(next));
        }
        prop_assert_eq!(grid.position_of(AgentId(0)), Some(target));
    }
}

// ---- Needy entity ----

#[test]
fn test_needy_starts_fed() {
    let entity = NeedyEntity::new(AgentId(0));
    assert_eq!(entity.state(), HungerState::Fed);
    assert_eq!(entity.hunger_timer(), 0);
}

#[test]
fn test_needy_timer_increments_every_tick() {
    let mut rng = rng(1);
    let mut entity = NeedyEntity::new(AgentId(0));
    for _ in 0..5 {
        entity.step(&mut rng, 0.0);
    }
    assert_eq!(entity.hunger_timer(), 5);
    assert!(!entity.is_hungry(), "zero rate never triggers hunger");

    assert!(entity.step(&mut rng, 1.0), "rate 1.0 always triggers hunger");
    entity.step(&mut rng, 1.0);
    assert!(entity.is_hungry());
    assert_eq!(entity.hunger_timer(), 7, "timer keeps counting while hungry");
}

#[test]
fn test_needy_hungry_step_draws_nothing() {
    let mut entity = NeedyEntity::with_state(AgentId(0), HungerState::Hungry);
    let mut stepped = rng(9);
    let mut untouched = rng(9);

    entity.step(&mut stepped, 0.5);
    assert_eq!(stepped.gen::<u64>(), untouched.gen::<u64>());
}

#[test]
fn test_needy_fed_step_draws_once() {
    let mut entity = NeedyEntity::new(AgentId(0));
    let mut stepped = rng(9);
    let mut reference = rng(9);

    entity.step(&mut stepped, 0.0);
    let _: f64 = reference.gen();
    assert_eq!(stepped.gen::<u64>(), reference.gen::<u64>());
}

#[test]
fn test_needy_serve_resets_timer() {
    let mut rng = rng(2);
    let mut entity = NeedyEntity::with_state(AgentId(0), HungerState::Hungry);
    entity.step(&mut rng, 0.0);
    entity.step(&mut rng, 0.0);
    assert_eq!(entity.hunger_timer(), 2);

    assert!(entity.serve());
    assert_eq!(entity.state(), HungerState::Fed);
    assert_eq!(entity.hunger_timer(), 0);
}

#[test]
fn test_needy_serve_when_fed_is_noop() {
    let mut rng = rng(3);
    let mut entity = NeedyEntity::new(AgentId(0));
    entity.step(&mut rng, 0.0);
    assert!(!entity.serve());
    assert_eq!(entity.hunger_timer(), 1);
}

// ---- Courier: target selection ----

#[test]
fn test_nearest_hungry_ignores_fed() {
    let (grid, needy, _) = courier_fixture(
        Position::new(5, 5),
        &[
            (Position::new(5, 6), HungerState::Fed),
            (Position::new(9, 9), HungerState::Hungry),
        ],
        5,
    );
    assert_eq!(
        nearest_hungry(&needy, &grid, Position::new(5, 5)),
        Some((1, Position::new(9, 9)))
    );
}

#[test]
fn test_nearest_hungry_tie_goes_to_first_registered() {
    let (grid, needy, _) = courier_fixture(
        Position::new(5, 5),
        &[
            (Position::new(3, 5), HungerState::Hungry),
            (Position::new(7, 5), HungerState::Hungry),
            (Position::new(5, 3), HungerState::Hungry),
        ],
        5,
    );
    assert_eq!(
        nearest_hungry(&needy, &grid, Position::new(5, 5)),
        Some((0, Position::new(3, 5)))
    );
}

#[test]
fn test_nearest_hungry_uses_manhattan_distance() {
    // (8,8) is 3 diagonal steps away but Manhattan 6; (5,10) is Manhattan 5.
    let (grid, needy, _) = courier_fixture(
        Position::new(5, 5),
        &[
            (Position::new(8, 8), HungerState::Hungry),
            (Position::new(5, 10), HungerState::Hungry),
        ],
        5,
    );
    assert_eq!(
        nearest_hungry(&needy, &grid, Position::new(5, 5)),
        Some((1, Position::new(5, 10)))
    );
}

#[test]
fn test_nearest_hungry_none() {
    let (grid, needy, _) =
        courier_fixture(Position::new(5, 5), &[(Position::new(1, 1), HungerState::Fed)], 5);
    assert_eq!(nearest_hungry(&needy, &grid, Position::new(5, 5)), None);
}

// ---- Courier: state machine ----

#[test]
fn test_courier_idles_without_hungry_entities() {
    let home = Position::new(10, 0);
    let (mut grid, mut needy, mut courier) =
        courier_fixture(home, &[(Position::new(3, 3), HungerState::Fed)], 5);

    let action = courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(action, CourierAction::Idle);
    assert_eq!(grid.position_of(courier.id()), Some(home));
    assert_eq!(courier.state(), CourierState::Searching);
}

#[test]
fn test_courier_moves_diagonally_toward_target() {
    let home = Position::new(10, 0);
    let (mut grid, mut needy, mut courier) =
        courier_fixture(home, &[(Position::new(5, 5), HungerState::Hungry)], 5);

    let action = courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(
        action,
        CourierAction::Moved {
            from: home,
            to: Position::new(9, 1),
            remaining: 4,
        }
    );
    assert!(needy[0].is_hungry());
}

#[test]
fn test_courier_reports_steps_remaining_until_arrival() {
    let home = Position::new(10, 0);
    let (mut grid, mut needy, mut courier) =
        courier_fixture(home, &[(Position::new(5, 3), HungerState::Hungry)], 5);

    let mut remaining = Vec::new();
    loop {
        match courier.step(&mut needy, &mut grid, home).unwrap() {
            CourierAction::Moved { remaining: r, .. } => remaining.push(r),
            CourierAction::Served { target } => {
                assert_eq!(target, AgentId(0));
                break;
            }
            other => panic!("unexpected action {other:?}"),
        }
    }
    // Chebyshev distance from (10, 0) to (5, 3) is 5.
    assert_eq!(remaining, vec![4, 3, 2, 1, 0]);
}

#[test]
fn test_courier_serves_colocated_target_atomically() {
    let home = Position::new(10, 0);
    let mut rng = rng(4);
    let (mut grid, mut needy, mut courier) =
        courier_fixture(Position::new(5, 5), &[(Position::new(5, 5), HungerState::Hungry)], 5);
    needy[0].step(&mut rng, 0.0);
    needy[0].step(&mut rng, 0.0);

    let action = courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(action, CourierAction::Served { target: AgentId(0) });
    assert!(!needy[0].is_hungry());
    assert_eq!(needy[0].hunger_timer(), 0);
    assert_eq!(courier.carried(), 1);
    assert_eq!(grid.position_of(courier.id()), Some(Position::new(5, 5)));
}

#[test]
fn test_courier_enters_returning_on_capacity_without_moving() {
    let home = Position::new(10, 0);
    let (mut grid, mut needy, mut courier) = courier_fixture(
        Position::new(5, 5),
        &[
            (Position::new(5, 5), HungerState::Hungry),
            (Position::new(5, 5), HungerState::Hungry),
        ],
        2,
    );

    courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(courier.state(), CourierState::Searching);
    courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(courier.carried(), 2);
    assert_eq!(courier.state(), CourierState::Returning);
    assert_eq!(grid.position_of(courier.id()), Some(Position::new(5, 5)));

    let action = courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(
        action,
        CourierAction::Moved {
            from: Position::new(5, 5),
            to: Position::new(6, 4),
            remaining: 4,
        }
    );
}

#[test]
fn test_courier_returning_ignores_hungry_entities() {
    let home = Position::new(10, 0);
    let (mut grid, mut needy, mut courier) = courier_fixture(
        Position::new(5, 5),
        &[
            (Position::new(5, 5), HungerState::Hungry),
            (Position::new(5, 6), HungerState::Hungry),
        ],
        1,
    );
    courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(courier.state(), CourierState::Returning);

    courier.step(&mut needy, &mut grid, home).unwrap();
    assert!(needy[1].is_hungry());
    assert_eq!(grid.position_of(courier.id()), Some(Position::new(6, 4)));
}

#[test]
fn test_courier_unloads_only_at_home() {
    let home = Position::new(10, 0);
    let (mut grid, mut needy, mut courier) =
        courier_fixture(Position::new(8, 2), &[(Position::new(8, 2), HungerState::Hungry)], 1);

    courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(courier.state(), CourierState::Returning);

    // Two steps home, carried stays at capacity the whole way.
    for _ in 0..2 {
        courier.step(&mut needy, &mut grid, home).unwrap();
        assert_eq!(courier.carried(), 1);
        assert_eq!(courier.state(), CourierState::Returning);
    }
    assert_eq!(grid.position_of(courier.id()), Some(home));

    let action = courier.step(&mut needy, &mut grid, home).unwrap();
    assert_eq!(action, CourierAction::Unloaded);
    assert_eq!(courier.carried(), 0);
    assert_eq!(courier.state(), CourierState::Searching);
    assert_eq!(grid.position_of(courier.id()), Some(home), "no movement on unload");
}

#[test]
fn test_courier_unplaced_is_an_error() {
    let mut grid = Grid::new(5, 5, false);
    let mut needy: Vec<NeedyEntity> = Vec::new();
    let mut courier = Courier::new(AgentId(4), DepotId(0), 5);
    assert_eq!(
        courier.step(&mut needy, &mut grid, Position::new(2, 0)),
        Err(GridError::UnknownAgent(AgentId(4)))
    );
}

#[test]
fn test_two_couriers_same_target_second_retargets() {
    let home = Position::new(10, 0);
    let mut grid = Grid::new(20, 20, false);
    let mut needy = vec![
        NeedyEntity::with_state(AgentId(0), HungerState::Hungry),
        NeedyEntity::with_state(AgentId(1), HungerState::Hungry),
    ];
    grid.place(AgentId(0), Position::new(4, 4)).unwrap();
    grid.place(AgentId(1), Position::new(4, 9)).unwrap();
    let mut first = Courier::new(AgentId(2), DepotId(0), 5);
    let mut second = Courier::new(AgentId(3), DepotId(0), 5);
    grid.place(first.id(), Position::new(4, 4)).unwrap();
    grid.place(second.id(), Position::new(4, 4)).unwrap();

    assert_eq!(
        first.step(&mut needy, &mut grid, home).unwrap(),
        CourierAction::Served { target: AgentId(0) }
    );
    assert_eq!(
        second.step(&mut needy, &mut grid, home).unwrap(),
        CourierAction::Moved {
            from: Position::new(4, 4),
            to: Position::new(4, 5),
            remaining: 4,
        }
    );
}

// ---- Registry ----

#[test]
fn test_registry_slots_and_order() {
    let mut registry = AgentRegistry::new();
    registry.add_needy(NeedyEntity::new(AgentId(0)));
    registry.add_needy(NeedyEntity::with_state(AgentId(1), HungerState::Hungry));
    registry.add_courier(Courier::new(AgentId(2), DepotId(1), 5));

    assert_eq!(registry.len(), 3);
    assert_eq!(registry.slot(AgentId(1)), Some(AgentSlot::Needy(1)));
    assert_eq!(registry.slot(AgentId(2)), Some(AgentSlot::Courier(0)));
    assert_eq!(registry.slot(AgentId(9)), None);
    assert_eq!(
        registry.ids().collect::<Vec<_>>(),
        vec![AgentId(0), AgentId(1), AgentId(2)]
    );
    assert_eq!(registry.hungry_count(), 1);
}

// ---- Scheduler ----

#[test]
fn test_scheduler_visits_every_agent_once() {
    let roster: Vec<AgentId> = (0..50).map(AgentId).collect();
    let mut scheduler = ActivationScheduler::new(roster.clone());
    let mut rng = rng(5);

    for _ in 0..20 {
        let mut visited = Vec::new();
        scheduler
            .run(&mut rng, |id, _| {
                visited.push(id);
                Ok::<(), ()>(())
            })
            .unwrap();
        assert_eq!(visited.len(), roster.len());
        let unique: BTreeSet<AgentId> = visited.iter().copied().collect();
        assert_eq!(unique.len(), roster.len());
    }
}

#[test]
fn test_scheduler_order_varies_between_ticks() {
    let mut scheduler = ActivationScheduler::new((0..30).map(AgentId).collect());
    let mut rng = rng(6);
    let first = scheduler.draw_order(&mut rng).to_vec();
    let second = scheduler.draw_order(&mut rng).to_vec();
    assert_ne!(first, second, "30! orderings; a repeat means no reshuffle");
}

#[test]
fn test_scheduler_is_reproducible_from_seed() {
    let roster: Vec<AgentId> = (0..30).map(AgentId).collect();
    let mut a = ActivationScheduler::new(roster.clone());
    let mut b = ActivationScheduler::new(roster);
    let (mut rng_a, mut rng_b) = (rng(7), rng(7));
    for _ in 0..5 {
        assert_eq!(a.draw_order(&mut rng_a), b.draw_order(&mut rng_b));
    }
}

#[test]
fn test_scheduler_stops_at_first_error() {
    let mut scheduler = ActivationScheduler::new((0..10).map(AgentId).collect());
    let mut calls = 0;
    let result = scheduler.run(&mut rng(8), |_, _| {
        calls += 1;
        if calls == 3 {
            Err("boom")
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err("boom"));
    assert_eq!(calls, 3);
}

// ---- World setup ----

#[test]
fn test_canonical_depots() {
    let [top, bottom] = canonical_depots(20, 20);
    assert_eq!(top.position(), Position::new(10, 0));
    assert_eq!(bottom.position(), Position::new(10, 18));
    assert_ne!(top.id(), bottom.id());
}

#[test]
fn test_sample_free_cells_skips_depots() {
    let grid = Grid::new(20, 20, false);
    let depots = canonical_depots(20, 20);
    let cells = world_setup::sample_free_cells(&grid, &depots, 398, &mut rng(10)).unwrap();

    let unique: BTreeSet<(i32, i32)> = cells.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(unique.len(), 398, "cells must be distinct");
    for depot in &depots {
        assert!(!cells.contains(&depot.position()));
    }
}

#[test]
fn test_sample_free_cells_insufficient_space() {
    let grid = Grid::new(20, 20, false);
    let depots = canonical_depots(20, 20);
    assert_eq!(
        world_setup::sample_free_cells(&grid, &depots, 399, &mut rng(10)),
        Err(ConfigError::InsufficientSpace {
            requested: 399,
            available: 398
        })
    );
}

#[test]
fn test_couriers_alternate_depots() {
    let config = SimConfig::default().with_population(10, 5).with_seed(11);
    let engine = SimulationEngine::new(config).unwrap();
    let depots = engine.depots();

    for (i, courier) in engine.couriers().iter().enumerate() {
        let expected = depots[i % 2];
        assert_eq!(courier.home(), expected.id());
        assert_eq!(engine.position_of(courier.id()), Some(expected.position()));
        assert_eq!(courier.carried(), 0);
        assert_eq!(courier.state(), CourierState::Searching);
    }
    let top = engine
        .couriers()
        .iter()
        .filter(|c| c.home() == depots[0].id())
        .count();
    assert_eq!(top, 3);
}

#[test]
fn test_ids_are_dense_needy_first() {
    let config = SimConfig::default().with_population(4, 2).with_seed(12);
    let engine = SimulationEngine::new(config).unwrap();
    let needy_ids: Vec<u32> = engine.needy().iter().map(|e| e.id().0).collect();
    let courier_ids: Vec<u32> = engine.couriers().iter().map(|c| c.id().0).collect();
    assert_eq!(needy_ids, vec![0, 1, 2, 3]);
    assert_eq!(courier_ids, vec![4, 5]);
}

#[test]
fn test_layout_world_places_entities() {
    let layout = ScenarioLayout::new().hungry(1, 1).fed(2, 2);
    let config = SimConfig::default().with_population(99, 1).with_seed(13);
    let engine = SimulationEngine::from_layout(config, &layout).unwrap();

    assert_eq!(engine.config().entity_count, 2);
    assert_eq!(engine.needy()[0].state(), HungerState::Hungry);
    assert_eq!(engine.needy()[1].state(), HungerState::Fed);
    assert_eq!(engine.position_of(AgentId(1)), Some(Position::new(2, 2)));
    assert_eq!(engine.hungry_count(), 1);
}

#[test]
fn test_layout_out_of_bounds_without_wrap() {
    let layout = ScenarioLayout::new().hungry(25, 1);
    let config = SimConfig::default().with_wrap(false).with_seed(14);
    assert!(matches!(
        SimulationEngine::from_layout(config, &layout),
        Err(SimError::Grid(GridError::OutOfBounds { .. }))
    ));
}

#[test]
fn test_empty_layout_rejected() {
    let config = SimConfig::default().with_seed(15);
    assert!(matches!(
        SimulationEngine::from_layout(config, &ScenarioLayout::new()),
        Err(SimError::Config(ConfigError::NoEntities))
    ));
}

// ---- Engine ----

#[test]
fn test_engine_rejects_invalid_config() {
    let config = SimConfig::default().with_hunger_rate(1.0);
    assert!(matches!(
        SimulationEngine::new(config),
        Err(SimError::Config(ConfigError::InvalidHungerRate(_)))
    ));
}

#[test]
fn test_engine_rejects_oversized_grid_before_allocating() {
    let config = SimConfig::default()
        .with_grid(2_000_000_000, 2_000_000_000)
        .with_population(1, 0)
        .with_seed(1);
    assert!(matches!(
        SimulationEngine::new(config),
        Err(SimError::Config(ConfigError::InvalidDimensions { .. }))
    ));

    let layout = ScenarioLayout::new().hungry(0, 0);
    let config = SimConfig::default().with_grid(100_000, 100_000).with_seed(1);
    assert!(matches!(
        SimulationEngine::from_layout(config, &layout),
        Err(SimError::Config(ConfigError::InvalidDimensions { .. }))
    ));
}

#[test]
fn test_engine_tick_advances_clock() {
    let mut engine = SimulationEngine::new(SimConfig::default().with_seed(16)).unwrap();
    for _ in 0..7 {
        engine.tick().unwrap();
    }
    assert_eq!(engine.time().tick, 7);
    assert_eq!(engine.snapshot().time.tick, 7);
    assert!(engine.needy().iter().all(|e| e.hunger_timer() <= 7));
}

#[test]
fn test_engine_without_seed_records_drawn_seed() {
    let engine = SimulationEngine::new(SimConfig::default()).unwrap();
    let replay = SimulationEngine::new(SimConfig::default().with_seed(engine.seed())).unwrap();
    assert_eq!(engine.snapshot(), replay.snapshot());
}

#[test]
fn test_snapshot_lists_every_agent() {
    let config = SimConfig::default().with_population(12, 4).with_seed(17);
    let mut engine = SimulationEngine::new(config).unwrap();
    for _ in 0..50 {
        engine.tick().unwrap();
    }
    let snapshot = engine.snapshot();

    assert_eq!(snapshot.agents.len(), 16);
    assert_eq!(snapshot.depots.len(), 2);
    assert_eq!(snapshot.agents_of(AgentKind::Needy).count(), 12);
    assert_eq!(snapshot.agents_of(AgentKind::Courier).count(), 4);
    assert!(snapshot.agents.windows(2).all(|w| w[0].id < w[1].id));
    for view in snapshot.agents_of(AgentKind::Courier) {
        assert!(matches!(
            view.display,
            DisplayState::Searching | DisplayState::Returning
        ));
    }
    let hungry_views = snapshot
        .agents
        .iter()
        .filter(|a| a.display == DisplayState::Hungry)
        .count();
    assert_eq!(hungry_views as u32, snapshot.hungry_count);
}
