//! Walking a grid and replaying the walk as a trail.

use animat_agents::prelude::*;
use animat_runtime::prelude::*;

fn c(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

fn grid() -> Grid {
    Grid::new(PassThrough, GenerationMode::new(1))
}

#[test]
fn steps_are_recorded_on_the_history_stack() {
    let mut w = Wanderer::new(grid(), c(1, 1));
    assert!(w.step_to(c(2, 1)).is_some());
    assert!(w.step_to(c(3, 2)).is_some());

    let visited: Vec<_> = w.history().iter().map(|e| e.position).collect();
    assert_eq!(visited, vec![c(1, 1), c(2, 1), c(3, 2)]);
    assert_eq!(w.position(), c(3, 2));
}

#[test]
fn non_adjacent_and_off_grid_steps_are_refused() {
    let mut w = Wanderer::new(grid(), c(20, 20));
    assert!(w.step_to(c(18, 20)).is_none());
    assert!(w.step_to(c(20, 20)).is_none());
    assert!(w.step_to(c(21, 20)).is_none());
    assert_eq!(w.position(), c(20, 20));
    assert_eq!(w.history().len(), 1);
}

#[test]
fn far_off_steps_are_refused_without_overflow() {
    let mut w = Wanderer::new(grid(), c(5, 5));
    assert!(w.step_to(c(i32::MIN, 5)).is_none());
    assert!(w.step_to(c(5, i32::MAX)).is_none());
    assert_eq!(w.position(), c(5, 5));
    assert_eq!(w.history().len(), 1);
}

#[test]
fn off_grid_start_never_walks_onto_the_grid() {
    let mut w = Wanderer::new(grid(), c(-1, 0));
    assert!(w.history().is_empty());
    assert!(w.step_to(c(0, 0)).is_none());
    assert_eq!(w.position(), c(-1, 0));
    assert_eq!(w.space().occupied_count(), 0);
}

#[test]
fn surroundings_materialize_terrain() {
    let mut w = Wanderer::new(grid(), c(0, 0));
    let seen = w.surroundings();
    assert_eq!(seen.len(), 4);
    assert_eq!(w.space().occupied_count(), 4);

    let space = w.into_space();
    assert!(space.cells().all(|(e, _)| e.kind == space.baseline()));
}

#[test]
fn scenario_c_replay_leaves_trail_markers() {
    let history = vec![
        Entity::new(TerrainKind::Grass, 3, 1),
        Entity::new(TerrainKind::Grass, 2, 1),
        Entity::new(TerrainKind::Grass, 1, 1),
    ];
    let mut space = grid();
    space.load_layout(history.clone());
    let mut w = Wanderer::with_history(space, history);
    assert_eq!(w.position(), c(1, 1));

    let trail = Grid::replay_journey(&mut w);
    for x in 1..=3 {
        let cell = trail.peek(c(x, 1)).unwrap();
        assert_eq!(cell.kind, TerrainKind::Path);
        assert_eq!(trail.node(c(x, 1)).unwrap().entity(), Some(cell));
    }
    assert!(w.history().is_empty());
}

#[test]
fn replay_survives_layout_generators() {
    let generator = LayoutGenerator::new(TerrainKind::Grass).with_rule(
        GenerationMode::new(1),
        LayoutRule::Row { y: 5, kind: TerrainKind::Water },
    );
    let mut w = Wanderer::new(Grid::new(generator, GenerationMode::new(1)), c(4, 4));
    w.step_to(c(5, 5));
    w.step_to(c(6, 5));
    assert_eq!(w.history()[1].kind, TerrainKind::Water);

    replay_journey(&mut w);
    let stats = w.space().stats();
    assert_eq!(stats.count_of(TerrainKind::Path), 3);
    assert_eq!(stats.count_of(TerrainKind::Water), 0);
}

#[test]
fn revisited_cells_collapse_into_one_marker() {
    let mut w = Wanderer::new(grid(), c(5, 5));
    w.step_to(c(6, 5));
    w.step_to(c(5, 5));
    assert_eq!(w.history().len(), 3);

    let trail = replay_journey(&mut w);
    assert_eq!(trail.stats().count_of(TerrainKind::Path), 2);
    assert_eq!(trail.occupied_count(), 2);
}
