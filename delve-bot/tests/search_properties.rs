//! Contract tests for the A* engine.

mod common;

use common::{apply, bfs_shortest, view, window_positions};
use delve_bot::search::{search, SearchGrid};
use delve_bot::{BotError, Position};

const OPEN: &str = ".....\n.....\n..B..\n.....\n.....";

#[test]
fn admissible_on_obstacle_free_grid() {
    // With nothing in the way, every in-window goal costs exactly its
    // Manhattan distance.
    let view = view(OPEN);
    let position = Position::new(10, 10);

    for goal in window_positions(position) {
        if goal == position {
            continue;
        }
        let mut grid = SearchGrid::from_view(&view, position, goal).unwrap();
        let moves = search(&mut grid).unwrap();
        assert_eq!(
            moves.len() as u32,
            position.manhattan(goal),
            "goal ({}, {})",
            goal.x,
            goal.y
        );
        assert_eq!(apply(position, &moves), goal);
    }
}

#[test]
fn optimal_against_bfs_oracle() {
    let fixtures = [
        ".....\n.###.\n..B#.\n.###.\n.....",
        "..#..\n..#..\n..B..\n..#..\n..#..",
        "#...#\n.#.#.\n..B..\n.#.#.\n#...#",
        ".....\n.....\n..B..\n.....\n.....",
    ];
    let position = Position::new(10, 10);

    for fixture in fixtures {
        let view = view(fixture);
        for goal in window_positions(position) {
            if goal == position {
                continue;
            }
            let mut grid = match SearchGrid::from_view(&view, position, goal) {
                Ok(grid) => grid,
                Err(_) => continue,
            };
            let moves = search(&mut grid).unwrap();
            match bfs_shortest(&view, position, goal) {
                Some(shortest) => {
                    assert_eq!(moves.len() as u32, shortest, "goal ({}, {})", goal.x, goal.y);
                    assert_eq!(apply(position, &moves), goal);
                }
                None => assert!(moves.is_empty(), "goal ({}, {})", goal.x, goal.y),
            }
        }
    }
}

#[test]
fn ringed_off_goal_is_empty_not_error() {
    // Goal sealed inside a solid ring of walls.
    let view = view("..###\n..#G#\n..B##\n.....\n.....");
    let position = Position::new(10, 10);
    let mut grid = SearchGrid::from_view(&view, position, Position::new(11, 9)).unwrap();
    let moves = search(&mut grid).unwrap();
    assert!(moves.is_empty());
}

#[test]
fn moves_apply_in_emitted_order() {
    // The first element must be the step out of the origin; popping the
    // sequence front-first has to land exactly on the goal.
    let view = view(".....\n...#.\n..B#.\n...#.\n.....");
    let position = Position::new(10, 10);
    let goal = Position::new(12, 10);

    let mut grid = SearchGrid::from_view(&view, position, goal).unwrap();
    let moves = search(&mut grid).unwrap();
    assert!(!moves.is_empty());

    let mut at = position;
    for (i, &step) in moves.iter().enumerate() {
        at = at.step(step);
        assert_ne!(at, position, "step {i} returned to the origin");
    }
    assert_eq!(at, goal);
}

#[test]
fn room_scenario_accepts_either_optimal_route() {
    // Walled room with a pillar; goal one cell diagonal from the center.
    // Two cost-2 routes exist and the tie-break is unspecified.
    let view = view("#####\n#...#\n#.#.#\n#...#\n#####");
    let position = Position::new(2, 2);
    let goal = Position::new(3, 3);

    let mut grid = SearchGrid::from_view(&view, position, goal).unwrap();
    let moves = search(&mut grid).unwrap();

    assert_eq!(moves.len(), 2);
    assert_eq!(apply(position, &moves), goal);

    use delve_bot::Direction::{East, South};
    assert!(
        moves == vec![East, South] || moves == vec![South, East],
        "unexpected route {moves:?}"
    );
}

#[test]
fn goal_outside_window_fails_fast() {
    let view = view(OPEN);
    let position = Position::new(10, 10);
    let err = SearchGrid::from_view(&view, position, Position::new(13, 10)).unwrap_err();
    assert!(matches!(err, BotError::GoalOutsideWindow { .. }));
}
