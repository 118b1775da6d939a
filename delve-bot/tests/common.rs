//! Test utilities for the search and decision-loop suites.

#![allow(dead_code)]

use std::collections::VecDeque;

use delve_bot::search::SearchGrid;
use delve_bot::{Direction, LocalView, Position, VIEW_RADIUS};

/// Parse a view fixture, panicking on malformed input.
pub fn view(text: &str) -> LocalView {
    LocalView::parse(text).expect("fixture view must parse")
}

/// Apply a move sequence from `start`, returning the final position.
pub fn apply(start: Position, moves: &[Direction]) -> Position {
    moves.iter().fold(start, |at, &step| at.step(step))
}

/// Brute-force shortest route length between two absolute positions inside
/// a view, honoring the same passability rules as the search grid. Returns
/// `None` when the goal is unreachable.
///
/// Used as an independent oracle for A* optimality.
pub fn bfs_shortest(view: &LocalView, position: Position, goal: Position) -> Option<u32> {
    let grid = SearchGrid::from_view(view, position, goal).ok()?;
    let origin = grid.origin();
    let target = grid.goal();

    let mut distance = vec![None::<u32>; 25];
    let index = |c: delve_bot::search::GridCoord| (c.y * 5 + c.x) as usize;

    distance[index(origin)] = Some(0);
    let mut queue = VecDeque::from([origin]);

    while let Some(current) = queue.pop_front() {
        let d = distance[index(current)].unwrap();
        if current == target {
            return Some(d);
        }
        for neighbor in current.neighbors_4() {
            if grid.passable(neighbor) && distance[index(neighbor)].is_none() {
                distance[index(neighbor)] = Some(d + 1);
                queue.push_back(neighbor);
            }
        }
    }
    None
}

/// Every absolute position inside the window around `position`.
pub fn window_positions(position: Position) -> Vec<Position> {
    let mut all = Vec::new();
    for dy in -VIEW_RADIUS..=VIEW_RADIUS {
        for dx in -VIEW_RADIUS..=VIEW_RADIUS {
            all.push(Position::new(position.x + dx, position.y + dy));
        }
    }
    all
}
