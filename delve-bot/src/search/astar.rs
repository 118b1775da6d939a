//! A* search over a [`SearchGrid`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::Result;
use crate::geometry::{Direction, Position};

use super::grid::{GridCoord, SearchGrid};

/// Hard ceiling on expansions. The window holds 25 cells, so reaching this
/// means the relaxation invariant broke.
const MAX_EXPANSIONS: usize = 1024;

/// A frontier entry ordered by ascending total cost.
#[derive(Clone, Copy, Debug)]
struct FrontierNode {
    coord: GridCoord,
    f: u32,
}

impl Eq for FrontierNode {}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find a route from the grid's origin to its terminal cell.
///
/// Returns the moves in origin-to-goal order: the first element is the step
/// out of the origin, the last is the step into the goal. An empty sequence
/// means no route exists inside the window, which is a valid outcome and
/// signals the caller to resample its goal.
pub fn search(grid: &mut SearchGrid) -> Result<Vec<Direction>> {
    let origin = grid.origin();
    let mut frontier = BinaryHeap::new();

    let h_origin = grid.heuristic(origin);
    {
        let cell = grid.cell_mut(origin);
        cell.g = 0;
        cell.f = h_origin;
    }
    frontier.push(FrontierNode {
        coord: origin,
        f: h_origin,
    });

    let mut expanded = 0usize;

    while let Some(node) = frontier.pop() {
        expanded += 1;
        if expanded > MAX_EXPANSIONS {
            debug!("[AStar] expansion cap hit after {expanded} nodes, giving up");
            return Ok(Vec::new());
        }

        let current = node.coord;
        if grid.cell(current).is_goal {
            trace!("[AStar] goal reached, {expanded} nodes expanded");
            return reconstruct(grid, current);
        }

        let current_g = grid.cell(current).g;
        for neighbor in current.neighbors_4() {
            if !grid.passable(neighbor) {
                continue;
            }

            let tentative = current_g.saturating_add(1);
            if tentative < grid.cell(neighbor).g {
                let f = tentative + grid.heuristic(neighbor);
                let cell = grid.cell_mut(neighbor);
                cell.g = tentative;
                cell.f = f;
                cell.parent = Some(current);
                // Duplicates in the frontier are fine: a stale entry popped
                // later re-examines a finalized cell and relaxes nothing.
                frontier.push(FrontierNode { coord: neighbor, f });
            }
        }
    }

    trace!("[AStar] frontier exhausted after {expanded} nodes, no route");
    Ok(Vec::new())
}

/// Walk predecessor links from the terminal cell back to the origin and
/// emit the direction of each step.
fn reconstruct(grid: &SearchGrid, goal: GridCoord) -> Result<Vec<Direction>> {
    let mut moves = Vec::new();
    let mut current = goal;

    while let Some(parent) = grid.cell(current).parent {
        moves.push(Direction::between(
            Position::new(parent.x, parent.y),
            Position::new(current.x, current.y),
        )?);
        current = parent;
    }

    moves.reverse();
    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;
    use crate::view::LocalView;

    fn grid_for(text: &str, position: Position, goal: Position) -> SearchGrid {
        let view = LocalView::parse(text).unwrap();
        SearchGrid::from_view(&view, position, goal).unwrap()
    }

    #[test]
    fn test_straight_line_matches_manhattan() {
        let position = Position::new(10, 10);
        for goal in [
            Position::new(12, 10),
            Position::new(10, 8),
            Position::new(11, 11),
            Position::new(8, 12),
        ] {
            let mut grid = grid_for(".....\n.....\n..B..\n.....\n.....", position, goal);
            let moves = search(&mut grid).unwrap();
            assert_eq!(moves.len() as u32, position.manhattan(goal));
        }
    }

    #[test]
    fn test_walled_off_goal_yields_empty_path() {
        // Goal at relative (2, -2), sealed behind walls.
        let mut grid = grid_for(
            "...#G\n...##\n..B..\n.....\n.....",
            Position::new(10, 10),
            Position::new(12, 8),
        );
        assert!(search(&mut grid).unwrap().is_empty());
    }

    #[test]
    fn test_moves_are_origin_to_goal_ordered() {
        let position = Position::new(10, 10);
        let goal = Position::new(12, 10);
        let mut grid = grid_for(".....\n.....\n..B..\n.....\n.....", position, goal);
        let moves = search(&mut grid).unwrap();

        // Applying the sequence first-element-first must land on the goal.
        let mut at = position;
        for step in &moves {
            at = at.step(*step);
        }
        assert_eq!(at, goal);
        assert_eq!(moves, vec![Direction::East, Direction::East]);
    }

    #[test]
    fn test_detour_around_wall() {
        // A wall column forces a two-cell detour.
        let position = Position::new(10, 10);
        let goal = Position::new(12, 10);
        let mut grid = grid_for(".....\n...#.\n..B#.\n...#.\n.....", position, goal);
        let moves = search(&mut grid).unwrap();
        assert_eq!(moves.len(), 6);

        let mut at = position;
        for step in &moves {
            at = at.step(*step);
        }
        assert_eq!(at, goal);
    }

    #[test]
    fn test_goal_on_origin_is_empty_path() {
        let position = Position::new(10, 10);
        let mut grid = grid_for(".....\n.....\n..B..\n.....\n.....", position, position);
        assert!(search(&mut grid).unwrap().is_empty());
    }
}
