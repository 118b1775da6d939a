//! Coordinate types shared by the view, the search grid, and the game map.
//!
//! The dungeon uses screen-style coordinates: `x` grows eastward, `y` grows
//! southward (row index), so `North` is `(0, -1)`.

use serde::{Deserialize, Serialize};

use crate::error::{BotError, Result};

/// Absolute dungeon coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The position one step away in the given direction.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Apply a view-relative offset.
    pub fn offset(self, offset: Offset) -> Self {
        Self::new(self.x + offset.dx, self.y + offset.dy)
    }

    /// The offset that carries `self` onto `other`.
    pub fn offset_to(self, other: Position) -> Offset {
        Offset::new(other.x - self.x, other.y - self.y)
    }

    /// Manhattan distance to another position.
    pub fn manhattan(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// A position relative to the center of a local view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Offset {
    pub dx: i32,
    pub dy: i32,
}

impl Offset {
    pub const CENTER: Offset = Offset { dx: 0, dy: 0 };

    pub fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }
}

/// The four cardinal movement directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The `(dx, dy)` step this direction takes.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::South => (0, 1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    /// The direction of travel between two adjacent positions.
    ///
    /// Fails with [`BotError::NonAdjacentStep`] if the positions are not
    /// exactly one cardinal step apart. A non-unit step in a predecessor
    /// chain means the search grid was corrupted, which is a programming
    /// error and must not be papered over.
    pub fn between(from: Position, to: Position) -> Result<Direction> {
        match (to.x - from.x, to.y - from.y) {
            (0, -1) => Ok(Direction::North),
            (0, 1) => Ok(Direction::South),
            (1, 0) => Ok(Direction::East),
            (-1, 0) => Ok(Direction::West),
            _ => Err(BotError::NonAdjacentStep { from, to }),
        }
    }

    /// Single-letter form used by the command layer.
    pub fn as_letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::South => 'S',
            Direction::East => 'E',
            Direction::West => 'W',
        }
    }

    /// Parse the single-letter form.
    pub fn from_letter(c: char) -> Option<Direction> {
        match c {
            'N' => Some(Direction::North),
            'S' => Some(Direction::South),
            'E' => Some(Direction::East),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}
