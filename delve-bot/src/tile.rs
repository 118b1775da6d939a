//! Tile alphabet for the dungeon grid.
//!
//! The alphabet is closed: every character a look response may contain maps
//! to exactly one variant, and anything else is a parse failure rather than
//! a silent default.

use serde::{Deserialize, Serialize};

/// A single tile of the dungeon as it appears in a rendered view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Tile {
    /// Open floor, nothing on it
    #[default]
    Floor = 0,

    /// Impassable wall. The only tile an agent can never occupy.
    Wall = 1,

    /// A piece of gold lying on the floor
    Gold = 2,

    /// An exit square. Standing here with enough gold wins the game.
    Exit = 3,

    /// The tracked opponent (the human player) is standing here
    Player = 4,

    /// Another autonomous agent is standing here
    Bot = 5,
}

impl Tile {
    /// Can an agent step onto this tile?
    #[inline]
    pub fn is_passable(self) -> bool {
        self != Tile::Wall
    }

    /// Is this a pickup-relevant item marker?
    #[inline]
    pub fn is_item(self) -> bool {
        matches!(self, Tile::Gold | Tile::Exit)
    }

    /// Parse a view character. Returns `None` for anything outside the
    /// alphabet.
    #[inline]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Tile::Floor),
            '#' => Some(Tile::Wall),
            'G' => Some(Tile::Gold),
            'E' => Some(Tile::Exit),
            'P' => Some(Tile::Player),
            'B' => Some(Tile::Bot),
            _ => None,
        }
    }

    /// Character representation, inverse of [`Tile::from_char`].
    pub fn as_char(self) -> char {
        match self {
            Tile::Floor => '.',
            Tile::Wall => '#',
            Tile::Gold => 'G',
            Tile::Exit => 'E',
            Tile::Player => 'P',
            Tile::Bot => 'B',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passability() {
        assert!(Tile::Floor.is_passable());
        assert!(Tile::Gold.is_passable());
        assert!(Tile::Exit.is_passable());
        assert!(Tile::Player.is_passable());
        assert!(Tile::Bot.is_passable());
        assert!(!Tile::Wall.is_passable());
    }

    #[test]
    fn test_char_round_trip() {
        for tile in [
            Tile::Floor,
            Tile::Wall,
            Tile::Gold,
            Tile::Exit,
            Tile::Player,
            Tile::Bot,
        ] {
            assert_eq!(Tile::from_char(tile.as_char()), Some(tile));
        }
    }

    #[test]
    fn test_closed_alphabet() {
        assert_eq!(Tile::from_char('x'), None);
        assert_eq!(Tile::from_char(' '), None);
        assert_eq!(Tile::from_char('g'), None);
    }
}
