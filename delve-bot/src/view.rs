//! Local view acquisition.
//!
//! A [`LocalView`] is a fixed-size egocentric snapshot of terrain parsed
//! from the raw text of a look response. It is regenerated wholesale on
//! every successful look and is stale until the next one. Cells outside the
//! window are simply not represented; the search layer treats them as
//! impassable, never as open floor.

use crate::error::{BotError, Result};
use crate::geometry::Offset;
use crate::tile::Tile;

/// Side length of the view window. Always odd so the agent sits on the
/// exact center cell.
pub const VIEW_SPAN: usize = 5;

/// Half the window, i.e. the furthest visible offset on either axis.
pub const VIEW_RADIUS: i32 = (VIEW_SPAN as i32) / 2;

/// A parsed look response: `VIEW_SPAN` x `VIEW_SPAN` tiles centered on the
/// observing agent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalView {
    tiles: [[Tile; VIEW_SPAN]; VIEW_SPAN],
}

impl LocalView {
    /// Parse the raw text of a look response.
    ///
    /// Fails if the input has fewer than `VIEW_SPAN` rows, any row is
    /// narrower than `VIEW_SPAN` columns, or any character falls outside
    /// the tile alphabet. Extra rows or columns are ignored.
    pub fn parse(text: &str) -> Result<LocalView> {
        let mut tiles = [[Tile::Floor; VIEW_SPAN]; VIEW_SPAN];
        let mut rows = text.lines();

        for (y, row) in tiles.iter_mut().enumerate() {
            let line = rows
                .next()
                .ok_or_else(|| BotError::MalformedView(format!("expected {VIEW_SPAN} rows")))?;
            let mut chars = line.chars();
            for (x, cell) in row.iter_mut().enumerate() {
                let c = chars.next().ok_or_else(|| {
                    BotError::MalformedView(format!(
                        "row {y} has fewer than {VIEW_SPAN} columns"
                    ))
                })?;
                *cell = Tile::from_char(c).ok_or_else(|| {
                    BotError::MalformedView(format!("unknown tile {c:?} at ({x}, {y})"))
                })?;
            }
        }

        Ok(LocalView { tiles })
    }

    /// Build a view directly from tiles. Test and simulation helper.
    pub fn from_tiles(tiles: [[Tile; VIEW_SPAN]; VIEW_SPAN]) -> LocalView {
        LocalView { tiles }
    }

    /// Is the offset inside the window?
    #[inline]
    pub fn contains(&self, offset: Offset) -> bool {
        offset.dx.abs() <= VIEW_RADIUS && offset.dy.abs() <= VIEW_RADIUS
    }

    /// The tile at a view-relative offset, or `None` outside the window.
    pub fn get(&self, offset: Offset) -> Option<Tile> {
        if !self.contains(offset) {
            return None;
        }
        let x = (offset.dx + VIEW_RADIUS) as usize;
        let y = (offset.dy + VIEW_RADIUS) as usize;
        Some(self.tiles[y][x])
    }

    /// Find the first occurrence of a tile, scanning row-major.
    pub fn find(&self, tile: Tile) -> Option<Offset> {
        for (y, row) in self.tiles.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == tile {
                    return Some(Offset::new(x as i32 - VIEW_RADIUS, y as i32 - VIEW_RADIUS));
                }
            }
        }
        None
    }

    /// Iterate over every `(offset, tile)` pair in the window.
    pub fn cells(&self) -> impl Iterator<Item = (Offset, Tile)> + '_ {
        self.tiles.iter().enumerate().flat_map(|(y, row)| {
            row.iter().enumerate().map(move |(x, &tile)| {
                (
                    Offset::new(x as i32 - VIEW_RADIUS, y as i32 - VIEW_RADIUS),
                    tile,
                )
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPEN_ROOM: &str = "#####\n#...#\n#.B.#\n#...#\n#####";

    #[test]
    fn test_parse_open_room() {
        let view = LocalView::parse(OPEN_ROOM).unwrap();
        assert_eq!(view.get(Offset::CENTER), Some(Tile::Bot));
        assert_eq!(view.get(Offset::new(-2, -2)), Some(Tile::Wall));
        assert_eq!(view.get(Offset::new(0, -1)), Some(Tile::Floor));
    }

    #[test]
    fn test_outside_window_is_none() {
        let view = LocalView::parse(OPEN_ROOM).unwrap();
        assert_eq!(view.get(Offset::new(3, 0)), None);
        assert_eq!(view.get(Offset::new(0, -3)), None);
    }

    #[test]
    fn test_too_few_rows() {
        assert!(LocalView::parse("#####\n#...#").is_err());
    }

    #[test]
    fn test_short_row() {
        assert!(LocalView::parse("#####\n#...#\n#.B\n#...#\n#####").is_err());
    }

    #[test]
    fn test_unknown_tile() {
        assert!(LocalView::parse("#####\n#...#\n#.X.#\n#...#\n#####").is_err());
    }

    #[test]
    fn test_find_scans_row_major() {
        let view = LocalView::parse("#####\n#..P#\n#.B.#\n#...#\n#####").unwrap();
        assert_eq!(view.find(Tile::Player), Some(Offset::new(1, -1)));
        assert_eq!(view.find(Tile::Gold), None);
    }

    #[test]
    fn test_extra_rows_and_columns_ignored() {
        let view = LocalView::parse("######\n#...##\n#.B.##\n#...##\n######\n......").unwrap();
        assert_eq!(view.get(Offset::CENTER), Some(Tile::Bot));
    }
}
