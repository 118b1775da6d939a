//! Dungeon map storage, loading, and the world-service operations.

use std::path::Path;

use delve_bot::{Direction, Position, Tile, VIEW_RADIUS};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::agent::{AgentKind, AgentState};
use crate::error::{GameError, Result};

/// Outcome of attempting to move an agent one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The agent stepped onto the target cell.
    Moved,
    /// The target cell is a wall or outside the map; nothing changed.
    Blocked,
    /// The bot stepped onto the tracked player's cell. Terminal loss.
    CaughtPlayer,
}

/// The dungeon: a rectangular tile grid plus win bookkeeping.
///
/// Agent markers live directly in the grid, with the tile underneath each
/// agent kept in its [`AgentState`] and restored when it moves away.
#[derive(Clone, Debug)]
pub struct Dungeon {
    name: String,
    gold_required: u32,
    rows: Vec<Vec<Tile>>,
}

impl Dungeon {
    /// The built-in fallback map.
    pub fn default_labyrinth() -> Self {
        let text = "\
Very Small Labyrinth of Doom
win 2
####################
#..................#
#......G.........E.#
#..................#
#..E...............#
#...........G......#
#..................#
#..................#
####################";
        Self::parse(text).expect("built-in map must parse")
    }

    /// Load a map file, falling back to the built-in map on any failure.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(map) => {
                tracing::info!("Map loaded: {}", map.name);
                map
            }
            Err(e) => {
                tracing::warn!("Cannot load map ({e}), using default map");
                Self::default_labyrinth()
            }
        }
    }

    /// Load a map file: name line, `win <n>` line, then the tile rows.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse map text. Rejects non-rectangular grids and tiles outside the
    /// alphabet.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text.lines();

        let name = lines
            .next()
            .filter(|line| !line.trim().is_empty())
            .ok_or_else(|| GameError::Map("missing name line".into()))?
            .trim()
            .to_string();

        let win_line = lines
            .next()
            .ok_or_else(|| GameError::Map("missing win line".into()))?;
        let gold_required = win_line
            .strip_prefix("win ")
            .and_then(|n| n.trim().parse().ok())
            .ok_or_else(|| GameError::Map(format!("bad win line {win_line:?}")))?;

        let mut rows: Vec<Vec<Tile>> = Vec::new();
        for (y, line) in lines.enumerate() {
            let row: Vec<Tile> = line
                .chars()
                .map(|c| {
                    Tile::from_char(c)
                        .ok_or_else(|| GameError::Map(format!("unknown tile {c:?} in row {y}")))
                })
                .collect::<Result<_>>()?;
            if let Some(first) = rows.first() {
                if row.len() != first.len() {
                    return Err(GameError::Map(format!("map is not rectangular at row {y}")));
                }
            }
            rows.push(row);
        }

        if rows.is_empty() || rows[0].is_empty() {
            return Err(GameError::Map("map has no tiles".into()));
        }

        Ok(Self {
            name,
            gold_required,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn gold_required(&self) -> u32 {
        self.gold_required
    }

    pub fn width(&self) -> usize {
        self.rows[0].len()
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    fn in_bounds(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && (position.x as usize) < self.width()
            && (position.y as usize) < self.height()
    }

    /// The tile at a position; everything outside the map is wall.
    pub fn tile(&self, position: Position) -> Tile {
        if !self.in_bounds(position) {
            return Tile::Wall;
        }
        self.rows[position.y as usize][position.x as usize]
    }

    fn set_tile(&mut self, position: Position, tile: Tile) {
        if self.in_bounds(position) {
            self.rows[position.y as usize][position.x as usize] = tile;
        }
    }

    /// Can an agent stand here?
    pub fn open(&self, position: Position) -> bool {
        self.tile(position).is_passable()
    }

    /// Place an agent on a uniformly random plain floor cell (never on an
    /// item, a marker, or a wall).
    pub fn spawn(&mut self, kind: AgentKind, rng: &mut StdRng) -> Result<AgentState> {
        let attempts = self.width() * self.height() * 10;
        for _ in 0..attempts {
            let position = Position::new(
                rng.random_range(0..self.width() as i32),
                rng.random_range(0..self.height() as i32),
            );
            if self.tile(position) == Tile::Floor {
                self.set_tile(position, kind.marker());
                debug!("spawned {:?} at ({}, {})", kind.marker(), position.x, position.y);
                return Ok(AgentState::new(position, Tile::Floor));
            }
        }
        Err(GameError::Map("no open floor to spawn on".into()))
    }

    /// Render the look window centered on a position. Out-of-bounds cells
    /// render as walls; rows are separated by line breaks.
    pub fn look(&self, center: Position) -> String {
        let mut view = String::new();
        for dy in -VIEW_RADIUS..=VIEW_RADIUS {
            for dx in -VIEW_RADIUS..=VIEW_RADIUS {
                let at = Position::new(center.x + dx, center.y + dy);
                view.push(self.tile(at).as_char());
            }
            view.push('\n');
        }
        view.pop(); // no terminating line break
        view
    }

    /// Attempt to move an agent one step, maintaining markers and the
    /// underneath tile.
    pub fn move_agent(
        &mut self,
        agent: &mut AgentState,
        kind: AgentKind,
        direction: Direction,
    ) -> MoveOutcome {
        let next = agent.position.step(direction);
        if !self.open(next) {
            return MoveOutcome::Blocked;
        }

        if kind.autonomous && self.tile(next) == Tile::Player {
            return MoveOutcome::CaughtPlayer;
        }

        self.set_tile(agent.position, agent.underneath);
        agent.underneath = self.tile(next);
        agent.position = next;
        self.set_tile(next, kind.marker());
        MoveOutcome::Moved
    }
}
