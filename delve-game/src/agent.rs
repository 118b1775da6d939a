//! Agent capabilities and per-agent state.

use delve_bot::{Position, Tile};

/// Capability tags for an agent. Behavior branches on capabilities rather
/// than on concrete agent kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgentKind {
    /// Plans its own moves instead of taking console input.
    pub autonomous: bool,
    /// Is the target the autonomous agents pursue.
    pub tracked_target: bool,
}

impl AgentKind {
    /// The human player: console-driven, hunted by the bot.
    pub const PLAYER: AgentKind = AgentKind {
        autonomous: false,
        tracked_target: true,
    };

    /// The autonomous pursuer.
    pub const BOT: AgentKind = AgentKind {
        autonomous: true,
        tracked_target: false,
    };

    /// Marker tile this agent leaves on the map.
    pub fn marker(self) -> Tile {
        if self.tracked_target {
            Tile::Player
        } else {
            Tile::Bot
        }
    }
}

/// Mutable state of one agent on the map.
#[derive(Clone, Debug)]
pub struct AgentState {
    pub position: Position,
    /// The tile the agent is standing on, restored when it moves away.
    pub underneath: Tile,
    /// Gold collected so far. Only the player ever picks anything up.
    pub gold: u32,
}

impl AgentState {
    pub fn new(position: Position, underneath: Tile) -> Self {
        Self {
            position,
            underneath,
            gold: 0,
        }
    }
}
