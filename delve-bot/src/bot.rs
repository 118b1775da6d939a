//! Agent decision loop.
//!
//! Turns a partial, egocentric view of the dungeon into a goal, a search
//! result, and one move per turn:
//!
//! ```text
//! no view ──► Look ──► observe() ──► select goal ──► A* ──► Move, Move, ...
//!                ▲                        │ empty path            │
//!                │                        ▼                       │
//!                └──────── resample (bounded) ◄───── path exhausted
//! ```
//!
//! Planning happens once per path; move outcomes are never fed back, so a
//! blocked step simply fails and the next queued step is tried on the next
//! turn. That is the contract, not an oversight: plan once, trust the path
//! until it is exhausted.

use std::collections::VecDeque;

use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Deserialize;

use crate::error::Result;
use crate::geometry::{Direction, Offset, Position};
use crate::search::{self, SearchGrid};
use crate::tile::Tile;
use crate::view::{LocalView, VIEW_RADIUS};

/// What the bot wants to do this turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Request a fresh view of the surroundings.
    Look,
    /// Step one cell in the given direction.
    Move(Direction),
}

/// Tuning knobs for the decision loop.
#[derive(Clone, Debug, Deserialize)]
pub struct BotConfig {
    /// How many goals to try per planning cycle before giving up and
    /// looking again. Bounds the resample loop when every candidate is
    /// unreachable.
    #[serde(default = "default_max_goal_retries")]
    pub max_goal_retries: usize,

    /// Rejection-sampling budget for wander targets before falling back to
    /// picking among the enumerated open cells.
    #[serde(default = "default_wander_attempts")]
    pub wander_attempts: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            max_goal_retries: default_max_goal_retries(),
            wander_attempts: default_wander_attempts(),
        }
    }
}

fn default_max_goal_retries() -> usize {
    8
}
fn default_wander_attempts() -> usize {
    64
}

/// The autonomous agent pursuing the player.
///
/// Owns the view/goal/path triple and an explicit random source; nothing
/// here touches global state, so a seeded bot is fully deterministic.
pub struct Bot {
    config: BotConfig,
    rng: StdRng,
    /// Last parsed look response; `None` until the first successful look.
    view: Option<LocalView>,
    /// Absolute coordinate currently walked toward.
    goal: Option<Position>,
    /// Moves left on the in-flight path, consumed front-first.
    path: VecDeque<Direction>,
}

impl Bot {
    /// Create a bot with an OS-seeded random source.
    pub fn new(config: BotConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Create a bot with an explicit random source. Deterministic under a
    /// fixed seed.
    pub fn with_rng(config: BotConfig, rng: StdRng) -> Self {
        Self {
            config,
            rng,
            view: None,
            goal: None,
            path: VecDeque::new(),
        }
    }

    /// Decide the next action for the agent standing at `position`.
    ///
    /// Errors only on internal invariant violations inside path
    /// reconstruction; those indicate grid corruption and are not
    /// recoverable.
    pub fn next_action(&mut self, position: Position) -> Result<Action> {
        let reached = self.goal.is_some_and(|goal| goal == position);
        if self.view.is_none() || reached {
            // Re-look before replanning rather than reusing a stale window.
            self.goal = None;
            return Ok(Action::Look);
        }

        if self.path.is_empty() && !self.replan(position)? {
            self.goal = None;
            return Ok(Action::Look);
        }

        match self.path.pop_front() {
            Some(direction) => Ok(Action::Move(direction)),
            None => Ok(Action::Look),
        }
    }

    /// Feed back the text of a look response.
    ///
    /// A malformed response clears the view, degrading the next turn to
    /// another look. A fresh view that shows the opponent drops the current
    /// goal so the next planning cycle retargets them.
    pub fn observe(&mut self, look_response: &str) {
        match LocalView::parse(look_response) {
            Ok(view) => {
                if self.goal.is_some() && view.find(Tile::Player).is_some() {
                    debug!("opponent visible, dropping goal {:?}", self.goal);
                    self.goal = None;
                }
                self.view = Some(view);
            }
            Err(e) => {
                warn!("discarding look response: {e}");
                self.view = None;
            }
        }
    }

    /// The goal currently walked toward, if any.
    pub fn goal(&self) -> Option<Position> {
        self.goal
    }

    /// Is a path currently in flight?
    pub fn has_path(&self) -> bool {
        !self.path.is_empty()
    }

    /// Select a goal and search for a path to it, resampling on failure.
    ///
    /// Returns `Ok(false)` when no plannable goal was found within the
    /// retry budget; the caller falls back to looking again.
    fn replan(&mut self, position: Position) -> Result<bool> {
        let Some(view) = self.view.clone() else {
            return Ok(false);
        };

        for attempt in 0..self.config.max_goal_retries {
            let Some(goal) = self.select_goal(&view, position) else {
                return Ok(false);
            };
            self.goal = Some(goal);

            let mut grid = match SearchGrid::from_view(&view, position, goal) {
                Ok(grid) => grid,
                Err(e) => {
                    // A kept goal can drift outside the window when moves
                    // were blocked mid-path. Unrunnable, so resample.
                    debug!("attempt {attempt}: {e}");
                    self.goal = None;
                    continue;
                }
            };

            let moves = search::search(&mut grid)?;
            if moves.is_empty() {
                trace!("attempt {attempt}: ({}, {}) unreachable", goal.x, goal.y);
                self.goal = None;
                continue;
            }

            debug!(
                "planned {} moves to ({}, {})",
                moves.len(),
                goal.x,
                goal.y
            );
            self.path = moves.into();
            return Ok(true);
        }

        warn!(
            "no reachable goal after {} attempts, staying put",
            self.config.max_goal_retries
        );
        Ok(false)
    }

    /// Goal selection policy, in priority order: keep an unreached goal,
    /// chase a visible opponent, otherwise wander somewhere open.
    fn select_goal(&mut self, view: &LocalView, position: Position) -> Option<Position> {
        if let Some(goal) = self.goal {
            if goal != position {
                return Some(goal);
            }
        }

        if let Some(offset) = view.find(Tile::Player) {
            let goal = position.offset(offset);
            debug!("opponent in view at ({}, {})", goal.x, goal.y);
            return Some(goal);
        }

        self.wander_goal(view, position)
    }

    /// Pick a uniformly random open cell inside the window, rejecting walls
    /// and the center. Falls back to enumerating the open cells so a single
    /// candidate always converges.
    fn wander_goal(&mut self, view: &LocalView, position: Position) -> Option<Position> {
        for _ in 0..self.config.wander_attempts {
            let offset = Offset::new(
                self.rng.random_range(-VIEW_RADIUS..=VIEW_RADIUS),
                self.rng.random_range(-VIEW_RADIUS..=VIEW_RADIUS),
            );
            if Self::acceptable(view, offset) {
                return Some(position.offset(offset));
            }
        }

        let open: Vec<Offset> = view
            .cells()
            .filter(|&(offset, tile)| offset != Offset::CENTER && tile.is_passable())
            .map(|(offset, _)| offset)
            .collect();
        if open.is_empty() {
            return None;
        }
        let pick = open[self.rng.random_range(0..open.len())];
        Some(position.offset(pick))
    }

    fn acceptable(view: &LocalView, offset: Offset) -> bool {
        offset != Offset::CENTER && view.get(offset).is_some_and(Tile::is_passable)
    }
}
