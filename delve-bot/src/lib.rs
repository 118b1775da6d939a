//! # Delve-Bot: Bounded-Visibility Pathfinding Pipeline
//!
//! The autonomous agent for the Delve dungeon crawl. The bot never sees the
//! whole dungeon; it plans over a fixed 5x5 window centered on itself and
//! refreshed once per planning cycle.
//!
//! ## Pipeline
//!
//! ```text
//! look response ──► LocalView ──► goal selection ──► SearchGrid ──► A*
//!      ▲                                                            │
//!      │                                                            ▼
//!   Action::Look ◄── Bot (decision loop) ◄── ordered cardinal moves,
//!                                            consumed one per turn
//! ```
//!
//! - [`view::LocalView`]: terrain snapshot parsed from a look response
//! - [`search::SearchGrid`]: per-search cost/parent model, built and
//!   discarded within one planning call
//! - [`search::search`]: A* with a Manhattan heuristic over the window
//! - [`bot::Bot`]: the per-turn decision loop emitting look/move actions
//!
//! ## Quick Start
//!
//! ```rust
//! use delve_bot::{Action, Bot, BotConfig, Position};
//!
//! let mut bot = Bot::new(BotConfig::default());
//! let position = Position::new(10, 10);
//!
//! match bot.next_action(position).unwrap() {
//!     Action::Look => {
//!         // Ask the world for a view and feed it back.
//!         bot.observe("#####\n#...#\n#.B.#\n#...#\n#####");
//!     }
//!     Action::Move(direction) => {
//!         // Hand the move to the world; outcomes are not fed back.
//!         let _ = direction;
//!     }
//! }
//! ```

pub mod bot;
pub mod error;
pub mod geometry;
pub mod search;
pub mod tile;
pub mod view;

pub use bot::{Action, Bot, BotConfig};
pub use error::{BotError, Result};
pub use geometry::{Direction, Offset, Position};
pub use tile::Tile;
pub use view::{LocalView, VIEW_RADIUS, VIEW_SPAN};
