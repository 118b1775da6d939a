//! Best-first path search over a single local view.
//!
//! The pipeline is deliberately small: [`SearchGrid`] freezes one view into
//! a per-cell cost model, [`search`] runs A* over it, and the resulting move
//! sequence is handed back to the decision loop. A grid lives for exactly
//! one search invocation and is discarded afterwards.

mod astar;
mod grid;

pub use astar::search;
pub use grid::{GridCoord, SearchCell, SearchGrid};
