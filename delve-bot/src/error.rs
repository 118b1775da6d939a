//! Error types for the bot pipeline.

use thiserror::Error;

use crate::geometry::Position;

/// Bot pipeline error type.
#[derive(Error, Debug)]
pub enum BotError {
    /// A look response could not be parsed into a local view. Non-fatal:
    /// the bot degrades to looking again next turn.
    #[error("Malformed view: {0}")]
    MalformedView(String),

    /// The goal handed to the search lies outside the visible window.
    /// Callers must check containment before building a search grid.
    #[error("Goal ({}, {}) outside the visible window", .goal.x, .goal.y)]
    GoalOutsideWindow { goal: Position },

    /// A predecessor chain contained a non-unit step. Indicates grid
    /// corruption and should never occur under correct relaxation.
    #[error("Non-adjacent step in reconstructed path: ({}, {}) -> ({}, {})", .from.x, .from.y, .to.x, .to.y)]
    NonAdjacentStep { from: Position, to: Position },
}

pub type Result<T> = std::result::Result<T, BotError>;
