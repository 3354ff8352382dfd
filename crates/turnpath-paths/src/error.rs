//! Error types for searches and reconstruction.

use std::fmt;

use turnpath_core::Point;

use crate::state::State;

/// Errors arising from solving or reconstructing paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The start state's cell is a wall or out of bounds.
    InvalidStart(State),
    /// No direction of the goal cell was reached.
    Unreachable {
        /// The goal cell.
        goal: Point,
    },
    /// The configured deadline passed before the search finished.
    DeadlineExceeded {
        /// States settled before giving up.
        settled: usize,
    },
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidStart(s) => write!(f, "start state {s} is not on an open tile"),
            Self::Unreachable { goal } => write!(f, "goal {goal} is unreachable"),
            Self::DeadlineExceeded { settled } => {
                write!(f, "search deadline exceeded after {settled} settled states")
            }
        }
    }
}

impl std::error::Error for PathError {}
