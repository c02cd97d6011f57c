//! Error types. Note that an unreachable goal is not an error: it is a [Plan](crate::Plan)
//! with `found == false`.

use crate::node::Coord;

/// Errors returned by [AstarPlanner::plan](crate::AstarPlanner::plan).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
    /// Start or goal lies outside the `size`×`size` grid.
    #[error("{which} {coord} is outside the {size}x{size} grid")]
    OutOfBounds {
        which: Endpoint,
        coord: Coord,
        size: usize,
    },

    /// Start or goal lies on an obstacle.
    #[error("{which} {coord} is an obstacle")]
    BlockedEndpoint { which: Endpoint, coord: Coord },

    /// The configured expansion budget ran out before the search finished.
    #[error("search stopped after expanding {limit} nodes")]
    ExpansionLimit { limit: usize },

    /// A parent link could not be followed back to the start. This points at a bookkeeping bug,
    /// not at a missing path.
    #[error("parent chain broken at {cell} while reconstructing the path")]
    BrokenParentChain { cell: Coord },
}

/// Which end of a search a [PlanError] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    Goal,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Errors from building an [OccupancyGrid](crate::OccupancyGrid).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one cell")]
    Empty,

    #[error("grid is not square: row {row} has {len} cells, expected {expected}")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("unexpected character {ch:?} at row {row}, column {column}")]
    InvalidCell { ch: char, row: usize, column: usize },
}
