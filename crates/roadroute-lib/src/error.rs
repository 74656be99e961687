use thiserror::Error;

use crate::graph::CityId;

/// Convenient result alias for the roadroute library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Raised when adding a city whose identifier is already present.
    #[error("duplicate city id {id}")]
    DuplicateCity { id: CityId },

    /// Raised when a city identifier is not present in the graph.
    #[error("unknown city id {id}")]
    UnknownCity { id: CityId },

    /// Raised when no cost-feasible route exists between two cities. This is
    /// an expected negative result for well-formed queries, not a fault.
    #[error("no route found between {start} and {goal}")]
    NoPathFound { start: CityId, goal: CityId },

    /// Raised when a search settles more nodes than the configured budget
    /// allows. Fatal to that query only.
    #[error("search budget exceeded after {expanded} expansions")]
    SearchBudgetExceeded { expanded: usize },
}
