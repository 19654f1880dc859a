use crucible_core::GridError;
use thiserror::Error;

/// Errors returned by the crucible search.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// `max_run` is smaller than `max(min_run, 1)`.
    #[error("invalid run limits: max_run {max_run} is below max(min_run {min_run}, 1)")]
    InvalidParameter { min_run: u32, max_run: u32 },

    /// The frontier ran dry without reaching the goal on a run of at least
    /// `min_run` steps.
    #[error("no path reaches the goal with runs between {min_run} and {max_run}")]
    NoPathFound { min_run: u32, max_run: u32 },

    /// The input text could not be turned into a grid.
    #[error(transparent)]
    Grid(#[from] GridError),
}
