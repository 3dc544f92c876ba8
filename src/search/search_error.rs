use thiserror::Error;

/// Errors raised when a problem definition breaks the contract the engines
/// rely on. Failing to find a plan is not an error, see
/// [`SearchResult::Unsolvable`](crate::search::search_engines::SearchResult).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    #[error("invalid step cost {cost} for action {action}: costs must be finite and non-negative")]
    InvalidStepCost { cost: f64, action: String },
    #[error("heuristic returned NaN for state {state}")]
    InvalidHeuristicValue { state: String },
}
