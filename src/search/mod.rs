pub mod heuristics;
mod plan;
mod search_error;
mod search_node;
mod search_problem;
mod search_space;
mod search_statistics;
pub mod search_engines;
mod validate;
mod verbosity;

pub use heuristics::{Heuristic, HeuristicName, HeuristicValue, ZeroHeuristic};
pub use plan::Plan;
pub use search_error::SearchError;
pub use search_node::{NodeId, SearchNode, NO_NODE};
pub use search_problem::SearchProblem;
pub use search_space::SearchSpace;
pub use search_statistics::SearchStatistics;
pub use validate::{validate, ValidationError};
pub use verbosity::Verbosity;
