//! Uniform cost search

use crate::search::{
    search_engines::{DuplicatePolicy, PriorityFrontier, SearchStrategy},
    HeuristicValue,
};

/// Uniform cost search, expanding the node with the lowest path cost first.
/// Returns a cheapest plan as long as step costs are non-negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct UCS {}

impl UCS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for UCS {
    type Frontier = PriorityFrontier;

    fn name(&self) -> &'static str {
        "uniform cost search"
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::EnqueueIfImproved
    }

    fn tracks_path_cost(&self) -> bool {
        true
    }

    fn priority(&self, g: HeuristicValue, _h: HeuristicValue) -> HeuristicValue {
        g
    }
}
