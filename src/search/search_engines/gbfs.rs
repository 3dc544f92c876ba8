//! This module implements the greedy best-first search algorithm.

use crate::search::{
    search_engines::{DuplicatePolicy, PriorityFrontier, SearchStrategy},
    HeuristicValue,
};

/// Greedy best first search, expanding the node with the lowest heuristic
/// value first. Path costs are not accumulated and the plan found need not be
/// cheapest.
#[derive(Debug, Clone, Copy, Default)]
pub struct GBFS {}

impl GBFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for GBFS {
    type Frontier = PriorityFrontier;

    fn name(&self) -> &'static str {
        "greedy best first search"
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::EnqueueIfImproved
    }

    fn uses_heuristic(&self) -> bool {
        true
    }

    fn priority(&self, _g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        h
    }
}
