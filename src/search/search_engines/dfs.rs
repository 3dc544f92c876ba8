//! Depth first search

use crate::search::{
    search_engines::{DuplicatePolicy, LifoFrontier, SearchStrategy},
    HeuristicValue,
};

/// Depth first search. Successors are pushed even if their state has been
/// seen before; stale entries are dropped when they are popped. No guarantee
/// is made about the quality of the plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct DFS {}

impl DFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for DFS {
    type Frontier = LifoFrontier;

    fn name(&self) -> &'static str {
        "depth first search"
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::AllowDuplicates
    }

    fn priority(&self, g: HeuristicValue, _h: HeuristicValue) -> HeuristicValue {
        g
    }
}
