//! Breadth first search

use crate::search::{
    search_engines::{DuplicatePolicy, FifoFrontier, SearchStrategy},
    HeuristicValue,
};

/// Breadth first search. Each state enters the frontier at most once and
/// successors are goal tested as soon as they are generated, so the plan
/// returned has the fewest actions of any plan.
#[derive(Debug, Clone, Copy, Default)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for BFS {
    type Frontier = FifoFrontier;

    fn name(&self) -> &'static str {
        "breadth first search"
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::EnqueueOnce
    }

    fn goal_test_on_generation(&self) -> bool {
        true
    }

    fn priority(&self, g: HeuristicValue, _h: HeuristicValue) -> HeuristicValue {
        g
    }
}
