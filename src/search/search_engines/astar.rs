//! A* search

use crate::search::{
    search_engines::{DuplicatePolicy, PriorityFrontier, SearchStrategy},
    HeuristicValue,
};

/// A* search, expanding the node with the lowest `g + h` first. With an
/// admissible and consistent heuristic the plan returned is a cheapest one;
/// explored states are never reopened, so an inconsistent heuristic may cost
/// optimality.
#[derive(Debug, Clone, Copy, Default)]
pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchStrategy for AStar {
    type Frontier = PriorityFrontier;

    fn name(&self) -> &'static str {
        "A* search"
    }

    fn duplicate_policy(&self) -> DuplicatePolicy {
        DuplicatePolicy::EnqueueIfImproved
    }

    fn tracks_path_cost(&self) -> bool {
        true
    }

    fn uses_heuristic(&self) -> bool {
        true
    }

    fn priority(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue {
        g + h
    }
}
