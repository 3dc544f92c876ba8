//! Search engines. All five engines run the same graph search and differ only
//! in their [`SearchStrategy`]: the frontier they use, how they prioritise
//! entries and how they treat states they have seen before.

mod astar;
mod bfs;
mod dfs;
mod frontier;
mod gbfs;
mod graph_search;
mod search_engine;
mod ucs;

pub use astar::AStar;
pub use bfs::BFS;
pub use dfs::DFS;
pub use frontier::{FifoFrontier, Frontier, LifoFrontier, PriorityFrontier};
pub use gbfs::GBFS;
pub use search_engine::{
    DuplicatePolicy, SearchEngine, SearchEngineName, SearchResult, SearchStrategy,
};
pub use ucs::UCS;

use crate::search::{Heuristic, Plan, SearchError, SearchProblem, ZeroHeuristic};

fn plan_only<P: SearchProblem>(
    engine: &impl SearchEngine,
    problem: &P,
    initial_state: P::State,
    heuristic: &mut dyn Heuristic<P>,
) -> Result<Option<Plan<P::Action>>, SearchError> {
    let (result, _statistics) = engine.search(problem, initial_state, heuristic)?;
    Ok(result.into_plan())
}

/// Breadth first search from `initial_state`. `Ok(None)` means no goal is
/// reachable.
pub fn breadth_first_search<P: SearchProblem>(
    problem: &P,
    initial_state: P::State,
) -> Result<Option<Plan<P::Action>>, SearchError> {
    plan_only(&BFS::new(), problem, initial_state, &mut ZeroHeuristic::new())
}

/// Depth first search from `initial_state`.
pub fn depth_first_search<P: SearchProblem>(
    problem: &P,
    initial_state: P::State,
) -> Result<Option<Plan<P::Action>>, SearchError> {
    plan_only(&DFS::new(), problem, initial_state, &mut ZeroHeuristic::new())
}

/// Uniform cost search from `initial_state`.
pub fn uniform_cost_search<P: SearchProblem>(
    problem: &P,
    initial_state: P::State,
) -> Result<Option<Plan<P::Action>>, SearchError> {
    plan_only(&UCS::new(), problem, initial_state, &mut ZeroHeuristic::new())
}

/// Greedy best first search from `initial_state` guided by `heuristic`.
pub fn greedy_best_first_search<P, H>(
    problem: &P,
    initial_state: P::State,
    mut heuristic: H,
) -> Result<Option<Plan<P::Action>>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    plan_only(&GBFS::new(), problem, initial_state, &mut heuristic)
}

/// A* search from `initial_state` guided by `heuristic`.
pub fn astar_search<P, H>(
    problem: &P,
    initial_state: P::State,
    mut heuristic: H,
) -> Result<Option<Plan<P::Action>>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P>,
{
    plan_only(&AStar::new(), problem, initial_state, &mut heuristic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::validate;
    use crate::test_utils::*;
    use std::collections::HashSet;

    const ALL_ENGINES: [SearchEngineName; 5] = [
        SearchEngineName::Bfs,
        SearchEngineName::Dfs,
        SearchEngineName::Ucs,
        SearchEngineName::Gbfs,
        SearchEngineName::AStar,
    ];

    fn run(engine: SearchEngineName, problem: &WeightedGraph) -> SearchResult<usize> {
        let (result, _) = engine
            .search(problem, problem.initial_state(), &mut ZeroHeuristic::new())
            .unwrap();
        result
    }

    #[test]
    fn line_is_solved_by_every_engine() {
        for engine in ALL_ENGINES {
            let problem = WeightedGraph::line(4);
            let plan = run(engine, &problem).into_plan().unwrap();
            // A -> B -> C -> D
            assert_eq!(plan.steps(), &[0, 2, 4], "{}", engine);
        }
    }

    #[test]
    fn free_functions_agree_with_engines() {
        let problem = weighted_detour_problem();
        let zero = |_: &WeightedGraph, _: &usize| 0.;
        let expected = vec![1, 2];
        assert_eq!(
            uniform_cost_search(&problem, 0).unwrap().unwrap().steps(),
            &expected[..]
        );
        assert_eq!(
            astar_search(&problem, 0, zero).unwrap().unwrap().steps(),
            &expected[..]
        );
        assert_eq!(
            breadth_first_search(&problem, 0).unwrap().unwrap().steps(),
            &[0, 3]
        );
        assert!(depth_first_search(&problem, 0).unwrap().is_some());
        assert!(greedy_best_first_search(&problem, 0, ZeroHeuristic::new())
            .unwrap()
            .is_some());
    }

    #[test]
    fn initial_goal_gives_empty_plan() {
        for engine in ALL_ENGINES {
            let problem = WeightedGraph::new(0, &[0], &[(0, 1, 1.)]);
            let plan = run(engine, &problem).into_plan().unwrap();
            assert!(plan.is_empty(), "{}", engine);
            assert!(problem.expansions().is_empty(), "{}", engine);
        }
    }

    #[test]
    fn unreachable_goal_is_unsolvable() {
        for engine in ALL_ENGINES {
            // {0, 1, 2} form a cycle, the goal 4 only connects to 3.
            let problem = WeightedGraph::new(
                0,
                &[4],
                &[(0, 1, 1.), (1, 2, 1.), (2, 0, 1.), (3, 4, 1.), (4, 3, 1.)],
            );
            let (result, statistics) = engine
                .search(&problem, 0, &mut ZeroHeuristic::new())
                .unwrap();
            assert_eq!(result, SearchResult::Unsolvable, "{}", engine);
            assert_eq!(statistics.expanded_nodes(), 3, "{}", engine);
        }
    }

    #[test]
    fn states_are_expanded_at_most_once() {
        for engine in ALL_ENGINES {
            let problem = WeightedGraph::grid(4, 4, &[]);
            let result = run(engine, &problem);
            assert!(!result.is_success(), "{}", engine);
            let expansions = problem.expansions();
            let unique: HashSet<usize> = expansions.iter().copied().collect();
            assert_eq!(unique.len(), expansions.len(), "{}", engine);
            assert_eq!(unique.len(), 16, "{}", engine);
        }
    }

    #[test]
    fn plans_are_valid_and_deterministic() {
        for engine in ALL_ENGINES {
            let problem = WeightedGraph::grid(5, 4, &[19]);
            let first = run(engine, &problem).into_plan().unwrap();
            validate(&first, &problem, &problem.initial_state()).unwrap();
            for _ in 0..3 {
                let again = run(engine, &WeightedGraph::grid(5, 4, &[19]))
                    .into_plan()
                    .unwrap();
                assert_eq!(first, again, "{}", engine);
            }
        }
    }

    #[test]
    fn bfs_finds_minimum_action_count() {
        let problem = WeightedGraph::grid(5, 4, &[19]);
        let plan = breadth_first_search(&problem, 0).unwrap().unwrap();
        // Manhattan distance from the top left to the bottom right corner.
        assert_eq!(plan.len(), 7);
    }

    #[test]
    fn ucs_and_astar_agree_on_optimal_cost() {
        let problem = weighted_detour_problem();
        let heuristic = |_: &WeightedGraph, s: &usize| if *s == 3 { 0. } else { 1. };
        let ucs = uniform_cost_search(&problem, 0).unwrap().unwrap();
        let astar = astar_search(&problem, 0, heuristic).unwrap().unwrap();
        assert_eq!(ucs.cost(&problem, &0).unwrap(), 6.);
        assert_eq!(astar.cost(&problem, &0).unwrap(), 6.);
    }
}
