//! The traversal shared by every engine. The strategy picks the frontier, the
//! priority of each entry and how rediscovered states are handled; everything
//! else (goal testing, the explored set, path bookkeeping) lives here.

use crate::search::{
    search_engines::{DuplicatePolicy, Frontier, SearchResult, SearchStrategy},
    Heuristic, HeuristicValue, SearchError, SearchProblem, SearchSpace, SearchStatistics,
};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, trace};

pub(super) fn graph_search<St, P>(
    strategy: &St,
    problem: &P,
    initial_state: P::State,
    heuristic: &mut dyn Heuristic<P>,
) -> Result<(SearchResult<P::Action>, SearchStatistics), SearchError>
where
    St: SearchStrategy + ?Sized,
    P: SearchProblem,
{
    let mut statistics = SearchStatistics::new();
    info!(engine = strategy.name());
    let policy = strategy.duplicate_policy();

    let initial_h = evaluate(strategy, heuristic, problem, &initial_state, &mut statistics)?;
    let mut search_space: SearchSpace<P::State, P::Action> =
        SearchSpace::new(initial_state.clone(), initial_h);
    let mut frontier = St::Frontier::default();
    let mut explored: HashSet<P::State> = HashSet::new();
    // States currently waiting on the frontier, only kept for
    // `DuplicatePolicy::EnqueueOnce`.
    let mut in_frontier: HashSet<P::State> = HashSet::new();
    // Lowest priority each state was enqueued with, only kept for
    // `DuplicatePolicy::EnqueueIfImproved`.
    let mut best_known: HashMap<P::State, HeuristicValue> = HashMap::new();

    let root_id = search_space.get_root_node().get_node_id();
    let root_priority = strategy.priority((0.).into(), initial_h);
    match policy {
        DuplicatePolicy::EnqueueOnce => {
            in_frontier.insert(initial_state);
        }
        DuplicatePolicy::EnqueueIfImproved => {
            best_known.insert(initial_state, root_priority);
        }
        DuplicatePolicy::AllowDuplicates => {}
    }
    frontier.push(root_id, root_priority);
    statistics.increment_generated_nodes(1);

    while let Some(node_id) = frontier.pop() {
        let node = search_space.get_node(node_id);
        let state = node.get_state().clone();
        let g_value = node.get_g();

        if policy == DuplicatePolicy::EnqueueOnce {
            in_frontier.remove(&state);
        }
        if explored.contains(&state) {
            statistics.increment_skipped_duplicates();
            continue;
        }
        if problem.is_goal(&state) {
            debug!(plan_cost = g_value.into_inner(), "goal found on expansion");
            let plan = search_space.extract_plan(node_id);
            return Ok(finish(SearchResult::Success(plan), statistics));
        }

        trace!(?state, g = g_value.into_inner(), "expanding");
        explored.insert(state.clone());
        statistics.increment_expanded_nodes();

        let actions = problem.actions(&state);
        statistics.increment_generated_actions(actions.len());

        for action in actions {
            let successor = problem.successor(&state, &action);
            match policy {
                DuplicatePolicy::AllowDuplicates => {}
                DuplicatePolicy::EnqueueOnce => {
                    if explored.contains(&successor) || in_frontier.contains(&successor) {
                        continue;
                    }
                }
                DuplicatePolicy::EnqueueIfImproved => {
                    if explored.contains(&successor) {
                        continue;
                    }
                }
            }

            let step_cost = if strategy.tracks_path_cost() {
                checked_step_cost(problem, &state, &action)?
            } else {
                1.
            };
            let successor_g = g_value + step_cost;
            let successor_h = evaluate(strategy, heuristic, problem, &successor, &mut statistics)?;
            let priority = strategy.priority(successor_g, successor_h);

            match policy {
                DuplicatePolicy::EnqueueIfImproved => {
                    match best_known.get(&successor) {
                        Some(&best) if priority >= best => continue,
                        Some(_) => statistics.increment_reopened_nodes(),
                        None => {}
                    }
                    best_known.insert(successor.clone(), priority);
                }
                DuplicatePolicy::EnqueueOnce => {
                    in_frontier.insert(successor.clone());
                }
                DuplicatePolicy::AllowDuplicates => {}
            }

            let is_goal = strategy.goal_test_on_generation() && problem.is_goal(&successor);
            let child_id = search_space
                .insert_node(successor, action, node_id, successor_g, successor_h)
                .get_node_id();
            statistics.increment_generated_nodes(1);

            if is_goal {
                debug!(plan_cost = successor_g.into_inner(), "goal found on generation");
                let plan = search_space.extract_plan(child_id);
                return Ok(finish(SearchResult::Success(plan), statistics));
            }
            frontier.push(child_id, priority);
        }
    }

    Ok(finish(SearchResult::Unsolvable, statistics))
}

fn finish<A>(
    result: SearchResult<A>,
    statistics: SearchStatistics,
) -> (SearchResult<A>, SearchStatistics) {
    match &result {
        SearchResult::Success(plan) => info!(plan_length = plan.len(), "plan found"),
        SearchResult::Unsolvable => info!("frontier exhausted, no plan exists"),
    }
    statistics.finalise_search();
    (result, statistics)
}

fn evaluate<St, P>(
    strategy: &St,
    heuristic: &mut dyn Heuristic<P>,
    problem: &P,
    state: &P::State,
    statistics: &mut SearchStatistics,
) -> Result<HeuristicValue, SearchError>
where
    St: SearchStrategy + ?Sized,
    P: SearchProblem,
{
    if !strategy.uses_heuristic() {
        return Ok((0.).into());
    }
    let h_value = heuristic.evaluate(state, problem);
    if h_value.into_inner().is_nan() {
        return Err(SearchError::InvalidHeuristicValue {
            state: format!("{:?}", state),
        });
    }
    statistics.increment_evaluated_nodes();
    statistics.register_heuristic_value(h_value);
    Ok(h_value)
}

fn checked_step_cost<P: SearchProblem>(
    problem: &P,
    state: &P::State,
    action: &P::Action,
) -> Result<f64, SearchError> {
    let cost = problem.cost(state, action);
    if !cost.is_finite() || cost < 0. {
        return Err(SearchError::InvalidStepCost {
            cost,
            action: format!("{:?}", action),
        });
    }
    Ok(cost)
}
