//! Route finding on a weighted road map: drive from the start node to any of
//! the goal nodes. See [`parser`] for the text format.

mod parser;

use crate::domains::{Domain, ParseError};
use crate::search::{Heuristic, HeuristicValue, SearchProblem};
use parser::{parse_declarations, Declaration};
use std::collections::HashMap;

/// Index of a road in a [`RouteMap`]. A road given with `link` is stored as
/// two roads, one per direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RoadId(usize);

#[derive(Debug, Clone, PartialEq)]
struct Road {
    from: usize,
    to: usize,
    cost: f64,
}

#[derive(Debug, Clone)]
pub struct RouteMap {
    names: Vec<String>,
    indices: HashMap<String, usize>,
    start: usize,
    goals: Vec<bool>,
    roads: Vec<Road>,
    /// Outgoing roads of every node, in declaration order.
    outgoing: Vec<Vec<RoadId>>,
    estimates: Vec<f64>,
}

impl RouteMap {
    fn intern(&mut self, name: &str) -> usize {
        if let Some(&index) = self.indices.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.indices.insert(name.to_string(), index);
        self.goals.push(false);
        self.outgoing.push(vec![]);
        self.estimates.push(0.);
        index
    }

    fn add_road(&mut self, from: usize, to: usize, cost: f64) {
        let road_id = RoadId(self.roads.len());
        self.roads.push(Road { from, to, cost });
        self.outgoing[from].push(road_id);
    }

    pub fn num_nodes(&self) -> usize {
        self.names.len()
    }

    pub fn node(&self, name: &str) -> Option<usize> {
        self.indices.get(name).copied()
    }

    pub fn name(&self, node: usize) -> &str {
        &self.names[node]
    }

    pub fn estimate(&self, node: usize) -> f64 {
        self.estimates[node]
    }
}

impl SearchProblem for RouteMap {
    type State = usize;
    type Action = RoadId;

    fn initial_state(&self) -> usize {
        self.start
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals[*state]
    }

    fn actions(&self, state: &usize) -> Vec<RoadId> {
        self.outgoing[*state].clone()
    }

    fn successor(&self, _state: &usize, action: &RoadId) -> usize {
        self.roads[action.0].to
    }

    fn cost(&self, _state: &usize, action: &RoadId) -> f64 {
        self.roads[action.0].cost
    }
}

impl Domain for RouteMap {
    type DomainHeuristic = EstimateTable;

    fn from_text(text: &str) -> Result<Self, ParseError> {
        let mut map = RouteMap {
            names: vec![],
            indices: HashMap::new(),
            start: 0,
            goals: vec![],
            roads: vec![],
            outgoing: vec![],
            estimates: vec![],
        };
        let mut start = None;

        for (line, declaration) in parse_declarations(text)? {
            match declaration {
                Declaration::Start(name) => {
                    if start.replace(map.intern(name)).is_some() {
                        return Err(ParseError::DuplicateStart { line });
                    }
                }
                Declaration::Goal(name) => {
                    let node = map.intern(name);
                    map.goals[node] = true;
                }
                Declaration::Node(name) => {
                    map.intern(name);
                }
                Declaration::Road {
                    from,
                    to,
                    cost,
                    both_ways,
                } => {
                    if !cost.is_finite() || cost < 0. {
                        return Err(ParseError::InvalidCost { line, value: cost });
                    }
                    let from = map.intern(from);
                    let to = map.intern(to);
                    map.add_road(from, to, cost);
                    if both_ways {
                        map.add_road(to, from, cost);
                    }
                }
                Declaration::Estimate { node, value } => {
                    if value.is_nan() || value < 0. {
                        return Err(ParseError::InvalidCost { line, value });
                    }
                    let node = map.intern(node);
                    map.estimates[node] = value;
                }
            }
        }

        map.start = start.ok_or(ParseError::MissingStart)?;
        Ok(map)
    }

    fn heuristic(&self) -> EstimateTable {
        EstimateTable::new(self)
    }

    fn describe_action(&self, action: &RoadId) -> String {
        let road = &self.roads[action.0];
        format!(
            "{} -> {} ({})",
            self.names[road.from], self.names[road.to], road.cost
        )
    }
}

/// The heuristic given by the `estimate` lines of a route map, zero for nodes
/// without an estimate.
#[derive(Debug, Clone)]
pub struct EstimateTable {
    estimates: Vec<f64>,
}

impl EstimateTable {
    pub fn new(map: &RouteMap) -> Self {
        Self {
            estimates: map.estimates.clone(),
        }
    }
}

impl Heuristic<RouteMap> for EstimateTable {
    fn evaluate(&mut self, state: &usize, _problem: &RouteMap) -> HeuristicValue {
        self.estimates[*state].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::{
        astar_search, breadth_first_search, depth_first_search, greedy_best_first_search,
        uniform_cost_search, SearchEngineName,
    };
    use crate::search::{validate, Plan, ZeroHeuristic};
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn route(map: &RouteMap, plan: &Plan<RoadId>) -> Vec<String> {
        let mut names = vec![map.name(map.initial_state()).to_string()];
        let mut state = map.initial_state();
        for action in plan.steps() {
            state = map.successor(&state, action);
            names.push(map.name(state).to_string());
        }
        names
    }

    #[test]
    fn from_text_builds_graph() {
        let map = RouteMap::from_text(ROUTE_DETOUR_TEXT).unwrap();
        assert_eq!(map.num_nodes(), 4);
        assert_eq!(map.name(map.initial_state()), "start");
        let goal = map.node("goal").unwrap();
        assert!(map.is_goal(&goal));
        let actions = map.actions(&map.initial_state());
        assert_eq!(
            actions
                .iter()
                .map(|a| map.describe_action(a))
                .collect::<Vec<_>>(),
            vec!["start -> Y (1)", "start -> X (5)"]
        );
    }

    #[test]
    fn links_go_both_ways() {
        let map = RouteMap::from_text("start a\ngoal b\nlink a b 3\n").unwrap();
        let b = map.node("b").unwrap();
        assert_eq!(map.actions(&b).len(), 1);
        assert_eq!(map.successor(&b, &map.actions(&b)[0]), 0);
    }

    #[test]
    fn from_text_rejects_bad_maps() {
        assert!(matches!(
            RouteMap::from_text("goal a\n"),
            Err(ParseError::MissingStart)
        ));
        assert!(matches!(
            RouteMap::from_text("start a\nstart b\n"),
            Err(ParseError::DuplicateStart { line: 2 })
        ));
        assert!(matches!(
            RouteMap::from_text("start a\nedge a b -1\n"),
            Err(ParseError::InvalidCost { line: 2, .. })
        ));
        assert!(matches!(
            RouteMap::from_text("start a\nestimate a -2\n"),
            Err(ParseError::InvalidCost { line: 2, .. })
        ));
    }

    #[test]
    fn detour_is_found_by_cost_aware_engines() {
        let map = RouteMap::from_text(ROUTE_DETOUR_TEXT).unwrap();
        let start = map.initial_state();

        let ucs = uniform_cost_search(&map, start).unwrap().unwrap();
        assert_eq!(route(&map, &ucs), vec!["start", "X", "goal"]);
        assert_approx_eq!(ucs.cost(&map, &start).unwrap(), 6.);

        let astar = astar_search(&map, start, ZeroHeuristic::new()).unwrap().unwrap();
        assert_eq!(ucs, astar);

        let bfs = breadth_first_search(&map, start).unwrap().unwrap();
        assert_eq!(route(&map, &bfs), vec!["start", "Y", "goal"]);
    }

    #[test]
    fn romania_shortest_route() {
        let map = RouteMap::from_text(ROUTE_ROMANIA_TEXT).unwrap();
        let start = map.initial_state();
        let expected = vec!["Arad", "Sibiu", "Rimnicu_Vilcea", "Pitesti", "Bucharest"];

        let ucs = uniform_cost_search(&map, start).unwrap().unwrap();
        assert_eq!(route(&map, &ucs), expected);
        assert_approx_eq!(ucs.cost(&map, &start).unwrap(), 418.);

        let astar = astar_search(&map, start, map.heuristic()).unwrap().unwrap();
        assert_eq!(route(&map, &astar), expected);

        // Straight line distances lure greedy search over Fagaras.
        let greedy = greedy_best_first_search(&map, start, map.heuristic())
            .unwrap()
            .unwrap();
        assert_eq!(route(&map, &greedy), vec!["Arad", "Sibiu", "Fagaras", "Bucharest"]);
        assert_approx_eq!(greedy.cost(&map, &start).unwrap(), 450.);

        let bfs = breadth_first_search(&map, start).unwrap().unwrap();
        assert_eq!(bfs.len(), 3);

        let dfs = depth_first_search(&map, start).unwrap().unwrap();
        validate(&dfs, &map, &start).unwrap();
    }

    #[test]
    fn islands_are_unsolvable_for_every_engine() {
        let map = RouteMap::from_text(ROUTE_ISLANDS_TEXT).unwrap();
        for engine in [
            SearchEngineName::Bfs,
            SearchEngineName::Dfs,
            SearchEngineName::Ucs,
            SearchEngineName::Gbfs,
            SearchEngineName::AStar,
        ] {
            let (result, _) = engine
                .search(&map, map.initial_state(), &mut map.heuristic())
                .unwrap();
            assert!(result.into_plan().is_none(), "{}", engine);
        }
    }
}
