use crate::search::SearchProblem;
use std::cell::RefCell;

pub const PARKING_EASY_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/parking/easy.txt"
));

pub const PARKING_SWAP_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/parking/swap.txt"
));

pub const PARKING_BLOCKED_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/parking/blocked.txt"
));

pub const ROUTE_DETOUR_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/route/detour.txt"
));

pub const ROUTE_ROMANIA_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/route/romania.txt"
));

pub const ROUTE_ISLANDS_TEXT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/benchmarks/route/islands.txt"
));

/// A small explicit graph. States are node indices and actions are edge
/// indices; the actions at a node are its outgoing edges in the order they
/// were given. Every call to `actions` is recorded so tests can check which
/// states an engine expanded.
#[derive(Debug)]
pub struct WeightedGraph {
    initial: usize,
    goals: Vec<usize>,
    edges: Vec<(usize, usize, f64)>,
    expansions: RefCell<Vec<usize>>,
}

impl WeightedGraph {
    pub fn new(initial: usize, goals: &[usize], edges: &[(usize, usize, f64)]) -> Self {
        Self {
            initial,
            goals: goals.to_vec(),
            edges: edges.to_vec(),
            expansions: RefCell::new(vec![]),
        }
    }

    /// Nodes `0..n` in a line with unit cost edges both ways, goal `n - 1`.
    pub fn line(n: usize) -> Self {
        let mut edges = vec![];
        for i in 0..n - 1 {
            edges.push((i, i + 1, 1.));
            edges.push((i + 1, i, 1.));
        }
        Self::new(0, &[n - 1], &edges)
    }

    /// A four-connected `width` x `height` grid with unit cost edges, node
    /// `y * width + x`, starting in the top left corner.
    pub fn grid(width: usize, height: usize, goals: &[usize]) -> Self {
        let mut edges = vec![];
        for y in 0..height {
            for x in 0..width {
                let node = y * width + x;
                if x + 1 < width {
                    edges.push((node, node + 1, 1.));
                }
                if y + 1 < height {
                    edges.push((node, node + width, 1.));
                }
                if x > 0 {
                    edges.push((node, node - 1, 1.));
                }
                if y > 0 {
                    edges.push((node, node - width, 1.));
                }
            }
        }
        Self::new(0, goals, &edges)
    }

    pub fn num_states(&self) -> usize {
        self.edges
            .iter()
            .map(|&(from, to, _)| from.max(to) + 1)
            .max()
            .unwrap_or(0)
    }

    pub fn expansions(&self) -> Vec<usize> {
        self.expansions.borrow().clone()
    }
}

impl SearchProblem for WeightedGraph {
    type State = usize;
    type Action = usize;

    fn initial_state(&self) -> usize {
        self.initial
    }

    fn is_goal(&self, state: &usize) -> bool {
        self.goals.contains(state)
    }

    fn actions(&self, state: &usize) -> Vec<usize> {
        self.expansions.borrow_mut().push(*state);
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, edge)| edge.0 == *state)
            .map(|(index, _)| index)
            .collect()
    }

    fn successor(&self, _state: &usize, action: &usize) -> usize {
        self.edges[*action].1
    }

    fn cost(&self, _state: &usize, action: &usize) -> f64 {
        self.edges[*action].2
    }
}

/// start -> Y costs 1 (edge 0), start -> X costs 5 (edge 1), X -> goal costs
/// 1 (edge 2) and Y -> goal costs 10 (edge 3). Nodes are start 0, X 1, Y 2
/// and goal 3.
pub fn weighted_detour_problem() -> WeightedGraph {
    WeightedGraph::new(0, &[3], &[(0, 2, 1.), (0, 1, 5.), (1, 3, 1.), (2, 3, 10.)])
}
