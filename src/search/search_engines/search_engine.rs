use crate::search::{
    search_engines::{graph_search::graph_search, AStar, Frontier, BFS, DFS, GBFS, UCS},
    Heuristic, HeuristicValue, Plan, SearchError, SearchProblem, SearchStatistics,
};
use serde::Deserialize;
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult<A> {
    /// The search was successful
    Success(Plan<A>),
    /// The frontier ran empty before a goal was found
    Unsolvable,
}

impl<A> SearchResult<A> {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResult::Success(_))
    }

    pub fn into_plan(self) -> Option<Plan<A>> {
        match self {
            SearchResult::Success(plan) => Some(plan),
            SearchResult::Unsolvable => None,
        }
    }
}

/// How an engine treats a successor whose state has been seen before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuplicatePolicy {
    /// A state is put on the frontier at most once; successors that are
    /// explored or already waiting on the frontier are dropped.
    EnqueueOnce,
    /// Every successor is put on the frontier; entries whose state has been
    /// explored are dropped when they come off the frontier.
    AllowDuplicates,
    /// Explored successors are dropped, others are put on the frontier unless
    /// their state was already enqueued with a priority at most as low.
    EnqueueIfImproved,
}

/// The knobs that turn the shared graph search into a concrete algorithm.
pub trait SearchStrategy {
    type Frontier: Frontier;

    fn name(&self) -> &'static str;

    fn duplicate_policy(&self) -> DuplicatePolicy;

    /// Whether successors are goal tested as soon as they are generated, on
    /// top of the goal test every node gets when it is expanded.
    fn goal_test_on_generation(&self) -> bool {
        false
    }

    /// Whether path cost is accumulated from the problem's step costs. When
    /// it is not, every step counts as 1 and the problem's costs are never
    /// queried.
    fn tracks_path_cost(&self) -> bool {
        false
    }

    fn uses_heuristic(&self) -> bool {
        false
    }

    /// The frontier priority of a node with cost `g` and heuristic value `h`,
    /// lower is expanded first.
    fn priority(&self, g: HeuristicValue, h: HeuristicValue) -> HeuristicValue;
}

pub trait SearchEngine {
    /// Search for a plan from `initial_state`. Every call starts from an
    /// empty frontier and explored set. Uninformed engines never evaluate
    /// `heuristic`.
    fn search<P: SearchProblem>(
        &self,
        problem: &P,
        initial_state: P::State,
        heuristic: &mut dyn Heuristic<P>,
    ) -> Result<(SearchResult<P::Action>, SearchStatistics), SearchError>;
}

impl<T: SearchStrategy> SearchEngine for T {
    fn search<P: SearchProblem>(
        &self,
        problem: &P,
        initial_state: P::State,
        heuristic: &mut dyn Heuristic<P>,
    ) -> Result<(SearchResult<P::Action>, SearchStatistics), SearchError> {
        graph_search(self, problem, initial_state, heuristic)
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first search, returns a plan with the fewest actions.")]
    Bfs,
    #[clap(help = "Depth first search.")]
    Dfs,
    #[clap(help = "Uniform cost search, returns a cheapest plan.")]
    Ucs,
    #[clap(help = "Greedy best first search on the heuristic value.")]
    Gbfs,
    #[clap(
        name = "astar",
        help = "A* search, returns a cheapest plan if the heuristic is admissible and consistent."
    )]
    #[serde(rename = "astar")]
    AStar,
}

impl SearchEngineName {
    pub fn search<P: SearchProblem>(
        &self,
        problem: &P,
        initial_state: P::State,
        heuristic: &mut dyn Heuristic<P>,
    ) -> Result<(SearchResult<P::Action>, SearchStatistics), SearchError> {
        match self {
            SearchEngineName::Bfs => BFS::new().search(problem, initial_state, heuristic),
            SearchEngineName::Dfs => DFS::new().search(problem, initial_state, heuristic),
            SearchEngineName::Ucs => UCS::new().search(problem, initial_state, heuristic),
            SearchEngineName::Gbfs => GBFS::new().search(problem, initial_state, heuristic),
            SearchEngineName::AStar => AStar::new().search(problem, initial_state, heuristic),
        }
    }

    pub fn is_informed(&self) -> bool {
        matches!(self, SearchEngineName::Gbfs | SearchEngineName::AStar)
    }
}

impl Display for SearchEngineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SearchEngineName::Bfs => "bfs",
            SearchEngineName::Dfs => "dfs",
            SearchEngineName::Ucs => "ucs",
            SearchEngineName::Gbfs => "gbfs",
            SearchEngineName::AStar => "astar",
        };
        write!(f, "{}", name)
    }
}
