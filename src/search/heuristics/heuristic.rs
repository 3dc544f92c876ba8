use crate::search::SearchProblem;
use ordered_float::OrderedFloat;
use serde::Deserialize;

pub type HeuristicValue = OrderedFloat<f64>;

/// An estimate of the remaining cost from a state to the nearest goal.
/// Admissibility and consistency are assumed by the optimal engines but never
/// checked.
pub trait Heuristic<P: SearchProblem> {
    /// Evaluate the given state with respect to the given problem.
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue;

    /// Evaluate a batch of states. The default implementation simply calls
    /// `evaluate` for each state sequentially.
    fn evaluate_batch(&mut self, states: &[P::State], problem: &P) -> Vec<HeuristicValue> {
        states
            .iter()
            .map(|state| self.evaluate(state, problem))
            .collect()
    }
}

/// Plain functions of the form `heuristic(problem, state)` are heuristics.
impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: FnMut(&P, &P::State) -> f64,
{
    fn evaluate(&mut self, state: &P::State, problem: &P) -> HeuristicValue {
        OrderedFloat(self(problem, state))
    }
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[clap(rename_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(name = "zero", help = "The zero heuristic, turns A* into uniform cost search.")]
    Zero,
    #[clap(help = "The heuristic shipped with the chosen domain.")]
    Domain,
}
