//! The interface a domain must implement to be searched. States and actions
//! are opaque to the search engines; the only structure assumed of a state is
//! that it can be cloned, compared and hashed, so that it can be kept in the
//! explored set and the best-known cost map.

use std::fmt::Debug;
use std::hash::Hash;

pub trait SearchProblem {
    /// A state of the problem. States are treated as immutable values.
    type State: Clone + Eq + Hash + Debug;
    /// An action identifying a transition between two states.
    type Action: Clone + Debug;

    fn initial_state(&self) -> Self::State;

    fn is_goal(&self, state: &Self::State) -> bool;

    /// All actions applicable in `state`. The order of the returned actions
    /// is used to break ties by engines that do not re-sort successors.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The state reached by applying `action` in `state`.
    fn successor(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// The non-negative cost of applying `action` in `state`. Only engines
    /// that track path cost ever call this.
    fn cost(&self, state: &Self::State, action: &Self::Action) -> f64;
}
