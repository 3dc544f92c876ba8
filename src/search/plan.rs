//! A plan is a sequence of actions that leads from an initial state to a goal
//! state. This module provides the [`Plan`] struct, which represents a plan.

use crate::search::{SearchError, SearchProblem};
use itertools::Itertools;
use std::fmt::{self, Display};
use std::ops::{Deref, DerefMut};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan<A> {
    steps: Vec<A>,
}

impl<A> Plan<A> {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<A>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[A] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The total cost of executing the plan from `initial_state`, summing the
    /// problem's step costs along the way.
    pub fn cost<P>(&self, problem: &P, initial_state: &P::State) -> Result<f64, SearchError>
    where
        P: SearchProblem<Action = A>,
        A: Clone + fmt::Debug,
    {
        let mut state = initial_state.clone();
        let mut total = 0.;
        for action in &self.steps {
            let cost = problem.cost(&state, action);
            if !cost.is_finite() || cost < 0. {
                return Err(SearchError::InvalidStepCost {
                    cost,
                    action: format!("{:?}", action),
                });
            }
            total += cost;
            state = problem.successor(&state, action);
        }
        Ok(total)
    }
}

impl<A: Display> Display for Plan<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join("\n"))
    }
}

impl<A> IntoIterator for Plan<A> {
    type Item = A;
    type IntoIter = std::vec::IntoIter<A>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl<A> Deref for Plan<A> {
    type Target = [A];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}

impl<A> DerefMut for Plan<A> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.steps
    }
}
