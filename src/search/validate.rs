use crate::search::{Plan, SearchProblem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: action {action} is not applicable in state {state}")]
    NotApplicable {
        step: usize,
        action: String,
        state: String,
    },
    #[error("plan does not reach a goal state, final state is: {state}")]
    GoalNotReached { state: String },
}

/// Check that `plan` can be executed from `initial_state` and ends in a goal.
pub fn validate<P>(
    plan: &Plan<P::Action>,
    problem: &P,
    initial_state: &P::State,
) -> Result<(), ValidationError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut cur_state = initial_state.clone();
    for (step, action) in plan.steps().iter().enumerate() {
        let applicable_actions = problem.actions(&cur_state);
        if !applicable_actions.contains(action) {
            return Err(ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
                state: format!("{:?}", cur_state),
            });
        }

        cur_state = problem.successor(&cur_state, action);
    }

    if !problem.is_goal(&cur_state) {
        return Err(ValidationError::GoalNotReached {
            state: format!("{:?}", cur_state),
        });
    }

    Ok(())
}
