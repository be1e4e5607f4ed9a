use std::rc::Rc;

use crate::state::{State, StateIds};

/// All states one slide away from `state`, in the order [`Board::slides`]
/// lists the slides.
///
/// [`Board::slides`]: crate::board::Board::slides
pub fn get_successors(state: &Rc<State>, ids: &mut StateIds) -> Vec<State> {
    state
        .board()
        .slides()
        .into_iter()
        .map(|m| State::child(state, state.board().child(m.car, m.to), ids))
        .collect()
}

/// True once the goal car's leading cell sits on the exit coordinate.
pub fn is_goal(state: &State) -> bool {
    state.board().is_solved()
}
