use std::rc::Rc;

use crate::board::Board;
use crate::heuristic::Heuristic;

/// Hands out State ids in construction order. One counter belongs to one
/// search, so repeated searches over the same board number their states alike.
#[derive(Debug, Default)]
pub struct StateIds {
    next: u64,
}

impl StateIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

/// A search node.
///
/// Two states are equal when their boards are; `id` is only used to break ties.
#[derive(Debug)]
pub struct State {
    board: Board,
    hfn: Heuristic,
    f: u32,
    depth: u32,
    parent: Option<Rc<State>>,
    id: u64,
}

impl State {
    pub fn root(board: Board, hfn: Heuristic, ids: &mut StateIds) -> Self {
        let f = hfn.evaluate(&board);
        Self {
            board,
            hfn,
            f,
            depth: 0,
            parent: None,
            id: ids.next(),
        }
    }

    /// Successor of `parent` holding `board`, scored with the parent's heuristic.
    pub fn child(parent: &Rc<State>, board: Board, ids: &mut StateIds) -> Self {
        let f = parent.hfn.evaluate(&board);
        Self {
            board,
            hfn: parent.hfn,
            f,
            depth: parent.depth + 1,
            parent: Some(Rc::clone(parent)),
            id: ids.next(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn hfn(&self) -> Heuristic {
        self.hfn
    }

    /// Heuristic estimate for this state's board.
    pub fn f(&self) -> u32 {
        self.f
    }

    /// Moves taken from the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn parent(&self) -> Option<&Rc<State>> {
        self.parent.as_ref()
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn parent_id(&self) -> Option<u64> {
        self.parent.as_ref().map(|p| p.id)
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
    }
}

impl Eq for State {}

/// States from the root to `state`, inclusive.
pub fn get_path(state: &Rc<State>) -> Vec<Rc<State>> {
    let mut path = Vec::with_capacity(state.depth as usize + 1);
    let mut current = Some(Rc::clone(state));

    while let Some(s) = current {
        current = s.parent.clone();
        path.push(s);
    }

    path.reverse();
    path
}
