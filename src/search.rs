use log::{debug, trace};
use rustc_hash::FxHashSet;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::rc::Rc;

use crate::board::{Board, Move};
use crate::heuristic::Heuristic;
use crate::state::{get_path, State, StateIds};
use crate::successors::{get_successors, is_goal};

/// Cost reported when the frontier runs dry without reaching the goal.
pub const NO_SOLUTION: i64 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Dfs,
    AStar,
}

impl Strategy {
    /// Heuristic the strategy scores states with when `requested` is asked for.
    /// Depth-first search ignores the request.
    pub fn heuristic(&self, requested: Option<Heuristic>) -> Heuristic {
        match self {
            Strategy::Dfs => Heuristic::Zero,
            Strategy::AStar => requested.unwrap_or(Heuristic::Zero),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Strategy::Dfs => "dfs",
            Strategy::AStar => "a*",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug)]
pub struct SearchResult {
    /// Root to goal, inclusive. Empty when no solution was found.
    pub path: Vec<Rc<State>>,
    /// Number of moves on `path`, or [`NO_SOLUTION`].
    pub cost: i64,
    /// States popped from the frontier and expanded.
    pub expanded: usize,
}

impl SearchResult {
    fn found(goal: &Rc<State>, expanded: usize) -> Self {
        Self {
            path: get_path(goal),
            cost: goal.depth() as i64,
            expanded,
        }
    }

    fn exhausted(expanded: usize) -> Self {
        Self {
            path: Vec::new(),
            cost: NO_SOLUTION,
            expanded,
        }
    }

    pub fn is_solved(&self) -> bool {
        self.cost != NO_SOLUTION
    }

    pub fn boards(&self) -> impl Iterator<Item = &Board> {
        self.path.iter().map(|s| s.board())
    }

    pub fn moves(&self) -> Vec<Move> {
        path_to_moves(&self.path)
    }
}

/// Solves `board` with the given strategy. The heuristic only matters for
/// [`Strategy::AStar`], and defaults to [`Heuristic::Zero`].
pub fn search(board: Board, strategy: Strategy, heuristic: Option<Heuristic>) -> SearchResult {
    let heuristic = strategy.heuristic(heuristic);
    debug!(
        "Searching {} with {} (heuristic {})",
        board.name(),
        strategy,
        heuristic
    );

    let result = match strategy {
        Strategy::Dfs => dfs(board),
        Strategy::AStar => a_star(board, heuristic),
    };

    if result.is_solved() {
        debug!(
            "Found a solution of cost {} after expanding {} states",
            result.cost, result.expanded
        );
    } else {
        debug!("No solution after expanding {} states", result.expanded);
    }
    result
}

/// Depth-first graph search. Among siblings the earliest generated successor
/// is explored first; the returned cost is not necessarily minimal.
pub fn dfs(init_board: Board) -> SearchResult {
    let mut ids = StateIds::new();
    let mut frontier = vec![Rc::new(State::root(init_board, Heuristic::Zero, &mut ids))];
    let mut explored = FxHashSet::default();
    let mut expanded = 0;

    while let Some(current) = frontier.pop() {
        if !explored.insert(current.board().key()) {
            continue;
        }
        expanded += 1;
        trace!("dfs: expanding state {} at depth {}", current.id(), current.depth());

        if is_goal(&current) {
            return SearchResult::found(&current, expanded);
        }

        let mut successors = get_successors(&current, &mut ids);
        successors.sort_by(|a, b| b.id().cmp(&a.id()));
        frontier.extend(successors.into_iter().map(Rc::new));
    }

    SearchResult::exhausted(expanded)
}

/// Frontier entry ordered so that `BinaryHeap` pops the smallest
/// `(depth + f, id, parent id)` first.
struct Ranked(Rc<State>);

impl Ranked {
    fn key(&self) -> (u64, u64, Option<u64>) {
        let s = &self.0;
        (s.depth() as u64 + s.f() as u64, s.id(), s.parent_id())
    }
}

impl PartialEq for Ranked {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Ranked {}

impl PartialOrd for Ranked {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranked {
    fn cmp(&self, other: &Self) -> Ordering {
        other.key().cmp(&self.key())
    }
}

/// Best-first graph search on `depth + hfn(board)`, ties broken by state id
/// and then by parent id. Each distinct board is expanded at most once.
pub fn a_star(init_board: Board, hfn: Heuristic) -> SearchResult {
    let mut ids = StateIds::new();
    let mut frontier = BinaryHeap::new();
    frontier.push(Ranked(Rc::new(State::root(init_board, hfn, &mut ids))));
    let mut explored = FxHashSet::default();
    let mut expanded = 0;

    while let Some(Ranked(current)) = frontier.pop() {
        if !explored.insert(current.board().key()) {
            continue;
        }
        expanded += 1;
        trace!(
            "a*: expanding state {} at depth {} with f {}",
            current.id(),
            current.depth(),
            current.f()
        );

        if is_goal(&current) {
            return SearchResult::found(&current, expanded);
        }

        for s in get_successors(&current, &mut ids) {
            frontier.push(Ranked(Rc::new(s)));
        }
    }

    SearchResult::exhausted(expanded)
}

/// The slide taken between each pair of consecutive states on `path`.
pub fn path_to_moves(path: &[Rc<State>]) -> Vec<Move> {
    path.windows(2)
        .filter_map(|pair| {
            let before = pair[0].board().cars();
            let after = pair[1].board().cars();
            before
                .iter()
                .zip(after)
                .position(|(a, b)| a.var_coord != b.var_coord)
                .map(|car| Move {
                    car,
                    to: after[car].var_coord,
                })
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::car::{Car, Orientation};

    fn one_blocker() -> Board {
        Board::new(
            "one-blocker",
            6,
            vec![
                Car::goal(Orientation::Horizontal, 2, 0, 2),
                Car::vertical(3, 1, 2),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_ranked_pops_minimum() {
        let mut ids = StateIds::new();
        let root = Rc::new(State::root(one_blocker(), Heuristic::Blocking, &mut ids));
        let mut heap = BinaryHeap::new();
        for s in get_successors(&root, &mut ids) {
            heap.push(Ranked(Rc::new(s)));
        }

        let mut last = (0, 0, None);
        while let Some(entry) = heap.pop() {
            let key = entry.key();
            assert!(key >= last);
            last = key;
        }
    }

    #[test]
    fn test_a_star_finds_two_moves() {
        for h in [Heuristic::Zero, Heuristic::Blocking, Heuristic::Advanced] {
            let result = a_star(one_blocker(), h);
            assert_eq!(result.cost, 2);
            assert_eq!(
                result.moves(),
                vec![Move { car: 1, to: 0 }, Move { car: 0, to: 4 }]
            );
        }
    }

    #[test]
    fn test_dfs_descends_into_first_successor() {
        let board = Board::new(
            "empty",
            6,
            vec![Car::goal(Orientation::Horizontal, 2, 0, 2)],
        )
        .unwrap();
        let result = dfs(board);
        let cols: Vec<usize> = result.boards().map(|b| b.goal_car().var_coord).collect();
        assert_eq!(cols, vec![0, 1, 2, 3, 4]);
        assert_eq!(result.cost, 4);
    }

    #[test]
    fn test_dfs_ignores_requested_heuristic() {
        assert_eq!(Strategy::Dfs.heuristic(Some(Heuristic::Advanced)), Heuristic::Zero);
        assert_eq!(Strategy::AStar.heuristic(Some(Heuristic::Advanced)), Heuristic::Advanced);
        assert_eq!(Strategy::AStar.heuristic(None), Heuristic::Zero);

        let result = search(one_blocker(), Strategy::Dfs, Some(Heuristic::Advanced));
        assert!(result.path.iter().all(|s| s.hfn() == Heuristic::Zero && s.f() == 0));
    }

    #[test]
    fn test_path_to_moves_empty() {
        assert!(path_to_moves(&[]).is_empty());
    }
}
