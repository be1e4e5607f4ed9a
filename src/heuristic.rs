//! Estimates of the number of moves left before the goal car can exit.
//!
//! None of these are proven admissible.

use std::fmt;

use crate::board::Board;
use crate::car::{Car, Orientation};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heuristic {
    Zero,
    Blocking,
    Advanced,
}

impl Heuristic {
    pub fn evaluate(&self, board: &Board) -> u32 {
        match self {
            Heuristic::Zero => zero(board),
            Heuristic::Blocking => blocking(board),
            Heuristic::Advanced => advanced(board),
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Heuristic::Zero => "zero",
            Heuristic::Blocking => "blocking",
            Heuristic::Advanced => "advanced",
        };
        write!(f, "{}", s)
    }
}

pub fn zero(_board: &Board) -> u32 {
    0
}

/// Zero if the goal car is at the exit, otherwise one for its own exit slide
/// plus one per occupied cell between the goal car and the edge.
pub fn blocking(board: &Board) -> u32 {
    if board.is_solved() {
        return 0;
    }

    let goal = board.goal_car();
    let occupied = (goal.tail() + 1..board.size())
        .filter(|&v| {
            let (row, col) = goal.cell_at(v);
            !board.is_free(row, col)
        })
        .count();

    1 + occupied as u32
}

/// Weighs each car in the goal car's way by how stuck it is: 1 if a single
/// slide can clear the goal line, 2 otherwise, plus 1 overall when anything
/// is in the way. Zero when the exit is clear.
pub fn advanced(board: &Board) -> u32 {
    let goal = board.goal_car();
    let mut count = 0;

    for car in blockers(board) {
        if is_immovable(board, car, goal) {
            count += 1;
        }
        count += 1;
    }

    if count != 0 {
        count += 1;
    }
    count
}

/// Cars covering a cell on the goal car's line between the goal car and the exit.
fn blockers<'a>(board: &'a Board) -> impl Iterator<Item = &'a Car> + 'a {
    let goal = board.goal_car();
    let goal_index = board.goal_index();

    board
        .cars()
        .iter()
        .enumerate()
        .filter(move |&(i, car)| {
            i != goal_index && car.cells().any(|(row, col)| on_goal_path(goal, row, col))
        })
        .map(|(_, car)| car)
}

fn on_goal_path(goal: &Car, row: usize, col: usize) -> bool {
    let (line, var) = match goal.orientation {
        Orientation::Horizontal => (row, col),
        Orientation::Vertical => (col, row),
    };
    line == goal.fix_coord && var > goal.tail()
}

/// Whether no position the car can slide to takes it off the goal line.
fn is_immovable(board: &Board, car: &Car, goal: &Car) -> bool {
    if car.orientation == goal.orientation {
        return true;
    }

    let (low, high) = board.span(car);
    car.covers_at(low, goal.fix_coord) && car.covers_at(high, goal.fix_coord)
}
