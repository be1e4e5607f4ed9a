use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::hash::{Hash, Hasher};
use thiserror::Error;

use crate::car::{Car, Orientation};

pub const FREE: char = '.';

/// Largest accepted board side.
pub const MAX_SIZE: usize = 256;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("board size must be at least 1")]
    EmptyBoard,
    #[error("board size {size} exceeds the maximum of {}", MAX_SIZE)]
    TooLarge { size: usize },
    #[error("car {index} has zero length")]
    ZeroLengthCar { index: usize },
    #[error("car {index} does not fit on a {size}x{size} board")]
    OutOfBounds { index: usize, size: usize },
    #[error("cars {first} and {second} overlap at ({row}, {col})")]
    Overlap {
        first: usize,
        second: usize,
        row: usize,
        col: usize,
    },
    #[error("no goal car on the board")]
    MissingGoal,
    #[error("cars {first} and {second} are both marked as the goal car")]
    MultipleGoals { first: usize, second: usize },
}

/// A single slide: car number `car` ends up with its leading cell at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub car: usize,
    pub to: usize,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "car {} -> {}", self.car, self.to)
    }
}

/// One configuration of cars on a `size` x `size` grid.
///
/// Boards are never mutated once built; every move produces a new board.
/// Equality and hashing only look at the size and the cars, so two boards
/// reached along different paths compare equal.
#[derive(Debug, Clone)]
pub struct Board {
    name: String,
    size: usize,
    cars: Vec<Car>,
    grid: Vec<Vec<char>>,
    goal: usize,
}

impl Board {
    pub fn new(name: impl Into<String>, size: usize, cars: Vec<Car>) -> Result<Self, BoardError> {
        let goal = validate(size, &cars)?;
        Ok(Self::from_parts(name.into(), size, cars, goal))
    }

    fn from_parts(name: String, size: usize, cars: Vec<Car>, goal: usize) -> Self {
        let grid = paint(size, &cars);
        Self {
            name,
            size,
            cars,
            grid,
            goal,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn grid(&self) -> &[Vec<char>] {
        &self.grid
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<char> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    /// True if `(row, col)` is on the board and not covered by any car.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.cell(row, col) == Some(FREE)
    }

    pub fn goal_index(&self) -> usize {
        self.goal
    }

    pub fn goal_car(&self) -> &Car {
        &self.cars[self.goal]
    }

    /// Variable coordinate the goal car's leading cell must reach to exit.
    pub fn exit(&self) -> usize {
        self.size - self.goal_car().length
    }

    pub fn is_solved(&self) -> bool {
        self.goal_car().var_coord == self.exit()
    }

    /// Canonical encoding: every car's variable coordinate, in car order.
    pub fn key(&self) -> Vec<usize> {
        self.cars.iter().map(|c| c.var_coord).collect()
    }

    /// Lowest and highest leading coordinates car `index` can slide to
    /// without passing through another car.
    pub fn reach(&self, index: usize) -> Option<(usize, usize)> {
        self.cars.get(index).map(|car| self.span(car))
    }

    pub(crate) fn span(&self, car: &Car) -> (usize, usize) {
        let mut low = car.var_coord;
        while low > 0 && self.is_open(car, low - 1) {
            low -= 1;
        }

        let mut high = car.var_coord;
        while self.is_open(car, high + car.length) {
            high += 1;
        }

        (low, high)
    }

    fn is_open(&self, car: &Car, var: usize) -> bool {
        let (row, col) = car.cell_at(var);
        self.is_free(row, col)
    }

    /// Every legal single-car slide. Cars are visited in board order; for each,
    /// slides toward the low edge come first, then toward the high edge, each
    /// nearest to farthest.
    pub fn slides(&self) -> Vec<Move> {
        let mut moves = Vec::new();

        for (i, car) in self.cars.iter().enumerate() {
            let (low, high) = self.span(car);
            for to in (low..car.var_coord).rev() {
                moves.push(Move { car: i, to });
            }
            for to in car.var_coord + 1..=high {
                moves.push(Move { car: i, to });
            }
        }

        moves
    }

    /// A copy of this board with car `index` moved to `var_coord`. The caller
    /// guarantees the slide is legal.
    pub(crate) fn child(&self, index: usize, var_coord: usize) -> Board {
        self.moved(format!("{}1", self.name), index, var_coord)
    }

    fn moved(&self, name: String, index: usize, var_coord: usize) -> Board {
        let mut cars = self.cars.clone();
        cars[index] = cars[index].with_var_coord(var_coord);
        Board::from_parts(name, self.size, cars, self.goal)
    }

    /// Applies a slide, or returns `None` if it is not legal on this board.
    pub fn apply_move(&self, movement: Move) -> Option<Board> {
        let car = self.cars.get(movement.car)?;
        let (low, high) = self.span(car);

        if movement.to == car.var_coord || movement.to < low || movement.to > high {
            return None;
        }

        Some(self.moved(self.name.clone(), movement.car, movement.to))
    }

    /// Random walk of up to `moves` legal slides starting from this board.
    pub fn scramble<R: Rng + ?Sized>(&self, moves: usize, rng: &mut R) -> Board {
        let mut board = self.clone();

        for _ in 0..moves {
            let slides = board.slides();
            match slides.choose(rng) {
                Some(&movement) => {
                    board = board.moved(board.name.clone(), movement.car, movement.to);
                }
                None => break,
            }
        }

        board
    }
}

fn validate(size: usize, cars: &[Car]) -> Result<usize, BoardError> {
    if size == 0 {
        return Err(BoardError::EmptyBoard);
    }
    if size > MAX_SIZE {
        return Err(BoardError::TooLarge { size });
    }

    let mut owner: Vec<Option<usize>> = vec![None; size * size];
    let mut goal = None;

    for (index, car) in cars.iter().enumerate() {
        if car.length == 0 {
            return Err(BoardError::ZeroLengthCar { index });
        }
        let past_end = car.var_coord.checked_add(car.length);
        if car.fix_coord >= size || past_end.map_or(true, |end| end > size) {
            return Err(BoardError::OutOfBounds { index, size });
        }

        for (row, col) in car.cells() {
            let slot = &mut owner[row * size + col];
            if let Some(first) = *slot {
                return Err(BoardError::Overlap {
                    first,
                    second: index,
                    row,
                    col,
                });
            }
            *slot = Some(index);
        }

        if car.is_goal {
            if let Some(first) = goal {
                return Err(BoardError::MultipleGoals {
                    first,
                    second: index,
                });
            }
            goal = Some(index);
        }
    }

    goal.ok_or(BoardError::MissingGoal)
}

fn paint(size: usize, cars: &[Car]) -> Vec<Vec<char>> {
    let mut grid = vec![vec![FREE; size]; size];

    for car in cars {
        let (head, body, tail) = match car.orientation {
            Orientation::Horizontal => ('<', '-', '>'),
            Orientation::Vertical => ('^', '|', 'v'),
        };

        for (i, (row, col)) in car.cells().enumerate() {
            grid[row][col] = if car.length == 1 {
                '*'
            } else if i == 0 {
                head
            } else if i == car.length - 1 {
                tail
            } else {
                body
            };
        }
    }

    grid
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.cars == other.cars
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.size.hash(state);
        self.cars.hash(state);
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            for &cell in row {
                write!(f, "{}", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
