use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Orientation::Horizontal => "h",
            Orientation::Vertical => "v",
        };
        write!(f, "{}", s)
    }
}

/// A car confined to one line of the board.
///
/// A horizontal car lives on row `fix_coord` and its leftmost cell is at column
/// `var_coord`; a vertical car lives on column `fix_coord` and its top cell is at
/// row `var_coord`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Car {
    pub orientation: Orientation,
    pub fix_coord: usize,
    pub var_coord: usize,
    pub length: usize,
    pub is_goal: bool,
}

impl Car {
    pub fn new(
        orientation: Orientation,
        fix_coord: usize,
        var_coord: usize,
        length: usize,
        is_goal: bool,
    ) -> Self {
        Self {
            orientation,
            fix_coord,
            var_coord,
            length,
            is_goal,
        }
    }

    pub fn horizontal(row: usize, col: usize, length: usize) -> Self {
        Self::new(Orientation::Horizontal, row, col, length, false)
    }

    pub fn vertical(col: usize, row: usize, length: usize) -> Self {
        Self::new(Orientation::Vertical, col, row, length, false)
    }

    pub fn goal(orientation: Orientation, fix_coord: usize, var_coord: usize, length: usize) -> Self {
        Self::new(orientation, fix_coord, var_coord, length, true)
    }

    /// Last cell on the variable axis.
    pub fn tail(&self) -> usize {
        self.var_coord + self.length - 1
    }

    /// Whether the car, with its leading cell at `var`, covers `coord` on its
    /// variable axis.
    pub fn covers_at(&self, var: usize, coord: usize) -> bool {
        coord >= var && coord < var + self.length
    }

    pub fn covers(&self, coord: usize) -> bool {
        self.covers_at(self.var_coord, coord)
    }

    /// The `(row, col)` cells the car occupies, leading cell first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (self.var_coord..self.var_coord + self.length).map(move |v| self.cell_at(v))
    }

    /// The `(row, col)` of the cell at variable coordinate `var` on this car's line.
    pub fn cell_at(&self, var: usize) -> (usize, usize) {
        match self.orientation {
            Orientation::Horizontal => (self.fix_coord, var),
            Orientation::Vertical => (var, self.fix_coord),
        }
    }

    pub fn with_var_coord(&self, var_coord: usize) -> Self {
        Self { var_coord, ..*self }
    }
}
