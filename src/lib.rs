//! Rush Hour solver: cars slide along their own row or column until the goal
//! car reaches the exit.

pub mod board;
pub mod car;
pub mod heuristic;
pub mod layout;
pub mod search;
pub mod state;
pub mod successors;

pub use board::{Board, BoardError, Move};
pub use car::{Car, Orientation};
pub use heuristic::Heuristic;
pub use layout::{parse_board, LayoutError};
pub use search::{a_star, dfs, path_to_moves, search, SearchResult, Strategy, NO_SOLUTION};
pub use state::{get_path, State, StateIds};
pub use successors::{get_successors, is_goal};
