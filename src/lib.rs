//! **mazes** generates perfect mazes with a randomised recursive backtracker and exposes
//! them as open/closed wall grids for rendering and physics collaborators.

#![recursion_limit = "1024"] // error_chain! expands deeply

pub mod cells;
pub mod errors;
pub mod flag_grid;
pub mod generators;
pub mod graph;
pub mod layout;
pub mod maze;
pub mod pathing;
pub mod random;
pub mod units;

pub use crate::generators::{generate, MazeGenerator};
pub use crate::maze::Maze;
