//! # grid_astar
//!
//! Shortest paths on a 4-connected grid with
//! [A*](https://en.wikipedia.org/wiki/A*_search_algorithm), using unit step cost and the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) as heuristic.
//!
//! Search state (`g`, `h`, `f` and the parent link) is stored on the [Cell]s of the [Grid]
//! and stays there after the search, so the explored region can be inspected or drawn.
//! A [SearchObserver] can be handed to the solver to watch every expansion and relaxation
//! as it happens, and to stop the search early.
//!
//! ```
//! use grid_astar::{find_path, Grid};
//! use grid_util::point::Point;
//!
//! let mut grid = Grid::new(3, 3).unwrap();
//! grid.set_wall(Point::new(1, 1), true).unwrap();
//! let path = find_path(&mut grid, Point::new(0, 0), Point::new(2, 2), None).unwrap();
//! assert_eq!(path.len(), 5);
//! ```
mod cell;
pub mod error;
mod frontier;
mod grid;
pub mod heuristic;
pub mod observer;
pub mod obstacles;
pub mod solver;

pub use crate::cell::Cell;
pub use crate::error::{GridError, Result};
pub use crate::grid::Grid;
pub use crate::observer::{Flow, NoOpObserver, Recorder, SearchEvent, SearchObserver, Snapshot};
pub use crate::obstacles::{generate_random_obstacles, DEFAULT_OBSTACLE_DENSITY};
pub use crate::solver::{find_path, path_cost, AstarSolver, SearchOutcome};

/// Path cost type.
pub type Cost = u32;

/// Cost of a cell that has not been reached.
pub const INFINITE_COST: Cost = Cost::MAX;

/// Cost of a single step between 4-adjacent cells.
pub const UNIT_COST: Cost = 1;
