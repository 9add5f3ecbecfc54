//! **amazing** generates perfect mazes by randomized depth first backtracking and renders
//! them as text.
//!
//! ```
//! use amazing::maze::Maze;
//! use amazing::units::{ColumnsCount, RowsCount};
//! use rand::SeedableRng;
//! use rand_xorshift::XorShiftRng;
//!
//! let mut rng = XorShiftRng::seed_from_u64(7);
//! let maze = Maze::new(RowsCount(3), ColumnsCount(4), &mut rng).unwrap();
//! assert_eq!(maze.render().len(), 7);
//! ```

pub mod cells;
pub mod entrances;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_iterators;
pub mod input;
pub mod maze;
pub mod renderers;
pub mod units;
