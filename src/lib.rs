//! Perfect maze generation by recursive backtracking.
//!
//! Rooms and walls share one odd-sized square [`Grid`]: rooms at odd/odd positions, walls on
//! every even row and column. [`MazeGenerator`] carves passages between rooms in randomized
//! depth-first order until every room is connected by exactly one path.

pub mod generators;
pub mod maze;

pub use generators::{MazeGenerationError, MazeGenerator};
pub use maze::{Cell, Direction, DirectionSource, Grid};
