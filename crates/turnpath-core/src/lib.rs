//! **turnpath-core** — core types for direction-aware grid pathfinding.
//!
//! This crate provides the foundational types used by `turnpath-paths`:
//! geometry primitives, cardinal directions with their turn relationships,
//! and the [`Maze`] tile map decoded from text.

pub mod direction;
pub mod geom;
pub mod maze;

pub use direction::{Direction, Turn};
pub use geom::{Point, Range};
pub use maze::{Marker, Maze, MazeError, Tile};
