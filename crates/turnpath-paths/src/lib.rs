//! Turn-penalised shortest paths on grid mazes.
//!
//! The search runs over a [`StateGraph`] whose nodes are (cell, facing)
//! pairs, so that rotating in place can carry a price of its own:
//!
//! - **Dijkstra** distances from one start state ([`solve`], [`solve_with`])
//!   into a dense [`DistanceTable`]
//! - **Best cost** to a goal cell over all four facings ([`best_cost`])
//! - **Every optimal cell** via an exact-cost reverse traversal
//!   ([`optimal_tiles`], [`optimal_states`])
//! - **One optimal path** ([`optimal_path`])
//!
//! [`solve_maze`] chains all of this for a parsed [`Maze`](turnpath_core::Maze).
//!
//! # Cost model
//!
//! | Move | [`TurnCost::default`] |
//! |---|---|
//! | forward step | 1 |
//! | 90° turn | 1000 |
//! | 180° turn | 2000 |
//!
//! Any [`CostModel`] (including a closure `Fn(State, Turn) -> Cost`) can be
//! swapped in through [`StateGraph::with_cost`].

mod config;
mod dijkstra;
mod error;
mod graph;
mod reconstruct;
mod solution;
mod state;
mod traits;

pub use config::{DEADLINE_CHECK_INTERVAL, SearchConfig};
pub use dijkstra::{DistanceTable, solve, solve_with};
pub use error::PathError;
pub use graph::StateGraph;
pub use reconstruct::{best_cost, optimal_goal_states, optimal_path, optimal_states, optimal_tiles};
pub use solution::{Solution, solve_maze, solve_maze_with};
pub use state::{Cost, Edge, State, UNREACHABLE};
pub use traits::{CostModel, TurnCost};
