use std::collections::BTreeSet;

use turnpath_core::{Maze, Point};

use crate::config::SearchConfig;
use crate::dijkstra::solve_with;
use crate::error::PathError;
use crate::graph::StateGraph;
use crate::reconstruct::{best_cost, optimal_tiles};
use crate::state::{Cost, State};
use crate::traits::{CostModel, TurnCost};

/// The answer for one maze: the minimum cost and every cell on some path of
/// that cost.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub cost: Cost,
    pub tiles: BTreeSet<Point>,
}

impl Solution {
    /// Number of distinct cells on optimal paths.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }
}

/// Solve `maze` with the standard prices, starting on the start cell facing
/// [`Maze::START_FACING`].
pub fn solve_maze(maze: &Maze) -> Result<Solution, PathError> {
    solve_maze_with(maze, TurnCost::default(), &SearchConfig::default())
}

/// Solve `maze` with a custom cost model and search configuration.
///
/// The goal cut-off is always enabled for the maze's goal cell.
pub fn solve_maze_with<C: CostModel>(
    maze: &Maze,
    cost: C,
    config: &SearchConfig,
) -> Result<Solution, PathError> {
    let graph = StateGraph::with_cost(maze, cost);
    let start = State::new(maze.start(), Maze::START_FACING);
    let config = config.clone().with_goal(maze.goal());

    let table = solve_with(&graph, start, &config)?;
    let cost = best_cost(&table, maze.goal())?;
    let tiles = optimal_tiles(&graph, &table, maze.goal())?;

    log::debug!(
        "solved {}x{} maze: cost {cost}, {} tiles",
        maze.width(),
        maze.height(),
        tiles.len()
    );
    Ok(Solution { cost, tiles })
}

#[cfg(test)]
mod tests {
    use super::*;
    use turnpath_core::Turn;

    #[test]
    fn corridor() {
        let m = Maze::parse("S...E").unwrap();
        let sol = solve_maze(&m).unwrap();
        assert_eq!(sol.cost, 4);
        assert_eq!(sol.tile_count(), 5);
    }

    #[test]
    fn reversal_adds_two_thousand() {
        let m = Maze::parse("E...S").unwrap();
        let sol = solve_maze(&m).unwrap();
        assert_eq!(sol.cost, 2000 + 4);
        assert_eq!(sol.tile_count(), 5);
    }

    #[test]
    fn turn_position_does_not_matter() {
        // Four steps and one quarter turn, taken after two steps or after one.
        let a = Maze::parse("S..\n##.\n##E").unwrap();
        let b = Maze::parse("S.\n#.\n#.\n#E").unwrap();
        assert_eq!(solve_maze(&a).unwrap().cost, 1000 + 4);
        assert_eq!(solve_maze(&b).unwrap().cost, 1000 + 4);
    }

    #[test]
    fn unreachable_goal() {
        let m = Maze::parse("S#E").unwrap();
        assert_eq!(
            solve_maze(&m),
            Err(PathError::Unreachable {
                goal: Point::new(2, 0)
            })
        );
    }

    #[test]
    fn custom_cost_changes_the_answer() {
        let m = Maze::parse("S..\n#.#\n#E#").unwrap();
        let cheap_turns = |_: State, turn: Turn| -> Cost {
            match turn {
                Turn::Straight => 10,
                Turn::Quarter => 1,
                Turn::Reverse => 2,
            }
        };
        let sol = solve_maze_with(&m, cheap_turns, &SearchConfig::default()).unwrap();
        assert_eq!(sol.cost, 31);
        assert_eq!(sol.tile_count(), 4);
    }

    #[test]
    fn deterministic() {
        let text = "\
#######
#.....#
#S###E#
#.....#
#######";
        let m = Maze::parse(text).unwrap();
        let a = solve_maze(&m).unwrap();
        let b = solve_maze(&m).unwrap();
        assert_eq!(a, b);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn solution_round_trip() {
        let m = Maze::parse("S..\n#.#\n#E#").unwrap();
        let sol = solve_maze(&m).unwrap();
        let json = serde_json::to_string(&sol).unwrap();
        let back: Solution = serde_json::from_str(&json).unwrap();
        assert_eq!(sol, back);
    }

    #[test]
    fn turn_cost_round_trip() {
        let c = TurnCost::new(2, 3, 5);
        let json = serde_json::to_string(&c).unwrap();
        let back: TurnCost = serde_json::from_str(&json).unwrap();
        assert_eq!(c, back);
    }
}
