//! The implicit (position, facing) state graph over a maze.

use turnpath_core::{Direction, Maze, Turn};

use crate::state::{self, Cost, Edge, State};
use crate::traits::{CostModel, TurnCost};

/// Implicit graph whose nodes are every open cell crossed with every
/// facing.
///
/// Edges are generated on demand: from each state, three in-place turns to
/// the other facings and one forward step onto the next cell when it is
/// open. No adjacency list is ever built.
#[derive(Debug, Clone)]
pub struct StateGraph<'a, C = TurnCost> {
    maze: &'a Maze,
    cost: C,
}

impl<'a> StateGraph<'a, TurnCost> {
    /// Graph over `maze` with the standard 1 / 1000 / 2000 prices.
    pub fn new(maze: &'a Maze) -> Self {
        Self::with_cost(maze, TurnCost::default())
    }
}

impl<'a, C: CostModel> StateGraph<'a, C> {
    /// Graph over `maze` priced by `cost`.
    pub fn with_cost(maze: &'a Maze, cost: C) -> Self {
        Self { maze, cost }
    }

    /// The underlying maze.
    pub fn maze(&self) -> &'a Maze {
        self.maze
    }

    /// The cost model pricing the edges.
    pub fn cost_model(&self) -> &C {
        &self.cost
    }

    /// Size of the dense id space (every cell of the maze's bounds, walls
    /// included, times four facings).
    pub fn len(&self) -> usize {
        state::id_count(self.maze.bounds())
    }

    /// Whether the id space is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Dense id of `s`, or `None` if its cell is out of bounds.
    #[inline]
    pub fn index(&self, s: State) -> Option<usize> {
        state::state_id(self.maze.bounds(), s)
    }

    /// State for a dense id. `id` must be below [`len`](Self::len).
    #[inline]
    pub fn state(&self, id: usize) -> State {
        state::state_at(self.maze.bounds(), id)
    }

    /// Whether `s` is a node of the graph (its cell is open).
    #[inline]
    pub fn contains(&self, s: State) -> bool {
        self.maze.is_open(s.pos)
    }

    /// Every node of the graph, row-major by cell then by facing.
    pub fn nodes(&self) -> impl Iterator<Item = State> + '_ {
        self.maze
            .open_cells()
            .flat_map(|pos| Direction::ALL.map(move |dir| State::new(pos, dir)))
    }

    /// Number of nodes (four per open cell).
    pub fn node_count(&self) -> usize {
        self.maze.open_count() * Direction::ALL.len()
    }

    /// Append the outgoing edges of `s` into `buf` (cleared first).
    ///
    /// Turns come first in [`Direction::ALL`] order, then the forward step
    /// if the next cell is open.
    pub fn edges_from(&self, s: State, buf: &mut Vec<Edge>) {
        buf.clear();
        if !self.contains(s) {
            return;
        }
        for dir in Direction::ALL {
            if dir == s.dir {
                continue;
            }
            buf.push(Edge {
                from: s,
                to: s.facing(dir),
                cost: self.cost.cost(s, s.dir.turn_to(dir)),
            });
        }
        let next = s.forward();
        if self.contains(next) {
            buf.push(Edge {
                from: s,
                to: next,
                cost: self.cost.cost(s, Turn::Straight),
            });
        }
    }

    /// Append the incoming edges of `s` into `buf` (cleared first).
    ///
    /// These are exactly the edges [`edges_from`](Self::edges_from) yields
    /// from other states that end in `s`: a turn from each other facing on
    /// the same cell, and a forward step from the cell behind if it is open.
    pub fn edges_into(&self, s: State, buf: &mut Vec<Edge>) {
        buf.clear();
        if !self.contains(s) {
            return;
        }
        for dir in Direction::ALL {
            if dir == s.dir {
                continue;
            }
            let from = s.facing(dir);
            buf.push(Edge {
                from,
                to: s,
                cost: self.cost.cost(from, dir.turn_to(s.dir)),
            });
        }
        let prev = s.backward();
        if self.contains(prev) {
            buf.push(Edge {
                from: prev,
                to: s,
                cost: self.cost.cost(prev, Turn::Straight),
            });
        }
    }

    /// Cost of the edge `from → to`, or `None` if there is no such edge.
    pub fn edge_cost(&self, from: State, to: State) -> Option<Cost> {
        if !self.contains(from) || !self.contains(to) {
            return None;
        }
        if from.pos == to.pos && from.dir != to.dir {
            Some(self.cost.cost(from, from.dir.turn_to(to.dir)))
        } else if from.forward() == to {
            Some(self.cost.cost(from, Turn::Straight))
        } else {
            None
        }
    }
}
