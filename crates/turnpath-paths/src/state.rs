use std::fmt;

use turnpath_core::{Direction, Point, Range};

/// Path cost. Never negative.
pub type Cost = u64;

/// Sentinel value meaning "unreachable" in distance tables.
pub const UNREACHABLE: Cost = Cost::MAX;

/// A node of the search graph: a cell together with the agent's facing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct State {
    pub pos: Point,
    pub dir: Direction,
}

impl State {
    /// Create a new state.
    #[inline]
    pub const fn new(pos: Point, dir: Direction) -> Self {
        Self { pos, dir }
    }

    /// The state reached by one forward step (the target cell may be a wall).
    #[inline]
    pub fn forward(self) -> Self {
        Self::new(self.pos + self.dir.delta(), self.dir)
    }

    /// The state one step behind, keeping the facing.
    #[inline]
    pub fn backward(self) -> Self {
        Self::new(self.pos - self.dir.delta(), self.dir)
    }

    /// Same cell, different facing.
    #[inline]
    pub const fn facing(self, dir: Direction) -> Self {
        Self::new(self.pos, dir)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} facing {}", self.pos, self.dir)
    }
}

/// A directed, weighted edge of the state graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: State,
    pub to: State,
    pub cost: Cost,
}

// ---------------------------------------------------------------------------
// Dense state ids: id = cell_index * 4 + direction_index
// ---------------------------------------------------------------------------

/// Number of dense ids needed for every state over `bounds`.
#[inline]
pub(crate) fn id_count(bounds: Range) -> usize {
    bounds.len() * Direction::ALL.len()
}

/// Dense id of `s`, or `None` if its cell is outside `bounds`.
#[inline]
pub(crate) fn state_id(bounds: Range, s: State) -> Option<usize> {
    bounds
        .index_of(s.pos)
        .map(|cell| cell * Direction::ALL.len() + s.dir.index())
}

/// Inverse of [`state_id`].
#[inline]
pub(crate) fn state_at(bounds: Range, id: usize) -> State {
    let n = Direction::ALL.len();
    State::new(bounds.point_at(id / n), Direction::from_index(id % n))
}

// ---------------------------------------------------------------------------
// Priority-queue entry
// ---------------------------------------------------------------------------

/// Reference into the dense id space, ordered by cost for use in
/// `BinaryHeap`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) cost: Cost,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest cost first; equal
        // costs pop the lowest id first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
