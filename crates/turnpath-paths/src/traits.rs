use turnpath_core::Turn;

use crate::state::{Cost, State};

/// Prices the moves of the state graph.
///
/// `cost(from, turn)` is the price of leaving `from` with the given
/// rotation: [`Turn::Straight`] prices the forward step, [`Turn::Quarter`]
/// and [`Turn::Reverse`] price in-place rotations. Implementations must be
/// pure and must never return [`UNREACHABLE`](crate::UNREACHABLE).
pub trait CostModel {
    fn cost(&self, from: State, turn: Turn) -> Cost;
}

impl<F> CostModel for F
where
    F: Fn(State, Turn) -> Cost,
{
    #[inline]
    fn cost(&self, from: State, turn: Turn) -> Cost {
        self(from, turn)
    }
}

/// Position-independent cost model: one price per kind of move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnCost {
    /// One forward step.
    pub step: Cost,
    /// A 90° rotation in place.
    pub quarter: Cost,
    /// A 180° rotation in place.
    pub reverse: Cost,
}

impl TurnCost {
    pub const STEP: Cost = 1;
    pub const QUARTER: Cost = 1000;
    pub const REVERSE: Cost = 2000;

    /// Create a cost model with the given prices.
    pub const fn new(step: Cost, quarter: Cost, reverse: Cost) -> Self {
        Self {
            step,
            quarter,
            reverse,
        }
    }
}

impl Default for TurnCost {
    fn default() -> Self {
        Self::new(Self::STEP, Self::QUARTER, Self::REVERSE)
    }
}

impl CostModel for TurnCost {
    #[inline]
    fn cost(&self, _from: State, turn: Turn) -> Cost {
        match turn {
            Turn::Straight => self.step,
            Turn::Quarter => self.quarter,
            Turn::Reverse => self.reverse,
        }
    }
}
