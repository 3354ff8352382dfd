//! Cardinal facing directions and the rotations between them.

use std::fmt;

use crate::geom::Point;

/// One of the four cardinal directions.
///
/// The discriminants follow a fixed counter-clockwise cycle
/// (East → North → West → South), so turning left adds one and turning
/// right subtracts one modulo four.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    East = 0,
    North = 1,
    West = 2,
    South = 3,
}

/// The rotation needed to go from one facing to another.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    /// Same facing. Only a forward step keeps it.
    Straight,
    /// A 90° rotation, either way.
    Quarter,
    /// A 180° rotation.
    Reverse,
}

impl Direction {
    /// All directions in cyclic order. `ALL[d.index()] == d`.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Position of this direction in [`ALL`](Self::ALL).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction at `idx` in the cycle (taken modulo 4).
    #[inline]
    pub const fn from_index(idx: usize) -> Self {
        Self::ALL[idx % 4]
    }

    /// Unit step in grid coordinates (Y grows down).
    #[inline]
    pub const fn delta(self) -> Point {
        match self {
            Direction::East => Point::new(1, 0),
            Direction::North => Point::new(0, -1),
            Direction::West => Point::new(-1, 0),
            Direction::South => Point::new(0, 1),
        }
    }

    /// The direction rotated by 180°.
    #[inline]
    pub const fn opposite(self) -> Self {
        Self::from_index(self.index() + 2)
    }

    /// The direction rotated 90° counter-clockwise.
    #[inline]
    pub const fn left(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// The direction rotated 90° clockwise.
    #[inline]
    pub const fn right(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// Classify the rotation from `self` to `other`.
    #[inline]
    pub const fn turn_to(self, other: Direction) -> Turn {
        match (other.index() + 4 - self.index()) % 4 {
            0 => Turn::Straight,
            2 => Turn::Reverse,
            _ => Turn::Quarter,
        }
    }

    /// Whether `other` is the exact opposite of `self`.
    #[inline]
    pub const fn is_opposite(self, other: Direction) -> bool {
        matches!(self.turn_to(other), Turn::Reverse)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::East => "east",
            Direction::North => "north",
            Direction::West => "west",
            Direction::South => "south",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, d) in Direction::ALL.iter().enumerate() {
            assert_eq!(d.index(), i);
            assert_eq!(Direction::from_index(i), *d);
        }
        assert_eq!(Direction::from_index(5), Direction::North);
    }

    #[test]
    fn opposite_cancels_delta() {
        for d in Direction::ALL {
            assert_eq!(d.delta() + d.opposite().delta(), Point::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn left_and_right_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.left().right(), d);
            assert_eq!(d.left().left(), d.opposite());
        }
        assert_eq!(Direction::East.left(), Direction::North);
        assert_eq!(Direction::East.right(), Direction::South);
    }

    #[test]
    fn turn_classification() {
        use Direction::*;
        assert_eq!(East.turn_to(East), Turn::Straight);
        assert_eq!(East.turn_to(North), Turn::Quarter);
        assert_eq!(East.turn_to(South), Turn::Quarter);
        assert_eq!(East.turn_to(West), Turn::Reverse);
        assert_eq!(North.turn_to(South), Turn::Reverse);
        assert!(West.is_opposite(East));
        assert!(!West.is_opposite(North));
    }

    #[test]
    fn turns_are_symmetric() {
        for a in Direction::ALL {
            for b in Direction::ALL {
                assert_eq!(a.turn_to(b), b.turn_to(a));
            }
        }
    }

    #[test]
    fn north_points_up() {
        assert_eq!(Direction::North.delta(), Point::new(0, -1));
        assert_eq!(Direction::South.delta(), Point::new(0, 1));
    }
}
