use std::time::{Duration, Instant};

use turnpath_core::Point;

use crate::state::Cost;

/// How often (in settled states) the search looks at the clock.
pub const DEADLINE_CHECK_INTERVAL: usize = 1024;

/// Knobs for [`solve_with`](crate::solve_with).
///
/// The default runs the search to exhaustion with no cost cap and no
/// deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop once every state no more expensive than the best state on this
    /// cell is settled.
    pub goal: Option<Point>,
    /// Do not record states whose cost would exceed this value.
    pub max_cost: Option<Cost>,
    /// Give up with [`PathError::DeadlineExceeded`](crate::PathError) after
    /// this instant.
    pub deadline: Option<Instant>,
}

impl SearchConfig {
    /// Same as [`SearchConfig::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the early exit for `goal`.
    pub fn with_goal(mut self, goal: Point) -> Self {
        self.goal = Some(goal);
        self
    }

    /// Cap the expansion at `max_cost`.
    pub fn with_max_cost(mut self, max_cost: Cost) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    /// Abort the search after `deadline`.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Abort the search once `timeout` has elapsed from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_set_fields() {
        let now = Instant::now();
        let cfg = SearchConfig::new()
            .with_goal(Point::new(3, 1))
            .with_max_cost(42)
            .with_deadline(now);
        assert_eq!(cfg.goal, Some(Point::new(3, 1)));
        assert_eq!(cfg.max_cost, Some(42));
        assert_eq!(cfg.deadline, Some(now));
        assert_eq!(SearchConfig::default(), SearchConfig::new());
    }

    #[test]
    fn timeout_is_in_the_future() {
        let before = Instant::now();
        let cfg = SearchConfig::new().with_timeout(Duration::from_secs(60));
        assert!(cfg.deadline.unwrap() > before);
    }
}
