use std::collections::BinaryHeap;
use std::time::Instant;

use turnpath_core::Range;

use crate::config::{DEADLINE_CHECK_INTERVAL, SearchConfig};
use crate::error::PathError;
use crate::graph::StateGraph;
use crate::state::{self, Cost, NodeRef, State, UNREACHABLE};
use crate::traits::CostModel;

/// Distances from a single start state to every state of a graph.
///
/// Backed by a flat array indexed by dense state id. Every finite entry is
/// an exact shortest distance; everything else reads [`UNREACHABLE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    dist: Vec<Cost>,
    bounds: Range,
    start: State,
    settled: usize,
}

impl DistanceTable {
    /// Distance to `s`, or [`UNREACHABLE`].
    #[inline]
    pub fn get(&self, s: State) -> Cost {
        match state::state_id(self.bounds, s) {
            Some(i) => self.dist[i],
            None => UNREACHABLE,
        }
    }

    /// Whether `s` has a finite distance.
    #[inline]
    pub fn is_reached(&self, s: State) -> bool {
        self.get(s) != UNREACHABLE
    }

    /// The state the search started from.
    pub fn start(&self) -> State {
        self.start
    }

    /// Number of states popped and expanded by the search.
    pub fn settled(&self) -> usize {
        self.settled
    }

    /// Number of states with a finite distance.
    pub fn reached(&self) -> usize {
        self.dist.iter().filter(|&&d| d != UNREACHABLE).count()
    }

    /// Every reached state with its distance, in dense id order.
    pub fn iter(&self) -> impl Iterator<Item = (State, Cost)> + '_ {
        self.dist
            .iter()
            .enumerate()
            .filter(|(_, d)| **d != UNREACHABLE)
            .map(|(i, &d)| (state::state_at(self.bounds, i), d))
    }
}

/// Compute shortest distances from `start` to every reachable state.
pub fn solve<C: CostModel>(
    graph: &StateGraph<'_, C>,
    start: State,
) -> Result<DistanceTable, PathError> {
    solve_with(graph, start, &SearchConfig::default())
}

/// Dijkstra over `graph` from `start`, driven by a binary heap.
///
/// With [`SearchConfig::goal`] set, the search stops as soon as the popped
/// cost exceeds the cheapest settled state on the goal cell; states left
/// unsettled at that point are reset to [`UNREACHABLE`] so the table only
/// holds exact values.
pub fn solve_with<C: CostModel>(
    graph: &StateGraph<'_, C>,
    start: State,
    config: &SearchConfig,
) -> Result<DistanceTable, PathError> {
    let Some(si) = graph.index(start).filter(|_| graph.contains(start)) else {
        return Err(PathError::InvalidStart(start));
    };

    let len = graph.len();
    let mut dist = vec![UNREACHABLE; len];
    let mut closed = vec![false; len];
    let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();

    dist[si] = 0;
    open.push(NodeRef { idx: si, cost: 0 });

    log::debug!(
        "dijkstra: {} states over {} cells, start {start}",
        graph.node_count(),
        graph.maze().open_count()
    );

    let mut ebuf = Vec::with_capacity(4);
    let mut settled = 0usize;
    let mut goal_best = UNREACHABLE;
    let mut stopped_early = false;

    while let Some(current) = open.pop() {
        let ci = current.idx;

        // Skip stale entries.
        if closed[ci] || current.cost != dist[ci] {
            continue;
        }
        if current.cost > goal_best {
            stopped_early = true;
            break;
        }
        closed[ci] = true;
        settled += 1;

        if settled % DEADLINE_CHECK_INTERVAL == 0 {
            log::trace!("dijkstra: settled {settled}, frontier {}", open.len());
            if config.deadline.is_some_and(|d| Instant::now() >= d) {
                log::debug!("dijkstra: deadline exceeded after {settled} states");
                return Err(PathError::DeadlineExceeded { settled });
            }
        }

        let cs = graph.state(ci);
        if config.goal == Some(cs.pos) && goal_best == UNREACHABLE {
            goal_best = current.cost;
        }

        graph.edges_from(cs, &mut ebuf);
        for e in ebuf.iter() {
            let Some(ni) = graph.index(e.to) else {
                continue;
            };
            debug_assert!(e.cost != UNREACHABLE, "edge {e:?} has sentinel cost");
            let Some(tentative) = current.cost.checked_add(e.cost) else {
                continue;
            };
            if config.max_cost.is_some_and(|max| tentative > max) {
                continue;
            }
            if closed[ni] {
                debug_assert!(
                    tentative >= dist[ni],
                    "settled state {} improved from {} to {tentative}",
                    e.to,
                    dist[ni]
                );
                continue;
            }
            if tentative >= dist[ni] {
                continue;
            }
            dist[ni] = tentative;
            open.push(NodeRef {
                idx: ni,
                cost: tentative,
            });
        }
    }

    if stopped_early {
        for (d, &c) in dist.iter_mut().zip(closed.iter()) {
            if !c {
                *d = UNREACHABLE;
            }
        }
    }

    log::debug!(
        "dijkstra: settled {settled} of {} states{}",
        graph.node_count(),
        if stopped_early { " (goal cut-off)" } else { "" }
    );

    Ok(DistanceTable {
        dist,
        bounds: graph.maze().bounds(),
        start,
        settled,
    })
}
