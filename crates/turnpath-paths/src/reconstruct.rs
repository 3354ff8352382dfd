//! Recovery of optimal paths from a solved [`DistanceTable`].
//!
//! Nothing is stored during the forward search besides distances. An edge
//! `p → s` lies on some shortest path exactly when
//! `distance(p) + cost(p → s) == distance(s)`, so walking backward from the
//! goal along such *tight* edges visits every state of every optimal path.

use std::collections::{BTreeSet, VecDeque};

use turnpath_core::{Direction, Point};

use crate::dijkstra::DistanceTable;
use crate::error::PathError;
use crate::graph::StateGraph;
use crate::state::{Cost, Edge, State, UNREACHABLE};
use crate::traits::CostModel;

/// Minimum distance over the four facings of `goal`.
pub fn best_cost(table: &DistanceTable, goal: Point) -> Result<Cost, PathError> {
    Direction::ALL
        .iter()
        .map(|&dir| table.get(State::new(goal, dir)))
        .filter(|&d| d != UNREACHABLE)
        .min()
        .ok_or(PathError::Unreachable { goal })
}

/// Every facing of `goal` reached at the minimum distance, in
/// [`Direction::ALL`] order.
pub fn optimal_goal_states(table: &DistanceTable, goal: Point) -> Result<Vec<State>, PathError> {
    let best = best_cost(table, goal)?;
    Ok(Direction::ALL
        .iter()
        .map(|&dir| State::new(goal, dir))
        .filter(|&s| table.get(s) == best)
        .collect())
}

#[inline]
fn is_tight(table: &DistanceTable, e: &Edge) -> bool {
    let from = table.get(e.from);
    from != UNREACHABLE && from.checked_add(e.cost) == Some(table.get(e.to))
}

/// Every state lying on at least one minimum-cost path to `goal`.
///
/// Runs one reverse traversal per optimal goal facing, admitting a
/// predecessor only through a tight edge, and returns the union.
pub fn optimal_states<C: CostModel>(
    graph: &StateGraph<'_, C>,
    table: &DistanceTable,
    goal: Point,
) -> Result<BTreeSet<State>, PathError> {
    let ends = optimal_goal_states(table, goal)?;

    let mut visited = vec![false; graph.len()];
    let mut stack: Vec<State> = Vec::new();
    let mut ebuf = Vec::with_capacity(4);

    for end in ends {
        let Some(ei) = graph.index(end) else {
            continue;
        };
        if visited[ei] {
            continue;
        }
        visited[ei] = true;
        stack.push(end);

        while let Some(s) = stack.pop() {
            graph.edges_into(s, &mut ebuf);
            for e in ebuf.iter() {
                if !is_tight(table, e) {
                    continue;
                }
                let Some(pi) = graph.index(e.from) else {
                    continue;
                };
                if !visited[pi] {
                    visited[pi] = true;
                    stack.push(e.from);
                }
            }
        }
    }

    let states: BTreeSet<State> = visited
        .iter()
        .enumerate()
        .filter(|(_, v)| **v)
        .map(|(i, _)| graph.state(i))
        .collect();
    log::debug!("reconstruct: {} states on optimal paths to {goal}", states.len());
    Ok(states)
}

/// Every cell lying on at least one minimum-cost path to `goal`.
pub fn optimal_tiles<C: CostModel>(
    graph: &StateGraph<'_, C>,
    table: &DistanceTable,
    goal: Point,
) -> Result<BTreeSet<Point>, PathError> {
    let tiles: BTreeSet<Point> = optimal_states(graph, table, goal)?
        .into_iter()
        .map(|s| s.pos)
        .collect();
    log::debug!("reconstruct: {} tiles on optimal paths to {goal}", tiles.len());
    Ok(tiles)
}

/// One minimum-cost state sequence from the table's start to `goal`,
/// endpoints included.
///
/// Ties are broken deterministically: goal facings in [`Direction::ALL`]
/// order, predecessors in [`StateGraph::edges_into`] order, and the path
/// found has the fewest moves among the tight ones.
pub fn optimal_path<C: CostModel>(
    graph: &StateGraph<'_, C>,
    table: &DistanceTable,
    goal: Point,
) -> Result<Vec<State>, PathError> {
    let ends = optimal_goal_states(table, goal)?;
    let start = table.start();
    let Some(si) = graph.index(start) else {
        return Err(PathError::InvalidStart(start));
    };

    // next[i] is the successor of state i on the way to the goal.
    let mut next = vec![usize::MAX; graph.len()];
    let mut seen = vec![false; graph.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();
    for end in ends {
        if let Some(ei) = graph.index(end) {
            seen[ei] = true;
            queue.push_back(ei);
        }
    }

    let mut ebuf = Vec::with_capacity(4);
    while let Some(ci) = queue.pop_front() {
        if ci == si {
            break;
        }
        graph.edges_into(graph.state(ci), &mut ebuf);
        for e in ebuf.iter() {
            if !is_tight(table, e) {
                continue;
            }
            let Some(pi) = graph.index(e.from) else {
                continue;
            };
            if !seen[pi] {
                seen[pi] = true;
                next[pi] = ci;
                queue.push_back(pi);
            }
        }
    }

    // Every reached state has a tight chain back to the start, so this only
    // fails if the table was built from a different graph.
    debug_assert!(seen[si], "start {start} not reached backward from {goal}");
    if !seen[si] {
        return Err(PathError::Unreachable { goal });
    }

    let mut path = Vec::new();
    let mut ci = si;
    while ci != usize::MAX {
        path.push(graph.state(ci));
        ci = next[ci];
    }
    Ok(path)
}
