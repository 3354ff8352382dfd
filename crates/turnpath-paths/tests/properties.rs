//! Property tests over randomly generated mazes.

use std::collections::BTreeSet;

use proptest::prelude::*;
use turnpath_core::{Direction, Maze, Point};
use turnpath_paths::{
    Cost, DistanceTable, PathError, State, StateGraph, UNREACHABLE, best_cost, optimal_path,
    optimal_tiles, solve, solve_maze,
};

fn arb_maze() -> impl Strategy<Value = Maze> {
    (2i32..9, 2i32..9)
        .prop_flat_map(|(w, h)| {
            let n = (w * h) as usize;
            (
                Just(w),
                Just(h),
                prop::collection::vec(prop::bool::weighted(0.3), n),
                0..n,
                0..n,
            )
        })
        .prop_map(|(w, h, walls, s, e)| {
            let n = walls.len();
            let e = if e == s { (e + 1) % n } else { e };
            let rows = (0..h).map(|y| {
                (0..w)
                    .map(|x| {
                        let i = (y * w + x) as usize;
                        if i == s {
                            'S'
                        } else if i == e {
                            'E'
                        } else if walls[i] {
                            '#'
                        } else {
                            '.'
                        }
                    })
                    .collect::<String>()
            });
            Maze::from_rows(rows).unwrap()
        })
}

fn start_of(m: &Maze) -> State {
    State::new(m.start(), Maze::START_FACING)
}

/// Cost from every state to the nearest facing of the goal, found by
/// searching forward from the goal with all facings flipped. Reversing a
/// walk and flipping every facing keeps each move's price.
fn costs_to_goal(graph: &StateGraph<'_>, goal: Point) -> Vec<DistanceTable> {
    Direction::ALL
        .iter()
        .map(|&g| solve(graph, State::new(goal, g.opposite())).unwrap())
        .collect()
}

fn cost_to_goal(tables: &[DistanceTable], s: State) -> Cost {
    let flipped = State::new(s.pos, s.dir.opposite());
    tables.iter().map(|t| t.get(flipped)).min().unwrap_or(UNREACHABLE)
}

/// Cells lying on an optimal path, by checking every state independently.
fn brute_force_tiles(m: &Maze) -> Option<(Cost, BTreeSet<Point>)> {
    let g = StateGraph::new(m);
    let from_start = solve(&g, start_of(m)).unwrap();
    let best = best_cost(&from_start, m.goal()).ok()?;
    let to_goal = costs_to_goal(&g, m.goal());
    let tiles = g
        .nodes()
        .filter(|&s| {
            let a = from_start.get(s);
            let b = cost_to_goal(&to_goal, s);
            a != UNREACHABLE && b != UNREACHABLE && a + b == best
        })
        .map(|s| s.pos)
        .collect();
    Some((best, tiles))
}

proptest! {
    #[test]
    fn matches_brute_force(m in arb_maze()) {
        match (solve_maze(&m), brute_force_tiles(&m)) {
            (Ok(sol), Some((best, tiles))) => {
                prop_assert_eq!(sol.cost, best);
                prop_assert_eq!(sol.tiles, tiles);
            }
            (Err(PathError::Unreachable { goal }), None) => {
                prop_assert_eq!(goal, m.goal());
            }
            (got, want) => prop_assert!(false, "solver {:?} vs brute force {:?}", got, want),
        }
    }

    #[test]
    fn deterministic(m in arb_maze()) {
        prop_assert_eq!(solve_maze(&m), solve_maze(&m));
    }

    #[test]
    fn endpoints_are_on_every_answer(m in arb_maze()) {
        if let Ok(sol) = solve_maze(&m) {
            prop_assert!(sol.tiles.contains(&m.start()));
            prop_assert!(sol.tiles.contains(&m.goal()));
            prop_assert!(sol.tiles.iter().all(|&p| m.is_open(p)));
        }
    }

    #[test]
    fn distances_are_consistent(m in arb_maze()) {
        let g = StateGraph::new(&m);
        let t = solve(&g, start_of(&m)).unwrap();
        prop_assert_eq!(t.get(start_of(&m)), 0);

        let mut buf = Vec::new();
        for (s, d) in t.iter() {
            prop_assert!(g.contains(s));
            g.edges_from(s, &mut buf);
            for e in buf.iter() {
                prop_assert!(t.get(e.to) <= d + e.cost);
            }
            if s != start_of(&m) {
                // Some incoming edge explains the distance exactly.
                g.edges_into(s, &mut buf);
                let tight = buf
                    .iter()
                    .any(|e| t.is_reached(e.from) && t.get(e.from) + e.cost == d);
                prop_assert!(tight, "no tight predecessor for {}", s);
            }
        }
    }

    #[test]
    fn incoming_edges_mirror_outgoing(m in arb_maze()) {
        let g = StateGraph::new(&m);
        let mut out = Vec::new();
        let mut inc = Vec::new();
        let mut n_out = 0;
        let mut n_in = 0;
        for s in g.nodes() {
            g.edges_from(s, &mut out);
            n_out += out.len();
            for e in out.iter() {
                g.edges_into(e.to, &mut inc);
                prop_assert!(inc.contains(e));
            }
            g.edges_into(s, &mut inc);
            n_in += inc.len();
        }
        prop_assert_eq!(n_out, n_in);
    }

    #[test]
    fn path_cost_matches_best(m in arb_maze()) {
        let g = StateGraph::new(&m);
        let t = solve(&g, start_of(&m)).unwrap();
        if let Ok(best) = best_cost(&t, m.goal()) {
            let path = optimal_path(&g, &t, m.goal()).unwrap();
            let total: Cost = path
                .windows(2)
                .map(|w| g.edge_cost(w[0], w[1]).unwrap())
                .sum();
            prop_assert_eq!(total, best);
            let tiles = optimal_tiles(&g, &t, m.goal()).unwrap();
            prop_assert!(path.iter().all(|s| tiles.contains(&s.pos)));
        }
    }
}

#[test]
fn corridor_costs_length_minus_one() {
    for n in 2..30 {
        let m = Maze::parse(&format!("S{}E", ".".repeat(n - 2))).unwrap();
        let sol = solve_maze(&m).unwrap();
        assert_eq!(sol.cost, (n - 1) as Cost);
        assert_eq!(sol.tile_count(), n);
    }
}

#[test]
fn five_by_five_with_one_turn() {
    let m = Maze::parse(
        "\
S....
.###.
.###.
.###.
....E",
    )
    .unwrap();
    let sol = solve_maze(&m).unwrap();
    assert_eq!(sol.cost, 8 + 1000);
    assert_eq!(sol.tile_count(), 9);
}

#[test]
fn goal_walled_off() {
    let m = Maze::parse(
        "\
S...
..##
..#E",
    )
    .unwrap();
    assert_eq!(
        solve_maze(&m),
        Err(PathError::Unreachable { goal: m.goal() })
    );
}
