//! Cell visit ordering: a greedy nearest-entry seed tour, refined by
//! first-improvement 2-opt local search.
//!
//! The goal is to minimize total inter-cell transition distance — the sum
//! of straight-line hops from one cell's `exit` point to the next cell's
//! `entry` point. This is not solved to optimality; spec.md explicitly
//! rules provable TSP optimality a non-goal.

use std::collections::HashSet;
use std::hash::BuildHasherDefault;

use fxhash::FxHasher;
use indexmap::IndexMap;

use crate::geometry::approx_lt;
use crate::model::{Cell, CellPattern};

/// A patterns lookup keyed by cell id, hashed with the non-cryptographic
/// `FxHasher` for fast, order-preserving lookups during 2-opt's repeated
/// entry/exit re-reads.
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Compute a visit order over `cells` that approximately minimizes total
/// transition distance, using `patterns` to look up each cell's entry and
/// exit points.
///
/// Returns the empty list if `cells` is empty.
#[must_use]
pub fn order(
    cells: &[Cell],
    patterns: &FxIndexMap<usize, CellPattern>,
    epsilon: f64,
    max_two_opt_passes: usize,
) -> Vec<usize> {
    if cells.is_empty() {
        return Vec::new();
    }

    let mut tour = greedy_seed(cells, patterns);
    two_opt_refine(&mut tour, patterns, epsilon, max_two_opt_passes);
    tour
}

/// Phase A: pick a deterministic starting cell, then repeatedly hop to
/// whichever unvisited cell's `entry` is nearest to the current position.
fn greedy_seed(cells: &[Cell], patterns: &FxIndexMap<usize, CellPattern>) -> Vec<usize> {
    let start = cells
        .iter()
        .min_by(|a, b| {
            a.left()
                .partial_cmp(&b.left())
                .expect("coordinates are finite")
                .then(
                    a.bottom()
                        .partial_cmp(&b.bottom())
                        .expect("coordinates are finite"),
                )
                .then(a.id().cmp(&b.id()))
        })
        .expect("cells is non-empty")
        .id();

    let mut visited: HashSet<usize> = HashSet::with_capacity(cells.len());
    visited.insert(start);
    let mut tour = vec![start];
    let mut current = patterns[&start].exit();

    while tour.len() < cells.len() {
        let next = cells
            .iter()
            .filter(|c| !visited.contains(&c.id()))
            .min_by(|a, b| {
                let da = current.distance_squared(patterns[&a.id()].entry());
                let db = current.distance_squared(patterns[&b.id()].entry());
                da.partial_cmp(&db)
                    .expect("coordinates are finite")
                    .then(a.id().cmp(&b.id()))
            })
            .expect("remaining cells is non-empty")
            .id();

        visited.insert(next);
        current = patterns[&next].exit();
        tour.push(next);
    }

    tour
}

/// Phase B: first-improvement 2-opt. Each candidate reverses a contiguous
/// window `tour[i..=j]`, leaving the start of the tour fixed. The full
/// transition cost is recomputed for every candidate rather than taken as a
/// four-edge difference: a cell's `entry`/`exit` are distinct fixed points
/// that do not swap when the tour direction through that stretch reverses,
/// so interior edges inside the window change too, not just its boundary.
fn two_opt_refine(
    tour: &mut Vec<usize>,
    patterns: &FxIndexMap<usize, CellPattern>,
    epsilon: f64,
    max_passes: usize,
) {
    let n = tour.len();
    if n < 3 {
        return;
    }

    let mut cost = transition_cost(tour, patterns);

    for _pass in 0..max_passes {
        let mut improved = false;

        'search: for i in 1..n.saturating_sub(2) {
            for j in (i + 1)..n {
                let mut candidate = tour.clone();
                candidate[i..=j].reverse();
                let candidate_cost = transition_cost(&candidate, patterns);

                if approx_lt(candidate_cost, cost, epsilon) {
                    *tour = candidate;
                    cost = candidate_cost;
                    improved = true;
                    break 'search;
                }
            }
        }

        if !improved {
            break;
        }
    }
}

/// Total straight-line distance from each cell's exit to the next cell's
/// entry, for the given visit order.
#[must_use]
pub fn transition_cost(order: &[usize], patterns: &FxIndexMap<usize, CellPattern>) -> f64 {
    order
        .windows(2)
        .map(|w| patterns[&w[0]].exit().distance(patterns[&w[1]].entry()))
        .sum()
}
