//! Vertical-sweep cellular decomposition: partitions the obstacle-free wall
//! area into axis-aligned [`Cell`]s.
//!
//! The wall is sliced into vertical slabs at every obstacle edge, then each
//! slab is swept bottom-to-top, emitting a cell for every free span between
//! (or above/below) the obstacles that intersect that slab. Overlapping or
//! nested obstacles within a slab merge naturally because the sweep tracks
//! only the highest `top` seen so far.

use crate::geometry::{approx_eq, approx_gt, approx_lt};
use crate::model::{Cell, Obstacle, Wall};

/// Partition the free space of `wall`, minus `obstacles`, into cells.
///
/// Callers must have already validated `wall` and `obstacles` (see
/// [`crate::plan`]); this function trusts its input and never fails.
#[must_use]
pub fn decompose(wall: &Wall, obstacles: &[Obstacle], epsilon: f64) -> Vec<Cell> {
    let critical_xs = critical_x_coordinates(wall, obstacles, epsilon);
    let mut cells = Vec::new();
    let mut next_id = 0usize;

    for window in critical_xs.windows(2) {
        let (xl, xr) = (window[0], window[1]);
        if !approx_gt(xr - xl, 0.0, epsilon) {
            continue;
        }
        sweep_slab(xl, xr, wall.height(), obstacles, epsilon, &mut next_id, &mut cells);
    }

    cells
}

/// Build the sorted, epsilon-deduplicated set of x-coordinates that bound
/// every vertical slab: the wall's own edges plus every obstacle's left and
/// right edge.
fn critical_x_coordinates(wall: &Wall, obstacles: &[Obstacle], epsilon: f64) -> Vec<f64> {
    let mut xs = Vec::with_capacity(2 + obstacles.len() * 2);
    xs.push(0.0);
    xs.push(wall.width());
    for o in obstacles {
        xs.push(o.left());
        xs.push(o.right());
    }
    xs.sort_by(|a, b| a.partial_cmp(b).expect("coordinates are finite"));

    let mut dedup = Vec::with_capacity(xs.len());
    for x in xs {
        match dedup.last() {
            Some(&last) if approx_eq(x, last, epsilon) => {}
            _ => dedup.push(x),
        }
    }
    dedup
}

/// Emit cells for the free y-spans of a single vertical slab `[xl, xr]`,
/// sweeping upward past every obstacle interval that overlaps it.
fn sweep_slab(
    xl: f64,
    xr: f64,
    wall_height: f64,
    obstacles: &[Obstacle],
    epsilon: f64,
    next_id: &mut usize,
    cells: &mut Vec<Cell>,
) {
    let mut intervals: Vec<(f64, f64)> = obstacles
        .iter()
        .filter(|o| approx_gt(o.right(), xl, epsilon) && approx_lt(o.left(), xr, epsilon))
        .map(|o| (o.bottom(), o.top()))
        .collect();
    intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).expect("coordinates are finite"));

    let mut current_y = 0.0;
    for (bottom, top) in intervals {
        if approx_lt(current_y, bottom, epsilon) {
            cells.push(Cell::new(*next_id, xl, current_y, xr, bottom));
            *next_id += 1;
        }
        current_y = current_y.max(top);
    }
    if approx_lt(current_y, wall_height, epsilon) {
        cells.push(Cell::new(*next_id, xl, current_y, xr, wall_height));
        *next_id += 1;
    }
}
