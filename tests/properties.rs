//! Property-based tests over the universal invariants spec.md section 8
//! lists: non-overlap with obstacles, free-space cover, deterministic
//! ordering, row pitch, alternating direction, 2-opt monotonicity,
//! permutation, segment continuity, and metadata consistency.

use proptest::prelude::*;
use wall_coverage_planner::{
    decompose, pattern, plan, transition_cost, Cell, CellPattern, FxIndexMap, Obstacle,
    PlanRequest, SegmentKind, ToolSpec, Wall, DEFAULT_EPSILON,
};

const WALL_SIZE: f64 = 20.0;

fn obstacle_strategy() -> impl Strategy<Value = Obstacle> {
    (
        0.0f64..WALL_SIZE - 1.0,
        0.0f64..WALL_SIZE - 1.0,
        1.0f64..6.0,
        1.0f64..6.0,
    )
        .prop_map(
        |(left, bottom, width, height)| {
            let right = (left + width).min(WALL_SIZE);
            let top = (bottom + height).min(WALL_SIZE);
            Obstacle::new(left, bottom, right, top)
        },
    )
}

fn obstacles_strategy() -> impl Strategy<Value = Vec<Obstacle>> {
    prop::collection::vec(obstacle_strategy(), 0..5)
}

fn tool_strategy() -> impl Strategy<Value = ToolSpec> {
    (0.5f64..3.0, 0.0f64..1.0).prop_map(|(width, margin_fraction)| {
        ToolSpec::new(width, width * margin_fraction * 0.9)
    })
}

fn rects_disjoint(a: (f64, f64, f64, f64), b: (f64, f64, f64, f64), epsilon: f64) -> bool {
    let (al, ab, ar, at) = a;
    let (bl, bb, br, bt) = b;
    ar <= bl + epsilon || al >= br - epsilon || at <= bb + epsilon || ab >= bt - epsilon
}

fn area(rect: (f64, f64, f64, f64)) -> f64 {
    let (l, b, r, t) = rect;
    (r - l).max(0.0) * (t - b).max(0.0)
}

/// Area of the union of axis-aligned obstacles, via inclusion-exclusion over
/// overlapping pairs merged by a sweep — simple O(n^2) reference
/// implementation used only to check the decomposer's output, never by the
/// planner itself.
fn union_area(obstacles: &[Obstacle]) -> f64 {
    if obstacles.is_empty() {
        return 0.0;
    }
    let mut xs: Vec<f64> = obstacles.iter().flat_map(|o| [o.left(), o.right()]).collect();
    xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
    xs.dedup_by(|a, b| (*a - *b).abs() < 1e-9);

    let mut total = 0.0;
    for w in xs.windows(2) {
        let (xl, xr) = (w[0], w[1]);
        if xr - xl <= 1e-9 {
            continue;
        }
        let mut intervals: Vec<(f64, f64)> = obstacles
            .iter()
            .filter(|o| o.right() > xl + 1e-9 && o.left() < xr - 1e-9)
            .map(|o| (o.bottom(), o.top()))
            .collect();
        intervals.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap());
        let mut merged: Vec<(f64, f64)> = Vec::new();
        for (b, t) in intervals {
            if let Some(last) = merged.last_mut() {
                if b <= last.1 + 1e-9 {
                    last.1 = last.1.max(t);
                    continue;
                }
            }
            merged.push((b, t));
        }
        let slab_height: f64 = merged.iter().map(|(b, t)| t - b).sum();
        total += slab_height * (xr - xl);
    }
    total
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn cells_never_overlap_obstacles(obstacles in obstacles_strategy()) {
        let wall = Wall::new(WALL_SIZE, WALL_SIZE);
        let cells = decompose(&wall, &obstacles, DEFAULT_EPSILON);
        for cell in &cells {
            for obstacle in &obstacles {
                let cell_rect = (cell.left(), cell.bottom(), cell.right(), cell.top());
                let obstacle_rect = (obstacle.left(), obstacle.bottom(), obstacle.right(), obstacle.top());
                prop_assert!(rects_disjoint(cell_rect, obstacle_rect, DEFAULT_EPSILON));
            }
        }
    }

    #[test]
    fn free_space_is_fully_covered(obstacles in obstacles_strategy()) {
        let wall = Wall::new(WALL_SIZE, WALL_SIZE);
        let cells = decompose(&wall, &obstacles, DEFAULT_EPSILON);
        let covered: f64 = cells.iter().map(|c| area((c.left(), c.bottom(), c.right(), c.top()))).sum();
        let expected = WALL_SIZE * WALL_SIZE - union_area(&obstacles);
        prop_assert!((covered - expected).abs() < 1e-3, "{covered} != {expected}");
    }

    #[test]
    fn plan_is_deterministic(obstacles in obstacles_strategy(), tool in tool_strategy()) {
        let request = PlanRequest::new(Wall::new(WALL_SIZE, WALL_SIZE), tool, obstacles);
        let a = plan(request.clone());
        let b = plan(request);
        prop_assert_eq!(a, b);
    }

    #[test]
    fn coverage_rows_match_expected_pitch(cell_height in 2.0f64..30.0, tool in tool_strategy()) {
        let cell = Cell::new(0, 0.0, 0.0, 5.0, cell_height);
        let p = pattern(&cell, &tool, DEFAULT_EPSILON);
        let pitch = tool.pitch();
        for w in p.segments().windows(2) {
            let dy = (w[1].start().y - w[0].start().y).abs();
            prop_assert!((dy - pitch).abs() < 1e-6, "{dy} != {pitch}");
        }
    }

    #[test]
    fn coverage_rows_alternate_direction(cell_height in 2.0f64..30.0, tool in tool_strategy()) {
        let cell = Cell::new(0, 0.0, 0.0, 5.0, cell_height);
        let p = pattern(&cell, &tool, DEFAULT_EPSILON);
        for w in p.segments().windows(2) {
            let dir_a = (w[0].end().x - w[0].start().x).signum();
            let dir_b = (w[1].end().x - w[1].start().x).signum();
            prop_assert_ne!(dir_a, dir_b);
        }
    }

    #[test]
    fn plan_metadata_matches_measured_segments(obstacles in obstacles_strategy(), tool in tool_strategy()) {
        let request = PlanRequest::new(Wall::new(WALL_SIZE, WALL_SIZE), tool, obstacles);
        if let Ok(result) = plan(request) {
            let coverage: f64 = result.segments.iter().filter(|s| s.kind() == SegmentKind::Coverage).map(|s| s.length()).sum();
            let transition: f64 = result.segments.iter().filter(|s| s.kind() == SegmentKind::Transition).map(|s| s.length()).sum();
            prop_assert!((coverage - result.metadata.coverage_length).abs() < 1e-6);
            prop_assert!((transition - result.metadata.transition_length).abs() < 1e-6);
            prop_assert!((result.metadata.total_length - (coverage + transition)).abs() < 1e-6);

            let mut ids: Vec<i32> = result.metadata.cell_order.clone();
            ids.sort_unstable();
            let expected: Vec<i32> = (0..result.metadata.num_cells as i32).collect();
            prop_assert_eq!(ids, expected);

            // Consecutive coverage rows within a cell are offset vertically
            // by the tool's pitch, not continuous; only segment pairs that
            // border a transition (cell exit -> transition, transition ->
            // next cell's entry) are required to touch.
            for w in result.segments.windows(2) {
                if w[0].kind() == SegmentKind::Transition || w[1].kind() == SegmentKind::Transition {
                    prop_assert!(w[0].end().distance(w[1].start()) < 1e-6);
                }
            }
        }
    }
}

#[test]
fn two_opt_never_increases_transition_cost() {
    let wall = Wall::new(WALL_SIZE, WALL_SIZE);
    let tool = ToolSpec::new(1.0, 0.0);
    let obstacles = vec![
        Obstacle::new(2.0, 2.0, 4.0, 8.0),
        Obstacle::new(6.0, 2.0, 8.0, 8.0),
        Obstacle::new(12.0, 4.0, 14.0, 16.0),
        Obstacle::new(16.0, 2.0, 18.0, 10.0),
    ];
    let cells = decompose(&wall, &obstacles, DEFAULT_EPSILON);
    let patterns: FxIndexMap<usize, CellPattern> = cells
        .iter()
        .map(|cell| (cell.id(), pattern(cell, &tool, DEFAULT_EPSILON)))
        .collect();

    let naive_order: Vec<usize> = cells.iter().map(|c| c.id()).collect();
    let naive_cost = transition_cost(&naive_order, &patterns);

    let request = PlanRequest::new(wall, tool, obstacles);
    let result = plan(request).unwrap();
    assert!(result.metadata.transition_length <= naive_cost + 1e-9);
}
