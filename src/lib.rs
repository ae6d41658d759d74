//! wall_coverage_planner
//! =====================
//!
//! A pure, obstacle-avoiding boustrophedon coverage path planner for a
//! rectangular wall and a finishing tool of known working width.
//!
//! The planner is a four-stage pipeline: vertical-sweep cellular
//! decomposition splits the free wall area around obstacles into
//! rectangular [`Cell`]s; a per-cell pattern generator sweeps each cell
//! with alternating horizontal rows at a pitch derived from the tool's
//! width and overlap margin; a greedy-plus-2-opt orderer picks a visit
//! order that keeps inter-cell travel short; and an assembler stitches
//! every cell's pattern together with transition segments and computes
//! summary statistics.
//!
//! ```
//! use wall_coverage_planner::{plan, Obstacle, PlanRequest, ToolSpec, Wall};
//!
//! let request = PlanRequest::new(
//!     Wall::new(10.0, 10.0),
//!     ToolSpec::new(1.0, 0.0),
//!     vec![Obstacle::new(4.0, 4.0, 6.0, 6.0)],
//! );
//! let result = plan(request).unwrap();
//! assert_eq!(result.metadata.num_cells, 4);
//! ```

mod assemble;
mod decompose;
mod error;
mod geometry;
mod model;
mod order;
mod pattern;
mod plan;

pub use self::{
    assemble::assemble,
    decompose::decompose,
    error::PlanError,
    geometry::{Point, DEFAULT_EPSILON},
    model::{
        Cell, CellPattern, Metadata, Obstacle, PathSegment, PlanRequest, PlanResult,
        PlannerConfig, SegmentKind, ToolSpec, Wall,
    },
    order::{order, transition_cost, FxIndexMap},
    pattern::pattern,
    plan::{plan, plan_with_config},
};
