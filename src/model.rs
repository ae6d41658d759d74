//! The planner's data model: [`Wall`], [`Obstacle`], [`ToolSpec`], [`Cell`],
//! [`PathSegment`] and the [`PlanRequest`]/[`PlanResult`] boundary types.
//!
//! Every type here is an immutable value produced by one stage and
//! consumed by the next. Nothing in this module mutates after
//! construction; the pipeline in [`crate::plan`] builds each stage's
//! output fresh from the one before it.

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

use crate::geometry::Point;

/// The rectangular wall being covered. Width and height must be positive;
/// validated once, at [`crate::plan`]'s entry.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wall {
    width: f64,
    height: f64,
}

impl Wall {
    /// Create a new wall with the given `width` and `height`.
    #[inline]
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// The wall's width, along the x-axis.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The wall's height, along the y-axis.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

/// An axis-aligned rectangular obstacle in wall coordinates. Obstacles may
/// overlap one another; the decomposer treats overlapping obstacles as
/// their union.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Obstacle {
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

impl Obstacle {
    /// Create a new obstacle from its four edges.
    #[inline]
    #[must_use]
    pub fn new(left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// The obstacle's left edge, in wall x-coordinates.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// The obstacle's bottom edge, in wall y-coordinates.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// The obstacle's right edge, in wall x-coordinates.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// The obstacle's top edge, in wall y-coordinates.
    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }
}

/// The finishing tool's physical working width and per-row overlap margin.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToolSpec {
    width: f64,
    overlap_margin: f64,
}

impl ToolSpec {
    /// Create a new tool spec with the given `width` and `overlap_margin`.
    #[inline]
    #[must_use]
    pub fn new(width: f64, overlap_margin: f64) -> Self {
        Self {
            width,
            overlap_margin,
        }
    }

    /// The tool's physical working width.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// The per-row overlap margin subtracted from `width` to produce the
    /// row [`pitch`](ToolSpec::pitch).
    #[inline]
    #[must_use]
    pub fn overlap_margin(&self) -> f64 {
        self.overlap_margin
    }

    /// The effective vertical spacing between consecutive coverage rows:
    /// `width - overlap_margin`.
    #[inline]
    #[must_use]
    pub fn pitch(&self) -> f64 {
        self.width - self.overlap_margin
    }
}

/// An axis-aligned rectangular region of obstacle-free wall space, produced
/// by the decomposer. A cell's `id` is stable for the lifetime of a single
/// `plan` invocation and is never reused.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    id: usize,
    left: f64,
    bottom: f64,
    right: f64,
    top: f64,
}

impl Cell {
    /// Create a new cell with the given `id` and edges.
    #[inline]
    #[must_use]
    pub fn new(id: usize, left: f64, bottom: f64, right: f64, top: f64) -> Self {
        Self {
            id,
            left,
            bottom,
            right,
            top,
        }
    }

    /// The cell's stable id, assigned in decomposer emission order.
    #[inline]
    #[must_use]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The cell's left edge.
    #[inline]
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// The cell's bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    /// The cell's right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// The cell's top edge.
    #[inline]
    #[must_use]
    pub fn top(&self) -> f64 {
        self.top
    }

    /// The cell's width: `right - left`.
    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// The cell's height: `top - bottom`.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

/// Whether a [`PathSegment`] is an active coverage pass or an idle
/// transition between cells.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// A horizontal pass generated by the pattern generator.
    Coverage,
    /// A straight-line move between a cell's exit and the next cell's entry.
    Transition,
}

/// An ordered pair of points the tool travels between, tagged with its
/// [`SegmentKind`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathSegment {
    start: Point,
    end: Point,
    kind: SegmentKind,
}

impl PathSegment {
    /// Create a new segment from `start` to `end`, of the given `kind`.
    #[inline]
    #[must_use]
    pub fn new(start: Point, end: Point, kind: SegmentKind) -> Self {
        Self { start, end, kind }
    }

    /// The segment's start point.
    #[inline]
    #[must_use]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The segment's end point.
    #[inline]
    #[must_use]
    pub fn end(&self) -> Point {
        self.end
    }

    /// Whether this is a coverage or transition segment.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// The segment's Euclidean length.
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A cell's generated coverage pattern, plus the `entry`/`exit` points the
/// orderer and assembler reason about. Produced by [`crate::pattern::pattern`]
/// and consumed by [`crate::order::order`] and [`crate::assemble::assemble`].
#[derive(Debug, Clone, PartialEq)]
pub struct CellPattern {
    cell_id: usize,
    segments: Vec<PathSegment>,
    entry: Point,
    exit: Point,
}

impl CellPattern {
    /// Build a pattern from a non-empty list of coverage segments.
    ///
    /// # Panics
    ///
    /// Panics if `segments` is empty; [`crate::pattern::pattern`] never
    /// produces an empty pattern, per spec.
    #[inline]
    #[must_use]
    pub fn new(cell_id: usize, segments: Vec<PathSegment>) -> Self {
        let entry = segments.first().expect("pattern must be non-empty").start();
        let exit = segments.last().expect("pattern must be non-empty").end();
        Self {
            cell_id,
            segments,
            entry,
            exit,
        }
    }

    /// The id of the cell this pattern covers.
    #[inline]
    #[must_use]
    pub fn cell_id(&self) -> usize {
        self.cell_id
    }

    /// The pattern's coverage segments, in scan order.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The first segment's start point.
    #[inline]
    #[must_use]
    pub fn entry(&self) -> Point {
        self.entry
    }

    /// The last segment's end point.
    #[inline]
    #[must_use]
    pub fn exit(&self) -> Point {
        self.exit
    }
}

/// Tunable algorithm knobs that do not change the planner's semantics, only
/// its numeric tolerance and optimization effort. This is configuration of
/// the algorithm's own parameters, not of a deployment surface: the core
/// still takes no environment variables, files, or CLI arguments.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Tolerance used for all geometric comparisons. Defaults to `1e-6`.
    pub epsilon: f64,
    /// Maximum number of 2-opt outer passes. Defaults to `50`.
    pub max_two_opt_passes: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            epsilon: crate::geometry::DEFAULT_EPSILON,
            max_two_opt_passes: 50,
        }
    }
}

/// A fully-specified planning request: a wall, a tool, and a set of
/// obstacles. Validated once, at the entry to [`crate::plan`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanRequest {
    /// The wall to cover.
    pub wall: Wall,
    /// The finishing tool's working width and overlap margin.
    pub tool: ToolSpec,
    /// Axis-aligned obstacles to avoid. May be empty.
    pub obstacles: Vec<Obstacle>,
}

impl PlanRequest {
    /// Create a new plan request.
    #[inline]
    #[must_use]
    pub fn new(wall: Wall, tool: ToolSpec, obstacles: Vec<Obstacle>) -> Self {
        Self {
            wall,
            tool,
            obstacles,
        }
    }
}

/// Summary statistics describing a computed [`PlanResult`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Metadata {
    /// Sum of the length of every coverage segment.
    pub coverage_length: f64,
    /// Sum of the length of every transition segment.
    pub transition_length: f64,
    /// `coverage_length + transition_length`.
    pub total_length: f64,
    /// Coverage length achievable with zero transitions, a lower bound.
    pub theoretical_min: f64,
    /// `theoretical_min / total_length`, clamped to `[0, 1]`; `1.0` when
    /// `total_length` is zero.
    pub coverage_efficiency: f64,
    /// Number of cells produced by the decomposer.
    pub num_cells: usize,
    /// The cell visit order chosen by the orderer, as cell ids.
    pub cell_order: Vec<i32>,
}

/// The planner's output: an ordered path plus its summary [`Metadata`].
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PlanResult {
    /// The complete ordered path, coverage and transition segments
    /// interleaved.
    pub segments: Vec<PathSegment>,
    /// Summary statistics over `segments`.
    pub metadata: Metadata,
}
