//! Path assembly: concatenates each cell's coverage pattern in visit order,
//! stitching cells together with transition segments, then derives the
//! summary [`Metadata`] spec.md section 4.4 calls for.

use crate::model::{Cell, CellPattern, Metadata, PathSegment, PlanResult, SegmentKind, ToolSpec};
use crate::order::FxIndexMap;

/// Build the final [`PlanResult`] from a decomposition, its per-cell
/// patterns, and a chosen visit order.
#[must_use]
pub fn assemble(
    cells: &[Cell],
    patterns: &FxIndexMap<usize, CellPattern>,
    order: &[usize],
    tool: &ToolSpec,
) -> PlanResult {
    let segments = concatenate(patterns, order);
    let metadata = summarize(cells, &segments, order, tool);
    PlanResult { segments, metadata }
}

/// Lay each cell's coverage segments end to end, inserting one transition
/// segment between consecutive cells. Coincident exit/entry points still
/// produce a zero-length transition: downstream consumers may filter those,
/// the planner does not, to keep segment order a direct mirror of the
/// chosen cell order.
fn concatenate(patterns: &FxIndexMap<usize, CellPattern>, order: &[usize]) -> Vec<PathSegment> {
    let mut segments = Vec::new();
    for (index, &cell_id) in order.iter().enumerate() {
        let current = &patterns[&cell_id];
        segments.extend(current.segments().iter().copied());

        if let Some(&next_id) = order.get(index + 1) {
            let next = &patterns[&next_id];
            segments.push(PathSegment::new(
                current.exit(),
                next.entry(),
                SegmentKind::Transition,
            ));
        }
    }
    segments
}

fn summarize(cells: &[Cell], segments: &[PathSegment], order: &[usize], tool: &ToolSpec) -> Metadata {
    let coverage_length = length_of(segments, SegmentKind::Coverage);
    let transition_length = length_of(segments, SegmentKind::Transition);
    let total_length = coverage_length + transition_length;
    let theoretical_min = theoretical_minimum(cells, tool);

    let coverage_efficiency = if total_length <= 0.0 {
        1.0
    } else {
        (theoretical_min / total_length).clamp(0.0, 1.0)
    };

    Metadata {
        coverage_length,
        transition_length,
        total_length,
        theoretical_min,
        coverage_efficiency,
        num_cells: cells.len(),
        cell_order: order.iter().map(|&id| id as i32).collect(),
    }
}

fn length_of(segments: &[PathSegment], kind: SegmentKind) -> f64 {
    segments
        .iter()
        .filter(|s| s.kind() == kind)
        .map(PathSegment::length)
        .sum()
}

/// The coverage length that would result if every cell were visited with no
/// transitions at all: for each cell, the number of rows a boustrophedon
/// scan would take (height divided by pitch, rounded up) times its width.
fn theoretical_minimum(cells: &[Cell], tool: &ToolSpec) -> f64 {
    let pitch = tool.pitch();
    cells
        .iter()
        .map(|c| (c.height() / pitch).ceil() * c.width())
        .sum()
}
