//! Per-cell boustrophedon scan generation.
//!
//! Each [`crate::Cell`] is swept bottom-to-top with horizontal coverage
//! rows, alternating scan direction so consecutive rows form a continuous
//! zig-zag. The vertical spacing between rows ("pitch") comes from the
//! tool's working width minus its overlap margin.

use crate::geometry::{approx_le, Point};
use crate::model::{Cell, CellPattern, PathSegment, SegmentKind, ToolSpec};

/// Generate the boustrophedon coverage pattern for a single cell.
///
/// Always returns a pattern with at least one coverage segment, even for
/// cells shorter than half the tool width (a centred single row is emitted
/// rather than silently dropping the cell).
#[must_use]
pub fn pattern(cell: &Cell, tool: &ToolSpec, epsilon: f64) -> CellPattern {
    let pitch = tool.pitch();
    let mut y = cell.bottom() + tool.width() / 2.0;
    let last_row_y = cell.top() - tool.width() / 2.0;
    let mut left_to_right = true;
    let mut segments = Vec::new();

    while approx_le(y, last_row_y, epsilon) {
        segments.push(row_segment(cell, y, left_to_right));
        y += pitch;
        left_to_right = !left_to_right;
    }

    if segments.is_empty() {
        let y = (cell.bottom() + cell.top()) / 2.0;
        segments.push(row_segment(cell, y, true));
    }

    CellPattern::new(cell.id(), segments)
}

fn row_segment(cell: &Cell, y: f64, left_to_right: bool) -> PathSegment {
    let left = Point::new(cell.left(), y);
    let right = Point::new(cell.right(), y);
    if left_to_right {
        PathSegment::new(left, right, SegmentKind::Coverage)
    } else {
        PathSegment::new(right, left, SegmentKind::Coverage)
    }
}
