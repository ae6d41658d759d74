//! The planner's public entry point: validates a [`PlanRequest`], then runs
//! it through the four-stage pipeline (decompose → pattern → order →
//! assemble) described in spec.md section 2.

use crate::assemble::assemble;
use crate::decompose::decompose;
use crate::error::PlanError;
use crate::model::{CellPattern, PlanRequest, PlanResult, PlannerConfig};
use crate::order::{self, FxIndexMap};
use crate::pattern::pattern;

/// Compute a complete coverage plan for `request`, using the default
/// [`PlannerConfig`].
pub fn plan(request: PlanRequest) -> Result<PlanResult, PlanError> {
    plan_with_config(request, PlannerConfig::default())
}

/// Compute a complete coverage plan for `request`, with explicit control
/// over the epsilon tolerance and 2-opt iteration cap.
///
/// `plan` is a pure function: it holds no state between calls and is safe
/// to invoke concurrently from multiple threads.
pub fn plan_with_config(request: PlanRequest, config: PlannerConfig) -> Result<PlanResult, PlanError> {
    let span = tracing::debug_span!(
        "plan",
        wall_width = request.wall.width(),
        wall_height = request.wall.height(),
        obstacles = request.obstacles.len()
    );
    let _enter = span.enter();

    validate(&request)?;
    let epsilon = config.epsilon;

    let cells = {
        let _span = tracing::debug_span!("decompose").entered();
        let cells = decompose(&request.wall, &request.obstacles, epsilon);
        tracing::debug!(num_cells = cells.len(), "decomposition complete");
        cells
    };

    let patterns: FxIndexMap<usize, CellPattern> = {
        let _span = tracing::debug_span!("pattern").entered();
        cells
            .iter()
            .map(|cell| (cell.id(), pattern(cell, &request.tool, epsilon)))
            .collect()
    };

    let visit_order = {
        let _span = tracing::debug_span!("order").entered();
        let visit_order = order::order(&cells, &patterns, epsilon, config.max_two_opt_passes);
        tracing::debug!(
            transition_cost = order::transition_cost(&visit_order, &patterns),
            "ordering complete"
        );
        visit_order
    };

    let result = {
        let _span = tracing::debug_span!("assemble").entered();
        assemble(&cells, &patterns, &visit_order, &request.tool)
    };

    tracing::debug!(
        total_length = result.metadata.total_length,
        coverage_efficiency = result.metadata.coverage_efficiency,
        "plan complete"
    );
    Ok(result)
}

/// Validate `request` against spec.md section 7's precondition list. Raised
/// once, before any stage runs; stages downstream of here trust their
/// inputs.
fn validate(request: &PlanRequest) -> Result<(), PlanError> {
    let wall = &request.wall;
    if wall.width() <= 0.0 || wall.height() <= 0.0 {
        return Err(PlanError::InvalidDimensions {
            width: wall.width(),
            height: wall.height(),
        });
    }

    let tool = &request.tool;
    if tool.width() <= 0.0 || tool.overlap_margin() < 0.0 || tool.overlap_margin() >= tool.width() {
        return Err(PlanError::InvalidTool {
            width: tool.width(),
            overlap_margin: tool.overlap_margin(),
        });
    }

    for (index, obstacle) in request.obstacles.iter().enumerate() {
        if let Err(reason) = validate_obstacle(obstacle, wall) {
            return Err(PlanError::InvalidObstacle { index, reason });
        }
    }

    Ok(())
}

fn validate_obstacle(obstacle: &crate::model::Obstacle, wall: &crate::model::Wall) -> Result<(), String> {
    if obstacle.left() >= obstacle.right() {
        return Err(format!(
            "left ({}) must be less than right ({})",
            obstacle.left(),
            obstacle.right()
        ));
    }
    if obstacle.bottom() >= obstacle.top() {
        return Err(format!(
            "bottom ({}) must be less than top ({})",
            obstacle.bottom(),
            obstacle.top()
        ));
    }
    if obstacle.left() < 0.0 || obstacle.right() > wall.width() {
        return Err(format!(
            "horizontal extent [{}, {}] must lie within [0, {}]",
            obstacle.left(),
            obstacle.right(),
            wall.width()
        ));
    }
    if obstacle.bottom() < 0.0 || obstacle.top() > wall.height() {
        return Err(format!(
            "vertical extent [{}, {}] must lie within [0, {}]",
            obstacle.bottom(),
            obstacle.top(),
            wall.height()
        ));
    }
    Ok(())
}
