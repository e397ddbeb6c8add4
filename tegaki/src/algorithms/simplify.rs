//! Bounded mesh simplification: remove interior boundaries one at a
//! time and rebuild until valid or out of attempts. Best-effort, never
//! an error.

use crate::algorithms::assign::assign_strokes;
use crate::algorithms::divide::DivisionPlan;
use crate::algorithms::mesh::build_mesh;
use crate::algorithms::validate::{has_empty_interior, is_valid};
use crate::geometry::bounds::BoundingBox;
use crate::geometry::tolerance::SIMPLIFY_BUDGET;
use crate::model::MeshGrid;

/// Build, assign, validate; on invalidity simplify the plan and retry
/// up to the cycle budget. The plan is mutated in place so the caller
/// sees the surviving boundaries.
pub fn build_valid_mesh(
    plan: &mut DivisionPlan,
    bounds: &[BoundingBox],
    char_size: f32,
) -> MeshGrid {
    let mut mesh = rebuild(plan, bounds, char_size);
    for _ in 0..SIMPLIFY_BUDGET {
        if is_valid(&mesh) {
            break;
        }
        match simplify_once(plan, bounds, char_size) {
            Some(simpler) => mesh = simpler,
            // Nothing left to remove; a repeat cycle would be identical.
            None => break,
        }
    }
    mesh
}

fn rebuild(plan: &DivisionPlan, bounds: &[BoundingBox], char_size: f32) -> MeshGrid {
    let mut mesh = build_mesh(&plan.column_boundaries, &plan.row_boundaries, char_size);
    assign_strokes(&mut mesh, bounds);
    mesh
}

// First interior column-boundary removal that clears the
// empty-interior violations wins (uniformity is not re-checked here),
// then interior rows, then a full collapse of whichever axis still
// has interior boundaries.
fn simplify_once(
    plan: &mut DivisionPlan,
    bounds: &[BoundingBox],
    char_size: f32,
) -> Option<MeshGrid> {
    for i in 1..plan.column_boundaries.len().saturating_sub(1) {
        let mut candidate = plan.column_boundaries.clone();
        candidate.remove(i);
        let trial = DivisionPlan {
            column_boundaries: candidate,
            row_boundaries: plan.row_boundaries.clone(),
        };
        let mesh = rebuild(&trial, bounds, char_size);
        if !has_empty_interior(&mesh) {
            *plan = trial;
            return Some(mesh);
        }
    }
    for i in 1..plan.row_boundaries.len().saturating_sub(1) {
        let mut candidate = plan.row_boundaries.clone();
        candidate.remove(i);
        let trial = DivisionPlan {
            column_boundaries: plan.column_boundaries.clone(),
            row_boundaries: candidate,
        };
        let mesh = rebuild(&trial, bounds, char_size);
        if !has_empty_interior(&mesh) {
            *plan = trial;
            return Some(mesh);
        }
    }
    if plan.column_boundaries.len() > 2 {
        plan.column_boundaries = collapse(&plan.column_boundaries);
    } else if plan.row_boundaries.len() > 2 {
        plan.row_boundaries = collapse(&plan.row_boundaries);
    } else {
        return None;
    }
    Some(rebuild(plan, bounds, char_size))
}

fn collapse(boundaries: &[f32]) -> Vec<f32> {
    match (boundaries.first(), boundaries.last()) {
        (Some(&a), Some(&b)) => vec![a, b],
        _ => boundaries.to_vec(),
    }
}
