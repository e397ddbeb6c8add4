//! Stroke-to-cell assignment.

use crate::geometry::bounds::BoundingBox;
use crate::model::MeshGrid;

/// Assign every stroke to exactly one cell by its bounds center.
/// First containing cell in stored order wins; otherwise nearest
/// centroid. Clears any previous assignment.
pub fn assign_strokes(mesh: &mut MeshGrid, bounds: &[BoundingBox]) {
    for cell in &mut mesh.cells {
        cell.stroke_indices.clear();
    }
    if mesh.cells.is_empty() {
        return;
    }

    // Vertices do not move during assignment.
    let extents: Vec<(f32, f32, f32, f32)> = mesh
        .cells
        .iter()
        .map(|c| c.extent(&mesh.vertices))
        .collect();
    let centroids: Vec<(f32, f32)> = mesh
        .cells
        .iter()
        .map(|c| c.centroid(&mesh.vertices))
        .collect();

    for (stroke_idx, b) in bounds.iter().enumerate() {
        let (cx, cy) = (b.center_x, b.center_y);
        let mut target = None;
        for (cell_idx, &(min_x, min_y, max_x, max_y)) in extents.iter().enumerate() {
            if cx >= min_x && cx <= max_x && cy >= min_y && cy <= max_y {
                target = Some(cell_idx);
                break;
            }
        }
        let cell_idx = target.unwrap_or_else(|| nearest_centroid(&centroids, cx, cy));
        mesh.cells[cell_idx].stroke_indices.push(stroke_idx);
    }
}

fn nearest_centroid(centroids: &[(f32, f32)], cx: f32, cy: f32) -> usize {
    let mut best = 0;
    let mut best_d2 = f32::INFINITY;
    for (i, &(x, y)) in centroids.iter().enumerate() {
        let dx = cx - x;
        let dy = cy - y;
        let d2 = dx * dx + dy * dy;
        if d2 < best_d2 {
            best_d2 = d2;
            best = i;
        }
    }
    best
}
