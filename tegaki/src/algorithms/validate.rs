//! Mesh validity checks: no empty interior cells, occupied cells close
//! enough in size.

use crate::geometry::tolerance::UNIFORMITY_RATIO;
use crate::model::MeshGrid;

pub fn is_valid(mesh: &MeshGrid) -> bool {
    !has_empty_interior(mesh) && sizes_uniform(mesh)
}

/// A zero-stroke cell flanked by stroke-bearing cells on both sides
/// along the same row or the same column is over-segmentation.
pub fn has_empty_interior(mesh: &MeshGrid) -> bool {
    for cell in &mesh.cells {
        if !cell.stroke_indices.is_empty() {
            continue;
        }
        let row_flanked = {
            let lower = occupied(mesh, |c| c.row == cell.row && c.column < cell.column);
            let upper = occupied(mesh, |c| c.row == cell.row && c.column > cell.column);
            lower && upper
        };
        let col_flanked = {
            let lower = occupied(mesh, |c| c.column == cell.column && c.row < cell.row);
            let upper = occupied(mesh, |c| c.column == cell.column && c.row > cell.row);
            lower && upper
        };
        if row_flanked || col_flanked {
            return true;
        }
    }
    false
}

/// Among stroke-bearing cells, the largest may not exceed the smallest
/// by more than the uniformity ratio. One or zero such cells are
/// uniform by definition.
pub fn sizes_uniform(mesh: &MeshGrid) -> bool {
    let mut min_size = f32::INFINITY;
    let mut max_size = f32::NEG_INFINITY;
    let mut occupied_cells = 0;
    for cell in &mesh.cells {
        if cell.stroke_indices.is_empty() {
            continue;
        }
        let size = cell.size(&mesh.vertices);
        min_size = min_size.min(size);
        max_size = max_size.max(size);
        occupied_cells += 1;
    }
    if occupied_cells <= 1 {
        return true;
    }
    max_size <= UNIFORMITY_RATIO * min_size
}

fn occupied(mesh: &MeshGrid, pred: impl Fn(&crate::model::GridCell) -> bool) -> bool {
    mesh.cells
        .iter()
        .any(|c| !c.stroke_indices.is_empty() && pred(c))
}
