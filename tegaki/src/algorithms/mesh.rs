//! Shared-vertex mesh construction. Vertices live in one flat arena;
//! cells reference corners by index, so adjacent cells share edges
//! without aliasing.

use crate::model::{GridCell, MeshGrid, Vertex};

/// Build a mesh from ascending boundary arrays. Cells are emitted in
/// reading order: column ascending, row ascending within a column.
pub fn build_mesh(
    column_boundaries: &[f32],
    row_boundaries: &[f32],
    estimated_char_size: f32,
) -> MeshGrid {
    let num_columns = column_boundaries.len().saturating_sub(1);
    let num_rows = row_boundaries.len().saturating_sub(1);
    if num_columns == 0 || num_rows == 0 {
        return single_cell_mesh(column_boundaries, row_boundaries, estimated_char_size);
    }

    // Vertex arena at the Cartesian product of the boundary arrays.
    // Vertex (i, j) sits at index i * (num_rows + 1) + j.
    let stride = num_rows + 1;
    let mut vertices = Vec::with_capacity((num_columns + 1) * stride);
    for &x in column_boundaries {
        for &y in row_boundaries {
            vertices.push(Vertex { x, y });
        }
    }

    let mut cells = Vec::with_capacity(num_columns * num_rows);
    for column in 0..num_columns {
        // Logical column 0 maps to the rightmost physical column.
        let pc = num_columns - 1 - column;
        for row in 0..num_rows {
            let tl = pc * stride + row;
            let tr = (pc + 1) * stride + row;
            let br = (pc + 1) * stride + row + 1;
            let bl = pc * stride + row + 1;
            cells.push(GridCell {
                column,
                row,
                vertex_indices: [tl, tr, br, bl],
                stroke_indices: Vec::new(),
            });
        }
    }

    MeshGrid {
        vertices,
        cells,
        columns: num_columns,
        max_rows: num_rows,
        estimated_char_size,
    }
}

/// Degenerate boundary input collapses to one cell spanning whatever
/// extent the arrays still carry.
fn single_cell_mesh(
    column_boundaries: &[f32],
    row_boundaries: &[f32],
    estimated_char_size: f32,
) -> MeshGrid {
    let (x0, x1) = extremes(column_boundaries);
    let (y0, y1) = extremes(row_boundaries);
    let vertices = vec![
        Vertex { x: x0, y: y0 },
        Vertex { x: x1, y: y0 },
        Vertex { x: x1, y: y1 },
        Vertex { x: x0, y: y1 },
    ];
    let cells = vec![GridCell {
        column: 0,
        row: 0,
        vertex_indices: [0, 1, 2, 3],
        stroke_indices: Vec::new(),
    }];
    MeshGrid {
        vertices,
        cells,
        columns: 1,
        max_rows: 1,
        estimated_char_size,
    }
}

fn extremes(boundaries: &[f32]) -> (f32, f32) {
    match (boundaries.first(), boundaries.last()) {
        (Some(&a), Some(&b)) => (a, b),
        _ => (0.0, 0.0),
    }
}
