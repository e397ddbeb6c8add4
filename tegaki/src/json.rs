use crate::model::Segmentation;
use serde::Serialize;
use serde_json::Value;

/// Mesh geometry for the overlay renderer. Debug visualization only;
/// no downstream computation consumes this.
pub fn segmentation_json(seg: &Segmentation) -> Value {
    #[derive(Serialize)]
    struct VertexSer {
        x: f32,
        y: f32,
    }
    #[derive(Serialize)]
    struct CellSer {
        column: usize,
        row: usize,
        corners: [usize; 4],
        strokes: Vec<usize>,
    }
    #[derive(Serialize)]
    struct MeshSer {
        columns: usize,
        max_rows: usize,
        estimated_char_size: f32,
        vertices: Vec<VertexSer>,
        cells: Vec<CellSer>,
    }

    let mesh = MeshSer {
        columns: seg.mesh.columns,
        max_rows: seg.mesh.max_rows,
        estimated_char_size: seg.estimated_char_size,
        vertices: seg
            .mesh
            .vertices
            .iter()
            .map(|v| VertexSer { x: v.x, y: v.y })
            .collect(),
        cells: seg
            .mesh
            .cells
            .iter()
            .map(|c| CellSer {
                column: c.column,
                row: c.row,
                corners: c.vertex_indices,
                strokes: c.stroke_indices.clone(),
            })
            .collect(),
    };
    serde_json::to_value(mesh).unwrap_or(Value::Null)
}
