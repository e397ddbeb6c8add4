use serde::{Deserialize, Serialize};

/// One captured input sample: canvas-pixel position plus milliseconds
/// since stroke-capture start. Immutable once captured.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
    pub t: f32,
}

/// One continuous pen-down-to-pen-up input. Owned by the caller;
/// referenced everywhere else by index, never copied into the mesh.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Stroke {
    pub points: Vec<Point>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

/// Mutable mesh corner. Lives in the mesh's flat vertex arena and is
/// shared by up to 4 adjacent cells via index.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub x: f32,
    pub y: f32,
}

/// One quadrilateral region of the mesh. `vertex_indices` point into
/// the owning mesh's arena in TL,TR,BR,BL order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub column: usize,
    pub row: usize,
    pub vertex_indices: [usize; 4],
    pub stroke_indices: Vec<usize>,
}

/// Shared-vertex quadrilateral grid. Cells are stored in reading
/// order: column ascending (column 0 is the rightmost physical
/// column), row ascending within a column.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MeshGrid {
    pub vertices: Vec<Vertex>,
    pub cells: Vec<GridCell>,
    pub columns: usize,
    pub max_rows: usize,
    pub estimated_char_size: f32,
}

/// Sole output of `segment`. Freshly constructed per call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segmentation {
    pub mesh: MeshGrid,
    pub estimated_char_size: f32,
    pub grid_columns: usize,
}

impl GridCell {
    /// Axis-aligned extent of the cell's 4 current vertices as
    /// (min_x, min_y, max_x, max_y).
    pub fn extent(&self, vertices: &[Vertex]) -> (f32, f32, f32, f32) {
        let mut min_x = f32::INFINITY;
        let mut min_y = f32::INFINITY;
        let mut max_x = f32::NEG_INFINITY;
        let mut max_y = f32::NEG_INFINITY;
        for &vi in &self.vertex_indices {
            let v = vertices[vi];
            min_x = min_x.min(v.x);
            min_y = min_y.min(v.y);
            max_x = max_x.max(v.x);
            max_y = max_y.max(v.y);
        }
        (min_x, min_y, max_x, max_y)
    }

    /// Larger of the cell's width and height, measured from its 4
    /// vertices.
    pub fn size(&self, vertices: &[Vertex]) -> f32 {
        let (min_x, min_y, max_x, max_y) = self.extent(vertices);
        (max_x - min_x).max(max_y - min_y)
    }

    /// Mean of the cell's 4 vertices.
    pub fn centroid(&self, vertices: &[Vertex]) -> (f32, f32) {
        let mut cx = 0.0;
        let mut cy = 0.0;
        for &vi in &self.vertex_indices {
            cx += vertices[vi].x;
            cy += vertices[vi].y;
        }
        (cx * 0.25, cy * 0.25)
    }
}

impl MeshGrid {
    /// The trivially-empty mesh returned for zero strokes.
    pub fn empty(estimated_char_size: f32) -> Self {
        MeshGrid {
            vertices: Vec::new(),
            cells: Vec::new(),
            columns: 0,
            max_rows: 0,
            estimated_char_size,
        }
    }

    pub fn cell_at(&self, column: usize, row: usize) -> Option<&GridCell> {
        self.cells
            .iter()
            .find(|c| c.column == column && c.row == row)
    }
}
