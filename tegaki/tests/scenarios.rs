use tegaki::model::{CanvasSize, Point, Stroke};
use tegaki::{recognition_cells, segment};

fn canvas() -> CanvasSize {
    CanvasSize {
        width: 400.0,
        height: 400.0,
    }
}

// Dense rectangular cluster of points, 4 px pitch.
fn blob(x0: f32, y0: f32, x1: f32, y1: f32) -> Stroke {
    let mut points = Vec::new();
    let mut t = 0.0;
    let mut y = y0;
    while y <= y1 {
        let mut x = x0;
        while x <= x1 {
            points.push(Point { x, y, t });
            t += 1.0;
            x += 4.0;
        }
        y += 4.0;
    }
    Stroke { points }
}

#[test]
fn side_by_side_strokes_split_into_two_columns() {
    // Scenario A: horizontal gap far above the valley spacing floor.
    let strokes = vec![
        blob(50.0, 100.0, 90.0, 140.0),
        blob(200.0, 100.0, 240.0, 140.0),
    ];
    let seg = segment(&strokes, canvas());
    assert_eq!(seg.mesh.columns, 2);
    assert_eq!(seg.mesh.max_rows, 1);
    for cell in &seg.mesh.cells {
        assert_eq!(cell.stroke_indices.len(), 1, "one stroke per cell");
    }
    // Column 0 is the rightmost physical column, so it holds the
    // right-hand stroke.
    let col0 = seg.mesh.cell_at(0, 0).expect("cell (0,0)");
    assert_eq!(col0.stroke_indices, vec![1]);
    let col1 = seg.mesh.cell_at(1, 0).expect("cell (1,0)");
    assert_eq!(col1.stroke_indices, vec![0]);
}

#[test]
fn stacked_strokes_split_into_two_rows() {
    // Scenario B: vertical separation, horizontal overlap.
    let strokes = vec![
        blob(100.0, 50.0, 140.0, 90.0),
        blob(100.0, 200.0, 140.0, 240.0),
    ];
    let seg = segment(&strokes, canvas());
    assert_eq!(seg.mesh.columns, 1);
    assert_eq!(seg.mesh.max_rows, 2);
    // Rows are top-to-bottom: row 0 holds the upper stroke.
    let top = seg.mesh.cell_at(0, 0).expect("cell (0,0)");
    assert_eq!(top.stroke_indices, vec![0]);
    let bottom = seg.mesh.cell_at(0, 1).expect("cell (0,1)");
    assert_eq!(bottom.stroke_indices, vec![1]);
}

#[test]
fn empty_middle_region_produces_no_empty_interior_cell() {
    // Scenario C: room for three clusters, middle one empty.
    let strokes = vec![
        blob(20.0, 100.0, 60.0, 140.0),
        blob(320.0, 100.0, 360.0, 140.0),
    ];
    let seg = segment(&strokes, canvas());
    assert_eq!(seg.mesh.columns, 2);
    for cell in &seg.mesh.cells {
        assert!(
            !cell.stroke_indices.is_empty(),
            "no empty interior cell may survive"
        );
    }
}

#[test]
fn recognition_view_lists_non_empty_cells_in_reading_order() {
    let strokes = vec![
        blob(50.0, 100.0, 90.0, 140.0),
        blob(200.0, 100.0, 240.0, 140.0),
    ];
    let seg = segment(&strokes, canvas());
    let cells = recognition_cells(&seg, &strokes);
    assert_eq!(cells.len(), 2);
    assert_eq!((cells[0].column, cells[0].row), (0, 0));
    assert_eq!((cells[1].column, cells[1].row), (1, 0));
    // Bounds come from the assigned strokes, not the deformed mesh.
    assert_eq!(cells[0].stroke_indices, vec![1]);
    assert_eq!(cells[0].bounds.min_x, 200.0);
    assert_eq!(cells[0].bounds.max_x, 240.0);
    assert_eq!(cells[1].bounds.min_x, 50.0);
}

#[test]
fn deformed_quads_stay_oriented() {
    // Diagonal stroke in a single cell: the relaxed corners must still
    // form a left/right, top/bottom consistent quad after the clamp.
    let points = (0..=40)
        .map(|i| Point {
            x: 100.0 + i as f32,
            y: 100.0 + i as f32,
            t: i as f32,
        })
        .collect();
    let strokes = vec![Stroke { points }];
    let seg = segment(&strokes, canvas());
    assert_eq!(seg.mesh.cells.len(), 1);
    let [tl, tr, br, bl] = seg.mesh.cells[0].vertex_indices;
    let v = &seg.mesh.vertices;
    assert!(v[tl].x < v[tr].x);
    assert!(v[bl].x < v[br].x);
    assert!(v[tl].y < v[bl].y);
    assert!(v[tr].y < v[br].y);
    // The diagonal content actually pulled corners off the rectangle.
    assert!(
        v[tr].x < v[br].x || v[bl].y < v[br].y,
        "deformation should move at least one shared corner"
    );
}
