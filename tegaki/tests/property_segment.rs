use proptest::prelude::*;
use tegaki::model::{CanvasSize, Point, Stroke};
use tegaki::segment;

fn stroke_strategy() -> impl Strategy<Value = Stroke> {
    prop::collection::vec((0u16..400, 0u16..400), 1..30).prop_map(|pts| Stroke {
        points: pts
            .into_iter()
            .enumerate()
            .map(|(i, (x, y))| Point {
                x: x as f32,
                y: y as f32,
                t: i as f32 * 8.0,
            })
            .collect(),
    })
}

proptest! {
    #[test]
    fn segmentation_partitions_and_orders(strokes in prop::collection::vec(stroke_strategy(), 1..6)) {
        let canvas = CanvasSize { width: 400.0, height: 400.0 };
        let seg = segment(&strokes, canvas);

        // At least one cell, and the declared shape matches.
        prop_assert!(seg.mesh.columns >= 1);
        prop_assert!(seg.mesh.max_rows >= 1);
        prop_assert_eq!(seg.grid_columns, seg.mesh.columns);
        prop_assert_eq!(seg.mesh.cells.len(), seg.mesh.columns * seg.mesh.max_rows);

        // Partition: every stroke index in exactly one cell.
        let mut seen = vec![0u32; strokes.len()];
        for cell in &seg.mesh.cells {
            prop_assert!(cell.column < seg.mesh.columns);
            prop_assert!(cell.row < seg.mesh.max_rows);
            for &vi in &cell.vertex_indices {
                prop_assert!(vi < seg.mesh.vertices.len());
            }
            for &si in &cell.stroke_indices {
                prop_assert!(si < strokes.len());
                seen[si] += 1;
            }
        }
        prop_assert!(seen.iter().all(|&n| n == 1));

        // Reading order: column ascending, row ascending within.
        for w in seg.mesh.cells.windows(2) {
            prop_assert!(w[0].column <= w[1].column);
            if w[0].column == w[1].column {
                prop_assert!(w[0].row <= w[1].row);
            }
        }

        // All output coordinates stay finite.
        for v in &seg.mesh.vertices {
            prop_assert!(v.x.is_finite() && v.y.is_finite());
        }
    }

    #[test]
    fn segmentation_is_deterministic(strokes in prop::collection::vec(stroke_strategy(), 0..5)) {
        let canvas = CanvasSize { width: 400.0, height: 400.0 };
        let a = segment(&strokes, canvas);
        let b = segment(&strokes, canvas);
        prop_assert_eq!(a, b);
    }
}
