//! Organic mesh deformation: relax shared vertices toward the stroke
//! content their cells border, then clamp corners back into the
//! correct quadrant around each cell's centroid.

use crate::geometry::tolerance::{
    BOUNDARY_PAD, DEFORM_DECAY, DEFORM_ITERATIONS, DEFORM_STRENGTH, QUAD_CLAMP_TOL,
};
use crate::model::{GridCell, MeshGrid, Stroke};

pub fn deform_mesh(mesh: &mut MeshGrid, strokes: &[Stroke]) {
    for iteration in 0..DEFORM_ITERATIONS {
        let strength = DEFORM_STRENGTH * (1.0 - DEFORM_DECAY * iteration as f32);

        // Each occupied cell proposes one target per corner; a shared
        // vertex averages every proposal it received this iteration.
        let mut proposals = vec![(0.0f32, 0.0f32, 0u32); mesh.vertices.len()];
        for cell in &mesh.cells {
            if cell.stroke_indices.is_empty() {
                continue;
            }
            if let Some(targets) = corner_targets(cell, strokes) {
                for (k, &(tx, ty)) in targets.iter().enumerate() {
                    let slot = &mut proposals[cell.vertex_indices[k]];
                    slot.0 += tx;
                    slot.1 += ty;
                    slot.2 += 1;
                }
            }
        }

        for (v, &(sx, sy, n)) in mesh.vertices.iter_mut().zip(&proposals) {
            if n == 0 {
                continue;
            }
            let inv = 1.0 / n as f32;
            v.x += (sx * inv - v.x) * strength;
            v.y += (sy * inv - v.y) * strength;
        }
    }
    ensure_valid_quads(mesh);
}

// Corner targets from the cell's stroke points, TL,TR,BR,BL: the
// point extreme in each diagonal direction, pushed outward by the
// boundary padding. None when the assigned strokes carry no points.
fn corner_targets(cell: &GridCell, strokes: &[Stroke]) -> Option<[(f32, f32); 4]> {
    let mut tl: Option<(f32, f32, f32)> = None; // (score, x, y)
    let mut tr: Option<(f32, f32, f32)> = None;
    let mut br: Option<(f32, f32, f32)> = None;
    let mut bl: Option<(f32, f32, f32)> = None;
    for &si in &cell.stroke_indices {
        let Some(stroke) = strokes.get(si) else { continue };
        for p in &stroke.points {
            pick_min(&mut tl, p.x + p.y, p.x, p.y);
            pick_max(&mut tr, p.x - p.y, p.x, p.y);
            pick_max(&mut br, p.x + p.y, p.x, p.y);
            pick_min(&mut bl, p.x - p.y, p.x, p.y);
        }
    }
    let (_, tlx, tly) = tl?;
    let (_, trx, try_) = tr?;
    let (_, brx, bry) = br?;
    let (_, blx, bly) = bl?;
    Some([
        (tlx - BOUNDARY_PAD, tly - BOUNDARY_PAD),
        (trx + BOUNDARY_PAD, try_ - BOUNDARY_PAD),
        (brx + BOUNDARY_PAD, bry + BOUNDARY_PAD),
        (blx - BOUNDARY_PAD, bly + BOUNDARY_PAD),
    ])
}

fn pick_min(best: &mut Option<(f32, f32, f32)>, score: f32, x: f32, y: f32) {
    if best.map_or(true, |(s, _, _)| score < s) {
        *best = Some((score, x, y));
    }
}

fn pick_max(best: &mut Option<(f32, f32, f32)>, score: f32, x: f32, y: f32) {
    if best.map_or(true, |(s, _, _)| score > s) {
        *best = Some((score, x, y));
    }
}

// Clamp each cell's corners a fixed margin into the correct quadrant
// around its own centroid. Shared vertices are written once per
// incident cell, in stored order; the last cell wins.
fn ensure_valid_quads(mesh: &mut MeshGrid) {
    for ci in 0..mesh.cells.len() {
        let [tl, tr, br, bl] = mesh.cells[ci].vertex_indices;
        let (cx, cy) = mesh.cells[ci].centroid(&mesh.vertices);
        let left = cx - QUAD_CLAMP_TOL;
        let right = cx + QUAD_CLAMP_TOL;
        let above = cy - QUAD_CLAMP_TOL;
        let below = cy + QUAD_CLAMP_TOL;
        mesh.vertices[tl].x = mesh.vertices[tl].x.min(left);
        mesh.vertices[tl].y = mesh.vertices[tl].y.min(above);
        mesh.vertices[tr].x = mesh.vertices[tr].x.max(right);
        mesh.vertices[tr].y = mesh.vertices[tr].y.min(above);
        mesh.vertices[br].x = mesh.vertices[br].x.max(right);
        mesh.vertices[br].y = mesh.vertices[br].y.max(below);
        mesh.vertices[bl].x = mesh.vertices[bl].x.min(left);
        mesh.vertices[bl].y = mesh.vertices[bl].y.max(below);
    }
}
