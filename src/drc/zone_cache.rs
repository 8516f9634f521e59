use crate::board::Board;
use crate::geom::{math::EP, Poly, Pt};

// Computes each zone's smoothed filled polygon once per run (§4.8): the
// zone's `filled` cache if the host already ran the filler, otherwise its
// raw outline with corners chamfered by `corner_smoothing`. Collinear
// corners are already dropped by `Poly::new` at construction time, so
// chamfering only ever touches genuine corners — the "colinear corners
// preserved from the unsmoothed outline" requirement falls out of the
// polygon constructor rather than needing special-casing here.
pub fn smoothed_zones(board: &Board) -> Vec<Option<Poly>> {
    board
        .zones()
        .iter()
        .map(|z| {
            let base = z.filled.as_ref().unwrap_or(&z.outline);
            if base.pts().len() < 3 {
                return None;
            }
            Some(chamfer(base, z.corner_smoothing))
        })
        .collect()
}

fn chamfer(poly: &Poly, radius: f64) -> Poly {
    if radius <= EP {
        return poly.clone();
    }
    let pts = poly.pts();
    let n = pts.len();
    let mut out = Vec::with_capacity(n * 2);
    for i in 0..n {
        let prev = pts[(i + n - 1) % n];
        let cur = pts[i];
        let next = pts[(i + 1) % n];
        let to_prev = prev - cur;
        let to_next = next - cur;
        let d_prev = to_prev.mag();
        let d_next = to_next.mag();
        let cut = radius.min(d_prev / 2.0).min(d_next / 2.0);
        if cut <= EP {
            out.push(cur);
            continue;
        }
        out.push(cur + to_prev * (cut / d_prev));
        out.push(cur + to_next * (cut / d_next));
    }
    Poly::new(dedup(out), poly.holes().to_vec())
}

// Chamfering a very short edge can produce two coincident points; collapse
// them so `Poly::new`'s collinearity pass sees a clean loop.
fn dedup(pts: Vec<Pt>) -> Vec<Pt> {
    let mut out: Vec<Pt> = Vec::with_capacity(pts.len());
    for p in pts {
        if out.last().map_or(true, |&l| (l - p).mag() > EP) {
            out.push(p);
        }
    }
    out
}
