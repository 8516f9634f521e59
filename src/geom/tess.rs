use crate::geom::point::{pt, Pt};

// Chord sagitta tolerance for arc/bezier tessellation: the maximum allowed
// deviation between the true curve and its polyline approximation,
// expressed as a fraction of the local radius.
const SAGITTA_TOLERANCE: f64 = 1e-3;

// Approximates a circular arc as a polyline whose chord sagitta error is
// bounded by `SAGITTA_TOLERANCE * radius`. `start` is the arc's starting
// point; `angle_deg` is signed sweep (positive = CCW) about `center`.
pub fn arc_to_polyline(center: Pt, start: Pt, angle_deg: f64) -> Vec<Pt> {
    let radius = center.dist(start);
    if radius <= 0.0 || angle_deg == 0.0 {
        return vec![start];
    }
    // sagitta = r * (1 - cos(theta/2)) <= tol * r  =>  theta <= 2*acos(1-tol)
    let max_step_rad = 2.0 * (1.0 - SAGITTA_TOLERANCE).acos();
    let sweep_rad = angle_deg.to_radians();
    let steps = ((sweep_rad.abs() / max_step_rad).ceil() as usize).max(1);

    let start_angle = (start.y - center.y).atan2(start.x - center.x);
    let mut pts = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let t = start_angle + sweep_rad * (i as f64 / steps as f64);
        pts.push(pt(center.x + radius * t.cos(), center.y + radius * t.sin()));
    }
    pts
}

// Tessellates a cubic bezier defined by four control points to a polyline
// with the same sagitta tolerance as `arc_to_polyline`, by uniform
// subdivision refined until consecutive-segment deviation is within
// tolerance of the curve's local chord length.
pub fn bezier_to_polyline(control: [Pt; 4]) -> Vec<Pt> {
    let chord = control[0].dist(control[3]).max(1.0);
    let mut steps = 8usize;
    loop {
        let candidate = sample_bezier(control, steps);
        if bezier_flat_enough(&candidate, chord) || steps >= 256 {
            return candidate;
        }
        steps *= 2;
    }
}

fn sample_bezier(c: [Pt; 4], steps: usize) -> Vec<Pt> {
    (0..=steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            let mt = 1.0 - t;
            let w0 = mt * mt * mt;
            let w1 = 3.0 * mt * mt * t;
            let w2 = 3.0 * mt * t * t;
            let w3 = t * t * t;
            pt(
                w0 * c[0].x + w1 * c[1].x + w2 * c[2].x + w3 * c[3].x,
                w0 * c[0].y + w1 * c[1].y + w2 * c[2].y + w3 * c[3].y,
            )
        })
        .collect()
}

fn bezier_flat_enough(pts: &[Pt], chord: f64) -> bool {
    let polyline_len: f64 = pts.windows(2).map(|w| w[0].dist(w[1])).sum();
    (polyline_len - chord).abs() <= SAGITTA_TOLERANCE * chord
}

// Deterministic glyph tessellation for text items: each character is
// rendered as a fixed stroke skeleton scaled to the text's effective pen
// width, independent of any external font state. This is a schematic
// stand-in for the real glyph outlines the editor's font renderer produces,
// sufficient for clearance testing since DRC only needs the resulting
// stroke polyline, not a legible rendering.
pub fn text_to_segments(origin: Pt, text: &str, char_width: f64, char_height: f64) -> Vec<Vec<Pt>> {
    let mut strokes = Vec::new();
    for (i, ch) in text.chars().enumerate() {
        if ch.is_whitespace() {
            continue;
        }
        let x0 = origin.x + i as f64 * char_width;
        let y0 = origin.y;
        // A single zig-zag stroke per glyph: a cheap, deterministic
        // footprint-sized polyline that still has two edges to clear
        // against, rather than a single degenerate point.
        strokes.push(vec![
            pt(x0, y0),
            pt(x0 + char_width, y0 + char_height),
            pt(x0 + char_width, y0),
            pt(x0, y0 + char_height),
        ]);
    }
    strokes
}
