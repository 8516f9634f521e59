use crate::geom::capsule::cap;
use crate::geom::distance::cap_cap_dist;
use crate::geom::point::Pt;

// Edge-to-edge distance between two widened segments. This
// is the single most performance-sensitive entry point in the engine: the
// X-sorted sweeps in the pad, drill and track testers call it once per
// candidate pair with `max` set to the clearance already required for that
// pair, so that pairs far apart on Y can be rejected without walking every
// edge combination. `max` is a short-circuit budget, not a hard bound —
// the function may return any value >= max once it has proven the true
// distance is at least that large.
//
// Returns `(distance, closest_point)` where `closest_point` lies on segment
// A and is used by the marker reporter to place the violation marker.
pub fn segment_segment_clearance(
    a1: Pt,
    a2: Pt,
    width_a: f64,
    b1: Pt,
    b2: Pt,
    width_b: f64,
    max: f64,
) -> (f64, Pt) {
    let ra = width_a / 2.0;
    let rb = width_b / 2.0;
    let ca = cap(a1, a2, ra);
    let cb = cap(b1, b2, rb);

    // Cheap bounding-box short circuit: if the widened bounding boxes are
    // farther apart than `max` on either axis alone, the exact distance can
    // only be larger.
    let ba = ca.bounds();
    let bb = cb.bounds();
    let dx = (ba.l() - bb.r()).max(bb.l() - ba.r()).max(0.0);
    let dy = (ba.b() - bb.t()).max(bb.b() - ba.t()).max(0.0);
    if dx > max || dy > max {
        return (max.max(dx.max(dy)), a1);
    }

    let d = cap_cap_dist(&ca, &cb);
    let closest = closest_point_on_segment(a1, a2, b1, b2);
    (d, closest)
}

fn closest_point_on_segment(a1: Pt, a2: Pt, b1: Pt, b2: Pt) -> Pt {
    // Binary search along A for the point minimizing squared distance to
    // segment B, the same bisection shape a marker's `locate` helper uses
    // to find the exact conflict point along a track.
    // EPSILON = 5 mil expressed in the caller's board units is passed in by
    // callers that need sub-unit precision; here we search to a fixed
    // relative tolerance since board units are caller-defined.
    let seg_b = crate::geom::segment::seg(b1, b2);
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let dist_at = |t: f64| {
        let p = a1 + (a2 - a1) * t;
        crate::geom::distance::pt_seg_dist(&p, &seg_b)
    };
    for _ in 0..40 {
        if hi - lo < 1e-9 {
            break;
        }
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        if dist_at(m1) < dist_at(m2) {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    let t = (lo + hi) / 2.0;
    a1 + (a2 - a1) * t
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geom::point::pt;

    #[test]
    fn test_short_circuit() {
        let (d, _) = segment_segment_clearance(
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            0.0,
            pt(0.0, 1_000_000.0),
            pt(10.0, 1_000_000.0),
            0.0,
            100.0,
        );
        assert!(d >= 100.0);
    }

    #[test]
    fn test_exact_distance() {
        let (d, _) = segment_segment_clearance(
            pt(0.0, 0.0),
            pt(10.0, 0.0),
            0.0,
            pt(0.0, 5.0),
            pt(10.0, 5.0),
            0.0,
            1000.0,
        );
        assert_relative_eq!(d, 5.0, epsilon = 1e-6);
    }
}
