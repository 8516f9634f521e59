use crate::geom::capsule::Capsule;
use crate::geom::circle::Circle;
use crate::geom::contains::poly_contains_pt;
use crate::geom::intersects::{
    cap_intersects_poly, circ_intersects_poly, poly_intersects_poly, poly_intersects_rt,
    rt_intersects_rt, rt_intersects_seg, seg_intersects_poly, seg_intersects_seg,
};
use crate::geom::math::eq;
use crate::geom::point::Pt;
use crate::geom::polygon::{edges, Poly};
use crate::geom::rect::Rt;
use crate::geom::segment::{seg, Segment};

// Distance functions return 0.0 whenever the shapes intersect or one
// contains the other — callers that only need a clearance test treat 0.0
// and "already touching" identically.

fn min_dist(iter: impl Iterator<Item = f64>) -> f64 {
    let mut best = f64::MAX;
    for d in iter {
        best = best.min(d);
        if eq(best, 0.0) {
            return 0.0;
        }
    }
    best
}

pub fn pt_pt_dist(a: &Pt, b: &Pt) -> f64 {
    a.dist(*b)
}

pub fn pt_seg_dist(a: &Pt, b: &Segment) -> f64 {
    let st_dist = a.dist(b.st());
    let en_dist = a.dist(b.en());
    let project = b.line().project(*a);
    let dist = st_dist.min(en_dist);
    if b.contains(project) { dist.min(a.dist(project)) } else { dist }
}

pub fn pt_rt_dist(a: &Pt, b: &Rt) -> f64 {
    if b.contains(*a) {
        0.0
    } else {
        a.clamp(b).dist(*a)
    }
}

// Distance to the polygon *outline* only (no containment test).
pub fn polyline_pt_dist(a: &[Pt], b: &Pt) -> f64 {
    min_dist(edges(a).map(|[&p0, &p1]| pt_seg_dist(b, &seg(p0, p1))))
}

pub fn poly_pt_dist(a: &Poly, b: &Pt) -> f64 {
    if poly_contains_pt(a, b) {
        0.0
    } else {
        polyline_pt_dist(a.pts(), b)
    }
}

pub fn seg_seg_dist(a: &Segment, b: &Segment) -> f64 {
    if seg_intersects_seg(a, b) {
        return 0.0;
    }
    let mut best = pt_seg_dist(&a.st(), b);
    best = best.min(pt_seg_dist(&a.en(), b));
    best = best.min(pt_seg_dist(&b.st(), a));
    best = best.min(pt_seg_dist(&b.en(), a));
    best
}

pub fn rt_rt_dist(a: &Rt, b: &Rt) -> f64 {
    if rt_intersects_rt(a, b) {
        0.0
    } else {
        min_dist(a.pts().iter().map(|p| pt_rt_dist(p, b)))
            .min(min_dist(b.pts().iter().map(|p| pt_rt_dist(p, a))))
    }
}

pub fn rt_seg_dist(a: &Rt, b: &Segment) -> f64 {
    if rt_intersects_seg(a, b) {
        0.0
    } else {
        min_dist(a.segs().iter().map(|s| seg_seg_dist(s, b)))
    }
}

pub fn rt_poly_dist(a: &Rt, b: &Poly) -> f64 {
    if poly_intersects_rt(b, a) {
        0.0
    } else {
        min_dist(a.segs().iter().map(|s| seg_poly_dist(s, b)))
    }
}

pub fn seg_poly_dist(a: &Segment, b: &Poly) -> f64 {
    if seg_intersects_poly(a, b) {
        0.0
    } else {
        min_dist(b.segs().iter().map(|s| seg_seg_dist(a, s)))
    }
}

pub fn poly_poly_dist(a: &Poly, b: &Poly) -> f64 {
    if poly_intersects_poly(a, b) {
        0.0
    } else {
        min_dist(a.segs().iter().flat_map(|sa| b.segs().into_iter().map(move |sb| seg_seg_dist(&sa, &sb))))
    }
}

// Returns the (distance, closest-point-on-a) pair used by zone-to-zone
// conflict-point deduplication between zone pairs.
pub fn poly_poly_closest(a: &Poly, b: &Poly) -> (f64, Pt) {
    let mut best = f64::MAX;
    let mut best_pt = a.pts().first().copied().unwrap_or_default();
    for sa in a.segs() {
        for sb in b.segs() {
            let d = seg_seg_dist(&sa, &sb);
            if d < best {
                best = d;
                best_pt = sa.st();
            }
        }
    }
    for &v in a.pts() {
        if poly_contains_pt(b, &v) {
            return (0.0, v);
        }
    }
    for &v in b.pts() {
        if poly_contains_pt(a, &v) {
            return (0.0, v);
        }
    }
    (best, best_pt)
}

pub fn circ_circ_dist(a: &Circle, b: &Circle) -> f64 {
    let d = pt_pt_dist(&a.p(), &b.p()) - a.r() - b.r();
    d.max(0.0)
}

pub fn circ_rt_dist(a: &Circle, b: &Rt) -> f64 {
    if b.contains(a.p()) {
        0.0
    } else {
        (a.p().clamp(b).dist(a.p()) - a.r()).max(0.0)
    }
}

pub fn circ_poly_dist(a: &Circle, b: &Poly) -> f64 {
    if circ_intersects_poly(a, b) {
        0.0
    } else {
        (poly_pt_dist(b, &a.p()) - a.r()).max(0.0)
    }
}

pub fn cap_cap_dist(a: &Capsule, b: &Capsule) -> f64 {
    (seg_seg_dist(&a.seg(), &b.seg()) - a.r() - b.r()).max(0.0)
}

pub fn cap_circ_dist(a: &Capsule, b: &Circle) -> f64 {
    (pt_seg_dist(&b.p(), &a.seg()) - a.r() - b.r()).max(0.0)
}

pub fn cap_seg_dist(a: &Capsule, b: &Segment) -> f64 {
    (seg_seg_dist(&a.seg(), b) - a.r()).max(0.0)
}

pub fn cap_rt_dist(a: &Capsule, b: &Rt) -> f64 {
    (rt_seg_dist(b, &a.seg()) - a.r()).max(0.0)
}

pub fn cap_poly_dist(a: &Capsule, b: &Poly) -> f64 {
    if cap_intersects_poly(a, b) {
        0.0
    } else {
        min_dist(b.segs().iter().map(|s| cap_seg_dist(a, s)))
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::geom::circle::circ;
    use crate::geom::point::pt;

    #[test]
    fn test_circ_circ() {
        assert_relative_eq!(0.0, circ_circ_dist(&circ(pt(0.0, 0.0), 0.4), &circ(pt(0.0, 0.0), 0.4)));
        assert_relative_eq!(
            130.94659781997535,
            circ_circ_dist(&circ(pt(111.6414, -70.632), 0.762), &circ(pt(0.0, 0.0), 0.4)),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_seg_seg() {
        let a = seg(pt(0.0, 0.0), pt(10.0, 0.0));
        let b = seg(pt(0.0, 5.0), pt(10.0, 5.0));
        assert_relative_eq!(5.0, seg_seg_dist(&a, &b));
    }
}
