use crate::geom::capsule::Capsule;
use crate::geom::circle::Circle;
use crate::geom::contains::cap_contains_pt;
use crate::geom::distance::{rt_seg_dist, seg_seg_dist};
use crate::geom::math::{le, orientation};
use crate::geom::polygon::Poly;
use crate::geom::rect::Rt;
use crate::geom::segment::Segment;

pub fn cap_intersects_cap(a: &Capsule, b: &Capsule) -> bool {
    le(seg_seg_dist(&a.seg(), &b.seg()), a.r() + b.r())
}

pub fn cap_intersects_circ(a: &Capsule, b: &Circle) -> bool {
    let sum = crate::geom::capsule::cap(a.st(), a.en(), b.r());
    cap_contains_pt(&sum, &b.p())
}

pub fn cap_intersects_rt(a: &Capsule, b: &Rt) -> bool {
    if b.contains(a.st()) || b.contains(a.en()) {
        true
    } else {
        le(rt_seg_dist(b, &a.seg()), a.r())
    }
}

pub fn cap_intersects_poly(a: &Capsule, b: &Poly) -> bool {
    if b.pts().iter().any(|&p| cap_contains_pt(a, &p)) {
        return true;
    }
    for s in b.segs() {
        if le(seg_seg_dist(&a.seg(), &s), a.r()) {
            return true;
        }
    }
    crate::geom::contains::poly_contains_pt(b, &a.st())
}

pub fn circ_intersects_circ(a: &Circle, b: &Circle) -> bool {
    le(a.p().dist(b.p()), a.r() + b.r())
}

pub fn circ_intersects_rt(a: &Circle, b: &Rt) -> bool {
    le(a.p().clamp(b).dist(a.p()), a.r())
}

pub fn circ_intersects_poly(a: &Circle, b: &Poly) -> bool {
    if crate::geom::contains::poly_contains_pt(b, &a.p()) {
        return true;
    }
    for s in b.segs() {
        if le(crate::geom::distance::pt_seg_dist(&a.p(), &s), a.r()) {
            return true;
        }
    }
    false
}

pub fn rt_intersects_rt(a: &Rt, b: &Rt) -> bool {
    a.intersects(b)
}

pub fn rt_intersects_seg(a: &Rt, b: &Segment) -> bool {
    if a.contains(b.st()) || a.contains(b.en()) {
        return true;
    }
    for edge in a.segs() {
        if seg_intersects_seg(&edge, b) {
            return true;
        }
    }
    false
}

pub fn rt_intersects_poly(a: &Rt, b: &Poly) -> bool {
    poly_intersects_rt(b, a)
}

pub fn poly_intersects_rt(a: &Poly, b: &Rt) -> bool {
    if a.pts().iter().any(|&p| b.contains(p)) {
        return true;
    }
    if b.pts().iter().any(|p| crate::geom::contains::poly_contains_pt(a, p)) {
        return true;
    }
    for s in a.segs() {
        if rt_intersects_seg(b, &s) {
            return true;
        }
    }
    false
}

pub fn poly_intersects_poly(a: &Poly, b: &Poly) -> bool {
    if !a.bounds().intersects(&b.bounds()) {
        return false;
    }
    if a.pts().iter().any(|&p| crate::geom::contains::poly_contains_pt(b, &p)) {
        return true;
    }
    if b.pts().iter().any(|&p| crate::geom::contains::poly_contains_pt(a, &p)) {
        return true;
    }
    for sa in a.segs() {
        for sb in b.segs() {
            if seg_intersects_seg(&sa, &sb) {
                return true;
            }
        }
    }
    false
}

pub fn seg_intersects_poly(a: &Segment, b: &Poly) -> bool {
    if crate::geom::contains::poly_contains_pt(b, &a.st())
        || crate::geom::contains::poly_contains_pt(b, &a.en())
    {
        return true;
    }
    b.segs().iter().any(|s| seg_intersects_seg(a, s))
}

pub fn seg_intersects_seg(a: &Segment, b: &Segment) -> bool {
    let a_st = orientation(&b.line(), a.st());
    let a_en = orientation(&b.line(), a.en());
    let b_st = orientation(&a.line(), b.st());
    let b_en = orientation(&a.line(), b.en());
    if a_st != a_en && b_st != b_en {
        return true;
    }
    let a_rt = Rt::enclosing(a.st(), a.en());
    let b_rt = Rt::enclosing(b.st(), b.en());
    if a_st == 0 && b_rt.contains(a.st()) {
        return true;
    }
    if a_en == 0 && b_rt.contains(a.en()) {
        return true;
    }
    if b_st == 0 && a_rt.contains(b.st()) {
        return true;
    }
    if b_en == 0 && a_rt.contains(b.en()) {
        return true;
    }
    false
}

// Fast rectangle-vs-widened-segment pre-filter used before exact shape
// tests: expand the segment's bounding box by
// |expand| and test against |rect|.
pub fn rect_collide(rect: &Rt, s: &Segment, expand: f64) -> bool {
    let bounds = s.bounds().inset(-expand, -expand);
    rect.intersects(&bounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::point::pt;
    use crate::geom::segment::seg;

    #[test]
    fn test_seg_seg_cross() {
        assert!(seg_intersects_seg(
            &seg(pt(1.0, 1.0), pt(3.0, 4.0)),
            &seg(pt(2.0, 4.0), pt(3.0, 1.0))
        ));
        assert!(!seg_intersects_seg(
            &seg(pt(1.0, 3.0), pt(3.0, 1.0)),
            &seg(pt(2.0, 4.0), pt(4.0, 2.0))
        ));
    }
}
