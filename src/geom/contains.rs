use crate::geom::capsule::Capsule;
use crate::geom::circle::Circle;
use crate::geom::distance::pt_seg_dist;
use crate::geom::line::line;
use crate::geom::math::{le, orientation};
use crate::geom::point::Pt;
use crate::geom::polygon::{edges, Poly};
use crate::geom::rect::Rt;
use crate::geom::segment::Segment;

pub fn cap_contains_pt(a: &Capsule, b: &Pt) -> bool {
    if !a.bounds().contains(*b) {
        return false;
    }
    le(pt_seg_dist(b, &a.seg()), a.r())
}

pub fn circ_contains_pt(a: &Circle, b: &Pt) -> bool {
    le(a.p().dist(*b), a.r())
}

pub fn circ_contains_rt(a: &Circle, b: &Rt) -> bool {
    circ_contains_pt(a, &b.bl())
        && circ_contains_pt(a, &b.br())
        && circ_contains_pt(a, &b.tr())
        && circ_contains_pt(a, &b.tl())
}

// Even-odd point-in-polygon test: the outer contour and
// every hole contour are each tested as a crossing boundary and XORed
// together, so a point inside a hole of an otherwise-containing outer
// contour is reported as not contained.
pub fn poly_contains_pt(a: &Poly, b: &Pt) -> bool {
    if !a.bounds().contains(*b) {
        return false;
    }
    let mut inside = polyline_contains_pt(a.pts(), b);
    for h in a.holes() {
        if polyline_contains_pt(h, b) {
            inside = !inside;
        }
    }
    inside
}

fn polyline_contains_pt(pts: &[Pt], b: &Pt) -> bool {
    // Even-odd (ray casting) rule: count crossings of a horizontal ray from
    // |b| to +infinity against every edge of the loop.
    let mut crossings = 0;
    for [&p0, &p1] in edges(pts) {
        let straddles = (p0.y > b.y) != (p1.y > b.y);
        if straddles {
            let x_at_y = p0.x + (b.y - p0.y) / (p1.y - p0.y) * (p1.x - p0.x);
            if b.x < x_at_y {
                crossings += 1;
            }
        }
    }
    crossings % 2 == 1
}

pub fn poly_contains_rt(a: &Poly, b: &Rt) -> bool {
    if !a.bounds().contains_rt(b) {
        return false;
    }
    for p in b.pts() {
        if !poly_contains_pt(a, &p) {
            return false;
        }
    }
    if !a.is_convex() {
        for s in b.segs() {
            if !poly_contains_seg(a, &s) {
                return false;
            }
        }
    }
    true
}

pub fn poly_contains_seg(a: &Poly, b: &Segment) -> bool {
    if !a.bounds().intersects(&b.bounds()) {
        return false;
    }
    if !poly_contains_pt(a, &b.st()) || !poly_contains_pt(a, &b.en()) {
        return false;
    }
    if a.is_convex() {
        return true;
    }
    for [&p0, &p1] in a.edges() {
        let p_st = orientation(&b.line(), p0);
        let p_en = orientation(&b.line(), p1);
        let b_st = orientation(&line(p0, p1), b.st());
        let b_en = orientation(&line(p0, p1), b.en());
        if p_st != p_en && b_st != b_en {
            return false;
        }
    }
    true
}

pub fn rt_contains_seg(a: &Rt, b: &Segment) -> bool {
    a.contains(b.st()) && a.contains(b.en())
}
