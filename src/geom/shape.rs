use crate::geom::capsule::Capsule;
use crate::geom::circle::Circle;
use crate::geom::distance::{
    cap_cap_dist, cap_circ_dist, cap_poly_dist, cap_rt_dist, cap_seg_dist, circ_circ_dist,
    circ_poly_dist, circ_rt_dist, poly_poly_dist, pt_pt_dist, pt_rt_dist, pt_seg_dist,
    rt_poly_dist, rt_rt_dist, rt_seg_dist, seg_poly_dist, seg_seg_dist,
};
use crate::geom::intersects::{
    cap_intersects_cap, cap_intersects_circ, cap_intersects_poly, cap_intersects_rt,
    circ_intersects_circ, circ_intersects_poly, circ_intersects_rt, poly_intersects_poly,
    poly_intersects_rt, rt_intersects_rt, rt_intersects_seg, seg_intersects_poly,
    seg_intersects_seg,
};
use crate::geom::point::Pt;
use crate::geom::polygon::Poly;
use crate::geom::rect::Rt;
use crate::geom::segment::Segment;

// A tagged variant over every shape kind the board model produces, dispatched
// by match rather than by a class hierarchy and downcasting. Arcs, bezier
// curves, and text are tessellated to a polyline (a point chain widened by
// the caller) before they ever reach a tester, so this enum only needs to
// dispatch over the shapes below.
#[derive(Debug, Clone)]
pub enum Shape {
    Rect(Rt),
    Circle(Circle),
    Capsule(Capsule),
    Polygon(Poly),
    Segment(Segment),
    Point(Pt),
}

impl Shape {
    pub fn bounds(&self) -> Rt {
        match self {
            Shape::Rect(s) => *s,
            Shape::Circle(s) => s.bounds(),
            Shape::Capsule(s) => s.bounds(),
            Shape::Polygon(s) => s.bounds(),
            Shape::Segment(s) => s.bounds(),
            Shape::Point(p) => Rt::new(p.x, p.y, p.x, p.y),
        }
    }

    pub fn intersects(&self, o: &Shape) -> bool {
        use Shape::{Capsule as C, Circle as Ci, Point as P, Polygon as Pg, Rect as R, Segment as S};
        match (self, o) {
            (R(a), R(b)) => rt_intersects_rt(a, b),
            (R(a), Ci(b)) | (Ci(b), R(a)) => circ_intersects_rt(b, a),
            (R(a), C(b)) | (C(b), R(a)) => cap_intersects_rt(b, a),
            (R(a), Pg(b)) | (Pg(b), R(a)) => poly_intersects_rt(b, a),
            (R(a), S(b)) | (S(b), R(a)) => rt_intersects_seg(a, b),
            (R(a), P(b)) | (P(b), R(a)) => a.contains(*b),
            (Ci(a), Ci(b)) => circ_intersects_circ(a, b),
            (Ci(a), C(b)) | (C(b), Ci(a)) => cap_intersects_circ(b, a),
            (Ci(a), Pg(b)) | (Pg(b), Ci(a)) => circ_intersects_poly(a, b),
            (Ci(a), S(b)) | (S(b), Ci(a)) => le_dist(pt_seg_dist(&a.p(), b), a.r()),
            (Ci(a), P(b)) | (P(b), Ci(a)) => le_dist(a.p().dist(*b), a.r()),
            (C(a), C(b)) => cap_intersects_cap(a, b),
            (C(a), Pg(b)) | (Pg(b), C(a)) => cap_intersects_poly(a, b),
            (C(a), S(b)) | (S(b), C(a)) => le_dist(seg_seg_dist(&a.seg(), b), a.r()),
            (C(a), P(b)) | (P(b), C(a)) => le_dist(pt_seg_dist(b, &a.seg()), a.r()),
            (Pg(a), Pg(b)) => poly_intersects_poly(a, b),
            (Pg(a), S(b)) | (S(b), Pg(a)) => seg_intersects_poly(b, a),
            (Pg(a), P(b)) | (P(b), Pg(a)) => crate::geom::contains::poly_contains_pt(a, b),
            (S(a), S(b)) => seg_intersects_seg(a, b),
            (S(a), P(b)) | (P(b), S(a)) => le_dist(pt_seg_dist(b, a), 0.0),
            (P(a), P(b)) => le_dist(pt_pt_dist(a, b), 0.0),
        }
    }

    pub fn dist_to(&self, o: &Shape) -> f64 {
        use Shape::{Capsule as C, Circle as Ci, Point as P, Polygon as Pg, Rect as R, Segment as S};
        match (self, o) {
            (R(a), R(b)) => rt_rt_dist(a, b),
            (R(a), Ci(b)) | (Ci(b), R(a)) => circ_rt_dist(b, a),
            (R(a), C(b)) | (C(b), R(a)) => cap_rt_dist(b, a),
            (R(a), Pg(b)) | (Pg(b), R(a)) => rt_poly_dist(a, b),
            (R(a), S(b)) | (S(b), R(a)) => rt_seg_dist(a, b),
            (R(a), P(b)) | (P(b), R(a)) => pt_rt_dist(b, a),
            (Ci(a), Ci(b)) => circ_circ_dist(a, b),
            (Ci(a), C(b)) | (C(b), Ci(a)) => cap_circ_dist(b, a),
            (Ci(a), Pg(b)) | (Pg(b), Ci(a)) => circ_poly_dist(a, b),
            (Ci(a), S(b)) | (S(b), Ci(a)) => (pt_seg_dist(&a.p(), b) - a.r()).max(0.0),
            (Ci(a), P(b)) | (P(b), Ci(a)) => (a.p().dist(*b) - a.r()).max(0.0),
            (C(a), C(b)) => cap_cap_dist(a, b),
            (C(a), Pg(b)) | (Pg(b), C(a)) => cap_poly_dist(a, b),
            (C(a), S(b)) | (S(b), C(a)) => cap_seg_dist(a, b),
            (C(a), P(b)) | (P(b), C(a)) => (pt_seg_dist(b, &a.seg()) - a.r()).max(0.0),
            (Pg(a), Pg(b)) => poly_poly_dist(a, b),
            (Pg(a), S(b)) | (S(b), Pg(a)) => seg_poly_dist(b, a),
            (Pg(a), P(b)) | (P(b), Pg(a)) => crate::geom::distance::poly_pt_dist(a, b),
            (S(a), S(b)) => seg_seg_dist(a, b),
            (S(a), P(b)) | (P(b), S(a)) => pt_seg_dist(b, a),
            (P(a), P(b)) => pt_pt_dist(a, b),
        }
    }
}

fn le_dist(a: f64, b: f64) -> bool {
    crate::geom::math::le(a, b)
}
