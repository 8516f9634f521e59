use crate::geom::bounds::pt_cloud_bounds;
use crate::geom::convex::{ensure_ccw, is_convex_ccw, remove_collinear};
use crate::geom::point::Pt;
use crate::geom::rect::Rt;
use crate::geom::segment::{seg, Segment};

// Returns the CCW edges of a closed point loop, pairing the last point back
// to the first.
pub fn edges(pts: &[Pt]) -> impl Iterator<Item = [&Pt; 2]> {
    (0..pts.len()).map(move |i| [&pts[i], &pts[(i + 1) % pts.len()]])
}

// A simple polygon outline plus zero or more hole outlines (the "filled
// polygon with holes" — a zone's smoothed outline, or a
// footprint courtyard/outline, or the board outline assembled from edge-cut
// items). All contours are stored CCW.
#[derive(Debug, Clone)]
pub struct Poly {
    outer: Vec<Pt>,
    holes: Vec<Vec<Pt>>,
}

pub fn poly(pts: &[Pt]) -> Poly {
    Poly::new(pts.to_vec(), Vec::new())
}

impl Poly {
    pub fn new(outer: Vec<Pt>, holes: Vec<Vec<Pt>>) -> Self {
        let mut outer = remove_collinear(&outer);
        ensure_ccw(&mut outer);
        let holes = holes
            .into_iter()
            .map(|h| {
                let mut h = remove_collinear(&h);
                ensure_ccw(&mut h);
                h
            })
            .collect();
        Self { outer, holes }
    }

    pub fn pts(&self) -> &[Pt] {
        &self.outer
    }

    pub fn holes(&self) -> &[Vec<Pt>] {
        &self.holes
    }

    pub fn edges(&self) -> impl Iterator<Item = [&Pt; 2]> {
        edges(&self.outer)
    }

    pub fn segs(&self) -> Vec<Segment> {
        self.edges().map(|[&a, &b]| seg(a, b)).collect()
    }

    pub fn bounds(&self) -> Rt {
        pt_cloud_bounds(&self.outer)
    }

    pub fn is_convex(&self) -> bool {
        self.holes.is_empty() && is_convex_ccw(&self.outer)
    }
}
