use derive_more::Display;

use crate::geom::math::{eq, ge, gt, le, lt};
use crate::geom::point::{pt, Pt};
use crate::geom::segment::{seg, Segment};

#[derive(Debug, Copy, Clone, Display)]
#[display(fmt = "({}, {}, {}, {})", l, b, r, t)]
pub struct Rt {
    l: f64,
    b: f64,
    r: f64,
    t: f64,
}

pub const fn rt(l: f64, b: f64, r: f64, t: f64) -> Rt {
    Rt::new(l, b, r, t)
}

impl Default for Rt {
    fn default() -> Self {
        Self::empty()
    }
}

// Rt covers the range [l, r] . [b, t]. Empty rectangles have r < l or t < b.
impl Rt {
    pub const fn new(l: f64, b: f64, r: f64, t: f64) -> Self {
        Self { l, b, r, t }
    }

    pub const fn empty() -> Self {
        rt(0.0, 0.0, -1.0, -1.0)
    }

    pub fn is_empty(&self) -> bool {
        lt(self.r, self.l) || lt(self.t, self.b)
    }

    pub fn w(&self) -> f64 {
        self.r - self.l
    }

    pub fn h(&self) -> f64 {
        self.t - self.b
    }

    pub const fn l(&self) -> f64 {
        self.l
    }

    pub const fn t(&self) -> f64 {
        self.t
    }

    pub const fn r(&self) -> f64 {
        self.r
    }

    pub const fn b(&self) -> f64 {
        self.b
    }

    pub const fn bl(&self) -> Pt {
        pt(self.l(), self.b())
    }

    pub const fn br(&self) -> Pt {
        pt(self.r(), self.b())
    }

    pub const fn tl(&self) -> Pt {
        pt(self.l(), self.t())
    }

    pub const fn tr(&self) -> Pt {
        pt(self.r(), self.t())
    }

    pub const fn pts(&self) -> [Pt; 4] {
        [self.bl(), self.br(), self.tr(), self.tl()]
    }

    // The four boundary segments, in CCW order starting at the bottom edge.
    pub fn segs(&self) -> [Segment; 4] {
        let p = self.pts();
        [seg(p[0], p[1]), seg(p[1], p[2]), seg(p[2], p[3]), seg(p[3], p[0])]
    }

    pub fn center(&self) -> Pt {
        pt((self.l + self.r) / 2.0, (self.b + self.t) / 2.0)
    }

    pub fn area(&self) -> f64 {
        self.w() * self.h()
    }

    // Insetting more than the rectangle's size collapses it to the center point.
    pub fn inset(&self, dx: f64, dy: f64) -> Rt {
        let wsub = self.w().min(2.0 * dx) / 2.0;
        let hsub = self.h().min(2.0 * dy) / 2.0;
        rt(self.l + wsub, self.b + hsub, self.r - wsub, self.t - hsub)
    }

    pub fn expand(&self, d: f64) -> Rt {
        self.inset(-d, -d)
    }

    pub fn contains(&self, p: Pt) -> bool {
        ge(p.x, self.l()) && ge(p.y, self.b()) && le(p.x, self.r()) && le(p.y, self.t())
    }

    pub fn contains_rt(&self, o: &Rt) -> bool {
        self.contains(o.bl()) && self.contains(o.tr())
    }

    pub fn intersects(&self, r: &Rt) -> bool {
        le(self.l(), r.r()) && ge(self.r(), r.l()) && gt(self.t(), r.b()) && le(self.b(), r.t())
    }

    pub fn united(&self, rect: &Rt) -> Rt {
        if rect.is_empty() {
            *self
        } else if self.is_empty() {
            *rect
        } else {
            let l = self.l.min(rect.l);
            let b = self.b.min(rect.b);
            let r = self.r().max(rect.r());
            let t = self.t().max(rect.t());
            rt(l, b, r, t)
        }
    }

    pub fn enclosing(pa: Pt, pb: Pt) -> Rt {
        let l = pa.x.min(pb.x);
        let b = pa.y.min(pb.y);
        let r = pa.x.max(pb.x);
        let t = pa.y.max(pb.y);
        rt(l, b, r, t)
    }
}

impl PartialEq for Rt {
    fn eq(&self, o: &Self) -> bool {
        eq(self.l, o.l) && eq(self.b, o.b) && eq(self.r, o.r) && eq(self.t, o.t)
    }
}
