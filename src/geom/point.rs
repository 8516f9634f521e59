use approx::{AbsDiffEq, RelativeEq};
use auto_ops::{impl_op_ex, impl_op_ex_commutative};
use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::geom::rect::Rt;

// A point in board-space. The engine is unit-agnostic (spec requires
// integer board units internally); f64 is used for the geometry kernel and
// callers are expected to supply already-scaled integer-valued coordinates,
// matching the teacher's own f64-everywhere geometry model.
#[derive(Debug, Default, PartialEq, Copy, Clone, Display, Serialize, Deserialize)]
#[display(fmt = "({}, {})", x, y)]
pub struct Pt {
    pub x: f64,
    pub y: f64,
}

pub const fn pt(x: f64, y: f64) -> Pt {
    Pt::new(x, y)
}

impl Pt {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    pub fn cross(&self, p: Pt) -> f64 {
        self.x * p.y - self.y * p.x
    }

    pub fn dot(&self, p: Pt) -> f64 {
        self.x * p.x + self.y * p.y
    }

    pub fn dist(&self, b: Pt) -> f64 {
        (b - *self).mag()
    }

    pub fn dist2(&self, b: Pt) -> f64 {
        (b - *self).mag2()
    }

    pub fn mag(&self) -> f64 {
        self.mag2().sqrt()
    }

    pub fn mag2(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    pub fn norm(&self) -> Pt {
        let mag = self.mag();
        pt(self.x / mag, self.y / mag)
    }

    // Clamps the point to lie within |r|.
    pub fn clamp(&self, r: &Rt) -> Pt {
        pt(self.x.clamp(r.l(), r.r()), self.y.clamp(r.b(), r.t()))
    }
}

impl AbsDiffEq for Pt {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, o: &Self, epsilon: f64) -> bool {
        f64::abs_diff_eq(&self.x, &o.x, epsilon) && f64::abs_diff_eq(&self.y, &o.y, epsilon)
    }
}

impl RelativeEq for Pt {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, o: &Self, epsilon: f64, max_relative: f64) -> bool {
        f64::relative_eq(&self.x, &o.x, epsilon, max_relative)
            && f64::relative_eq(&self.y, &o.y, epsilon, max_relative)
    }
}

impl_op_ex!(-|a: &Pt| -> Pt { pt(-a.x, -a.y) });
impl_op_ex!(+ |a: &Pt, b: &Pt| -> Pt { pt(a.x + b.x, a.y + b.y) });
impl_op_ex!(+= |a: &mut Pt, b: &Pt| { a.x += b.x; a.y += b.y; });
impl_op_ex!(-|a: &Pt, b: &Pt| -> Pt { pt(a.x - b.x, a.y - b.y) });
impl_op_ex!(-= |a: &mut Pt, b: &Pt| { a.x -= b.x; a.y -= b.y; });
impl_op_ex_commutative!(*|a: &Pt, b: &f64| -> Pt { pt(a.x * b, a.y * b) });
impl_op_ex_commutative!(/|a: &Pt, b: &f64| -> Pt { pt(a.x / b, a.y / b) });
