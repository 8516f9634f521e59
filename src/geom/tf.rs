use std::f64::consts::PI;
use std::ops::Mul;

use nalgebra::{vector, Matrix3};

use crate::geom::point::{pt, Pt};
use crate::geom::rect::Rt;
use crate::geom::segment::{seg, Segment};

// Affine transform (rotation/scale/translation) applied when placing a
// footprint's pads and graphic items onto the board at its instance
// position and rotation.
#[derive(Debug, Copy, Clone)]
pub struct Tf {
    m: Matrix3<f64>,
}

impl Tf {
    pub fn identity() -> Self {
        Self { m: Matrix3::identity() }
    }

    pub fn translate(p: Pt) -> Self {
        Self { m: Matrix3::new_translation(&p.into()) }
    }

    pub fn rotate(deg: f64) -> Self {
        Self { m: Matrix3::new_rotation(deg / 180.0 * PI) }
    }

    pub fn pt(&self, p: Pt) -> Pt {
        let v = self.m * vector![p.x, p.y, 1.0];
        pt(v.x, v.y)
    }

    pub fn seg(&self, s: &Segment) -> Segment {
        seg(self.pt(s.st()), self.pt(s.en()))
    }

    pub fn rt(&self, r: &Rt) -> Rt {
        Rt::enclosing(self.pt(r.tl()), self.pt(r.br()))
    }

    pub fn pts(&self, p: &[Pt]) -> Vec<Pt> {
        p.iter().map(|&v| self.pt(v)).collect()
    }
}

impl From<Pt> for nalgebra::Vector2<f64> {
    fn from(p: Pt) -> Self {
        vector![p.x, p.y]
    }
}

impl Mul for Tf {
    type Output = Tf;

    fn mul(self, rhs: Tf) -> Self::Output {
        Tf { m: self.m * rhs.m }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn test_translate() {
        let tf = Tf::translate(pt(1.0, 2.0));
        assert_relative_eq!(tf.pt(pt(0.0, 0.0)), pt(1.0, 2.0));
    }

    #[test]
    fn test_rotate_90() {
        let tf = Tf::rotate(90.0);
        let r = tf.pt(pt(1.0, 0.0));
        assert_relative_eq!(r.x, 0.0, epsilon = 1e-9);
        assert_relative_eq!(r.y, 1.0, epsilon = 1e-9);
    }
}
