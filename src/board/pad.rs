use crate::board::ids::FootprintId;
use crate::board::layer::LayerSet;
use crate::board::net::NetCode;
use crate::geom::{cap, circ, pt, rt, Poly, Pt, Shape, Tf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadShape {
    Round,
    Rect,
    Oval,
    RoundedRect,
    Trapezoid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrillShape {
    Round,
    Oblong,
}

#[derive(Debug, Clone, Copy)]
pub struct Drill {
    pub shape: DrillShape,
    // (x, y) size; for a round drill x == y.
    pub size: (f64, f64),
}

impl Drill {
    // The drill's own outline, centered at `pos` with `orientation_ddeg`
    // (tenths of a degree) applied, used by the pad-clearance tester's
    // hole-vs-pad synthetic check.
    pub fn outline(&self, pos: Pt, orientation_ddeg: i32) -> Shape {
        match self.shape {
            DrillShape::Round => Shape::Circle(circ(pos, self.size.0 / 2.0)),
            DrillShape::Oblong => {
                let tf = Tf::translate(pos) * Tf::rotate(orientation_ddeg as f64 / 10.0);
                let half_len = (self.size.0.max(self.size.1) - self.size.0.min(self.size.1)) / 2.0;
                let r = self.size.0.min(self.size.1) / 2.0;
                let (st, en) = if self.size.0 >= self.size.1 {
                    (pt(-half_len, 0.0), pt(half_len, 0.0))
                } else {
                    (pt(0.0, -half_len), pt(0.0, half_len))
                };
                Shape::Capsule(cap(tf.pt(st), tf.pt(en), r))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pad {
    pub pos: Pt,
    pub layers: LayerSet,
    pub shape: PadShape,
    pub size: (f64, f64),
    pub orientation_ddeg: i32,
    pub drill: Option<Drill>,
    pub net: NetCode,
    pub number: String,
    pub footprint: FootprintId,
    pub local_clearance_override: Option<f64>,
}

impl Pad {
    // The pad's own copper outline in board coordinates, used for
    // edge-to-edge clearance tests.
    pub fn outline(&self) -> Shape {
        let tf = Tf::translate(self.pos) * Tf::rotate(self.orientation_ddeg as f64 / 10.0);
        let (w, h) = self.size;
        match self.shape {
            PadShape::Round => Shape::Circle(circ(self.pos, w / 2.0)),
            PadShape::Rect | PadShape::RoundedRect | PadShape::Trapezoid => Shape::Polygon(
                Poly::new(tf.pts(&rt(-w / 2.0, -h / 2.0, w / 2.0, h / 2.0).pts()), vec![]),
            ),
            PadShape::Oval => {
                let half_len = (w.max(h) - w.min(h)) / 2.0;
                let r = w.min(h) / 2.0;
                let (st, en) = if w >= h {
                    (pt(-half_len, 0.0), pt(half_len, 0.0))
                } else {
                    (pt(0.0, -half_len), pt(0.0, half_len))
                };
                Shape::Capsule(cap(tf.pt(st), tf.pt(en), r))
            }
        }
    }

    // Radius of the smallest circle centered on the pad that encloses its
    // outline, used to size the X-sorted sweep window.
    pub fn bounding_radius(&self) -> f64 {
        let (w, h) = self.size;
        ((w / 2.0).powi(2) + (h / 2.0).powi(2)).sqrt()
    }

    pub fn has_through_hole(&self) -> bool {
        self.drill.is_some()
    }

    // True if a drilled hole exists on every copper layer the board has,
    // meaning the hole itself must be tested against opposing pads
    // regardless of this pad's own copper layer set.
    pub fn hole_spans_all_copper(&self, board_copper_layers: u8) -> bool {
        self.drill.is_some() && self.layers.all_copper(board_copper_layers)
    }

    pub fn is_technical_only(&self) -> bool {
        !self.layers.any_copper() && self.drill.is_none()
    }
}
