use crate::board::layer::LayerSet;
use crate::board::net::NetCode;
use crate::geom::{cap, Capsule, Pt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackKind {
    Wire,
    Via,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViaKind {
    Through,
    Blind,
    Micro,
}

#[derive(Debug, Clone)]
pub struct Track {
    pub a: Pt,
    pub b: Pt,
    pub width: f64,
    // A wire occupies a single copper layer; a via spans the set of copper
    // layers it connects (every layer for a through via).
    pub layers: LayerSet,
    pub net: NetCode,
    pub kind: TrackKind,
    pub via_kind: Option<ViaKind>,
    pub drill: Option<f64>,
}

impl Track {
    pub fn is_via(&self) -> bool {
        self.kind == TrackKind::Via
    }

    // A via's widened shape is a zero-length capsule (a circle); a wire's
    // is the full stadium between its endpoints.
    pub fn capsule(&self) -> Capsule {
        cap(self.a, self.b, self.width / 2.0)
    }

    pub fn shares_layer(&self, other: &LayerSet) -> bool {
        self.layers.intersects(other)
    }
}
