use crate::board::ids::{GraphicId, PadId, TextId};
use crate::geom::{Poly, Pt};

#[derive(Debug, Clone)]
pub struct Footprint {
    pub reference: String,
    pub value: String,
    pub pos: Pt,
    pub orientation_ddeg: i32,
    pub pads: Vec<PadId>,
    pub graphics: Vec<GraphicId>,
    pub texts: Vec<TextId>,
    pub courtyard_front: Option<Poly>,
    pub courtyard_back: Option<Poly>,
    pub net_tie: bool,
    pub duplicate_pad_numbers_allowed: bool,
    pub local_clearance_override: Option<f64>,
}

impl Footprint {
    pub fn has_courtyard(&self) -> bool {
        self.courtyard_front.is_some() || self.courtyard_back.is_some()
    }
}
