use crate::board::layer::Layer;
use crate::board::net::NetCode;
use crate::geom::Poly;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeepoutFlags {
    pub blocks_tracks: bool,
    pub blocks_vias: bool,
    pub blocks_pads: bool,
    pub blocks_copper_pour: bool,
    pub blocks_footprints: bool,
}

#[derive(Debug, Clone)]
pub struct Zone {
    pub outline: Poly,
    pub priority: i32,
    pub layer: Layer,
    pub net: NetCode,
    pub keepout: Option<KeepoutFlags>,
    // Corner smoothing radius applied when the orchestrator computes the
    // zone's smoothed filled polygon; zero disables smoothing.
    pub corner_smoothing: f64,
    pub filled: Option<Poly>,
}

impl Zone {
    pub fn is_keepout(&self) -> bool {
        self.keepout.is_some()
    }
}
