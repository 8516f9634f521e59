use enumset::EnumSet;

use crate::board::layer::LayerSet;
use crate::board::net::NetClass;
use crate::marker::MarkerKind;
use crate::rules::types::Rule;

#[derive(Debug, Clone)]
pub struct DesignSettings {
    pub copper_clearance: f64,
    pub copper_edge_clearance: f64,
    pub min_track_width: f64,
    pub min_via_annular_ring: f64,
    pub min_via_drill: f64,
    pub min_microvia_drill: f64,
    pub min_pad_drill: f64,
    pub min_hole_to_hole: f64,
    pub ignore: EnumSet<MarkerKind>,
    pub netclasses: Vec<NetClass>,
    pub user_rules: Vec<Rule>,
    pub enabled_layers: LayerSet,
    pub allow_microvias: bool,
    pub allow_blind_buried_vias: bool,
    pub board_copper_layers: u8,
}

impl DesignSettings {
    pub fn is_ignored(&self, kind: MarkerKind) -> bool {
        self.ignore.contains(kind)
    }

    pub fn netclass_of(&self, net: crate::board::net::NetCode) -> Option<&NetClass> {
        self.netclasses.iter().find(|nc| nc.contains(net))
    }
}
