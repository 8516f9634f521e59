use crate::board::footprint::Footprint;
use crate::board::graphic::{GraphicItem, TextItem};
use crate::board::ids::{FootprintId, GraphicId, PadId, TextId, TrackId, ZoneId};
use crate::board::net::NetCode;
use crate::board::pad::Pad;
use crate::board::settings::DesignSettings;
use crate::board::track::Track;
use crate::board::zone::Zone;
use std::collections::HashMap;

// A flat, read-only-during-a-run collection of board objects. Pads,
// footprints, tracks, zones and graphics are held in arenas and referenced
// by stable index rather than by owning pointer, since pads and footprints
// refer to each other cyclically (the same index-over-pointer idiom
// `name::NameMap` uses for interned names).
#[derive(Debug, Default, Clone)]
pub struct Board {
    pads: Vec<Pad>,
    footprints: Vec<Footprint>,
    tracks: Vec<Track>,
    zones: Vec<Zone>,
    graphics: Vec<GraphicItem>,
    texts: Vec<TextItem>,
    net_names: HashMap<NetCode, String>,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pads(&self) -> &[Pad] {
        &self.pads
    }

    pub fn pad(&self, id: PadId) -> &Pad {
        &self.pads[id.0]
    }

    pub fn add_pad(&mut self, pad: Pad) -> PadId {
        self.pads.push(pad);
        PadId(self.pads.len() - 1)
    }

    pub fn footprints(&self) -> &[Footprint] {
        &self.footprints
    }

    pub fn footprint(&self, id: FootprintId) -> &Footprint {
        &self.footprints[id.0]
    }

    pub fn add_footprint(&mut self, fp: Footprint) -> FootprintId {
        self.footprints.push(fp);
        FootprintId(self.footprints.len() - 1)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn track(&self, id: TrackId) -> &Track {
        &self.tracks[id.0]
    }

    pub fn add_track(&mut self, t: Track) -> TrackId {
        self.tracks.push(t);
        TrackId(self.tracks.len() - 1)
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    pub fn zone(&self, id: ZoneId) -> &Zone {
        &self.zones[id.0]
    }

    pub fn add_zone(&mut self, z: Zone) -> ZoneId {
        self.zones.push(z);
        ZoneId(self.zones.len() - 1)
    }

    pub fn graphics(&self) -> &[GraphicItem] {
        &self.graphics
    }

    pub fn graphic(&self, id: GraphicId) -> &GraphicItem {
        &self.graphics[id.0]
    }

    pub fn add_graphic(&mut self, g: GraphicItem) -> GraphicId {
        self.graphics.push(g);
        GraphicId(self.graphics.len() - 1)
    }

    pub fn texts(&self) -> &[TextItem] {
        &self.texts
    }

    pub fn text(&self, id: TextId) -> &TextItem {
        &self.texts[id.0]
    }

    pub fn add_text(&mut self, t: TextItem) -> TextId {
        self.texts.push(t);
        TextId(self.texts.len() - 1)
    }

    // Records the display name of net `code`; net codes `<= 0` (unconnected
    // or invalid) carry no name.
    pub fn name_net(&mut self, code: NetCode, name: &str) {
        if code > 0 {
            self.net_names.insert(code, name.to_string());
        }
    }

    pub fn net_name(&self, code: NetCode) -> Option<&str> {
        self.net_names.get(&code).map(String::as_str)
    }

    pub fn pads_on_net(&self, net: NetCode) -> impl Iterator<Item = &Pad> {
        self.pads.iter().filter(move |p| p.net == net)
    }

    // All `Edge.Cuts`-layer graphic items, the raw material for board
    // outline assembly.
    pub fn edge_cut_items(&self) -> impl Iterator<Item = &GraphicItem> {
        self.graphics.iter().filter(|g| g.layer == crate::board::layer::Layer::EdgeCuts)
    }
}

// Bundles a board with the design settings it is checked against, mirroring
// the host's `DrcContext`-by-value construction (no global singleton).
pub struct BoardContext<'a> {
    pub board: &'a Board,
    pub settings: &'a DesignSettings,
}
