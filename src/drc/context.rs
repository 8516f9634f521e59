use crate::board::{Board, DesignSettings, Layer, Pad, Track, Zone};
use crate::geom::Poly;
use crate::rules::{resolve, ResolveSide, Resolved, RuleFile};

// Bundles everything the testers need to borrow for the duration of a run:
// the board, its design settings, the parsed (or empty, on parse failure)
// rule set, and the two caches the orchestrator computes once up front —
// the board outline polygon and each zone's smoothed filled polygon. No
// tester owns or mutates any of this; it is all read-only for the run's
// lifetime, matching §5's "no process-wide state" requirement.
pub struct DrcCtx<'a> {
    pub board: &'a Board,
    pub settings: &'a DesignSettings,
    pub rules: &'a RuleFile,
    pub outline: Option<&'a Poly>,
    // Indexed in parallel with `board.zones()`; `None` for a zone whose
    // outline was degenerate (zero area) and so was skipped by the
    // smoothing pass.
    pub smoothed_zones: &'a [Option<Poly>],
    pub largest_clearance: f64,
}

impl<'a> DrcCtx<'a> {
    pub fn zone_poly(&self, idx: usize) -> Option<&Poly> {
        self.smoothed_zones.get(idx).and_then(|o| o.as_ref())
    }

    pub fn resolve_pad_pad(&self, a: &Pad, b: &Pad) -> Resolved {
        let sa = pad_side(self.board, a);
        let sb = pad_side(self.board, b);
        resolve(self.rules, self.settings, &sa, &sb, false)
    }

    pub fn resolve_pad_edge(&self, a: &Pad) -> Resolved {
        let sa = pad_side(self.board, a);
        let edge = ResolveSide { item_kind: "edge", ..Default::default() };
        resolve(self.rules, self.settings, &sa, &edge, true)
    }

    pub fn resolve_track_edge(&self, t: &Track) -> Resolved {
        let sa = track_side(t);
        let edge = ResolveSide { item_kind: "edge", ..Default::default() };
        resolve(self.rules, self.settings, &sa, &edge, true)
    }

    pub fn resolve_track_track(&self, a: &Track, b: &Track) -> Resolved {
        resolve(self.rules, self.settings, &track_side(a), &track_side(b), false)
    }

    pub fn resolve_track_pad(&self, t: &Track, p: &Pad) -> Resolved {
        resolve(self.rules, self.settings, &track_side(t), &pad_side(self.board, p), false)
    }

    pub fn resolve_zone_zone(&self, a: &Zone, b: &Zone) -> Resolved {
        resolve(self.rules, self.settings, &zone_side(a), &zone_side(b), false)
    }

    pub fn resolve_track_copper(&self, t: &Track, layer: Layer) -> Resolved {
        let other = ResolveSide { layer: Some(layer), item_kind: "graphic", ..Default::default() };
        resolve(self.rules, self.settings, &track_side(t), &other, false)
    }

    pub fn resolve_pad_copper(&self, p: &Pad, layer: Layer) -> Resolved {
        let other = ResolveSide { layer: Some(layer), item_kind: "graphic", ..Default::default() };
        resolve(self.rules, self.settings, &pad_side(self.board, p), &other, false)
    }
}

fn pad_side<'a>(board: &'a Board, p: &'a Pad) -> ResolveSide<'a> {
    ResolveSide {
        layer: p.layers_primary(),
        net: p.net,
        footprint_ref: Some(board.footprint(p.footprint).reference.as_str()),
        item_kind: "pad",
        local_clearance_override: p.local_clearance_override.or_else(|| {
            board.footprint(p.footprint).local_clearance_override
        }),
    }
}

fn track_side(t: &Track) -> ResolveSide<'_> {
    ResolveSide {
        layer: t.layers_primary(),
        net: t.net,
        footprint_ref: None,
        item_kind: if t.is_via() { "via" } else { "track" },
        local_clearance_override: None,
    }
}

fn zone_side(z: &Zone) -> ResolveSide<'_> {
    ResolveSide {
        layer: Some(z.layer),
        net: z.net,
        footprint_ref: None,
        item_kind: "zone",
        local_clearance_override: None,
    }
}

// Convenience extension used only by the resolver glue above: the single
// representative layer of a pair's layer set, used to key selector
// matching (a multi-layer pad/via matches on any layer it touches, but the
// resolver only needs one representative string per side).
pub trait PrimaryLayer {
    fn layers_primary(&self) -> Option<Layer>;
}

impl PrimaryLayer for Pad {
    fn layers_primary(&self) -> Option<Layer> {
        (0..32).map(Layer::Copper).find(|&l| self.layers.contains(l))
    }
}

impl PrimaryLayer for Track {
    fn layers_primary(&self) -> Option<Layer> {
        (0..32).map(Layer::Copper).find(|&l| self.layers.contains(l))
    }
}
