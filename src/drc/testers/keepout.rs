use crate::board::{FootprintId, Pad, PadId, Track, TrackId, ZoneId};
use crate::drc::context::DrcCtx;
use crate::geom::{Poly, Shape};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Every keepout zone forbids a subset of object kinds from intersecting its
// outline, per its own sub-flags. Unlike the clearance testers, this is a
// plain intersection test against the zone's smoothed polygon: there is no
// required distance to resolve, just "touches" or "doesn't".
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    for (zi, zone) in ctx.board.zones().iter().enumerate() {
        let Some(flags) = zone.keepout else { continue };
        let poly = ctx.zone_poly(zi).unwrap_or(&zone.outline);
        let shape = Shape::Polygon(poly.clone());

        if flags.blocks_tracks || flags.blocks_vias {
            for (ti, t) in ctx.board.tracks().iter().enumerate() {
                if !t.layers.contains(zone.layer) {
                    continue;
                }
                let wanted = if t.is_via() { flags.blocks_vias } else { flags.blocks_tracks };
                if wanted {
                    test_track(reporter, zi, &shape, TrackId(ti), t);
                }
            }
        }

        if flags.blocks_pads {
            for (pi, p) in ctx.board.pads().iter().enumerate() {
                if p.layers.contains(zone.layer) {
                    test_pad(reporter, zi, &shape, PadId(pi), p);
                }
            }
        }

        if flags.blocks_footprints {
            for (fi, fp) in ctx.board.footprints().iter().enumerate() {
                test_footprint(ctx, reporter, zi, &shape, FootprintId(fi), fp.reference.as_str());
            }
        }
    }
}

fn test_track(reporter: &mut FilteredReporter<'_>, zi: usize, shape: &Shape, id: TrackId, t: &Track) {
    let track_shape = Shape::Capsule(t.capsule());
    if shape.intersects(&track_shape) {
        let kind = if t.is_via() { MarkerKind::KeepoutVia } else { MarkerKind::KeepoutTrack };
        reporter.report(Marker::new(
            kind,
            vec![ItemRef::Track(id), ItemRef::Zone(ZoneId(zi))],
            format!("{} inside keepout zone", if t.is_via() { "via" } else { "track" }),
            t.a,
        ));
    }
}

fn test_pad(reporter: &mut FilteredReporter<'_>, zi: usize, shape: &Shape, id: PadId, p: &Pad) {
    if shape.intersects(&p.outline()) {
        reporter.report(Marker::new(
            MarkerKind::KeepoutPad,
            vec![ItemRef::Pad(id), ItemRef::Zone(ZoneId(zi))],
            "pad inside keepout zone",
            p.pos,
        ));
    }
}

fn test_footprint(
    ctx: &DrcCtx<'_>,
    reporter: &mut FilteredReporter<'_>,
    zi: usize,
    shape: &Shape,
    id: FootprintId,
    reference: &str,
) {
    let fp = ctx.board.footprint(id);
    let Some(bounds) = footprint_envelope(ctx, fp) else { return };
    if shape.intersects(&Shape::Polygon(bounds)) {
        reporter.report(Marker::new(
            MarkerKind::KeepoutFootprint,
            vec![ItemRef::Footprint(id), ItemRef::Zone(ZoneId(zi))],
            format!("footprint '{reference}' inside keepout zone"),
            fp.pos,
        ));
    }
}

// A footprint's courtyard is the natural envelope for a footprint-level
// keepout test; lacking one, fall back to the bounding box of its pads.
fn footprint_envelope(ctx: &DrcCtx<'_>, fp: &crate::board::Footprint) -> Option<Poly> {
    if let Some(c) = &fp.courtyard_front {
        return Some(c.clone());
    }
    if let Some(c) = &fp.courtyard_back {
        return Some(c.clone());
    }
    let rects: Vec<_> = fp
        .pads
        .iter()
        .map(|&id| ctx.board.pad(id).outline().bounds())
        .collect();
    if rects.is_empty() {
        return None;
    }
    let bounds = rects.into_iter().reduce(|a, b| a.united(&b))?;
    Some(Poly::new(bounds.pts().to_vec(), vec![]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, DesignSettings, KeepoutFlags, Layer, LayerSet, PadShape, TrackKind, Zone};
    use crate::geom::pt;
    use crate::marker::VecReporter;
    use crate::rules::RuleFile;
    use enumset::EnumSet;

    fn settings() -> DesignSettings {
        DesignSettings {
            copper_clearance: 250_000.0,
            copper_edge_clearance: 250_000.0,
            min_track_width: 150_000.0,
            min_via_annular_ring: 50_000.0,
            min_via_drill: 200_000.0,
            min_microvia_drill: 100_000.0,
            min_pad_drill: 150_000.0,
            min_hole_to_hole: 250_000.0,
            ignore: EnumSet::empty(),
            netclasses: vec![],
            user_rules: vec![],
            enabled_layers: LayerSet::empty(),
            allow_microvias: false,
            allow_blind_buried_vias: false,
            board_copper_layers: 2,
        }
    }

    #[test]
    fn test_track_inside_keepout() {
        let mut board = Board::new();
        board.add_track(Track {
            a: pt(0.0, 0.0),
            b: pt(100_000.0, 0.0),
            width: 150_000.0,
            layers: LayerSet::single(Layer::Copper(0)),
            net: 1,
            kind: TrackKind::Wire,
            via_kind: None,
            drill: None,
        });
        board.add_zone(Zone {
            outline: Poly::new(
                vec![pt(-500_000.0, -500_000.0), pt(500_000.0, -500_000.0), pt(500_000.0, 500_000.0), pt(-500_000.0, 500_000.0)],
                vec![],
            ),
            priority: 0,
            layer: Layer::Copper(0),
            net: 0,
            keepout: Some(KeepoutFlags { blocks_tracks: true, ..Default::default() }),
            corner_smoothing: 0.0,
            filled: None,
        });

        let s = settings();
        let rules = RuleFile::default();
        let zones: Vec<Option<Poly>> = vec![None];
        let ctx = DrcCtx {
            board: &board,
            settings: &s,
            rules: &rules,
            outline: None,
            smoothed_zones: &zones,
            largest_clearance: s.copper_clearance,
        };
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&ctx, &mut reporter);
        assert_eq!(sink.markers.len(), 1);
        assert_eq!(sink.markers[0].kind, MarkerKind::KeepoutTrack);
    }

    #[test]
    fn test_pad_outside_keepout_allowed() {
        let mut board = Board::new();
        let fp = board.add_footprint(crate::board::Footprint {
            reference: "U1".into(),
            value: "".into(),
            pos: pt(0.0, 0.0),
            orientation_ddeg: 0,
            pads: vec![],
            graphics: vec![],
            texts: vec![],
            courtyard_front: None,
            courtyard_back: None,
            net_tie: false,
            duplicate_pad_numbers_allowed: false,
            local_clearance_override: None,
        });
        board.add_pad(Pad {
            pos: pt(2_000_000.0, 0.0),
            layers: LayerSet::single(Layer::Copper(0)),
            shape: PadShape::Round,
            size: (500_000.0, 500_000.0),
            orientation_ddeg: 0,
            drill: None,
            net: 1,
            number: "1".into(),
            footprint: fp,
            local_clearance_override: None,
        });
        board.add_zone(Zone {
            outline: Poly::new(
                vec![pt(-500_000.0, -500_000.0), pt(500_000.0, -500_000.0), pt(500_000.0, 500_000.0), pt(-500_000.0, 500_000.0)],
                vec![],
            ),
            priority: 0,
            layer: Layer::Copper(0),
            net: 0,
            keepout: Some(KeepoutFlags { blocks_pads: true, ..Default::default() }),
            corner_smoothing: 0.0,
            filled: None,
        });

        let s = settings();
        let rules = RuleFile::default();
        let zones: Vec<Option<Poly>> = vec![None];
        let ctx = DrcCtx {
            board: &board,
            settings: &s,
            rules: &rules,
            outline: None,
            smoothed_zones: &zones,
            largest_clearance: s.copper_clearance,
        };
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&ctx, &mut reporter);
        assert!(sink.markers.is_empty());
    }
}
