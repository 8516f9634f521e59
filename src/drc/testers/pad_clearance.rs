use crate::board::{Drill, DrillShape, Pad, PadId};
use crate::drc::context::DrcCtx;
use crate::geom::math::EP;
use crate::geom::{Poly, Shape};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// X-sorts the pad list once and walks each pad forward through a window
// sized by the largest clearance in play, so a pair farther apart on X than
// any possible conflict distance is never visited — the same result as a
// naive O(n^2) check (Testable Property 5), just without the quadratic
// cost in the common case of a spread-out board.
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let board = ctx.board;
    let mut order: Vec<usize> = (0..board.pads().len()).collect();
    order.sort_by(|&a, &b| {
        let pa = board.pad(PadId(a)).pos;
        let pb = board.pad(PadId(b)).pos;
        pa.x.partial_cmp(&pb.x).unwrap().then(pa.y.partial_cmp(&pb.y).unwrap())
    });

    let max_r = board.pads().iter().map(Pad::bounding_radius).fold(0.0_f64, f64::max);
    let window = max_r + ctx.largest_clearance + max_r;

    for (ii, &i) in order.iter().enumerate() {
        let a = board.pad(PadId(i));
        for &j in &order[ii + 1..] {
            let b = board.pad(PadId(j));
            if b.pos.x > a.pos.x + window {
                break;
            }
            test_pair(ctx, reporter, PadId(i), a, PadId(j), b);
        }
    }

    if let Some(outline) = ctx.outline {
        for &i in &order {
            test_pad_edge(ctx, reporter, PadId(i), board.pad(PadId(i)), outline);
        }
    }
}

// Mirrors the source's literal check order: the hole-vs-pad test runs
// before the same-net skip because it is a manufacturing (hole-to-hole)
// constraint, not an electrical one — see DESIGN.md's note on this pad.
fn test_pair(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>, ia: PadId, a: &Pad, ib: PadId, b: &Pad) {
    let disjoint = !a.layers.intersects(&b.layers);
    if disjoint && !a.has_through_hole() && !b.has_through_hole() {
        return;
    }

    let cu = ctx.settings.board_copper_layers;
    if a.hole_spans_all_copper(cu) || b.hole_spans_all_copper(cu) {
        test_hole_vs_pad(ctx, reporter, ia, a, ib, b, cu);
    }

    if a.net > 0 && a.net == b.net {
        return;
    }
    if a.footprint == b.footprint && !a.number.is_empty() && a.number == b.number {
        return;
    }
    if (a.is_technical_only() && a.drill.is_none()) || (b.is_technical_only() && b.drill.is_none()) {
        return;
    }

    let resolved = ctx.resolve_pad_pad(a, b);
    let actual = a.outline().dist_to(&b.outline());
    if actual < resolved.clearance {
        reporter.report(Marker::new(
            MarkerKind::PadNearPad,
            vec![ItemRef::Pad(ia), ItemRef::Pad(ib)],
            format!(
                "pads too close ({}): required {:.0}, actual {:.0}",
                resolved.source, resolved.clearance, actual
            ),
            midpoint(a, b),
        ));
    }
}

fn test_hole_vs_pad(
    ctx: &DrcCtx<'_>,
    reporter: &mut FilteredReporter<'_>,
    ia: PadId,
    a: &Pad,
    ib: PadId,
    b: &Pad,
    cu: u8,
) {
    if let (Some(da), Some(db)) = (a.drill, b.drill) {
        if (a.pos - b.pos).mag() <= EP && drills_identical(&da, a.orientation_ddeg, &db, b.orientation_ddeg) {
            // Explicitly allowed stacking (Testable Property 10): identical
            // through-holes at identical position are not a conflict.
            return;
        }
    }

    let resolved = ctx.resolve_pad_pad(a, b);
    if a.hole_spans_all_copper(cu) {
        check_hole(reporter, ia, ib, a.drill.unwrap().outline(a.pos, a.orientation_ddeg), &b.outline(), resolved.clearance);
    }
    if b.hole_spans_all_copper(cu) {
        check_hole(reporter, ib, ia, b.drill.unwrap().outline(b.pos, b.orientation_ddeg), &a.outline(), resolved.clearance);
    }
}

fn check_hole(
    reporter: &mut FilteredReporter<'_>,
    hole_owner: PadId,
    other: PadId,
    hole: Shape,
    opposing: &Shape,
    required: f64,
) {
    let actual = hole.dist_to(opposing);
    if actual < required {
        reporter.report(Marker::new(
            MarkerKind::HoleNearPad,
            vec![ItemRef::Pad(hole_owner), ItemRef::Pad(other)],
            format!("drilled hole too close to pad: required {required:.0}, actual {actual:.0}"),
            hole.bounds().center(),
        ));
    }
}

fn drills_identical(da: &Drill, oa: i32, db: &Drill, ob: i32) -> bool {
    if da.shape != db.shape {
        return false;
    }
    if (da.size.0 - db.size.0).abs() > EP || (da.size.1 - db.size.1).abs() > EP {
        return false;
    }
    da.shape != DrillShape::Oblong || oa == ob
}

fn test_pad_edge(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>, id: PadId, pad: &Pad, outline: &Poly) {
    let base = ctx.resolve_pad_edge(pad);
    let required = base.clearance.max(pad.local_clearance_override.unwrap_or(0.0));
    let pad_shape = pad.outline();
    for s in outline.segs() {
        let actual = pad_shape.dist_to(&Shape::Segment(s));
        if actual < required {
            reporter.report(Marker::new(
                MarkerKind::PadNearEdge,
                vec![ItemRef::Pad(id), ItemRef::BoardEdge],
                format!("pad too close to board edge: required {required:.0}, actual {actual:.0}"),
                pad.pos,
            ));
            break;
        }
    }
}

fn midpoint(a: &Pad, b: &Pad) -> crate::geom::Pt {
    crate::geom::pt((a.pos.x + b.pos.x) / 2.0, (a.pos.y + b.pos.y) / 2.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, DesignSettings, Footprint, LayerSet, Layer, PadShape};
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

    // S1: two round pads, diameter 1,000,000, 1,200,000 apart, different
    // nets, board clearance 250,000 -> one PAD_NEAR_PAD, actual 200,000.
    #[test]
    fn test_s1_two_round_pads_too_close() {
        let mut board = Board::new();
        let fp = board.add_footprint(Footprint {
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
        let mk_pad = |pos, net, number: &str| Pad {
            pos,
            layers: LayerSet::single(Layer::Copper(1)),
            shape: PadShape::Round,
            size: (1_000_000.0, 1_000_000.0),
            orientation_ddeg: 0,
            drill: None,
            net,
            number: number.to_string(),
            footprint: fp,
            local_clearance_override: None,
        };
        board.add_pad(mk_pad(pt(0.0, 0.0), 1, "1"));
        board.add_pad(mk_pad(pt(1_200_000.0, 0.0), 2, "1"));

        let s = settings();
        let rules = RuleFile::default();
        let ctx = DrcCtx {
            board: &board,
            settings: &s,
            rules: &rules,
            outline: None,
            smoothed_zones: &[],
            largest_clearance: s.copper_clearance,
        };
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&ctx, &mut reporter);

        assert_eq!(sink.markers.len(), 1);
        assert_eq!(sink.markers[0].kind, MarkerKind::PadNearPad);
        assert!(sink.markers[0].message.contains("200000"));
    }

    #[test]
    fn test_stacked_identical_through_holes_allowed() {
        let mut board = Board::new();
        let fp = board.add_footprint(Footprint {
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
            duplicate_pad_numbers_allowed: true,
            local_clearance_override: None,
        });
        let drill = Drill { shape: DrillShape::Round, size: (500_000.0, 500_000.0) };
        let all_copper: LayerSet = [Layer::Copper(0), Layer::Copper(1)].into_iter().collect();
        let mk = |net, number: &str| Pad {
            pos: pt(0.0, 0.0),
            layers: all_copper,
            shape: PadShape::Round,
            size: (800_000.0, 800_000.0),
            orientation_ddeg: 0,
            drill: Some(drill),
            net,
            number: number.to_string(),
            footprint: fp,
            local_clearance_override: None,
        };
        board.add_pad(mk(1, "1"));
        board.add_pad(mk(1, "1"));

        let s = settings();
        let rules = RuleFile::default();
        let ctx = DrcCtx {
            board: &board,
            settings: &s,
            rules: &rules,
            outline: None,
            smoothed_zones: &[],
            largest_clearance: s.copper_clearance,
        };
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&ctx, &mut reporter);
        assert!(sink.markers.is_empty());
    }
}
