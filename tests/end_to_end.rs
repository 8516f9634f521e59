// End-to-end scenarios from the engine's test plan (S1-S6) plus a handful of
// the quantified/boundary properties, driven through the public `drc::run`
// entry point rather than individual tester functions.

use enumset::EnumSet;

use pcb_drc::board::{
    Board, DesignSettings, Drill, DrillShape, Footprint, Layer, LayerSet, NetClass, Pad, PadShape,
    Track, TrackKind, Zone,
};
use pcb_drc::drc::netlist::{NetlistComponent, NetlistPin};
use pcb_drc::drc::{DrcOptions, Netlist};
use pcb_drc::geom::{pt, Poly};
use pcb_drc::marker::{MarkerKind, VecReporter};

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
        enabled_layers: LayerSet::single(Layer::Copper(1)),
        allow_microvias: false,
        allow_blind_buried_vias: false,
        board_copper_layers: 2,
    }
}

fn add_footprint(board: &mut Board, reference: &str) -> pcb_drc::board::FootprintId {
    board.add_footprint(Footprint {
        reference: reference.into(),
        value: String::new(),
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
    })
}

fn round_pad(pos: pcb_drc::geom::Pt, net: i32, fp: pcb_drc::board::FootprintId, diameter: f64) -> Pad {
    Pad {
        pos,
        layers: LayerSet::single(Layer::Copper(1)),
        shape: PadShape::Round,
        size: (diameter, diameter),
        orientation_ddeg: 0,
        drill: None,
        net,
        number: "1".into(),
        footprint: fp,
        local_clearance_override: None,
    }
}

// S1: two round pads, diameter 1,000,000, centers 1,200,000 apart, different
// nets, board clearance 250,000 -> one PAD_NEAR_PAD, required 250,000,
// actual 200,000.
#[test]
fn test_s1_two_pads_too_close() {
    let mut board = Board::new();
    let fp1 = add_footprint(&mut board, "U1");
    let fp2 = add_footprint(&mut board, "U2");
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp1, 1_000_000.0));
    board.add_pad(round_pad(pt(1_200_000.0, 0.0), 2, fp2, 1_000_000.0));

    let s = settings();
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    let found: Vec<_> = sink.markers.iter().filter(|m| m.kind == MarkerKind::PadNearPad).collect();
    assert_eq!(found.len(), 1);
    assert!(found[0].message.contains("250000"));
    assert!(found[0].message.contains("200000"));
}

// S2: board outline missing one edge segment -> exactly one INVALID_OUTLINE
// marker and no edge-clearance tests run afterwards (no PAD_NEAR_EDGE even
// though the lone pad sits right where the missing edge would be).
#[test]
fn test_s2_broken_outline() {
    use pcb_drc::board::{GraphicItem, GraphicShape};

    let mut board = Board::new();
    board.add_graphic(GraphicItem::new(GraphicShape::Segment(pt(0.0, 0.0), pt(10_000_000.0, 0.0)), 0.0, Layer::EdgeCuts, None));
    board.add_graphic(GraphicItem::new(GraphicShape::Segment(pt(10_000_000.0, 0.0), pt(10_000_000.0, 10_000_000.0)), 0.0, Layer::EdgeCuts, None));
    board.add_graphic(GraphicItem::new(GraphicShape::Segment(pt(10_000_000.0, 10_000_000.0), pt(0.0, 10_000_000.0)), 0.0, Layer::EdgeCuts, None));
    // missing the closing edge back to (0, 0)

    let fp = add_footprint(&mut board, "U1");
    board.add_pad(round_pad(pt(100_000.0, 100_000.0), 1, fp, 500_000.0));

    let s = settings();
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    let outline_markers: Vec<_> = sink.markers.iter().filter(|m| m.kind == MarkerKind::InvalidOutline).collect();
    assert_eq!(outline_markers.len(), 1);
    assert!(!sink.markers.iter().any(|m| m.kind == MarkerKind::PadNearEdge));
}

// S3: two copper zones on Cu1, same priority, different nets, outlines
// separated by 100,000 against a required clearance of 150,000 ->
// ZONES_TOO_CLOSE at the minimum-separation point, actual 100,000.
#[test]
fn test_s3_zones_too_close() {
    let mut board = Board::new();
    let fp = add_footprint(&mut board, "U1");
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp, 200_000.0));
    board.add_pad(round_pad(pt(2_000_000.0, 0.0), 2, fp, 200_000.0));

    let zone_a = Poly::new(
        vec![pt(0.0, 0.0), pt(1_000_000.0, 0.0), pt(1_000_000.0, 1_000_000.0), pt(0.0, 1_000_000.0)],
        vec![],
    );
    let zone_b = Poly::new(
        vec![
            pt(1_100_000.0, 0.0),
            pt(2_100_000.0, 0.0),
            pt(2_100_000.0, 1_000_000.0),
            pt(1_100_000.0, 1_000_000.0),
        ],
        vec![],
    );
    board.add_zone(Zone { outline: zone_a, priority: 0, layer: Layer::Copper(1), net: 1, keepout: None, corner_smoothing: 0.0, filled: None });
    board.add_zone(Zone { outline: zone_b, priority: 0, layer: Layer::Copper(1), net: 2, keepout: None, corner_smoothing: 0.0, filled: None });

    let mut s = settings();
    s.copper_clearance = 150_000.0;
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    let found: Vec<_> = sink.markers.iter().filter(|m| m.kind == MarkerKind::ZonesTooClose).collect();
    assert!(!found.is_empty());
    assert!(found.iter().any(|m| m.message.contains("100000")));
    assert!(!sink.markers.iter().any(|m| m.kind == MarkerKind::ZonesIntersect));
}

// S4: netlist has R1, R2, R3; board has R1, R1, R3 -> DUPLICATE_FOOTPRINT for
// both R1 instances, MISSING_FOOTPRINT for R2, no EXTRA_FOOTPRINT.
#[test]
fn test_s4_duplicate_and_missing_footprints() {
    let mut board = Board::new();
    add_footprint(&mut board, "R1");
    add_footprint(&mut board, "R1");
    add_footprint(&mut board, "R3");

    let netlist = Netlist {
        components: vec![
            NetlistComponent { reference: "R1".into(), pins: vec![] },
            NetlistComponent { reference: "R2".into(), pins: vec![] },
            NetlistComponent { reference: "R3".into(), pins: vec![] },
        ],
    };

    let s = settings();
    let mut options = DrcOptions::default();
    options.check_footprints_vs_netlist = true;
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, Some(&netlist), &mut sink);

    let dup = sink.markers.iter().filter(|m| m.kind == MarkerKind::DuplicateFootprint).count();
    let missing = sink.markers.iter().filter(|m| m.kind == MarkerKind::MissingFootprint).count();
    let extra = sink.markers.iter().filter(|m| m.kind == MarkerKind::ExtraFootprint).count();
    assert_eq!(dup, 2);
    assert_eq!(missing, 1);
    assert_eq!(extra, 0);
}

// S5: a copper text crossing a track of width 200,000 on the same layer,
// different net, clearance 200,000 -> one TRACK_NEAR_COPPER.
#[test]
fn test_s5_text_crosses_track() {
    use pcb_drc::board::TextItem;
    use pcb_drc::geom::rt;

    let mut board = Board::new();
    board.add_track(Track {
        a: pt(0.0, 100_000.0),
        b: pt(2_000_000.0, 100_000.0),
        width: 200_000.0,
        layers: LayerSet::single(Layer::Copper(1)),
        net: 1,
        kind: TrackKind::Wire,
        via_kind: None,
        drill: None,
    });
    board.add_text(TextItem::new(
        rt(0.0, 0.0, 600_000.0, 200_000.0),
        150_000.0,
        "ABC".into(),
        true,
        Layer::Copper(1),
        None,
        pt(0.0, 0.0),
        200_000.0,
        200_000.0,
    ));

    let mut s = settings();
    s.copper_clearance = 200_000.0;
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    assert!(sink.markers.iter().any(|m| m.kind == MarkerKind::TrackNearCopper));
}

// S6: a net with two pads where the track only reaches the first one -> one
// DANGLING_TRACK at the free endpoint (nothing else touches it) and one
// UNCONNECTED_ITEMS covering the still-unrouted pad, no duplicate of either.
#[test]
fn test_s6_dangling_endpoint() {
    let mut board = Board::new();
    let fp = add_footprint(&mut board, "U1");
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp, 500_000.0));
    board.add_pad(round_pad(pt(5_000_000.0, 0.0), 1, fp, 500_000.0));
    board.add_track(Track {
        a: pt(0.0, 0.0),
        b: pt(2_000_000.0, 0.0),
        width: 150_000.0,
        layers: LayerSet::single(Layer::Copper(1)),
        net: 1,
        kind: TrackKind::Wire,
        via_kind: None,
        drill: None,
    });

    let s = settings();
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    let dangling = sink.markers.iter().filter(|m| m.kind == MarkerKind::DanglingTrack).count();
    let unconnected = sink.markers.iter().filter(|m| m.kind == MarkerKind::UnconnectedItems).count();
    assert_eq!(dangling, 1);
    assert_eq!(unconnected, 1);
}

// A net routed as pad-track-pad, with the track's two endpoints each
// coincident with a pad, is fully connected end to end: no DANGLING_TRACK,
// no UNCONNECTED_ITEMS.
#[test]
fn test_fully_routed_net_has_no_connectivity_markers() {
    let mut board = Board::new();
    let fp = add_footprint(&mut board, "U1");
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp, 500_000.0));
    board.add_pad(round_pad(pt(2_000_000.0, 0.0), 1, fp, 500_000.0));
    board.add_track(Track {
        a: pt(0.0, 0.0),
        b: pt(2_000_000.0, 0.0),
        width: 150_000.0,
        layers: LayerSet::single(Layer::Copper(1)),
        net: 1,
        kind: TrackKind::Wire,
        via_kind: None,
        drill: None,
    });

    let s = settings();
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    let dangling = sink.markers.iter().filter(|m| m.kind == MarkerKind::DanglingTrack).count();
    let unconnected = sink.markers.iter().filter(|m| m.kind == MarkerKind::UnconnectedItems).count();
    assert_eq!(dangling, 0);
    assert_eq!(unconnected, 0);
}

// Property 2: a pair sharing a positive net never produces a *_NEAR_* marker
// even when touching.
#[test]
fn test_same_net_pads_never_clash() {
    let mut board = Board::new();
    let fp = add_footprint(&mut board, "U1");
    board.add_pad(round_pad(pt(0.0, 0.0), 7, fp, 1_000_000.0));
    board.add_pad(round_pad(pt(100_000.0, 0.0), 7, fp, 1_000_000.0));

    let s = settings();
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    assert!(!sink.markers.iter().any(|m| m.kind == MarkerKind::PadNearPad));
}

// Property 6: running the engine twice on the same unchanged board produces
// identical marker sets.
#[test]
fn test_determinism() {
    let mut board = Board::new();
    let fp1 = add_footprint(&mut board, "U1");
    let fp2 = add_footprint(&mut board, "U2");
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp1, 1_000_000.0));
    board.add_pad(round_pad(pt(1_200_000.0, 0.0), 2, fp2, 1_000_000.0));

    let s = settings();

    let mut options_a = DrcOptions::default();
    let mut sink_a = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options_a, None, &mut sink_a);

    let mut options_b = DrcOptions::default();
    let mut sink_b = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options_b, None, &mut sink_b);

    let kinds_a: Vec<_> = sink_a.markers.iter().map(|m| m.kind).collect();
    let kinds_b: Vec<_> = sink_b.markers.iter().map(|m| m.kind).collect();
    assert_eq!(kinds_a, kinds_b);
}

// Property 7: ignoring a kind removes exactly the markers of that kind.
#[test]
fn test_ignore_removes_exactly_one_kind() {
    let mut board = Board::new();
    let fp1 = add_footprint(&mut board, "U1");
    let fp2 = add_footprint(&mut board, "U2");
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp1, 1_000_000.0));
    board.add_pad(round_pad(pt(1_200_000.0, 0.0), 2, fp2, 1_000_000.0));

    let s = settings();

    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);
    let before = sink.markers.len();
    assert!(before > 0);

    let mut ignoring =
        DrcOptions { ignore: enumset::enum_set!(MarkerKind::PadNearPad), ..DrcOptions::default() };
    let mut sink2 = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut ignoring, None, &mut sink2);

    assert!(!sink2.markers.iter().any(|m| m.kind == MarkerKind::PadNearPad));
    assert_eq!(sink2.markers.len(), before - 1);
}

// Property 9: at exactly actual == required, no marker is emitted (strict
// inequality only).
#[test]
fn test_exact_clearance_is_not_a_violation() {
    let mut board = Board::new();
    let fp1 = add_footprint(&mut board, "U1");
    let fp2 = add_footprint(&mut board, "U2");
    // Two 1,000,000-diameter round pads: edge-to-edge gap equals
    // center distance minus both radii. Centers 1,250,000 apart gives a gap
    // of exactly 250,000, matching the board's default clearance.
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp1, 1_000_000.0));
    board.add_pad(round_pad(pt(1_250_000.0, 0.0), 2, fp2, 1_000_000.0));

    let s = settings();
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    assert!(!sink.markers.iter().any(|m| m.kind == MarkerKind::PadNearPad));
}

// Property 10/Drill variant: two identical through-hole pads stacked at the
// same position on the same net class a legitimate multi-pad via stack, not
// a hole-to-hole violation.
#[test]
fn test_stacked_through_holes_allowed_end_to_end() {
    let mut board = Board::new();
    let fp = add_footprint(&mut board, "U1");
    let drill = Drill { shape: DrillShape::Round, size: (500_000.0, 500_000.0) };
    let all_copper: LayerSet = [Layer::Copper(0), Layer::Copper(1)].into_iter().collect();
    let mk = |number: &str| Pad {
        pos: pt(0.0, 0.0),
        layers: all_copper,
        shape: PadShape::Round,
        size: (800_000.0, 800_000.0),
        orientation_ddeg: 0,
        drill: Some(drill),
        net: 1,
        number: number.into(),
        footprint: fp,
        local_clearance_override: None,
    };
    board.add_pad(mk("1"));
    board.add_pad(mk("1"));

    let mut s = settings();
    s.board_copper_layers = 2;
    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    assert!(!sink.markers.iter().any(|m| m.kind == MarkerKind::HoleNearPad));
}

// A netclass row that asks for stricter clearance than the board default
// takes priority over it (netclass beats board-default in the resolver
// chain).
#[test]
fn test_netclass_clearance_overrides_board_default() {
    let mut board = Board::new();
    let fp1 = add_footprint(&mut board, "U1");
    let fp2 = add_footprint(&mut board, "U2");
    // Gap of 600,000, comfortably clear of the board default (100,000) but
    // inside the netclass's stricter 400,000.
    board.add_pad(round_pad(pt(0.0, 0.0), 1, fp1, 1_000_000.0));
    board.add_pad(round_pad(pt(1_600_000.0, 0.0), 2, fp2, 1_000_000.0));

    let mut s = settings();
    s.copper_clearance = 100_000.0;
    s.netclasses = vec![NetClass {
        name: "power".into(),
        clearance: 400_000.0,
        track_width: 300_000.0,
        via_diameter: 600_000.0,
        via_drill: 300_000.0,
        microvia_diameter: 300_000.0,
        microvia_drill: 100_000.0,
        members: vec![1, 2],
    }];

    let mut options = DrcOptions::default();
    let mut sink = VecReporter::default();
    pcb_drc::drc::run(&board, &s, "", &mut options, None, &mut sink);

    let found = sink.markers.iter().any(|m| m.kind == MarkerKind::PadNearPad && m.message.contains("400000"));
    assert!(found);
}
