use std::collections::HashMap;

use crate::board::{Board, FootprintId};
use crate::drc::netlist::Netlist;
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Cross-checks the board against an externally fetched netlist: duplicate
// reference designators on the board, netlist components missing from the
// board, board footprints absent from the netlist, and (the supplemental
// check recovered from cvpcb's per-pin reconciliation) pads whose board net
// disagrees with the netlist's net for that reference+pad-number.
pub fn run(board: &Board, netlist: &Netlist, reporter: &mut FilteredReporter<'_>) {
    let mut by_reference: HashMap<&str, Vec<FootprintId>> = HashMap::new();
    for (fi, fp) in board.footprints().iter().enumerate() {
        by_reference.entry(fp.reference.as_str()).or_default().push(FootprintId(fi));
    }

    for (reference, ids) in &by_reference {
        if ids.len() > 1 {
            for &id in ids {
                reporter.report(Marker::new(
                    MarkerKind::DuplicateFootprint,
                    vec![ItemRef::Footprint(id)],
                    format!("duplicate reference designator '{reference}'"),
                    board.footprint(id).pos,
                ));
            }
        }
    }

    for component in &netlist.components {
        if !by_reference.contains_key(component.reference.as_str()) {
            reporter.report(Marker::new(
                MarkerKind::MissingFootprint,
                vec![],
                format!("netlist component '{}' has no matching board footprint", component.reference),
                crate::geom::pt(0.0, 0.0),
            ));
        }
    }

    for (reference, ids) in &by_reference {
        if netlist.component(reference).is_none() {
            for &id in ids {
                reporter.report(Marker::new(
                    MarkerKind::ExtraFootprint,
                    vec![ItemRef::Footprint(id)],
                    format!("board footprint '{reference}' is not present in the netlist"),
                    board.footprint(id).pos,
                ));
            }
        }
    }

    check_pin_nets(board, netlist, reporter);
}

fn check_pin_nets(board: &Board, netlist: &Netlist, reporter: &mut FilteredReporter<'_>) {
    for (pi, pad) in board.pads().iter().enumerate() {
        let fp = board.footprint(pad.footprint);
        let Some(component) = netlist.component(&fp.reference) else { continue };
        let Some(pin) = component.pin(&pad.number) else { continue };
        let board_net = board.net_name(pad.net).unwrap_or("");
        if board_net != pin.net_name {
            reporter.report(Marker::new(
                MarkerKind::NetlistPinMismatch,
                vec![ItemRef::Pad(crate::board::PadId(pi))],
                format!(
                    "pad '{}' on '{}' is on net '{}' but the netlist assigns '{}'",
                    pad.number, fp.reference, board_net, pin.net_name
                ),
                pad.pos,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Footprint, Layer, LayerSet, Pad, PadShape};
    use crate::drc::netlist::{NetlistComponent, NetlistPin};
    use crate::geom::pt;
    use crate::marker::VecReporter;
    use enumset::EnumSet;

    fn footprint(board: &mut Board, reference: &str) -> FootprintId {
        board.add_footprint(Footprint {
            reference: reference.into(),
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
        })
    }

    #[test]
    fn test_missing_and_extra_footprints() {
        let mut board = Board::new();
        footprint(&mut board, "U1");

        let netlist = Netlist {
            components: vec![NetlistComponent { reference: "U2".into(), pins: vec![] }],
        };
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&board, &netlist, &mut reporter);
        assert!(sink.markers.iter().any(|m| m.kind == MarkerKind::MissingFootprint));
        assert!(sink.markers.iter().any(|m| m.kind == MarkerKind::ExtraFootprint));
    }

    #[test]
    fn test_pin_net_mismatch() {
        let mut board = Board::new();
        let fp = footprint(&mut board, "U1");
        board.add_pad(Pad {
            pos: pt(0.0, 0.0),
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
        board.name_net(1, "GND");

        let netlist = Netlist {
            components: vec![NetlistComponent {
                reference: "U1".into(),
                pins: vec![NetlistPin { pad_number: "1".into(), net_name: "VCC".into() }],
            }],
        };
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&board, &netlist, &mut reporter);
        assert!(sink.markers.iter().any(|m| m.kind == MarkerKind::NetlistPinMismatch));
    }
}
