use crate::board::{Board, DesignSettings, GraphicId, PadId, TextId, TrackId};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Any copper-layer object on a layer the board has disabled (removed from
// its enabled-layer set, typically by reducing the board's layer count)
// is reported once per object.
pub fn run(board: &Board, settings: &DesignSettings, reporter: &mut FilteredReporter<'_>) {
    for (i, t) in board.tracks().iter().enumerate() {
        if t.layers.any_copper() && !board_allows(settings, &t.layers) {
            reporter.report(Marker::new(
                MarkerKind::DisabledLayerItem,
                vec![ItemRef::Track(TrackId(i))],
                "item is on a disabled layer",
                t.a,
            ));
        }
    }
    for (i, p) in board.pads().iter().enumerate() {
        if !board_allows(settings, &p.layers) && p.layers.any_copper() {
            reporter.report(Marker::new(
                MarkerKind::DisabledLayerItem,
                vec![ItemRef::Pad(PadId(i))],
                "item is on a disabled layer",
                p.pos,
            ));
        }
    }
    for (i, g) in board.graphics().iter().enumerate() {
        if g.layer.is_copper() && !settings.enabled_layers.contains(g.layer) {
            reporter.report(Marker::new(
                MarkerKind::DisabledLayerItem,
                vec![ItemRef::Graphic(GraphicId(i))],
                "item is on a disabled layer",
                g.bounds().center(),
            ));
        }
    }
    for (i, t) in board.texts().iter().enumerate() {
        if t.layer.is_copper() && !settings.enabled_layers.contains(t.layer) {
            reporter.report(Marker::new(
                MarkerKind::DisabledLayerItem,
                vec![ItemRef::Text(TextId(i))],
                "item is on a disabled layer",
                t.bounds.center(),
            ));
        }
    }
}

fn board_allows(settings: &DesignSettings, layers: &crate::board::LayerSet) -> bool {
    settings.enabled_layers.intersects(layers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Layer, LayerSet, Track, TrackKind};
    use crate::geom::pt;
    use crate::marker::VecReporter;
    use enumset::EnumSet;

    fn settings(enabled: LayerSet) -> DesignSettings {
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
            enabled_layers: enabled,
            allow_microvias: false,
            allow_blind_buried_vias: false,
            board_copper_layers: 2,
        }
    }

    #[test]
    fn test_track_on_disabled_layer() {
        let mut board = Board::new();
        board.add_track(Track {
            a: pt(0.0, 0.0),
            b: pt(1.0, 0.0),
            width: 150_000.0,
            layers: LayerSet::single(Layer::Copper(3)),
            net: 1,
            kind: TrackKind::Wire,
            via_kind: None,
            drill: None,
        });
        let s = settings(LayerSet::single(Layer::Copper(0)));
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&board, &s, &mut reporter);
        assert_eq!(sink.markers.len(), 1);
        assert_eq!(sink.markers[0].kind, MarkerKind::DisabledLayerItem);
    }
}
