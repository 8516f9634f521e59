use crate::board::{Board, TextId};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Any text item whose rendered string still contains an unevaluated
// `${...}` variable reference is reported once.
pub fn run(board: &Board, reporter: &mut FilteredReporter<'_>) {
    for (i, t) in board.texts().iter().enumerate() {
        if t.has_unresolved_variable() {
            reporter.report(Marker::new(
                MarkerKind::UnresolvedVariable,
                vec![ItemRef::Text(TextId(i))],
                format!("text '{}' contains an unresolved variable", t.text),
                t.bounds.center(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Layer, TextItem};
    use crate::geom::{pt, rt};
    use crate::marker::VecReporter;
    use enumset::EnumSet;

    #[test]
    fn test_unresolved_variable_reported() {
        let mut board = Board::new();
        board.add_text(TextItem::new(
            rt(0.0, 0.0, 1.0, 1.0),
            100.0,
            "value = ${UNSET}".into(),
            true,
            Layer::Technical(crate::board::TechLayer::SilkFront),
            None,
            pt(0.0, 0.0),
            100.0,
            100.0,
        ));
        let mut sink = VecReporter::default();
        let mut reporter = FilteredReporter::new(&mut sink, EnumSet::empty());
        run(&board, &mut reporter);
        assert_eq!(sink.markers.len(), 1);
        assert_eq!(sink.markers[0].kind, MarkerKind::UnresolvedVariable);
    }
}
