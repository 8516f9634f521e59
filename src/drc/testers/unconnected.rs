use crate::connectivity::ConnectivityGraph;
use crate::drc::context::DrcCtx;
use crate::marker::{FilteredReporter, Marker, MarkerKind};

// Rebuilds connectivity from scratch (the track tester's dangling check
// reuses a graph built once per run, but this tester's job is exactly that
// rebuild-and-ratsnest step) and reports one marker per unconnected edge.
// The connectivity graph only tracks endpoint positions, not which pad or
// track owns them, so the marker carries no item references beyond its
// midpoint location.
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let mut conn = ConnectivityGraph::build(ctx.board);
    for (a, b) in conn.unconnected_edges() {
        let mid = crate::geom::pt((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
        reporter.report(Marker::new(
            MarkerKind::UnconnectedItems,
            vec![],
            "net has an unconnected ratsnest edge",
            mid,
        ));
    }
}
