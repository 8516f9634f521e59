use crate::board::{Pad, PadId, Track, TrackId};
use crate::connectivity::ConnectivityGraph;
use crate::drc::context::DrcCtx;
use crate::drc::options::DrcOptions;
use crate::geom::clearance::segment_segment_clearance;
use crate::geom::Shape;
use crate::marker::{locate, FilteredReporter, ItemRef, Marker, MarkerKind};

const PROGRESS_INTERVAL: usize = 500;

// Walks every track (wire or via) once: board-edge clearance, pairwise
// clearance against later tracks and overlapping-layer pads, dangling
// endpoint detection, and (optionally) clearance against filled zones on
// the same layer. Yields to `options.progress` every 500 iterations per
// §5; returns `false` if the host aborted and `continue_on_abort` is unset,
// telling the orchestrator to stop running further testers.
pub fn run(
    ctx: &DrcCtx<'_>,
    reporter: &mut FilteredReporter<'_>,
    conn: &mut ConnectivityGraph,
    options: &mut DrcOptions,
) -> bool {
    let board = ctx.board;
    let tracks = board.tracks();

    for (i, t) in tracks.iter().enumerate() {
        if i % PROGRESS_INTERVAL == 0 {
            if let Some(cb) = options.progress.as_mut() {
                if !cb(i, tracks.len()) && !options.continue_on_abort {
                    return false;
                }
            }
        }

        test_edge(ctx, reporter, TrackId(i), t);

        for (j, other) in tracks.iter().enumerate().skip(i + 1) {
            test_track_track(ctx, reporter, TrackId(i), t, TrackId(j), other);
        }

        for (pi, pad) in board.pads().iter().enumerate() {
            if t.shares_layer(&pad.layers) {
                test_track_pad(ctx, reporter, TrackId(i), t, PadId(pi), pad);
            }
        }

        if options.dangling_tests {
            test_dangling(reporter, conn, TrackId(i), t, i);
        }

        if options.do_zones_test {
            test_track_zones(ctx, reporter, TrackId(i), t);
        }
    }
    true
}

fn test_edge(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>, id: TrackId, t: &Track) {
    let Some(outline) = ctx.outline else { return };
    let resolved = ctx.resolve_track_edge(t);
    let shape = Shape::Capsule(t.capsule());
    for s in outline.segs() {
        let actual = shape.dist_to(&Shape::Segment(s));
        if actual < resolved.clearance {
            let kind = if t.is_via() { MarkerKind::ViaNearEdge } else { MarkerKind::TrackNearEdge };
            reporter.report(Marker::new(
                kind,
                vec![ItemRef::Track(id), ItemRef::BoardEdge],
                format!(
                    "{} too close to board edge ({}): required {:.0}, actual {:.0}",
                    if t.is_via() { "via" } else { "track" },
                    resolved.source,
                    resolved.clearance,
                    actual
                ),
                locate(t.a, t.b, &Shape::Segment(s)),
            ));
            break;
        }
    }
}

fn test_track_track(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>, ia: TrackId, a: &Track, ib: TrackId, b: &Track) {
    if !a.shares_layer(&b.layers) {
        return;
    }
    if a.net > 0 && a.net == b.net {
        return;
    }
    let resolved = ctx.resolve_track_track(a, b);
    let (actual, point) =
        segment_segment_clearance(a.a, a.b, a.width, b.a, b.b, b.width, resolved.clearance);
    if actual < resolved.clearance {
        reporter.report(Marker::new(
            MarkerKind::TrackNearTrack,
            vec![ItemRef::Track(ia), ItemRef::Track(ib)],
            format!(
                "tracks too close ({}): required {:.0}, actual {:.0}",
                resolved.source, resolved.clearance, actual
            ),
            point,
        ));
    }
}

fn test_track_pad(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>, it: TrackId, t: &Track, ip: PadId, pad: &Pad) {
    if pad.net > 0 && pad.net == t.net {
        return;
    }
    if pad.is_technical_only() && pad.drill.is_none() {
        return;
    }
    let resolved = ctx.resolve_track_pad(t, pad);
    let shape = Shape::Capsule(t.capsule());
    let actual = shape.dist_to(&pad.outline());
    if actual < resolved.clearance {
        reporter.report(Marker::new(
            MarkerKind::TrackNearPad,
            vec![ItemRef::Track(it), ItemRef::Pad(ip)],
            format!(
                "{} too close to pad ({}): required {:.0}, actual {:.0}",
                if t.is_via() { "via" } else { "track" },
                resolved.source,
                resolved.clearance,
                actual
            ),
            locate(t.a, t.b, &pad.outline()),
        ));
    }
}

fn test_dangling(reporter: &mut FilteredReporter<'_>, conn: &mut ConnectivityGraph, id: TrackId, t: &Track, idx: usize) {
    if t.net <= 0 {
        return;
    }
    let kind = if t.is_via() { MarkerKind::DanglingVia } else { MarkerKind::DanglingTrack };
    if conn.is_dangling(idx, false) {
        reporter.report(Marker::new(kind, vec![ItemRef::Track(id)], "dangling track endpoint", t.a));
    }
    if !t.is_via() && conn.is_dangling(idx, true) {
        reporter.report(Marker::new(kind, vec![ItemRef::Track(id)], "dangling track endpoint", t.b));
    }
}

// Filled-zone clearance reuses the copper-graphic naming (TrackNearCopper /
// ViaNearCopper): a zone's filled polygon is copper the same as any other
// copper-layer shape, and the canonical error-kind list has no separate
// track-vs-zone kind.
fn test_track_zones(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>, id: TrackId, t: &Track) {
    for (zi, zone) in ctx.board.zones().iter().enumerate() {
        if zone.is_keepout() || !t.layers.contains(zone.layer) {
            continue;
        }
        if zone.net > 0 && zone.net == t.net {
            continue;
        }
        let Some(poly) = ctx.zone_poly(zi) else { continue };
        let resolved = ctx.resolve_track_copper(t, zone.layer);
        let shape = Shape::Capsule(t.capsule());
        let actual = shape.dist_to(&Shape::Polygon(poly.clone()));
        if actual < resolved.clearance {
            let kind = if t.is_via() { MarkerKind::ViaNearCopper } else { MarkerKind::TrackNearCopper };
            reporter.report(Marker::new(
                kind,
                vec![ItemRef::Track(id), ItemRef::Zone(crate::board::ZoneId(zi))],
                format!(
                    "{} too close to zone ({}): required {:.0}, actual {:.0}",
                    if t.is_via() { "via" } else { "track" },
                    resolved.source,
                    resolved.clearance,
                    actual
                ),
                t.a,
            ));
        }
    }
}
