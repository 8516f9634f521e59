use crate::board::{FootprintId, GraphicId, Layer, Pad, PadId, TextId, Track, TrackId};
use crate::drc::context::DrcCtx;
use crate::geom::{cap, Segment, Shape};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Every copper-layer graphic item and visible copper-layer text is tested
// against every track and pad sharing that layer. Arcs, bezier curves and
// text were tessellated to segment chains at ingestion time (§4.1), so
// this tester only ever deals with plain segments widened by the item's
// pen width.
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    for (gi, g) in ctx.board.graphics().iter().enumerate() {
        if !g.layer.is_copper() {
            continue;
        }
        test_item(ctx, reporter, ItemRef::Graphic(GraphicId(gi)), g.segments(), g.width, g.layer, g.footprint);
    }
    for (ti, t) in ctx.board.texts().iter().enumerate() {
        if !t.visible || !t.layer.is_copper() {
            continue;
        }
        test_item(
            ctx,
            reporter,
            ItemRef::Text(TextId(ti)),
            t.segments(),
            t.pen_width,
            t.layer,
            t.footprint,
        );
    }
}

fn test_item(
    ctx: &DrcCtx<'_>,
    reporter: &mut FilteredReporter<'_>,
    item: ItemRef,
    segs: &[Segment],
    width: f64,
    layer: Layer,
    owner: Option<FootprintId>,
) {
    for (ti, t) in ctx.board.tracks().iter().enumerate() {
        if !t.layers.contains(layer) {
            continue;
        }
        test_track(ctx, reporter, item, segs, width, layer, t, TrackId(ti));
    }
    for (pi, p) in ctx.board.pads().iter().enumerate() {
        if !p.layers.contains(layer) {
            continue;
        }
        // Net-tie exception: a graphic item belonging to a net-tie
        // footprint may touch pads of its own footprint.
        if let Some(fp) = owner {
            if p.footprint == fp && ctx.board.footprint(fp).net_tie {
                continue;
            }
        }
        test_pad(ctx, reporter, item, segs, width, layer, p, PadId(pi));
    }
}

fn shape_of(segs: &[Segment], width: f64) -> Vec<Shape> {
    segs.iter().map(|s| Shape::Capsule(cap(s.st(), s.en(), width / 2.0))).collect()
}

fn test_track(
    ctx: &DrcCtx<'_>,
    reporter: &mut FilteredReporter<'_>,
    item: ItemRef,
    segs: &[Segment],
    width: f64,
    layer: Layer,
    t: &Track,
    id: TrackId,
) {
    let required = ctx.resolve_track_copper(t, layer).clearance;
    let track_shape = Shape::Capsule(t.capsule());
    let expand = required + width / 2.0;
    let track_bounds = track_shape.bounds().expand(expand);
    let mut best = f64::MAX;
    for shape in shape_of(segs, width) {
        if !track_bounds.intersects(&shape.bounds()) {
            continue;
        }
        best = best.min(track_shape.dist_to(&shape));
        if best < required {
            break;
        }
    }
    if best < required {
        let kind = if t.is_via() { MarkerKind::ViaNearCopper } else { MarkerKind::TrackNearCopper };
        reporter.report(Marker::new(
            kind,
            vec![ItemRef::Track(id), item],
            format!(
                "{} too close to copper graphic: required {required:.0}, actual {best:.0}",
                if t.is_via() { "via" } else { "track" }
            ),
            t.a,
        ));
    }
}

fn test_pad(
    ctx: &DrcCtx<'_>,
    reporter: &mut FilteredReporter<'_>,
    item: ItemRef,
    segs: &[Segment],
    width: f64,
    layer: Layer,
    p: &Pad,
    id: PadId,
) {
    let required = ctx.resolve_pad_copper(p, layer).clearance;
    let pad_shape = p.outline();
    let expand = required + width / 2.0;
    let pad_bounds = pad_shape.bounds().expand(expand);
    let mut best = f64::MAX;
    for shape in shape_of(segs, width) {
        if !pad_bounds.intersects(&shape.bounds()) {
            continue;
        }
        best = best.min(pad_shape.dist_to(&shape));
        if best < required {
            break;
        }
    }
    if best < required {
        reporter.report(Marker::new(
            MarkerKind::PadNearCopper,
            vec![ItemRef::Pad(id), item],
            format!("pad too close to copper graphic: required {required:.0}, actual {best:.0}"),
            p.pos,
        ));
    }
}
