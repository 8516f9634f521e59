use crate::board::{Footprint, FootprintId, PadId};
use crate::drc::context::DrcCtx;
use crate::geom::intersects::{poly_intersects_poly, seg_intersects_seg};
use crate::geom::{Poly, Shape};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Every footprint must carry a well-formed courtyard; pairwise overlap and
// through-hole/non-plated-hole intrusion are then checked against it.
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let footprints = ctx.board.footprints();

    for (fi, fp) in footprints.iter().enumerate() {
        check_presence(reporter, FootprintId(fi), fp);
    }

    for i in 0..footprints.len() {
        for j in (i + 1)..footprints.len() {
            let (a, b) = (&footprints[i], &footprints[j]);
            let (Some(ca), Some(cb)) = (courtyard_of(a), courtyard_of(b)) else { continue };
            if poly_intersects_poly(ca, cb) {
                reporter.report(Marker::new(
                    MarkerKind::OverlappingFootprints,
                    vec![ItemRef::Footprint(FootprintId(i)), ItemRef::Footprint(FootprintId(j))],
                    format!("footprints '{}' and '{}' overlap", a.reference, b.reference),
                    a.pos,
                ));
            }
        }
    }

    for (fi, fp) in footprints.iter().enumerate() {
        let Some(courtyard) = courtyard_of(fp) else { continue };
        let courtyard_shape = Shape::Polygon(courtyard.clone());
        for (pi, pad) in ctx.board.pads().iter().enumerate() {
            if pad.footprint == FootprintId(fi) || pad.drill.is_none() {
                continue;
            }
            if !courtyard_shape.intersects(&pad.outline()) {
                continue;
            }
            // A pad with no net is unplated (a mounting hole); anything else
            // drilled is a plated through-hole.
            let kind = if pad.net > 0 { MarkerKind::PthInCourtyard } else { MarkerKind::NpthInCourtyard };
            reporter.report(Marker::new(
                kind,
                vec![ItemRef::Pad(PadId(pi)), ItemRef::Footprint(FootprintId(fi))],
                format!("drilled hole intrudes into '{}' courtyard", fp.reference),
                pad.pos,
            ));
        }
    }
}

fn check_presence(reporter: &mut FilteredReporter<'_>, id: FootprintId, fp: &Footprint) {
    if !fp.has_courtyard() {
        reporter.report(Marker::new(
            MarkerKind::MissingCourtyard,
            vec![ItemRef::Footprint(id)],
            format!("footprint '{}' has no courtyard", fp.reference),
            fp.pos,
        ));
        return;
    }
    if let Some(c) = courtyard_of(fp) {
        if !is_simple(c) {
            reporter.report(Marker::new(
                MarkerKind::MalformedCourtyard,
                vec![ItemRef::Footprint(id)],
                format!("footprint '{}' courtyard is not a simple polygon", fp.reference),
                fp.pos,
            ));
        }
    }
}

fn courtyard_of(fp: &Footprint) -> Option<&Poly> {
    fp.courtyard_front.as_ref().or(fp.courtyard_back.as_ref())
}

fn is_simple(p: &Poly) -> bool {
    let pts = p.pts();
    if pts.len() < 3 {
        return false;
    }
    let segs = p.segs();
    for i in 0..segs.len() {
        for j in (i + 1)..segs.len() {
            let adjacent = j == i + 1 || (i == 0 && j == segs.len() - 1);
            if adjacent {
                continue;
            }
            if seg_intersects_seg(&segs[i], &segs[j]) {
                return false;
            }
        }
    }
    true
}
