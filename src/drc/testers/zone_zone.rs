use std::collections::HashMap;

use crate::board::ZoneId;
use crate::drc::context::DrcCtx;
use crate::geom::distance::seg_seg_dist;
use crate::geom::{contains::poly_contains_pt, Pt};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Every unordered pair of zones on the same copper layer, priority, and
// keepout-type is tested for containment and near-touching edges against
// the precomputed smoothed-polygon cache (§4.8). Conflict points within a
// pair are deduplicated by rounding to the nearest board unit, matching
// the source's `wxPoint`-equality keying (§9 Open Question (b)): two
// violating vertices within 1nm of each other may still produce two
// markers, which is retained rather than bucketed more coarsely.
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let zones = ctx.board.zones();
    for i in 0..zones.len() {
        for j in (i + 1)..zones.len() {
            let (za, zb) = (&zones[i], &zones[j]);
            if za.layer != zb.layer || za.priority != zb.priority || za.keepout.is_some() != zb.keepout.is_some() {
                continue;
            }
            if za.keepout.is_some() && za.keepout != zb.keepout {
                continue;
            }
            if za.net > 0 && za.net == zb.net {
                continue;
            }
            let (Some(pa), Some(pb)) = (ctx.zone_poly(i), ctx.zone_poly(j)) else { continue };

            let required = ctx.resolve_zone_zone(za, zb).clearance.max(1.0);

            for &v in pa.pts() {
                if poly_contains_pt(pb, &v) {
                    reporter.report(Marker::new(
                        MarkerKind::ZonesIntersect,
                        vec![ItemRef::Zone(ZoneId(i)), ItemRef::Zone(ZoneId(j))],
                        "zone vertex lies inside the other zone",
                        v,
                    ));
                }
            }
            for &v in pb.pts() {
                if poly_contains_pt(pa, &v) {
                    reporter.report(Marker::new(
                        MarkerKind::ZonesIntersect,
                        vec![ItemRef::Zone(ZoneId(j)), ItemRef::Zone(ZoneId(i))],
                        "zone vertex lies inside the other zone",
                        v,
                    ));
                }
            }

            let mut conflicts: HashMap<(i64, i64), (f64, Pt)> = HashMap::new();
            for sa in pa.segs() {
                for sb in pb.segs() {
                    let d = seg_seg_dist(&sa, &sb);
                    if d < required {
                        let key = (sa.st().x.round() as i64, sa.st().y.round() as i64);
                        conflicts
                            .entry(key)
                            .and_modify(|(best, _)| *best = best.min(d))
                            .or_insert((d, sa.st()));
                    }
                }
            }
            for (_, (actual, pos)) in conflicts {
                let kind = if actual <= 0.0 { MarkerKind::ZonesIntersect } else { MarkerKind::ZonesTooClose };
                reporter.report(Marker::new(
                    kind,
                    vec![ItemRef::Zone(ZoneId(i)), ItemRef::Zone(ZoneId(j))],
                    format!("zones too close: required {required:.0}, actual {actual:.0}"),
                    pos,
                ));
            }
        }
    }
}
