use crate::board::{Drill, DrillShape, PadId, TrackId, ViaKind};
use crate::drc::context::DrcCtx;
use crate::geom::math::EP;
use crate::geom::Pt;
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    check_pad_drills(ctx, reporter);
    check_via_drills(ctx, reporter);
    check_hole_to_hole(ctx, reporter);
}

fn check_pad_drills(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let s = ctx.settings;
    for (i, pad) in ctx.board.pads().iter().enumerate() {
        let Some(drill) = pad.drill else { continue };
        let outer = pad.size.0.min(pad.size.1);
        let max_allowed = outer - 2.0 * s.min_via_annular_ring;
        let actual = drill.size.0.max(drill.size.1);
        if actual > max_allowed || drill.size.0 < s.min_pad_drill {
            reporter.report(Marker::new(
                MarkerKind::TooSmallPadDrill,
                vec![ItemRef::Pad(PadId(i))],
                format!("pad drill {} violates annular ring or minimum drill", drill.size.0),
                pad.pos,
            ));
        }
    }
}

fn check_via_drills(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let s = ctx.settings;
    for (i, t) in ctx.board.tracks().iter().enumerate() {
        if !t.is_via() {
            continue;
        }
        let Some(drill) = t.drill else { continue };
        let max_allowed = t.width - 2.0 * s.min_via_annular_ring;
        let (min_drill, kind) = match t.via_kind {
            Some(ViaKind::Micro) => (s.min_microvia_drill, MarkerKind::TooSmallMicroviaDrill),
            _ => (s.min_via_drill, MarkerKind::TooSmallViaDrill),
        };
        if drill > max_allowed || drill < min_drill {
            reporter.report(Marker::new(
                kind,
                vec![ItemRef::Track(TrackId(i))],
                format!("via drill {drill} violates annular ring or minimum drill"),
                t.a,
            ));
        }
    }
}

#[derive(Clone, Copy)]
enum HoleOwner {
    Pad(usize, Drill, i32),
    Via(usize, f64),
}

struct HoleRef {
    pos: Pt,
    owner: HoleOwner,
}

// Pairwise hole-to-hole distance, reusing the same X-sorted sweep idiom as
// the pad-clearance tester (§4.5/§4.6). Applies to any drilled pair
// regardless of net — stacked vias on the same net are still physically
// separate holes and so are checked (§SPEC_FULL 4.6), except the identical
// "hole on top of hole" stacking case, which is exempt only when the
// drills are identical in shape, size and orientation.
fn check_hole_to_hole(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    let mut holes: Vec<HoleRef> = Vec::new();
    for (i, pad) in ctx.board.pads().iter().enumerate() {
        if let Some(d) = pad.drill {
            holes.push(HoleRef { pos: pad.pos, owner: HoleOwner::Pad(i, d, pad.orientation_ddeg) });
        }
    }
    for (i, t) in ctx.board.tracks().iter().enumerate() {
        if t.is_via() {
            if let Some(d) = t.drill {
                holes.push(HoleRef { pos: t.a, owner: HoleOwner::Via(i, d) });
            }
        }
    }
    if holes.is_empty() {
        return;
    }

    holes.sort_by(|a, b| a.pos.x.partial_cmp(&b.pos.x).unwrap());
    let max_radius = holes
        .iter()
        .map(|h| match h.owner {
            HoleOwner::Pad(_, d, _) => d.size.0.max(d.size.1) / 2.0,
            HoleOwner::Via(_, d) => d / 2.0,
        })
        .fold(0.0_f64, f64::max);
    let min_hole_to_hole = ctx.settings.min_hole_to_hole;
    let window = max_radius * 2.0 + min_hole_to_hole;

    for i in 0..holes.len() {
        for j in (i + 1)..holes.len() {
            if holes[j].pos.x > holes[i].pos.x + window {
                break;
            }
            let actual = holes[i].pos.dist(holes[j].pos);
            if identical_stack(&holes[i].owner, &holes[j].owner) && actual <= EP {
                continue;
            }
            if actual < min_hole_to_hole {
                reporter.report(Marker::new(
                    MarkerKind::DrilledHolesTooClose,
                    owner_refs(&holes[i].owner, &holes[j].owner),
                    format!(
                        "drilled holes too close: required {min_hole_to_hole:.0}, actual {actual:.0}"
                    ),
                    midpoint(holes[i].pos, holes[j].pos),
                ));
            }
        }
    }
}

fn identical_stack(a: &HoleOwner, b: &HoleOwner) -> bool {
    match (a, b) {
        (HoleOwner::Pad(_, da, oa), HoleOwner::Pad(_, db, ob)) => {
            da.shape == db.shape
                && (da.size.0 - db.size.0).abs() <= EP
                && (da.size.1 - db.size.1).abs() <= EP
                && (da.shape != DrillShape::Oblong || oa == ob)
        }
        (HoleOwner::Via(_, da), HoleOwner::Via(_, db)) => (da - db).abs() <= EP,
        _ => false,
    }
}

fn owner_refs(a: &HoleOwner, b: &HoleOwner) -> Vec<ItemRef> {
    vec![owner_ref(a), owner_ref(b)]
}

fn owner_ref(o: &HoleOwner) -> ItemRef {
    match *o {
        HoleOwner::Pad(i, _, _) => ItemRef::Pad(PadId(i)),
        HoleOwner::Via(i, _) => ItemRef::Track(TrackId(i)),
    }
}

fn midpoint(a: Pt, b: Pt) -> Pt {
    crate::geom::pt((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

