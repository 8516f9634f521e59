use crate::board::ZoneId;
use crate::drc::context::DrcCtx;
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Any copper (non-keepout) zone whose net code is invalid, or whose net has
// no pads, is almost certainly an orphaned pour left over from a deleted
// net — it fills copper that nothing is meant to be connected to.
pub fn run(ctx: &DrcCtx<'_>, reporter: &mut FilteredReporter<'_>) {
    for (i, zone) in ctx.board.zones().iter().enumerate() {
        if zone.is_keepout() {
            continue;
        }
        let empty = zone.net < 0 || (zone.net > 0 && ctx.board.pads_on_net(zone.net).next().is_none());
        if empty {
            reporter.report(Marker::new(
                MarkerKind::ZoneHasEmptyNet,
                vec![ItemRef::Zone(ZoneId(i))],
                "zone's net has no pads",
                zone.outline.bounds().center(),
            ));
        }
    }
}
