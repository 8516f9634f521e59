use crate::board::DesignSettings;
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};
use crate::geom::Pt;

// Validates every netclass row against the board-wide minimums. Returns
// `false` if any row fails, in which case the orchestrator aborts the
// entire run per §4.2 — downstream testers would otherwise resolve
// clearances from a nonsensical netclass table and produce cascading
// noise.
pub fn run(settings: &DesignSettings, reporter: &mut FilteredReporter<'_>) -> bool {
    let mut ok = true;
    for nc in &settings.netclasses {
        let mut emit = |kind: MarkerKind, msg: String| {
            reporter.report(Marker::new(kind, vec![], msg, Pt::zero()));
        };

        if nc.track_width < settings.min_track_width {
            emit(
                MarkerKind::NetclassTrackWidth,
                format!("netclass '{}' track width below board minimum", nc.name),
            );
            ok = false;
        }
        if nc.via_diameter < nc.via_drill + 2.0 * settings.min_via_annular_ring {
            emit(
                MarkerKind::NetclassViaSize,
                format!("netclass '{}' via size leaves insufficient annular ring", nc.name),
            );
            ok = false;
        }
        if nc.via_drill < settings.min_via_drill {
            emit(MarkerKind::NetclassViaDrill, format!("netclass '{}' via drill below board minimum", nc.name));
            ok = false;
        }
        // A netclass row specifying microvia sizes while the board
        // disallows microvias is not an error: the row is simply unused.
        if settings.allow_microvias && nc.microvia_drill < settings.min_microvia_drill {
            emit(
                MarkerKind::NetclassMicroviaDrill,
                format!("netclass '{}' microvia drill below board minimum", nc.name),
            );
            ok = false;
        }
        if nc.clearance <= 0.0 {
            emit(MarkerKind::NetclassClearance, format!("netclass '{}' clearance must be positive", nc.name));
            ok = false;
        }
    }
    ok
}
