use log::{debug, info, warn};

use crate::board::{Board, DesignSettings};
use crate::connectivity::ConnectivityGraph;
use crate::drc::context::DrcCtx;
use crate::drc::netlist::Netlist;
use crate::drc::options::{DrcOptions, RunResult};
use crate::drc::testers;
use crate::drc::zone_cache::smoothed_zones;
use crate::marker::{FilteredReporter, Marker, MarkerKind, Reporter};
use crate::rules::{load_rules, RuleFile};

// The top-level `Run` entry point (spec §4.2): loads rules, precomputes the
// shared caches every tester needs, then invokes each tester in the fixed
// order, aborting early if the netclass tester fails. A single `reporter`
// collects every marker from the whole run; the per-kind ignore set in
// `options` (unioned with the board's own `settings.ignore`) is applied once
// here rather than by each tester.
pub fn run(
    board: &Board,
    settings: &DesignSettings,
    rules_src: &str,
    options: &mut DrcOptions,
    netlist: Option<&Netlist>,
    reporter: &mut dyn Reporter,
) -> RunResult {
    let ignore = options.ignore | settings.ignore;
    let mut filtered = FilteredReporter::new(reporter, ignore);

    let rules = match load_rules(rules_src) {
        Ok(r) => r,
        Err(e) => {
            warn!("drc-rules parse failed, continuing with an empty rule set: {e}");
            filtered.report(Marker::new(
                MarkerKind::RuleParseError,
                vec![],
                format!("failed to parse rule file: {e}"),
                crate::geom::pt(0.0, 0.0),
            ));
            RuleFile::default()
        }
    };

    let largest_clearance = compute_largest_clearance(settings, &rules);
    info!("drc run starting: {} pads, {} tracks, {} zones", board.pads().len(), board.tracks().len(), board.zones().len());

    let outline = testers::outline::run(board, &mut filtered);
    let smoothed = smoothed_zones(board);

    let ctx = DrcCtx {
        board,
        settings,
        rules: &rules,
        outline: outline.as_ref(),
        smoothed_zones: &smoothed,
        largest_clearance,
    };

    if !testers::netclass::run(settings, &mut filtered) {
        info!("netclass tester failed; aborting run after {} markers", filtered.pushed);
        return RunResult { markers_pushed: filtered.pushed, aborted: false, netclass_failed: true };
    }

    testers::pad_clearance::run(&ctx, &mut filtered);
    debug!("pad-clearance done, {} markers so far", filtered.pushed);
    testers::drill::run(&ctx, &mut filtered);
    debug!("drill done, {} markers so far", filtered.pushed);

    let mut conn = ConnectivityGraph::build(board);
    let completed = testers::track::run(&ctx, &mut filtered, &mut conn, options);
    debug!("track done, {} markers so far", filtered.pushed);
    if !completed {
        info!("run aborted mid-track pass with {} markers", filtered.pushed);
        return RunResult { markers_pushed: filtered.pushed, aborted: true, netclass_failed: false };
    }

    testers::zone_zone::run(&ctx, &mut filtered);
    testers::zone_empty_net::run(&ctx, &mut filtered);
    testers::unconnected::run(&ctx, &mut filtered);
    testers::keepout::run(&ctx, &mut filtered);
    testers::copper_graphic::run(&ctx, &mut filtered);
    testers::courtyard::run(&ctx, &mut filtered);

    if options.check_footprints_vs_netlist {
        if let Some(nl) = netlist {
            testers::footprint_netlist::run(board, nl, &mut filtered);
        }
    }

    testers::disabled_layer::run(board, settings, &mut filtered);
    testers::unresolved_text_variable::run(board, &mut filtered);

    info!("drc run finished: {} markers pushed", filtered.pushed);
    RunResult { markers_pushed: filtered.pushed, aborted: false, netclass_failed: false }
}

// Standalone entry point for the footprint-vs-netlist check alone, for a
// host that wants to re-run it against a freshly fetched netlist without
// re-running the rest of the pipeline.
pub fn test_footprints_against_netlist(
    board: &Board,
    netlist: &Netlist,
    ignore: enumset::EnumSet<MarkerKind>,
    reporter: &mut dyn Reporter,
) -> usize {
    let mut filtered = FilteredReporter::new(reporter, ignore);
    testers::footprint_netlist::run(board, netlist, &mut filtered);
    filtered.pushed
}

fn compute_largest_clearance(settings: &DesignSettings, rules: &RuleFile) -> f64 {
    let mut largest = settings.copper_clearance.max(settings.copper_edge_clearance);
    for nc in &settings.netclasses {
        largest = largest.max(nc.clearance);
    }
    for rule in &rules.rules {
        largest = largest.max(rule.clearance);
    }
    largest
}
