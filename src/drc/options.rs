use enumset::EnumSet;

use crate::marker::MarkerKind;

// Which kinds to skip (in addition to the board's own ignore set), whether
// to refill zones first, whether to run the footprint-vs-netlist check, and
// the narrow progress interface the track tester yields to. The host
// supplies a no-op for `progress` when running headless (CLI, tests).
pub struct DrcOptions {
    pub ignore: EnumSet<MarkerKind>,
    pub refill_zones: bool,
    pub check_footprints_vs_netlist: bool,
    pub do_zones_test: bool,
    pub dangling_tests: bool,
    pub continue_on_abort: bool,
    pub progress: Option<Box<dyn FnMut(usize, usize) -> bool>>,
}

impl std::fmt::Debug for DrcOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DrcOptions")
            .field("ignore", &self.ignore)
            .field("refill_zones", &self.refill_zones)
            .field("check_footprints_vs_netlist", &self.check_footprints_vs_netlist)
            .field("do_zones_test", &self.do_zones_test)
            .field("dangling_tests", &self.dangling_tests)
            .field("continue_on_abort", &self.continue_on_abort)
            .field("progress", &self.progress.is_some())
            .finish()
    }
}

impl Default for DrcOptions {
    fn default() -> Self {
        Self {
            ignore: EnumSet::empty(),
            refill_zones: false,
            check_footprints_vs_netlist: false,
            do_zones_test: true,
            dangling_tests: true,
            continue_on_abort: false,
            progress: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunResult {
    pub markers_pushed: usize,
    // A cooperative abort observed at a progress yield point, per §5; the
    // markers collected up to that point are still pushed.
    pub aborted: bool,
    // The netclass tester failed a row: per §4.2 the whole run stops short
    // after pushing whatever markers were produced by the passes that ran
    // before it (outline, netclass itself).
    pub netclass_failed: bool,
}
