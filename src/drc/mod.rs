// The orchestrator and the independent tester passes it drives. Every
// tester here is a plain function over a `DrcCtx` borrow plus a reporter;
// none of them hold state across calls or talk to each other directly, per
// the one-shot pipeline architecture.

pub mod context;
pub mod netlist;
pub mod options;
pub mod orchestrator;
pub mod testers;
mod zone_cache;

pub use context::DrcCtx;
pub use netlist::{Netlist, NetlistComponent, NetlistPin};
pub use options::{DrcOptions, RunResult};
pub use orchestrator::{run, test_footprints_against_netlist};
