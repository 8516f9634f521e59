// One module per tester named in spec §4; the orchestrator invokes each in
// the fixed execution order and owns composing their results into a single
// commit.
pub mod copper_graphic;
pub mod courtyard;
pub mod disabled_layer;
pub mod drill;
pub mod footprint_netlist;
pub mod keepout;
pub mod netclass;
pub mod outline;
pub mod pad_clearance;
pub mod track;
pub mod unconnected;
pub mod unresolved_text_variable;
pub mod zone_empty_net;
pub mod zone_zone;
