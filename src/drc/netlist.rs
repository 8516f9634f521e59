// The netlist the footprint-vs-netlist tester (§4.13) cross-checks the
// board against, fetched by the host from the external schematic
// collaborator. Net membership is modeled by name rather than by the
// board's own net codes, since the netlist is an independent source that
// has not necessarily been annotated onto the board yet.
#[derive(Debug, Clone)]
pub struct NetlistPin {
    pub pad_number: String,
    pub net_name: String,
}

#[derive(Debug, Clone)]
pub struct NetlistComponent {
    pub reference: String,
    pub pins: Vec<NetlistPin>,
}

#[derive(Debug, Clone, Default)]
pub struct Netlist {
    pub components: Vec<NetlistComponent>,
}

impl Netlist {
    pub fn component(&self, reference: &str) -> Option<&NetlistComponent> {
        self.components.iter().find(|c| c.reference == reference)
    }
}

impl NetlistComponent {
    pub fn pin(&self, pad_number: &str) -> Option<&NetlistPin> {
        self.pins.iter().find(|p| p.pad_number == pad_number)
    }
}
