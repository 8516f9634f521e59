// `0` = unconnected, `>0` = an indexed net, `<0` = invalid/orphaned.
pub type NetCode = i32;

pub const UNCONNECTED: NetCode = 0;

pub fn is_valid_net(n: NetCode) -> bool {
    n > 0
}

#[derive(Debug, Clone)]
pub struct NetClass {
    pub name: String,
    pub clearance: f64,
    pub track_width: f64,
    pub via_diameter: f64,
    pub via_drill: f64,
    pub microvia_diameter: f64,
    pub microvia_drill: f64,
    pub members: Vec<NetCode>,
}

impl NetClass {
    pub fn contains(&self, net: NetCode) -> bool {
        self.members.contains(&net)
    }
}
