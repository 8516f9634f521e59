use crate::board::{Board, NetCode};
use crate::connectivity::union_find::UnionFind;
use crate::geom::{math::pt_eq, Pt};

#[derive(Debug, Clone, Copy)]
enum NodeKind {
    Pad(usize),
    TrackEnd(usize, bool), // track index, true = endpoint B
}

#[derive(Debug, Clone, Copy)]
struct Node {
    pos: Pt,
    net: NetCode,
    kind: NodeKind,
}

// Answers the connectivity questions the unconnected and track testers need:
// whether an endpoint is ratsnest-dangling, the set of unconnected edges per
// net, and per-net pad counts. Built once per run from coincident-position
// joins between pads and track endpoints sharing a net.
#[derive(Debug)]
pub struct ConnectivityGraph {
    nodes: Vec<Node>,
    uf: UnionFind,
}

impl ConnectivityGraph {
    pub fn build(board: &Board) -> Self {
        let mut nodes = Vec::new();
        for (i, pad) in board.pads().iter().enumerate() {
            nodes.push(Node { pos: pad.pos, net: pad.net, kind: NodeKind::Pad(i) });
        }
        for (i, t) in board.tracks().iter().enumerate() {
            nodes.push(Node { pos: t.a, net: t.net, kind: NodeKind::TrackEnd(i, false) });
            nodes.push(Node { pos: t.b, net: t.net, kind: NodeKind::TrackEnd(i, true) });
        }

        let mut uf = UnionFind::new(nodes.len());
        for i in 0..nodes.len() {
            for j in (i + 1)..nodes.len() {
                if nodes[i].net > 0 && nodes[i].net == nodes[j].net && pt_eq(nodes[i].pos, nodes[j].pos) {
                    uf.union(i, j);
                }
            }
        }
        // A track is a conductor: its own two endpoints are always joined,
        // regardless of position, since the track body carries current from
        // A to B. Track nodes were pushed in pairs right after the pads.
        let pad_count = board.pads().len();
        for i in 0..board.tracks().len() {
            uf.union(pad_count + 2 * i, pad_count + 2 * i + 1);
        }
        Self { nodes, uf }
    }

    // A track endpoint is dangling if no other node on the board coincides
    // with its position: it is attached to its net by declaration but not
    // geometrically joined to anything. Checked by direct position
    // coincidence against every node except the track's own two endpoints
    // (which `build` always unions with each other as the track's own
    // conductor, so that union-find root must be ignored here).
    pub fn is_dangling(&mut self, track_idx: usize, end_b: bool) -> bool {
        let Some(idx) = self.nodes.iter().position(|n| {
            matches!(n.kind, NodeKind::TrackEnd(t, b) if t == track_idx && b == end_b)
        }) else {
            return false;
        };
        let node = self.nodes[idx];
        !self.nodes.iter().enumerate().any(|(j, n)| {
            j != idx
                && !matches!(n.kind, NodeKind::TrackEnd(t, _) if t == track_idx)
                && n.net > 0
                && n.net == node.net
                && pt_eq(n.pos, node.pos)
        })
    }

    pub fn pad_count(&self, net: NetCode) -> usize {
        self.nodes.iter().filter(|n| n.net == net && matches!(n.kind, NodeKind::Pad(_))).count()
    }

    // Enumerates unconnected ratsnest edges: for every net with more than
    // one connected component, one edge per extra component linking it back
    // to the net's first component. This is a simplified ratsnest (not a
    // true minimum spanning tree across components) sufficient to surface
    // every component that still needs a connection.
    pub fn unconnected_edges(&mut self) -> Vec<(Pt, Pt)> {
        let mut by_net: std::collections::HashMap<NetCode, Vec<usize>> = std::collections::HashMap::new();
        for i in 0..self.nodes.len() {
            if self.nodes[i].net > 0 {
                by_net.entry(self.nodes[i].net).or_default().push(i);
            }
        }
        let mut edges = Vec::new();
        for (_, idxs) in by_net {
            let mut component_reps: Vec<usize> = Vec::new();
            let mut seen_roots = std::collections::HashSet::new();
            for &i in &idxs {
                let root = self.uf.find(i);
                if seen_roots.insert(root) {
                    component_reps.push(i);
                }
            }
            for w in component_reps.windows(2) {
                edges.push((self.nodes[w[0]].pos, self.nodes[w[1]].pos));
            }
        }
        edges
    }
}
