use crate::board::Board;
use crate::geom::{math::pt_eq, Poly, Pt};
use crate::marker::{FilteredReporter, ItemRef, Marker, MarkerKind};

// Assembles the board outline from every `Edge.Cuts` graphic item. Chains
// segments end-to-end by coincident endpoints; if the chain does not close
// into a simple loop, reports `INVALID_OUTLINE` at the leftmost-topmost
// discontinuity and returns `None` so every downstream edge-clearance test
// is skipped for the rest of the run.
pub fn run(board: &Board, reporter: &mut FilteredReporter<'_>) -> Option<Poly> {
    let segs: Vec<(Pt, Pt)> =
        board.edge_cut_items().flat_map(|g| g.segments().iter().map(|s| (s.st(), s.en()))).collect();
    if segs.is_empty() {
        return None;
    }

    let mut remaining = segs.clone();
    let mut chain = vec![remaining.remove(0)];
    loop {
        let tail = chain.last().unwrap().1;
        let Some(pos) = remaining.iter().position(|&(a, b)| pt_eq(a, tail) || pt_eq(b, tail)) else {
            break;
        };
        let (a, b) = remaining.remove(pos);
        chain.push(if pt_eq(a, tail) { (a, b) } else { (b, a) });
    }

    let head = chain.first().unwrap().0;
    let tail = chain.last().unwrap().1;
    if !remaining.is_empty() || !pt_eq(head, tail) {
        let mut break_pts = vec![tail];
        if !pt_eq(head, tail) {
            break_pts.push(head);
        }
        for &(a, b) in &remaining {
            break_pts.push(a);
            break_pts.push(b);
        }
        let pos = leftmost_topmost(&break_pts);
        reporter.report(Marker::new(
            MarkerKind::InvalidOutline,
            vec![ItemRef::BoardEdge],
            "board outline does not close into a simple polygon",
            pos,
        ));
        return None;
    }

    Some(Poly::new(chain.into_iter().map(|(a, _)| a).collect(), vec![]))
}

fn leftmost_topmost(pts: &[Pt]) -> Pt {
    *pts.iter()
        .min_by(|a, b| a.x.partial_cmp(&b.x).unwrap().then(b.y.partial_cmp(&a.y).unwrap()))
        .unwrap()
}
