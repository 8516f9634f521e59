use crate::board::layer::Layer;
use crate::geom::tess::{arc_to_polyline, bezier_to_polyline};
use crate::geom::{seg, Poly, Pt, Rt, Segment};

pub use crate::board::ids::{FootprintId, GraphicId, TextId};

#[derive(Debug, Clone)]
pub enum GraphicShape {
    Segment(Pt, Pt),
    Arc { center: Pt, start: Pt, angle_deg: f64 },
    Circle { center: Pt, radius: f64 },
    Bezier([Pt; 4]),
    Polygon(Poly),
}

#[derive(Debug, Clone)]
pub struct GraphicItem {
    pub shape: GraphicShape,
    pub width: f64,
    pub layer: Layer,
    pub footprint: Option<FootprintId>,
    // Tessellated once at ingestion time so every tester sees a plain
    // segment chain regardless of the original shape kind.
    segments: Vec<Segment>,
}

impl GraphicItem {
    pub fn new(shape: GraphicShape, width: f64, layer: Layer, footprint: Option<FootprintId>) -> Self {
        let segments = tessellate(&shape);
        Self { shape, width, layer, footprint, segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn bounds(&self) -> Rt {
        crate::geom::bounds::pt_cloud_bounds(
            &self.segments.iter().flat_map(|s| [s.st(), s.en()]).collect::<Vec<_>>(),
        )
    }
}

fn tessellate(shape: &GraphicShape) -> Vec<Segment> {
    match shape {
        GraphicShape::Segment(a, b) => vec![seg(*a, *b)],
        GraphicShape::Arc { center, start, angle_deg } => {
            polyline_to_segs(&arc_to_polyline(*center, *start, *angle_deg))
        }
        GraphicShape::Circle { center, radius } => {
            let start = Pt::new(center.x + radius, center.y);
            polyline_to_segs(&arc_to_polyline(*center, start, 360.0))
        }
        GraphicShape::Bezier(ctrl) => polyline_to_segs(&bezier_to_polyline(*ctrl)),
        GraphicShape::Polygon(p) => p.segs(),
    }
}

fn polyline_to_segs(pts: &[Pt]) -> Vec<Segment> {
    pts.windows(2).map(|w| seg(w[0], w[1])).collect()
}

#[derive(Debug, Clone)]
pub struct TextItem {
    pub bounds: Rt,
    pub pen_width: f64,
    pub text: String,
    pub visible: bool,
    pub layer: Layer,
    pub footprint: Option<FootprintId>,
    strokes: Vec<Segment>,
}

impl TextItem {
    pub fn new(
        bounds: Rt,
        pen_width: f64,
        text: String,
        visible: bool,
        layer: Layer,
        footprint: Option<FootprintId>,
        origin: Pt,
        char_width: f64,
        char_height: f64,
    ) -> Self {
        let strokes = crate::geom::tess::text_to_segments(origin, &text, char_width, char_height)
            .into_iter()
            .flat_map(|poly| polyline_to_segs(&poly))
            .collect();
        Self { bounds, pen_width, text, visible, layer, footprint, strokes }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.strokes
    }

    // An unevaluated variable reference (`${...}`) left in the text's
    // rendered string.
    pub fn has_unresolved_variable(&self) -> bool {
        self.text.contains("${") && self.text.contains('}')
    }
}
