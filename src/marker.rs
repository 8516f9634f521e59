use enumset::EnumSetType;

use crate::board::{FootprintId, GraphicId, PadId, TextId, TrackId, ZoneId};
use crate::geom::Pt;

// Stable identifiers for every rule violation the engine can emit, used in
// ignore lists and in marker messages. `RuleParseError` is a diagnostic, not
// a geometric/electrical violation: it is never subject to the ignore set
// (see `Reporter::report`).
#[derive(Debug, EnumSetType)]
pub enum MarkerKind {
    InvalidOutline,
    NetclassTrackWidth,
    NetclassViaSize,
    NetclassViaDrill,
    NetclassMicroviaDrill,
    NetclassClearance,
    TrackNearEdge,
    ViaNearEdge,
    PadNearEdge,
    PadNearPad,
    HoleNearPad,
    DrilledHolesTooClose,
    TooSmallPadDrill,
    TooSmallViaDrill,
    TooSmallMicroviaDrill,
    TrackNearTrack,
    TrackNearPad,
    ZonesIntersect,
    ZonesTooClose,
    ZoneHasEmptyNet,
    UnconnectedItems,
    DanglingTrack,
    DanglingVia,
    TrackNearCopper,
    ViaNearCopper,
    PadNearCopper,
    KeepoutVia,
    KeepoutTrack,
    KeepoutPad,
    KeepoutFootprint,
    OverlappingFootprints,
    MissingCourtyard,
    MalformedCourtyard,
    PthInCourtyard,
    NpthInCourtyard,
    DuplicateFootprint,
    MissingFootprint,
    ExtraFootprint,
    NetlistPinMismatch,
    DisabledLayerItem,
    UnresolvedVariable,
    RuleParseError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemRef {
    Pad(PadId),
    Track(TrackId),
    Footprint(FootprintId),
    Zone(ZoneId),
    Graphic(GraphicId),
    Text(TextId),
    BoardEdge,
}

#[derive(Debug, Clone)]
pub struct Marker {
    pub kind: MarkerKind,
    pub items: Vec<ItemRef>,
    pub message: String,
    pub position: Pt,
}

impl Marker {
    pub fn new(kind: MarkerKind, items: Vec<ItemRef>, message: impl Into<String>, position: Pt) -> Self {
        Self { kind, items, message: message.into(), position }
    }
}

// Sink that every tester reports through. Filters markers whose kind is in
// the per-kind ignore set so individual testers never need to consult it.
pub trait Reporter {
    fn push(&mut self, marker: Marker);
}

pub struct FilteredReporter<'a> {
    inner: &'a mut dyn Reporter,
    ignore: enumset::EnumSet<MarkerKind>,
    pub pushed: usize,
}

impl<'a> FilteredReporter<'a> {
    pub fn new(inner: &'a mut dyn Reporter, ignore: enumset::EnumSet<MarkerKind>) -> Self {
        Self { inner, ignore, pushed: 0 }
    }

    pub fn report(&mut self, marker: Marker) {
        if marker.kind != MarkerKind::RuleParseError && self.ignore.contains(marker.kind) {
            return;
        }
        self.pushed += 1;
        self.inner.push(marker);
    }
}

// Appends markers to an in-memory `Vec`, the simplest `Reporter` a caller
// without a real commit object can use (e.g. in tests).
#[derive(Debug, Default)]
pub struct VecReporter {
    pub markers: Vec<Marker>,
}

impl Reporter for VecReporter {
    fn push(&mut self, marker: Marker) {
        self.markers.push(marker);
    }
}

// Binary search along a track for the point minimizing squared distance to
// `other`, stopping once the search window is below `epsilon`. Used by
// testers to compute a marker's representative position for a track-vs-shape
// conflict.
pub fn locate(track_a: Pt, track_b: Pt, other: &crate::geom::Shape) -> Pt {
    const EPSILON: f64 = 0.127; // 5 mil in board units of 1/1000 mm.
    let mut lo = 0.0_f64;
    let mut hi = 1.0_f64;
    let at = |t: f64| track_a + (track_b - track_a) * t;
    while (hi - lo) * track_a.dist(track_b) > EPSILON {
        let m1 = lo + (hi - lo) / 3.0;
        let m2 = hi - (hi - lo) / 3.0;
        let d1 = other.dist_to(&crate::geom::Shape::Point(at(m1)));
        let d2 = other.dist_to(&crate::geom::Shape::Point(at(m2)));
        if d1 < d2 {
            hi = m2;
        } else {
            lo = m1;
        }
    }
    at((lo + hi) / 2.0)
}
