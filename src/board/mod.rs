// Read-only board data model: the host constructs a `Board` once per run
// and the engine never mutates it.

pub mod board;
pub mod footprint;
pub mod graphic;
pub mod ids;
pub mod layer;
pub mod net;
pub mod pad;
pub mod settings;
pub mod track;
pub mod zone;

pub use board::{Board, BoardContext};
pub use footprint::Footprint;
pub use graphic::{GraphicItem, GraphicShape, TextItem};
pub use ids::{FootprintId, GraphicId, PadId, TextId, TrackId, ZoneId};
pub use layer::{Layer, LayerSet, TechLayer};
pub use net::{NetClass, NetCode};
pub use pad::{Drill, DrillShape, Pad, PadShape};
pub use settings::DesignSettings;
pub use track::{Track, TrackKind, ViaKind};
pub use zone::{KeepoutFlags, Zone};
