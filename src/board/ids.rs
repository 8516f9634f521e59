// Stable-index references into a `Board`'s arenas. Pads refer up to their
// owning footprint and footprints list their pads; indices (not owning
// pointers) break the cycle.
macro_rules! id_type {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub usize);
    };
}

id_type!(PadId);
id_type!(FootprintId);
id_type!(TrackId);
id_type!(ZoneId);
id_type!(GraphicId);
id_type!(TextId);
