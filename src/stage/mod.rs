pub(crate) mod cues;
pub(crate) mod dsl;
pub(crate) mod element;
pub(crate) mod model;
pub(crate) mod presets;
