pub(crate) mod band;
pub(crate) mod scheduler;
