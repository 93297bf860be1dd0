pub(crate) mod era;
pub(crate) mod sampler;
pub(crate) mod tier;
