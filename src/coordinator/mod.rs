pub(crate) mod component;
pub(crate) mod config;
#[allow(clippy::module_inception)]
pub(crate) mod coordinator;
pub(crate) mod output;
pub(crate) mod sim;
