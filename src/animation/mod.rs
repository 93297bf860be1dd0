pub(crate) mod ease;
pub(crate) mod executor;
pub(crate) mod phased;
pub(crate) mod tween;
