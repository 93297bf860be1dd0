pub(crate) mod backdrop;
pub(crate) mod bubble;
pub(crate) mod dive;
pub(crate) mod mascot;
