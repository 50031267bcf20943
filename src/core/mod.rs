//! Core compositing building blocks: the grid solver, layout arithmetic,
//! and the collage/border compositor. These are internal primitives
//! consumed by the high-level `api` module.
pub mod compose;
pub mod grid;
pub mod layout;
pub mod params;
