//! CLI command implementations

pub mod batch;
pub mod derive_seed;
pub mod inspect;
pub mod render;
pub mod verify;

mod reporting;

pub use reporting::resolve_seed;
