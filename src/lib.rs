//! Biggest-square map solver.
//!
//! A map names its own alphabet: the header line declares a row count and
//! the three marker characters, the body is a rectangle of empty and
//! obstacle cells. The solver validates the map as it streams in, finds the
//! largest square of empty cells, and prints the map back with that square
//! drawn in the full marker.

pub mod error;
pub mod grid;
pub mod loader;
pub mod render;
pub mod scan;
pub mod session;
pub mod solve;

pub use error::MapError;
pub use grid::{Grid, Markers};
pub use loader::Loader;
pub use solve::Placement;
