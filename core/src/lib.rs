//! Core operations for Veil.
//!
//! Everything here is synchronous, deterministic, and pure: the anchor
//! search that constructs the hidden space grid, the time-layer generator,
//! the compositor that produces the public shield and reality grids, the
//! trapdoor inverter, and the coherence verifier. The fixed lookup tables
//! (generator catalog, spiral index, Fibonacci mod-9 cycle) are process-wide
//! read-only constants.

mod coherence;
mod composite;
mod lattice;
mod tables;
mod timewave;
mod trapdoor;

pub use coherence::verify;
pub use composite::compose;
pub use lattice::{Singularity, solve};
pub use timewave::time_layers;
pub use trapdoor::invert;
