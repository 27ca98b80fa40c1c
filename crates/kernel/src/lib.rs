//! World Kernel: generates garden worlds from chained dice rolls.
//!
//! # Invariants
//! - Every rolled field is set exactly once, in dependency order, when the
//!   world is generated. Nothing is re-rolled afterwards.
//! - Atmospheric pressure and habitability are never stored; they are pure
//!   functions of the snapshot and return identical results on every call.
//! - The random source is injected; generation never reaches for global state.

pub mod error;
pub mod habitability;
mod rolls;
pub mod world;

pub use error::GenerationError;
pub use habitability::HabitabilityBreakdown;
pub use world::GardenWorld;

pub fn crate_info() -> &'static str {
    concat!("gardenworld-kernel v", env!("CARGO_PKG_VERSION"))
}
