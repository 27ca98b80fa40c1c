//! Rendering: turns a generated world into output.
//!
//! # Invariants
//! - Renderers read the world; they never change it.
//! - Derived values (pressure, habitability) are computed at render time,
//!   not stored back into the world.

mod renderer;
mod report;

pub use renderer::{Renderer, TextRenderer};
pub use report::{JsonRenderer, WorldReport};

pub fn crate_info() -> &'static str {
    concat!("gardenworld-render v", env!("CARGO_PKG_VERSION"))
}
