//! Dice: the random source every garden world roll draws from.
//!
//! # Invariants
//! - Generators never touch a global RNG; the source is always passed in.
//! - Every value a source hands out is range-checked by [`Dice`] before use.
//!   A source that breaks its contract produces a [`DiceError`], never a
//!   silently clamped value.

mod checked;
mod error;
mod scripted;
mod source;

pub use checked::Dice;
pub use error::DiceError;
pub use scripted::ScriptedSource;
pub use source::{RandomSource, SeededSource};

pub fn crate_info() -> &'static str {
    concat!("gardenworld-dice v", env!("CARGO_PKG_VERSION"))
}
