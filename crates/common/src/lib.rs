//! Shared value types used across the garden world crates.

pub mod types;

pub use types::WorldSize;

pub fn crate_info() -> &'static str {
    concat!("gardenworld-common v", env!("CARGO_PKG_VERSION"))
}
