use serde::{Deserialize, Serialize};
use std::fmt;

/// Size class of a garden world.
///
/// Fixed when the world is generated. A large world gets extra surface
/// liquid, a different gravity curve and five times the surface pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorldSize {
    Standard,
    Large,
}

impl WorldSize {
    /// 3d6 totals at or above this value produce a large world.
    pub const LARGE_THRESHOLD: u32 = 17;

    /// Classify a 3d6 size roll.
    pub fn from_roll(total: u32) -> Self {
        if total < Self::LARGE_THRESHOLD {
            Self::Standard
        } else {
            Self::Large
        }
    }

    pub fn is_large(self) -> bool {
        self == Self::Large
    }

    /// Capitalized label used in printed reports.
    pub fn label(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Large => "Large",
        }
    }
}

impl fmt::Display for WorldSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
