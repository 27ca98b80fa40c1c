use std::collections::VecDeque;

use crate::RandomSource;

/// Source that replays fixed dice totals and fractions in order.
///
/// Used to pin every roll of a generation. Totals are handed out regardless
/// of the requested dice count, so a script can feed out-of-range values on
/// purpose. An exhausted queue yields a total of `0` or a `NaN` fraction,
/// both of which [`crate::Dice`] rejects.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    totals: VecDeque<u32>,
    fractions: VecDeque<f64>,
    requests: Vec<(u32, u32)>,
}

impl ScriptedSource {
    pub fn new(
        totals: impl IntoIterator<Item = u32>,
        fractions: impl IntoIterator<Item = f64>,
    ) -> Self {
        Self {
            totals: totals.into_iter().collect(),
            fractions: fractions.into_iter().collect(),
            requests: Vec::new(),
        }
    }

    /// Every `(count, sides)` pair asked of this source so far.
    pub fn requests(&self) -> &[(u32, u32)] {
        &self.requests
    }

    /// True once both queues are drained.
    pub fn is_exhausted(&self) -> bool {
        self.totals.is_empty() && self.fractions.is_empty()
    }
}

impl RandomSource for ScriptedSource {
    fn dice_sum(&mut self, count: u32, sides: u32) -> u32 {
        self.requests.push((count, sides));
        self.totals.pop_front().unwrap_or(0)
    }

    fn fraction(&mut self) -> f64 {
        self.fractions.pop_front().unwrap_or(f64::NAN)
    }
}
