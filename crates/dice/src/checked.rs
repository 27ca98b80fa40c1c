use crate::{DiceError, RandomSource};

/// Precondition-checking front end over a [`RandomSource`].
///
/// All rolls in the generator go through here. Values that break the
/// source's contract become a [`DiceError`] at the point of use.
#[derive(Debug)]
pub struct Dice<R> {
    source: R,
}

impl<R: RandomSource> Dice<R> {
    /// Faces on the standard die used by `nd`.
    pub const SIDES: u32 = 6;

    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Sum of `count` six-sided dice (the `nD` of the rules).
    pub fn nd(&mut self, count: u32) -> Result<u32, DiceError> {
        self.roll(count, Self::SIDES)
    }

    /// Sum of `count` dice with `sides` faces each.
    pub fn roll(&mut self, count: u32, sides: u32) -> Result<u32, DiceError> {
        if count == 0 || sides == 0 {
            return Err(DiceError::EmptyRoll { count, sides });
        }
        let total = self.source.dice_sum(count, sides);
        if total < count || total > count.saturating_mul(sides) {
            return Err(DiceError::TotalOutOfRange {
                count,
                sides,
                total,
            });
        }
        Ok(total)
    }

    /// Uniform fraction in `[0, 1)`.
    pub fn fraction(&mut self) -> Result<f64, DiceError> {
        let value = self.source.fraction();
        if !value.is_finite() {
            return Err(DiceError::NonFiniteFraction(value));
        }
        if !(0.0..1.0).contains(&value) {
            return Err(DiceError::FractionOutOfRange(value));
        }
        Ok(value)
    }

    /// Hand the underlying source back.
    pub fn into_inner(self) -> R {
        self.source
    }
}
