//! The individual rolls of the garden world sequence.
//!
//! Each function consumes dice in a fixed order: totals before fractions.
//! Integer ranges over dice totals are inclusive at both ends; ranges over
//! real values are half-open with the lower bound inclusive.

use gardenworld_common::WorldSize;
use gardenworld_dice::{Dice, DiceError, RandomSource};

/// Tenths of a uniform fraction: the small noise term most rolls add.
fn noise<R: RandomSource>(dice: &mut Dice<R>) -> Result<f64, DiceError> {
    Ok(dice.fraction()? / 10.0)
}

pub(crate) fn size<R: RandomSource>(dice: &mut Dice<R>) -> Result<WorldSize, DiceError> {
    Ok(WorldSize::from_roll(dice.nd(3)?))
}

pub(crate) fn atmospheric_mass<R: RandomSource>(dice: &mut Dice<R>) -> Result<f64, DiceError> {
    let total = f64::from(dice.nd(3)?);
    Ok(total / 10.0 - 0.05 + noise(dice)?)
}

pub(crate) fn marginal_atmosphere<R: RandomSource>(dice: &mut Dice<R>) -> Result<bool, DiceError> {
    Ok(dice.nd(3)? > 11)
}

/// Liquid coverage, capped at full coverage.
pub(crate) fn hydrographics<R: RandomSource>(
    dice: &mut Dice<R>,
    size: WorldSize,
) -> Result<f64, DiceError> {
    let total = f64::from(dice.nd(1)?);
    let mut coverage = total * 0.1 + 0.35 + noise(dice)?;
    if size.is_large() {
        coverage += 0.2;
    }
    Ok(coverage.min(1.0))
}

pub(crate) fn surface_temp<R: RandomSource>(dice: &mut Dice<R>) -> Result<f64, DiceError> {
    let total = f64::from(dice.nd(3)?);
    Ok((total - 3.5 + dice.fraction()?) * 6.0 + 250.0)
}

pub(crate) fn absorption<R: RandomSource>(
    dice: &mut Dice<R>,
    hydrographics: f64,
) -> Result<f64, DiceError> {
    let base = match hydrographics {
        h if (0.0..0.2).contains(&h) => 0.9,
        h if (0.2..0.5).contains(&h) => 0.87,
        h if (0.5..0.9).contains(&h) => 0.83,
        _ => 0.79,
    };
    Ok(base + noise(dice)?)
}

pub(crate) fn blackbody<R: RandomSource>(dice: &mut Dice<R>) -> Result<f64, DiceError> {
    Ok(0.11 + noise(dice)?)
}

pub(crate) fn density<R: RandomSource>(dice: &mut Dice<R>) -> Result<f64, DiceError> {
    let base = match dice.nd(3)? {
        3..=6 => 0.75,
        7..=10 => 0.85,
        11..=14 => 0.95,
        15..=17 => 1.05,
        _ => 1.15,
    };
    Ok(base + noise(dice)?)
}

pub(crate) fn gravity<R: RandomSource>(
    dice: &mut Dice<R>,
    size: WorldSize,
    blackbody_temp: f64,
    density: f64,
) -> Result<f64, DiceError> {
    let roll = f64::from(dice.nd(2)?) - 2.5 + dice.fraction()?;
    let factor = (blackbody_temp * density).sqrt();
    let gravity = match size {
        WorldSize::Standard => (0.03 + roll * 0.0035) * factor,
        WorldSize::Large => (0.065 + roll * 0.0026) * factor,
    };
    Ok(gravity)
}

pub(crate) fn resources<R: RandomSource>(dice: &mut Dice<R>) -> Result<i32, DiceError> {
    let score = match dice.nd(3)? {
        3..=4 => -2,
        5..=7 => -1,
        8..=13 => 0,
        14..=16 => 1,
        _ => 2,
    };
    Ok(score)
}
