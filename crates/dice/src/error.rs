use thiserror::Error;

/// A random source handed out a value outside its contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiceError {
    /// A roll was requested with no dice or dice without faces.
    #[error("cannot roll {count} dice with {sides} sides")]
    EmptyRoll { count: u32, sides: u32 },

    /// The summed total cannot come from `count` dice of `sides` faces.
    #[error("{count}d{sides} returned an impossible total of {total}")]
    TotalOutOfRange { count: u32, sides: u32, total: u32 },

    /// The uniform fraction was NaN or infinite.
    #[error("random fraction is not finite: {0}")]
    NonFiniteFraction(f64),

    /// The uniform fraction fell outside [0, 1).
    #[error("random fraction {0} is outside [0, 1)")]
    FractionOutOfRange(f64),
}
