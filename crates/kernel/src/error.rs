use gardenworld_dice::DiceError;
use thiserror::Error;

/// Generation failed because the random source broke its contract.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerationError {
    #[error("{roll} roll failed")]
    Roll {
        /// Which step of the roll sequence hit the bad value.
        roll: &'static str,
        source: DiceError,
    },
}

impl GenerationError {
    /// Name of the roll that failed.
    pub fn roll(&self) -> &'static str {
        match self {
            Self::Roll { roll, .. } => *roll,
        }
    }
}

/// Tag a dice failure with the roll it happened in.
pub(crate) fn failed(roll: &'static str) -> impl FnOnce(DiceError) -> GenerationError {
    move |source| GenerationError::Roll { roll, source }
}
