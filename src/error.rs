//! Error type shared by the detector, its configuration and the one-shot
//! helper.

use core::fmt;

/// Conditions under which a configuration or a purity score is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoertzelError {
    /// The sampling frequency was zero, negative or non-finite.
    InvalidSampleRate,
    /// The target frequency was NaN or infinite.
    InvalidTargetFrequency,
    /// A purity score was requested for a block with no samples.
    EmptyBlock,
    /// The block carried no energy after removing the center offset.
    SilentBlock,
    /// The one-shot helper was given an empty slice.
    EmptyInput,
}

impl fmt::Display for GoertzelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoertzelError::InvalidSampleRate => {
                write!(f, "sampling frequency must be finite and positive")
            }
            GoertzelError::InvalidTargetFrequency => {
                write!(f, "target frequency must be finite")
            }
            GoertzelError::EmptyBlock => write!(f, "block contains no samples"),
            GoertzelError::SilentBlock => {
                write!(f, "block has zero energy around the center offset")
            }
            GoertzelError::EmptyInput => write!(f, "input slice is empty"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GoertzelError {}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            GoertzelError::InvalidSampleRate.to_string(),
            "sampling frequency must be finite and positive"
        );
        assert_eq!(
            GoertzelError::SilentBlock.to_string(),
            "block has zero energy around the center offset"
        );
    }
}
