//! Error types.

use core::fmt;

use skrifa::{outline::DrawError, raw::ReadError};

/// Errors that may occur while sketching a glyph.
#[derive(Clone, Debug)]
pub enum Error {
    /// A quadratic curve was split at a parameter outside of (0, 1).
    InvalidSubdivisionParameter(f32),
    /// The randomization parameters were rejected.
    InvalidConfiguration(ConfigError),
    /// The font does not map the requested character to a glyph.
    MissingGlyph(char),
    /// The font declares zero units per em.
    ZeroUnitsPerEm,
    /// Error occurred when drawing the glyph outline.
    Draw(DrawError),
    /// Error occurred when reading font data.
    Read(ReadError),
}

/// Reasons a set of randomization parameters is invalid.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A probability was not in [0, 1].
    ProbabilityOutOfRange { name: &'static str, value: f32 },
    /// A split position was not in (0, 1).
    PositionOutOfRange { name: &'static str, value: f32 },
    /// The minimum split position is greater than the maximum.
    InvertedPositionRange { min: f32, max: f32 },
}

impl From<ConfigError> for Error {
    fn from(value: ConfigError) -> Self {
        Self::InvalidConfiguration(value)
    }
}

impl From<DrawError> for Error {
    fn from(e: DrawError) -> Self {
        Self::Draw(e)
    }
}

impl From<ReadError> for Error {
    fn from(e: ReadError) -> Self {
        Self::Read(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidSubdivisionParameter(t) => write!(
                f,
                "quadratic split position must be in the open range (0, 1), got {t}"
            ),
            Self::InvalidConfiguration(e) => write!(f, "invalid configuration: {e}"),
            Self::MissingGlyph(ch) => {
                write!(f, "no glyph for character {ch:?} (U+{:04X})", *ch as u32)
            }
            Self::ZeroUnitsPerEm => write!(f, "font has zero units per em"),
            Self::Draw(e) => write!(f, "{e}"),
            Self::Read(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ProbabilityOutOfRange { name, value } => {
                write!(f, "{name} must be in [0, 1], got {value}")
            }
            Self::PositionOutOfRange { name, value } => {
                write!(f, "{name} must be in (0, 1), got {value}")
            }
            Self::InvertedPositionRange { min, max } => write!(
                f,
                "minimum split position {min} is greater than maximum {max}"
            ),
        }
    }
}

impl std::error::Error for Error {}

impl std::error::Error for ConfigError {}
