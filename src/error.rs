// src/error.rs

//! Error type shared by the table, encoder, compositor and rasterizer.

use num_bigint::BigUint;
use std::fmt;

/// Errors raised by the seal pipeline.
///
/// Every variant is a caller error or an output failure; the pipeline is pure
/// and deterministic, so nothing here is worth retrying.
#[derive(Debug)]
pub enum SealError {
    /// The requested grid level has no geometry table.
    UnsupportedLevel(u8),
    /// A join direction string was not one of `left`, `right`, `up`, `down`.
    InvalidDirection(String),
    /// A value string could not be parsed as a non-negative integer.
    InvalidValue(String),
    /// Cell size must be at least one pixel.
    InvalidCellSize(u32),
    /// The value needs more positions than the level's table provides.
    Overflow { level: u8, value: BigUint },
    /// Nothing to draw: no items were placed.
    EmptyComposition,
    /// PNG encoding failed.
    Png(png::EncodingError),
    /// Writing the image failed.
    Io(std::io::Error),
}

impl fmt::Display for SealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SealError::UnsupportedLevel(level) => {
                write!(f, "configuration error: unsupported grid level {}", level)
            }
            SealError::InvalidDirection(dir) => {
                write!(f, "configuration error: invalid join direction '{}'", dir)
            }
            SealError::InvalidValue(text) => {
                write!(f, "invalid value '{}': expected a non-negative integer", text)
            }
            SealError::InvalidCellSize(size) => {
                write!(f, "configuration error: cell size must be positive (got {})", size)
            }
            SealError::Overflow { level, value } => {
                write!(f, "encoding overflow: {} does not fit a level {} grid", value, level)
            }
            SealError::EmptyComposition => write!(f, "empty composition"),
            SealError::Png(e) => write!(f, "png encoding failed: {}", e),
            SealError::Io(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for SealError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SealError::Png(e) => Some(e),
            SealError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<png::EncodingError> for SealError {
    fn from(err: png::EncodingError) -> Self {
        SealError::Png(err)
    }
}

impl From<std::io::Error> for SealError {
    fn from(err: std::io::Error) -> Self {
        SealError::Io(err)
    }
}
