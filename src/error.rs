//! Error types shared across the crate.
use crate::image::io::{DecodeError, EncodeError};

/// Malformed or undersized grid/kernel input. Fatal to the call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// The two kernels of a pair do not share a side length.
    KernelMismatch { x_side: usize, y_side: usize },
    /// The (padded) grid cannot hold a single convolution window.
    GridTooSmall {
        width: usize,
        height: usize,
        minimum: usize,
    },
    /// A nested-row input had a row of the wrong length.
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl std::fmt::Display for ShapeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShapeError::KernelMismatch { x_side, y_side } => write!(
                f,
                "kernel pair shape mismatch ({x_side}×{x_side} vs {y_side}×{y_side})"
            ),
            ShapeError::GridTooSmall {
                width,
                height,
                minimum,
            } => write!(
                f,
                "grid {width}×{height} too small for a {minimum}×{minimum} window"
            ),
            ShapeError::Ragged {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
        }
    }
}

impl std::error::Error for ShapeError {}

/// Any failure of the decode → detect → encode flow.
#[derive(Debug)]
pub enum Error {
    Shape(ShapeError),
    Decode(DecodeError),
    Encode(EncodeError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Shape(e) => write!(f, "shape error: {e}"),
            Error::Decode(e) => e.fmt(f),
            Error::Encode(e) => e.fmt(f),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Shape(e) => Some(e),
            Error::Decode(e) => Some(e),
            Error::Encode(e) => Some(e),
        }
    }
}

impl From<ShapeError> for Error {
    fn from(e: ShapeError) -> Self {
        Error::Shape(e)
    }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self {
        Error::Encode(e)
    }
}
