//! Edge detector composing padding, gradient convolution and normalization.
//!
//! Overview
//! - Pads the single-channel input by the kernel radius (one pixel for the
//!   3×3 operators) with zeros.
//! - Convolves the padded grid with the operator's kernel pair, producing the
//!   rounded magnitude grid and its maximum.
//! - Maps the magnitudes into `[0, ceiling]` by clamping or by rescaling with
//!   the observed maximum.
//!
//! Modules
//! - [`params`] – operator selection and detector parameters.
//! - `pipeline` – [`EdgeDetector`], [`detect_edges`] and the file-to-file
//!   [`run_edge_map`] flow used by the binaries.
//!
//! The detector holds no per-call state; one instance may be shared across
//! threads and invoked on independent images.

pub mod params;
mod pipeline;

pub use params::{EdgeParams, Operator};
pub use pipeline::{detect_edges, run_edge_map, EdgeDetector};
