#![doc = include_str!("../README.md")]

// Public modules
pub mod config;
pub mod detector;
pub mod diagnostics;
pub mod edges;
pub mod error;
pub mod image;

// --- High-level re-exports -------------------------------------------------

// Main entry points.
pub use crate::detector::{detect_edges, run_edge_map, EdgeDetector, EdgeParams, Operator};
pub use crate::edges::OutputPolicy;
pub use crate::error::{Error, ShapeError};
pub use crate::image::Grid;

// Report returned by the detector.
pub use crate::diagnostics::EdgeReport;

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```
/// use edge_map::prelude::*;
///
/// let src = Grid::from_rows(&[
///     [0, 0, 100, 100, 100],
///     [0, 0, 100, 100, 100],
///     [0, 0, 100, 100, 100],
///     [0, 0, 100, 100, 100],
///     [0, 0, 100, 100, 100],
/// ])
/// .unwrap();
/// let edges = detect_edges(&src, Operator::Sobel, OutputPolicy::clamp()).unwrap();
/// assert_eq!(edges.get(2, 2), 255);
/// assert_eq!(edges.get(3, 2), 0);
/// ```
pub mod prelude {
    pub use crate::image::Grid;
    pub use crate::{detect_edges, EdgeDetector, EdgeParams, Operator, OutputPolicy};
}
