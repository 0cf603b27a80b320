use super::TimingBreakdown;
use crate::detector::Operator;
use crate::edges::OutputPolicy;
use crate::image::Grid;
use serde::Serialize;

/// Result produced by [`EdgeDetector::process_with_diagnostics`](crate::EdgeDetector).
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeReport {
    /// Edge map, same size as the input.
    #[serde(skip)]
    pub edges: Grid,
    pub input: InputDescriptor,
    pub operator: Operator,
    pub policy: OutputPolicy,
    /// Largest raw magnitude before the output policy was applied.
    pub max_magnitude: i32,
    /// Number of cells of `edges` above zero.
    pub edge_pixels: usize,
    pub timings: TimingBreakdown,
}

#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InputDescriptor {
    pub width: usize,
    pub height: usize,
}
