//! Diagnostics returned alongside the edge map: input shape, the raw
//! magnitude maximum and per-stage timings. Serializable for tooling.

pub mod report;
pub mod timing;

pub use report::{EdgeReport, InputDescriptor};
pub use timing::{StageTiming, TimingBreakdown};
