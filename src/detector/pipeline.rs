use super::params::{EdgeParams, Operator};
use crate::diagnostics::{EdgeReport, InputDescriptor, TimingBreakdown};
use crate::edges::{gradients, normalize, pad, OutputPolicy};
use crate::error::{Error, ShapeError};
use crate::image::io::{encode, load_grayscale, PixelFormat};
use crate::image::Grid;
use log::debug;
use std::path::Path;

/// Edge detector: pad → convolve → normalize for one operator and policy.
#[derive(Clone, Debug, Default)]
pub struct EdgeDetector {
    params: EdgeParams,
}

impl EdgeDetector {
    /// Create a detector with the supplied parameters.
    pub fn new(params: EdgeParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &EdgeParams {
        &self.params
    }

    /// Run the detector on a single-channel grid, returning the edge map.
    pub fn process(&self, source: &Grid) -> Result<Grid, ShapeError> {
        self.process_with_diagnostics(source).map(|report| report.edges)
    }

    /// Run the detector and return the edge map with a report.
    pub fn process_with_diagnostics(&self, source: &Grid) -> Result<EdgeReport, ShapeError> {
        let EdgeParams { operator, policy } = self.params;
        let kernels = operator.kernels();
        debug!(
            "EdgeDetector::process start w={} h={} operator={} policy={:?}",
            source.w, source.h, operator, policy
        );

        let mut timings = TimingBreakdown::default();
        let padded = timings.measure("pad", || pad(source, kernels.x.radius()));
        let grad = timings.measure("convolve", || gradients(&padded, kernels))?;
        debug!(
            "EdgeDetector::process convolved padded={}x{} max_mag={}",
            padded.w, padded.h, grad.max_mag
        );
        let edges = timings.measure("normalize", || normalize(&grad.mag, grad.max_mag, policy));
        let edge_pixels = edges.data.iter().filter(|&&v| v > 0).count();
        debug!(
            "EdgeDetector::process done edge_pixels={} total_ms={:.3}",
            edge_pixels, timings.total_ms
        );

        Ok(EdgeReport {
            edges,
            input: InputDescriptor {
                width: source.w,
                height: source.h,
            },
            operator,
            policy,
            max_magnitude: grad.max_mag,
            edge_pixels,
            timings,
        })
    }
}

/// Edge map of `source` with the given operator and output policy.
///
/// Pure: identical input always yields an identical grid of the same size.
pub fn detect_edges(
    source: &Grid,
    operator: Operator,
    policy: OutputPolicy,
) -> Result<Grid, ShapeError> {
    EdgeDetector::new(EdgeParams::new(operator, policy)).process(source)
}

/// Decode `input`, reduce it to grayscale, detect edges and write the result
/// to `output` as a grayscale image.
///
/// A decode failure aborts before any grid processing happens.
pub fn run_edge_map(input: &Path, output: &Path, params: EdgeParams) -> Result<EdgeReport, Error> {
    let mut load_timings = TimingBreakdown::default();
    let gray = load_timings.measure("decode", || load_grayscale(input))?;
    debug!(
        "run_edge_map decoded {} ({}x{})",
        input.display(),
        gray.w,
        gray.h
    );

    let mut report = EdgeDetector::new(params).process_with_diagnostics(&gray)?;
    let mut timings = load_timings;
    timings.stages.append(&mut report.timings.stages);
    timings.total_ms += report.timings.total_ms;
    timings.measure("encode", || {
        encode(&report.edges, PixelFormat::Grayscale, output)
    })?;
    report.timings = timings;
    Ok(report)
}
