//! Parameter types configuring the edge detector.
use crate::edges::kernels::{KernelPair, PREWITT, SOBEL};
use crate::edges::OutputPolicy;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gradient operator, i.e. which kernel pair the convolver uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    #[default]
    Sobel,
    Prewitt,
}

impl Operator {
    pub const ALL: [Operator; 2] = [Operator::Sobel, Operator::Prewitt];

    /// Kernel registry keyed by operator.
    pub fn kernels(&self) -> &'static KernelPair {
        match self {
            Operator::Sobel => &SOBEL,
            Operator::Prewitt => &PREWITT,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Operator::Sobel => "sobel",
            Operator::Prewitt => "prewitt",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operator {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sobel" => Ok(Operator::Sobel),
            "prewitt" => Ok(Operator::Prewitt),
            other => Err(format!(
                "unknown operator '{other}' (expected sobel|prewitt)"
            )),
        }
    }
}

/// Detector-wide parameters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeParams {
    /// Kernel pair used for the gradients.
    pub operator: Operator,
    /// Mapping of raw magnitudes to the output range.
    pub policy: OutputPolicy,
}

impl EdgeParams {
    pub fn new(operator: Operator, policy: OutputPolicy) -> Self {
        Self { operator, policy }
    }
}
