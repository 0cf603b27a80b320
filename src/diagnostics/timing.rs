use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock duration of one pipeline stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

/// Per-stage timings of one detector run, in execution order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    /// Run `stage`, record its duration under `label` and pass its result through.
    pub fn measure<T>(&mut self, label: &str, stage: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = stage();
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.stages.push(StageTiming {
            label: label.to_string(),
            elapsed_ms,
        });
        self.total_ms += elapsed_ms;
        out
    }

    pub fn stage_ms(&self, label: &str) -> Option<f64> {
        self.stages
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.elapsed_ms)
    }
}
