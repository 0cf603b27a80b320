use crate::detector::EdgeParams;
use crate::image::io::PixelFormat;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct EdgeToolConfig {
    #[serde(rename = "input")]
    pub input: PathBuf,
    #[serde(default)]
    pub edge: EdgeParams,
    pub output: EdgeOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct EdgeOutputConfig {
    pub image: PathBuf,
    /// How edge-map cells are written out; grayscale unless told otherwise.
    #[serde(default)]
    pub format: PixelFormat,
    #[serde(rename = "summary_json", default)]
    pub summary_json: Option<PathBuf>,
    /// Dump the edge map to stdout as text.
    #[serde(rename = "print_grid", default)]
    pub print_grid: bool,
}

pub fn load_config(path: &Path) -> Result<EdgeToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(json: &str) -> Result<EdgeToolConfig, serde_json::Error> {
    serde_json::from_str(json)
}
