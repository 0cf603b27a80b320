//! I/O helpers at the boundary of the edge pipeline.
//!
//! - `decode_packed_rgb`: read a PNG/JPEG/etc. into a grid of packed `0xRRGGBB` cells.
//! - `to_grayscale`: luma reduction of a packed grid to single-channel intensities.
//! - `encode`: write a grayscale or packed grid to disk (format from the extension).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Channel packing lives here only; the convolution core never sees it.
use super::{Grid, ImageView};
use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const LUMA_R: f64 = 0.299;
const LUMA_G: f64 = 0.587;
const LUMA_B: f64 = 0.114;

/// How the integer cells of a grid decode to a visual pixel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PixelFormat {
    /// One intensity in `[0, 255]` per cell.
    #[default]
    Grayscale,
    /// Bits 16–23 red, 8–15 green, 0–7 blue.
    PackedRgb,
}

/// The input image could not be read or decoded.
#[derive(Debug)]
pub struct DecodeError {
    pub path: PathBuf,
    pub source: image::ImageError,
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Failed to open {}: {}", self.path.display(), self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

/// The output image could not be written.
#[derive(Debug)]
pub enum EncodeError {
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    Write {
        path: PathBuf,
        source: image::ImageError,
    },
}

impl std::fmt::Display for EncodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EncodeError::CreateDir { path, source } => {
                write!(f, "Failed to create {}: {source}", path.display())
            }
            EncodeError::Write { path, source } => {
                write!(f, "Failed to save {}: {source}", path.display())
            }
        }
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EncodeError::CreateDir { source, .. } => Some(source),
            EncodeError::Write { source, .. } => Some(source),
        }
    }
}

#[inline]
pub fn pack_rgb(r: u8, g: u8, b: u8) -> i32 {
    ((r as i32) << 16) | ((g as i32) << 8) | b as i32
}

/// Expand a single intensity to a gray packed pixel `(v<<16)|(v<<8)|v`.
#[inline]
pub fn pack_gray(v: u8) -> i32 {
    pack_rgb(v, v, v)
}

#[inline]
pub fn unpack_rgb(pixel: i32) -> [u8; 3] {
    [
        ((pixel >> 16) & 0xff) as u8,
        ((pixel >> 8) & 0xff) as u8,
        (pixel & 0xff) as u8,
    ]
}

/// Load an image from disk as a grid of packed RGB cells (alpha dropped).
pub fn decode_packed_rgb(path: &Path) -> Result<Grid, DecodeError> {
    let img = image::open(path)
        .map_err(|source| DecodeError {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let mut grid = Grid::new(img.width() as usize, img.height() as usize);
    for (x, y, px) in img.enumerate_pixels() {
        let [r, g, b] = px.0;
        grid.set(x as usize, y as usize, pack_rgb(r, g, b));
    }
    Ok(grid)
}

/// Reduce a packed RGB grid to intensities: `round(0.299·R + 0.587·G + 0.114·B)`.
pub fn to_grayscale(packed: &Grid) -> Grid {
    packed.map(|pixel| {
        let [r, g, b] = unpack_rgb(pixel);
        (LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64).round() as i32
    })
}

/// Decode `path` and reduce it to a single-channel intensity grid.
pub fn load_grayscale(path: &Path) -> Result<Grid, DecodeError> {
    decode_packed_rgb(path).map(|packed| to_grayscale(&packed))
}

/// Write `grid` to `path`, creating parent directories.
///
/// Grayscale cells are clamped into `[0, 255]` and expanded to gray packed
/// pixels; packed cells are written channel by channel.
pub fn encode(grid: &Grid, format: PixelFormat, path: &Path) -> Result<(), EncodeError> {
    ensure_parent_dir(path).map_err(|(dir, source)| EncodeError::CreateDir { path: dir, source })?;
    let mut out = RgbImage::new(grid.w as u32, grid.h as u32);
    for (y, row) in grid.rows().enumerate() {
        for (x, &v) in row.iter().enumerate() {
            let packed = match format {
                PixelFormat::Grayscale => pack_gray(v.clamp(0, 255) as u8),
                PixelFormat::PackedRgb => v,
            };
            out.put_pixel(x as u32, y as u32, Rgb(unpack_rgb(packed)));
        }
    }
    out.save(path).map_err(|source| EncodeError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)
        .map_err(|(dir, e)| format!("Failed to create {}: {e}", dir.display()))?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), (PathBuf, std::io::Error)> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| (parent.to_path_buf(), e))?;
        }
    }
    Ok(())
}
