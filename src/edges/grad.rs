//! Image gradients (Sobel/Prewitt) over a zero-padded grid.
//!
//! - Slides a kernel pair (`X` and `Y`) over the padded input.
//! - Outputs per-pixel `gx`, `gy`, `mag = round(sqrt(gx^2+gy^2))` at the
//!   original (unpadded) size, plus the largest magnitude seen.
//!
//! Output cells whose window would reach into the padding frame are not
//! visited and stay zero, so the one-pixel frame of a 3×3 operator's output
//! is always zero and the maximum only covers visited cells.
//!
//! Rounding is half away from zero (`f64::round`); magnitudes are never
//! negative so this is round-half-up.
//!
//! Sums are accumulated in i64 so any i32 input is safe; components and
//! magnitudes that do not fit an i32 cell saturate at the i32 bounds.
//!
//! Complexity: O(W·H·k²) per pass; memory: three i32 buffers.
use crate::edges::kernels::KernelPair;
use crate::error::ShapeError;
use crate::image::{Grid, ImageView, ImageViewMut};

/// Per-pixel gradient buffers aligned with the unpadded image.
#[derive(Clone, Debug)]
pub struct Grad {
    /// Horizontal derivative (convolution with kernel X)
    pub gx: Grid,
    /// Vertical derivative (convolution with kernel Y)
    pub gy: Grid,
    /// Rounded Euclidean magnitude per pixel
    pub mag: Grid,
    /// Largest value in `mag` (0 when nothing was visited)
    pub max_mag: i32,
}

/// Rounded gradient magnitude `round(sqrt(gx² + gy²))`, saturating at `i32::MAX`.
#[inline]
pub fn magnitude(gx: i64, gy: i64) -> i32 {
    let (gx, gy) = (gx as f64, gy as f64);
    (gx * gx + gy * gy).sqrt().round().min(i32::MAX as f64) as i32
}

#[inline]
fn saturate(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

/// Compute both gradient components and the magnitude of a padded grid.
///
/// `padded` is expected to carry a zero frame as wide as the kernel radius
/// (see `edges::pad`); the output has the pre-padding size.
pub fn gradients(padded: &Grid, kernels: &KernelPair) -> Result<Grad, ShapeError> {
    let side = kernels.x.side();
    if kernels.y.side() != side {
        return Err(ShapeError::KernelMismatch {
            x_side: side,
            y_side: kernels.y.side(),
        });
    }
    if padded.w < side || padded.h < side {
        return Err(ShapeError::GridTooSmall {
            width: padded.w,
            height: padded.h,
            minimum: side,
        });
    }

    let r = kernels.x.radius();
    let w = padded.w - 2 * r;
    let h = padded.h - 2 * r;
    let mut gx = Grid::new(w, h);
    let mut gy = Grid::new(w, h);
    let mut mag = Grid::new(w, h);
    let mut max_mag = 0;

    // Output (x, y) is centred on padded (x + r, y + r); its window spans
    // padded rows y..y+side and columns x..x+side.
    for y in r..h.saturating_sub(r) {
        let window: Vec<&[i32]> = (y..y + side).map(|yy| padded.row(yy)).collect();
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in r..w.saturating_sub(r) {
            let mut sum_x = 0i64;
            let mut sum_y = 0i64;
            for (ky, src) in window.iter().enumerate() {
                let samples = &src[x..x + side];
                let kx_row = kernels.x.row(ky);
                let ky_row = kernels.y.row(ky);
                for ((&s, &wx), &wy) in samples.iter().zip(kx_row).zip(ky_row) {
                    let s = s as i64;
                    sum_x += s * wx as i64;
                    sum_y += s * wy as i64;
                }
            }

            out_gx[x] = saturate(sum_x);
            out_gy[x] = saturate(sum_y);
            let m = magnitude(sum_x, sum_y);
            out_mag[x] = m;
            max_mag = max_mag.max(m);
        }
    }

    Ok(Grad {
        gx,
        gy,
        mag,
        max_mag,
    })
}

/// Magnitude grid and its maximum, discarding the components.
pub fn convolve(padded: &Grid, kernels: &KernelPair) -> Result<(Grid, i32), ShapeError> {
    let grad = gradients(padded, kernels)?;
    Ok((grad.mag, grad.max_mag))
}
