//! Owned single-channel i32 grid in row-major layout (stride == width).
//!
//! Every stage of the edge pipeline allocates one of these for its output.
//! Cells hold intensities, signed gradient components, raw magnitudes, or
//! packed `0xRRGGBB` pixels at the I/O boundary.
use crate::error::ShapeError;
use crate::image::traits::{ImageView, ImageViewMut};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    /// Grid width in cells
    pub w: usize,
    /// Grid height in cells
    pub h: usize,
    /// Number of cells between consecutive rows (equals `w`)
    pub stride: usize,
    /// Backing storage in row-major order
    pub data: Vec<i32>,
}

impl Grid {
    /// Construct a zero-initialized grid of size `w × h`.
    pub fn new(w: usize, h: usize) -> Self {
        Self::filled(w, h, 0)
    }

    /// Construct a grid of size `w × h` with every cell set to `value`.
    pub fn filled(w: usize, h: usize, value: i32) -> Self {
        Self {
            w,
            h,
            stride: w,
            data: vec![value; w * h],
        }
    }

    /// Build a grid from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[i32]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(w * h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != w {
                return Err(ShapeError::Ragged {
                    row: y,
                    expected: w,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            w,
            h,
            stride: w,
            data,
        })
    }

    #[inline]
    /// Convert (x, y) to a linear index into `data`.
    pub fn idx(&self, x: usize, y: usize) -> usize {
        y * self.stride + x
    }
    #[inline]
    /// Get the cell value at (x, y).
    pub fn get(&self, x: usize, y: usize) -> i32 {
        self.data[self.idx(x, y)]
    }
    #[inline]
    /// Set the cell value at (x, y).
    pub fn set(&mut self, x: usize, y: usize, v: i32) {
        let i = self.idx(x, y);
        self.data[i] = v;
    }

    /// `(width, height)` pair, handy for shape comparisons.
    pub fn dims(&self) -> (usize, usize) {
        (self.w, self.h)
    }

    /// Apply `f` to every cell, producing a new grid of the same shape.
    pub fn map(&self, f: impl Fn(i32) -> i32) -> Grid {
        Grid {
            w: self.w,
            h: self.h,
            stride: self.stride,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }
}

impl ImageView for Grid {
    type Pixel = i32;

    #[inline]
    fn width(&self) -> usize {
        self.w
    }
    #[inline]
    fn height(&self) -> usize {
        self.h
    }
    #[inline]
    fn row(&self, y: usize) -> &[i32] {
        let start = y * self.stride;
        &self.data[start..start + self.w]
    }
}

impl ImageViewMut for Grid {
    #[inline]
    fn row_mut(&mut self, y: usize) -> &mut [i32] {
        let start = y * self.stride;
        let end = start + self.w;
        &mut self.data[start..end]
    }
}

/// Text dump: one line per row, cells separated by a single space.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (x, v) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{v}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_major_order() {
        let g = Grid::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(g.dims(), (3, 2));
        assert_eq!(g.get(2, 0), 3);
        assert_eq!(g.get(0, 1), 4);
        assert_eq!(g.row(1), &[4, 5, 6]);
    }

    #[test]
    fn from_rows_rejects_ragged_input() {
        let rows: Vec<Vec<i32>> = vec![vec![1, 2], vec![3]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            ShapeError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn display_dumps_rows() {
        let g = Grid::from_rows(&[[0, 10], [255, 7]]).unwrap();
        assert_eq!(g.to_string(), "0 10\n255 7\n");
    }
}
