//! Zero border padding.
use crate::image::{Grid, ImageView, ImageViewMut};

/// Surround `grid` with a `border`-wide frame of zeros.
///
/// Output is `(w + 2·border) × (h + 2·border)`; interior cells are copied
/// unchanged. An empty input yields a grid made entirely of border.
pub fn pad(grid: &Grid, border: usize) -> Grid {
    let mut out = Grid::new(grid.w + 2 * border, grid.h + 2 * border);
    for (y, src) in grid.rows().enumerate() {
        out.row_mut(y + border)[border..border + grid.w].copy_from_slice(src);
    }
    out
}
