use edge_map::Grid;

/// Vertical step edge: columns `< split_x` hold `lo`, the rest `hi`.
pub fn step_edge(width: usize, height: usize, split_x: usize, lo: i32, hi: i32) -> Grid {
    let mut img = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, if x < split_x { lo } else { hi });
        }
    }
    img
}

/// Linear ramp increasing along the main diagonal: `step · (x + y)`.
pub fn diagonal_ramp(width: usize, height: usize, step: i32) -> Grid {
    let mut img = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, step * (x + y) as i32);
        }
    }
    img
}

/// Generates a simple high-contrast checkerboard image.
pub fn checkerboard(width: usize, height: usize, cell: usize) -> Grid {
    assert!(cell > 0, "cell size must be positive");

    let mut img = Grid::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let val = if (x / cell + y / cell) & 1 == 0 { 32 } else { 220 };
            img.set(x, y, val);
        }
    }
    img
}

/// Deterministic pseudo-random intensities in `[0, 255]`.
pub fn noise(width: usize, height: usize, seed: u64) -> Grid {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    let mut img = Grid::new(width, height);
    for v in img.data.iter_mut() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        *v = (state >> 56) as i32;
    }
    img
}

/// A mix of shapes used by the property-style tests.
pub fn corpus() -> Vec<Grid> {
    vec![
        Grid::new(1, 1),
        Grid::filled(2, 3, 77),
        step_edge(5, 5, 2, 0, 100),
        step_edge(9, 4, 5, 255, 0),
        diagonal_ramp(7, 6, 10),
        diagonal_ramp(3, 12, 40),
        checkerboard(32, 24, 4),
        noise(17, 11, 1),
        noise(40, 3, 7),
    ]
}
