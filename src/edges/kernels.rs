//! Fixed gradient kernel pairs.
//!
//! Kernels are borrowed row-major weight tables checked at compile time:
//! the side must be odd and the table must hold `side²` weights.

/// Square, odd-sized convolution weights.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Kernel {
    data: &'static [i32],
    side: usize,
}

impl Kernel {
    pub const fn new(data: &'static [i32], side: usize) -> Self {
        assert!(side % 2 == 1, "kernel side must be odd");
        assert!(side * side == data.len(), "kernel data must hold side² weights");
        Self { data, side }
    }

    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Half-width of the window, i.e. the padding it needs.
    #[inline]
    pub fn radius(&self) -> usize {
        self.side / 2
    }

    /// Weight at column `x`, row `y`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> i32 {
        self.data[y * self.side + x]
    }

    pub fn row(&self, y: usize) -> &[i32] {
        &self.data[y * self.side..(y + 1) * self.side]
    }
}

/// Horizontal (`x`) and vertical (`y`) derivative kernels of one operator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KernelPair {
    pub x: Kernel,
    pub y: Kernel,
}

pub const SOBEL_X: Kernel = Kernel::new(&[-1, 0, 1, -2, 0, 2, -1, 0, 1], 3);
pub const SOBEL_Y: Kernel = Kernel::new(&[-1, -2, -1, 0, 0, 0, 1, 2, 1], 3);

pub const PREWITT_X: Kernel = Kernel::new(&[-1, 0, 1, -1, 0, 1, -1, 0, 1], 3);
pub const PREWITT_Y: Kernel = Kernel::new(&[-1, -1, -1, 0, 0, 0, 1, 1, 1], 3);

pub const SOBEL: KernelPair = KernelPair {
    x: SOBEL_X,
    y: SOBEL_Y,
};

pub const PREWITT: KernelPair = KernelPair {
    x: PREWITT_X,
    y: PREWITT_Y,
};
