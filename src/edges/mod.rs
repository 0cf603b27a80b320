//! Edge processing building blocks: padding, gradient kernels, convolution
//! and output normalization.
//!
//! Data flows one way and every stage allocates its own output:
//!
//! raw grid → [`pad`] → [`gradients`] (gx, gy, magnitude, max) → [`normalize`]
//!
//! Design goals
//! - Keep the core channel-agnostic: it only sees single-channel intensities.
//! - Zero padding so every pixel is treated uniformly by the window loop.
//! - Pure functions, safe to call concurrently on different grids.

pub mod grad;
pub mod kernels;
pub mod normalize;
pub mod pad;

/// Per-pixel gradients with rounded magnitude and its maximum.
pub use grad::{convolve, gradients, magnitude, Grad};
pub use kernels::{Kernel, KernelPair, PREWITT, SOBEL};
pub use normalize::{normalize, OutputPolicy, DEFAULT_CEILING};
pub use pad::pad;
