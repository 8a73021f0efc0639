//! Dimension and domain constants.
//!
//! The pipeline is fixed-shape: every size below is part of the contract,
//! and the derived sizes must divide exactly (no padding, no remainder).

// =============================================================================
// Input
// =============================================================================

/// Input image side length (square, single channel).
pub const IMAGE_SIZE: usize = 28;

/// Total pixels in an input image.
pub const IMAGE_PIXELS: usize = IMAGE_SIZE * IMAGE_SIZE; // 784

// =============================================================================
// Convolution
// =============================================================================

/// Convolution kernel side length.
pub const KERNEL_SIZE: usize = 5;

/// Weights per kernel.
pub const KERNEL_AREA: usize = KERNEL_SIZE * KERNEL_SIZE; // 25

/// Number of kernels (output channels).
pub const NUM_KERNELS: usize = 6;

/// Convolution output side length: valid padding, stride 1.
///
/// 28 − 5 + 1 = 24; every window stays inside the image.
pub const CONV_OUTPUT_SIZE: usize = IMAGE_SIZE - KERNEL_SIZE + 1; // 24

/// Entries in one activation map.
pub const CONV_OUTPUT_AREA: usize = CONV_OUTPUT_SIZE * CONV_OUTPUT_SIZE; // 576

// =============================================================================
// Max-pooling
// =============================================================================

/// Pooling window side length.
pub const POOL_WINDOW_SIZE: usize = 2;

/// Pooling stride. Equal to the window size, so windows tile the
/// activation map with no overlap and no remainder.
pub const POOL_STRIDE: usize = 2;

/// Pooled map side length: 24 / 2 = 12.
pub const POOL_OUTPUT_SIZE: usize = CONV_OUTPUT_SIZE / POOL_STRIDE; // 12

/// Entries in one pooled plane.
pub const POOL_OUTPUT_AREA: usize = POOL_OUTPUT_SIZE * POOL_OUTPUT_SIZE; // 144

/// Total entries in the final output tensor (6 × 12 × 12).
pub const OUTPUT_LEN: usize = NUM_KERNELS * POOL_OUTPUT_AREA; // 864

// =============================================================================
// Arithmetic domain
// =============================================================================

/// Upper bound on |pre-activation sum| before the bias is added.
///
/// 25 terms of pixel (≤ 255) × weight (|w| ≤ 128) accumulate to at most
/// 25 × 255 × 128 = 816,000, far inside `i32`. The `i32` accumulator in
/// the convolution stage relies on this bound.
pub const MAX_ABS_PREACTIVATION: i32 = (KERNEL_AREA as i32) * 255 * 128;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        assert_eq!(IMAGE_PIXELS, 784);
        assert_eq!(KERNEL_AREA, 25);
        assert_eq!(CONV_OUTPUT_SIZE, 24);
        assert_eq!(CONV_OUTPUT_AREA, 576);
        assert_eq!(POOL_OUTPUT_SIZE, 12);
        assert_eq!(POOL_OUTPUT_AREA, 144);
        assert_eq!(OUTPUT_LEN, 864);
    }

    #[test]
    fn test_pooling_tiles_exactly() {
        // 2×2 windows at stride 2 must cover the 24×24 map with no remainder
        assert_eq!(CONV_OUTPUT_SIZE % POOL_STRIDE, 0);
        assert_eq!(POOL_OUTPUT_SIZE * POOL_STRIDE, CONV_OUTPUT_SIZE);
        assert_eq!(POOL_WINDOW_SIZE, POOL_STRIDE);
    }

    #[test]
    fn test_accumulator_bound_fits_i32() {
        // Worst case with the bias included still fits comfortably
        assert_eq!(MAX_ABS_PREACTIVATION, 816_000);
        assert!(MAX_ABS_PREACTIVATION + 128 < i32::MAX / 2);
    }
}
