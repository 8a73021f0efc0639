//! Convolution → bias → ReLU → max-pool forward pass.
//!
//! Integer-only, single pass, no retained state. The convolution is a
//! cross-correlation: the kernel is applied without spatial flipping, and
//! bit-compatibility with the fixed constants defines correctness here,
//! not the mathematical convolution convention.

use crate::constants::{
    CONV_OUTPUT_SIZE, KERNEL_AREA, KERNEL_SIZE, NUM_KERNELS, POOL_OUTPUT_AREA, POOL_OUTPUT_SIZE,
    POOL_STRIDE, POOL_WINDOW_SIZE,
};
use crate::error::Result;
use crate::tensor::{ConvMap, FeatureMaps, Image, PooledPlane};
use crate::weights::{ConvWeights, MODEL};

// =============================================================================
// Activation
// =============================================================================

/// ReLU: max(0, x)
#[inline]
pub fn relu(x: i32) -> i32 {
    x.max(0)
}

// =============================================================================
// Convolution stage
// =============================================================================

/// Valid 5×5 cross-correlation over the whole image for one kernel,
/// followed by bias add and ReLU.
///
/// For each output position (j, i) in [0, 24)²:
///
/// ```text
/// sum = Σ_{y=0..4} Σ_{x=0..4} image[j+y][i+x] * kernel[y][x]
/// map[j][i] = max(0, sum + bias)
/// ```
///
/// Accumulation is `i32`: 25 terms of pixel (≤ 255) × weight (|w| ≤ 128)
/// stay below [`crate::constants::MAX_ABS_PREACTIVATION`]. Every entry of
/// the returned map is non-negative.
pub fn convolve_and_activate(image: &Image, kernel: &[i8; KERNEL_AREA], bias: i32) -> ConvMap {
    let mut map = ConvMap::zeroed();

    for j in 0..CONV_OUTPUT_SIZE {
        for i in 0..CONV_OUTPUT_SIZE {
            let mut sum = 0i32;
            for y in 0..KERNEL_SIZE {
                for x in 0..KERNEL_SIZE {
                    sum += image.at(j + y, i + x) as i32 * kernel[y * KERNEL_SIZE + x] as i32;
                }
            }
            map.set(j, i, relu(sum + bias));
        }
    }

    map
}

// =============================================================================
// Pooling stage
// =============================================================================

/// 2×2 max-pooling at stride 2 over one activation map.
///
/// # Precondition
///
/// Input must be non-negative. The max accumulator is seeded with 0, not
/// `i32::MIN`, which is only correct for post-ReLU input; reusing this
/// stage with signed input would change behavior.
pub fn max_pool(map: &ConvMap) -> PooledPlane {
    let mut pooled = [0i32; POOL_OUTPUT_AREA];

    for j in 0..POOL_OUTPUT_SIZE {
        for i in 0..POOL_OUTPUT_SIZE {
            let mut best = 0i32;
            for y in 0..POOL_WINDOW_SIZE {
                for x in 0..POOL_WINDOW_SIZE {
                    best = best.max(map.at(j * POOL_STRIDE + y, i * POOL_STRIDE + x));
                }
            }
            pooled[j * POOL_OUTPUT_SIZE + i] = best;
        }
    }

    pooled
}

// =============================================================================
// Pipeline driver
// =============================================================================

/// Run the full pipeline with explicit weights.
///
/// The six kernel computations are independent: each reads only the shared
/// image and its own weight/bias slice and writes its own output plane, so
/// the sequential order is an implementation detail, not a data dependency.
pub fn forward_with(weights: &ConvWeights, image: &Image) -> FeatureMaps {
    let mut maps = FeatureMaps::zeroed();

    for k in 0..NUM_KERNELS {
        let conv = convolve_and_activate(image, weights.kernel(k), weights.bias(k));
        *maps.plane_mut(k) = max_pool(&conv);
        log::trace!("kernel {k}: pooled plane written");
    }

    maps
}

/// Run the full pipeline with the built-in [`MODEL`] constants.
#[inline]
pub fn forward(image: &Image) -> FeatureMaps {
    forward_with(&MODEL, image)
}

/// Run the pipeline and write the 6×12×12 result row-major into a
/// caller-owned flat buffer.
///
/// Fails with [`crate::Error::InvalidOutputShape`] unless `out` holds
/// exactly 864 entries; nothing is written on failure.
pub fn forward_into(image: &Image, out: &mut [i32]) -> Result<()> {
    forward(image).copy_into(out)
}
