//! Fixed convolution weights and biases.
//!
//! The model is baked in at build time: six 5×5 kernels (row-major) and one
//! bias per kernel, all quantized to signed bytes. There is no runtime
//! loading path and no mutation; [`MODEL`] lives for the whole process.

use crate::constants::{KERNEL_AREA, NUM_KERNELS};

/// Weight store for the convolution stage.
///
/// Kernels are stored row-major: `weight[k][y * KERNEL_SIZE + x]`.
pub struct ConvWeights {
    /// Kernel weights: i8\[6\]\[25\]
    pub weight: [[i8; KERNEL_AREA]; NUM_KERNELS],

    /// Per-kernel bias: i8\[6\]
    pub bias: [i8; NUM_KERNELS],
}

impl ConvWeights {
    /// Kernel `k` as a row-major 5×5 slice.
    #[inline]
    pub fn kernel(&self, k: usize) -> &[i8; KERNEL_AREA] {
        &self.weight[k]
    }

    /// Bias for kernel `k`, widened to the accumulator type.
    #[inline]
    pub fn bias(&self, k: usize) -> i32 {
        self.bias[k] as i32
    }
}

/// The built-in model constants.
pub const MODEL: ConvWeights = ConvWeights {
    weight: [
        // kernel 0
        [
            26, -15, -5, 37, 5, //
            -47, 21, -9, 10, -72, //
            -4, 32, -69, -31, 13, //
            -4, 21, -9, -14, -6, //
            -29, 13, -10, -26, 48,
        ],
        // kernel 1
        [
            -13, -19, -45, 47, 6, //
            -29, 3, 0, -14, 16, //
            -13, 10, 2, -31, -59, //
            31, -29, 31, -56, -37, //
            42, 4, -42, 37, -3,
        ],
        // kernel 2
        [
            65, 25, -22, -32, 23, //
            -8, -8, 7, 17, 22, //
            -4, 49, 34, 6, 37, //
            17, -12, -20, -43, 11, //
            37, 5, 15, 25, 22,
        ],
        // kernel 3
        [
            -51, -18, -42, -26, -4, //
            -21, -65, -39, 20, 26, //
            5, 18, -33, -43, 50, //
            -64, -16, 44, 44, -46, //
            -37, -11, 2, 42, -19,
        ],
        // kernel 4
        [
            4, -50, 17, 20, -26, //
            43, 76, -5, 4, -64, //
            -43, -13, 22, 11, 26, //
            18, 2, 12, -2, -41, //
            -50, -44, -25, 51, 40,
        ],
        // kernel 5
        [
            1, 32, 1, -39, -8, //
            -4, -18, 10, -75, -16, //
            -35, 48, 68, 33, 87, //
            -8, 49, 30, -2, 85, //
            68, 28, -9, 34, 45,
        ],
    ],
    bias: [-67, -114, -96, -54, -120, -128],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_shape() {
        assert_eq!(MODEL.weight.len(), NUM_KERNELS);
        assert_eq!(MODEL.bias.len(), NUM_KERNELS);
        for k in 0..NUM_KERNELS {
            assert_eq!(MODEL.kernel(k).len(), KERNEL_AREA);
        }
    }

    #[test]
    fn test_model_biases_negative() {
        // The all-zero-image property (zero output) relies on every bias
        // being negative; pin the exact values.
        assert_eq!(MODEL.bias, [-67, -114, -96, -54, -120, -128]);
        for k in 0..NUM_KERNELS {
            assert!(MODEL.bias(k) < 0);
        }
    }
}
