//! Fixed-shape buffers used by the pipeline.
//!
//! Each type wraps a flat row-major array with bounds-checked accessors;
//! `index = row * width + col` throughout. Shapes are validated once at the
//! boundary, never silently truncated or padded.

use crate::constants::{
    CONV_OUTPUT_AREA, CONV_OUTPUT_SIZE, IMAGE_PIXELS, IMAGE_SIZE, NUM_KERNELS, POOL_OUTPUT_AREA,
    POOL_OUTPUT_SIZE,
};
use crate::error::{Error, Result};

/// One pooled 12×12 output plane, row-major.
pub type PooledPlane = [i32; POOL_OUTPUT_AREA];

// =============================================================================
// Image
// =============================================================================

/// A 28×28 grayscale input image, row-major.
///
/// Produced by an external decoder; the core only consumes the raw pixel
/// buffer and never parses a file format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image {
    pixels: [u8; IMAGE_PIXELS],
}

impl Image {
    /// Wrap an exact-size pixel array.
    #[inline]
    pub fn from_pixels(pixels: [u8; IMAGE_PIXELS]) -> Self {
        Self { pixels }
    }

    /// Validate and copy a raw pixel slice.
    ///
    /// Fails with [`Error::InvalidImageShape`] unless `raw` holds exactly
    /// 784 bytes.
    pub fn from_slice(raw: &[u8]) -> Result<Self> {
        let pixels: [u8; IMAGE_PIXELS] =
            raw.try_into().map_err(|_| Error::InvalidImageShape {
                expected: IMAGE_PIXELS,
                actual: raw.len(),
            })?;
        Ok(Self { pixels })
    }

    /// Pixel at (row, col).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> u8 {
        debug_assert!(row < IMAGE_SIZE && col < IMAGE_SIZE);
        self.pixels[row * IMAGE_SIZE + col]
    }

    /// The raw row-major pixel buffer.
    #[inline]
    pub fn as_raw(&self) -> &[u8; IMAGE_PIXELS] {
        &self.pixels
    }
}

// =============================================================================
// ConvMap
// =============================================================================

/// One kernel's 24×24 activation map, row-major.
///
/// Post-bias and post-ReLU: every entry is non-negative. Transient — built
/// per kernel and discarded once pooled.
pub struct ConvMap {
    values: [i32; CONV_OUTPUT_AREA],
}

impl ConvMap {
    /// Zero-initialized map.
    #[inline]
    pub fn zeroed() -> Self {
        Self { values: [0; CONV_OUTPUT_AREA] }
    }

    /// Entry at (row, col).
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> i32 {
        debug_assert!(row < CONV_OUTPUT_SIZE && col < CONV_OUTPUT_SIZE);
        self.values[row * CONV_OUTPUT_SIZE + col]
    }

    /// Write entry at (row, col).
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        debug_assert!(row < CONV_OUTPUT_SIZE && col < CONV_OUTPUT_SIZE);
        self.values[row * CONV_OUTPUT_SIZE + col] = value;
    }

    /// Flat row-major view.
    #[inline]
    pub fn as_flat(&self) -> &[i32; CONV_OUTPUT_AREA] {
        &self.values
    }
}

// =============================================================================
// FeatureMaps
// =============================================================================

/// The final 6×12×12 output tensor: one pooled plane per kernel.
///
/// Max of non-negative values, so every entry is non-negative.
#[derive(PartialEq, Eq, Debug)]
pub struct FeatureMaps {
    planes: [PooledPlane; NUM_KERNELS],
}

impl FeatureMaps {
    /// Zero-initialized tensor.
    #[inline]
    pub fn zeroed() -> Self {
        Self { planes: [[0; POOL_OUTPUT_AREA]; NUM_KERNELS] }
    }

    /// Plane for kernel `k`.
    #[inline]
    pub fn plane(&self, k: usize) -> &PooledPlane {
        &self.planes[k]
    }

    /// Mutable plane for kernel `k`.
    #[inline]
    pub fn plane_mut(&mut self, k: usize) -> &mut PooledPlane {
        &mut self.planes[k]
    }

    /// Entry at (kernel, row, col).
    #[inline]
    pub fn at(&self, k: usize, row: usize, col: usize) -> i32 {
        debug_assert!(k < NUM_KERNELS && row < POOL_OUTPUT_SIZE && col < POOL_OUTPUT_SIZE);
        self.planes[k][row * POOL_OUTPUT_SIZE + col]
    }

    /// Copy all 864 entries row-major into a caller-owned flat buffer.
    ///
    /// Fails with [`Error::InvalidOutputShape`] unless `out` holds exactly
    /// 6×12×12 entries.
    pub fn copy_into(&self, out: &mut [i32]) -> Result<()> {
        let expected = NUM_KERNELS * POOL_OUTPUT_AREA;
        if out.len() != expected {
            return Err(Error::InvalidOutputShape { expected, actual: out.len() });
        }
        for (k, plane) in self.planes.iter().enumerate() {
            out[k * POOL_OUTPUT_AREA..(k + 1) * POOL_OUTPUT_AREA].copy_from_slice(plane);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::OUTPUT_LEN;

    #[test]
    fn test_image_from_slice_valid() {
        let raw = vec![7u8; IMAGE_PIXELS];
        let image = Image::from_slice(&raw).unwrap();
        assert_eq!(image.at(0, 0), 7);
        assert_eq!(image.at(27, 27), 7);
    }

    #[test]
    fn test_image_from_slice_rejects_wrong_size() {
        // A 20×20 buffer must be rejected, not truncated or padded
        let raw = vec![0u8; 400];
        assert_eq!(
            Image::from_slice(&raw),
            Err(Error::InvalidImageShape { expected: 784, actual: 400 })
        );

        let raw = vec![0u8; 785];
        assert!(Image::from_slice(&raw).is_err());
    }

    #[test]
    fn test_image_row_major_layout() {
        let mut pixels = [0u8; IMAGE_PIXELS];
        pixels[1 * IMAGE_SIZE + 2] = 99;
        let image = Image::from_pixels(pixels);
        assert_eq!(image.at(1, 2), 99);
        assert_eq!(image.at(2, 1), 0);
    }

    #[test]
    fn test_convmap_accessors() {
        let mut map = ConvMap::zeroed();
        map.set(3, 4, 123);
        assert_eq!(map.at(3, 4), 123);
        assert_eq!(map.as_flat()[3 * CONV_OUTPUT_SIZE + 4], 123);
    }

    #[test]
    fn test_feature_maps_copy_into() {
        let mut maps = FeatureMaps::zeroed();
        maps.plane_mut(5)[143] = 42;

        let mut flat = vec![0i32; OUTPUT_LEN];
        maps.copy_into(&mut flat).unwrap();
        assert_eq!(flat[OUTPUT_LEN - 1], 42);

        let mut short = vec![0i32; OUTPUT_LEN - 1];
        assert_eq!(
            maps.copy_into(&mut short),
            Err(Error::InvalidOutputShape { expected: OUTPUT_LEN, actual: OUTPUT_LEN - 1 })
        );
    }
}
