//! Forward pass of a single fixed convolutional layer with max-pooling.
//!
//! The pipeline takes a 28×28 grayscale image and produces six 12×12
//! feature maps: per kernel, a valid 5×5 cross-correlation, bias add,
//! ReLU, then non-overlapping 2×2 max-pooling. Weights and biases are
//! compile-time constants; nothing here is trainable.
//!
//! All arithmetic is integer-only. Pixels are `u8`, weights `i8`, and
//! accumulation happens in `i32`, which the fixed domain cannot overflow
//! (see [`constants::MAX_ABS_PREACTIVATION`]).

pub mod constants;
pub mod error;
pub mod forward;
pub mod tensor;
pub mod weights;

pub use error::{Error, Result};
pub use forward::{convolve_and_activate, forward, forward_into, forward_with, max_pool, relu};
pub use tensor::{ConvMap, FeatureMaps, Image, PooledPlane};
pub use weights::{ConvWeights, MODEL};
