//! Pixel interpolation kernels used by the resamplers.
//!
//! # Interpolation Kernels
//!
//! - **Bilinear**: blend of the 2x2 neighbourhood, edge taps clamped to the image
//! - **Bicubic**: Keys cubic convolution over the 4x4 neighbourhood
//!
//! Both kernels evaluate in `f64` and return unclamped values; bringing them
//! back into the sample range happens when the destination image is written.

mod bicubic;
mod bilinear;

/// Grid generation and coordinate mapping utilities.
///
/// Maps destination pixel indices onto continuous source coordinates and
/// derives aspect-preserving destination sizes.
pub mod grid;

pub use bicubic::{
    bicubic_interpolation, cubic_kernel, cubic_weights, CUBIC_MARGIN, DEFAULT_CUBIC_A,
};
pub use bilinear::bilinear_interpolation;
