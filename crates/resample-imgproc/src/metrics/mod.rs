//! Image reconstruction metrics.
//!
//! This module provides functions for quantitatively comparing two images of
//! the same shape, typically an original and its resampled reconstruction.
//!
//! # Available Metrics
//!
//! - **L1 Loss**: Mean absolute difference between samples (MAE)
//! - **MSE** (Mean Squared Error): Average squared difference between samples
//! - **RMSE**: Square root of the MSE
//! - **L2 Norm**: Euclidean norm of the difference over all samples
//!
//! All metrics return [`resample_image::ImageError::InvalidImageSize`] when the
//! two images differ in size.

mod l1;
mod l2;
mod mse;

pub use l1::l1_loss;
pub use l2::l2_norm;
pub use mse::{mse, rmse};

use resample_image::{Image, ImageError};

/// Fail unless both images have the same size.
pub(crate) fn check_same_size<T, U, const C: usize>(
    image1: &Image<T, C>,
    image2: &Image<U, C>,
) -> Result<(), ImageError> {
    if image1.size() != image2.size() {
        return Err(ImageError::InvalidImageSize(
            image1.width(),
            image1.height(),
            image2.width(),
            image2.height(),
        ));
    }
    Ok(())
}

/// Sum of `f` over the pairwise sample differences, accumulated in `f64`.
pub(crate) fn sum_diff<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
    f: impl Fn(f64) -> f64,
) -> f64 {
    image1
        .as_slice()
        .iter()
        .zip(image2.as_slice().iter())
        .map(|(&a, &b)| f(a as f64 - b as f64))
        .sum()
}
