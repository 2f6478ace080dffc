use super::{check_same_size, sum_diff};
use resample_image::{Image, ImageError};

/// Compute the L1 loss (mean absolute error) between two images.
///
/// The L1 loss is defined as:
///
/// $ L1(a, b) = \frac{1}{N} \sum_{i=1}^{N} |a_i - b_i| $
///
/// where `a` and `b` are the two images and `N` is the number of samples.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Returns
///
/// The mean absolute error between the two images.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::metrics::l1_loss;
///
/// let image1 = Image::<f32, 1>::new(
///   ImageSize {
///    width: 2,
///    height: 3,
///   },
///   vec![0f32, 1f32, 2f32, 3f32, 4f32, 5f32],
/// )
/// .unwrap();
///
/// let image2 = Image::<f32, 1>::new(
///   ImageSize {
///     width: 2,
///     height: 3,
///   },
///   vec![5f32, 4f32, 3f32, 2f32, 1f32, 0f32],
/// )
/// .unwrap();
///
/// let l1_loss = l1_loss(&image1, &image2).unwrap();
/// assert_eq!(l1_loss, 3.0);
/// ```
///
/// # Errors
///
/// Returns an error if the two images have different sizes.
pub fn l1_loss<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
) -> Result<f32, ImageError> {
    check_same_size(image1, image2)?;

    let l1 = sum_diff(image1, image2, f64::abs);

    Ok((l1 / image1.numel() as f64) as f32)
}
