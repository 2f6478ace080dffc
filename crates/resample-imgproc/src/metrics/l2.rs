use super::{check_same_size, sum_diff};
use resample_image::{Image, ImageError};

/// Compute the L2 norm of the difference between two images.
///
/// $ L2(a, b) = \sqrt{\sum_{i=1}^{N} (a_i - b_i)^2} $
///
/// The sum runs over every sample of every channel, i.e. the Frobenius norm of
/// the difference tensor.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::metrics::l2_norm;
///
/// let size = ImageSize { width: 2, height: 1 };
/// let image1 = Image::<f32, 1>::new(size, vec![0.0, 0.0]).unwrap();
/// let image2 = Image::<f32, 1>::new(size, vec![3.0, 4.0]).unwrap();
///
/// assert_eq!(l2_norm(&image1, &image2).unwrap(), 5.0);
/// ```
///
/// # Errors
///
/// Returns an error if the two images have different sizes.
pub fn l2_norm<const C: usize>(
    image1: &Image<f32, C>,
    image2: &Image<f32, C>,
) -> Result<f32, ImageError> {
    check_same_size(image1, image2)?;

    let sum_sq = sum_diff(image1, image2, |d| d * d);

    Ok(sum_sq.sqrt() as f32)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use resample_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_l2_norm() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let image1 = Image::<f32, 3>::new(size, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
        let image2 = Image::<f32, 3>::new(size, vec![2.0, 2.0, 3.0, 4.0, 5.0, 8.0])?;

        let l2 = crate::metrics::l2_norm(&image1, &image2)?;
        assert_relative_eq!(l2, 5f32.sqrt());

        assert_eq!(crate::metrics::l2_norm(&image1, &image1)?, 0.0);

        Ok(())
    }
}
