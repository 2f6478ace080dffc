use resample_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// The right and bottom neighbours are clamped to the last column and row, so
/// the kernel never reads past the image border.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
///
/// # Returns
///
/// The interpolated pixel values, one per channel.
pub fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = u.floor();
    let iv = v.floor();

    let frac_u = u - iu;
    let frac_v = v - iv;

    let iu0 = (iu as usize).min(cols - 1);
    let iv0 = (iv as usize).min(rows - 1);

    let iu1 = (iu0 + 1).min(cols - 1);
    let iv1 = (iv0 + 1).min(rows - 1);

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let w00 = frac_uu * frac_vv;
    let w01 = frac_u * frac_vv;
    let w10 = frac_uu * frac_v;
    let w11 = frac_u * frac_v;

    let p00 = image.pixel(iv0, iu0);
    let p01 = image.pixel(iv0, iu1);
    let p10 = image.pixel(iv1, iu0);
    let p11 = image.pixel(iv1, iu1);

    let mut pixel = [0.0; C];
    for k in 0..C {
        let (a, b, c, d): (f64, f64, f64, f64) =
            (p00[k].into(), p01[k].into(), p10[k].into(), p11[k].into());
        pixel[k] = a * w00 + b * w01 + c * w10 + d * w11;
    }

    pixel
}

#[cfg(test)]
mod tests {
    use super::bilinear_interpolation;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use resample_image::{Image, ImageError, ImageSize};

    #[test]
    fn bilinear_on_samples() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0, 100, 200, 40],
        )?;
        assert_eq!(bilinear_interpolation(&image, 0.0, 0.0), [0.0]);
        assert_eq!(bilinear_interpolation(&image, 1.0, 0.0), [100.0]);
        assert_eq!(bilinear_interpolation(&image, 0.0, 1.0), [200.0]);
        assert_eq!(bilinear_interpolation(&image, 1.0, 1.0), [40.0]);
        Ok(())
    }

    #[test]
    fn bilinear_between_samples() -> Result<(), ImageError> {
        let image = Image::<f32, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 100.0, 1.0, 200.0, 1.0, 40.0, 1.0],
        )?;
        let [a, b] = bilinear_interpolation(&image, 0.5, 0.5);
        assert_relative_eq!(a, 85.0);
        assert_relative_eq!(b, 1.0);

        let [a, _] = bilinear_interpolation(&image, 0.25, 0.0);
        assert_relative_eq!(a, 25.0);
        Ok(())
    }

    #[test]
    fn bilinear_clamps_at_border() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10, 30],
        )?;
        // past the last column both taps collapse onto it
        assert_relative_eq!(bilinear_interpolation(&image, 1.5, 0.5)[0], 30.0);

        let single = Image::<u8, 1>::new(
            ImageSize {
                width: 1,
                height: 1,
            },
            vec![77],
        )?;
        assert_abs_diff_eq!(
            bilinear_interpolation(&single, 0.7, 0.3)[0],
            77.0,
            epsilon = 1e-4
        );
        Ok(())
    }
}
