use resample_image::{Image, ImageDtype};

/// Default sharpness of the Keys cubic convolution kernel.
pub const DEFAULT_CUBIC_A: f64 = -0.5;

/// Half-width of the cubic kernel support in pixels.
pub const CUBIC_MARGIN: usize = 2;

/// Keys cubic convolution kernel.
///
/// ```text
/// u(s) = (a+2)|s|^3 - (a+3)|s|^2 + 1,      |s| <= 1
///      = a|s|^3 - 5a|s|^2 + 8a|s| - 4a,     1 < |s| < 2
///      = 0,                                 |s| >= 2
/// ```
///
/// # Arguments
///
/// * `s` - Distance from the sample to the interpolated position.
/// * `a` - Sharpness parameter, usually `-0.5`.
///
/// # Example
///
/// ```
/// use resample_imgproc::interpolation::cubic_kernel;
///
/// assert_eq!(cubic_kernel(0.0, -0.5), 1.0);
/// assert_eq!(cubic_kernel(1.0, -0.5), 0.0);
/// assert_eq!(cubic_kernel(2.5, -0.5), 0.0);
/// ```
#[inline]
pub fn cubic_kernel(s: f64, a: f64) -> f64 {
    let s = s.abs();
    if s <= 1.0 {
        (a + 2.0) * s.powi(3) - (a + 3.0) * s.powi(2) + 1.0
    } else if s < 2.0 {
        a * s.powi(3) - 5.0 * a * s.powi(2) + 8.0 * a * s - 4.0 * a
    } else {
        0.0
    }
}

/// The four kernel weights for a fractional offset `frac` in `[0, 1)`.
///
/// The weights apply to the taps at `floor - 1`, `floor`, `floor + 1` and
/// `floor + 2`, in that order.
#[inline]
pub fn cubic_weights(frac: f64, a: f64) -> [f64; 4] {
    [
        cubic_kernel(frac + 1.0, a),
        cubic_kernel(frac, a),
        cubic_kernel(1.0 - frac, a),
        cubic_kernel(2.0 - frac, a),
    ]
}

/// Kernel for bicubic interpolation
///
/// Gathers the 4x4 neighbourhood around `(u, v)` and evaluates `wy · M · wx`
/// per channel. Taps are clamped to the image, which is a no-op when the image
/// was padded by [`CUBIC_MARGIN`] and the coordinate shifted accordingly.
///
/// The result is not clamped: negative lobes of the kernel may overshoot the
/// range of the input samples.
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `a` - Sharpness parameter of the cubic kernel.
///
/// # Returns
///
/// The interpolated pixel values, one per channel.
pub fn bicubic_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f64,
    v: f64,
    a: f64,
) -> [f64; C] {
    let (rows, cols) = (image.rows(), image.cols());

    let iu = u.floor();
    let iv = v.floor();

    let wx = cubic_weights(u - iu, a);
    let wy = cubic_weights(v - iv, a);

    let tap = |base: f64, k: usize, len: usize| -> usize {
        (base as isize + k as isize - 1).clamp(0, len as isize - 1) as usize
    };

    let mut pixel = [0.0; C];
    for (r, &wr) in wy.iter().enumerate() {
        let row = tap(iv, r, rows);

        let mut acc = [0.0f64; C];
        for (c, &wc) in wx.iter().enumerate() {
            let p = image.pixel(row, tap(iu, c, cols));
            for k in 0..C {
                let x: f64 = p[k].into();
                acc[k] += x * wc;
            }
        }

        for k in 0..C {
            pixel[k] += acc[k] * wr;
        }
    }

    pixel
}
