use crate::interpolation::{
    bicubic_interpolation, bilinear_interpolation,
    grid::{aspect_preserving_size, CoordinateMapper},
    CUBIC_MARGIN, DEFAULT_CUBIC_A,
};
use crate::padding::pad_replicate;
use resample_image::{Image, ImageDtype, ImageError, ImageSize};

/// A reconstruction strategy mapping a source image onto a new resolution.
///
/// Implementations are stateless apart from their configuration: every call
/// reads `src` immutably and allocates a new image.
pub trait Resampler {
    /// Short human readable name of the strategy.
    fn name(&self) -> &'static str;

    /// Resize `src` to `new_width`, deriving the height from the source aspect ratio.
    fn resize<T: ImageDtype, const C: usize>(
        &self,
        src: &Image<T, C>,
        new_width: usize,
    ) -> Result<Image<T, C>, ImageError>;

    /// Resize `src` back towards `size`, the resolution of an earlier image.
    ///
    /// Strategies that can only preserve aspect ratio target `size.width` and
    /// may land on a different height than `size.height`.
    fn resize_back<T: ImageDtype, const C: usize>(
        &self,
        src: &Image<T, C>,
        size: ImageSize,
    ) -> Result<Image<T, C>, ImageError>;
}

/// Bilinear reconstruction over the 2x2 neighbourhood.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bilinear;

impl Resampler for Bilinear {
    fn name(&self) -> &'static str {
        "bilinear"
    }

    fn resize<T: ImageDtype, const C: usize>(
        &self,
        src: &Image<T, C>,
        new_width: usize,
    ) -> Result<Image<T, C>, ImageError> {
        resize_bilinear(src, new_width, None)
    }

    fn resize_back<T: ImageDtype, const C: usize>(
        &self,
        src: &Image<T, C>,
        size: ImageSize,
    ) -> Result<Image<T, C>, ImageError> {
        resize_bilinear(src, size.width, Some(size.height))
    }
}

/// Bicubic reconstruction with the Keys cubic convolution kernel.
///
/// The destination height always follows the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bicubic {
    /// Sharpness parameter of the cubic kernel.
    pub a: f64,
}

impl Bicubic {
    /// Create a bicubic resampler with the given kernel sharpness.
    pub fn new(a: f64) -> Self {
        Self { a }
    }
}

impl Default for Bicubic {
    fn default() -> Self {
        Self::new(DEFAULT_CUBIC_A)
    }
}

impl Resampler for Bicubic {
    fn name(&self) -> &'static str {
        "bicubic"
    }

    fn resize<T: ImageDtype, const C: usize>(
        &self,
        src: &Image<T, C>,
        new_width: usize,
    ) -> Result<Image<T, C>, ImageError> {
        resize_bicubic(src, new_width, self.a)
    }

    fn resize_back<T: ImageDtype, const C: usize>(
        &self,
        src: &Image<T, C>,
        size: ImageSize,
    ) -> Result<Image<T, C>, ImageError> {
        resize_bicubic(src, size.width, self.a)
    }
}

/// Resize an image with bilinear interpolation.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_width` - The width of the output image.
/// * `new_height` - The height of the output image. If `None`, it is derived
///   from the aspect ratio of `src`.
///
/// # Returns
///
/// A newly allocated image; samples are rounded and clamped to the range of `T`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if `src` is empty or the output
/// size has a zero side. No memory is allocated in that case.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::resize::resize_bilinear;
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 4, height: 5 }, 7).unwrap();
///
/// let resized = resize_bilinear(&image, 2, Some(3)).unwrap();
/// assert_eq!(resized.size(), ImageSize { width: 2, height: 3 });
///
/// let resized = resize_bilinear(&image, 8, None).unwrap();
/// assert_eq!(resized.size(), ImageSize { width: 8, height: 10 });
/// ```
pub fn resize_bilinear<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    new_width: usize,
    new_height: Option<usize>,
) -> Result<Image<T, C>, ImageError> {
    let new_size = match new_height {
        Some(height) => ImageSize {
            width: new_width,
            height,
        },
        None => aspect_preserving_size(src.size(), new_width)?,
    };

    let mapper = CoordinateMapper::new(src.size(), new_size)?;

    resample_with(new_size, mapper, |x, y| bilinear_interpolation(src, x, y))
}

/// Resize an image with bicubic interpolation, preserving the aspect ratio.
///
/// The source is padded by [`CUBIC_MARGIN`] pixels of edge replication so the
/// 4x4 gather always stays inside the buffer.
///
/// # Arguments
///
/// * `src` - The input image container.
/// * `new_width` - The width of the output image.
/// * `a` - Sharpness parameter of the cubic kernel, see [`DEFAULT_CUBIC_A`].
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if `src` is empty or the derived
/// output size has a zero side.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::resize::resize_bicubic;
///
/// let image = Image::<u8, 1>::from_size_val(ImageSize { width: 6, height: 4 }, 128).unwrap();
/// let resized = resize_bicubic(&image, 9, -0.5).unwrap();
///
/// assert_eq!(resized.size(), ImageSize { width: 9, height: 6 });
/// assert!(resized.as_slice().iter().all(|&v| v == 128));
/// ```
pub fn resize_bicubic<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    new_width: usize,
    a: f64,
) -> Result<Image<T, C>, ImageError> {
    let new_size = aspect_preserving_size(src.size(), new_width)?;

    let mapper = CoordinateMapper::new(src.size(), new_size)?.with_offset(CUBIC_MARGIN as f64);
    let padded = pad_replicate(src, CUBIC_MARGIN)?;

    resample_with(new_size, mapper, |x, y| {
        bicubic_interpolation(&padded, x, y, a)
    })
}

/// Evaluate `kernel` at the mapped coordinate of every destination pixel.
fn resample_with<T, const C: usize, F>(
    new_size: ImageSize,
    mapper: CoordinateMapper,
    kernel: F,
) -> Result<Image<T, C>, ImageError>
where
    T: ImageDtype,
    F: Fn(f64, f64) -> [f64; C],
{
    let mut data = Vec::with_capacity(new_size.width * new_size.height * C);

    for row in 0..new_size.height {
        for col in 0..new_size.width {
            let (x, y) = mapper.map(row, col);
            data.extend(kernel(x, y).iter().map(|&v| T::from_f64(v)));
        }
    }

    Image::new(new_size, data)
}

/// The outputs of both resamplers for the same source and width.
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison<T, const C: usize> {
    /// Output of [`Bilinear`].
    pub bilinear: Image<T, C>,
    /// Output of [`Bicubic`].
    pub bicubic: Image<T, C>,
}

/// Resize `src` to `new_width` with both strategies for side-by-side inspection.
///
/// Both outputs share the aspect-preserving size.
pub fn compare_resamplers<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    new_width: usize,
    a: f64,
) -> Result<Comparison<T, C>, ImageError> {
    Ok(Comparison {
        bilinear: Bilinear.resize(src, new_width)?,
        bicubic: Bicubic::new(a).resize(src, new_width)?,
    })
}
