use resample_image::{ImageError, ImageSize};

/// Maps destination pixel indices to continuous source coordinates.
///
/// Sampling is top-left aligned: destination pixel `(i, j)` maps to
/// `x = j * scale_x + offset`, `y = i * scale_y + offset` with
/// `scale_x = W / W'` and `scale_y = H / H'`. There is no half-pixel shift.
///
/// The scale factors are computed once in [`CoordinateMapper::new`] and reused
/// for every pixel of a resample call. Coordinates are `f64`.
///
/// # Example
///
/// ```
/// use resample_image::ImageSize;
/// use resample_imgproc::interpolation::grid::CoordinateMapper;
///
/// let mapper = CoordinateMapper::new(
///     ImageSize { width: 4, height: 4 },
///     ImageSize { width: 8, height: 8 },
/// )
/// .unwrap();
///
/// assert_eq!(mapper.map(2, 3), (1.5, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale_x: f64,
    scale_y: f64,
    offset: f64,
}

impl CoordinateMapper {
    /// Create a mapper from a destination grid onto a source grid.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidDimension`] if either size has a zero side.
    pub fn new(src_size: ImageSize, dst_size: ImageSize) -> Result<Self, ImageError> {
        check_size(src_size)?;
        check_size(dst_size)?;

        Ok(Self {
            scale_x: src_size.width as f64 / dst_size.width as f64,
            scale_y: src_size.height as f64 / dst_size.height as f64,
            offset: 0.0,
        })
    }

    /// Shift every mapped coordinate by `offset` pixels on both axes.
    ///
    /// Used when sampling from a padded copy of the source.
    pub fn with_offset(self, offset: f64) -> Self {
        Self { offset, ..self }
    }

    /// The `(scale_x, scale_y)` factors of the mapping.
    pub fn scale(&self) -> (f64, f64) {
        (self.scale_x, self.scale_y)
    }

    /// Map the destination pixel at `(row, col)` to the source coordinate `(x, y)`.
    #[inline]
    pub fn map(&self, row: usize, col: usize) -> (f64, f64) {
        (
            col as f64 * self.scale_x + self.offset,
            row as f64 * self.scale_y + self.offset,
        )
    }
}

/// Compute the destination size for a new width keeping the source aspect ratio.
///
/// The height is `floor(new_width * H / W)`, evaluated in integer arithmetic.
///
/// # Errors
///
/// Returns [`ImageError::InvalidDimension`] if the source is empty, `new_width`
/// is zero, or the derived height truncates to zero.
///
/// # Example
///
/// ```
/// use resample_image::ImageSize;
/// use resample_imgproc::interpolation::grid::aspect_preserving_size;
///
/// let size = aspect_preserving_size(ImageSize { width: 640, height: 480 }, 100).unwrap();
/// assert_eq!(size, ImageSize { width: 100, height: 75 });
/// ```
pub fn aspect_preserving_size(
    src_size: ImageSize,
    new_width: usize,
) -> Result<ImageSize, ImageError> {
    check_size(src_size)?;

    let new_size = ImageSize {
        width: new_width,
        height: new_width * src_size.height / src_size.width,
    };
    check_size(new_size)?;

    Ok(new_size)
}

fn check_size(size: ImageSize) -> Result<(), ImageError> {
    if size.is_empty() {
        return Err(ImageError::InvalidDimension(size.width, size.height));
    }
    Ok(())
}
