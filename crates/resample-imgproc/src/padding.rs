use resample_image::{Image, ImageError, ImageSize};

/// Maps index `i` onto `[0, len)` by clamping to the nearest edge.
#[inline]
fn clamp_index(i: isize, len: usize) -> usize {
    i.clamp(0, len as isize - 1) as usize
}

/// Replicates the outermost rows and columns of the interior into the border of `new_data`.
///
/// `new_data` must already hold the original image in its interior.
fn replicate_border<T: Copy, const C: usize>(
    new_data: &mut [T],
    old_size: ImageSize,
    new_size: ImageSize,
    padding: &Padding2D,
) {
    let top = padding.top;
    let bottom = padding.bottom;
    let left = padding.left;
    let right = padding.right;
    let row_stride = new_size.width * C;

    // left and right strips of the interior rows
    for row in new_data
        .chunks_exact_mut(row_stride)
        .skip(top)
        .take(old_size.height)
    {
        for x in (0..left).chain(new_size.width - right..new_size.width) {
            let src_x = clamp_index(x as isize - left as isize, old_size.width);
            let src_idx = (left + src_x) * C;
            row.copy_within(src_idx..src_idx + C, x * C);
        }
    }

    // top and bottom strips copy whole padded rows, corners included
    for y in (0..top).chain(new_size.height - bottom..new_size.height) {
        let src_y = top + clamp_index(y as isize - top as isize, old_size.height);
        new_data.copy_within(
            src_y * row_stride..(src_y + 1) * row_stride,
            y * row_stride,
        );
    }
}

/// Represents 2D padding with top, bottom, left, and right values (in pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding2D {
    /// Amount of padding to add on the top side.
    pub top: usize,
    /// Amount of padding to add on the bottom side.
    pub bottom: usize,
    /// Amount of padding to add on the left side.
    pub left: usize,
    /// Amount of padding to add on the right side.
    pub right: usize,
}

impl Padding2D {
    /// The same margin on all four sides.
    pub fn uniform(margin: usize) -> Self {
        Self {
            top: margin,
            bottom: margin,
            left: margin,
            right: margin,
        }
    }

    /// The size of an image of `old_size` after applying this padding.
    pub fn padded_size(&self, old_size: ImageSize) -> ImageSize {
        ImageSize {
            width: old_size.width + self.left + self.right,
            height: old_size.height + self.top + self.bottom,
        }
    }

    /// Validates that a new image size correctly matches the expected dimensions
    /// after applying this padding to an existing image.
    ///
    /// # Example
    /// ```rust
    /// use resample_image::ImageSize;
    /// use resample_imgproc::padding::Padding2D;
    /// let padding = Padding2D { top: 1, bottom: 1, left: 2, right: 2 };
    /// let old_size = ImageSize { width: 4, height: 4 };
    /// let new_size = ImageSize { width: 8, height: 6 };
    ///
    /// assert!(padding.validate_size(old_size, new_size));
    /// ```
    pub fn validate_size(&self, old_size: ImageSize, new_size: ImageSize) -> bool {
        self.padded_size(old_size) == new_size
    }
}

/// Fills `dst` with `src` surrounded by a border of edge replication.
///
/// Edge strips repeat the nearest boundary row or column and each corner block
/// repeats the nearest corner sample.
///
/// # Arguments
///
/// * `src` - The source image to pad.
/// * `dst` - The destination image where the padded output will be stored.
/// * `padding` - The amount of padding (in pixels) for all four sides defined in [`Padding2D`].
///
/// # Errors
///
/// Returns an error if `src` is empty, or if the size of `dst` does not match
/// the size of `src` with `padding` applied.
///
/// # Example
///
/// ```rust
/// use resample_image::{ImageSize, Image};
/// use resample_imgproc::padding::{Padding2D, spatial_padding};
///
/// let src = Image::<u8, 3>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1, 1, 1, 2, 2, 2, 3, 3, 3, 4, 4, 4],
/// ).unwrap();
///
/// let mut dst = Image::<u8, 3>::new(
///     ImageSize { width: 4, height: 4 },
///     vec![0u8; 4 * 4 * 3],
/// ).unwrap();
///
/// spatial_padding(
///     &src,
///     &mut dst,
///     Padding2D::uniform(1),
/// ).unwrap();
///
/// assert_eq!(dst.get([0, 0, 0]), Some(&1));
/// assert_eq!(dst.get([3, 3, 0]), Some(&4));
/// ```
pub fn spatial_padding<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    padding: Padding2D,
) -> Result<(), ImageError>
where
    T: Copy,
{
    if src.size().is_empty() {
        return Err(ImageError::InvalidDimension(src.width(), src.height()));
    }

    if !padding.validate_size(src.size(), dst.size()) {
        let expected = padding.padded_size(src.size());
        return Err(ImageError::InvalidImageSize(
            dst.width(),
            dst.height(),
            expected.width,
            expected.height,
        ));
    }

    let old_size = src.size();
    let new_size = dst.size();

    let old_data = src.as_slice();
    let new_data = dst.as_slice_mut();

    // copy old image data as center of new image data
    let new_stride = new_size.width * C;
    let old_stride = old_size.width * C;

    let row_offset = padding.top * new_stride + padding.left * C;

    for (src_row, dst_row) in old_data
        .chunks_exact(old_stride)
        .zip(new_data[row_offset..].chunks_mut(new_stride))
    {
        dst_row[..old_stride].copy_from_slice(src_row);
    }

    replicate_border::<T, C>(new_data, old_size, new_size, &padding);

    Ok(())
}

/// Allocate a copy of `src` extended by `margin` pixels of edge replication on every side.
///
/// The interior equals `src`; edge strips repeat the nearest boundary row or
/// column and each corner block repeats the nearest corner sample.
///
/// # Example
///
/// ```rust
/// use resample_image::{ImageSize, Image};
/// use resample_imgproc::padding::pad_replicate;
///
/// let src = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![3, 9]).unwrap();
/// let padded = pad_replicate(&src, 2).unwrap();
///
/// assert_eq!(padded.size(), ImageSize { width: 6, height: 5 });
/// assert_eq!(&padded.as_slice()[..6], &[3, 3, 3, 9, 9, 9]);
/// ```
pub fn pad_replicate<T, const C: usize>(
    src: &Image<T, C>,
    margin: usize,
) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default,
{
    if src.size().is_empty() {
        return Err(ImageError::InvalidDimension(src.width(), src.height()));
    }

    let padding = Padding2D::uniform(margin);
    let mut dst = Image::from_size_val(padding.padded_size(src.size()), T::default())?;
    spatial_padding(src, &mut dst, padding)?;
    Ok(dst)
}
