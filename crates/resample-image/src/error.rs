/// An error type for the image module.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ImageError {
    /// Error when an image or a requested size has a zero dimension.
    #[error("Invalid image dimension: width {0}, height {1}")]
    InvalidDimension(usize, usize),

    /// Error when two images were expected to have the same size.
    #[error("Image size mismatch: ({0}, {1}) vs ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when a sample cannot be represented in the target type.
    #[error("Failed to cast image data to {0}")]
    CastError(String),
}
