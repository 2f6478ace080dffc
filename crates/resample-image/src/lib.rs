#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for resampling purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// operations to cast images between sample types.
pub mod ops;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
