#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// utilities for interpolation.
pub mod interpolation;

/// image reconstruction metrics module.
pub mod metrics;

/// border extension of images.
pub mod padding;

/// utility functions for resizing images.
pub mod resize;

/// repeated resize cycles and reconstruction error.
pub mod roundtrip;
