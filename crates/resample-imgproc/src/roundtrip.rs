use crate::metrics;
use crate::resize::Resampler;
use resample_image::{ops, Image, ImageDtype, ImageError};

/// Aggregate difference between an original image and its reconstruction.
///
/// Differences are taken in floating point over every sample of every channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorReport {
    /// Mean absolute error.
    pub mean_absolute_error: f32,
    /// Root mean square error.
    pub root_mean_square_error: f32,
    /// Euclidean norm of the difference.
    pub l2_norm: f32,
}

impl ErrorReport {
    /// Compare `reconstructed` against `original`.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidImageSize`] if the images differ in size.
    pub fn compute<T, const C: usize>(
        original: &Image<T, C>,
        reconstructed: &Image<T, C>,
    ) -> Result<Self, ImageError>
    where
        T: Copy + num_traits::NumCast,
    {
        metrics::check_same_size(original, reconstructed)?;

        let original = ops::to_f32(original)?;
        let reconstructed = ops::to_f32(reconstructed)?;

        Ok(Self {
            mean_absolute_error: metrics::l1_loss(&original, &reconstructed)?,
            root_mean_square_error: metrics::rmse(&original, &reconstructed)?,
            l2_norm: metrics::l2_norm(&original, &reconstructed)?,
        })
    }
}

impl std::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "MAE: {:.2}, RMSE: {:.2}, L2 norm: {:.2}",
            self.mean_absolute_error, self.root_mean_square_error, self.l2_norm
        )
    }
}

/// Parameters of a round-trip evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundTripConfig {
    /// Width of the forward resize; the height follows the aspect ratio.
    pub new_width: usize,
    /// Number of forward/backward cycles. Zero means a single forward resize.
    pub num_cycles: usize,
}

impl RoundTripConfig {
    /// A single forward resize to `new_width`, without error measurement.
    pub fn new(new_width: usize) -> Self {
        Self {
            new_width,
            num_cycles: 0,
        }
    }

    /// Set the number of forward/backward cycles.
    pub fn with_cycles(self, num_cycles: usize) -> Self {
        Self { num_cycles, ..self }
    }
}

/// The result of [`run_round_trip`].
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTripOutput<T, const C: usize> {
    /// The degraded image resized to the forward width.
    pub image: Image<T, C>,
    /// Error at the original resolution, `None` when no cycle was run.
    pub report: Option<ErrorReport>,
}

/// Consumer of round-trip results, e.g. an encoder or a viewer.
pub trait RoundTripSink<T, const C: usize> {
    /// Error type of the consumer.
    type Error: From<ImageError>;

    /// Receive the pristine original and the round-trip output.
    fn consume(
        &mut self,
        original: &Image<T, C>,
        output: &RoundTripOutput<T, C>,
    ) -> Result<(), Self::Error>;
}

/// Push `src` through repeated resize cycles and measure the accumulated error.
///
/// With `num_cycles == 0` this is a single forward resize to `new_width` and no
/// report. Otherwise each cycle resizes to `new_width` and back to the size of
/// `src`. The error is measured between `src` and the degraded image at the
/// original resolution, then the degraded image is resized once more to
/// `new_width` and returned.
///
/// # Errors
///
/// Propagates resize errors, and returns [`ImageError::InvalidImageSize`] if
/// the cycles did not land back on the original size, which happens when the
/// resampler can only preserve aspect ratio and integer truncation drifts.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::resize::Bilinear;
/// use resample_imgproc::roundtrip::{run_round_trip, RoundTripConfig};
///
/// let image = Image::<u8, 3>::from_size_val(ImageSize { width: 8, height: 6 }, 90).unwrap();
/// let config = RoundTripConfig::new(4).with_cycles(3);
///
/// let output = run_round_trip(&image, &Bilinear, &config).unwrap();
/// assert_eq!(output.image.size(), ImageSize { width: 4, height: 3 });
/// assert_eq!(output.report.unwrap().mean_absolute_error, 0.0);
/// ```
pub fn run_round_trip<R, T, const C: usize>(
    src: &Image<T, C>,
    resampler: &R,
    config: &RoundTripConfig,
) -> Result<RoundTripOutput<T, C>, ImageError>
where
    R: Resampler,
    T: ImageDtype + num_traits::NumCast,
{
    if config.num_cycles == 0 {
        return Ok(RoundTripOutput {
            image: resampler.resize(src, config.new_width)?,
            report: None,
        });
    }

    let mut current = src.clone();
    for cycle in 0..config.num_cycles {
        let forward = resampler.resize(&current, config.new_width)?;
        current = resampler.resize_back(&forward, src.size())?;
        log::debug!(
            "{} cycle {}/{}: {} -> {} -> {}",
            resampler.name(),
            cycle + 1,
            config.num_cycles,
            src.size(),
            forward.size(),
            current.size()
        );
    }

    let report = ErrorReport::compute(src, &current)?;
    log::debug!(
        "{} after {} cycles: {}",
        resampler.name(),
        config.num_cycles,
        report
    );

    Ok(RoundTripOutput {
        image: resampler.resize(&current, config.new_width)?,
        report: Some(report),
    })
}

/// Run [`run_round_trip`] and hand the result to `sink`.
pub fn run_round_trip_with_sink<R, S, T, const C: usize>(
    src: &Image<T, C>,
    resampler: &R,
    config: &RoundTripConfig,
    sink: &mut S,
) -> Result<(), S::Error>
where
    R: Resampler,
    S: RoundTripSink<T, C>,
    T: ImageDtype + num_traits::NumCast,
{
    let output = run_round_trip(src, resampler, config)?;
    sink.consume(src, &output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resize::{Bicubic, Bilinear};
    use approx::assert_relative_eq;
    use resample_image::ImageSize;

    fn textured(size: ImageSize) -> Result<Image<u8, 3>, ImageError> {
        Image::from_size_fn(size, |[row, col, ch]| {
            ((row * 37 + col * 91 + ch * 53 + (row * col) % 7 * 19) % 256) as u8
        })
    }

    #[test]
    fn report_values() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let original = Image::<u8, 1>::new(size, vec![10, 250])?;
        let reconstructed = Image::<u8, 1>::new(size, vec![13, 246])?;

        // no unsigned wrap-around when the reconstruction is darker
        let report = ErrorReport::compute(&original, &reconstructed)?;
        assert_relative_eq!(report.mean_absolute_error, 3.5);
        assert_relative_eq!(report.root_mean_square_error, 12.5f32.sqrt());
        assert_relative_eq!(report.l2_norm, 5.0);
        assert_eq!(
            report.to_string(),
            "MAE: 3.50, RMSE: 3.54, L2 norm: 5.00"
        );
        Ok(())
    }

    #[test]
    fn report_shape_mismatch() -> Result<(), ImageError> {
        let a = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 3,
            },
            0,
        )?;
        let b = Image::<u8, 1>::from_size_val(
            ImageSize {
                width: 4,
                height: 2,
            },
            0,
        )?;
        assert_eq!(
            ErrorReport::compute(&a, &b),
            Err(ImageError::InvalidImageSize(4, 3, 4, 2))
        );
        Ok(())
    }

    #[test]
    fn zero_cycles_is_single_resize() -> Result<(), ImageError> {
        let image = textured(ImageSize {
            width: 12,
            height: 8,
        })?;
        let config = RoundTripConfig::new(5);

        let output = run_round_trip(&image, &Bicubic::default(), &config)?;
        assert_eq!(output.report, None);
        assert_eq!(output.image, Bicubic::default().resize(&image, 5)?);
        Ok(())
    }

    #[test]
    fn measures_at_original_and_delivers_at_target() -> Result<(), ImageError> {
        let image = textured(ImageSize {
            width: 12,
            height: 8,
        })?;
        let config = RoundTripConfig::new(5).with_cycles(2);

        let output = run_round_trip(&image, &Bilinear, &config)?;

        let mut degraded = image.clone();
        for _ in 0..2 {
            let forward = Bilinear.resize(&degraded, 5)?;
            degraded = Bilinear.resize_back(&forward, image.size())?;
        }
        assert_eq!(
            output.report,
            Some(ErrorReport::compute(&image, &degraded)?)
        );
        assert_eq!(output.image, Bilinear.resize(&degraded, 5)?);
        assert_eq!(
            output.image.size(),
            ImageSize {
                width: 5,
                height: 3
            }
        );
        Ok(())
    }

    #[test]
    fn error_does_not_reset_with_more_cycles() -> Result<(), ImageError> {
        let image = textured(ImageSize {
            width: 16,
            height: 16,
        })?;

        // at a factor of two the even samples survive every cycle, so the
        // first cycle already reaches the fixed point
        for resampler_mae in [
            collect_mae(&image, &Bilinear, 8)?,
            collect_mae(&image, &Bicubic::default(), 8)?,
        ] {
            assert!(resampler_mae[0] > 0.0);
            for mae in &resampler_mae {
                assert_eq!(*mae, resampler_mae[0]);
            }
        }

        // non-integer factor
        for mae in collect_mae(&image, &Bilinear, 7)? {
            assert!(mae > 0.0);
        }
        Ok(())
    }

    fn collect_mae<R: Resampler>(
        image: &Image<u8, 3>,
        resampler: &R,
        new_width: usize,
    ) -> Result<Vec<f32>, ImageError> {
        (1..=4)
            .map(|n| -> Result<f32, ImageError> {
                let config = RoundTripConfig::new(new_width).with_cycles(n);
                let output = run_round_trip(image, resampler, &config)?;
                output
                    .report
                    .map(|r| r.mean_absolute_error)
                    .ok_or(ImageError::InvalidDimension(new_width, 0))
            })
            .collect()
    }

    #[test]
    fn aspect_drift_is_reported() -> Result<(), ImageError> {
        let image = textured(ImageSize {
            width: 10,
            height: 7,
        })?;
        let config = RoundTripConfig::new(3).with_cycles(1);

        // 10x7 -> 3x2 -> 10x6 cannot be compared with the original
        let res = run_round_trip(&image, &Bicubic::default(), &config);
        assert_eq!(res, Err(ImageError::InvalidImageSize(10, 7, 10, 6)));

        // bilinear returns to the exact original size
        let output = run_round_trip(&image, &Bilinear, &config)?;
        assert!(output.report.is_some());
        Ok(())
    }

    struct Collect {
        seen: Vec<(ImageSize, Option<ErrorReport>)>,
    }

    impl RoundTripSink<u8, 3> for Collect {
        type Error = ImageError;

        fn consume(
            &mut self,
            original: &Image<u8, 3>,
            output: &RoundTripOutput<u8, 3>,
        ) -> Result<(), Self::Error> {
            self.seen.push((original.size(), output.report));
            Ok(())
        }
    }

    #[test]
    fn sink_receives_output() -> Result<(), ImageError> {
        let image = textured(ImageSize {
            width: 6,
            height: 4,
        })?;
        let mut sink = Collect { seen: vec![] };

        run_round_trip_with_sink(&image, &Bilinear, &RoundTripConfig::new(3), &mut sink)?;
        run_round_trip_with_sink(
            &image,
            &Bilinear,
            &RoundTripConfig::new(3).with_cycles(1),
            &mut sink,
        )?;

        assert_eq!(sink.seen.len(), 2);
        assert_eq!(sink.seen[0], (image.size(), None));
        assert_eq!(sink.seen[1].0, image.size());
        assert!(sink.seen[1].1.is_some());
        Ok(())
    }
}
