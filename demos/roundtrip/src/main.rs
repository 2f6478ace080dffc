use argh::FromArgs;
use std::path::{Path, PathBuf};

use resample::image::{Image, ImageSize};
use resample::imgproc::{
    interpolation::DEFAULT_CUBIC_A,
    resize::{self, Bicubic, Bilinear, Resampler},
    roundtrip::{self, RoundTripConfig, RoundTripOutput, RoundTripSink},
};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Method {
    Bilinear,
    Bicubic,
    Compare,
}

impl std::str::FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bilinear" => Ok(Method::Bilinear),
            "bicubic" => Ok(Method::Bicubic),
            "compare" => Ok(Method::Compare),
            _ => Err(format!(
                "unknown method `{s}`, expected bilinear, bicubic or compare"
            )),
        }
    }
}

#[derive(FromArgs)]
/// Resize an image and measure the error accumulated over repeated resize cycles
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    image_path: PathBuf,

    /// directory where the output images are written
    #[argh(option, short = 'o', default = "PathBuf::from(\".\")")]
    output_dir: PathBuf,

    /// bilinear, bicubic or compare
    #[argh(option, short = 'm', default = "Method::Bicubic")]
    method: Method,

    /// the width of the resized image
    #[argh(option, short = 'w', default = "1000")]
    width: usize,

    /// the height of the resized image, bilinear without cycles only
    #[argh(option)]
    height: Option<usize>,

    /// sharpness of the cubic kernel
    #[argh(option, short = 'a', default = "DEFAULT_CUBIC_A")]
    cubic_a: f64,

    /// number of down/up resize cycles, zero for a single resize
    #[argh(option, short = 'n', default = "0")]
    num_cycles: usize,
}

/// Writes the round-trip output next to the original and logs the report.
struct PngSink {
    output_dir: PathBuf,
    name: &'static str,
}

impl PngSink {
    fn new(output_dir: &Path, name: &'static str) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            name,
        }
    }
}

impl RoundTripSink<u8, 3> for PngSink {
    type Error = Box<dyn std::error::Error>;

    fn consume(
        &mut self,
        original: &Image<u8, 3>,
        output: &RoundTripOutput<u8, 3>,
    ) -> Result<(), Self::Error> {
        match &output.report {
            Some(report) => log::info!("{}: {}", self.name, report),
            None => log::info!(
                "{}: single resize to {}, no error measured",
                self.name,
                output.image.size()
            ),
        }

        write_rgb8(&self.output_dir.join("original.png"), original)?;
        write_rgb8(
            &self.output_dir.join(format!("{}.png", self.name)),
            &output.image,
        )
    }
}

fn read_rgb8(path: &Path) -> Result<Image<u8, 3>, Box<dyn std::error::Error>> {
    let rgb = image::open(path)?.to_rgb8();
    let size = ImageSize {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
    };
    Ok(Image::new(size, rgb.into_raw())?)
}

fn write_rgb8(path: &Path, image: &Image<u8, 3>) -> Result<(), Box<dyn std::error::Error>> {
    let [width, height]: [u32; 2] = image.size().into();
    let rgb = image::RgbImage::from_raw(width, height, image.as_slice().to_vec())
        .ok_or("image buffer does not match its size")?;
    rgb.save(path)?;
    log::debug!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let env = env_logger::Env::default().default_filter_or("info");
    env_logger::init_from_env(env);

    let args: Args = argh::from_env();

    let image = read_rgb8(&args.image_path)?;
    log::info!("loaded {} with {}", args.image_path.display(), image.size());

    std::fs::create_dir_all(&args.output_dir)?;

    let config = RoundTripConfig::new(args.width).with_cycles(args.num_cycles);

    match args.method {
        Method::Bilinear => match args.height {
            Some(height) if args.num_cycles == 0 => {
                run_with_height(&image, args.width, height, &args.output_dir)?
            }
            Some(_) => return Err("--height cannot be combined with --num-cycles".into()),
            None => run(&image, &Bilinear, &config, &args.output_dir)?,
        },
        Method::Bicubic => run(
            &image,
            &Bicubic::new(args.cubic_a),
            &config,
            &args.output_dir,
        )?,
        Method::Compare => {
            let comparison = resize::compare_resamplers(&image, args.width, args.cubic_a)?;
            write_rgb8(&args.output_dir.join("original.png"), &image)?;
            write_rgb8(&args.output_dir.join("bilinear.png"), &comparison.bilinear)?;
            write_rgb8(&args.output_dir.join("bicubic.png"), &comparison.bicubic)?;
            log::info!("compared both resamplers at {}", comparison.bicubic.size());
        }
    }

    Ok(())
}

fn run<R: Resampler>(
    image: &Image<u8, 3>,
    resampler: &R,
    config: &RoundTripConfig,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut sink = PngSink::new(output_dir, resampler.name());
    roundtrip::run_round_trip_with_sink(image, resampler, config, &mut sink)
}

/// Bilinear resize to an explicit height, reported through the same sink.
fn run_with_height(
    image: &Image<u8, 3>,
    width: usize,
    height: usize,
    output_dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let output = RoundTripOutput {
        image: resize::resize_bilinear(image, width, Some(height))?,
        report: None,
    };
    PngSink::new(output_dir, Bilinear.name()).consume(image, &output)
}
