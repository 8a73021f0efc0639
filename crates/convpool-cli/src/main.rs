//! Command-line front end: decode an image, run the pipeline, print the
//! pooled feature maps.
//!
//! Decoding is delegated to the `image` crate; the core only ever sees a
//! raw 784-byte grayscale buffer.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use convpool_core::constants::{IMAGE_SIZE, NUM_KERNELS, POOL_OUTPUT_SIZE};
use convpool_core::{FeatureMaps, Image, forward};

#[derive(Parser, Debug)]
#[command(name = "convpool", version, about = "Fixed conv + max-pool feature extractor")]
struct Args {
    /// Path to a 28×28 grayscale image (png/bmp/pgm)
    image: PathBuf,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .target(env_logger::Target::Stderr)
    .init();

    let image = load_image(&args.image)?;
    let maps = forward(&image);
    print_feature_maps(&maps);

    Ok(())
}

/// Decode the file to 8-bit grayscale and hand the raw buffer to the core.
///
/// Anything that is not exactly 28×28 is rejected here, before the core
/// sees the buffer.
fn load_image(path: &PathBuf) -> Result<Image> {
    let decoded = image::open(path)
        .with_context(|| format!("failed to decode image {}", path.display()))?
        .to_luma8();

    let (width, height) = decoded.dimensions();
    if (width as usize, height as usize) != (IMAGE_SIZE, IMAGE_SIZE) {
        bail!("image must be {IMAGE_SIZE}x{IMAGE_SIZE}, got {width}x{height}");
    }
    log::debug!("decoded {} ({width}x{height})", path.display());

    Image::from_slice(decoded.as_raw()).map_err(Into::into)
}

/// Print the six pooled planes: rows of space-separated values, one blank
/// line between planes.
fn print_feature_maps(maps: &FeatureMaps) {
    println!("Conv Max Pool Output:");
    for k in 0..NUM_KERNELS {
        let plane = maps.plane(k);
        for j in 0..POOL_OUTPUT_SIZE {
            let row: Vec<String> = (0..POOL_OUTPUT_SIZE)
                .map(|i| plane[j * POOL_OUTPUT_SIZE + i].to_string())
                .collect();
            println!("{}", row.join(" "));
        }
        println!();
    }
}
