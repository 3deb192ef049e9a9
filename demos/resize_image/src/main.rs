use argh::FromArgs;

use rescale_resample::{resample_1d, FilterKind};
use rescale_scanline::{Scanline, ScanlineMut};

#[derive(FromArgs)]
/// Resize a synthetic gradient image with two separable 1D resampling passes
struct Args {
    /// output width in pixels
    #[argh(option, default = "256")]
    width: usize,

    /// output height in pixels
    #[argh(option, default = "192")]
    height: usize,

    /// filter kernel: box, triangle, cubic, lanczos3 or hann
    #[argh(option, default = "String::from(\"lanczos3\")")]
    filter: String,
}

const SRC_W: usize = 640;
const SRC_H: usize = 480;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args: Args = argh::from_env();
    let filter: FilterKind = args.filter.parse()?;

    // synthetic diagonal gradient
    let src: Vec<u8> = (0..SRC_H)
        .flat_map(|y| (0..SRC_W).map(move |x| (((x + y) * 255) / (SRC_W + SRC_H - 2)) as u8))
        .collect();

    log::info!(
        "resizing {SRC_W}x{SRC_H} -> {}x{} with {filter:?}",
        args.width,
        args.height
    );

    // horizontal pass: rows at stride 1
    let mut mid = vec![0u8; args.width * SRC_H];
    for y in 0..SRC_H {
        let row = Scanline::from_slice(&src[y * SRC_W..(y + 1) * SRC_W]);
        let mut dst = ScanlineMut::from_slice(&mut mid[y * args.width..(y + 1) * args.width]);
        resample_1d(&row, &mut dst, filter)?;
    }
    log::debug!("horizontal pass done");

    // vertical pass: columns at stride = row width
    let mut out = vec![0u8; args.width * args.height];
    for x in 0..args.width {
        let col = Scanline::new(&mid[x..], SRC_H, args.width)?;
        let mut dst = ScanlineMut::new(&mut out[x..], args.height, args.width)?;
        resample_1d(&col, &mut dst, filter)?;
    }
    log::debug!("vertical pass done");

    let (min, max) = out
        .iter()
        .fold((u8::MAX, u8::MIN), |(mn, mx), &v| (mn.min(v), mx.max(v)));

    println!(
        "resized {SRC_W}x{SRC_H} -> {}x{} with {filter:?}, sample range {min}..={max}",
        args.width, args.height
    );

    Ok(())
}
