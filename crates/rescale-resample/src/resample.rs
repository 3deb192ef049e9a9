use rescale_scanline::{Sample, Scanline, ScanlineMut};

use crate::error::ResampleError;
use crate::kernel::FilterKind;
use crate::parallel::{fill_samples, ExecutionStrategy};

/// Per-call resampling state derived once from the scanline lengths and the
/// selected kernel: the scale factor, the (possibly broadened) filter support
/// and the amplitude correction applied during minification.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ResamplePlan {
    scale: f64,
    fwidth: f64,
    fscale: f64,
}

impl ResamplePlan {
    fn new(in_len: usize, out_len: usize, filter: FilterKind) -> Result<Self, ResampleError> {
        if in_len == 0 {
            return Err(ResampleError::EmptySource);
        }

        let scale = out_len as f64 / in_len as f64;

        let mut fwidth = filter.support();
        let mut fscale = 1.0;

        // minification: h(x) -> h(x * scale) * scale
        if scale < 1.0 {
            fwidth /= scale; // broaden filter
            fscale = scale; // lower amplitude

            // round the box support up to a whole number of samples, otherwise
            // a fractional-width box beats against the sampling grid and
            // modulates intensity
            if filter == FilterKind::Box {
                fwidth = fwidth.ceil();
                fscale = 1.0 / (2.0 * fwidth);
            }
        }

        Ok(Self {
            scale,
            fwidth,
            fscale,
        })
    }

    /// Convolve the kernel centered at the input coordinate of output sample
    /// `x`, replicating edge samples for window indices outside the source.
    fn convolve<T: Sample>(&self, src: &Scanline<'_, T>, filter: FilterKind, x: usize) -> f64 {
        // inverse mapping from output space to input space
        let u = x as f64 / self.scale;

        // kernel extent in the input; the left bound keeps floor semantics
        // below zero so the clamp still reaches index 0, and ceiling
        // otherwise so no out-of-support sample enters the window
        let lo = u - self.fwidth;
        let left = if lo < 0.0 { lo.floor() } else { lo.ceil() } as i64;
        let right = (u + self.fwidth).floor() as i64;

        let last = src.len() as i64 - 1;

        let mut acc = 0.0;
        for i in left..=right {
            let sample = src.get(i.clamp(0, last) as usize).to_f64();
            acc += sample * filter.weight((u - i as f64) * self.fscale);
        }

        acc * self.fscale
    }
}

/// Resample a scanline from `src.len()` samples to `dst.len()` samples by
/// convolution with the selected filter kernel.
///
/// The output is a pure function of the source samples, the output length and
/// the kernel: callers resize a 2D image by invoking this once per row
/// (stride 1) and once per column (stride = row width).
///
/// # Arguments
///
/// * `src` - The source scanline.
/// * `dst` - The output scanline, fully overwritten by the call.
/// * `filter` - The filter kernel to convolve with.
///
/// # Errors
///
/// Returns an error if the source scanline is empty. An empty output
/// scanline is valid and writes nothing.
///
/// # Example
///
/// ```
/// use rescale_resample::{resample_1d, FilterKind};
/// use rescale_scanline::{Scanline, ScanlineMut};
///
/// let src_data = [10u8, 20, 30, 40];
/// let mut dst_data = [0u8; 8];
///
/// let src = Scanline::from_slice(&src_data);
/// let mut dst = ScanlineMut::from_slice(&mut dst_data);
///
/// resample_1d(&src, &mut dst, FilterKind::Box).unwrap();
///
/// assert_eq!(dst_data, [10, 10, 20, 20, 30, 30, 40, 40]);
/// ```
pub fn resample_1d<T: Sample>(
    src: &Scanline<'_, T>,
    dst: &mut ScanlineMut<'_, T>,
    filter: FilterKind,
) -> Result<(), ResampleError> {
    resample_1d_with(src, dst, filter, ExecutionStrategy::Serial)
}

/// Resample a scanline with a selectable [`ExecutionStrategy`].
///
/// Identical contract and output to [`resample_1d`]; parallel strategies
/// distribute output samples over a Rayon pool, which pays off on long
/// scanlines with wide (minified sinc) kernels.
pub fn resample_1d_with<T: Sample>(
    src: &Scanline<'_, T>,
    dst: &mut ScanlineMut<'_, T>,
    filter: FilterKind,
    strategy: ExecutionStrategy,
) -> Result<(), ResampleError> {
    let plan = ResamplePlan::new(src.len(), dst.len(), filter)?;
    fill_samples(dst, strategy, |x| plan.convolve(src, filter, x))
}
