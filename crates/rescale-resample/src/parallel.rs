use rayon::prelude::*;

use rescale_scanline::{Sample, ScanlineMut};

use crate::error::ResampleError;

/// Controls how a resample call is executed.
///
/// Every strategy produces identical output: each output sample depends only
/// on the read-only source scanline, never on other output samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// The right choice for short scanlines, where the overhead of
    /// parallelization outweighs the benefits.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to compute output samples in parallel.
    ParallelSamples,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant
    /// overhead. Use this primarily for benchmarking or specific isolation
    /// needs.
    Fixed(usize),
}

/// Fill every sample of `dst` from a function of its index.
///
/// Parallel strategies partition the backing buffer into per-sample strided
/// chunks, so each worker writes a disjoint output sample and elements
/// between samples are left untouched.
pub(crate) fn fill_samples<T: Sample>(
    dst: &mut ScanlineMut<'_, T>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize) -> f64 + Send + Sync,
) -> Result<(), ResampleError> {
    match strategy {
        ExecutionStrategy::Serial => {
            for x in 0..dst.len() {
                dst.set(x, T::from_f64(f(x)));
            }
        }
        ExecutionStrategy::ParallelSamples => par_fill(dst, &f),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ResampleError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ResampleError::ThreadPoolBuild(e.to_string()))?;

            pool.install(|| par_fill(dst, &f));
        }
    }
    Ok(())
}

fn par_fill<T: Sample>(dst: &mut ScanlineMut<'_, T>, f: &(impl Fn(usize) -> f64 + Send + Sync)) {
    let len = dst.len();
    let stride = dst.stride();

    // chunk x starts at flat index x * stride, where sample x lives
    dst.as_slice_mut()
        .par_chunks_mut(stride)
        .take(len)
        .enumerate()
        .for_each(|(x, chunk)| {
            chunk[0] = T::from_f64(f(x));
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serial_fill() -> Result<(), ResampleError> {
        let mut buf = [0.0f64; 4];
        let mut dst = ScanlineMut::from_slice(&mut buf);
        fill_samples(&mut dst, ExecutionStrategy::Serial, |x| x as f64 * 2.0)?;
        assert_eq!(buf, [0.0, 2.0, 4.0, 6.0]);
        Ok(())
    }

    #[test]
    fn test_parallel_fill_strided() -> Result<(), ResampleError> {
        let mut buf = [0u8; 7];
        let mut dst = ScanlineMut::new(&mut buf, 3, 3)?;
        fill_samples(&mut dst, ExecutionStrategy::ParallelSamples, |x| {
            x as f64 + 1.0
        })?;
        assert_eq!(buf, [1, 0, 0, 2, 0, 0, 3]);
        Ok(())
    }

    #[test]
    fn test_fixed_pool_fill() -> Result<(), ResampleError> {
        let mut buf = [0u8; 4];
        let mut dst = ScanlineMut::from_slice(&mut buf);
        fill_samples(&mut dst, ExecutionStrategy::Fixed(2), |x| x as f64)?;
        assert_eq!(buf, [0, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_fixed_zero_threads_rejected() {
        let mut buf = [0u8; 4];
        let mut dst = ScanlineMut::from_slice(&mut buf);
        let res = fill_samples(&mut dst, ExecutionStrategy::Fixed(0), |x| x as f64);
        assert!(matches!(res, Err(ResampleError::InvalidThreadCount(0))));
    }
}
