use rescale_scanline::ScanlineError;
use thiserror::Error;

/// Errors that can occur during a resample operation.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ResampleError {
    /// The source scanline has no samples.
    #[error("source scanline must contain at least one sample")]
    EmptySource,

    /// The filter name does not identify a known kernel.
    #[error("unknown filter kind: {0}")]
    UnknownFilter(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),

    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    ThreadPoolBuild(String),

    /// A scanline view could not be constructed.
    #[error(transparent)]
    Scanline(#[from] ScanlineError),
}
