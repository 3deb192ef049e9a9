/// An error type for the scanline module.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ScanlineError {
    /// Error when the stride between samples is zero.
    #[error("Scanline stride must be >= 1")]
    InvalidStride,

    /// Error when the backing buffer is too short for the requested view.
    #[error("Backing buffer too short: the view needs {0} elements, got {1}")]
    BufferTooShort(usize, usize),
}
