//! Reconstruction and anti-aliasing filter kernels for scanline resampling.
//!
//! Each kernel is a pure, even-symmetric weighting function over a finite
//! support radius, selected through [`FilterKind`]:
//!
//! - **Box**: nearest neighbor, fastest, blocky under magnification
//! - **Triangle**: linear interpolation
//! - **CubicConvolution**: third-order reconstruction with a sharpening lobe
//! - **Lanczos3**: three-lobed windowed sinc
//! - **HannSinc4**: 8-point Hann-windowed sinc, the widest (and smoothest)
//!
//! The resampling engine in `crate::resample` evaluates the selected kernel
//! at arbitrary real offsets inside its support window.

mod filter;
mod weights;

pub use filter::FilterKind;
