use std::str::FromStr;

use super::weights::{
    box_weight, cubic_convolution_weight, hann_sinc_weight, lanczos3_weight, triangle_weight,
};
use crate::error::ResampleError;

/// Filter kernel for the resample operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    /// Box kernel (nearest neighbor)
    Box,
    /// Triangle kernel (linear interpolation)
    Triangle,
    /// Cubic convolution kernel with `A = -1`
    CubicConvolution,
    /// Lanczos3 windowed sinc kernel
    Lanczos3,
    /// Hann windowed sinc kernel with an 8-sample footprint
    HannSinc4,
}

impl FilterKind {
    /// Support half-width of the kernel: the weight is zero for every offset
    /// past the support (at the support itself for the sinc-based kernels,
    /// which their windows pin to zero).
    pub fn support(self) -> f64 {
        match self {
            Self::Box => 0.5,
            Self::Triangle => 1.0,
            Self::CubicConvolution => 2.0,
            Self::Lanczos3 => 3.0,
            Self::HannSinc4 => 4.0,
        }
    }

    /// Evaluate the kernel weight at distance `t` from the kernel center.
    pub fn weight(self, t: f64) -> f64 {
        match self {
            Self::Box => box_weight(t),
            Self::Triangle => triangle_weight(t),
            Self::CubicConvolution => cubic_convolution_weight(t),
            Self::Lanczos3 => lanczos3_weight(t),
            Self::HannSinc4 => hann_sinc_weight(t, self.support()),
        }
    }
}

impl FromStr for FilterKind {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "box" => Ok(Self::Box),
            "triangle" => Ok(Self::Triangle),
            "cubic" | "cubic-convolution" => Ok(Self::CubicConvolution),
            "lanczos3" => Ok(Self::Lanczos3),
            "hann" | "hann-sinc4" => Ok(Self::HannSinc4),
            _ => Err(ResampleError::UnknownFilter(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const ALL: [FilterKind; 5] = [
        FilterKind::Box,
        FilterKind::Triangle,
        FilterKind::CubicConvolution,
        FilterKind::Lanczos3,
        FilterKind::HannSinc4,
    ];

    #[test]
    fn test_even_symmetry() {
        // the box kernel is the deliberate exception at |t| = 0.5
        for filter in ALL {
            for i in 0..100 {
                let t = 0.01 + i as f64 * 0.041;
                assert_relative_eq!(filter.weight(t), filter.weight(-t), epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_zero_at_and_beyond_support() {
        for filter in ALL {
            let support = filter.support();
            // strictly beyond the support on both sides
            for extra in [0.5, 2.0, 100.0] {
                assert_eq!(filter.weight(support + extra), 0.0, "{filter:?}");
                assert_eq!(filter.weight(-(support + extra)), 0.0, "{filter:?}");
            }
            // at the boundary itself; the box kernel's right boundary is closed
            assert_eq!(filter.weight(-support), 0.0, "{filter:?}");
            if filter == FilterKind::Box {
                assert_eq!(filter.weight(support), 1.0);
            } else {
                assert_eq!(filter.weight(support), 0.0, "{filter:?}");
            }
        }
    }

    #[test]
    fn test_unit_weight_at_center() {
        for filter in ALL {
            assert_relative_eq!(filter.weight(0.0), 1.0);
        }
    }

    #[test]
    fn test_parse_canonical_names() -> Result<(), ResampleError> {
        assert_eq!("box".parse::<FilterKind>()?, FilterKind::Box);
        assert_eq!("Triangle".parse::<FilterKind>()?, FilterKind::Triangle);
        assert_eq!("cubic".parse::<FilterKind>()?, FilterKind::CubicConvolution);
        assert_eq!("lanczos3".parse::<FilterKind>()?, FilterKind::Lanczos3);
        assert_eq!("hann".parse::<FilterKind>()?, FilterKind::HannSinc4);
        Ok(())
    }

    #[test]
    fn test_parse_unknown_name() {
        let res = "gaussian".parse::<FilterKind>();
        assert!(matches!(res, Err(ResampleError::UnknownFilter(_))));
    }
}
