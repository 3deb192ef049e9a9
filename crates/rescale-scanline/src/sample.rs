use num_traits::Bounded;

/// Trait for scanline sample types.
///
/// Convolution accumulates in `f64`; `from_f64` defines how the accumulated
/// value is stored back into the sample type. Integer sample types round to
/// nearest and clamp to their valid range, so a filter with negative lobes
/// (cubic convolution, the windowed sincs) cannot wrap around on overshoot.
///
/// Send and Sync are required so output samples can be filled in parallel.
pub trait Sample: Copy + Default + Send + Sync {
    /// Convert the sample to an `f64` for accumulation.
    fn to_f64(self) -> f64;

    /// Convert an accumulated `f64` back to the sample type.
    fn from_f64(v: f64) -> Self;
}

impl Sample for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        v as f32
    }
}

impl Sample for f64 {
    fn to_f64(self) -> f64 {
        self
    }

    fn from_f64(v: f64) -> Self {
        v
    }
}

impl Sample for u8 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        let min = <u8 as Bounded>::min_value() as f64;
        let max = <u8 as Bounded>::max_value() as f64;
        v.round().clamp(min, max) as u8
    }
}

impl Sample for u16 {
    fn to_f64(self) -> f64 {
        self as f64
    }

    fn from_f64(v: f64) -> Self {
        let min = <u16 as Bounded>::min_value() as f64;
        let max = <u16 as Bounded>::max_value() as f64;
        v.round().clamp(min, max) as u16
    }
}
