use std::f64::consts::PI;

/// Normalized sinc, `sin(pi t) / (pi t)`, with the removable singularity at
/// `t = 0` defined as `1.0`. First zero crossing at `t = 1`.
pub(crate) fn sinc(t: f64) -> f64 {
    let t = t * PI;
    if t != 0.0 {
        t.sin() / t
    } else {
        1.0
    }
}

/// Box (nearest neighbor) kernel.
///
/// The support boundary is open on the left and closed on the right, so a
/// sample landing exactly halfway between two inputs is claimed by exactly
/// one of them.
pub(crate) fn box_weight(t: f64) -> f64 {
    if t > -0.5 && t <= 0.5 {
        1.0
    } else {
        0.0
    }
}

/// Triangle kernel (linear interpolation).
pub(crate) fn triangle_weight(t: f64) -> f64 {
    let t = t.abs();
    if t < 1.0 {
        1.0 - t
    } else {
        0.0
    }
}

/// Cubic convolution kernel with free parameter `A = -1`.
pub(crate) fn cubic_convolution_weight(t: f64) -> f64 {
    const A: f64 = -1.0;

    let t = t.abs();
    let t2 = t * t;
    let t3 = t2 * t;

    if t < 1.0 {
        (A + 2.0) * t3 - (A + 3.0) * t2 + 1.0
    } else if t < 2.0 {
        A * (t3 - 5.0 * t2 + 8.0 * t - 4.0)
    } else {
        0.0
    }
}

/// Lanczos3 kernel: sinc windowed by its own central lobe stretched to
/// radius 3.
pub(crate) fn lanczos3_weight(t: f64) -> f64 {
    let t = t.abs();
    if t < 3.0 {
        sinc(t) * sinc(t / 3.0)
    } else {
        0.0
    }
}

/// Hann-windowed sinc kernel. The window reaches zero at `radius`, which the
/// caller supplies from the per-variant support table.
pub(crate) fn hann_sinc_weight(t: f64, radius: f64) -> f64 {
    let t = t.abs();
    if t < radius {
        sinc(t) * (0.5 + 0.5 * (PI * t / radius).cos())
    } else {
        0.0
    }
}
