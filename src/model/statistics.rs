//! Standard normal primitives and the truncated-Gaussian moment functions
//! used by the Thurstone-Mosteller models.
//!
//! `v` / `w` correct the mean and variance for a one-sided truncation at `t`,
//! `vt` / `wt` do the same for the two-sided window `[-t, t]` used on ties.

use std::f64::consts::{PI, SQRT_2};

use statrs::function::erf::erfc_inv;

use crate::model::constants::{MACHINE_EPSILON, VT_DENOMINATOR_FLOOR};

/// Standard normal density.
pub fn pdf(x: f64) -> f64 {
    (-(x * x) / 2.0).exp() / (2.0 * PI).sqrt()
}

/// Standard normal cumulative distribution.
pub fn cdf(x: f64) -> f64 {
    0.5 * libm::erfc(-x / SQRT_2)
}

/// Inverse of [`cdf`]. Only meaningful for `p` in `(0, 1)`.
pub fn ppf(p: f64) -> f64 {
    -SQRT_2 * erfc_inv(2.0 * p)
}

pub fn v(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denom = cdf(xt);

    if denom < MACHINE_EPSILON {
        return -xt;
    }

    pdf(xt) / denom
}

pub fn w(x: f64, t: f64) -> f64 {
    let xt = x - t;
    let denom = cdf(xt);

    if denom < MACHINE_EPSILON {
        return if x < 0.0 { 1.0 } else { 0.0 };
    }

    let v = v(x, t);
    v * (v + xt)
}

pub fn vt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = cdf(t - xx) - cdf(-t - xx);

    if b < VT_DENOMINATOR_FLOOR {
        return if x < 0.0 { -x - t } else { -x + t };
    }

    let a = pdf(-t - xx) - pdf(t - xx);
    if x < 0.0 {
        a / b
    } else {
        -a / b
    }
}

pub fn wt(x: f64, t: f64) -> f64 {
    let xx = x.abs();
    let b = cdf(t - xx) - cdf(-t - xx);

    if b < MACHINE_EPSILON {
        return 1.0;
    }

    ((t - xx) * pdf(t - xx) + (t + xx) * pdf(-t - xx)) / b + vt(x, t) * vt(x, t)
}
