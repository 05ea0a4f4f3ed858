//! Standard normal CDF providers.
//!
//! Both providers evaluate `Φ(z) = 0.5 * erfc(-z / √2)`. The complementary
//! error function keeps full relative precision in the lower tail, where
//! `0.5 * (1 + erf(z / √2))` would cancel to zero.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

use crate::models::traits::NormalCdf;

/// CDF backed by `statrs`. This is the provider used by [`crate::price`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatrsNormal;

impl NormalCdf for StatrsNormal {
    #[inline]
    fn cdf(&self, z: f64) -> f64 {
        0.5 * erfc(-z / SQRT_2)
    }
}

/// CDF backed by the `libm` port of the musl math library.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LibmNormal;

impl NormalCdf for LibmNormal {
    #[inline]
    fn cdf(&self, z: f64) -> f64 {
        0.5 * libm::erfc(-z / SQRT_2)
    }
}
