pub mod bs;
pub mod normal;

/// Common traits used by the pricing models
pub mod traits {
    /// Standard normal cumulative distribution function, `Φ(z) = P(Z <= z)`.
    ///
    /// Implementations must be pure, return a value in `[0, 1]`, and be accurate
    /// to at least 1e-8 absolute for `|z| <= 10`.
    pub trait NormalCdf: Send + Sync {
        fn cdf(&self, z: f64) -> f64;
    }
}
