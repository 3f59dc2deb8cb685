use crate::distribution::error::NormalDistErr;
use crate::error::AbcomputeErr;
use statrs::distribution::{ContinuousCDF, Normal};

pub fn std_normal_cdf(z: f64) -> f64 {
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    std_normal.cdf(z)
}

/// Quantile (inverse CDF) of the standard normal distribution. Arguments are
/// restricted to the open unit interval; the closed-interval endpoints would
/// yield infinite z values, which are never useful for sizing.
pub fn std_normal_quantile(p: f64) -> Result<f64, AbcomputeErr> {
    if !(p > 0.0 && p < 1.0) {
        return Err(NormalDistErr::QuantileOutOfBounds(p).into());
    }
    let std_normal = Normal::new(0.0, 1.0).unwrap();
    Ok(std_normal.inverse_cdf(p))
}
