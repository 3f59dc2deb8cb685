//----------------------------------------
// distribution mod types
//----------------------------------------

use crate::distribution::error::NormalDistErr;
use crate::error::AbcomputeErr;
use statrs::distribution::{ContinuousCDF, Normal};

/// Normal approximation to the sampling distribution of a difference in
/// group proportions, parameterized by its mean and standard error.
#[derive(Debug, Clone, Copy)]
pub struct NormalApprox {
    dist: Normal,
}

impl NormalApprox {
    pub fn new(mean: f64, se: f64) -> Result<Self, AbcomputeErr> {
        match Normal::new(mean, se) {
            Ok(dist) => Ok(NormalApprox { dist }),
            Err(_) => Err(NormalDistErr::InvalidScale(se).into()),
        }
    }

    pub fn cdf(&self, x: f64) -> f64 {
        self.dist.cdf(x)
    }

    pub fn quantile(&self, p: f64) -> Result<f64, AbcomputeErr> {
        if !(p > 0.0 && p < 1.0) {
            return Err(NormalDistErr::QuantileOutOfBounds(p).into());
        }
        Ok(self.dist.inverse_cdf(p))
    }
}
