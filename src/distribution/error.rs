//----------------------------------------
// Distribution errors
//----------------------------------------

use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NormalDistErr {
    #[error("arguments to quantile function should be strictly between 0 and 1; got {0}")]
    QuantileOutOfBounds(f64),
    #[error("normal scale parameter should be positive and finite; got {0}")]
    InvalidScale(f64),
}

impl Into<AbcomputeErr> for NormalDistErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::NormalDist(self)
    }
}
