//----------------------------------------
// Shared input validation
//----------------------------------------
use crate::error::AbcomputeErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InputErr {
    #[error("{name} should be strictly between 0 and 1; got {value}")]
    UnitIntervalOutOfBounds { name: &'static str, value: f64 },
    #[error("per-group sample size should be positive; got {0}")]
    NonPositiveSampleSize(f64),
    #[error(
        "alternative rate ({p_alt}) should exceed baseline rate ({p_null}); \
        the right-tailed formulation is only valid for an increase"
    )]
    WrongDirection { p_null: f64, p_alt: f64 },
}

impl Into<AbcomputeErr> for InputErr {
    fn into(self) -> AbcomputeErr {
        AbcomputeErr::Input(self)
    }
}

/// Checks that a probability-like quantity (success rate, alpha, beta) lies
/// strictly inside the unit interval. NaN fails the check.
pub fn check_unit_interval(name: &'static str, value: f64) -> Result<(), AbcomputeErr> {
    if !(value > 0.0 && value < 1.0) {
        return Err(InputErr::UnitIntervalOutOfBounds { name, value }.into());
    }
    Ok(())
}

pub fn check_sample_size(n: f64) -> Result<(), AbcomputeErr> {
    if !(n > 0.0) || !n.is_finite() {
        return Err(InputErr::NonPositiveSampleSize(n).into());
    }
    Ok(())
}

/// The critical-value and tail logic assume a right-tailed test, so the
/// reversed direction is rejected outright rather than silently mis-computed.
pub fn check_direction(p_null: f64, p_alt: f64) -> Result<(), AbcomputeErr> {
    if p_alt <= p_null {
        return Err(InputErr::WrongDirection { p_null, p_alt }.into());
    }
    Ok(())
}
