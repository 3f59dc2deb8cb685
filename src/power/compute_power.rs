use crate::distribution::types::NormalApprox;
use crate::error::AbcomputeErr;
use crate::inputs::{check_direction, check_sample_size, check_unit_interval};

/// Computes the power of a one-tailed difference-in-proportions test:
/// the probability of detecting a shift from a baseline success rate of
/// `p_null` to an alternative rate of `p_alt`, with `n` observations per
/// group and a Type I error rate of `alpha`.
/// Both group proportions are approximated as normal, so the difference in
/// proportions is as well.
/// Only an increase can be detected (`p_alt` must exceed `p_null`); the
/// reversed direction is rejected rather than fed through the right-tailed
/// formulas, which would silently produce a meaningless result.
pub fn power(p_null: f64, p_alt: f64, n: f64, alpha: f64) -> Result<f64, AbcomputeErr> {
    check_unit_interval("baseline rate", p_null)?;
    check_unit_interval("alternative rate", p_alt)?;
    check_unit_interval("alpha", alpha)?;
    check_sample_size(n)?;
    check_direction(p_null, p_alt)?;

    //----------------------------------------
    // Null distribution of the difference
    //----------------------------------------
    // Under the null both groups share the baseline rate, so the difference
    // in sample proportions is centered at zero with pooled variance
    let se_null = (2. * p_null * (1. - p_null) / n).sqrt();
    let null_dist = NormalApprox::new(0.0, se_null)?;

    // Smallest difference that gets the null rejected at level alpha
    let p_crit = null_dist.quantile(1. - alpha)?;

    //----------------------------------------
    // Alternative distribution + power
    //----------------------------------------
    let se_alt = ((p_null * (1. - p_null) + p_alt * (1. - p_alt)) / n).sqrt();
    let alt_dist = NormalApprox::new(p_alt - p_null, se_alt)?;

    // Type II error is the mass of the alternative distribution at or below
    // the rejection threshold
    let beta = alt_dist.cdf(p_crit);
    Ok(1. - beta)
}
