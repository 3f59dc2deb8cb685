use crate::error::AbcomputeErr;
use crate::inputs::check_unit_interval;
use crate::power::compute_power::power;

/// Finds the smallest per-group sample size whose power reaches `1 - beta`
/// by searching over sample sizes directly, with `power` as the oracle.
/// Since power is monotone in n, the search doubles an upper bound until it
/// brackets the target, then bisects over the integers.
/// This is the brute-force counterpart to the closed form in
/// `experiment_size`; the two agree up to ceiling rounding.
pub fn experiment_size_by_search(
    p_null: f64,
    p_alt: f64,
    alpha: f64,
    beta: f64,
) -> Result<u64, AbcomputeErr> {
    check_unit_interval("beta", beta)?;
    let target = 1. - beta;

    // Bracket: grow until the target power is reached
    // power() validates the remaining inputs on the first call
    let mut upper: u64 = 1;
    while power(p_null, p_alt, upper as f64, alpha)? < target {
        upper *= 2;
    }
    let mut lower = upper / 2;

    // Bisect down to the smallest n at or above the target
    while lower + 1 < upper {
        let mid = (lower + upper) / 2;
        if power(p_null, p_alt, mid as f64, alpha)? < target {
            lower = mid;
        } else {
            upper = mid;
        }
    }
    Ok(upper)
}
