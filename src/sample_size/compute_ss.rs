use crate::distribution::std_normal::std_normal_quantile;
use crate::error::AbcomputeErr;
use crate::inputs::{check_direction, check_unit_interval};

/// Computes the minimum per-group sample size at which a one-tailed
/// difference-in-proportions test detects a shift from `p_null` to `p_alt`
/// with power `1 - beta` at Type I error rate `alpha`.
/// Closed form: the required separation `p_alt - p_null` splits into the
/// distance from the null mean to the critical value (`z_alpha` null
/// standard errors) plus the distance from the critical value to the
/// alternative mean (`-z_beta` alternative standard errors); both standard
/// errors carry the same unknown n, which is solved for algebraically.
pub fn experiment_size(
    p_null: f64,
    p_alt: f64,
    alpha: f64,
    beta: f64,
) -> Result<u64, AbcomputeErr> {
    check_unit_interval("baseline rate", p_null)?;
    check_unit_interval("alternative rate", p_alt)?;
    check_unit_interval("alpha", alpha)?;
    check_unit_interval("beta", beta)?;
    check_direction(p_null, p_alt)?;

    let z_alpha = std_normal_quantile(1. - alpha)?;
    // Lower beta quantile, negative for beta < 0.5; it enters the numerator
    // as a subtraction, so it contributes a positive distance
    let z_beta = std_normal_quantile(beta)?;

    // Standard deviations of the difference in proportions as if n = 1
    let sd_null = (2. * p_null * (1. - p_null)).sqrt();
    let sd_alt = (p_null * (1. - p_null) + p_alt * (1. - p_alt)).sqrt();

    let n = ((z_alpha * sd_null - z_beta * sd_alt) / (p_alt - p_null)).powi(2);

    // Fractional sample counts aren't realizable, and rounding down would
    // under-size the experiment
    Ok(n.ceil() as u64)
}

#[cfg(test)]
mod tests {

    use super::*;
    use crate::compute::{DEFAULT_ALPHA, DEFAULT_BETA};
    use crate::power::compute_power::power;

    #[test]
    fn experiment_size_reference() {
        let n = experiment_size(0.1, 0.12, DEFAULT_ALPHA, DEFAULT_BETA)
            .expect("failed to compute experiment size");
        assert_eq!(n, 2863);
    }

    #[test]
    fn experiment_size_achieves_target_power() {
        let n = experiment_size(0.1, 0.12, 0.05, 0.2)
            .expect("failed to compute experiment size");
        let achieved =
            power(0.1, 0.12, n as f64, 0.05).expect("failed to compute power at solved n");
        assert!(achieved >= 0.8 - 0.000001);
    }

    #[test]
    fn experiment_size_is_minimal() {
        let n = experiment_size(0.1, 0.12, 0.05, 0.2)
            .expect("failed to compute experiment size");
        let under = power(0.1, 0.12, (n - 1) as f64, 0.05)
            .expect("failed to compute power below solved n");
        assert!(under < 0.8 + 0.000001);
    }

    #[test]
    fn stricter_alpha_needs_more_data() {
        let alphas = [0.1, 0.05, 0.01, 0.001];
        let sizes: Vec<u64> = alphas
            .iter()
            .map(|&alpha| {
                experiment_size(0.1, 0.12, alpha, 0.2)
                    .expect("failed to compute experiment size")
            })
            .collect();
        for pair in sizes.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn vanishing_effect_diverges() {
        let n = experiment_size(0.1, 0.1001, 0.05, 0.2)
            .expect("failed to compute experiment size");
        assert!(n > 100_000_000);
    }

    #[test]
    fn experiment_size_rejects_reversed_direction() {
        assert!(experiment_size(0.12, 0.1, 0.05, 0.2).is_err());
        assert!(experiment_size(0.1, 0.1, 0.05, 0.2).is_err());
    }

    #[test]
    fn experiment_size_rejects_bad_error_rates() {
        assert!(experiment_size(0.1, 0.12, 0., 0.2).is_err());
        assert!(experiment_size(0.1, 0.12, 0.05, 1.).is_err());
        if let Err(e) = experiment_size(0.1, 0.12, 0.05, -0.2) {
            assert_eq!(
                String::from(
                    "while validating design inputs: beta should be strictly \
                    between 0 and 1; got -0.2"
                ),
                format!("{}", e)
            );
        } else {
            panic!()
        }
    }
}
