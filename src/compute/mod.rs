//----------------------------------------
// compute mod
//----------------------------------------

pub use crate::power::compute_power::power;
pub use crate::sample_size::compute_ss::experiment_size;
pub use crate::sample_size::search::experiment_size_by_search;

/// Conventional Type I error rate
pub const DEFAULT_ALPHA: f64 = 0.05;
/// Conventional Type II error rate; power = 1 - beta = 0.80
pub const DEFAULT_BETA: f64 = 0.20;
