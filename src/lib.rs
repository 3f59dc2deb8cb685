//----------------------------------------
// Root lib
//----------------------------------------
//! The purpose of this library is to provide utility functions for sizing
//! two-group A/B experiments with binary outcomes. It computes the power of
//! a one-tailed (right-tailed) difference-in-proportions test at a given
//! per-group sample size, and the minimum per-group sample size needed to
//! reach a target power, either in closed form or by searching over sample
//! sizes directly.

/// This module houses the public API for computing power and sample sizes
pub mod compute;
mod distribution;
/// This module contains error types
pub mod error;
mod inputs;
mod power;
mod sample_size;
