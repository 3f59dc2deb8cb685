//----------------------------------------
// sample_size mod
//----------------------------------------
pub mod compute_ss;
pub mod search;
