//----------------------------------------
// power mod
//----------------------------------------
pub mod compute_power;
