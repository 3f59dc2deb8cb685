//----------------------------------------
// distribution mod
//----------------------------------------
pub mod error;
pub mod std_normal;
pub mod types;
