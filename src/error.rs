//----------------------------------------
// Crate error type
//----------------------------------------
use crate::distribution::error::NormalDistErr;
use crate::inputs::InputErr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AbcomputeErr {
    #[error("while validating design inputs: {0}")]
    Input(InputErr),
    #[error("while evaluating normal distribution: {0}")]
    NormalDist(NormalDistErr),
}
