use thiserror::Error;

#[derive(Debug, Error)]
pub enum PireneaError {
    #[error("invalid data root: {0}")]
    InvalidDataRoot(String),
    #[error("invalid setup code: {0} (expected P0, P1 or P2)")]
    InvalidSetupCode(String),
}
