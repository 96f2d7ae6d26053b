use thiserror::Error;

use sol_tx::TxError;

#[derive(Debug, Error)]
pub enum StakeError {
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid seed: {0}")]
    InvalidSeed(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Transaction build failed: {0}")]
    TransactionBuild(String),

    #[error("Submission failed: {0}")]
    Submission(String),
}

impl From<TxError> for StakeError {
    fn from(e: TxError) -> Self {
        match e {
            TxError::InvalidAddress(m) => StakeError::InvalidAddress(m),
            TxError::InvalidSeed(m) => StakeError::InvalidSeed(m),
            TxError::TransactionBuild(m) => StakeError::TransactionBuild(m),
            // Signing and serialization belong to the external wallet side
            // of the submission boundary.
            TxError::Signing(m) | TxError::Serialization(m) => StakeError::Submission(m),
        }
    }
}
