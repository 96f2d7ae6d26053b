//! The submission flow and its external seams.
//!
//! Signing, broadcast and confirmation are properties of the host's wallet
//! and network client, not of this crate. [`Wallet`] and [`Network`] are the
//! narrow interfaces those collaborators implement; the flow here only
//! sequences the calls:
//!
//! `Building -> AwaitingSignature -> Submitted -> Confirmed | Failed`
//!
//! There are no retries, no program-log inspection, no cancellation, and no
//! de-duplication of concurrent submissions: a second request before the
//! first completes is simply a second, independent submission.

use sol_tx::transaction::Transaction;

use crate::error::StakeError;
use crate::types::{Commitment, StakeConfig, StakeRequest, SubmissionStatus};

/// A submitted transaction's identifier: the Base58 text of its signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionId(String);

impl TransactionId {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// The connected signing provider (browser wallet, hardware wallet, local
/// keypair). Signs the transaction and dispatches it in one step, the way
/// wallet adapters expose `sendTransaction`.
pub trait Wallet {
    /// Address of the connected signer.
    fn address(&self) -> Result<[u8; 32], StakeError>;

    /// Sign the compiled transaction and broadcast it.
    fn send_transaction(&self, tx: &Transaction) -> Result<TransactionId, StakeError>;
}

/// The network client: blockhash source and confirmation waiter.
pub trait Network {
    fn latest_blockhash(&self) -> Result<[u8; 32], StakeError>;

    /// Block until the transaction reaches `commitment`, or fail.
    fn confirm_transaction(
        &self,
        id: &TransactionId,
        commitment: Commitment,
    ) -> Result<(), StakeError>;
}

/// Build, sign-and-send, and confirm one stake request.
///
/// Confirmation is always requested at [`Commitment::Confirmed`]. Any
/// failure aborts the attempt; nothing is rolled back because nothing
/// partial exists on this side of the wallet boundary.
pub fn submit_stake(
    config: &StakeConfig,
    request: &StakeRequest,
    wallet: &dyn Wallet,
    network: &dyn Network,
) -> Result<TransactionId, StakeError> {
    submit_stake_with_status(config, request, wallet, network, |_| {})
}

/// [`submit_stake`], reporting each phase to `on_status` so a host UI can
/// render progress.
pub fn submit_stake_with_status(
    config: &StakeConfig,
    request: &StakeRequest,
    wallet: &dyn Wallet,
    network: &dyn Network,
    mut on_status: impl FnMut(SubmissionStatus),
) -> Result<TransactionId, StakeError> {
    let result = drive(config, request, wallet, network, &mut on_status);
    if result.is_err() {
        on_status(SubmissionStatus::Failed);
    }
    result
}

fn drive(
    config: &StakeConfig,
    request: &StakeRequest,
    wallet: &dyn Wallet,
    network: &dyn Network,
    on_status: &mut dyn FnMut(SubmissionStatus),
) -> Result<TransactionId, StakeError> {
    on_status(SubmissionStatus::Building);
    let signer = wallet.address()?;
    let instruction = crate::build_instruction(config, request, &signer)?;
    let blockhash = network.latest_blockhash()?;
    let tx = Transaction::compile(&[instruction], &signer, &blockhash)?;

    on_status(SubmissionStatus::AwaitingSignature);
    let id = wallet.send_transaction(&tx)?;

    on_status(SubmissionStatus::Submitted);
    network.confirm_transaction(&id, Commitment::Confirmed)?;

    on_status(SubmissionStatus::Confirmed);
    Ok(id)
}
