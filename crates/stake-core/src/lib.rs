//! Application core for the stake submission client.
//!
//! Takes the three free-text form inputs (token mint, pool address, amount)
//! plus the connected signer, validates them, and produces the stake
//! instruction defined by `sol-tx`. The submission flow in [`submit`] hands
//! the compiled transaction to external [`Wallet`]/[`Network`] collaborators
//! — this crate owns no transport and no rendering.

pub mod amount;
pub mod error;
pub mod submit;
pub mod types;

pub use amount::{parse_stake_amount, AMOUNT_SCALE};
pub use error::StakeError;
pub use submit::{submit_stake, submit_stake_with_status, Network, TransactionId, Wallet};
pub use types::{Cluster, Commitment, StakeConfig, StakeRequest, SubmissionStatus};

use sol_tx::transaction::{Instruction, Transaction};

/// Build the stake instruction from raw form input.
///
/// The amount is validated first — a malformed amount must fail before any
/// derivation work — then the three addresses, then the member/share PDAs
/// and both associated token accounts. Pure construction, no external calls.
pub fn build_stake_instruction(
    config: &StakeConfig,
    request: &StakeRequest,
    signer: &str,
) -> Result<Instruction, StakeError> {
    let signer = sol_tx::parse_address(signer)?;
    build_instruction(config, request, &signer)
}

/// [`build_stake_instruction`] for a signer already in byte form (the
/// submission flow gets it from the wallet).
pub(crate) fn build_instruction(
    config: &StakeConfig,
    request: &StakeRequest,
    signer: &[u8; 32],
) -> Result<Instruction, StakeError> {
    let base_units = amount::parse_stake_amount(&request.amount)?;
    let mint = sol_tx::parse_address(&request.mint)?;
    let pool = sol_tx::parse_address(&request.pool)?;

    Ok(sol_tx::build_stake_instruction(
        &config.program,
        signer,
        &mint,
        &pool,
        base_units,
    )?)
}

/// Wrap the stake instruction in a single-instruction transaction with the
/// signer as fee payer.
pub fn build_stake_transaction(
    config: &StakeConfig,
    request: &StakeRequest,
    signer: &str,
    recent_blockhash: &[u8; 32],
) -> Result<Transaction, StakeError> {
    let signer = sol_tx::parse_address(signer)?;
    let instruction = build_instruction(config, request, &signer)?;
    Ok(Transaction::compile(
        &[instruction],
        &signer,
        recent_blockhash,
    )?)
}

/// Derive the member account address for a signer in a pool, as Base58 text.
pub fn derive_member_address(
    config: &StakeConfig,
    signer: &str,
    pool: &str,
) -> Result<String, StakeError> {
    let signer = sol_tx::parse_address(signer)?;
    let pool = sol_tx::parse_address(pool)?;
    let member = sol_tx::derive_member_address(&signer, &pool, &config.program)?;
    Ok(sol_tx::format_address(&member))
}

/// Derive the share account address for a signer's stake, as Base58 text.
pub fn derive_share_address(
    config: &StakeConfig,
    signer: &str,
    pool: &str,
    mint: &str,
) -> Result<String, StakeError> {
    let signer = sol_tx::parse_address(signer)?;
    let pool = sol_tx::parse_address(pool)?;
    let mint = sol_tx::parse_address(mint)?;
    let share = sol_tx::derive_share_address(&signer, &pool, &mint, &config.program)?;
    Ok(sol_tx::format_address(&share))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sol_tx::{STAKE_DISCRIMINANT, SYSTEM_PROGRAM_ID};

    const PROGRAM: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
    const SIGNER: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";
    const MINT: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";
    const POOL: &str = "ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL";

    fn config() -> StakeConfig {
        StakeConfig::new(PROGRAM, Cluster::Devnet).unwrap()
    }

    fn request(amount: &str) -> StakeRequest {
        StakeRequest {
            mint: MINT.into(),
            pool: POOL.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn builds_the_eight_account_instruction() {
        let ix = build_stake_instruction(&config(), &request("1"), SIGNER).unwrap();

        assert_eq!(ix.program_id, config().program);
        assert_eq!(ix.accounts.len(), 8);
        assert_eq!(ix.accounts[0].pubkey, sol_tx::parse_address(SIGNER).unwrap());
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
        assert_eq!(ix.accounts[7].pubkey, SYSTEM_PROGRAM_ID);

        // "1" scales to 1_000_000 base units.
        assert_eq!(ix.data[0], STAKE_DISCRIMINANT);
        assert_eq!(
            u64::from_le_bytes(ix.data[1..9].try_into().unwrap()),
            1_000_000
        );
    }

    #[test]
    fn malformed_mint_fails_with_invalid_address() {
        let mut req = request("1");
        req.mint = "not base58!".into();
        let err = build_stake_instruction(&config(), &req, SIGNER).unwrap_err();
        assert!(matches!(err, StakeError::InvalidAddress(_)));
    }

    #[test]
    fn malformed_pool_fails_with_invalid_address() {
        let mut req = request("1");
        req.pool = "1".into(); // wrong length
        let err = build_stake_instruction(&config(), &req, SIGNER).unwrap_err();
        assert!(matches!(err, StakeError::InvalidAddress(_)));
    }

    #[test]
    fn malformed_signer_fails_with_invalid_address() {
        let err = build_stake_instruction(&config(), &request("1"), "bogus").unwrap_err();
        assert!(matches!(err, StakeError::InvalidAddress(_)));
    }

    #[test]
    fn amount_is_checked_before_addresses() {
        // Bad amount AND bad addresses: the amount error must win.
        let req = StakeRequest {
            mint: "garbage".into(),
            pool: "garbage".into(),
            amount: "abc".into(),
        };
        let err = build_stake_instruction(&config(), &req, SIGNER).unwrap_err();
        assert!(matches!(err, StakeError::InvalidAmount(_)));
    }

    #[test]
    fn member_address_is_deterministic_text() {
        let a = derive_member_address(&config(), SIGNER, POOL).unwrap();
        let b = derive_member_address(&config(), SIGNER, POOL).unwrap();
        assert_eq!(a, b);
        assert!(sol_tx::validate_address(&a).is_ok());
    }

    #[test]
    fn member_and_share_text_addresses_differ() {
        let member = derive_member_address(&config(), SIGNER, POOL).unwrap();
        let share = derive_share_address(&config(), SIGNER, POOL, MINT).unwrap();
        assert_ne!(member, share);
    }

    #[test]
    fn transaction_wraps_one_instruction_with_signer_as_fee_payer() {
        let blockhash = [0xABu8; 32];
        let tx = build_stake_transaction(&config(), &request("2.5"), SIGNER, &blockhash).unwrap();

        assert_eq!(tx.instructions.len(), 1);
        assert_eq!(tx.account_keys[0], sol_tx::parse_address(SIGNER).unwrap());
        assert_eq!(tx.num_required_signatures, 1);
        assert_eq!(tx.recent_blockhash, blockhash);

        let data = &tx.instructions[0].data;
        assert_eq!(
            u64::from_le_bytes(data[1..9].try_into().unwrap()),
            2_500_000
        );
    }
}
