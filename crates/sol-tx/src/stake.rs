//! The stake instruction: address derivation and wire layout.
//!
//! The staking program keeps one `member` account per (signer, pool) pair
//! and one `share` account per (signer, pool, mint) triple, both PDAs under
//! the program itself. Token balances move between the pool's and the
//! signer's associated token accounts.

use crate::error::TxError;
use crate::pda;
use crate::transaction::{AccountMeta, Instruction, SYSTEM_PROGRAM_ID};

/// SPL Token Program ID: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
pub const TOKEN_PROGRAM_ID: [u8; 32] = [
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
];

/// Associated Token Account Program ID: `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: [u8; 32] = [
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
];

/// Discriminant byte selecting the stake operation.
pub const STAKE_DISCRIMINANT: u8 = 0;

/// Seed prefix for the per-(signer, pool) member account.
pub const MEMBER_SEED: &[u8] = b"member";

/// Seed prefix for the per-(signer, pool, mint) share account.
pub const SHARE_SEED: &[u8] = b"share";

/// Derive the member PDA for a signer in a pool.
pub fn derive_member_address(
    signer: &[u8; 32],
    pool: &[u8; 32],
    program_id: &[u8; 32],
) -> Result<[u8; 32], TxError> {
    pda::find_program_address(&[MEMBER_SEED, signer, pool], program_id)
        .map(|(address, _bump)| address)
}

/// Derive the share PDA for a signer's stake of `mint` in a pool.
pub fn derive_share_address(
    signer: &[u8; 32],
    pool: &[u8; 32],
    mint: &[u8; 32],
    program_id: &[u8; 32],
) -> Result<[u8; 32], TxError> {
    pda::find_program_address(&[SHARE_SEED, signer, pool, mint], program_id)
        .map(|(address, _bump)| address)
}

/// Derive the associated token account for an owner + mint pair.
///
/// The ATA is a PDA with seeds `[owner, TOKEN_PROGRAM_ID, mint]` under the
/// Associated Token Account program.
pub fn derive_associated_token_address(
    owner: &[u8; 32],
    mint: &[u8; 32],
) -> Result<[u8; 32], TxError> {
    pda::find_program_address(
        &[owner.as_ref(), &TOKEN_PROGRAM_ID, mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Build a stake instruction for `amount` base units (smallest token unit).
///
/// The account order and flags are a wire contract with the staking program
/// and must never change:
///
/// 0. `[s, w]` signer
/// 1. `[]`     token mint
/// 2. `[]`     member PDA
/// 3. `[]`     pool
/// 4. `[w]`    pool's associated token account
/// 5. `[w]`    signer's associated token account
/// 6. `[w]`    share PDA
/// 7. `[]`     system program
///
/// Pure construction: no I/O, no side effects.
pub fn build_stake_instruction(
    program_id: &[u8; 32],
    signer: &[u8; 32],
    mint: &[u8; 32],
    pool: &[u8; 32],
    amount: u64,
) -> Result<Instruction, TxError> {
    let member = derive_member_address(signer, pool, program_id)?;
    let share = derive_share_address(signer, pool, mint, program_id)?;
    let pool_tokens = derive_associated_token_address(pool, mint)?;
    let signer_tokens = derive_associated_token_address(signer, mint)?;

    // Payload: discriminant byte + u64 LE amount = 9 bytes.
    let mut data = Vec::with_capacity(9);
    data.push(STAKE_DISCRIMINANT);
    data.extend_from_slice(&amount.to_le_bytes());

    Ok(Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*signer, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(member, false),
            AccountMeta::new_readonly(*pool, false),
            AccountMeta::new(pool_tokens, false),
            AccountMeta::new(signer_tokens, false),
            AccountMeta::new(share, false),
            AccountMeta::new_readonly(SYSTEM_PROGRAM_ID, false),
        ],
        data,
    })
}
