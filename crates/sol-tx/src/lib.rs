//! Solana wire-format primitives for the staking client.
//!
//! This crate covers everything the stake submission flow needs below the
//! application layer: Base58 address parsing, program-derived-address (PDA)
//! search, the stake instruction layout, and manual transaction wire format
//! serialization — all without pulling in `solana-sdk` (which drags in tokio
//! and 200+ transitive dependencies).
//!
//! Instead we implement Solana's compact binary wire format by hand, using
//! `ed25519-dalek` for Ed25519 signing, `curve25519-dalek` for curve
//! membership checks, and `bs58` for Base58 encoding.

pub mod address;
pub mod error;
pub mod pda;
pub mod stake;
pub mod transaction;

// Re-export key public types for ergonomic imports.
pub use address::{format_address, parse_address, validate_address, ADDRESS_LEN};
pub use error::TxError;
pub use pda::{create_program_address, find_program_address, MAX_SEEDS, MAX_SEED_LEN};
pub use stake::{
    build_stake_instruction, derive_associated_token_address, derive_member_address,
    derive_share_address, ASSOCIATED_TOKEN_PROGRAM_ID, STAKE_DISCRIMINANT, TOKEN_PROGRAM_ID,
};
pub use transaction::{
    AccountMeta, CompiledInstruction, Instruction, Transaction, SYSTEM_PROGRAM_ID,
};
