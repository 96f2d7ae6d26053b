//! Instruction and transaction types, plus the legacy wire format.
//!
//! ```text
//! Transaction:
//!   num_signatures          compact-u16
//!   signatures              64 bytes * num_signatures
//!   message:
//!     num_required_sigs     u8
//!     num_readonly_signed   u8
//!     num_readonly_unsigned u8
//!     num_accounts          compact-u16
//!     account_keys          32 bytes * num_accounts
//!     recent_blockhash      32 bytes
//!     num_instructions      compact-u16
//!     instructions[]        (see below)
//!
//! Instruction:
//!   program_id_index        u8
//!   num_accounts            compact-u16
//!   account_indices         u8 * num_accounts
//!   data_len                compact-u16
//!   data                    u8 * data_len
//! ```

use ed25519_dalek::Signer;
use zeroize::Zeroize;

use crate::error::TxError;

/// The System Program public key: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

/// One account reference inside an instruction. Position in the account
/// list is a protocol contract with the receiving program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

impl AccountMeta {
    /// A writable account reference.
    pub fn new(pubkey: [u8; 32], is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: true,
        }
    }

    /// A read-only account reference.
    pub fn new_readonly(pubkey: [u8; 32], is_signer: bool) -> Self {
        Self {
            pubkey,
            is_signer,
            is_writable: false,
        }
    }
}

/// A single request to an on-chain program: target program, ordered account
/// references, and an opaque byte payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub program_id: [u8; 32],
    pub accounts: Vec<AccountMeta>,
    pub data: Vec<u8>,
}

/// An instruction after compilation: account references replaced by u8
/// indices into the transaction's `account_keys`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledInstruction {
    pub program_id_index: u8,
    pub account_indices: Vec<u8>,
    pub data: Vec<u8>,
}

/// A compiled, unsigned transaction.
#[derive(Debug, Clone)]
pub struct Transaction {
    /// All account keys referenced by this transaction, in canonical order:
    ///   1. writable signers (fee payer first)
    ///   2. read-only signers
    ///   3. writable non-signers
    ///   4. read-only non-signers
    pub account_keys: Vec<[u8; 32]>,

    /// The first N accounts are signers.
    pub num_required_signatures: u8,
    /// How many of the signing accounts are read-only.
    pub num_readonly_signed: u8,
    /// How many of the non-signing accounts are read-only.
    pub num_readonly_unsigned: u8,

    /// Recent blockhash, obtained from the network.
    pub recent_blockhash: [u8; 32],

    pub instructions: Vec<CompiledInstruction>,
}

impl Transaction {
    /// Compile instructions into a transaction with a single fee payer.
    ///
    /// Deduplicates account references (merging signer/writable bits),
    /// orders them canonically, and rewrites each instruction's account
    /// list as indices. The fee payer always lands at index 0.
    pub fn compile(
        instructions: &[Instruction],
        fee_payer: &[u8; 32],
        recent_blockhash: &[u8; 32],
    ) -> Result<Self, TxError> {
        let mut entries: Vec<AccountMeta> = Vec::new();

        let mut merge = |meta: AccountMeta| {
            if let Some(entry) = entries.iter_mut().find(|e| e.pubkey == meta.pubkey) {
                entry.is_signer |= meta.is_signer;
                entry.is_writable |= meta.is_writable;
            } else {
                entries.push(meta);
            }
        };

        // The fee payer is always a writable signer and is inserted first,
        // so the stable sort below keeps it ahead of other writable signers.
        merge(AccountMeta::new(*fee_payer, true));
        for ix in instructions {
            for meta in &ix.accounts {
                merge(meta.clone());
            }
            // Program IDs are read-only non-signer accounts.
            merge(AccountMeta::new_readonly(ix.program_id, false));
        }

        // Canonical order; `sort_by_key` is stable, preserving insertion
        // order within each category.
        entries.sort_by_key(|e| match (e.is_signer, e.is_writable) {
            (true, true) => 0u8,
            (true, false) => 1,
            (false, true) => 2,
            (false, false) => 3,
        });

        let num_required_signatures = entries.iter().filter(|e| e.is_signer).count() as u8;
        let num_readonly_signed = entries
            .iter()
            .filter(|e| e.is_signer && !e.is_writable)
            .count() as u8;
        let num_readonly_unsigned = entries
            .iter()
            .filter(|e| !e.is_signer && !e.is_writable)
            .count() as u8;

        let account_keys: Vec<[u8; 32]> = entries.iter().map(|e| e.pubkey).collect();

        let index_of = |pubkey: &[u8; 32]| -> Result<u8, TxError> {
            account_keys
                .iter()
                .position(|k| k == pubkey)
                .map(|i| i as u8)
                .ok_or_else(|| TxError::TransactionBuild("account not in account keys".into()))
        };

        let mut compiled = Vec::with_capacity(instructions.len());
        for ix in instructions {
            let account_indices = ix
                .accounts
                .iter()
                .map(|meta| index_of(&meta.pubkey))
                .collect::<Result<Vec<u8>, TxError>>()?;

            compiled.push(CompiledInstruction {
                program_id_index: index_of(&ix.program_id)?,
                account_indices,
                data: ix.data.clone(),
            });
        }

        Ok(Self {
            account_keys,
            num_required_signatures,
            num_readonly_signed,
            num_readonly_unsigned,
            recent_blockhash: *recent_blockhash,
            instructions: compiled,
        })
    }

    /// Serialize the message — the bytes that get signed.
    pub fn message_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(256);

        buf.push(self.num_required_signatures);
        buf.push(self.num_readonly_signed);
        buf.push(self.num_readonly_unsigned);

        push_compact_u16(&mut buf, self.account_keys.len() as u16);
        for key in &self.account_keys {
            buf.extend_from_slice(key);
        }

        buf.extend_from_slice(&self.recent_blockhash);

        push_compact_u16(&mut buf, self.instructions.len() as u16);
        for ix in &self.instructions {
            buf.push(ix.program_id_index);
            push_compact_u16(&mut buf, ix.account_indices.len() as u16);
            buf.extend_from_slice(&ix.account_indices);
            push_compact_u16(&mut buf, ix.data.len() as u16);
            buf.extend_from_slice(&ix.data);
        }

        buf
    }

    /// Sign with a 32-byte Ed25519 seed and return the full wire bytes,
    /// ready for a `sendTransaction` RPC call.
    pub fn sign(&self, private_key: &[u8; 32]) -> Result<Vec<u8>, TxError> {
        if self.num_required_signatures != 1 {
            return Err(TxError::Signing(format!(
                "expected a single-signer transaction, found {} required signatures",
                self.num_required_signatures
            )));
        }

        let message = self.message_bytes();

        let mut seed = *private_key;
        let signing_key = ed25519_dalek::SigningKey::from_bytes(&seed);
        seed.zeroize();

        if self.account_keys[0] != signing_key.verifying_key().to_bytes() {
            return Err(TxError::Signing(
                "signing key does not match the fee payer".into(),
            ));
        }

        let signature = signing_key.sign(&message);

        let mut wire = Vec::with_capacity(1 + 64 + message.len());
        push_compact_u16(&mut wire, 1);
        wire.extend_from_slice(&signature.to_bytes());
        wire.extend_from_slice(&message);
        Ok(wire)
    }
}

/// Append a value in Solana's compact-u16 encoding (LEB128-style, 7 bits
/// per byte, at most 3 bytes).
pub fn push_compact_u16(buf: &mut Vec<u8>, value: u16) {
    let mut rest = value as u32;
    loop {
        let mut byte = (rest & 0x7f) as u8;
        rest >>= 7;
        if rest > 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if rest == 0 {
            break;
        }
    }
}
