//! Base58 address parsing and formatting.
//!
//! Solana addresses are Base58-encoded 32-byte identifiers: Ed25519 public
//! keys for wallets, arbitrary off-curve points for PDAs. There is no
//! checksum and no hashing step — the decoded bytes ARE the address.

use crate::error::TxError;

/// Every on-chain address is exactly this many bytes.
pub const ADDRESS_LEN: usize = 32;

/// Decode a Base58 address string into its 32-byte representation.
///
/// Fails if the text is not valid Base58 or does not decode to exactly
/// 32 bytes.
pub fn parse_address(text: &str) -> Result<[u8; ADDRESS_LEN], TxError> {
    let bytes = bs58::decode(text)
        .into_vec()
        .map_err(|e| TxError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    bytes.try_into().map_err(|v: Vec<u8>| {
        TxError::InvalidAddress(format!("expected {ADDRESS_LEN} bytes, got {}", v.len()))
    })
}

/// Encode 32 address bytes as Base58 text.
pub fn format_address(bytes: &[u8; ADDRESS_LEN]) -> String {
    bs58::encode(bytes).into_string()
}

/// Check that a string is a well-formed address without keeping the bytes.
pub fn validate_address(text: &str) -> Result<(), TxError> {
    parse_address(text).map(|_| ())
}
