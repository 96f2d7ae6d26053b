//! Program-derived-address (PDA) search.
//!
//! A PDA is computed as
//! `SHA-256(seed_0 || .. || seed_n || bump || program_id || "ProgramDerivedAddress")`
//! where `bump` is the highest byte (searching 255 down to 0) for which the
//! digest is NOT a valid Ed25519 curve point. Being off-curve guarantees the
//! address can never collide with one backed by a private key.

use sha2::{Digest, Sha256};

use crate::error::TxError;

/// Maximum length of a single derivation seed, in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// Maximum number of seeds, including the bump.
pub const MAX_SEEDS: usize = 16;

/// The domain separator appended to every PDA derivation.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Find the PDA and bump for the given seeds and program.
///
/// Deterministic and pure: identical seeds + program always yield the
/// identical address. Fails with [`TxError::InvalidSeed`] if the seeds
/// exceed the protocol limits, or (astronomically unlikely) if no bump in
/// `255..=0` produces an off-curve point.
pub fn find_program_address(
    seeds: &[&[u8]],
    program_id: &[u8; 32],
) -> Result<([u8; 32], u8), TxError> {
    check_seeds(seeds)?;

    for bump in (0u8..=255).rev() {
        if let Some(address) = derive(seeds, bump, program_id) {
            return Ok((address, bump));
        }
    }

    Err(TxError::InvalidSeed(
        "no valid bump seed for the given seeds".into(),
    ))
}

/// Derive the PDA for an explicit bump.
///
/// Fails with [`TxError::InvalidSeed`] if the digest lands on the Ed25519
/// curve — callers normally obtain the bump from [`find_program_address`]
/// instead of guessing.
pub fn create_program_address(
    seeds: &[&[u8]],
    bump: u8,
    program_id: &[u8; 32],
) -> Result<[u8; 32], TxError> {
    check_seeds(seeds)?;

    derive(seeds, bump, program_id).ok_or_else(|| {
        TxError::InvalidSeed("derived address lies on the ed25519 curve".into())
    })
}

/// Enforce the protocol seed limits before any hashing.
fn check_seeds(seeds: &[&[u8]]) -> Result<(), TxError> {
    // The bump occupies one seed slot.
    if seeds.len() >= MAX_SEEDS {
        return Err(TxError::InvalidSeed(format!(
            "too many seeds: {} (max {} including the bump)",
            seeds.len(),
            MAX_SEEDS
        )));
    }
    for (i, seed) in seeds.iter().enumerate() {
        if seed.len() > MAX_SEED_LEN {
            return Err(TxError::InvalidSeed(format!(
                "seed {i} is {} bytes (max {MAX_SEED_LEN})",
                seed.len()
            )));
        }
    }
    Ok(())
}

/// Hash seeds + bump + program, returning `None` when the digest is a valid
/// curve point (the bump must then be decremented and retried).
fn derive(seeds: &[&[u8]], bump: u8, program_id: &[u8; 32]) -> Option<[u8; 32]> {
    let mut hasher = Sha256::new();
    for seed in seeds {
        hasher.update(seed);
    }
    hasher.update([bump]);
    hasher.update(program_id);
    hasher.update(PDA_MARKER);

    let digest: [u8; 32] = hasher.finalize().into();
    if is_on_curve(&digest) {
        return None;
    }
    Some(digest)
}

/// Whether 32 bytes decompress to a valid Ed25519 point.
pub(crate) fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngCore;

    const PROGRAM: [u8; 32] = [7u8; 32];

    #[test]
    fn derivation_is_deterministic() {
        let (a, bump_a) = find_program_address(&[b"member", &[1u8; 32]], &PROGRAM).unwrap();
        let (b, bump_b) = find_program_address(&[b"member", &[1u8; 32]], &PROGRAM).unwrap();
        assert_eq!(a, b);
        assert_eq!(bump_a, bump_b);
    }

    #[test]
    fn derivation_is_deterministic_for_random_seeds() {
        let mut rng = rand::thread_rng();
        for _ in 0..16 {
            let mut seed = [0u8; 32];
            rng.fill_bytes(&mut seed);
            let first = find_program_address(&[&seed], &PROGRAM).unwrap();
            let second = find_program_address(&[&seed], &PROGRAM).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn result_is_off_curve() {
        let (address, _) = find_program_address(&[b"share", &[2u8; 32]], &PROGRAM).unwrap();
        assert!(!is_on_curve(&address));
    }

    #[test]
    fn different_prefixes_give_different_addresses() {
        let signer = [0xAAu8; 32];
        let (member, _) = find_program_address(&[b"member", &signer], &PROGRAM).unwrap();
        let (share, _) = find_program_address(&[b"share", &signer], &PROGRAM).unwrap();
        assert_ne!(member, share);
    }

    #[test]
    fn different_programs_give_different_addresses() {
        let (a, _) = find_program_address(&[b"member"], &[1u8; 32]).unwrap();
        let (b, _) = find_program_address(&[b"member"], &[2u8; 32]).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn create_matches_find() {
        let seeds: &[&[u8]] = &[b"member", &[0x55u8; 32], &[0x66u8; 32]];
        let (found, bump) = find_program_address(seeds, &PROGRAM).unwrap();
        let created = create_program_address(seeds, bump, &PROGRAM).unwrap();
        assert_eq!(found, created);
    }

    #[test]
    fn oversized_seed_is_rejected() {
        let long = [0u8; MAX_SEED_LEN + 1];
        let err = find_program_address(&[&long], &PROGRAM).unwrap_err();
        assert!(matches!(err, TxError::InvalidSeed(_)));
    }

    #[test]
    fn too_many_seeds_are_rejected() {
        let seed: &[u8] = b"x";
        let seeds = vec![seed; MAX_SEEDS];
        let err = find_program_address(&seeds, &PROGRAM).unwrap_err();
        assert!(matches!(err, TxError::InvalidSeed(_)));
    }

    #[test]
    fn empty_seed_list_is_allowed() {
        assert!(find_program_address(&[], &PROGRAM).is_ok());
    }

    #[test]
    fn is_on_curve_accepts_basepoint() {
        // The Ed25519 basepoint in compressed form.
        let basepoint: [u8; 32] = [
            0x58, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
            0x66, 0x66, 0x66, 0x66,
        ];
        assert!(is_on_curve(&basepoint));
    }
}
