//! Cryptographic pipeline for contract-address vanity mining.
//!
//! This module provides:
//! - Private-key scalars with secure random seeding and in-place increment
//! - EOA address derivation using secp256k1 + Keccak-256
//! - Nonce-0 contract address derivation (the CREATE formula)

mod address;
pub mod contract;
pub mod key;

pub use address::Address;
pub use contract::{contract_address, eoa_address};
pub use key::SearchKey;

use tiny_keccak::{Hasher, Keccak};

/// Keccak-256 of arbitrary bytes (output 32 bytes).
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(input);
    let mut out = [0u8; 32];
    hasher.finalize(&mut out);
    out
}
