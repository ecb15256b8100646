//! EOA and nonce-0 contract address derivation.
//!
//! Contract address (CREATE, first deployment of a fresh account):
//! - eoa = keccak256(X || Y)[12..32]
//! - address = keccak256(rlp([eoa, 0]))[12..32]
//!
//! The RLP payload for a 20-byte address and an empty (zero) nonce has a
//! fixed 23-byte shape, so it is built in place rather than through a
//! general RLP encoder.

use super::{keccak256, Address};

/// RLP length of the encoded [address, nonce] list payload:
/// 1 byte address string header + 20 address bytes + 1 byte empty nonce.
const RLP_PAYLOAD_LEN: u8 = 22;

/// Derives the EOA address from an uncompressed public point (X || Y).
#[inline]
pub fn eoa_address(public_key: &[u8; 64]) -> Address {
    let hash = keccak256(public_key);
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..32]);
    Address::from_bytes(bytes)
}

/// Derives the address of the first contract deployed by `eoa` (nonce 0).
#[inline]
pub fn contract_address(eoa: &Address) -> Address {
    let hash = keccak256(&rlp_deployer_nonce_zero(eoa));
    let mut bytes = [0u8; 20];
    bytes.copy_from_slice(&hash[12..32]);
    Address::from_bytes(bytes)
}

/// Builds rlp([eoa, 0]): list header, string header, address, empty string.
#[inline]
fn rlp_deployer_nonce_zero(eoa: &Address) -> [u8; 23] {
    let mut rlp = [0u8; 23];
    rlp[0] = 0xc0 + RLP_PAYLOAD_LEN;
    rlp[1] = 0x80 + 20;
    rlp[2..22].copy_from_slice(eoa.as_bytes());
    rlp[22] = 0x80; // nonce 0 encodes as the empty string
    rlp
}
