//! Private-key scalars for linear key-space enumeration.

use rand::rngs::OsRng;
use rand::RngCore;
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};

/// The OS random source failed to produce a seed.
#[derive(Debug, thiserror::Error)]
#[error("entropy source unavailable: {0}")]
pub struct EntropyError(#[from] rand::Error);

/// The scalar is 0 or not below the secp256k1 curve order.
///
/// Recoverable: the search loop skips the key and moves on to the next one.
#[derive(Debug, thiserror::Error)]
#[error("scalar out of range for secp256k1")]
pub struct InvalidScalar;

/// A candidate private key: a 32-byte big-endian scalar.
///
/// Each worker owns exactly one `SearchKey` for its whole run, seeded
/// randomly once and then incremented in place every iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchKey([u8; 32]);

impl SearchKey {
    /// Draws a fresh key from the OS random source.
    pub fn random() -> Result<Self, EntropyError> {
        let mut bytes = [0u8; 32];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Creates a key from raw bytes (big-endian scalar).
    #[inline]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the key as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Adds 1 to the key, treated as a 256-bit big-endian integer.
    ///
    /// Carry propagates from the last byte toward the first, stopping at the
    /// first byte that does not wrap. Exhaustion of the full 2^256 space is
    /// practically unreachable; the carry simply keeps moving left.
    #[inline]
    pub fn increment(&mut self) {
        for byte in self.0.iter_mut().rev() {
            let (val, overflow) = byte.overflowing_add(1);
            *byte = val;
            if !overflow {
                return;
            }
        }
    }

    /// Multiplies the secp256k1 base point by this scalar.
    ///
    /// Returns the affine public point as X (32 bytes) || Y (32 bytes),
    /// both big-endian. Fails with [`InvalidScalar`] if the key is 0 or
    /// not below the curve order; callers treat that as "no match" and
    /// continue with the next key.
    #[inline]
    pub fn public_key(&self, secp: &Secp256k1<All>) -> Result<[u8; 64], InvalidScalar> {
        let secret = SecretKey::from_slice(&self.0).map_err(|_| InvalidScalar)?;
        let public = PublicKey::from_secret_key(secp, &secret);

        // Uncompressed serialization is 0x04 || X || Y; drop the prefix byte.
        let serialized = public.serialize_uncompressed();
        let mut point = [0u8; 64];
        point.copy_from_slice(&serialized[1..]);
        Ok(point)
    }

    /// Returns the key as hex with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}
