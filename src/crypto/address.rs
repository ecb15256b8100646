//! Ethereum address representation and utilities.

use std::fmt;

/// An Ethereum address (20 bytes). Used for both EOA and contract addresses.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Returns the address as raw bytes.
    #[inline]
    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with 0x prefix.
    pub fn to_hex_prefixed(&self) -> String {
        format!("0x{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.to_hex_prefixed())
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_prefixed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_output() {
        let bytes = [0u8; 20];
        let addr = Address::from_bytes(bytes);
        assert_eq!(addr.to_hex(), "0000000000000000000000000000000000000000");
        assert_eq!(
            addr.to_hex_prefixed(),
            "0x0000000000000000000000000000000000000000"
        );
    }

    #[test]
    fn test_display_is_prefixed() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xde;
        bytes[1] = 0xad;
        let addr = Address::from_bytes(bytes);
        assert_eq!(
            format!("{}", addr),
            "0xdead000000000000000000000000000000000000"
        );
    }
}
