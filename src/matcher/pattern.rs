//! Pattern matching implementation.

use crate::crypto::Address;

/// Errors from parsing a pattern string.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("invalid character at position {position}: {character:?}")]
    InvalidCharacter { position: usize, character: char },

    #[error("pattern must be 40 characters or less (got {0})")]
    TooLong(usize),
}

/// Result of a pattern match operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    /// Full match found
    Match,
    /// No match
    NoMatch,
}

impl MatchResult {
    #[inline]
    pub fn is_match(self) -> bool {
        matches!(self, MatchResult::Match)
    }
}

/// A compiled hex-prefix pattern, stored as nibbles for direct comparison
/// against address bytes without intermediate strings.
#[derive(Debug, Clone)]
pub struct Pattern {
    nibbles: Vec<u8>,
}

impl Pattern {
    /// Parses a hex string (0-40 chars, case insensitive) into a pattern.
    ///
    /// An empty string is a valid pattern and matches every address.
    pub fn parse(s: &str) -> Result<Self, PatternError> {
        if s.len() > 40 {
            return Err(PatternError::TooLong(s.len()));
        }

        let nibbles = s
            .chars()
            .enumerate()
            .map(|(position, character)| {
                character
                    .to_digit(16)
                    .map(|d| d as u8)
                    .ok_or(PatternError::InvalidCharacter {
                        position,
                        character,
                    })
            })
            .collect::<Result<Vec<u8>, _>>()?;

        Ok(Self { nibbles })
    }

    /// Number of nibbles in the pattern.
    pub fn len(&self) -> usize {
        self.nibbles.len()
    }

    /// Returns true for the empty pattern.
    pub fn is_empty(&self) -> bool {
        self.nibbles.is_empty()
    }

    /// Returns the pattern as a lowercase hex string.
    pub fn to_hex(&self) -> String {
        self.nibbles
            .iter()
            .map(|&n| char::from_digit(n as u32, 16).unwrap_or('0'))
            .collect()
    }

    /// Matches an address against this pattern, nibble by nibble.
    ///
    /// Nibble i of the address is the high half of byte i/2 for even i and
    /// the low half for odd i, so odd-length prefixes work.
    #[inline]
    pub fn matches(&self, address: &Address) -> MatchResult {
        let bytes = address.as_bytes();
        for (i, &expected) in self.nibbles.iter().enumerate() {
            let byte = bytes[i / 2];
            let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
            if nibble != expected {
                return MatchResult::NoMatch;
            }
        }
        MatchResult::Match
    }

    /// Returns the estimated difficulty (expected attempts per match).
    ///
    /// Each nibble has 16 possible values, so 16^n for an n-nibble pattern.
    pub fn estimated_difficulty(&self) -> u64 {
        16u64.saturating_pow(self.nibbles.len() as u32)
    }

    /// Returns a human-readable difficulty estimate.
    pub fn difficulty_description(&self) -> String {
        match self.estimated_difficulty() {
            0..=1_000 => "Very Easy (< 1 second)".into(),
            1_001..=100_000 => "Easy (seconds)".into(),
            100_001..=10_000_000 => "Medium (minutes)".into(),
            10_000_001..=1_000_000_000 => "Hard (hours)".into(),
            _ => "Very Hard (days or more)".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_address(hex_str: &str) -> Address {
        let bytes: [u8; 20] = hex::decode(hex_str).unwrap().try_into().unwrap();
        Address::from_bytes(bytes)
    }

    #[test]
    fn test_empty_pattern_matches_everything() {
        let pattern = Pattern::parse("").unwrap();
        assert!(pattern.is_empty());
        let addr = make_address("deadbeef00000000000000000000000000000000");
        assert!(pattern.matches(&addr).is_match());
        let addr = make_address("ffffffffffffffffffffffffffffffffffffffff");
        assert!(pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_prefix_match() {
        let pattern = Pattern::parse("dead").unwrap();
        let addr = make_address("deadbeef00000000000000000000000000000000");
        assert!(pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_prefix_no_match() {
        let pattern = Pattern::parse("dead").unwrap();
        let addr = make_address("beefdeadbeef0000000000000000000000000000");
        assert!(!pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_single_nibble_checks_high_half_only() {
        let pattern = Pattern::parse("a").unwrap();
        // 0xa5: high nibble a, low nibble arbitrary
        let addr = make_address("a500000000000000000000000000000000000000");
        assert!(pattern.matches(&addr).is_match());
        let addr = make_address("5a00000000000000000000000000000000000000");
        assert!(!pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_odd_length_prefix() {
        let pattern = Pattern::parse("abc").unwrap();
        let addr = make_address("abcd000000000000000000000000000000000000");
        assert!(pattern.matches(&addr).is_match());
        let addr = make_address("abdc000000000000000000000000000000000000");
        assert!(!pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_uppercase_pattern() {
        let pattern = Pattern::parse("DEAD").unwrap();
        let addr = make_address("deadbeef00000000000000000000000000000000");
        assert!(pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_invalid_character_reports_position() {
        match Pattern::parse("abxy") {
            Err(PatternError::InvalidCharacter {
                position,
                character,
            }) => {
                assert_eq!(position, 2);
                assert_eq!(character, 'x');
            }
            other => panic!("expected InvalidCharacter, got {:?}", other),
        }
    }

    #[test]
    fn test_too_long() {
        let long = "a".repeat(41);
        assert!(matches!(
            Pattern::parse(&long),
            Err(PatternError::TooLong(41))
        ));
    }

    #[test]
    fn test_full_length_pattern_allowed() {
        let full = "a".repeat(40);
        let pattern = Pattern::parse(&full).unwrap();
        assert_eq!(pattern.len(), 40);
        let addr = make_address("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
        assert!(pattern.matches(&addr).is_match());
    }

    #[test]
    fn test_difficulty() {
        let pattern = Pattern::parse("dead").unwrap();
        assert_eq!(pattern.estimated_difficulty(), 65536); // 16^4
    }
}
