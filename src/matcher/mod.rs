//! Nibble-level prefix matching for 20-byte addresses.

mod pattern;

pub use pattern::{MatchResult, Pattern, PatternError};
