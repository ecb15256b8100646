//! Runtime configuration for the contract-address vanity search.

use clap::Parser;

/// Ethereum Contract-Address Vanity Search
///
/// Enumerates random-start private keys until the address of the first
/// contract deployed by the key's account (nonce 0) starts with PATTERN.
#[derive(Parser, Debug, Clone)]
#[command(name = "vanity-contract", author, version, about, long_about = None)]
pub struct Config {
    /// Hex prefix the contract address must start with (0-40 chars, 0-9 a-f)
    pub pattern: String,

    /// Report speed every N iterations per worker (0 = disabled)
    #[arg(short = 's', long = "speed-every", default_value_t = 0)]
    pub speed_interval: u64,

    /// Number of parallel workers
    #[arg(short = 'f', long = "workers", default_value_t = 1)]
    pub workers: usize,
}

impl Config {
    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // An empty pattern is legal (matches every address); length and
        // character checks happen again in Pattern::parse, but catching
        // them here keeps all usage errors on one path.
        if self.pattern.len() > 40 {
            return Err(ConfigError::InvalidPattern(
                "PATTERN must be 40 characters or less".into(),
            ));
        }

        if let Some(pos) = self.pattern.chars().position(|c| !c.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidPattern(format!(
                "PATTERN must contain only hex characters (0-9, a-f); invalid character at position {}",
                pos
            )));
        }

        if self.workers < 1 {
            return Err(ConfigError::InvalidWorkers(self.workers));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid worker count: {0} (must be at least 1)")]
    InvalidWorkers(usize),
}
