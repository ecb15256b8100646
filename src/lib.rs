//! # vanity-contract
//!
//! Brute-force search for an Ethereum private key whose first deployed
//! contract (nonce 0) gets an address starting with a chosen hex prefix.
//!
//! ## Architecture
//!
//! - `crypto`: Key enumeration and address derivation
//! - `matcher`: Nibble-level prefix matching
//! - `worker`: Parallel search workers and pool management
//! - `config`: Runtime configuration

pub mod config;
pub mod crypto;
pub mod matcher;
pub mod worker;

pub use config::Config;
pub use crypto::{Address, SearchKey};
pub use matcher::{MatchResult, Pattern};
pub use worker::{MatchReport, SpeedReport, WorkerEvent, WorkerPool};
