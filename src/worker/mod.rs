//! Worker pool for parallel contract-address search.
//!
//! This module provides:
//! - Single-threaded CPU workers, each owning its own key sequence
//! - A pool that spawns workers and relays their events to the coordinator

mod cpu;
mod pool;

pub use cpu::{CpuWorker, SpeedReporter};
pub use pool::{MatchReport, PoolError, SpeedReport, WorkerEvent, WorkerPool};
