//! CPU worker: the derive -> match -> report -> increment loop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::Sender;
use secp256k1::Secp256k1;

use crate::crypto::{contract_address, eoa_address, SearchKey};
use crate::matcher::Pattern;

use super::{MatchReport, SpeedReport, WorkerEvent};

/// Throughput over a reporting window, guarding the zero-elapsed case.
#[inline]
fn throughput(iterations: u64, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        f64::INFINITY
    } else {
        iterations as f64 / secs
    }
}

/// Per-worker iteration counter that yields a throughput report every
/// `interval` iterations (0 disables reporting entirely).
#[derive(Debug)]
pub struct SpeedReporter {
    interval: u64,
    total: u64,
    since_report: u64,
    last_report: Instant,
}

impl SpeedReporter {
    pub fn new(interval: u64) -> Self {
        Self {
            interval,
            total: 0,
            since_report: 0,
            last_report: Instant::now(),
        }
    }

    /// Counts one iteration. Returns the throughput and total iteration
    /// count when a reporting window completes, resetting the window.
    #[inline]
    pub fn record_iteration(&mut self) -> Option<(u64, f64)> {
        self.total += 1;
        if self.interval == 0 {
            return None;
        }

        self.since_report += 1;
        if self.since_report < self.interval {
            return None;
        }

        let now = Instant::now();
        let rate = throughput(self.interval, now - self.last_report);
        self.last_report = now;
        self.since_report = 0;
        Some((self.total, rate))
    }
}

/// A CPU worker that enumerates private keys and tests the resulting
/// nonce-0 contract address against the pattern.
pub struct CpuWorker {
    /// Worker ID
    id: usize,
    /// The pattern to match against
    pattern: Pattern,
    /// The key sequence, owned exclusively by this worker
    key: SearchKey,
    /// Channel to send match and speed events
    event_tx: Sender<WorkerEvent>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
    /// Iteration counter and throughput window
    speed: SpeedReporter,
}

impl CpuWorker {
    /// Creates a new CPU worker seeded with `key`.
    pub fn new(
        id: usize,
        pattern: Pattern,
        key: SearchKey,
        speed_interval: u64,
        event_tx: Sender<WorkerEvent>,
        stop_flag: Arc<AtomicBool>,
    ) -> Self {
        Self {
            id,
            pattern,
            key,
            event_tx,
            stop_flag,
            speed: SpeedReporter::new(speed_interval),
        }
    }

    /// Runs the worker loop until the stop flag is set.
    ///
    /// Each iteration: scalar-multiply, hash to the EOA address, hash the
    /// RLP buffer to the contract address, compare nibbles, report on a
    /// match, then step to the next key. Keys outside (0, curve order) are
    /// skipped; the hashing pipeline never sees them.
    pub fn run(mut self) {
        let secp = Secp256k1::new();

        while !self.stop_flag.load(Ordering::Relaxed) {
            if let Ok(point) = self.key.public_key(&secp) {
                let eoa = eoa_address(&point);
                let contract = contract_address(&eoa);

                if self.pattern.matches(&contract).is_match() {
                    let report = MatchReport {
                        private_key: self.key,
                        eoa,
                        contract,
                        worker_id: self.id,
                    };
                    // Ignore send failure: the coordinator has gone away
                    // and the stop flag will end the loop shortly.
                    let _ = self.event_tx.send(WorkerEvent::Match(report));
                }
            }

            if let Some((iterations, rate)) = self.speed.record_iteration() {
                let report = SpeedReport {
                    worker_id: self.id,
                    iterations,
                    rate,
                };
                let _ = self.event_tx.send(WorkerEvent::Speed(report));
            }

            self.key.increment();
        }
    }

    /// Returns the worker ID.
    pub fn id(&self) -> usize {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_throughput_one_second_window() {
        let rate = throughput(100_000, Duration::from_secs(1));
        assert_eq!(rate, 100_000.0);
    }

    #[test]
    fn test_throughput_zero_elapsed_does_not_fault() {
        let rate = throughput(100_000, Duration::ZERO);
        assert!(rate.is_infinite());
    }

    #[test]
    fn test_reporter_fires_on_interval() {
        let mut reporter = SpeedReporter::new(3);
        assert!(reporter.record_iteration().is_none());
        assert!(reporter.record_iteration().is_none());
        let (total, rate) = reporter.record_iteration().expect("third tick reports");
        assert_eq!(total, 3);
        assert!(rate > 0.0);
        // Window resets
        assert!(reporter.record_iteration().is_none());
    }

    #[test]
    fn test_reporter_disabled_with_zero_interval() {
        let mut reporter = SpeedReporter::new(0);
        for _ in 0..1000 {
            assert!(reporter.record_iteration().is_none());
        }
    }
}
