//! Worker pool management.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{unbounded, Receiver};

use crate::crypto::key::EntropyError;
use crate::crypto::{Address, SearchKey};
use crate::matcher::Pattern;

use super::cpu::CpuWorker;

/// Errors that prevent the pool from starting.
#[derive(Debug, thiserror::Error)]
pub enum PoolError {
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    #[error("failed to spawn worker thread: {0}")]
    Spawn(#[from] io::Error),
}

/// A successful match: the key and both derived addresses.
#[derive(Debug, Clone)]
pub struct MatchReport {
    /// The private key that produced the match
    pub private_key: SearchKey,
    /// The EOA address controlled by the key
    pub eoa: Address,
    /// The nonce-0 contract address that matched the pattern
    pub contract: Address,
    /// The ID of the worker that found it
    pub worker_id: usize,
}

/// Periodic throughput sample from one worker.
#[derive(Debug, Clone, Copy)]
pub struct SpeedReport {
    pub worker_id: usize,
    /// Total iterations this worker has performed
    pub iterations: u64,
    /// Addresses tested per second over the last window
    pub rate: f64,
}

/// Event stream from workers to the coordinator.
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    Match(MatchReport),
    Speed(SpeedReport),
}

/// Manages a pool of independent search workers.
///
/// Workers share nothing mutable except the stop flag and the event
/// channel; each owns its own randomly seeded key sequence. The channel is
/// unbounded so a worker's send never blocks its loop.
pub struct WorkerPool {
    /// Number of workers
    num_workers: usize,
    /// Worker thread handles (Option to allow taking during join)
    handles: Option<Vec<JoinHandle<()>>>,
    /// Channel receiver for worker events
    event_rx: Receiver<WorkerEvent>,
    /// Shared stop flag
    stop_flag: Arc<AtomicBool>,
}

impl WorkerPool {
    /// Seeds and spawns `num_workers` workers.
    ///
    /// Seeds are drawn from the OS random source up front so an entropy
    /// failure aborts startup instead of killing a worker mid-flight. A
    /// thread-spawn failure is returned immediately without waiting on
    /// workers that already started; the stop flag is set so they exit on
    /// their next iteration.
    pub fn spawn(
        num_workers: usize,
        pattern: &Pattern,
        speed_interval: u64,
    ) -> Result<Self, PoolError> {
        let (event_tx, event_rx) = unbounded();
        let stop_flag = Arc::new(AtomicBool::new(false));

        let seeds = (0..num_workers)
            .map(|_| SearchKey::random())
            .collect::<Result<Vec<_>, _>>()?;

        let mut handles = Vec::with_capacity(num_workers);
        for (id, key) in seeds.into_iter().enumerate() {
            let worker = CpuWorker::new(
                id,
                pattern.clone(),
                key,
                speed_interval,
                event_tx.clone(),
                stop_flag.clone(),
            );

            let spawned = thread::Builder::new()
                .name(format!("vanity-worker-{}", id))
                .spawn(move || worker.run());

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    stop_flag.store(true, Ordering::Relaxed);
                    return Err(PoolError::Spawn(e));
                }
            }
        }

        // Drop the extra sender so the channel closes once all workers exit
        drop(event_tx);

        Ok(Self {
            num_workers,
            handles: Some(handles),
            event_rx,
            stop_flag,
        })
    }

    /// Returns a blocking iterator over worker events.
    ///
    /// The iterator ends when every worker has exited and dropped its
    /// sender, which happens after [`stop`](Self::stop).
    pub fn events(&self) -> impl Iterator<Item = WorkerEvent> + '_ {
        self.event_rx.iter()
    }

    /// Signals all workers to stop.
    pub fn stop(&self) {
        self.stop_flag.store(true, Ordering::Relaxed);
    }

    /// Stops the pool and waits for every worker to exit.
    pub fn join(mut self) {
        self.stop();
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }

    /// Returns the number of workers.
    pub fn num_workers(&self) -> usize {
        self.num_workers
    }

    /// Returns a clone of the stop flag for external use (e.g. signal handlers).
    pub fn stop_flag_clone(&self) -> Arc<AtomicBool> {
        self.stop_flag.clone()
    }

    /// Returns true if the pool has been signaled to stop.
    pub fn is_stopped(&self) -> bool {
        self.stop_flag.load(Ordering::Relaxed)
    }
}

impl Drop for WorkerPool {
    fn drop(&mut self) {
        self.stop();
        // Wait for workers to finish if they haven't been joined
        if let Some(handles) = self.handles.take() {
            for handle in handles {
                let _ = handle.join();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_two_workers_independent_sequences() {
        // Empty pattern matches everything, so every iteration produces a
        // match event; collect a bounded number and check the streams.
        let pattern = Pattern::parse("").unwrap();
        let pool = WorkerPool::spawn(2, &pattern, 0).unwrap();

        let mut seen_keys = HashSet::new();
        let mut seen_workers = HashSet::new();

        for event in pool.events().take(50) {
            match event {
                WorkerEvent::Match(report) => {
                    assert!(report.worker_id < 2);
                    seen_workers.insert(report.worker_id);
                    // Each reported key must re-derive to the reported pair
                    let secp = secp256k1::Secp256k1::new();
                    let point = report.private_key.public_key(&secp).unwrap();
                    let eoa = crate::crypto::eoa_address(&point);
                    assert_eq!(eoa, report.eoa);
                    assert_eq!(crate::crypto::contract_address(&eoa), report.contract);
                    // Random seeds make collisions across workers
                    // astronomically unlikely; within a worker the sequence
                    // is strictly increasing.
                    assert!(seen_keys.insert(*report.private_key.as_bytes()));
                }
                WorkerEvent::Speed(_) => panic!("speed reporting was disabled"),
            }
        }

        assert_eq!(seen_keys.len(), 50);
        pool.join();
    }

    #[test]
    fn test_speed_events_flow_when_enabled() {
        let pattern = Pattern::parse("ffffffffff").unwrap(); // matches ~never
        let pool = WorkerPool::spawn(1, &pattern, 5).unwrap();

        let mut reports = 0;
        for event in pool.events().take(3) {
            match event {
                WorkerEvent::Speed(report) => {
                    assert_eq!(report.worker_id, 0);
                    assert_eq!(report.iterations % 5, 0);
                    assert!(report.rate > 0.0);
                    reports += 1;
                }
                WorkerEvent::Match(_) => {}
            }
        }
        assert!(reports > 0);
        pool.join();
    }

    #[test]
    fn test_stop_ends_event_stream() {
        let pattern = Pattern::parse("ffffffffff").unwrap();
        let pool = WorkerPool::spawn(2, &pattern, 0).unwrap();
        pool.stop();
        // With no matches possible and the flag set, the workers exit and
        // the channel closes; the iterator must terminate.
        for _ in pool.events() {}
        pool.join();
    }
}
