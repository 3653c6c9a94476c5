//! Per-sensor counters for the debug log.
//!
//! The sensor tasks bump these after every cycle; the values are printed over
//! defmt next to each window report. Relaxed atomics: the counters are
//! independent and only read for display.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::error::SensorError;
use crate::reader::CycleOutcome;

/// Running totals for one sensor.
pub struct SensorCounters {
    accepted: AtomicU32,
    degenerate: AtomicU32,
    read_failures: AtomicU32,
    reports: AtomicU32,
}

/// Point-in-time copy of [`SensorCounters`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct CounterSnapshot {
    /// Samples pushed into the window.
    pub accepted: u32,
    /// Samples dropped by the degenerate-input guard.
    pub degenerate: u32,
    /// Cycles skipped because the ADC read failed.
    pub read_failures: u32,
    /// Windows summarized.
    pub reports: u32,
}

impl SensorCounters {
    /// All counters at zero.
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU32::new(0),
            degenerate: AtomicU32::new(0),
            read_failures: AtomicU32::new(0),
            reports: AtomicU32::new(0),
        }
    }

    /// Account for the result of one [`SensorReader::cycle`](crate::reader::SensorReader::cycle).
    pub fn record(
        &self,
        result: &Result<CycleOutcome, SensorError>,
    ) {
        let sample = match result {
            Ok(outcome) => {
                if outcome.report.is_some() {
                    self.reports.fetch_add(1, Ordering::Relaxed);
                }
                outcome.sample
            }
            Err(e) => Err(*e),
        };
        let counter = match sample {
            Ok(_) => &self.accepted,
            Err(SensorError::NumericDegenerate { .. }) => &self.degenerate,
            Err(SensorError::ReadFailed) => &self.read_failures,
            Err(SensorError::WindowFull) => return,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Read all counters.
    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            accepted: self.accepted.load(Ordering::Relaxed),
            degenerate: self.degenerate.load(Ordering::Relaxed),
            read_failures: self.read_failures.load(Ordering::Relaxed),
            reports: self.reports.load(Ordering::Relaxed),
        }
    }
}

impl Default for SensorCounters {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Tests
// =============================================================================
