//! Sampling and reporting cadence.

// =============================================================================
// Window
// =============================================================================

/// Number of samples summarized per report.
pub const WINDOW_SIZE: usize = 30;

/// Delay between two samples of the same sensor, in milliseconds.
/// One report every `WINDOW_SIZE * SAMPLE_PERIOD_MS` = 3 s per sensor.
pub const SAMPLE_PERIOD_MS: u64 = 100;

// =============================================================================
// Report Timing
// =============================================================================

/// When the window is checked for fullness relative to the cycle's push.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ReportTiming {
    /// Check before pushing the new sample.
    ///
    /// A window that became full on cycle `k` is reported on cycle `k + 1`,
    /// and the sample read on that cycle opens the next window. This is the
    /// cadence the firmware has always had on the serial console.
    BeforePush,
    /// Check right after pushing: the window is reported on the cycle it fills.
    AfterPush,
}

/// Timing selected at build time.
#[cfg(not(feature = "report-after-push"))]
pub const REPORT_TIMING: ReportTiming = ReportTiming::BeforePush;

/// Timing selected at build time.
#[cfg(feature = "report-after-push")]
pub const REPORT_TIMING: ReportTiming = ReportTiming::AfterPush;

// =============================================================================
// Console
// =============================================================================

/// Echo each accepted sample as a `Leido` line (feature `echo-raw`).
pub const ECHO_RAW_SAMPLES: bool = cfg!(feature = "echo-raw");

/// Capacity of one formatted console line in bytes.
///
/// The longest report line ("Termistor", both values saturating the `i32`
/// integer and decimal parts, two-byte `°` signs) is 86 bytes.
pub const LINE_CAPACITY: usize = 96;
