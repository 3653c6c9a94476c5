//! Fixed-capacity sample window with average and median.
//!
//! Each sensor task owns one window. Samples are appended until the window
//! holds `N` values; the owner then summarizes and clears it. Storage is a
//! `heapless::Vec`, so a window never allocates and never grows past `N`.

use heapless::Vec;

use crate::config::WINDOW_SIZE;
use crate::error::SensorError;

// =============================================================================
// Sample Window
// =============================================================================

/// The most recent samples of one sensor, in insertion order.
#[derive(Clone, Debug)]
pub struct SampleWindow<const N: usize = WINDOW_SIZE> {
    samples: Vec<f32, N>,
}

impl<const N: usize> SampleWindow<N> {
    /// Create an empty window.
    pub const fn new() -> Self { Self { samples: Vec::new() } }

    /// Append a sample at the end.
    ///
    /// The caller is expected to summarize a full window before pushing into
    /// it; a push into a full window is rejected and the window is unchanged.
    pub fn push(
        &mut self,
        value: f32,
    ) -> Result<(), SensorError> {
        self.samples.push(value).map_err(|_| SensorError::WindowFull)
    }

    /// Arithmetic mean of the held samples, or `0.0` when empty.
    pub fn average(&self) -> f32 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sum: f32 = self.samples.iter().sum();
        sum / self.samples.len() as f32
    }

    /// Median of the held samples, or `0.0` when empty.
    ///
    /// Sorts a copy, so the window keeps its capture order. For an even count
    /// the two middle values are averaged. NaN sorts last (`total_cmp`).
    pub fn median(&self) -> f32 {
        let len = self.samples.len();
        if len == 0 {
            return 0.0;
        }

        let mut sorted = [0.0f32; N];
        let sorted = &mut sorted[..len];
        sorted.copy_from_slice(&self.samples);
        sorted.sort_unstable_by(f32::total_cmp);

        let mid = len / 2;
        if len % 2 == 1 {
            sorted[mid]
        } else {
            (sorted[mid - 1] + sorted[mid]) / 2.0
        }
    }

    /// Compute `(average, median)` and empty the window.
    pub fn summarize(&mut self) -> (f32, f32) {
        let stats = (self.average(), self.median());
        self.clear();
        stats
    }

    /// Remove every sample.
    #[inline]
    pub fn clear(&mut self) { self.samples.clear(); }

    /// Number of samples held.
    #[inline]
    pub fn len(&self) -> usize { self.samples.len() }

    /// True when no sample is held.
    #[inline]
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }

    /// True when the window holds `N` samples.
    #[inline]
    pub fn is_full(&self) -> bool { self.samples.len() == N }

    /// Maximum number of samples.
    #[inline]
    pub const fn capacity(&self) -> usize { N }

    /// Held samples, oldest first.
    #[inline]
    pub fn as_slice(&self) -> &[f32] { &self.samples }
}

impl<const N: usize> Default for SampleWindow<N> {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
