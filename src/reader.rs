//! Per-sensor sampling state machine.
//!
//! A [`SensorReader`] owns the window of one sensor. Each call to
//! [`SensorReader::cycle`] is one 100 ms tick of that sensor's task: read,
//! convert, check the window, push. The reader never sleeps and never writes
//! to the console; the task does both with what `cycle` returns.

use crate::config::{REPORT_TIMING, ReportTiming, WINDOW_SIZE};
use crate::error::SensorError;
use crate::transfer::{RawReading, TransferFunction};
use crate::window::SampleWindow;

// =============================================================================
// Analog Input Port
// =============================================================================

/// One analog channel, bound to a fixed pin at startup.
pub trait AnalogInput {
    /// Take one conversion.
    fn read(&mut self) -> Result<RawReading, SensorError>;
}

// =============================================================================
// Reports
// =============================================================================

/// Summary of one full window, ready to be printed.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct WindowReport {
    /// Console name of the sensor.
    pub sensor: &'static str,
    /// Mean of the window.
    pub average: f32,
    /// Median of the window.
    pub median: f32,
}

/// What one cycle produced.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CycleOutcome {
    /// The converted sample pushed this cycle, or why it was dropped.
    pub sample: Result<f32, SensorError>,
    /// Summary of the window that was completed, if any.
    pub report: Option<WindowReport>,
}

// =============================================================================
// Sensor Reader
// =============================================================================

/// Sampling state of one sensor.
pub struct SensorReader<const N: usize = WINDOW_SIZE> {
    name: &'static str,
    transfer: TransferFunction,
    timing: ReportTiming,
    window: SampleWindow<N>,
}

impl<const N: usize> SensorReader<N> {
    /// Create a reader with the build-time report timing.
    pub const fn new(
        name: &'static str,
        transfer: TransferFunction,
    ) -> Self {
        Self::with_timing(name, transfer, REPORT_TIMING)
    }

    /// Create a reader with an explicit report timing.
    pub const fn with_timing(
        name: &'static str,
        transfer: TransferFunction,
        timing: ReportTiming,
    ) -> Self {
        Self {
            name,
            transfer,
            timing,
            window: SampleWindow::new(),
        }
    }

    /// Console name of the sensor.
    #[inline]
    pub const fn name(&self) -> &'static str { self.name }

    /// Report timing in use.
    #[inline]
    pub const fn timing(&self) -> ReportTiming { self.timing }

    /// Samples collected toward the next report.
    #[inline]
    pub fn pending(&self) -> usize { self.window.len() }

    /// Run one cycle against an analog input.
    pub fn cycle<A: AnalogInput>(
        &mut self,
        input: &mut A,
    ) -> Result<CycleOutcome, SensorError> {
        let raw = input.read()?;
        self.process(raw)
    }

    /// Convert a reading and feed it to the window.
    ///
    /// A reading the transfer function rejects is not pushed, but the
    /// fullness check still runs: a complete window is reported on schedule
    /// whatever the new sample turns out to be.
    pub fn process(
        &mut self,
        raw: RawReading,
    ) -> Result<CycleOutcome, SensorError> {
        let sample = self.transfer.convert(raw);

        let report = match self.timing {
            ReportTiming::BeforePush => {
                let report = self.take_report_if_full();
                if let Ok(value) = sample {
                    self.window.push(value)?;
                }
                report
            }
            // The window is summarized as soon as it fills, so it is never
            // full at the start of a cycle
            ReportTiming::AfterPush => match sample {
                Ok(value) => {
                    self.window.push(value)?;
                    self.take_report_if_full()
                }
                Err(_) => None,
            },
        };

        Ok(CycleOutcome { sample, report })
    }

    fn take_report_if_full(&mut self) -> Option<WindowReport> {
        if !self.window.is_full() {
            return None;
        }
        let (average, median) = self.window.summarize();
        Some(WindowReport {
            sensor: self.name,
            average,
            median,
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::string::String as StdString;

    use embassy_sync::blocking_mutex::raw::NoopRawMutex;

    use super::*;
    use crate::config::{LM35_NAME, THERMISTOR_NAME};
    use crate::report::Console;

    /// Analog input replaying a script; `None` entries fail the read.
    struct ScriptedInput(VecDeque<Option<f32>>);

    impl ScriptedInput {
        fn constant(
            fraction: f32,
            count: usize,
        ) -> Self {
            Self((0..count).map(|_| Some(fraction)).collect())
        }
    }

    impl AnalogInput for ScriptedInput {
        fn read(&mut self) -> Result<RawReading, SensorError> {
            match self.0.pop_front() {
                Some(Some(fraction)) => Ok(RawReading::from_fraction(fraction)),
                _ => Err(SensorError::ReadFailed),
            }
        }
    }

    fn lm35(timing: ReportTiming) -> SensorReader { SensorReader::with_timing(LM35_NAME, TransferFunction::Lm35, timing) }

    /// Cycle numbers (1-based) that produced a report.
    fn report_cycles(
        reader: &mut SensorReader,
        input: &mut ScriptedInput,
        cycles: usize,
    ) -> std::vec::Vec<usize> {
        (1..=cycles)
            .filter(|_| reader.cycle(&mut *input).unwrap().report.is_some())
            .collect()
    }

    #[test]
    fn test_new_uses_build_timing() {
        let reader: SensorReader = SensorReader::new(LM35_NAME, TransferFunction::Lm35);
        assert_eq!(reader.timing(), REPORT_TIMING);
        assert_eq!(reader.name(), "LM35");
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_before_push_reports_on_cycle_after_fill() {
        let mut reader = lm35(ReportTiming::BeforePush);
        let mut input = ScriptedInput::constant(0.20, 31);

        for _ in 0..WINDOW_SIZE {
            assert_eq!(reader.cycle(&mut input).unwrap().report, None);
        }
        assert_eq!(reader.pending(), WINDOW_SIZE);

        let outcome = reader.cycle(&mut input).unwrap();
        let report = outcome.report.unwrap();
        assert_eq!(report.sensor, "LM35");
        assert_eq!(report.average, 20.0);
        assert_eq!(report.median, 20.0);
        // The 31st sample opens the next window
        assert_eq!(reader.pending(), 1);
    }

    #[test]
    fn test_after_push_reports_on_filling_cycle() {
        let mut reader = lm35(ReportTiming::AfterPush);
        let mut input = ScriptedInput::constant(0.20, 30);

        let cycles = report_cycles(&mut reader, &mut input, 30);
        assert_eq!(cycles, [30]);
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_report_cadence_is_one_per_window() {
        let mut reader = lm35(ReportTiming::BeforePush);
        let mut input = ScriptedInput::constant(0.5, 121);
        assert_eq!(report_cycles(&mut reader, &mut input, 121), [31, 61, 91, 121]);

        let mut reader = lm35(ReportTiming::AfterPush);
        let mut input = ScriptedInput::constant(0.5, 120);
        assert_eq!(report_cycles(&mut reader, &mut input, 120), [30, 60, 90, 120]);
    }

    #[test]
    fn test_report_covers_previous_window_only() {
        let mut reader = lm35(ReportTiming::BeforePush);
        // 30 samples ramping 1..=30 °C, then one outlier that must not be counted
        let mut script: VecDeque<Option<f32>> = (1..=30).map(|k| Some(k as f32 / 100.0)).collect();
        script.push_back(Some(0.99));
        let mut input = ScriptedInput(script);

        for _ in 0..WINDOW_SIZE {
            reader.cycle(&mut input).unwrap();
        }
        let report = reader.cycle(&mut input).unwrap().report.unwrap();
        assert!((report.average - 15.5).abs() < 1e-4);
        assert!((report.median - 15.5).abs() < 1e-4);
    }

    #[test]
    fn test_read_failure_skips_cycle() {
        let mut reader = lm35(ReportTiming::BeforePush);
        let mut input = ScriptedInput([Some(0.3), None, Some(0.3)].into_iter().collect());

        assert!(reader.cycle(&mut input).is_ok());
        assert_eq!(reader.cycle(&mut input), Err(SensorError::ReadFailed));
        assert!(reader.cycle(&mut input).is_ok());
        assert_eq!(reader.pending(), 2);
    }

    fn thermistor(timing: ReportTiming) -> SensorReader {
        SensorReader::with_timing(THERMISTOR_NAME, TransferFunction::Thermistor, timing)
    }

    #[test]
    fn test_degenerate_thermistor_sample_is_dropped() {
        let mut reader = thermistor(ReportTiming::BeforePush);

        let outcome = reader.process(RawReading::from_fraction(0.5)).unwrap();
        assert!((outcome.sample.unwrap() - 142.913).abs() < 0.01);

        let outcome = reader.process(RawReading::from_fraction(1.0)).unwrap();
        assert!(matches!(outcome.sample, Err(SensorError::NumericDegenerate { .. })));
        assert_eq!(outcome.report, None);
        assert_eq!(reader.pending(), 1);
    }

    #[test]
    fn test_full_window_reported_on_degenerate_cycle() {
        let mut reader = thermistor(ReportTiming::BeforePush);
        for _ in 0..WINDOW_SIZE {
            reader.process(RawReading::from_fraction(0.5)).unwrap();
        }

        // Divider stuck at the rail from here on
        let outcome = reader.process(RawReading::from_fraction(1.0)).unwrap();
        assert!(matches!(outcome.sample, Err(SensorError::NumericDegenerate { .. })));
        let report = outcome.report.unwrap();
        assert_eq!(report.sensor, "Termistor");
        assert!((report.average - 142.913).abs() < 0.01);
        assert!((report.median - 142.913).abs() < 0.01);
        assert_eq!(reader.pending(), 0);

        for _ in 0..300 {
            let outcome = reader.process(RawReading::from_fraction(1.0)).unwrap();
            assert!(outcome.sample.is_err());
            assert_eq!(outcome.report, None);
        }
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_degenerate_sample_in_after_push_timing() {
        let mut reader = thermistor(ReportTiming::AfterPush);
        for _ in 0..WINDOW_SIZE - 1 {
            reader.process(RawReading::from_fraction(0.5)).unwrap();
        }

        let outcome = reader.process(RawReading::from_fraction(0.0)).unwrap();
        assert!(outcome.sample.is_err());
        assert_eq!(outcome.report, None);
        assert_eq!(reader.pending(), WINDOW_SIZE - 1);

        let outcome = reader.process(RawReading::from_fraction(0.5)).unwrap();
        assert!(outcome.report.is_some());
        assert_eq!(reader.pending(), 0);
    }

    #[test]
    fn test_end_to_end_lm35_console_line() {
        let console: Console<NoopRawMutex, StdString> = Console::new(StdString::new());
        let mut reader = lm35(ReportTiming::BeforePush);
        let mut input = ScriptedInput::constant(0.20, 31);

        for cycle in 1..=31 {
            let outcome = reader.cycle(&mut input).unwrap();
            if let Some(report) = outcome.report {
                assert_eq!(cycle, 31);
                console.report_window(&report).unwrap();
            }
        }

        assert_eq!(console.into_inner(), "LM35 - Promedio: 20.00°C | Mediana: 20.00°C\n\r");
    }
}
