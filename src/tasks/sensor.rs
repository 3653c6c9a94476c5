//! Periodic sensor task.
//!
//! One instance per sensor. Each instance owns its reader (and therefore its
//! window) and its ADC channel; the console and the counters are shared.

use defmt::{debug, info, warn};
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_time::Timer;
use thermo_window::config::{ECHO_RAW_SAMPLES, SAMPLE_PERIOD_MS};
use thermo_window::{Console, SensorCounters, SensorReader};

use crate::drivers::{AdcInput, UartSink};

/// The console as seen by every task.
///
/// All users run on the thread-mode executor, so the lock never has to mask
/// interrupts while a line is on the wire.
pub type AppConsole = Console<ThreadModeRawMutex, UartSink>;

/// Sample one sensor every `SAMPLE_PERIOD_MS` forever.
///
/// Nothing in the loop is fatal: failed reads and degenerate samples are
/// logged and counted, failed console writes are logged.
#[embassy_executor::task(pool_size = 2)]
pub async fn sensor_task(
    mut reader: SensorReader,
    mut input: AdcInput,
    console: &'static AppConsole,
    counters: &'static SensorCounters,
) {
    info!("{} task started (timing: {})", reader.name(), reader.timing());

    loop {
        let result = reader.cycle(&mut input);
        counters.record(&result);

        let sample = match result {
            Ok(outcome) => {
                if let Some(report) = outcome.report {
                    if let Err(e) = console.report_window(&report) {
                        warn!("{}: report not written: {}", report.sensor, e.as_str());
                    }
                    debug!("{} window: {} | {}", report.sensor, report, counters.snapshot());
                }
                outcome.sample
            }
            Err(e) => Err(e),
        };

        match sample {
            Ok(value) => {
                if ECHO_RAW_SAMPLES && let Err(e) = console.report_raw(reader.name(), value) {
                    warn!("{}: echo not written: {}", reader.name(), e.as_str());
                }
            }
            Err(e) => warn!("{}: sample skipped: {}", reader.name(), e),
        }

        Timer::after_millis(SAMPLE_PERIOD_MS).await;
    }
}
