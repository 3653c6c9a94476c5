//! Console report formatting and the shared console.
//!
//! Values are printed as `<int>.<dd>` with both parts truncated toward zero
//! (see [`split_decimal`]). Every line is formatted into a fixed buffer first
//! and then handed to the sink in a single write while the console lock is
//! held, so lines from different tasks never interleave.
//!
//! # Line formats
//!
//! ```text
//! LM35 - Promedio: 20.00°C | Mediana: 20.00°C\n\r
//! Termistor - Leido: 142.91°C \n\r
//! ```

use core::cell::RefCell;
use core::fmt::{self, Write};

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;
use heapless::String;

use crate::config::LINE_CAPACITY;
use crate::error::ConsoleError;
use crate::reader::WindowReport;

/// First startup line, written before the sensor tasks are spawned.
pub const STARTUP_BANNER: &str = "Iniciando lectura de sensores...\n";

/// Second startup line, written once the sensor tasks are running.
pub const STARTUP_DONE: &str = "Arranque del programa\n\r";

/// One formatted console line.
pub type Line = String<LINE_CAPACITY>;

// =============================================================================
// Decimal Formatting
// =============================================================================

/// Split a value into an integer part and a two-digit decimal part.
///
/// Both parts are truncated toward zero and the decimal part is returned as
/// an absolute value, so `-3.456` gives `(-3, 45)` and `3.999` gives `(3, 99)`.
/// A negative value above `-1.0` has integer part `0` and prints without its
/// sign (`-0.5` gives `(0, 50)`). Out-of-range values saturate.
pub fn split_decimal(value: f32) -> (i32, u32) {
    let int_part = value as i32;
    let dec_part = ((value - int_part as f32) * 100.0) as i32;
    (int_part, dec_part.unsigned_abs())
}

/// `Display` adapter printing a value as `<int>.<dd>` per [`split_decimal`].
#[derive(Clone, Copy, Debug)]
pub struct Decimal(pub f32);

impl fmt::Display for Decimal {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let (int_part, dec_part) = split_decimal(self.0);
        write!(f, "{int_part}.{dec_part:02}")
    }
}

// =============================================================================
// Line Formatting
// =============================================================================

/// Format a window summary line.
pub fn temperature_line(
    name: &str,
    average: f32,
    median: f32,
) -> Result<Line, ConsoleError> {
    let mut line = Line::new();
    write!(
        line,
        "{name} - Promedio: {}°C | Mediana: {}°C\n\r",
        Decimal(average),
        Decimal(median)
    )
    .map_err(|_| ConsoleError::LineTooLong)?;
    Ok(line)
}

/// Format a single-reading echo line.
pub fn raw_line(
    name: &str,
    value: f32,
) -> Result<Line, ConsoleError> {
    let mut line = Line::new();
    write!(line, "{name} - Leido: {}°C \n\r", Decimal(value)).map_err(|_| ConsoleError::LineTooLong)?;
    Ok(line)
}

// =============================================================================
// Console
// =============================================================================

/// Text output shared by every task.
///
/// `M` selects the lock: `ThreadModeRawMutex` on the firmware, where every
/// task runs in thread mode, `CriticalSectionRawMutex` when writers live on
/// real threads. `W` is any `core::fmt::Write` sink.
pub struct Console<M: RawMutex, W> {
    sink: Mutex<M, RefCell<W>>,
}

impl<M: RawMutex, W: Write> Console<M, W> {
    /// Wrap an output sink.
    pub fn new(sink: W) -> Self {
        Self {
            sink: Mutex::new(RefCell::new(sink)),
        }
    }

    /// Write one complete line while holding the console lock.
    pub fn write_line(
        &self,
        line: &str,
    ) -> Result<(), ConsoleError> {
        self.sink
            .lock(|sink| sink.borrow_mut().write_str(line))
            .map_err(|_| ConsoleError::WriteFailed)
    }

    /// Print `"<name> - Promedio: ..°C | Mediana: ..°C"`.
    pub fn report_temperature(
        &self,
        name: &str,
        average: f32,
        median: f32,
    ) -> Result<(), ConsoleError> {
        let line = temperature_line(name, average, median)?;
        self.write_line(&line)
    }

    /// Print the summary of a completed window.
    pub fn report_window(
        &self,
        report: &WindowReport,
    ) -> Result<(), ConsoleError> {
        self.report_temperature(report.sensor, report.average, report.median)
    }

    /// Print `"<name> - Leido: ..°C"` for a single reading.
    pub fn report_raw(
        &self,
        name: &str,
        value: f32,
    ) -> Result<(), ConsoleError> {
        let line = raw_line(name, value)?;
        self.write_line(&line)
    }

    /// Consume the console and return its sink.
    pub fn into_inner(self) -> W { self.sink.into_inner().into_inner() }
}

// =============================================================================
// Unit Tests
// =============================================================================
