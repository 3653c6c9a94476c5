//! Error types shared by the sampling pipeline and the console.
//!
//! Nothing here is fatal: every error is logged by the firmware and the task
//! carries on with its next cycle.

/// Why a sensor cycle produced no sample.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum SensorError {
    /// The ADC conversion failed. Retried on the next cycle.
    ReadFailed,
    /// The transfer function was evaluated too close to a singularity, or its
    /// result is not finite. The sample is dropped.
    NumericDegenerate {
        /// Input voltage of the transfer function, in volts.
        voltage: f32,
    },
    /// A sample was pushed into a window that already holds `WINDOW_SIZE` values.
    WindowFull,
}

impl SensorError {
    /// Short description for log output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ReadFailed => "ADC read failed",
            Self::NumericDegenerate { .. } => "degenerate transfer input",
            Self::WindowFull => "sample window full",
        }
    }
}

/// Why a console line was not written.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum ConsoleError {
    /// The formatted line does not fit in `LINE_CAPACITY` bytes.
    LineTooLong,
    /// The output sink rejected the bytes.
    WriteFailed,
}

impl ConsoleError {
    /// Short description for log output.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::LineTooLong => "console line too long",
            Self::WriteFailed => "console write failed",
        }
    }
}
