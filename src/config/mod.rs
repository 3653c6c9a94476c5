//! Application configuration.
//!
//! - `sampling`: Window size, sample period and report timing
//! - `sensors`: Analog front-end constants and transfer-function coefficients
//!
//! Everything here is compile-time. The only knobs are the Cargo features
//! `report-after-push` and `echo-raw`.

pub mod sampling;
pub mod sensors;

// Re-export at config level for convenience
pub use sampling::{ECHO_RAW_SAMPLES, LINE_CAPACITY, REPORT_TIMING, ReportTiming, SAMPLE_PERIOD_MS, WINDOW_SIZE};
pub use sensors::{
    ADC_FULL_SCALE,
    DEGENERATE_EPSILON_V,
    KELVIN_OFFSET,
    LM35_NAME,
    LM35_SCALE,
    R_SERIES,
    STEINHART_A,
    STEINHART_B,
    STEINHART_C,
    THERMISTOR_NAME,
    V_REF,
};
