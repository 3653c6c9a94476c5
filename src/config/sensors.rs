//! Analog front-end constants.
//!
//! Both sensors hang off the RP2350 ADC, referenced to the 3.3 V rail:
//!
//! ```text
//!   LM35 Vout ──────────────── GPIO27 (ADC1)
//!
//!   3.3 V ── 218 Ω ──┬── NTC ── GND
//!                    └──────────── GPIO28 (ADC2)
//! ```

// =============================================================================
// ADC
// =============================================================================

/// ADC reference voltage in volts.
pub const V_REF: f32 = 3.3;

/// Largest 12-bit conversion code. A code is normalized as `code / ADC_FULL_SCALE`.
pub const ADC_FULL_SCALE: f32 = 4095.0;

// =============================================================================
// LM35
// =============================================================================

/// Console name of the LM35 channel.
pub const LM35_NAME: &str = "LM35";

/// LM35 scale: °C per unit of normalized reading.
pub const LM35_SCALE: f32 = 100.0;

// =============================================================================
// Thermistor
// =============================================================================

/// Console name of the thermistor channel.
pub const THERMISTOR_NAME: &str = "Termistor";

/// Series resistor of the divider, in ohms.
pub const R_SERIES: f32 = 218.0;

/// Steinhart–Hart coefficients: `1/T = A + B·ln(R) + C·ln(R)³`, T in kelvin.
pub const STEINHART_A: f32 = 0.001_129_148;
pub const STEINHART_B: f32 = 0.000_234_125;
pub const STEINHART_C: f32 = 0.000_000_087_674_1;

/// 0 °C in kelvin.
pub const KELVIN_OFFSET: f32 = 273.15;

/// Divider voltages closer than this to either rail (in volts) are rejected.
///
/// At the top rail `R = V·Rs / (Vref - V)` diverges; at the bottom rail
/// `ln(R)` goes to minus infinity. One millivolt is a little more than one
/// ADC code (0.8 mV).
pub const DEGENERATE_EPSILON_V: f32 = 0.001;
