//! Raw ADC readings and the per-sensor transfer functions.
//!
//! A transfer function turns a normalized reading into degrees Celsius. The
//! thermistor curve has singularities at both ends of the ADC range; inputs
//! near them are reported as [`SensorError::NumericDegenerate`] instead of
//! being allowed to produce NaN or infinities.

use crate::config::{
    ADC_FULL_SCALE,
    DEGENERATE_EPSILON_V,
    KELVIN_OFFSET,
    LM35_SCALE,
    R_SERIES,
    STEINHART_A,
    STEINHART_B,
    STEINHART_C,
    V_REF,
};
use crate::error::SensorError;

// =============================================================================
// Raw Reading
// =============================================================================

/// A normalized ADC conversion result in `[0.0, 1.0]`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub struct RawReading(f32);

impl RawReading {
    /// Wrap a normalized fraction, clamped to `[0.0, 1.0]`.
    pub fn from_fraction(fraction: f32) -> Self { Self(fraction.clamp(0.0, 1.0)) }

    /// Normalize a 12-bit conversion code.
    pub fn from_adc_code(code: u16) -> Self { Self::from_fraction(f32::from(code) / ADC_FULL_SCALE) }

    /// The normalized fraction.
    #[inline]
    pub const fn fraction(self) -> f32 { self.0 }

    /// Voltage at the ADC pin.
    #[inline]
    pub fn voltage(self) -> f32 { self.0 * V_REF }
}

// =============================================================================
// Transfer Functions
// =============================================================================

/// Conversion from a raw reading to degrees Celsius.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(target_arch = "arm", derive(defmt::Format))]
pub enum TransferFunction {
    /// Linear: `°C = fraction * 100`.
    Lm35,
    /// NTC thermistor in a divider with `R_SERIES`, Steinhart–Hart curve.
    Thermistor,
}

impl TransferFunction {
    /// Convert a reading to degrees Celsius.
    pub fn convert(
        self,
        raw: RawReading,
    ) -> Result<f32, SensorError> {
        match self {
            Self::Lm35 => Ok(lm35_celsius(raw)),
            Self::Thermistor => thermistor_celsius(raw),
        }
    }
}

/// LM35 transfer: linear in the normalized reading.
#[inline]
pub fn lm35_celsius(raw: RawReading) -> f32 { raw.fraction() * LM35_SCALE }

/// Thermistor resistance in ohms for a divider voltage.
///
/// `R = V·Rs / (Vref - V)`. Unbounded as `V` approaches `V_REF`; callers go
/// through [`thermistor_celsius`], which guards the input.
#[inline]
pub fn thermistor_resistance(voltage: f32) -> f32 { (voltage * R_SERIES) / (V_REF - voltage) }

/// Steinhart–Hart temperature in degrees Celsius for a thermistor resistance.
pub fn steinhart_hart_celsius(resistance: f32) -> f32 {
    let ln_r = libm::logf(resistance);
    1.0 / (STEINHART_A + STEINHART_B * ln_r + STEINHART_C * ln_r * ln_r * ln_r) - KELVIN_OFFSET
}

/// Thermistor transfer with the degenerate-input guard.
///
/// Rejects divider voltages within `DEGENERATE_EPSILON_V` of either rail and
/// any non-finite result.
pub fn thermistor_celsius(raw: RawReading) -> Result<f32, SensorError> {
    let voltage = raw.voltage();
    if voltage < DEGENERATE_EPSILON_V || V_REF - voltage < DEGENERATE_EPSILON_V {
        return Err(SensorError::NumericDegenerate { voltage });
    }

    let celsius = steinhart_hart_celsius(thermistor_resistance(voltage));
    if !celsius.is_finite() {
        return Err(SensorError::NumericDegenerate { voltage });
    }
    Ok(celsius)
}

// =============================================================================
// Unit Tests
// =============================================================================
