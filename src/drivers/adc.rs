//! RP2350 ADC channels as [`AnalogInput`]s.
//!
//! The RP2350 has a single ADC multiplexed over its analog pins, so both
//! sensor tasks share one `Adc` behind a thread-mode mutex. The lock is held
//! for exactly one blocking conversion (~2 µs).

use core::cell::RefCell;

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use thermo_window::{AnalogInput, RawReading, SensorError};

/// The ADC peripheral, shared by every channel.
pub type SharedAdc = Mutex<ThreadModeRawMutex, RefCell<Adc<'static, Blocking>>>;

/// One ADC pin bound to the shared converter.
pub struct AdcInput {
    adc: &'static SharedAdc,
    channel: Channel<'static>,
}

impl AdcInput {
    /// Bind a channel to the shared ADC.
    pub fn new(
        adc: &'static SharedAdc,
        channel: Channel<'static>,
    ) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for AdcInput {
    fn read(&mut self) -> Result<RawReading, SensorError> {
        let channel = &mut self.channel;
        let code = self
            .adc
            .lock(|adc| adc.borrow_mut().blocking_read(channel))
            .map_err(|_| SensorError::ReadFailed)?;
        Ok(RawReading::from_adc_code(code))
    }
}
