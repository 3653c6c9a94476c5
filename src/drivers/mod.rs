//! Hardware drivers for the temperature reporter.
//!
//! - `adc`: ADC channels behind the library's `AnalogInput` port
//! - `uart`: UART0 transmitter as the console sink

mod adc;
mod uart;

pub use adc::{AdcInput, SharedAdc};
pub use uart::{UartSink, console_uart_config};
