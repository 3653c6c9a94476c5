//! UART console sink.
//!
//! Lines are written with a blocking transfer; at 115200 baud the longest
//! report line takes about 7.5 ms.

use core::fmt;

use embassy_rp::uart::{Blocking, Config, UartTx};

/// Console baud rate.
pub const CONSOLE_BAUDRATE: u32 = 115_200;

/// UART configuration for the console (8N1).
pub fn console_uart_config() -> Config {
    let mut config = Config::default();
    config.baudrate = CONSOLE_BAUDRATE;
    config
}

/// Transmit half of UART0, usable as a `core::fmt::Write` sink.
pub struct UartSink {
    tx: UartTx<'static, Blocking>,
}

impl UartSink {
    /// Wrap a blocking transmitter.
    pub fn new(tx: UartTx<'static, Blocking>) -> Self { Self { tx } }
}

impl fmt::Write for UartSink {
    fn write_str(
        &mut self,
        s: &str,
    ) -> fmt::Result {
        self.tx.blocking_write(s.as_bytes()).map_err(|_| fmt::Error)
    }
}
