//! Dual Temperature Reporter Firmware for Raspberry Pi Pico 2 (RP2350)
//!
//! Samples an LM35 and an NTC thermistor every 100 ms and prints the average
//! and median of every 30-sample window on the UART console.
//!
//! # Architecture
//!
//! Three execution contexts on the embassy thread executor:
//! - `sensor_task` (LM35): owns its window and ADC channel
//! - `sensor_task` (Termistor): owns its window and ADC channel
//! - Main task: prints the startup lines, then parks forever
//!
//! The console is the only resource shared between tasks. It lives in a
//! `StaticCell` and is handed to each task as a `&'static` reference.
//!
//! # Wiring
//!
//! - **GPIO27 (ADC1)**: LM35 output
//! - **GPIO28 (ADC2)**: thermistor divider midpoint
//! - **GPIO0 (UART0 TX)**: console, 115200 8N1

#![cfg_attr(target_arch = "arm", no_std)]
#![cfg_attr(target_arch = "arm", no_main)]

// Modules only used in the binary (not testable on host)
#[cfg(target_arch = "arm")]
mod drivers;
#[cfg(target_arch = "arm")]
mod tasks;

#[cfg(target_arch = "arm")]
mod firmware {
    use core::cell::RefCell;

    use defmt::{info, warn};
    use embassy_executor::Spawner;
    use embassy_rp::adc::{self, Adc, Channel};
    use embassy_rp::gpio::Pull;
    use embassy_rp::uart::UartTx;
    use embassy_sync::blocking_mutex::Mutex;
    use static_cell::StaticCell;
    use thermo_window::config::{LM35_NAME, SAMPLE_PERIOD_MS, THERMISTOR_NAME, WINDOW_SIZE};
    use thermo_window::report::{STARTUP_BANNER, STARTUP_DONE};
    use thermo_window::{Console, SensorCounters, SensorReader, TransferFunction};
    use {defmt_rtt as _, panic_probe as _};

    use crate::drivers::{AdcInput, SharedAdc, UartSink, console_uart_config};
    use crate::tasks::{AppConsole, sensor_task};

    // Program metadata for `picotool info`
    #[unsafe(link_section = ".bi_entries")]
    #[used]
    pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
        embassy_rp::binary_info::rp_program_name!(c"thermo-window"),
        embassy_rp::binary_info::rp_program_description!(c"LM35 + thermistor 30-sample average/median reporter"),
        embassy_rp::binary_info::rp_cargo_version!(),
        embassy_rp::binary_info::rp_program_build_attribute!(),
    ];

    // =========================================================================
    // Shared State
    // =========================================================================

    static CONSOLE: StaticCell<AppConsole> = StaticCell::new();
    static ADC: StaticCell<SharedAdc> = StaticCell::new();

    /// Counters for the LM35 task.
    static LM35_COUNTERS: SensorCounters = SensorCounters::new();

    /// Counters for the thermistor task.
    static THERMISTOR_COUNTERS: SensorCounters = SensorCounters::new();

    #[embassy_executor::main]
    async fn main(spawner: Spawner) {
        info!("Thermo-window starting...");

        let p = embassy_rp::init(Default::default());

        // Console first, so the banner precedes anything the tasks print
        let uart = UartTx::new_blocking(p.UART0, p.PIN_0, console_uart_config());
        let console: &'static AppConsole = CONSOLE.init(Console::new(UartSink::new(uart)));
        if let Err(e) = console.write_line(STARTUP_BANNER) {
            warn!("startup banner not written: {}", e.as_str());
        }

        // One ADC, two channels
        let adc: &'static SharedAdc =
            ADC.init(Mutex::new(RefCell::new(Adc::new_blocking(p.ADC, adc::Config::default()))));
        let lm35_input = AdcInput::new(adc, Channel::new_pin(p.PIN_27, Pull::None));
        let thermistor_input = AdcInput::new(adc, Channel::new_pin(p.PIN_28, Pull::None));
        info!("ADC ready: LM35 on GPIO27, thermistor on GPIO28");

        let lm35 = SensorReader::new(LM35_NAME, TransferFunction::Lm35);
        let thermistor = SensorReader::new(THERMISTOR_NAME, TransferFunction::Thermistor);

        spawner.spawn(sensor_task(lm35, lm35_input, console, &LM35_COUNTERS)).unwrap();
        spawner
            .spawn(sensor_task(thermistor, thermistor_input, console, &THERMISTOR_COUNTERS))
            .unwrap();
        info!(
            "Sensor tasks spawned: {}-sample windows, one sample every {} ms",
            WINDOW_SIZE,
            SAMPLE_PERIOD_MS
        );

        if let Err(e) = console.write_line(STARTUP_DONE) {
            warn!("startup line not written: {}", e.as_str());
        }

        // Nothing left for the main context; keep it parked without spinning
        core::future::pending::<()>().await;
    }
}

/// Host builds only exist so `cargo test` can build every target.
#[cfg(not(target_arch = "arm"))]
fn main() {
    eprintln!("thermo-window is RP2350 firmware; build it with `--target thumbv8m.main-none-eabihf`");
    eprintln!("host unit tests: `cargo test --lib`");
}
