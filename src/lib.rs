//! Thermo-window library - testable modules for the dual temperature reporter.
//!
//! This library contains the core logic that can be tested on the host machine.
//! The binary (`main.rs`) uses this library and adds the embedded-specific code:
//! ADC and UART drivers, the embassy tasks and the defmt logging.
//!
//! # Pipeline
//!
//! ```text
//! AnalogInput ──► SensorReader ──► SampleWindow ──► WindowReport ──► Console
//!   (ADC pin)     (transfer fn)    (30 samples)     (avg, median)    (UART, locked)
//! ```
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib --target x86_64-unknown-linux-gnu  # Linux/macOS
//! cargo test --lib --target x86_64-pc-windows-msvc    # Windows
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the standard
//! test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]
// Crate-level lints
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

// === Pure logic modules (testable on host, no ARM dependencies) ===

// Configuration
pub mod config;
pub mod error;

// Sampling
pub mod reader;
pub mod transfer;
pub mod window;

// Output
pub mod diagnostics;
pub mod report;

pub use diagnostics::{CounterSnapshot, SensorCounters};
pub use error::{ConsoleError, SensorError};
pub use reader::{AnalogInput, CycleOutcome, SensorReader, WindowReport};
pub use report::{Console, Decimal, split_decimal};
pub use transfer::{RawReading, TransferFunction};
pub use window::SampleWindow;
