//! Async tasks for the temperature reporter firmware.
//!
//! - `sensor`: Periodic sampling task, one instance per sensor

pub mod sensor;

pub use sensor::{AppConsole, sensor_task};
