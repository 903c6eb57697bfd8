//! A three-color indicator light that cycles red, yellow and green, and can
//! be paused, forced to a color while paused, or set blinking yellow.
//!
//! The hardware-independent state machine lives here; the DESPI-M02 firmware
//! in `main.rs` supplies the GPIO outputs, the button edges and the clock.

#![cfg_attr(not(test), no_std)]

#[macro_use]
mod fmt;

pub mod config;
pub mod dispatcher;
pub mod input;
pub mod lights;
pub mod mode;
pub mod time;
pub mod trafficlight;

pub use config::{Config, ConfigError};
pub use dispatcher::Dispatcher;
pub use input::{Color, INPUT_LINES, Input, InputError, InputQueue};
pub use lights::{Channel, Composite, Lights};
pub use mode::{Mode, ModeRegister};
pub use time::{TimeDuration, TimeInstant};
pub use trafficlight::{Phase, PhaseWorker, TrafficLight};
