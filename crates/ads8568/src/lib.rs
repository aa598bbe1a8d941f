//! Driver for the TI ADS8568 8-channel, 16-bit simultaneous-sampling ADC
//! exposed through an FPGA IP core.
//!
//! The IP core maps the chip's serial interface onto a small register
//! window and routes its control lines through a GPIO controller. This crate
//! sequences both into channel reads, range and reference configuration.
//!
//! # Layers
//!
//! ```text
//! Ads8568 (driver)      configuration, conversion, busy wait, decode
//!         ↓
//! registers / types     addresses, CONFIG bits, validated newtypes
//!         ↓
//! platform traits       RegisterBus, GpioLine, embedded-hal DelayNs
//! ```
//!
//! # Features
//!
//! - `std`: `std::error::Error` for [`Error`]
//! - `defmt`: defmt logging and `defmt::Format` derives
//! - `tracing`: tracing logging for host builds
//!
//! # Example
//!
//! ```
//! use ads8568::{Ads8568, Channel, Error, FunctionalMode, Pins};
//! use platform::mocks::{Journal, MockError};
//!
//! # fn main() -> Result<(), Error<MockError, MockError>> {
//! let journal = Journal::new();
//! let bus = journal.bus();
//! bus.set_word(0x24, 0x1234_FF78);
//!
//! let pins = Pins::from_fn(|line| journal.line(line.name()));
//! let mut adc = Ads8568::new(bus, pins, journal.delay());
//! adc.init_device(FunctionalMode::Hardware)?;
//!
//! let ch1 = adc.read_single_channel(Channel::new(1)?)?;
//! assert!((ch1 - 1.4222).abs() < 1e-3);
//! # Ok(())
//! # }
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)] // register and net names in doc comments
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

pub mod codec;
pub mod config;
pub mod driver;
pub mod error;
pub mod pins;
pub mod registers;
pub mod types;

pub use codec::{code_to_volts, decode_pair, PairReading};
pub use config::{BusyWait, ConfigRegister, DriverConfig};
pub use driver::{Ads8568, DeviceState, DriverError, DEFAULT_INPUT_VOLT_RANGE};
pub use error::Error;
pub use pins::{Line, Pins};
pub use types::{
    ArgumentError, Channel, ChannelPair, FunctionalMode, Half, InternalVref, MaxVref, PairCount,
    SpiClockHz, VoltRange,
};
