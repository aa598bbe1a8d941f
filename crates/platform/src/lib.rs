//! Collaborator abstractions for register-mapped IP-core drivers
//!
//! This crate provides the trait-based seams a driver needs from its host
//! platform, so the driver can be developed and tested without hardware.
//!
//! # Architecture Layers
//!
//! ```text
//! Device driver (ads8568 crate)
//!         ↓
//! Platform seams (this crate - trait abstractions)
//!         ↓
//! Host platform (FPGA AXI4-Lite bridge, GPIO controller, timer)
//! ```
//!
//! # Abstractions
//!
//! - [`RegisterBus`] - byte/word access to a register-mapped address space
//! - [`GpioLine`] - a single GPIO line with runtime direction control
//! - [`EhLine`] - adapts any `embedded-hal` pin into a [`GpioLine`]
//! - Delays come from [`embedded_hal::delay::DelayNs`]
//!
//! # Features
//!
//! - `std`: Recording mocks in [`mocks`] (for testing)
//! - `defmt`: Enable defmt derives
//!
//! # Example
//!
//! ```
//! use platform::{GpioLine, PinState};
//!
//! fn strobe<L: GpioLine>(line: &mut L) -> Result<(), L::Error> {
//!     line.set_level(PinState::High)?;
//!     line.set_level(PinState::Low)
//! }
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
#![allow(clippy::doc_markdown)] // register names in doc comments
#![allow(clippy::must_use_candidate)] // hardware accessors — callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod bus;
pub mod gpio;
#[cfg(any(test, feature = "std"))]
pub mod mocks;

pub use bus::RegisterBus;
pub use gpio::{Direction, EhLine, GpioLine, PinState};
