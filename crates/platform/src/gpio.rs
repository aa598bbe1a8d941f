//! GPIO line abstraction
//!
//! IP-core GPIO controllers expose each line as a runtime-configurable pin:
//! the driver picks the direction during bring-up and then drives or samples
//! the level. This differs from the `embedded-hal` type-state model, where
//! direction is fixed when the pin is constructed; [`EhLine`] bridges the two.

use embedded_hal::digital::{InputPin, OutputPin};

/// Single GPIO line operations
pub trait GpioLine {
    /// Error type
    type Error: core::fmt::Debug;

    /// Configure the line as input or output.
    fn set_direction(&mut self, direction: Direction) -> Result<(), Self::Error>;

    /// Drive the line to `level`.
    fn set_level(&mut self, level: PinState) -> Result<(), Self::Error>;

    /// Sample the current line level.
    fn level(&mut self) -> Result<PinState, Self::Error>;

    /// Drive the line high
    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_level(PinState::High)
    }

    /// Drive the line low
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_level(PinState::Low)
    }

    /// Returns `true` if the line reads high.
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        self.level().map(bool::from)
    }
}

/// Pin state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinState {
    /// High (logic 1)
    High,
    /// Low (logic 0)
    Low,
}

impl From<bool> for PinState {
    fn from(value: bool) -> Self {
        if value {
            Self::High
        } else {
            Self::Low
        }
    }
}

impl From<PinState> for bool {
    fn from(value: PinState) -> Self {
        matches!(value, PinState::High)
    }
}

/// Line direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Sampled by the host
    Input,
    /// Driven by the host
    Output,
}

/// [`GpioLine`] over an `embedded-hal` 1.0 pin.
///
/// The wrapped pin must implement both [`InputPin`] and [`OutputPin`]
/// (flex / open-drain pins on most HALs). Direction is fixed by the HAL when
/// the pin is configured, so [`GpioLine::set_direction`] is accepted and
/// has no effect.
pub struct EhLine<P> {
    pin: P,
}

impl<P> EhLine<P> {
    /// Wrap a HAL pin.
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Return the wrapped pin.
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P> GpioLine for EhLine<P>
where
    P: InputPin + OutputPin,
{
    type Error = P::Error;

    fn set_direction(&mut self, _direction: Direction) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_level(&mut self, level: PinState) -> Result<(), Self::Error> {
        match level {
            PinState::High => self.pin.set_high(),
            PinState::Low => self.pin.set_low(),
        }
    }

    fn level(&mut self) -> Result<PinState, Self::Error> {
        self.pin.is_high().map(PinState::from)
    }
}
