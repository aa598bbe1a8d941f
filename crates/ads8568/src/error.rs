//! Driver error type.

use core::fmt;

use crate::types::ArgumentError;

/// Error returned by every fallible [`Ads8568`](crate::Ads8568) operation.
///
/// `BusE` is the register bus error, `PinE` the GPIO line error. Both are
/// passed through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<BusE, PinE> {
    /// A caller-supplied value was rejected before any I/O.
    InvalidArgument(ArgumentError),
    /// BUSY stayed high for the whole bounded wait.
    Timeout {
        /// Number of samples taken before giving up.
        polls: u32,
    },
    /// Register bus access failed.
    Bus(BusE),
    /// GPIO line access failed.
    Gpio(PinE),
}

impl<BusE, PinE> From<ArgumentError> for Error<BusE, PinE> {
    fn from(err: ArgumentError) -> Self {
        Self::InvalidArgument(err)
    }
}

impl<BusE, PinE> fmt::Display for Error<BusE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(err) => write!(f, "invalid argument: {err}"),
            Self::Timeout { polls } => {
                write!(f, "BUSY still asserted after {polls} polls")
            }
            Self::Bus(_) => write!(f, "register bus access failed"),
            Self::Gpio(_) => write!(f, "GPIO line access failed"),
        }
    }
}

#[cfg(feature = "std")]
impl<BusE: fmt::Debug, PinE: fmt::Debug> std::error::Error for Error<BusE, PinE> {}

#[cfg(test)]
mod tests {
    use super::*;

    type TestError = Error<(), ()>;

    #[test]
    fn argument_errors_convert() {
        let err: TestError = ArgumentError::PairCount(7).into();
        assert_eq!(err, Error::InvalidArgument(ArgumentError::PairCount(7)));
    }

    #[test]
    fn display_messages() {
        let timeout: TestError = Error::Timeout { polls: 1000 };
        assert_eq!(timeout.to_string(), "BUSY still asserted after 1000 polls");
        assert_eq!(TestError::Bus(()).to_string(), "register bus access failed");
        assert_eq!(TestError::Gpio(()).to_string(), "GPIO line access failed");
        assert_eq!(
            TestError::InvalidArgument(ArgumentError::VoltRange).to_string(),
            "invalid argument: absolute range must be 4VREF or 2VREF"
        );
    }
}
