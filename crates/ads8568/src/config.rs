//! Driver configuration and the CONFIG register shadow.

use crate::registers;

/// Host-side copy of the chip's CONFIG word.
///
/// The chip's CONFIG register can only be read back through a conversion
/// strobe, so the driver keeps the last value it wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct ConfigRegister(u32);

impl ConfigRegister {
    /// Value after RESET or power-up.
    pub const RESET: Self = Self(registers::CONFIG_RESET);

    /// Wrap a raw CONFIG word.
    #[must_use]
    pub const fn from_bits(value: u32) -> Self {
        Self(value)
    }

    /// Raw CONFIG word.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Copy with `bits` set in addition to the current ones.
    #[must_use]
    pub const fn with(self, bits: u32) -> Self {
        Self(self.0 | bits)
    }

    /// `true` if every bit of `bits` is set.
    #[must_use]
    pub const fn contains(self, bits: u32) -> bool {
        self.0 & bits == bits
    }

    /// Word that requests a readback of this value.
    #[must_use]
    pub const fn read_command(self) -> u32 {
        self.0 | registers::WR_RD_CONFIG
    }
}

impl Default for ConfigRegister {
    fn default() -> Self {
        Self::RESET
    }
}

/// How to wait for BUSY to drop after a conversion strobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BusyWait {
    /// Sample BUSY in a tight loop until it reads low. Never times out.
    Unbounded,
    /// Sample BUSY up to `max_polls` times, sleeping between samples.
    Bounded {
        /// Samples taken before reporting a timeout. Zero counts as one.
        max_polls: u32,
        /// Sleep between samples in microseconds.
        poll_interval_us: u32,
    },
}

impl BusyWait {
    /// Default sample budget: 1000 × 10 µs ≈ 10 ms.
    pub const DEFAULT_MAX_POLLS: u32 = 1000;
    /// Default sleep between samples.
    pub const DEFAULT_POLL_INTERVAL_US: u32 = 10;
}

impl Default for BusyWait {
    fn default() -> Self {
        Self::Bounded {
            max_polls: Self::DEFAULT_MAX_POLLS,
            poll_interval_us: Self::DEFAULT_POLL_INTERVAL_US,
        }
    }
}

/// Timing knobs for an [`Ads8568`](crate::Ads8568) instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DriverConfig {
    /// BUSY wait strategy after each strobe.
    pub busy_wait: BusyWait,
    /// Hold time of each CONVST edge, in microseconds.
    pub strobe_delay_us: u32,
    /// Wait between the last strobe and the first BUSY sample.
    pub settle_delay_us: u32,
    /// Hold time of each RESET edge, in microseconds.
    pub reset_pulse_us: u32,
}

impl DriverConfig {
    /// Default CONVST edge hold time (1 ms).
    pub const DEFAULT_STROBE_DELAY_US: u32 = 1_000;
    /// Default settle time before BUSY is sampled (1 ms).
    pub const DEFAULT_SETTLE_DELAY_US: u32 = 1_000;
    /// Default RESET edge hold time (1 ms).
    pub const DEFAULT_RESET_PULSE_US: u32 = 1_000;

    /// Timings of the reference board firmware: unbounded BUSY wait,
    /// 1 ms strobes.
    #[must_use]
    pub const fn reference() -> Self {
        Self {
            busy_wait: BusyWait::Unbounded,
            strobe_delay_us: Self::DEFAULT_STROBE_DELAY_US,
            settle_delay_us: Self::DEFAULT_SETTLE_DELAY_US,
            reset_pulse_us: Self::DEFAULT_RESET_PULSE_US,
        }
    }

    /// Replace the BUSY wait strategy.
    #[must_use]
    pub const fn with_busy_wait(mut self, busy_wait: BusyWait) -> Self {
        self.busy_wait = busy_wait;
        self
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            busy_wait: BusyWait::default(),
            strobe_delay_us: Self::DEFAULT_STROBE_DELAY_US,
            settle_delay_us: Self::DEFAULT_SETTLE_DELAY_US,
            reset_pulse_us: Self::DEFAULT_RESET_PULSE_US,
        }
    }
}
