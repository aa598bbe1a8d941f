//! Conversion-result decoding.
//!
//! Each pair data register packs two 16-bit codes: the odd channel in bits
//! 31..16 and the even channel in bits 15..0. A code maps linearly onto the
//! active input range, `code / 0x7FFF × range`; codes above `0x7FFF` are
//! negative readings and keep the magnitude of the same formula.

use crate::types::{Channel, Half};

/// Largest positive code; also the full-scale divisor.
pub const POSITIVE_FULL_SCALE: u16 = 0x7FFF;

/// Convert one 16-bit code to volts.
///
/// `range` is the absolute input range in volts (e.g. 10.0 for ±4×2.5 V).
#[must_use]
pub fn code_to_volts(code: u16, range: f32) -> f32 {
    let magnitude = f32::from(code) / f32::from(POSITIVE_FULL_SCALE) * range;
    if code > POSITIVE_FULL_SCALE {
        -magnitude
    } else {
        magnitude
    }
}

/// Split a pair data word into `(high, low)` codes.
#[must_use]
pub const fn split_pair(raw: u32) -> (u16, u16) {
    let [b3, b2, b1, b0] = raw.to_be_bytes();
    (u16::from_be_bytes([b3, b2]), u16::from_be_bytes([b1, b0]))
}

/// Both channels of one pair, in volts.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PairReading {
    /// Odd channel (bits 31..16)
    pub high: f32,
    /// Even channel (bits 15..0)
    pub low: f32,
}

impl PairReading {
    /// Value in the given half.
    #[must_use]
    pub const fn half(self, half: Half) -> f32 {
        match half {
            Half::High => self.high,
            Half::Low => self.low,
        }
    }

    /// Value belonging to `channel`.
    #[must_use]
    pub const fn for_channel(self, channel: Channel) -> f32 {
        self.half(channel.half())
    }
}

/// Decode a pair data word against the active input range.
#[must_use]
pub fn decode_pair(raw: u32, range: f32) -> PairReading {
    let (high, low) = split_pair(raw);
    PairReading {
        high: code_to_volts(high, range),
        low: code_to_volts(low, range),
    }
}
