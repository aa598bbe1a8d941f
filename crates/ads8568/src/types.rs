//! ADS8568 domain newtypes and enumerations.
//!
//! Every value the driver accepts from a caller passes through one of these
//! types, so domain checks happen once, at construction, before any bus or
//! GPIO access:
//! - `Channel`: logical input 1–8, knows its pair and result half
//! - `ChannelPair`: the four simultaneously-sampled pairs A–D
//! - `FunctionalMode`: pin-strapped (`hw`) vs register-programmed (`sw`)
//! - `MaxVref` / `VoltRange` / `InternalVref`: reference and range selection
//! - `PairCount` / `SpiClockHz`: IP-core readback and clock settings

use core::fmt;
use core::str::FromStr;

use platform::PinState;

use crate::pins::Line;
use crate::registers;

// ── Error type ───────────────────────────────────────────────────────────────

/// A caller-supplied value outside its domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ArgumentError {
    /// Channel number not in 1–8.
    Channel(u8),
    /// Channel pair name not one of `A`–`D`.
    ChannelPair,
    /// Functional mode not `sw` or `hw`.
    FunctionalMode,
    /// Maximum reference not exactly 2.5 V or 3.0 V.
    MaxVref,
    /// Absolute range not `4VREF` or `2VREF`.
    VoltRange,
    /// Internal reference voltage not in 0.5–3.0 V.
    InternalVref,
    /// Pair count not in 1–4.
    PairCount(u8),
    /// SPI clock not in 1 Hz – 20 MHz.
    SpiClock(u32),
    /// Output buffer shorter than the channel list it must hold.
    ScanBuffer {
        /// Entries requested.
        channels: usize,
        /// Entries the buffer can hold.
        capacity: usize,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Channel(ch) => write!(f, "channel {ch} out of range 1-8"),
            Self::ChannelPair => write!(f, "channel pair must be A, B, C or D"),
            Self::FunctionalMode => write!(f, "functional mode must be sw or hw"),
            Self::MaxVref => write!(f, "maximum reference must be 2.5 V or 3.0 V"),
            Self::VoltRange => write!(f, "absolute range must be 4VREF or 2VREF"),
            Self::InternalVref => write!(f, "internal reference must be 0.5-3.0 V"),
            Self::PairCount(n) => write!(f, "pair count {n} out of range 1-4"),
            Self::SpiClock(hz) => write!(f, "SPI clock {hz} Hz out of range 1-20000000"),
            Self::ScanBuffer { channels, capacity } => {
                write!(f, "{channels} channels do not fit a buffer of {capacity}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArgumentError {}

// ── Channel ──────────────────────────────────────────────────────────────────

/// Logical input channel, 1–8.
///
/// Channels are sampled in pairs: (1,2) → A, (3,4) → B, (5,6) → C,
/// (7,8) → D. Odd channels land in the high half of the pair's data word,
/// even channels in the low half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct Channel(u8);

impl Channel {
    /// Lowest channel number.
    pub const MIN: u8 = 1;
    /// Highest channel number.
    pub const MAX: u8 = 8;

    /// All channels in ascending order.
    pub const ALL: [Self; 8] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    /// Create a channel.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::Channel`] if `number` is not in 1–8.
    pub const fn new(number: u8) -> Result<Self, ArgumentError> {
        if number < Self::MIN || number > Self::MAX {
            Err(ArgumentError::Channel(number))
        } else {
            Ok(Self(number))
        }
    }

    /// Validate a whole list of channel numbers into a list of capacity `N`.
    ///
    /// Either every entry is valid and the channels are returned in input
    /// order, or the first offending entry is reported. Entries are checked
    /// before capacity.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::Channel`] for the first number outside 1–8;
    /// [`ArgumentError::ScanBuffer`] if the list is longer than `N`.
    pub fn parse_list<const N: usize>(
        numbers: &[u8],
    ) -> Result<heapless::Vec<Self, N>, ArgumentError> {
        for &number in numbers {
            Self::new(number)?;
        }
        let too_small = ArgumentError::ScanBuffer {
            channels: numbers.len(),
            capacity: N,
        };
        let mut channels = heapless::Vec::new();
        for &number in numbers {
            channels.push(Self(number)).map_err(|_| too_small)?;
        }
        Ok(channels)
    }

    /// Channel number, 1–8.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Pair this channel is sampled with.
    #[must_use]
    pub const fn pair(self) -> ChannelPair {
        match self.0 {
            1 | 2 => ChannelPair::A,
            3 | 4 => ChannelPair::B,
            5 | 6 => ChannelPair::C,
            _ => ChannelPair::D,
        }
    }

    /// Half of the pair data word holding this channel's code.
    #[must_use]
    pub const fn half(self) -> Half {
        if self.0 & 1 == 1 {
            Half::High
        } else {
            Half::Low
        }
    }
}

impl TryFrom<u8> for Channel {
    type Error = ArgumentError;

    fn try_from(number: u8) -> Result<Self, Self::Error> {
        Self::new(number)
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CH{}", self.0)
    }
}

/// Half of a 32-bit pair data word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Half {
    /// Bits 31..16 (odd channel)
    High,
    /// Bits 15..0 (even channel)
    Low,
}

// ── ChannelPair ──────────────────────────────────────────────────────────────

/// One of the four simultaneously-sampled channel pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChannelPair {
    /// CH1 / CH2
    A,
    /// CH3 / CH4
    B,
    /// CH5 / CH6
    C,
    /// CH7 / CH8
    D,
}

impl ChannelPair {
    /// All pairs in register order.
    pub const ALL: [Self; 4] = [Self::A, Self::B, Self::C, Self::D];

    /// Data register holding this pair's latest conversion.
    #[must_use]
    pub const fn data_register(self) -> u32 {
        match self {
            Self::A => registers::CHANNEL_A_DATA,
            Self::B => registers::CHANNEL_B_DATA,
            Self::C => registers::CHANNEL_C_DATA,
            Self::D => registers::CHANNEL_D_DATA,
        }
    }

    /// CONFIG bits selecting `range` for this pair in software mode.
    #[must_use]
    pub const fn range_mask(self, range: VoltRange) -> u32 {
        match (range, self) {
            (VoltRange::FourVref, _) => 0,
            (VoltRange::TwoVref, Self::A) => registers::RANGE_A_2VREF,
            (VoltRange::TwoVref, Self::B) => registers::RANGE_B_2VREF,
            (VoltRange::TwoVref, Self::C) => registers::RANGE_C_2VREF,
            (VoltRange::TwoVref, Self::D) => registers::RANGE_D_2VREF,
        }
    }

    /// Conversion-start line for this pair.
    #[must_use]
    pub const fn convst_line(self) -> Line {
        match self {
            Self::A => Line::ConvstA,
            Self::B => Line::ConvstB,
            Self::C => Line::ConvstC,
            Self::D => Line::ConvstD,
        }
    }
}

impl FromStr for ChannelPair {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(ArgumentError::ChannelPair),
        }
    }
}

impl fmt::Display for ChannelPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        };
        f.write_str(name)
    }
}

// ── FunctionalMode ───────────────────────────────────────────────────────────

/// How the chip takes its configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FunctionalMode {
    /// `sw`: configuration programmed through the CONFIG register.
    Software,
    /// `hw`: configuration strapped on GPIO lines (power-on default).
    #[default]
    Hardware,
}

impl FunctionalMode {
    /// Level driven onto HW/SW select: hw → low, sw → high.
    #[must_use]
    pub const fn level(self) -> PinState {
        match self {
            Self::Hardware => PinState::Low,
            Self::Software => PinState::High,
        }
    }
}

impl FromStr for FunctionalMode {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sw" => Ok(Self::Software),
            "hw" => Ok(Self::Hardware),
            _ => Err(ArgumentError::FunctionalMode),
        }
    }
}

impl fmt::Display for FunctionalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Software => "sw",
            Self::Hardware => "hw",
        })
    }
}

// ── MaxVref ──────────────────────────────────────────────────────────────────

/// Full-scale setting of the reference DAC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MaxVref {
    /// 2.5 V (power-on default)
    #[default]
    V2_5,
    /// 3.0 V
    V3_0,
}

impl MaxVref {
    /// Reference in volts.
    #[must_use]
    pub const fn volts(self) -> f32 {
        match self {
            Self::V2_5 => 2.5,
            Self::V3_0 => 3.0,
        }
    }

    /// CONFIG bits for this setting.
    #[must_use]
    pub const fn config_bits(self) -> u32 {
        match self {
            Self::V2_5 => registers::VREF_2500_MV,
            Self::V3_0 => registers::VREF_3000_MV,
        }
    }
}

impl TryFrom<f32> for MaxVref {
    type Error = ArgumentError;

    /// Only the exact literals `2.5` and `3.0` are accepted.
    #[allow(clippy::float_cmp)]
    fn try_from(volts: f32) -> Result<Self, Self::Error> {
        if volts == 2.5 {
            Ok(Self::V2_5)
        } else if volts == 3.0 {
            Ok(Self::V3_0)
        } else {
            Err(ArgumentError::MaxVref)
        }
    }
}

// ── VoltRange ────────────────────────────────────────────────────────────────

/// Absolute input range, as a multiple of the reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VoltRange {
    /// ±4×VREF (power-on default)
    #[default]
    FourVref,
    /// ±2×VREF
    TwoVref,
}

impl VoltRange {
    /// Multiple of the reference voltage.
    #[must_use]
    pub const fn multiplier(self) -> f32 {
        match self {
            Self::FourVref => 4.0,
            Self::TwoVref => 2.0,
        }
    }

    /// Level driven onto the range strap (XCLK) in hardware mode.
    #[must_use]
    pub const fn hw_level(self) -> PinState {
        match self {
            Self::FourVref => PinState::Low,
            Self::TwoVref => PinState::High,
        }
    }
}

impl FromStr for VoltRange {
    type Err = ArgumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "4VREF" => Ok(Self::FourVref),
            "2VREF" => Ok(Self::TwoVref),
            _ => Err(ArgumentError::VoltRange),
        }
    }
}

// ── InternalVref ─────────────────────────────────────────────────────────────

/// Internal reference voltage, validated to 0.5–3.0 V.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct InternalVref(f32);

impl InternalVref {
    /// Lowest programmable reference.
    pub const MIN_VOLTS: f32 = 0.5;
    /// Highest programmable reference.
    pub const MAX_VOLTS: f32 = 3.0;

    /// Create an internal reference setting.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::InternalVref`] if `volts` is NaN or outside
    /// 0.5–3.0 V.
    pub fn new(volts: f32) -> Result<Self, ArgumentError> {
        if (Self::MIN_VOLTS..=Self::MAX_VOLTS).contains(&volts) {
            Ok(Self(volts))
        } else {
            Err(ArgumentError::InternalVref)
        }
    }

    /// Reference in volts.
    #[must_use]
    pub const fn volts(self) -> f32 {
        self.0
    }

    /// Reference DAC code: `round(1024 × volts / max) − 1`, 11 bits.
    ///
    /// Rounds half up. Over the whole 0.5–3.0 V domain the code
    /// stays within 170–1228.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::arithmetic_side_effects
    )]
    pub fn trim_code(self, max: MaxVref) -> u16 {
        let scaled = 1024.0 * self.0 / max.volts();
        // scaled >= 1024 * 0.5 / 3.0 > 170, so the subtraction cannot wrap.
        let rounded = (scaled + 0.5) as u16;
        (rounded - 1) & (registers::VREF_TRIM_MASK as u16)
    }
}

// ── PairCount ────────────────────────────────────────────────────────────────

/// Number of channel pairs the IP core reads back after a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct PairCount(u8);

impl PairCount {
    /// A single pair.
    pub const ONE: Self = Self(1);
    /// All four pairs.
    pub const ALL: Self = Self(4);

    /// Create a pair count.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::PairCount`] if `count` is not in 1–4.
    pub const fn new(count: u8) -> Result<Self, ArgumentError> {
        if count < 1 || count > 4 {
            Err(ArgumentError::PairCount(count))
        } else {
            Ok(Self(count))
        }
    }

    /// Raw count, 1–4.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

// ── SpiClockHz ───────────────────────────────────────────────────────────────

/// IP-core SPI clock, validated to 1 Hz – 20 MHz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(transparent)]
pub struct SpiClockHz(u32);

impl SpiClockHz {
    /// Lowest accepted clock.
    pub const MIN_HZ: u32 = 1;
    /// Highest accepted clock (ADS8568 SCLK max).
    pub const MAX_HZ: u32 = 20_000_000;

    /// Create a clock setting.
    ///
    /// # Errors
    ///
    /// Returns [`ArgumentError::SpiClock`] if `hz` is 0 or above 20 MHz.
    pub const fn new(hz: u32) -> Result<Self, ArgumentError> {
        if hz < Self::MIN_HZ || hz > Self::MAX_HZ {
            Err(ArgumentError::SpiClock(hz))
        } else {
            Ok(Self(hz))
        }
    }

    /// Clock in Hz.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Phase-accumulator word for `ADC_SPI_RATE`: `2^32 × 8 × hz / 10^9`.
    #[must_use]
    pub fn rate_word(self) -> u32 {
        // hz <= 2 * 10^7 < 2^25, so hz << 35 < 2^60 and the quotient < 2^31.
        #[allow(clippy::arithmetic_side_effects)]
        let word = (u64::from(self.0) << 35) / 1_000_000_000;
        u32::try_from(word).unwrap_or(u32::MAX)
    }
}
