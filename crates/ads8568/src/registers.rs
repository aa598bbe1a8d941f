//! ADS8568 IP-core register map and CONFIG bitfield
//!
//! Source: TI ADS8568 datasheet (SBAS543), §8.5 "Register Maps", and the
//! FPGA IP-core integration notes.
//!
//! # Address space
//!
//! Offsets are relative to the IP core's base address on the register bus.
//! Byte-wide registers are written with single-byte accesses; the data
//! registers are 32 bits wide.
//!
//! # CONFIG register access
//!
//! The chip's CONFIG word is not memory mapped. It is written by pushing a
//! 32-bit word into `SPI_NORMAL_DATA`; it is read back by writing the
//! current value with the `WR_RD_CONFIG` command bits set, strobing
//! CONVST_A, and then reading `SPI_NORMAL_DATA`. The strobe is what clocks
//! the readback out of the chip.
//!
//! ## Power-on value
//! After RESET (or power-up) CONFIG reads `0x0000_03FF`: all pairs powered,
//! 4×VREF range, 2.5 V reference, internal reference disabled, reference DAC
//! at full code.

// ---------------------------------------------------------------------------
// Register addresses
// ---------------------------------------------------------------------------

/// IP-core enable (1 bit). Write [`STATUS_ENABLE`] / [`STATUS_DISABLE`].
pub const MODULE_STATUS: u32 = 0x10;

/// Channel pair B addressing enable (1 bit).
pub const SEL_B: u32 = 0x11;

/// Channel pair C/D addressing enable (1 bit).
pub const SEL_CD: u32 = 0x12;

/// SPI clock-rate word (32 bit).
///
/// `word = 2^32 × 8 × f_sclk / 1 GHz`, see [`crate::types::SpiClockHz`].
pub const ADC_SPI_RATE: u32 = 0x14;

/// CONFIG write / readback register (32 bit).
pub const SPI_NORMAL_DATA: u32 = 0x18;

/// Number of channel pairs enabled for readback (4 bit, 1–4).
pub const ADC_CHANNEL_EN: u32 = 0x20;

/// Pair A conversion result: CH1 in bits 31..16, CH2 in bits 15..0.
pub const CHANNEL_A_DATA: u32 = 0x24;

/// Pair B conversion result: CH3 high half, CH4 low half.
pub const CHANNEL_B_DATA: u32 = 0x28;

/// Pair C conversion result: CH5 high half, CH6 low half.
pub const CHANNEL_C_DATA: u32 = 0x2C;

/// Pair D conversion result: CH7 high half, CH8 low half.
pub const CHANNEL_D_DATA: u32 = 0x30;

/// Width in bytes of one 32-bit register access.
pub const DATA_LEN: usize = 4;

// ---------------------------------------------------------------------------
// Byte register values
// ---------------------------------------------------------------------------

/// Enable value for [`MODULE_STATUS`], [`SEL_B`] and [`SEL_CD`].
pub const STATUS_ENABLE: u8 = 0x01;

/// Disable value for [`MODULE_STATUS`], [`SEL_B`] and [`SEL_CD`].
pub const STATUS_DISABLE: u8 = 0x00;

// ---------------------------------------------------------------------------
// CONFIG bitfield
// ---------------------------------------------------------------------------

/// CONFIG value after RESET or power-up.
pub const CONFIG_RESET: u32 = 0x0000_03FF;

/// Command bits that turn a CONFIG write into a readback request.
///
/// Overlaps [`READ_EN_TWO_ACCESSES`] (bit 30) on purpose.
pub const WR_RD_CONFIG: u32 = 0xC000_0000;

/// Bit 30 clear: results read in one access.
pub const READ_EN_NORMAL: u32 = 0x0000_0000;
/// Bit 30 set: results read in two accesses.
pub const READ_EN_TWO_ACCESSES: u32 = 0x4000_0000;

/// Bit 29 clear: internal conversion clock.
pub const CLKSEL_INTERNAL: u32 = 0x0000_0000;
/// Bit 29 set: external conversion clock on XCLK.
pub const CLKSEL_EXTERNAL: u32 = 0x2000_0000;

/// Bit 27 clear: BUSY/INT pin in BUSY mode.
pub const BUSY_MODE: u32 = 0x0000_0000;
/// Bit 27 set: BUSY/INT pin in interrupt mode.
pub const INTERRUPT_MODE: u32 = 0x0800_0000;

/// Bit 26 clear: BUSY/INT active high.
pub const BUSY_ACTIVE_HIGH: u32 = 0x0000_0000;
/// Bit 26 set: BUSY/INT active low.
pub const BUSY_ACTIVE_LOW: u32 = 0x0400_0000;

/// Bit 24: pair A input range 2×VREF (clear = 4×VREF).
pub const RANGE_A_2VREF: u32 = 0x0100_0000;
/// Bit 23: pair B input range 2×VREF.
pub const RANGE_B_2VREF: u32 = 0x0080_0000;
/// Bit 22: power down pair B.
pub const PD_B_POWER_DOWN: u32 = 0x0040_0000;
/// Bit 21: pair C input range 2×VREF.
pub const RANGE_C_2VREF: u32 = 0x0020_0000;
/// Bit 20: power down pair C.
pub const PD_C_POWER_DOWN: u32 = 0x0010_0000;
/// Bit 19: pair D input range 2×VREF.
pub const RANGE_D_2VREF: u32 = 0x0008_0000;
/// Bit 18: power down pair D.
pub const PD_D_POWER_DOWN: u32 = 0x0004_0000;

/// Bit 13 clear: reference DAC full scale 2.5 V.
pub const VREF_2500_MV: u32 = 0x0000_0000;
/// Bit 13 set: reference DAC full scale 3.0 V.
pub const VREF_3000_MV: u32 = 0x0000_2000;

/// Bit 12: internal reference enabled.
pub const INTERNAL_VREF_EN: u32 = 0x0000_1000;
/// Bit 12 clear: internal reference disabled.
pub const INTERNAL_VREF_DIS: u32 = 0x0000_0000;

/// Bits 10..0: reference DAC code.
pub const VREF_TRIM_MASK: u32 = 0x0000_07FF;

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn data_registers_are_word_spaced() {
        assert_eq!(CHANNEL_B_DATA - CHANNEL_A_DATA, 4);
        assert_eq!(CHANNEL_C_DATA - CHANNEL_B_DATA, 4);
        assert_eq!(CHANNEL_D_DATA - CHANNEL_C_DATA, 4);
        assert_eq!(DATA_LEN, 4);
    }

    #[test]
    fn config_field_masks_do_not_overlap() {
        let fields = [
            READ_EN_TWO_ACCESSES,
            CLKSEL_EXTERNAL,
            INTERRUPT_MODE,
            BUSY_ACTIVE_LOW,
            RANGE_A_2VREF,
            RANGE_B_2VREF,
            PD_B_POWER_DOWN,
            RANGE_C_2VREF,
            PD_C_POWER_DOWN,
            RANGE_D_2VREF,
            PD_D_POWER_DOWN,
            VREF_3000_MV,
            INTERNAL_VREF_EN,
            VREF_TRIM_MASK,
        ];
        for (i, a) in fields.iter().enumerate() {
            for b in fields.iter().skip(i + 1) {
                assert_eq!(a & b, 0, "{a:#010x} overlaps {b:#010x}");
            }
        }
    }

    #[test]
    fn read_command_overlaps_read_enable_only() {
        assert_eq!(WR_RD_CONFIG & READ_EN_TWO_ACCESSES, READ_EN_TWO_ACCESSES);
        assert_eq!(WR_RD_CONFIG & CLKSEL_EXTERNAL, 0);
        assert_eq!(WR_RD_CONFIG & CONFIG_RESET, 0);
    }

    #[test]
    fn reset_value_lies_within_trim_field() {
        assert_eq!(CONFIG_RESET & !VREF_TRIM_MASK, 0);
    }

    #[test]
    fn cleared_options_are_zero() {
        assert_eq!(READ_EN_NORMAL, 0);
        assert_eq!(CLKSEL_INTERNAL, 0);
        assert_eq!(BUSY_MODE, 0);
        assert_eq!(BUSY_ACTIVE_HIGH, 0);
        assert_eq!(VREF_2500_MV, 0);
        assert_eq!(INTERNAL_VREF_DIS, 0);
        assert_ne!(STATUS_ENABLE, STATUS_DISABLE);
    }
}
