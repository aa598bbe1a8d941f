//! GPIO line bundle
//!
//! The IP core routes sixteen ADS8568 control lines through its GPIO
//! controller. Only BUSY is an input; every other line is driven by the
//! host.

use platform::Direction;

/// Names of the ADS8568 control lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Conversion start, pair A
    ConvstA,
    /// Conversion start, pair B
    ConvstB,
    /// Conversion start, pair C
    ConvstC,
    /// Conversion start, pair D
    ConvstD,
    /// Conversion in progress (input)
    Busy,
    /// External clock; doubles as the range strap in hardware mode
    Xclk,
    /// Hardware / software mode select
    HwSwSel,
    /// Internal reference select
    RefSel,
    /// Standby
    Stby,
    /// Chip reset
    Reset,
    /// Serial chip select
    Cs,
    /// Reference buffer enable
    RefbufEn,
    /// Auto-sleep select
    AsleepSel,
    /// Serial / parallel interface select
    SerSel,
    /// Pair C/D addressing
    SelCd,
    /// Pair B addressing
    SelB,
}

impl Line {
    /// Every line, in bring-up order.
    pub const ALL: [Self; 16] = [
        Self::ConvstA,
        Self::ConvstB,
        Self::ConvstC,
        Self::ConvstD,
        Self::Busy,
        Self::Xclk,
        Self::HwSwSel,
        Self::RefSel,
        Self::Stby,
        Self::Reset,
        Self::Cs,
        Self::RefbufEn,
        Self::AsleepSel,
        Self::SerSel,
        Self::SelCd,
        Self::SelB,
    ];

    /// Schematic net name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::ConvstA => "convst_a",
            Self::ConvstB => "convst_b",
            Self::ConvstC => "convst_c",
            Self::ConvstD => "convst_d",
            Self::Busy => "busy",
            Self::Xclk => "xclk",
            Self::HwSwSel => "hw_sw_sel",
            Self::RefSel => "ref_sel",
            Self::Stby => "stby",
            Self::Reset => "reset",
            Self::Cs => "cs",
            Self::RefbufEn => "refbuf_en",
            Self::AsleepSel => "asleep_sel",
            Self::SerSel => "ser_sel",
            Self::SelCd => "sel_cd",
            Self::SelB => "sel_b",
        }
    }

    /// Direction the host configures during bring-up.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Self::Busy => Direction::Input,
            _ => Direction::Output,
        }
    }
}

/// One handle per control line.
///
/// All handles share a type so the bundle can be built from a single GPIO
/// controller; use [`Pins::from_fn`] to construct it from a line factory.
#[derive(Debug)]
#[allow(missing_docs)]
pub struct Pins<P> {
    pub convst_a: P,
    pub convst_b: P,
    pub convst_c: P,
    pub convst_d: P,
    pub busy: P,
    pub xclk: P,
    pub hw_sw_sel: P,
    pub ref_sel: P,
    pub stby: P,
    pub reset: P,
    pub cs: P,
    pub refbuf_en: P,
    pub asleep_sel: P,
    pub ser_sel: P,
    pub sel_cd: P,
    pub sel_b: P,
}

impl<P> Pins<P> {
    /// Build the bundle by calling `make` once per line, in [`Line::ALL`]
    /// order.
    pub fn from_fn(mut make: impl FnMut(Line) -> P) -> Self {
        Self {
            convst_a: make(Line::ConvstA),
            convst_b: make(Line::ConvstB),
            convst_c: make(Line::ConvstC),
            convst_d: make(Line::ConvstD),
            busy: make(Line::Busy),
            xclk: make(Line::Xclk),
            hw_sw_sel: make(Line::HwSwSel),
            ref_sel: make(Line::RefSel),
            stby: make(Line::Stby),
            reset: make(Line::Reset),
            cs: make(Line::Cs),
            refbuf_en: make(Line::RefbufEn),
            asleep_sel: make(Line::AsleepSel),
            ser_sel: make(Line::SerSel),
            sel_cd: make(Line::SelCd),
            sel_b: make(Line::SelB),
        }
    }

    /// Handle for `line`.
    pub fn line_mut(&mut self, line: Line) -> &mut P {
        match line {
            Line::ConvstA => &mut self.convst_a,
            Line::ConvstB => &mut self.convst_b,
            Line::ConvstC => &mut self.convst_c,
            Line::ConvstD => &mut self.convst_d,
            Line::Busy => &mut self.busy,
            Line::Xclk => &mut self.xclk,
            Line::HwSwSel => &mut self.hw_sw_sel,
            Line::RefSel => &mut self.ref_sel,
            Line::Stby => &mut self.stby,
            Line::Reset => &mut self.reset,
            Line::Cs => &mut self.cs,
            Line::RefbufEn => &mut self.refbuf_en,
            Line::AsleepSel => &mut self.asleep_sel,
            Line::SerSel => &mut self.ser_sel,
            Line::SelCd => &mut self.sel_cd,
            Line::SelB => &mut self.sel_b,
        }
    }
}
