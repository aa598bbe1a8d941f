//! ADS8568 device controller
//!
//! Owns the register bus, the control-line bundle and a delay source, and
//! sequences them into configuration and conversion operations. Every I/O
//! method takes `&mut self`; there is no internal locking.
//!
//! # Conversion sequence
//!
//! 1. Route pairs B and C/D (SEL lines high, SEL registers enabled)
//! 2. Pulse CONVST for each pair to sample (low → high → low)
//! 3. Settle, then wait for BUSY to drop
//! 4. Tell the IP core how many pairs to read back (`ADC_CHANNEL_EN`)
//! 5. Read each pair data register and decode the half for the channel

use embedded_hal::delay::DelayNs;
use platform::{GpioLine, PinState, RegisterBus};

use crate::codec::{self, PairReading};
use crate::config::{BusyWait, ConfigRegister, DriverConfig};
use crate::error::Error;
use crate::pins::{Line, Pins};
use crate::registers;
use crate::types::{
    ArgumentError, Channel, ChannelPair, FunctionalMode, InternalVref, MaxVref, PairCount,
    SpiClockHz, VoltRange,
};

/// Error type of an [`Ads8568`] over bus `BUS` and lines `P`.
pub type DriverError<BUS, P> = Error<<BUS as RegisterBus>::Error, <P as GpioLine>::Error>;

/// Host-side view of the chip's configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    /// Last functional mode selected.
    pub mode: FunctionalMode,
    /// Last maximum reference selected.
    pub max_vref: MaxVref,
    /// Last absolute range selected.
    pub volt_range: VoltRange,
    /// Decode range in volts, fixed when the absolute range is set.
    pub input_volt_range: f32,
    /// Last CONFIG word written.
    pub shadow: ConfigRegister,
}

impl Default for DeviceState {
    fn default() -> Self {
        Self {
            mode: FunctionalMode::default(),
            max_vref: MaxVref::default(),
            volt_range: VoltRange::default(),
            input_volt_range: DEFAULT_INPUT_VOLT_RANGE,
            shadow: ConfigRegister::RESET,
        }
    }
}

/// Decode range before any absolute range is selected (±4 × 2.5 V).
pub const DEFAULT_INPUT_VOLT_RANGE: f32 = 10.0;

/// ADS8568 driver.
pub struct Ads8568<BUS, P, D> {
    bus: BUS,
    pins: Pins<P>,
    delay: D,
    config: DriverConfig,
    state: DeviceState,
}

impl<BUS, P, D> Ads8568<BUS, P, D>
where
    BUS: RegisterBus,
    P: GpioLine,
    D: DelayNs,
{
    /// Create a driver with default timings. Performs no I/O.
    pub fn new(bus: BUS, pins: Pins<P>, delay: D) -> Self {
        Self::with_config(bus, pins, delay, DriverConfig::default())
    }

    /// Create a driver with explicit timings. Performs no I/O.
    pub fn with_config(bus: BUS, pins: Pins<P>, delay: D, config: DriverConfig) -> Self {
        Self {
            bus,
            pins,
            delay,
            config,
            state: DeviceState::default(),
        }
    }

    /// Give back the bus, line bundle and delay.
    pub fn release(self) -> (BUS, Pins<P>, D) {
        (self.bus, self.pins, self.delay)
    }

    /// Current functional mode.
    pub fn mode(&self) -> FunctionalMode {
        self.state.mode
    }

    /// Current maximum reference.
    pub fn max_vref(&self) -> MaxVref {
        self.state.max_vref
    }

    /// Absolute input range used to decode codes, in volts.
    pub fn input_volt_range(&self) -> f32 {
        self.state.input_volt_range
    }

    /// Last CONFIG word written.
    pub fn config_shadow(&self) -> ConfigRegister {
        self.state.shadow
    }

    /// Timing configuration.
    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Full host-side state.
    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    // ── Bring-up ─────────────────────────────────────────────────────────────

    /// Configure BUSY as input and every other control line as output.
    pub fn init_pins(&mut self) -> Result<(), DriverError<BUS, P>> {
        for line in Line::ALL {
            self.pins
                .line_mut(line)
                .set_direction(line.direction())
                .map_err(Error::Gpio)?;
        }
        Ok(())
    }

    /// Pulse RESET. Aborts conversions and returns CONFIG to its power-on
    /// value; the shadow follows.
    pub fn reset_device(&mut self) -> Result<(), DriverError<BUS, P>> {
        let hold = self.config.reset_pulse_us;
        self.pulse(Line::Reset, hold)?;
        self.state.shadow = ConfigRegister::RESET;
        info!("ADS8568 reset");
        Ok(())
    }

    /// Select `mode`, configure lines, reset the chip and enable the IP core.
    pub fn init_device(&mut self, mode: FunctionalMode) -> Result<(), DriverError<BUS, P>> {
        self.select_functional_mode(mode)?;
        self.init_pins()?;
        self.reset_device()?;
        self.control_device(true)?;
        info!("ADS8568 initialised in {} mode", mode);
        Ok(())
    }

    // ── IP-core registers ────────────────────────────────────────────────────

    /// Enable or disable the IP core.
    pub fn control_device(&mut self, enable: bool) -> Result<(), DriverError<BUS, P>> {
        self.write_status(registers::MODULE_STATUS, enable)
    }

    /// Enable or disable pair B addressing.
    pub fn select_pair_b(&mut self, enable: bool) -> Result<(), DriverError<BUS, P>> {
        self.write_status(registers::SEL_B, enable)
    }

    /// Enable or disable pair C/D addressing.
    pub fn select_pair_cd(&mut self, enable: bool) -> Result<(), DriverError<BUS, P>> {
        self.write_status(registers::SEL_CD, enable)
    }

    /// Program the IP-core SPI clock.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::SpiClock`] if `hz` is 0 or above 20 MHz.
    pub fn set_spi_clock(&mut self, hz: u32) -> Result<(), DriverError<BUS, P>> {
        let clock = SpiClockHz::new(hz)?;
        let word = clock.rate_word();
        debug!("SPI clock {} Hz, rate word {:#x}", hz, word);
        self.bus
            .write_word(registers::ADC_SPI_RATE, word)
            .map_err(Error::Bus)
    }

    /// Set how many pairs the IP core reads back after a conversion.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::PairCount`] if `count` is not in 1–4.
    pub fn enable_channel_pairs(&mut self, count: u8) -> Result<(), DriverError<BUS, P>> {
        let count = PairCount::new(count)?;
        self.write_pair_count(count)
    }

    // ── CONFIG register ──────────────────────────────────────────────────────

    /// Write the chip's CONFIG word and record it in the shadow.
    pub fn write_config_register(&mut self, value: u32) -> Result<(), DriverError<BUS, P>> {
        debug!("CONFIG <- {:#x}", value);
        self.bus
            .write_word(registers::SPI_NORMAL_DATA, value)
            .map_err(Error::Bus)?;
        self.state.shadow = ConfigRegister::from_bits(value);
        Ok(())
    }

    /// Read the chip's CONFIG word back.
    ///
    /// Writes the shadow with the readback command bits, strobes pair A to
    /// clock the word out, then reads it. The shadow is left unchanged.
    /// Only meaningful in software mode.
    pub fn read_config_register(&mut self) -> Result<u32, DriverError<BUS, P>> {
        let command = self.state.shadow.read_command();
        self.bus
            .write_word(registers::SPI_NORMAL_DATA, command)
            .map_err(Error::Bus)?;
        self.start_conversion(ChannelPair::A)?;
        let value = self
            .bus
            .read_word(registers::SPI_NORMAL_DATA)
            .map_err(Error::Bus)?;
        debug!("CONFIG -> {:#x}", value);
        Ok(value)
    }

    // ── Mode, range and reference ────────────────────────────────────────────

    /// Drive HW/SW select for `mode`. Issues nothing else.
    pub fn select_functional_mode(
        &mut self,
        mode: FunctionalMode,
    ) -> Result<(), DriverError<BUS, P>> {
        self.pins
            .hw_sw_sel
            .set_level(mode.level())
            .map_err(Error::Gpio)?;
        self.state.mode = mode;
        Ok(())
    }

    /// Select the reference DAC full scale.
    ///
    /// Bits are only ever ORed in, so switching back to 2.5 V after 3.0 V
    /// needs a reset. The decode range keeps its value until the next
    /// [`set_absolute_volt_range`](Self::set_absolute_volt_range).
    pub fn select_max_reference_range(&mut self, max: MaxVref) -> Result<(), DriverError<BUS, P>> {
        let current = self.read_config_register()?;
        self.write_config_register(current | max.config_bits())?;
        self.state.max_vref = max;
        Ok(())
    }

    /// Select the absolute input range.
    ///
    /// In hardware mode the range is strapped on XCLK and applies to all
    /// pairs; in software mode it is set per `pair` through CONFIG. The
    /// decode range becomes `multiplier × max_vref` for the reference
    /// selected at this point.
    pub fn set_absolute_volt_range(
        &mut self,
        mode: FunctionalMode,
        range: VoltRange,
        pair: ChannelPair,
    ) -> Result<(), DriverError<BUS, P>> {
        match mode {
            FunctionalMode::Hardware => {
                self.pins
                    .xclk
                    .set_level(range.hw_level())
                    .map_err(Error::Gpio)?;
            }
            FunctionalMode::Software => {
                let current = self.read_config_register()?;
                self.write_config_register(current | pair.range_mask(range))?;
            }
        }
        self.state.volt_range = range;
        self.state.input_volt_range = range.multiplier() * self.state.max_vref.volts();
        Ok(())
    }

    /// Program and enable the internal reference.
    pub fn set_internal_reference(
        &mut self,
        mode: FunctionalMode,
        voltage: InternalVref,
    ) -> Result<(), DriverError<BUS, P>> {
        let code = voltage.trim_code(self.state.max_vref);
        let current = self.read_config_register()?;
        let value = current | u32::from(code);
        self.write_config_register(value)?;
        match mode {
            FunctionalMode::Hardware => self.pins.ref_sel.set_high().map_err(Error::Gpio),
            FunctionalMode::Software => {
                self.write_config_register(value | registers::INTERNAL_VREF_EN)
            }
        }
    }

    // ── Conversion ───────────────────────────────────────────────────────────

    /// Strobe CONVST for `pair`: low, hold, high, hold, low.
    pub fn start_conversion(&mut self, pair: ChannelPair) -> Result<(), DriverError<BUS, P>> {
        trace!("CONVST {}", pair);
        let hold = self.config.strobe_delay_us;
        self.pulse(pair.convst_line(), hold)
    }

    /// Wait until BUSY reads low, as configured by [`BusyWait`].
    ///
    /// # Errors
    ///
    /// [`Error::Timeout`] if BUSY is still high after the bounded budget.
    pub fn wait_busy(&mut self) -> Result<(), DriverError<BUS, P>> {
        match self.config.busy_wait {
            BusyWait::Unbounded => {
                while self.busy_level()? == PinState::High {
                    core::hint::spin_loop();
                }
                Ok(())
            }
            BusyWait::Bounded {
                max_polls,
                poll_interval_us,
            } => {
                let polls = max_polls.max(1);
                for poll in 1..=polls {
                    if self.busy_level()? == PinState::Low {
                        return Ok(());
                    }
                    if poll < polls {
                        self.delay.delay_us(poll_interval_us);
                    }
                }
                warn!("BUSY still high after {} polls", polls);
                Err(Error::Timeout { polls })
            }
        }
    }

    /// Raw data word of `pair`.
    pub fn read_pair_raw(&mut self, pair: ChannelPair) -> Result<u32, DriverError<BUS, P>> {
        self.bus
            .read_word(pair.data_register())
            .map_err(Error::Bus)
    }

    /// Raw data words of pairs A–D, in that order.
    pub fn read_all_pairs_raw(&mut self) -> Result<[u32; 4], DriverError<BUS, P>> {
        let mut words = [0u32; 4];
        for (slot, pair) in words.iter_mut().zip(ChannelPair::ALL) {
            *slot = self.read_pair_raw(pair)?;
        }
        Ok(words)
    }

    /// Decode a pair word against the current input range.
    pub fn decode(&self, raw: u32) -> PairReading {
        codec::decode_pair(raw, self.input_volt_range())
    }

    /// Convert and read one channel, in volts.
    pub fn read_single_channel(&mut self, channel: Channel) -> Result<f32, DriverError<BUS, P>> {
        self.route_all_pairs()?;
        self.start_conversion(channel.pair())?;
        self.settle_and_wait()?;
        self.write_pair_count(PairCount::ONE)?;
        let raw = self.read_pair_raw(channel.pair())?;
        Ok(self.decode(raw).for_channel(channel))
    }

    /// Convert every pair touched by `channels` once, then read each
    /// channel in caller order into `out`. Duplicates are allowed.
    ///
    /// Returns the number of values written. An empty list writes nothing
    /// and does not touch the device.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::ScanBuffer`] if `out` is shorter than `channels`;
    /// nothing is issued in that case.
    pub fn scan_channels_into(
        &mut self,
        channels: &[Channel],
        out: &mut [f32],
    ) -> Result<usize, DriverError<BUS, P>> {
        if out.len() < channels.len() {
            return Err(ArgumentError::ScanBuffer {
                channels: channels.len(),
                capacity: out.len(),
            }
            .into());
        }
        if channels.is_empty() {
            return Ok(0);
        }
        debug!("scanning {} channels", channels.len());

        self.route_all_pairs()?;
        for pair in ChannelPair::ALL {
            if channels.iter().any(|ch| ch.pair() == pair) {
                self.start_conversion(pair)?;
            }
        }
        self.settle_and_wait()?;
        self.write_pair_count(PairCount::ALL)?;

        for (slot, &channel) in out.iter_mut().zip(channels) {
            let raw = self.read_pair_raw(channel.pair())?;
            *slot = self.decode(raw).for_channel(channel);
        }
        Ok(channels.len())
    }

    /// [`scan_channels_into`](Self::scan_channels_into) collecting into a
    /// vector of capacity `N`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::ScanBuffer`] if more than `N` channels are
    /// requested; nothing is issued in that case.
    pub fn scan_channels<const N: usize>(
        &mut self,
        channels: &[Channel],
    ) -> Result<heapless::Vec<f32, N>, DriverError<BUS, P>> {
        let too_small = ArgumentError::ScanBuffer {
            channels: channels.len(),
            capacity: N,
        };
        let mut volts = heapless::Vec::new();
        volts
            .resize(channels.len(), 0.0)
            .map_err(|_| Error::InvalidArgument(too_small))?;
        self.scan_channels_into(channels, &mut volts)?;
        Ok(volts)
    }

    // ── Helpers ──────────────────────────────────────────────────────────────

    fn write_status(&mut self, addr: u32, enable: bool) -> Result<(), DriverError<BUS, P>> {
        let value = if enable {
            registers::STATUS_ENABLE
        } else {
            registers::STATUS_DISABLE
        };
        self.bus.write_byte(addr, value).map_err(Error::Bus)
    }

    fn write_pair_count(&mut self, count: PairCount) -> Result<(), DriverError<BUS, P>> {
        self.bus
            .write_byte(registers::ADC_CHANNEL_EN, count.get())
            .map_err(Error::Bus)
    }

    /// Low, hold, high, hold, low on `line`.
    fn pulse(&mut self, line: Line, hold_us: u32) -> Result<(), DriverError<BUS, P>> {
        self.drive(line, PinState::Low)?;
        self.delay.delay_us(hold_us);
        self.drive(line, PinState::High)?;
        self.delay.delay_us(hold_us);
        self.drive(line, PinState::Low)
    }

    fn drive(&mut self, line: Line, level: PinState) -> Result<(), DriverError<BUS, P>> {
        self.pins
            .line_mut(line)
            .set_level(level)
            .map_err(Error::Gpio)
    }

    fn busy_level(&mut self) -> Result<PinState, DriverError<BUS, P>> {
        self.pins.busy.level().map_err(Error::Gpio)
    }

    /// SEL_CD line, SEL_CD register, SEL_B line, SEL_B register.
    fn route_all_pairs(&mut self) -> Result<(), DriverError<BUS, P>> {
        self.drive(Line::SelCd, PinState::High)?;
        self.select_pair_cd(true)?;
        self.drive(Line::SelB, PinState::High)?;
        self.select_pair_b(true)
    }

    fn settle_and_wait(&mut self) -> Result<(), DriverError<BUS, P>> {
        self.delay.delay_us(self.config.settle_delay_us);
        self.wait_busy()
    }
}
