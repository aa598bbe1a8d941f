//! Register bus abstraction
//!
//! Models the AXI4-Lite style bridge an FPGA IP core sits behind: a flat
//! address space of byte-wide and word-wide registers, addressed by a fixed
//! offset from the core's base address. Accesses auto-increment the address
//! across the supplied buffer.

/// Register-mapped bus access.
///
/// Implementations are expected to be synchronous and non-reentrant. Errors
/// (NACK, bridge timeout, unplugged device) are returned as-is; drivers do
/// not retry.
pub trait RegisterBus {
    /// Error type
    type Error: core::fmt::Debug;

    /// Write consecutive bytes starting at `addr`.
    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Self::Error>;

    /// Read consecutive bytes starting at `addr` into `buffer`.
    fn read_bytes(&mut self, addr: u32, buffer: &mut [u8]) -> Result<(), Self::Error>;

    /// Write consecutive 32-bit words starting at `addr`.
    fn write_words(&mut self, addr: u32, data: &[u32]) -> Result<(), Self::Error>;

    /// Read consecutive 32-bit words starting at `addr` into `buffer`.
    fn read_words(&mut self, addr: u32, buffer: &mut [u32]) -> Result<(), Self::Error>;

    /// Write a single byte register.
    fn write_byte(&mut self, addr: u32, value: u8) -> Result<(), Self::Error> {
        self.write_bytes(addr, &[value])
    }

    /// Write a single 32-bit register.
    fn write_word(&mut self, addr: u32, value: u32) -> Result<(), Self::Error> {
        self.write_words(addr, &[value])
    }

    /// Read a single 32-bit register (one 4-byte access).
    fn read_word(&mut self, addr: u32) -> Result<u32, Self::Error> {
        let mut buf = [0u32];
        self.read_words(addr, &mut buf)?;
        let [word] = buf;
        Ok(word)
    }
}

impl<T: RegisterBus + ?Sized> RegisterBus for &mut T {
    type Error = T::Error;

    fn write_bytes(&mut self, addr: u32, data: &[u8]) -> Result<(), Self::Error> {
        T::write_bytes(self, addr, data)
    }

    fn read_bytes(&mut self, addr: u32, buffer: &mut [u8]) -> Result<(), Self::Error> {
        T::read_bytes(self, addr, buffer)
    }

    fn write_words(&mut self, addr: u32, data: &[u32]) -> Result<(), Self::Error> {
        T::write_words(self, addr, data)
    }

    fn read_words(&mut self, addr: u32, buffer: &mut [u32]) -> Result<(), Self::Error> {
        T::read_words(self, addr, buffer)
    }
}
