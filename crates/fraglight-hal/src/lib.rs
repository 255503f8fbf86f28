#![no_std]

/// A single packed register update: write `data` to register `addr`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegisterWrite {
    pub addr: u16,
    pub data: u32,
}

impl RegisterWrite {
    pub const fn new(addr: u16, data: u32) -> Self {
        Self { addr, data }
    }
}

/// Abstracts the GPU register upload path (command buffer, FIFO, MMIO...).
///
/// The lighting driver only ever produces `(address, word)` pairs; how they
/// reach the hardware is up to the implementation. Writes must be applied in
/// the order they are issued.
pub trait RegisterSink {
    type Error: core::fmt::Debug;

    /// Write a 32-bit value to a GPU register.
    fn write_register(&mut self, addr: u16, data: u32) -> Result<(), Self::Error>;

    /// Write a run of values to the same register (data port uploads).
    ///
    /// The default issues one `write_register` per word; sinks that support
    /// burst writes can override it.
    fn write_repeated(&mut self, addr: u16, data: &[u32]) -> Result<(), Self::Error> {
        for &word in data {
            self.write_register(addr, word)?;
        }
        Ok(())
    }
}

impl<S: RegisterSink + ?Sized> RegisterSink for &mut S {
    type Error = S::Error;

    fn write_register(&mut self, addr: u16, data: u32) -> Result<(), Self::Error> {
        (**self).write_register(addr, data)
    }

    fn write_repeated(&mut self, addr: u16, data: &[u32]) -> Result<(), Self::Error> {
        (**self).write_repeated(addr, data)
    }
}
