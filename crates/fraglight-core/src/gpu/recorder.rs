//! In-memory register sink.

use alloc::vec::Vec;
use core::convert::Infallible;

use fraglight_hal::{RegisterSink, RegisterWrite};

/// A [`RegisterSink`] that records every write, for command-buffer
/// assembly on the host or for inspecting what a flush produced.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegisterLog {
    writes: Vec<RegisterWrite>,
}

impl RegisterLog {
    pub const fn new() -> Self {
        Self { writes: Vec::new() }
    }

    pub fn writes(&self) -> &[RegisterWrite] {
        &self.writes
    }

    /// Hand back the recorded writes and start over.
    pub fn take(&mut self) -> Vec<RegisterWrite> {
        core::mem::take(&mut self.writes)
    }

    pub fn clear(&mut self) {
        self.writes.clear();
    }

    pub fn len(&self) -> usize {
        self.writes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Last word written to `addr`, if any.
    pub fn last_write(&self, addr: u16) -> Option<u32> {
        self.writes.iter().rev().find(|w| w.addr == addr).map(|w| w.data)
    }
}

impl RegisterSink for RegisterLog {
    type Error = Infallible;

    fn write_register(&mut self, addr: u16, data: u32) -> Result<(), Self::Error> {
        self.writes.push(RegisterWrite::new(addr, data));
        Ok(())
    }

    fn write_repeated(&mut self, addr: u16, data: &[u32]) -> Result<(), Self::Error> {
        self.writes
            .extend(data.iter().map(|&word| RegisterWrite::new(addr, word)));
        Ok(())
    }
}
