//! Register: LIGHTING_LUT_DATA

/// LIGHTING_LUT_DATA
///
/// One LUT sample: UQ0.12 value and sign-magnitude S1.11 delta to the next sample
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LutEntryReg(u32);

impl core::default::Default for LutEntryReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for LutEntryReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl LutEntryReg {
    pub const VALUE_OFFSET: usize = 0;
    pub const VALUE_WIDTH: usize = 12;
    pub const VALUE_MASK: u32 = 0xFFF;

    /// VALUE
    ///
    /// Sample value
    #[inline(always)]
    #[must_use]
    pub fn value(&self) -> u16 {
        let val = (self.0 >> Self::VALUE_OFFSET) & Self::VALUE_MASK;
        val as u16
    }

    /// VALUE
    #[inline(always)]
    pub fn set_value(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::VALUE_MASK << Self::VALUE_OFFSET))
            | ((val & Self::VALUE_MASK) << Self::VALUE_OFFSET);
    }

    pub const DELTA_OFFSET: usize = 12;
    pub const DELTA_WIDTH: usize = 12;
    pub const DELTA_MASK: u32 = 0xFFF;

    /// DELTA
    ///
    /// Delta to the next sample (bit 11 is the sign)
    #[inline(always)]
    #[must_use]
    pub fn delta(&self) -> u16 {
        let val = (self.0 >> Self::DELTA_OFFSET) & Self::DELTA_MASK;
        val as u16
    }

    /// DELTA
    #[inline(always)]
    pub fn set_delta(&mut self, val: u16) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DELTA_MASK << Self::DELTA_OFFSET))
            | ((val & Self::DELTA_MASK) << Self::DELTA_OFFSET);
    }
}

impl core::fmt::Debug for LutEntryReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LutEntryReg")
            .field("value", &self.value())
            .field("delta", &self.delta())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = LutEntryReg::default();
        assert_eq!(reg.value(), 0);
        assert_eq!(reg.delta(), 0);
    }

    #[test]
    fn value_and_delta_do_not_overlap() {
        let mut reg = LutEntryReg::default();
        reg.set_value(0xFFF);
        reg.set_delta(0x801);
        assert_eq!(reg.to_raw(), 0x801FFF);
        reg.set_value(0);
        assert_eq!(reg.delta(), 0x801);
    }
}
