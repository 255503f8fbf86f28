//! Register: LIGHTING_LUT_INDEX

/// LIGHTING_LUT_INDEX
///
/// LUT upload target
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LutIndexReg(u32);

impl core::default::Default for LutIndexReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for LutIndexReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl LutIndexReg {
    pub const INDEX_OFFSET: usize = 0;
    pub const INDEX_WIDTH: usize = 8;
    pub const INDEX_MASK: u32 = 0xFF;

    /// INDEX
    ///
    /// First entry written by LUT_DATA
    #[inline(always)]
    #[must_use]
    pub fn index(&self) -> u8 {
        let val = (self.0 >> Self::INDEX_OFFSET) & Self::INDEX_MASK;
        val as u8
    }

    /// INDEX
    #[inline(always)]
    pub fn set_index(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::INDEX_MASK << Self::INDEX_OFFSET))
            | ((val & Self::INDEX_MASK) << Self::INDEX_OFFSET);
    }

    pub const SELECT_OFFSET: usize = 8;
    pub const SELECT_WIDTH: usize = 5;
    pub const SELECT_MASK: u32 = 0x1F;

    /// SELECT
    ///
    /// Table select
    #[inline(always)]
    #[must_use]
    pub fn select(&self) -> u8 {
        let val = (self.0 >> Self::SELECT_OFFSET) & Self::SELECT_MASK;
        val as u8
    }

    /// SELECT
    #[inline(always)]
    pub fn set_select(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SELECT_MASK << Self::SELECT_OFFSET))
            | ((val & Self::SELECT_MASK) << Self::SELECT_OFFSET);
    }
}

impl core::fmt::Debug for LutIndexReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LutIndexReg")
            .field("index", &self.index())
            .field("select", &self.select())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = LutIndexReg::default();
        assert_eq!(reg.index(), 0);
        assert_eq!(reg.select(), 0);
    }

    #[test]
    fn select_above_index() {
        let mut reg = LutIndexReg::default();
        reg.set_select(17);
        assert_eq!(reg.to_raw(), 17 << 8);
    }
}
