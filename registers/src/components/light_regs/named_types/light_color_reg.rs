//! Register: LIGHT_COLOR

/// LIGHT_COLOR
///
/// Material-blended light color (UNORM8 channels in 10-bit lanes)
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LightColorReg(u32);

impl core::default::Default for LightColorReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for LightColorReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl LightColorReg {
    pub const B_OFFSET: usize = 0;
    pub const B_WIDTH: usize = 8;
    pub const B_MASK: u32 = 0xFF;

    /// B
    ///
    /// Blue channel
    #[inline(always)]
    #[must_use]
    pub fn b(&self) -> u8 {
        let val = (self.0 >> Self::B_OFFSET) & Self::B_MASK;
        val as u8
    }

    /// B
    #[inline(always)]
    pub fn set_b(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::B_MASK << Self::B_OFFSET))
            | ((val & Self::B_MASK) << Self::B_OFFSET);
    }

    pub const G_OFFSET: usize = 10;
    pub const G_WIDTH: usize = 8;
    pub const G_MASK: u32 = 0xFF;

    /// G
    ///
    /// Green channel
    #[inline(always)]
    #[must_use]
    pub fn g(&self) -> u8 {
        let val = (self.0 >> Self::G_OFFSET) & Self::G_MASK;
        val as u8
    }

    /// G
    #[inline(always)]
    pub fn set_g(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::G_MASK << Self::G_OFFSET))
            | ((val & Self::G_MASK) << Self::G_OFFSET);
    }

    pub const R_OFFSET: usize = 20;
    pub const R_WIDTH: usize = 8;
    pub const R_MASK: u32 = 0xFF;

    /// R
    ///
    /// Red channel
    #[inline(always)]
    #[must_use]
    pub fn r(&self) -> u8 {
        let val = (self.0 >> Self::R_OFFSET) & Self::R_MASK;
        val as u8
    }

    /// R
    #[inline(always)]
    pub fn set_r(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::R_MASK << Self::R_OFFSET))
            | ((val & Self::R_MASK) << Self::R_OFFSET);
    }
}

impl core::fmt::Debug for LightColorReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightColorReg")
            .field("b", &self.b())
            .field("g", &self.g())
            .field("r", &self.r())
            .finish()
    }
}
