//! Register: LIGHTING_CONFIG1

/// LIGHTING_CONFIG1
///
/// Per-light and per-LUT disable bits
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LightingConfig1Reg(u32);

impl core::default::Default for LightingConfig1Reg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for LightingConfig1Reg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl LightingConfig1Reg {
    pub const SHADOW_DIS_OFFSET: usize = 0;
    pub const SHADOW_DIS_WIDTH: usize = 8;
    pub const SHADOW_DIS_MASK: u32 = 0xFF;

    /// SHADOW_DIS
    ///
    /// Shadow disable, one bit per light
    #[inline(always)]
    #[must_use]
    pub fn shadow_dis(&self) -> u8 {
        let val = (self.0 >> Self::SHADOW_DIS_OFFSET) & Self::SHADOW_DIS_MASK;
        val as u8
    }

    /// SHADOW_DIS
    #[inline(always)]
    pub fn set_shadow_dis(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_DIS_MASK << Self::SHADOW_DIS_OFFSET))
            | ((val & Self::SHADOW_DIS_MASK) << Self::SHADOW_DIS_OFFSET);
    }

    pub const SPOT_DIS_OFFSET: usize = 8;
    pub const SPOT_DIS_WIDTH: usize = 8;
    pub const SPOT_DIS_MASK: u32 = 0xFF;

    /// SPOT_DIS
    ///
    /// Spotlight disable, one bit per light
    #[inline(always)]
    #[must_use]
    pub fn spot_dis(&self) -> u8 {
        let val = (self.0 >> Self::SPOT_DIS_OFFSET) & Self::SPOT_DIS_MASK;
        val as u8
    }

    /// SPOT_DIS
    #[inline(always)]
    pub fn set_spot_dis(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SPOT_DIS_MASK << Self::SPOT_DIS_OFFSET))
            | ((val & Self::SPOT_DIS_MASK) << Self::SPOT_DIS_OFFSET);
    }

    pub const LUT_DIS_OFFSET: usize = 16;
    pub const LUT_DIS_WIDTH: usize = 7;
    pub const LUT_DIS_MASK: u32 = 0x7F;

    /// LUT_DIS
    ///
    /// LUT disable, one bit per LUT id
    #[inline(always)]
    #[must_use]
    pub fn lut_dis(&self) -> u8 {
        let val = (self.0 >> Self::LUT_DIS_OFFSET) & Self::LUT_DIS_MASK;
        val as u8
    }

    /// LUT_DIS
    #[inline(always)]
    pub fn set_lut_dis(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::LUT_DIS_MASK << Self::LUT_DIS_OFFSET))
            | ((val & Self::LUT_DIS_MASK) << Self::LUT_DIS_OFFSET);
    }

    pub const DIST_ATTN_DIS_OFFSET: usize = 24;
    pub const DIST_ATTN_DIS_WIDTH: usize = 8;
    pub const DIST_ATTN_DIS_MASK: u32 = 0xFF;

    /// DIST_ATTN_DIS
    ///
    /// Distance attenuation disable, one bit per light
    #[inline(always)]
    #[must_use]
    pub fn dist_attn_dis(&self) -> u8 {
        let val = (self.0 >> Self::DIST_ATTN_DIS_OFFSET) & Self::DIST_ATTN_DIS_MASK;
        val as u8
    }

    /// DIST_ATTN_DIS
    #[inline(always)]
    pub fn set_dist_attn_dis(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DIST_ATTN_DIS_MASK << Self::DIST_ATTN_DIS_OFFSET))
            | ((val & Self::DIST_ATTN_DIS_MASK) << Self::DIST_ATTN_DIS_OFFSET);
    }
}

impl core::fmt::Debug for LightingConfig1Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightingConfig1Reg")
            .field("shadow_dis", &self.shadow_dis())
            .field("spot_dis", &self.spot_dis())
            .field("lut_dis", &self.lut_dis())
            .field("dist_attn_dis", &self.dist_attn_dis())
            .finish()
    }
}
