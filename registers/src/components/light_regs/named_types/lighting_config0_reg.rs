//! Register: LIGHTING_CONFIG0

// Instances of named component types
pub use crate::components::fresnel_sel_e as fresnel_sel;
pub use crate::components::bump_mode_e as bump_mode;

/// LIGHTING_CONFIG0
///
/// Fragment lighting configuration: shadow, fresnel, bump mapping and LUT layer
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LightingConfig0Reg(u32);

impl core::default::Default for LightingConfig0Reg {
    fn default() -> Self {
        Self(0x80000000)
    }
}

impl crate::reg::Register for LightingConfig0Reg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl LightingConfig0Reg {
    pub const SHADOW_FACTOR_EN_OFFSET: usize = 0;
    pub const SHADOW_FACTOR_EN_WIDTH: usize = 1;
    pub const SHADOW_FACTOR_EN_MASK: u32 = 0x1;

    /// SHADOW_FACTOR_EN
    ///
    /// Shadow attenuation enabled
    #[inline(always)]
    #[must_use]
    pub fn shadow_factor_en(&self) -> bool {
        let val = (self.0 >> Self::SHADOW_FACTOR_EN_OFFSET) & Self::SHADOW_FACTOR_EN_MASK;
        val != 0
    }

    /// SHADOW_FACTOR_EN
    #[inline(always)]
    pub fn set_shadow_factor_en(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_FACTOR_EN_MASK << Self::SHADOW_FACTOR_EN_OFFSET))
            | ((val & Self::SHADOW_FACTOR_EN_MASK) << Self::SHADOW_FACTOR_EN_OFFSET);
    }

    pub const FRESNEL_SEL_OFFSET: usize = 2;
    pub const FRESNEL_SEL_WIDTH: usize = 2;
    pub const FRESNEL_SEL_MASK: u32 = 0x3;

    /// FRESNEL_SEL
    ///
    /// Fresnel alpha output selector
    ///
    /// # Errors
    /// Returns an error if the field holds a pattern with no matching variant.
    #[inline(always)]
    pub fn fresnel_sel(&self) -> Result<fresnel_sel::FresnelSelE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::FRESNEL_SEL_OFFSET) & Self::FRESNEL_SEL_MASK;
        fresnel_sel::FresnelSelE::from_bits(val as u8)
    }

    /// FRESNEL_SEL
    #[inline(always)]
    pub fn set_fresnel_sel(&mut self, val: fresnel_sel::FresnelSelE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::FRESNEL_SEL_MASK << Self::FRESNEL_SEL_OFFSET))
            | ((val & Self::FRESNEL_SEL_MASK) << Self::FRESNEL_SEL_OFFSET);
    }

    pub const LAYER_CONFIG_OFFSET: usize = 4;
    pub const LAYER_CONFIG_WIDTH: usize = 4;
    pub const LAYER_CONFIG_MASK: u32 = 0xF;

    /// LAYER_CONFIG
    ///
    /// LUT layer configuration
    #[inline(always)]
    #[must_use]
    pub fn layer_config(&self) -> u8 {
        let val = (self.0 >> Self::LAYER_CONFIG_OFFSET) & Self::LAYER_CONFIG_MASK;
        val as u8
    }

    /// LAYER_CONFIG
    #[inline(always)]
    pub fn set_layer_config(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::LAYER_CONFIG_MASK << Self::LAYER_CONFIG_OFFSET))
            | ((val & Self::LAYER_CONFIG_MASK) << Self::LAYER_CONFIG_OFFSET);
    }

    pub const SHADOW_PRIMARY_OFFSET: usize = 16;
    pub const SHADOW_PRIMARY_WIDTH: usize = 1;
    pub const SHADOW_PRIMARY_MASK: u32 = 0x1;

    /// SHADOW_PRIMARY
    ///
    /// Shadow attenuates primary color
    #[inline(always)]
    #[must_use]
    pub fn shadow_primary(&self) -> bool {
        let val = (self.0 >> Self::SHADOW_PRIMARY_OFFSET) & Self::SHADOW_PRIMARY_MASK;
        val != 0
    }

    /// SHADOW_PRIMARY
    #[inline(always)]
    pub fn set_shadow_primary(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_PRIMARY_MASK << Self::SHADOW_PRIMARY_OFFSET))
            | ((val & Self::SHADOW_PRIMARY_MASK) << Self::SHADOW_PRIMARY_OFFSET);
    }

    pub const SHADOW_SECONDARY_OFFSET: usize = 17;
    pub const SHADOW_SECONDARY_WIDTH: usize = 1;
    pub const SHADOW_SECONDARY_MASK: u32 = 0x1;

    /// SHADOW_SECONDARY
    ///
    /// Shadow attenuates secondary color
    #[inline(always)]
    #[must_use]
    pub fn shadow_secondary(&self) -> bool {
        let val = (self.0 >> Self::SHADOW_SECONDARY_OFFSET) & Self::SHADOW_SECONDARY_MASK;
        val != 0
    }

    /// SHADOW_SECONDARY
    #[inline(always)]
    pub fn set_shadow_secondary(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_SECONDARY_MASK << Self::SHADOW_SECONDARY_OFFSET))
            | ((val & Self::SHADOW_SECONDARY_MASK) << Self::SHADOW_SECONDARY_OFFSET);
    }

    pub const SHADOW_INVERT_OFFSET: usize = 18;
    pub const SHADOW_INVERT_WIDTH: usize = 1;
    pub const SHADOW_INVERT_MASK: u32 = 0x1;

    /// SHADOW_INVERT
    ///
    /// Invert shadow attenuation
    #[inline(always)]
    #[must_use]
    pub fn shadow_invert(&self) -> bool {
        let val = (self.0 >> Self::SHADOW_INVERT_OFFSET) & Self::SHADOW_INVERT_MASK;
        val != 0
    }

    /// SHADOW_INVERT
    #[inline(always)]
    pub fn set_shadow_invert(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_INVERT_MASK << Self::SHADOW_INVERT_OFFSET))
            | ((val & Self::SHADOW_INVERT_MASK) << Self::SHADOW_INVERT_OFFSET);
    }

    pub const SHADOW_ALPHA_OFFSET: usize = 19;
    pub const SHADOW_ALPHA_WIDTH: usize = 1;
    pub const SHADOW_ALPHA_MASK: u32 = 0x1;

    /// SHADOW_ALPHA
    ///
    /// Write shadow attenuation to alpha
    #[inline(always)]
    #[must_use]
    pub fn shadow_alpha(&self) -> bool {
        let val = (self.0 >> Self::SHADOW_ALPHA_OFFSET) & Self::SHADOW_ALPHA_MASK;
        val != 0
    }

    /// SHADOW_ALPHA
    #[inline(always)]
    pub fn set_shadow_alpha(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_ALPHA_MASK << Self::SHADOW_ALPHA_OFFSET))
            | ((val & Self::SHADOW_ALPHA_MASK) << Self::SHADOW_ALPHA_OFFSET);
    }

    pub const BUMP_UNIT_OFFSET: usize = 22;
    pub const BUMP_UNIT_WIDTH: usize = 2;
    pub const BUMP_UNIT_MASK: u32 = 0x3;

    /// BUMP_UNIT
    ///
    /// Texture unit holding the bump map
    #[inline(always)]
    #[must_use]
    pub fn bump_unit(&self) -> u8 {
        let val = (self.0 >> Self::BUMP_UNIT_OFFSET) & Self::BUMP_UNIT_MASK;
        val as u8
    }

    /// BUMP_UNIT
    #[inline(always)]
    pub fn set_bump_unit(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BUMP_UNIT_MASK << Self::BUMP_UNIT_OFFSET))
            | ((val & Self::BUMP_UNIT_MASK) << Self::BUMP_UNIT_OFFSET);
    }

    pub const SHADOW_UNIT_OFFSET: usize = 24;
    pub const SHADOW_UNIT_WIDTH: usize = 2;
    pub const SHADOW_UNIT_MASK: u32 = 0x3;

    /// SHADOW_UNIT
    ///
    /// Texture unit holding the shadow map
    #[inline(always)]
    #[must_use]
    pub fn shadow_unit(&self) -> u8 {
        let val = (self.0 >> Self::SHADOW_UNIT_OFFSET) & Self::SHADOW_UNIT_MASK;
        val as u8
    }

    /// SHADOW_UNIT
    #[inline(always)]
    pub fn set_shadow_unit(&mut self, val: u8) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::SHADOW_UNIT_MASK << Self::SHADOW_UNIT_OFFSET))
            | ((val & Self::SHADOW_UNIT_MASK) << Self::SHADOW_UNIT_OFFSET);
    }

    pub const CLAMP_HIGHLIGHTS_OFFSET: usize = 27;
    pub const CLAMP_HIGHLIGHTS_WIDTH: usize = 1;
    pub const CLAMP_HIGHLIGHTS_MASK: u32 = 0x1;

    /// CLAMP_HIGHLIGHTS
    ///
    /// Clamp specular highlights where N·L < 0
    #[inline(always)]
    #[must_use]
    pub fn clamp_highlights(&self) -> bool {
        let val = (self.0 >> Self::CLAMP_HIGHLIGHTS_OFFSET) & Self::CLAMP_HIGHLIGHTS_MASK;
        val != 0
    }

    /// CLAMP_HIGHLIGHTS
    #[inline(always)]
    pub fn set_clamp_highlights(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::CLAMP_HIGHLIGHTS_MASK << Self::CLAMP_HIGHLIGHTS_OFFSET))
            | ((val & Self::CLAMP_HIGHLIGHTS_MASK) << Self::CLAMP_HIGHLIGHTS_OFFSET);
    }

    pub const BUMP_MODE_OFFSET: usize = 28;
    pub const BUMP_MODE_WIDTH: usize = 2;
    pub const BUMP_MODE_MASK: u32 = 0x3;

    /// BUMP_MODE
    ///
    /// Bump map interpretation
    ///
    /// # Errors
    /// Returns an error if the field holds a pattern with no matching variant.
    #[inline(always)]
    pub fn bump_mode(&self) -> Result<bump_mode::BumpModeE, crate::encode::UnknownVariant<u8>> {
        let val = (self.0 >> Self::BUMP_MODE_OFFSET) & Self::BUMP_MODE_MASK;
        bump_mode::BumpModeE::from_bits(val as u8)
    }

    /// BUMP_MODE
    #[inline(always)]
    pub fn set_bump_mode(&mut self, val: bump_mode::BumpModeE) {
        let val = val.bits() as u32;
        self.0 = (self.0 & !(Self::BUMP_MODE_MASK << Self::BUMP_MODE_OFFSET))
            | ((val & Self::BUMP_MODE_MASK) << Self::BUMP_MODE_OFFSET);
    }

    pub const BUMP_RENORM_DIS_OFFSET: usize = 30;
    pub const BUMP_RENORM_DIS_WIDTH: usize = 1;
    pub const BUMP_RENORM_DIS_MASK: u32 = 0x1;

    /// BUMP_RENORM_DIS
    ///
    /// Take normal Z from the map instead of reconstructing it
    #[inline(always)]
    #[must_use]
    pub fn bump_renorm_dis(&self) -> bool {
        let val = (self.0 >> Self::BUMP_RENORM_DIS_OFFSET) & Self::BUMP_RENORM_DIS_MASK;
        val != 0
    }

    /// BUMP_RENORM_DIS
    #[inline(always)]
    pub fn set_bump_renorm_dis(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::BUMP_RENORM_DIS_MASK << Self::BUMP_RENORM_DIS_OFFSET))
            | ((val & Self::BUMP_RENORM_DIS_MASK) << Self::BUMP_RENORM_DIS_OFFSET);
    }

    pub const RSVD_ONE_OFFSET: usize = 31;
    pub const RSVD_ONE_WIDTH: usize = 1;
    pub const RSVD_ONE_MASK: u32 = 0x1;

    /// RSVD_ONE
    ///
    /// Reserved, must be written as 1
    #[inline(always)]
    #[must_use]
    pub fn rsvd_one(&self) -> bool {
        let val = (self.0 >> Self::RSVD_ONE_OFFSET) & Self::RSVD_ONE_MASK;
        val != 0
    }

    /// RSVD_ONE
    #[inline(always)]
    pub fn set_rsvd_one(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::RSVD_ONE_MASK << Self::RSVD_ONE_OFFSET))
            | ((val & Self::RSVD_ONE_MASK) << Self::RSVD_ONE_OFFSET);
    }
}

impl core::fmt::Debug for LightingConfig0Reg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightingConfig0Reg")
            .field("shadow_factor_en", &self.shadow_factor_en())
            .field("fresnel_sel", &self.fresnel_sel())
            .field("layer_config", &self.layer_config())
            .field("shadow_primary", &self.shadow_primary())
            .field("shadow_secondary", &self.shadow_secondary())
            .field("shadow_invert", &self.shadow_invert())
            .field("shadow_alpha", &self.shadow_alpha())
            .field("bump_unit", &self.bump_unit())
            .field("shadow_unit", &self.shadow_unit())
            .field("clamp_highlights", &self.clamp_highlights())
            .field("bump_mode", &self.bump_mode())
            .field("bump_renorm_dis", &self.bump_renorm_dis())
            .field("rsvd_one", &self.rsvd_one())
            .finish()
    }
}
