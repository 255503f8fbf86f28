//! Register: LIGHT_CONFIG

/// LIGHT_CONFIG
///
/// Per-light shading flags
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq)]
pub struct LightConfigReg(u32);

impl core::default::Default for LightConfigReg {
    fn default() -> Self {
        Self(0x0)
    }
}

impl crate::reg::Register for LightConfigReg {
    type Regwidth = u32;

    unsafe fn from_raw(val: Self::Regwidth) -> Self {
        Self(val)
    }

    fn to_raw(self) -> Self::Regwidth {
        self.0
    }
}

impl LightConfigReg {
    pub const DIRECTIONAL_OFFSET: usize = 0;
    pub const DIRECTIONAL_WIDTH: usize = 1;
    pub const DIRECTIONAL_MASK: u32 = 0x1;

    /// DIRECTIONAL
    ///
    /// Light position is a direction (w == 0)
    #[inline(always)]
    #[must_use]
    pub fn directional(&self) -> bool {
        let val = (self.0 >> Self::DIRECTIONAL_OFFSET) & Self::DIRECTIONAL_MASK;
        val != 0
    }

    /// DIRECTIONAL
    #[inline(always)]
    pub fn set_directional(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::DIRECTIONAL_MASK << Self::DIRECTIONAL_OFFSET))
            | ((val & Self::DIRECTIONAL_MASK) << Self::DIRECTIONAL_OFFSET);
    }

    pub const TWO_SIDED_DIFFUSE_OFFSET: usize = 1;
    pub const TWO_SIDED_DIFFUSE_WIDTH: usize = 1;
    pub const TWO_SIDED_DIFFUSE_MASK: u32 = 0x1;

    /// TWO_SIDED_DIFFUSE
    ///
    /// Use |L·N| instead of max(L·N, 0)
    #[inline(always)]
    #[must_use]
    pub fn two_sided_diffuse(&self) -> bool {
        let val = (self.0 >> Self::TWO_SIDED_DIFFUSE_OFFSET) & Self::TWO_SIDED_DIFFUSE_MASK;
        val != 0
    }

    /// TWO_SIDED_DIFFUSE
    #[inline(always)]
    pub fn set_two_sided_diffuse(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::TWO_SIDED_DIFFUSE_MASK << Self::TWO_SIDED_DIFFUSE_OFFSET))
            | ((val & Self::TWO_SIDED_DIFFUSE_MASK) << Self::TWO_SIDED_DIFFUSE_OFFSET);
    }

    pub const GEO_FACTOR0_OFFSET: usize = 2;
    pub const GEO_FACTOR0_WIDTH: usize = 1;
    pub const GEO_FACTOR0_MASK: u32 = 0x1;

    /// GEO_FACTOR0
    ///
    /// Cook-Torrance geometric factor on the specular0 term
    #[inline(always)]
    #[must_use]
    pub fn geo_factor0(&self) -> bool {
        let val = (self.0 >> Self::GEO_FACTOR0_OFFSET) & Self::GEO_FACTOR0_MASK;
        val != 0
    }

    /// GEO_FACTOR0
    #[inline(always)]
    pub fn set_geo_factor0(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::GEO_FACTOR0_MASK << Self::GEO_FACTOR0_OFFSET))
            | ((val & Self::GEO_FACTOR0_MASK) << Self::GEO_FACTOR0_OFFSET);
    }

    pub const GEO_FACTOR1_OFFSET: usize = 3;
    pub const GEO_FACTOR1_WIDTH: usize = 1;
    pub const GEO_FACTOR1_MASK: u32 = 0x1;

    /// GEO_FACTOR1
    ///
    /// Cook-Torrance geometric factor on the specular1 term
    #[inline(always)]
    #[must_use]
    pub fn geo_factor1(&self) -> bool {
        let val = (self.0 >> Self::GEO_FACTOR1_OFFSET) & Self::GEO_FACTOR1_MASK;
        val != 0
    }

    /// GEO_FACTOR1
    #[inline(always)]
    pub fn set_geo_factor1(&mut self, val: bool) {
        let val = val as u32;
        self.0 = (self.0 & !(Self::GEO_FACTOR1_MASK << Self::GEO_FACTOR1_OFFSET))
            | ((val & Self::GEO_FACTOR1_MASK) << Self::GEO_FACTOR1_OFFSET);
    }
}

impl core::fmt::Debug for LightConfigReg {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("LightConfigReg")
            .field("directional", &self.directional())
            .field("two_sided_diffuse", &self.two_sided_diffuse())
            .field("geo_factor0", &self.geo_factor0())
            .field("geo_factor1", &self.geo_factor1())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Register;

    #[test]
    fn test_default() {
        let reg = LightConfigReg::default();
        assert!(!reg.directional());
        assert!(!reg.two_sided_diffuse());
        assert!(!reg.geo_factor0());
        assert!(!reg.geo_factor1());
    }

    #[test]
    fn set_and_clear_single_flag() {
        let mut reg = LightConfigReg::default();
        reg.set_geo_factor1(true);
        assert_eq!(reg.to_raw(), 0x8);
        reg.set_directional(true);
        reg.set_geo_factor1(false);
        assert_eq!(reg.to_raw(), 0x1);
    }
}
