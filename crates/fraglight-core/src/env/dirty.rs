use bitflags::bitflags;
use fraglight_registers::LutIdE;

bitflags! {
    /// Environment-level dirty regions.
    ///
    /// `LIGHT0..LIGHT7` are the per-light aggregate bits: one is set whenever
    /// the corresponding [`LightState`](crate::LightState) may have changed,
    /// so a flush never has to scan idle lights.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct EnvDirty: u32 {
        /// Material colors (ambient word and every light's color words).
        const MATERIAL = 1 << 0;
        /// Scene ambient color.
        const AMBIENT = 1 << 1;
        /// Light count and permutation.
        const LIGHT_COUNT = 1 << 2;
        const FRESNEL = 1 << 3;
        const BUMP_MODE = 1 << 4;
        const BUMP_UNIT = 1 << 5;
        const BUMP_NORMAL_Z = 1 << 6;
        const SHADOW_MODE = 1 << 7;
        const SHADOW_UNIT = 1 << 8;
        const CLAMP_HIGHLIGHTS = 1 << 9;
        const LUT_D0 = 1 << 10;
        const LUT_D1 = 1 << 11;
        const LUT_SP = 1 << 12;
        const LUT_FR = 1 << 13;
        const LUT_RB = 1 << 14;
        const LUT_RG = 1 << 15;
        const LUT_RR = 1 << 16;
        const LIGHT0 = 1 << 24;
        const LIGHT1 = 1 << 25;
        const LIGHT2 = 1 << 26;
        const LIGHT3 = 1 << 27;
        const LIGHT4 = 1 << 28;
        const LIGHT5 = 1 << 29;
        const LIGHT6 = 1 << 30;
        const LIGHT7 = 1 << 31;
    }
}

impl EnvDirty {
    const LUT_SHIFT: u32 = 10;
    const LIGHT_SHIFT: u32 = 24;

    /// All LUT slot bits.
    pub const LUTS: Self = Self::from_bits_retain(0x7F << Self::LUT_SHIFT);

    /// All per-light aggregate bits.
    pub const LIGHTS: Self = Self::from_bits_retain(0xFF << Self::LIGHT_SHIFT);

    /// Fields packed into LIGHTING_CONFIG0 (besides the LUT layer).
    pub(crate) const CONFIG0: Self = Self::from_bits_retain(
        Self::FRESNEL.bits()
            | Self::BUMP_MODE.bits()
            | Self::BUMP_UNIT.bits()
            | Self::BUMP_NORMAL_Z.bits()
            | Self::SHADOW_MODE.bits()
            | Self::SHADOW_UNIT.bits()
            | Self::CLAMP_HIGHLIGHTS.bits(),
    );

    /// Dirty bit of LUT slot `id`.
    #[must_use]
    pub const fn lut(id: LutIdE) -> Self {
        Self::from_bits_retain(1 << (Self::LUT_SHIFT + id.bits() as u32))
    }

    /// Aggregate bit of light slot `slot` (0..8).
    #[must_use]
    pub const fn light(slot: usize) -> Self {
        Self::from_bits_retain(1 << (Self::LIGHT_SHIFT + (slot as u32 & 7)))
    }
}

bitflags! {
    /// Shadow attenuation options (LIGHTING_CONFIG0 bits 16..19).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ShadowMode: u8 {
        /// Shadow the primary (diffuse) color.
        const PRIMARY = 1 << 0;
        /// Shadow the secondary (specular) color.
        const SECONDARY = 1 << 1;
        /// Invert the shadow texture sample.
        const INVERT = 1 << 2;
        /// Write the shadow term to the alpha output.
        const ALPHA = 1 << 3;
    }
}
