use bitflags::bitflags;

bitflags! {
    /// Register regions of one light that must be re-packed.
    ///
    /// Each setter on [`LightState`](super::LightState) inserts only its own
    /// bit; bits are cleared by the environment flush that emitted them.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct LightDirty: u16 {
        /// SPECULAR0 color word.
        const SPECULAR0 = 1 << 0;
        /// SPECULAR1 color word.
        const SPECULAR1 = 1 << 1;
        /// DIFFUSE color word.
        const DIFFUSE = 1 << 2;
        /// AMBIENT color word.
        const AMBIENT = 1 << 3;
        /// XY/Z position words and the directional flag.
        const POSITION = 1 << 4;
        /// SPOTDIR words.
        const SPOT_DIRECTION = 1 << 5;
        /// Spotlight table upload.
        const SPOT_LUT = 1 << 6;
        /// Spotlight enable (LIGHTING_CONFIG1).
        const SPOT_ENABLE = 1 << 7;
        /// Distance attenuation table upload and bias/scale words.
        const DIST_ATTN_LUT = 1 << 8;
        /// Distance attenuation enable (LIGHTING_CONFIG1).
        const DIST_ATTN_ENABLE = 1 << 9;
        /// Light enable (light count and permutation).
        const ENABLED = 1 << 10;
        /// Two-sided diffuse flag.
        const TWO_SIDED_DIFFUSE = 1 << 11;
        /// Geometric factor 0 flag.
        const GEO_FACTOR0 = 1 << 12;
        /// Geometric factor 1 flag.
        const GEO_FACTOR1 = 1 << 13;
        /// Shadow enable (LIGHTING_CONFIG1).
        const SHADOW_ENABLE = 1 << 14;
    }
}

impl LightDirty {
    /// The material-dependent color words.
    pub const COLORS: Self = Self::from_bits_retain(
        Self::SPECULAR0.bits()
            | Self::SPECULAR1.bits()
            | Self::DIFFUSE.bits()
            | Self::AMBIENT.bits(),
    );

    /// The boolean flags of the light.
    pub const FLAGS: Self = Self::from_bits_retain(
        Self::ENABLED.bits()
            | Self::TWO_SIDED_DIFFUSE.bits()
            | Self::GEO_FACTOR0.bits()
            | Self::GEO_FACTOR1.bits()
            | Self::SHADOW_ENABLE.bits(),
    );

    /// Bits that land in the light's CONFIG word.
    pub(crate) const CONFIG_WORD: Self = Self::from_bits_retain(
        Self::POSITION.bits()
            | Self::TWO_SIDED_DIFFUSE.bits()
            | Self::GEO_FACTOR0.bits()
            | Self::GEO_FACTOR1.bits(),
    );

    /// Bits that land in LIGHTING_CONFIG1 (and the LUT layer in CONFIG0).
    pub(crate) const STAGE_ENABLES: Self = Self::from_bits_retain(
        Self::SHADOW_ENABLE.bits() | Self::SPOT_ENABLE.bits() | Self::DIST_ATTN_ENABLE.bits(),
    );
}
