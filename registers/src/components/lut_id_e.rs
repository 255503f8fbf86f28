//! Field Enum: LUT_ID

/// Lighting lookup table function.
///
/// The discriminant is the table's lane index in LUTINPUT_ABS/LUTINPUT_SELECT
/// and its bit index (plus 16) in LIGHTING_CONFIG1.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LutIdE {
    /// Distribution 0 (specular0 term)
    D0 = 0,
    /// Distribution 1 (specular1 term)
    D1 = 1,
    /// Spotlight falloff (per-light table)
    Spotlight = 2,
    /// Fresnel (alpha output)
    Fresnel = 3,
    /// Reflection, blue channel
    ReflectBlue = 4,
    /// Reflection, green channel
    ReflectGreen = 5,
    /// Reflection, red channel
    ReflectRed = 6,
}

impl LutIdE {
    /// Every id, in lane order.
    pub const ALL: [Self; 7] = [
        Self::D0,
        Self::D1,
        Self::Spotlight,
        Self::Fresnel,
        Self::ReflectBlue,
        Self::ReflectGreen,
        Self::ReflectRed,
    ];

    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::D0),
            1 => Ok(Self::D1),
            2 => Ok(Self::Spotlight),
            3 => Ok(Self::Fresnel),
            4 => Ok(Self::ReflectBlue),
            5 => Ok(Self::ReflectGreen),
            6 => Ok(Self::ReflectRed),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Hardware table select for upload, `None` for the per-light spotlight table.
    #[must_use]
    pub const fn table_select(&self) -> Option<u8> {
        match self {
            Self::Spotlight => None,
            other => Some(other.bits()),
        }
    }
}
