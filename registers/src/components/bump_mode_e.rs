//! Field Enum: BUMP_MODE

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BumpModeE {
    /// Bump mapping disabled
    #[default]
    NotUsed = 0,
    /// Texture is a normal map
    AsNormal = 1,
    /// Texture is a tangent map
    AsTangent = 2,
}

impl BumpModeE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::NotUsed),
            1 => Ok(Self::AsNormal),
            2 => Ok(Self::AsTangent),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
