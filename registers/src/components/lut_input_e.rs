//! Field Enum: LUT_INPUT

/// Dot product fed into a lighting LUT.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LutInputE {
    /// N·H
    #[default]
    NormalHalf = 0,
    /// V·H
    ViewHalf = 1,
    /// N·V
    NormalView = 2,
    /// L·N
    LightNormal = 3,
    /// -L·P (spotlight direction)
    LightSpot = 4,
    /// cos(phi), tangent-plane half-vector angle
    CosPhi = 5,
}

impl LutInputE {
    /// Decode a bit pattern into an encoded enum variant.
    ///
    /// # Errors
    /// Returns an error if the bit pattern does not match any encoded variants.
    pub const fn from_bits(bits: u8) -> Result<Self, crate::encode::UnknownVariant<u8>> {
        match bits {
            0 => Ok(Self::NormalHalf),
            1 => Ok(Self::ViewHalf),
            2 => Ok(Self::NormalView),
            3 => Ok(Self::LightNormal),
            4 => Ok(Self::LightSpot),
            5 => Ok(Self::CosPhi),
            bits => Err(crate::encode::UnknownVariant::new(bits)),
        }
    }

    /// The bit pattern of the variant
    #[must_use]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }
}
