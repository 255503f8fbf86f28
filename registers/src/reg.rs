//! Register value abstraction.

/// A packed register value with a fixed width.
pub trait Register: Copy + Default {
    /// Integer type holding the full register value.
    type Regwidth: num_traits::PrimInt;

    /// Wrap a raw value.
    ///
    /// # Safety
    ///
    /// Reserved bits are not validated; the caller must pass a value whose
    /// reserved fields hold their documented reset pattern.
    unsafe fn from_raw(val: Self::Regwidth) -> Self;

    fn to_raw(self) -> Self::Regwidth;
}
