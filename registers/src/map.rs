//! Fragment lighting register addresses.
//!
//! Registers are 32 bits wide and addressed by word index.

// --- Per-light blocks (0x140-0x1BF) ---

/// Base address of light 0's register block.
pub const LIGHT0_BASE: u16 = 0x140;
/// Address stride between consecutive light blocks.
pub const LIGHT_STRIDE: u16 = 0x10;
/// Number of hardware light blocks.
pub const LIGHT_COUNT: usize = 8;

/// Specular0 color (material-blended).
pub const LIGHT_SPECULAR0: u16 = 0x0;
/// Specular1 color (material-blended).
pub const LIGHT_SPECULAR1: u16 = 0x1;
/// Diffuse color (material-blended).
pub const LIGHT_DIFFUSE: u16 = 0x2;
/// Ambient color (material-blended).
pub const LIGHT_AMBIENT: u16 = 0x3;
/// Position X [15:0] and Y [31:16], half floats.
pub const LIGHT_XY: u16 = 0x4;
/// Position Z [15:0], half float.
pub const LIGHT_Z: u16 = 0x5;
/// Spotlight direction X [12:0] and Y [28:16], S1.11.
pub const LIGHT_SPOTDIR_XY: u16 = 0x6;
/// Spotlight direction Z [12:0], S1.11.
pub const LIGHT_SPOTDIR_Z: u16 = 0x7;
/// Directional, two-sided diffuse and geometric factor flags.
pub const LIGHT_CONFIG: u16 = 0x9;
/// Distance attenuation bias, float20.
pub const LIGHT_ATTENUATION_BIAS: u16 = 0xA;
/// Distance attenuation scale, float20.
pub const LIGHT_ATTENUATION_SCALE: u16 = 0xB;

/// Absolute address of a register inside light `id`'s block.
#[inline]
#[must_use]
pub const fn light_reg(id: u8, offset: u16) -> u16 {
    LIGHT0_BASE + LIGHT_STRIDE * id as u16 + offset
}

// --- Lighting stage (0x08F, 0x1C0-0x1D9) ---

/// Fragment lighting enable (1 = enabled).
pub const LIGHTING_ENABLE: u16 = 0x08F;
/// Scene ambient color (material emission + material ambient * env ambient).
pub const LIGHTING_AMBIENT: u16 = 0x1C0;
/// Number of active lights minus one.
pub const LIGHTING_NUM_LIGHTS: u16 = 0x1C2;
/// Shading configuration: fresnel, shadow, bump and LUT layer selection.
pub const LIGHTING_CONFIG0: u16 = 0x1C3;
/// Per-light and per-LUT disable bits.
pub const LIGHTING_CONFIG1: u16 = 0x1C4;
/// LUT upload target: table select [12:8] and start index [7:0].
pub const LIGHTING_LUT_INDEX: u16 = 0x1C5;
/// Fragment lighting disable (1 = disabled).
pub const LIGHTING_DISABLE: u16 = 0x1C6;
/// LUT upload data port (auto-increments the LUT index).
pub const LIGHTING_LUT_DATA: u16 = 0x1C8;
/// Per-LUT absolute-value input flags.
pub const LIGHTING_LUTINPUT_ABS: u16 = 0x1D0;
/// Per-LUT input selectors.
pub const LIGHTING_LUTINPUT_SELECT: u16 = 0x1D1;
/// Light id permutation, one 4-bit lane per active light.
pub const LIGHTING_LIGHT_PERMUTATION: u16 = 0x1D9;

// --- LUT table selects ---

/// Number of entries in every lighting LUT.
pub const LUT_ENTRIES: usize = 256;

/// Hardware table select for light `id`'s spotlight LUT.
#[inline]
#[must_use]
pub const fn lut_select_spot(id: u8) -> u8 {
    8 + id
}

/// Hardware table select for light `id`'s distance attenuation LUT.
#[inline]
#[must_use]
pub const fn lut_select_dist_attn(id: u8) -> u8 {
    16 + id
}
