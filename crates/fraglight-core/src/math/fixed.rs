//! Fixed-point and reduced-precision float conversions for lighting registers.
//!
//! Converts f32 values to the lighting block's register formats:
//! - UNORM8 color channels in 10-bit lanes (R [27:20], G [17:10], B [7:0])
//! - 13-bit S1.11 two's-complement direction components
//! - IEEE half floats for light positions
//! - float20 (1 sign, 7 exponent, 12 mantissa) for distance attenuation
//! - LUT entries: UQ0.12 value plus sign-magnitude S1.11 delta

use fixed::types::{I5F11, U4F12, U5F11};
use fraglight_registers::reg::Register;
use fraglight_registers::{LightColorReg, LutEntryReg};
use glam::Vec3;
use half::f16;

use crate::error::LightingError;

/// Width mask of one S1.11 direction component.
pub const DIRECTION_MASK: u16 = 0x1FFF;

/// Largest finite float20 magnitude bits (exponent 0x7E, full mantissa).
const F20_MAX_FINITE: u32 = (0x7E << 12) | 0xFFF;

/// Convert f32 in [0, 1] to an 8-bit unsigned fraction, rounding to nearest.
///
/// Out-of-range input saturates; NaN encodes as 0.
pub fn f32_to_unorm8(val: f32) -> u8 {
    let clamped = val.clamp(0.0, 1.0);
    libm::roundf(clamped * 255.0) as u8
}

/// Pack an RGB color into the lighting color register format.
pub fn encode_color(r: f32, g: f32, b: f32) -> u32 {
    let mut reg = LightColorReg::default();
    reg.set_r(f32_to_unorm8(r));
    reg.set_g(f32_to_unorm8(g));
    reg.set_b(f32_to_unorm8(b));
    reg.to_raw()
}

/// [`encode_color`] for a vector holding (r, g, b).
pub fn encode_color_vec(color: Vec3) -> u32 {
    encode_color(color.x, color.y, color.z)
}

/// Unpack a color register word back to (r, g, b) in [0, 1].
pub fn decode_color(word: u32) -> Vec3 {
    let channel = |offset: usize, mask: u32| ((word >> offset) & mask) as f32 / 255.0;
    Vec3::new(
        channel(LightColorReg::R_OFFSET, LightColorReg::R_MASK),
        channel(LightColorReg::G_OFFSET, LightColorReg::G_MASK),
        channel(LightColorReg::B_OFFSET, LightColorReg::B_MASK),
    )
}

/// Convert f32 to 13-bit S1.11 two's-complement fixed-point.
///
/// Range: -1.0 to +1.0 (resolution 1/2048), saturating. NaN encodes as 0.
pub fn f32_to_s1_11(val: f32) -> u16 {
    if val.is_nan() {
        return 0;
    }
    let fixed = I5F11::saturating_from_num(val.clamp(-1.0, 1.0));
    (fixed.to_bits() as u16) & DIRECTION_MASK
}

/// Sign-extend a 13-bit S1.11 value back to f32.
pub fn s1_11_to_f32(bits: u16) -> f32 {
    let extended = ((bits << 3) as i16) >> 3;
    I5F11::from_bits(extended).to_num::<f32>()
}

/// Pack a direction vector into the SPOTDIR_XY / SPOTDIR_Z register pair.
pub fn encode_direction(dir: Vec3) -> [u32; 2] {
    let x = f32_to_s1_11(dir.x) as u32;
    let y = f32_to_s1_11(dir.y) as u32;
    let z = f32_to_s1_11(dir.z) as u32;
    [x | (y << 16), z]
}

/// Unpack a SPOTDIR_XY / SPOTDIR_Z register pair.
pub fn decode_direction(words: [u32; 2]) -> Vec3 {
    Vec3::new(
        s1_11_to_f32((words[0] & 0xFFFF) as u16),
        s1_11_to_f32((words[0] >> 16) as u16),
        s1_11_to_f32((words[1] & 0xFFFF) as u16),
    )
}

/// Pack a position into the XY / Z register pair (IEEE half floats).
pub fn encode_position(pos: Vec3) -> [u32; 2] {
    let x = f16::from_f32(pos.x).to_bits() as u32;
    let y = f16::from_f32(pos.y).to_bits() as u32;
    let z = f16::from_f32(pos.z).to_bits() as u32;
    [x | (y << 16), z]
}

/// Convert f32 to float20: 1 sign bit, 7-bit exponent (bias 63), 12-bit mantissa.
///
/// Mantissa bits below the 12 kept are truncated. Magnitudes too small for
/// the exponent range flush to zero; magnitudes too large saturate to the
/// largest finite value.
pub fn f32_to_f20(val: f32) -> Result<u32, LightingError> {
    if !val.is_finite() {
        return Err(LightingError::InvalidParameter { value: val });
    }
    let bits = val.to_bits();
    let sign = bits >> 31;
    let exponent = ((bits >> 23) & 0xFF) as i32 - 127 + 63;
    let mantissa = (bits >> 11) & 0xFFF;

    let magnitude = if val == 0.0 || exponent <= 0 {
        0
    } else if exponent >= 0x7F {
        F20_MAX_FINITE
    } else {
        ((exponent as u32) << 12) | mantissa
    };
    Ok((sign << 19) | magnitude)
}

/// Convert float20 bits back to f32.
pub fn f20_to_f32(bits: u32) -> f32 {
    let sign = (bits >> 19) & 1;
    let exponent = (bits >> 12) & 0x7F;
    let mantissa = bits & 0xFFF;
    if exponent == 0 && mantissa == 0 {
        return if sign != 0 { -0.0 } else { 0.0 };
    }
    f32::from_bits((sign << 31) | ((exponent + 127 - 63) << 23) | (mantissa << 11))
}

/// Encode distance attenuation bias and scale as the ATTENUATION_BIAS /
/// ATTENUATION_SCALE register pair.
pub fn encode_distance_param(bias: f32, scale: f32) -> Result<[u32; 2], LightingError> {
    Ok([f32_to_f20(bias)?, f32_to_f20(scale)?])
}

/// Pack one LUT sample and the delta to the next sample into a LUT_DATA word.
///
/// The value saturates to [0, 4095/4096]; the delta to [-2047/2048, 2047/2048].
pub fn encode_lut_entry(value: f32, delta: f32) -> u32 {
    let value_bits = if value > 0.0 {
        U4F12::saturating_from_num(value).to_bits().min(0xFFF)
    } else {
        0
    };

    let mut delta_bits = 0u16;
    if delta != 0.0 && !delta.is_nan() {
        delta_bits = U5F11::saturating_from_num(delta.abs()).to_bits().min(0x7FF);
        if delta < 0.0 {
            delta_bits |= 0x800;
        }
    }

    let mut reg = LutEntryReg::default();
    reg.set_value(value_bits);
    reg.set_delta(delta_bits);
    reg.to_raw()
}

/// Sample value of a LUT_DATA word.
pub fn lut_entry_value(word: u32) -> f32 {
    ((word >> LutEntryReg::VALUE_OFFSET) & LutEntryReg::VALUE_MASK) as f32 / 4096.0
}

/// Delta-to-next of a LUT_DATA word.
pub fn lut_entry_delta(word: u32) -> f32 {
    let raw = (word >> LutEntryReg::DELTA_OFFSET) & LutEntryReg::DELTA_MASK;
    let magnitude = (raw & 0x7FF) as f32 / 2048.0;
    if raw & 0x800 != 0 {
        -magnitude
    } else {
        magnitude
    }
}
