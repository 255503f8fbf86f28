//! Lighting lookup table synthesis.
//!
//! Every table has exactly [`LUT_SIZE`] entries. Each entry packs the sample
//! value and the delta to the next logical sample, which the hardware uses to
//! interpolate between entries. Tables are immutable once built and are shared
//! between lights and environments through `Arc`.

mod generators;

pub use generators::{quadratic_dist_attn, spot_step};

use core::fmt;

use crate::error::LightingError;
use crate::math::fixed;

/// Number of samples in every lighting LUT. Fixed by the hardware.
pub const LUT_SIZE: usize = fraglight_registers::map::LUT_ENTRIES;

/// A 256-entry quantized lookup table.
///
/// Unsigned tables cover logical inputs `0..256` (x = i/256); signed tables
/// cover `-128..128` (x = i/128) laid out so the hardware's 8-bit index
/// resolves through two's-complement wraparound: logical 0 sits at index 0,
/// logical 127 at index 127, logical -128 at index 128 and logical -1 at
/// index 255.
#[derive(Clone, PartialEq, Eq)]
pub struct LightLut {
    entries: [u32; LUT_SIZE],
    negative: bool,
}

impl LightLut {
    /// Build a table from 256 precomputed samples in hardware index order.
    ///
    /// Deltas are taken between neighbouring entries; the last entry's delta
    /// is zero.
    pub fn from_array(data: &[f32]) -> Result<Self, LightingError> {
        if data.len() != LUT_SIZE {
            return Err(LightingError::SizeMismatch {
                expected: LUT_SIZE,
                actual: data.len(),
            });
        }

        let mut values = [0.0f32; LUT_SIZE];
        values.copy_from_slice(data);
        let mut deltas = [0.0f32; LUT_SIZE];
        for i in 0..LUT_SIZE - 1 {
            deltas[i] = values[i + 1] - values[i];
        }
        Ok(Self::from_samples(&values, &deltas, false))
    }

    /// Build a table by sampling `func(x, param)`.
    ///
    /// With `negative == false`, x runs over `i/256` for `i` in `0..=256`;
    /// with `negative == true`, over `i/128` for `i` in `-128..=128`. The
    /// extra sample past the end only feeds the last entry's delta.
    pub fn from_fn<F>(func: F, param: f32, negative: bool) -> Self
    where
        F: Fn(f32, f32) -> f32,
    {
        let (min, max) = if negative { (-128i32, 128i32) } else { (0, 256) };
        let mut values = [0.0f32; LUT_SIZE];
        let mut deltas = [0.0f32; LUT_SIZE];
        let mut prev = 0.0f32;

        for i in min..=max {
            let val = func(i as f32 / max as f32, param);
            if i < max {
                values[Self::wrap(i, negative)] = val;
            }
            if i > min {
                deltas[Self::wrap(i - 1, negative)] = val - prev;
            }
            prev = val;
        }
        Self::from_samples(&values, &deltas, negative)
    }

    pub(crate) fn from_samples(
        values: &[f32; LUT_SIZE],
        deltas: &[f32; LUT_SIZE],
        negative: bool,
    ) -> Self {
        let mut entries = [0u32; LUT_SIZE];
        for (entry, (&value, &delta)) in entries.iter_mut().zip(values.iter().zip(deltas)) {
            *entry = fixed::encode_lut_entry(value, delta);
        }
        Self { entries, negative }
    }

    /// Hardware index of an in-domain logical input.
    fn wrap(logical: i32, negative: bool) -> usize {
        if negative {
            (logical & 0xFF) as usize
        } else {
            logical as usize
        }
    }

    /// True if the table covers the signed domain `-128..128`.
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Hardware index holding logical input `x`, or `None` outside the domain.
    pub fn index_of(&self, x: i32) -> Option<usize> {
        let in_domain = if self.negative {
            (-128..128).contains(&x)
        } else {
            (0..256).contains(&x)
        };
        in_domain.then(|| Self::wrap(x, self.negative))
    }

    /// Quantized sample at logical input `x`.
    pub fn sample(&self, x: i32) -> Option<f32> {
        self.index_of(x).map(|i| self.value_at(i))
    }

    /// Quantized sample value stored at hardware index `index`.
    ///
    /// # Panics
    /// Panics if `index >= LUT_SIZE`.
    pub fn value_at(&self, index: usize) -> f32 {
        fixed::lut_entry_value(self.entries[index])
    }

    /// Quantized delta-to-next stored at hardware index `index`.
    ///
    /// # Panics
    /// Panics if `index >= LUT_SIZE`.
    pub fn delta_at(&self, index: usize) -> f32 {
        fixed::lut_entry_delta(self.entries[index])
    }

    /// Packed LUT_DATA words in hardware index order.
    pub fn entries(&self) -> &[u32; LUT_SIZE] {
        &self.entries
    }
}

impl fmt::Debug for LightLut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightLut")
            .field("negative", &self.negative)
            .field("first", &self.entries[0])
            .field("last", &self.entries[LUT_SIZE - 1])
            .finish_non_exhaustive()
    }
}

/// Distance attenuation table: a [`LightLut`] plus the bias/scale mapping a
/// distance range onto its 256 entries.
///
/// `index = clamp((dist - bias) * scale, 0, 255)`, with `bias = from` and
/// `scale = 255 / (to - from)`.
#[derive(Clone, PartialEq)]
pub struct LightLutDa {
    lut: LightLut,
    bias: f32,
    scale: f32,
    params: [u32; 2],
}

impl LightLutDa {
    /// Build a table by sampling `func(dist, arg0, arg1)` at 256 evenly spaced
    /// distances covering `[from, to]`.
    pub fn from_fn<F>(
        func: F,
        from: f32,
        to: f32,
        arg0: f32,
        arg1: f32,
    ) -> Result<Self, LightingError>
    where
        F: Fn(f32, f32, f32) -> f32,
    {
        if !from.is_finite() {
            return Err(LightingError::InvalidParameter { value: from });
        }
        if !to.is_finite() {
            return Err(LightingError::InvalidParameter { value: to });
        }
        if to <= from {
            return Err(LightingError::InvalidRange { from, to });
        }

        let scale = (LUT_SIZE - 1) as f32 / (to - from);
        let bias = from;
        let params = fixed::encode_distance_param(bias, scale)?;

        let mut values = [0.0f32; LUT_SIZE];
        let mut deltas = [0.0f32; LUT_SIZE];
        let mut prev = 0.0f32;
        for i in 0..=LUT_SIZE {
            let dist = bias + i as f32 / scale;
            let val = func(dist, arg0, arg1);
            if i < LUT_SIZE {
                values[i] = val;
            }
            if i > 0 {
                deltas[i - 1] = val - prev;
            }
            prev = val;
        }

        Ok(Self {
            lut: LightLut::from_samples(&values, &deltas, false),
            bias,
            scale,
            params,
        })
    }

    /// Table index selected for a light-to-fragment distance.
    pub fn index_for(&self, dist: f32) -> usize {
        let t = (dist - self.bias) * self.scale;
        t.clamp(0.0, (LUT_SIZE - 1) as f32) as usize
    }

    pub fn lut(&self) -> &LightLut {
        &self.lut
    }

    pub fn bias(&self) -> f32 {
        self.bias
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// ATTENUATION_BIAS / ATTENUATION_SCALE register words.
    pub fn param_words(&self) -> [u32; 2] {
        self.params
    }
}

impl fmt::Debug for LightLutDa {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LightLutDa")
            .field("bias", &self.bias)
            .field("scale", &self.scale)
            .field("lut", &self.lut)
            .finish()
    }
}
