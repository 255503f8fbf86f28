//! Closed-form table generators.

use super::{LightLut, LightLutDa};
use crate::error::LightingError;

/// `1 / (1 + linear*d + quad*d²)`.
pub fn quadratic_dist_attn(dist: f32, linear: f32, quad: f32) -> f32 {
    1.0 / (1.0 + linear * dist + quad * dist * dist)
}

/// 1 inside the cone (`angle >= cutoff`, both as cosines), 0 outside.
pub fn spot_step(angle: f32, cutoff: f32) -> f32 {
    if angle >= cutoff {
        1.0
    } else {
        0.0
    }
}

impl LightLut {
    /// Phong specular lobe: `x^shininess` over the unsigned domain.
    pub fn phong(shininess: f32) -> Self {
        Self::from_fn(libm::powf, shininess, false)
    }

    /// Hard-edged spotlight cone of half-angle `angle` radians over the
    /// signed domain.
    pub fn spotlight(angle: f32) -> Self {
        Self::from_fn(spot_step, libm::cosf(angle), true)
    }
}

impl LightLutDa {
    /// Quadratic falloff between `from` and `to`.
    pub fn quadratic(from: f32, to: f32, linear: f32, quad: f32) -> Result<Self, LightingError> {
        Self::from_fn(quadratic_dist_attn, from, to, linear, quad)
    }
}
