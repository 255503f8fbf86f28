//! Surface material.

use glam::Vec3;

/// Surface reflectance, copied into a [`LightEnvironment`](crate::LightEnvironment).
///
/// Channels are nominally in [0, 1]; they are multiplied with the matching
/// light colors before quantization, so out-of-range products saturate.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Material {
    /// Multiplied by the scene ambient and by each light's ambient color.
    pub ambient: Vec3,
    /// Multiplied by each light's diffuse color.
    pub diffuse: Vec3,
    /// Multiplied by each light's specular0 color (distribution 0 term).
    pub specular0: Vec3,
    /// Multiplied by each light's specular1 color (distribution 1 term).
    pub specular1: Vec3,
    /// Added to the scene ambient term.
    pub emission: Vec3,
}

impl Material {
    /// Scene ambient color written to LIGHTING_AMBIENT:
    /// `emission + ambient * scene_ambient`.
    pub fn scene_ambient(&self, scene_ambient: Vec3) -> Vec3 {
        self.emission + self.ambient * scene_ambient
    }
}
