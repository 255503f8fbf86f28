//! Per-light parameters and register packing.

mod dirty;

pub use dirty::LightDirty;

use alloc::sync::Arc;

use fraglight_hal::RegisterWrite;
use fraglight_registers::map;
use fraglight_registers::reg::Register;
use fraglight_registers::LightConfigReg;
use glam::{Vec3, Vec4};

use crate::error::LightingError;
use crate::lut::{LightLut, LightLutDa};
use crate::material::Material;
use crate::math::fixed;

/// Slot index of a light inside its environment (0..8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightId(u8);

impl LightId {
    /// Validate a slot index.
    pub fn new(index: usize) -> Result<Self, LightingError> {
        if index >= map::LIGHT_COUNT {
            return Err(LightingError::InvalidIndex {
                what: "light",
                index,
                max: map::LIGHT_COUNT - 1,
            });
        }
        Ok(Self(index as u8))
    }

    pub(crate) const fn from_slot(slot: u8) -> Self {
        Self(slot)
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    pub const fn raw(self) -> u8 {
        self.0
    }
}

/// Boolean light switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LightFlags {
    enabled: bool,
    two_sided_diffuse: bool,
    geo_factor: [bool; 2],
    shadow: bool,
    spot: bool,
    dist_attn: bool,
}

impl Default for LightFlags {
    fn default() -> Self {
        Self {
            enabled: true,
            two_sided_diffuse: false,
            geo_factor: [false; 2],
            shadow: false,
            spot: false,
            dist_attn: false,
        }
    }
}

/// One light source slot of a [`LightEnvironment`](crate::LightEnvironment).
///
/// Lights are created by [`LightEnvironment::add_light`](crate::LightEnvironment::add_light)
/// and stay in their slot for the environment's lifetime. A new light is
/// enabled, positional at the origin, black, with spotlight, distance
/// attenuation and shadows off.
#[derive(Clone, Debug)]
pub struct LightState {
    id: LightId,
    ambient: Vec3,
    diffuse: Vec3,
    specular0: Vec3,
    specular1: Vec3,
    position: Vec4,
    spot_direction: Vec3,
    spot_lut: Option<Arc<LightLut>>,
    dist_attn_lut: Option<Arc<LightLutDa>>,
    flags: LightFlags,
    dirty: LightDirty,
}

impl LightState {
    pub(crate) fn new(id: LightId) -> Self {
        Self {
            id,
            ambient: Vec3::ZERO,
            diffuse: Vec3::ZERO,
            specular0: Vec3::ZERO,
            specular1: Vec3::ZERO,
            position: Vec4::W,
            spot_direction: Vec3::ZERO,
            spot_lut: None,
            dist_attn_lut: None,
            flags: LightFlags::default(),
            dirty: LightDirty::empty(),
        }
    }

    pub fn id(&self) -> LightId {
        self.id
    }

    /// Regions changed since the last flush.
    pub fn dirty(&self) -> LightDirty {
        self.dirty
    }

    pub(crate) fn mark_dirty(&mut self, bits: LightDirty) {
        self.dirty.insert(bits);
    }

    pub(crate) fn clear_dirty(&mut self, bits: LightDirty) {
        self.dirty.remove(bits);
    }

    // --- Colors ---

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = Vec3::new(r, g, b);
        self.dirty.insert(LightDirty::AMBIENT);
    }

    pub fn set_diffuse(&mut self, r: f32, g: f32, b: f32) {
        self.diffuse = Vec3::new(r, g, b);
        self.dirty.insert(LightDirty::DIFFUSE);
    }

    pub fn set_specular0(&mut self, r: f32, g: f32, b: f32) {
        self.specular0 = Vec3::new(r, g, b);
        self.dirty.insert(LightDirty::SPECULAR0);
    }

    pub fn set_specular1(&mut self, r: f32, g: f32, b: f32) {
        self.specular1 = Vec3::new(r, g, b);
        self.dirty.insert(LightDirty::SPECULAR1);
    }

    /// Set diffuse, specular0 and specular1 to the same color.
    pub fn set_color(&mut self, r: f32, g: f32, b: f32) {
        self.set_diffuse(r, g, b);
        self.set_specular0(r, g, b);
        self.set_specular1(r, g, b);
    }

    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    pub fn diffuse(&self) -> Vec3 {
        self.diffuse
    }

    pub fn specular0(&self) -> Vec3 {
        self.specular0
    }

    pub fn specular1(&self) -> Vec3 {
        self.specular1
    }

    // --- Geometry ---

    /// Set the light position. `w == 0` makes the light directional with
    /// `xyz` as its direction; any other `w` makes it positional.
    pub fn set_position(&mut self, pos: Vec4) {
        self.position = pos;
        self.dirty.insert(LightDirty::POSITION);
    }

    pub fn position(&self) -> Vec4 {
        self.position
    }

    pub fn is_directional(&self) -> bool {
        self.position.w == 0.0
    }

    /// Set the direction the spotlight points at. Stored as given; packing
    /// normalizes it.
    pub fn set_spot_direction(&mut self, x: f32, y: f32, z: f32) {
        self.spot_direction = Vec3::new(x, y, z);
        self.dirty.insert(LightDirty::SPOT_DIRECTION);
    }

    pub fn spot_direction(&self) -> Vec3 {
        self.spot_direction
    }

    // --- Tables ---

    /// Attach (or detach with `None`) the spotlight falloff table.
    pub fn set_spot_lut(&mut self, lut: Option<Arc<LightLut>>) {
        self.spot_lut = lut;
        self.dirty.insert(LightDirty::SPOT_LUT);
    }

    pub fn spot_lut(&self) -> Option<&Arc<LightLut>> {
        self.spot_lut.as_ref()
    }

    pub fn set_spot_enable(&mut self, enable: bool) {
        self.flags.spot = enable;
        self.dirty.insert(LightDirty::SPOT_ENABLE);
    }

    pub fn spot_enabled(&self) -> bool {
        self.flags.spot
    }

    /// Attach (or detach with `None`) the distance attenuation table.
    pub fn set_distance_attenuation(&mut self, lut: Option<Arc<LightLutDa>>) {
        self.dist_attn_lut = lut;
        self.dirty.insert(LightDirty::DIST_ATTN_LUT);
    }

    pub fn distance_attenuation(&self) -> Option<&Arc<LightLutDa>> {
        self.dist_attn_lut.as_ref()
    }

    pub fn set_distance_attenuation_enable(&mut self, enable: bool) {
        self.flags.dist_attn = enable;
        self.dirty.insert(LightDirty::DIST_ATTN_ENABLE);
    }

    pub fn distance_attenuation_enabled(&self) -> bool {
        self.flags.dist_attn
    }

    // --- Flags ---

    /// Enable or disable the light.
    ///
    /// At least one light of a bound environment must stay enabled; shading
    /// with none is undefined on hardware.
    pub fn set_enabled(&mut self, enable: bool) {
        self.flags.enabled = enable;
        self.dirty.insert(LightDirty::ENABLED);
    }

    pub fn enabled(&self) -> bool {
        self.flags.enabled
    }

    pub fn set_two_sided_diffuse(&mut self, enable: bool) {
        self.flags.two_sided_diffuse = enable;
        self.dirty.insert(LightDirty::TWO_SIDED_DIFFUSE);
    }

    pub fn two_sided_diffuse(&self) -> bool {
        self.flags.two_sided_diffuse
    }

    /// Enable or disable the Cook-Torrance geometric factor `slot` (0 or 1).
    pub fn set_geo_factor_enable(&mut self, slot: usize, enable: bool) -> Result<(), LightingError> {
        let bit = match slot {
            0 => LightDirty::GEO_FACTOR0,
            1 => LightDirty::GEO_FACTOR1,
            _ => {
                return Err(LightingError::InvalidIndex {
                    what: "geometric factor",
                    index: slot,
                    max: 1,
                })
            }
        };
        self.flags.geo_factor[slot] = enable;
        self.dirty.insert(bit);
        Ok(())
    }

    /// Geometric factor `slot` state; `false` for slots other than 0 and 1.
    pub fn geo_factor_enabled(&self, slot: usize) -> bool {
        self.flags.geo_factor.get(slot).copied().unwrap_or(false)
    }

    pub fn set_shadow_enable(&mut self, enable: bool) {
        self.flags.shadow = enable;
        self.dirty.insert(LightDirty::SHADOW_ENABLE);
    }

    pub fn shadow_enabled(&self) -> bool {
        self.flags.shadow
    }

    // --- Packing ---

    /// Material-blended color words: specular0, specular1, diffuse, ambient.
    pub fn color_words(&self, mtl: &Material) -> [u32; 4] {
        [
            fixed::encode_color_vec(mtl.specular0 * self.specular0),
            fixed::encode_color_vec(mtl.specular1 * self.specular1),
            fixed::encode_color_vec(mtl.diffuse * self.diffuse),
            fixed::encode_color_vec(mtl.ambient * self.ambient),
        ]
    }

    /// XY / Z position words.
    pub fn position_words(&self) -> [u32; 2] {
        fixed::encode_position(self.position.truncate())
    }

    /// SPOTDIR_XY / SPOTDIR_Z words. The hardware takes the normalized
    /// vector pointing back toward the light.
    pub fn spot_direction_words(&self) -> [u32; 2] {
        fixed::encode_direction((-self.spot_direction).normalize_or_zero())
    }

    /// CONFIG word.
    pub fn config_word(&self) -> u32 {
        let mut reg = LightConfigReg::default();
        reg.set_directional(self.is_directional());
        reg.set_two_sided_diffuse(self.flags.two_sided_diffuse);
        reg.set_geo_factor0(self.flags.geo_factor[0]);
        reg.set_geo_factor1(self.flags.geo_factor[1]);
        reg.to_raw()
    }

    /// ATTENUATION_BIAS / ATTENUATION_SCALE words, zero without a table.
    pub fn dist_attn_words(&self) -> [u32; 2] {
        self.dist_attn_lut
            .as_ref()
            .map_or([0, 0], |lut| lut.param_words())
    }

    /// Emit the words of this light's register block selected by `dirty`,
    /// in ascending address order. Table uploads are emitted separately.
    pub(crate) fn pack(&self, dirty: LightDirty, mtl: &Material, out: &mut dyn FnMut(RegisterWrite)) {
        let reg = |offset| map::light_reg(self.id.raw(), offset);

        if dirty.intersects(LightDirty::COLORS) {
            let colors = self.color_words(mtl);
            let slots = [
                (LightDirty::SPECULAR0, map::LIGHT_SPECULAR0),
                (LightDirty::SPECULAR1, map::LIGHT_SPECULAR1),
                (LightDirty::DIFFUSE, map::LIGHT_DIFFUSE),
                (LightDirty::AMBIENT, map::LIGHT_AMBIENT),
            ];
            for ((bit, offset), word) in slots.into_iter().zip(colors) {
                if dirty.contains(bit) {
                    out(RegisterWrite::new(reg(offset), word));
                }
            }
        }

        if dirty.contains(LightDirty::POSITION) {
            let [xy, z] = self.position_words();
            out(RegisterWrite::new(reg(map::LIGHT_XY), xy));
            out(RegisterWrite::new(reg(map::LIGHT_Z), z));
        }

        if dirty.contains(LightDirty::SPOT_DIRECTION) {
            let [xy, z] = self.spot_direction_words();
            out(RegisterWrite::new(reg(map::LIGHT_SPOTDIR_XY), xy));
            out(RegisterWrite::new(reg(map::LIGHT_SPOTDIR_Z), z));
        }

        if dirty.intersects(LightDirty::CONFIG_WORD) {
            out(RegisterWrite::new(reg(map::LIGHT_CONFIG), self.config_word()));
        }

        if dirty.contains(LightDirty::DIST_ATTN_LUT) {
            let [bias, scale] = self.dist_attn_words();
            out(RegisterWrite::new(reg(map::LIGHT_ATTENUATION_BIAS), bias));
            out(RegisterWrite::new(reg(map::LIGHT_ATTENUATION_SCALE), scale));
        }
    }
}
