//! Light environments: the bindable unit of lighting state.

mod dirty;
mod pack;

pub use dirty::{EnvDirty, ShadowMode};

use alloc::sync::Arc;

use fraglight_registers::{map, BumpModeE, FresnelSelE, LutIdE, LutInputE};
use glam::Vec3;
use log::debug;

use crate::error::LightingError;
use crate::light::{LightDirty, LightId, LightState};
use crate::lut::LightLut;
use crate::material::Material;

/// Maximum number of lights per environment.
pub const MAX_LIGHTS: usize = map::LIGHT_COUNT;

/// One slot per [`LutIdE`] lane.
const LUT_SLOTS: usize = LutIdE::ALL.len();

/// Highest texture unit the bump and shadow samplers can read.
const MAX_TEXTURE_UNIT: u8 = 2;

/// Input configuration of one LUT slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LutInputConfig {
    pub input: LutInputE,
    /// Signed input domain. When false the hardware feeds `abs(input)`.
    pub negative: bool,
}

/// Material, scene ambient, per-pass LUT configuration and up to eight
/// lights.
///
/// Every setter marks only its own [`EnvDirty`] bit. Lights are reached
/// through [`light_mut`](Self::light_mut), which also raises that light's
/// aggregate bit. [`flush`](Self::flush) turns the dirty state into register
/// writes and clears it.
#[derive(Clone, Debug)]
pub struct LightEnvironment {
    lights: [Option<LightState>; MAX_LIGHTS],
    material: Material,
    ambient: Vec3,
    lut_inputs: [LutInputConfig; LUT_SLOTS],
    luts: [Option<Arc<LightLut>>; LUT_SLOTS],
    fresnel: FresnelSelE,
    bump_mode: BumpModeE,
    bump_unit: u8,
    bump_normal_z: bool,
    shadow_mode: ShadowMode,
    shadow_unit: u8,
    clamp_highlights: bool,
    dirty: EnvDirty,
    /// Light blocks whose hardware contents are unknown. Vacant stale slots
    /// are rewritten with default light words on the next flush.
    stale_slots: u8,
}

impl Default for LightEnvironment {
    fn default() -> Self {
        Self::init()
    }
}

impl LightEnvironment {
    /// A fresh environment: zero material, no lights, every LUT slot empty,
    /// default shadow/fresnel/bump settings. Everything is dirty so the first
    /// flush uploads the full register state.
    #[must_use]
    pub fn init() -> Self {
        let mut env = Self {
            lights: Default::default(),
            material: Material::default(),
            ambient: Vec3::ZERO,
            lut_inputs: [LutInputConfig::default(); LUT_SLOTS],
            luts: Default::default(),
            fresnel: FresnelSelE::default(),
            bump_mode: BumpModeE::default(),
            bump_unit: 0,
            bump_normal_z: false,
            shadow_mode: ShadowMode::empty(),
            shadow_unit: 0,
            clamp_highlights: true,
            dirty: EnvDirty::empty(),
            stale_slots: 0,
        };
        env.invalidate();
        env
    }

    /// Reset to [`init`](Self::init) state, dropping all lights and LUT
    /// references.
    pub fn reset(&mut self) {
        *self = Self::init();
    }

    /// Mark the whole register state dirty, e.g. after another environment
    /// was uploaded over this one.
    pub fn invalidate(&mut self) {
        self.dirty = EnvDirty::all();
        self.stale_slots = 0;
        for (slot, light) in self.lights.iter_mut().enumerate() {
            match light {
                Some(light) => light.mark_dirty(LightDirty::all()),
                None => self.stale_slots |= 1 << slot,
            }
        }
    }

    // --- Lights ---

    /// Register a new light in the lowest free slot.
    ///
    /// # Errors
    /// [`LightingError::CapacityExceeded`] when all eight slots are taken.
    pub fn add_light(&mut self) -> Result<LightId, LightingError> {
        let slot = self
            .lights
            .iter()
            .position(Option::is_none)
            .ok_or(LightingError::CapacityExceeded {
                capacity: MAX_LIGHTS,
            })?;
        let id = LightId::from_slot(slot as u8);
        let mut light = LightState::new(id);

        // A fresh light matches the default words already in a flushed slot;
        // only a slot never written needs the full block.
        let bit = 1u8 << slot;
        if self.stale_slots & bit != 0 {
            self.stale_slots &= !bit;
            light.mark_dirty(LightDirty::all());
        }
        self.lights[slot] = Some(light);
        self.dirty
            .insert(EnvDirty::LIGHT_COUNT | EnvDirty::light(slot));
        debug!("light {slot} registered");
        Ok(id)
    }

    pub fn light(&self, id: LightId) -> Option<&LightState> {
        self.lights[id.index()].as_ref()
    }

    /// Mutable access to a light. Raises the light's aggregate dirty bit.
    pub fn light_mut(&mut self, id: LightId) -> Option<&mut LightState> {
        let light = self.lights[id.index()].as_mut()?;
        self.dirty.insert(EnvDirty::light(id.index()));
        Some(light)
    }

    /// Registered lights in slot order.
    pub fn lights(&self) -> impl Iterator<Item = &LightState> {
        self.lights.iter().flatten()
    }

    pub fn light_count(&self) -> usize {
        self.lights().count()
    }

    pub fn enabled_light_count(&self) -> usize {
        self.lights().filter(|l| l.enabled()).count()
    }

    // --- Global parameters ---

    /// Replace the material. Re-derives the ambient word and every light's
    /// color words on the next flush.
    pub fn set_material(&mut self, material: &Material) {
        self.material = *material;
        self.dirty.insert(EnvDirty::MATERIAL);
    }

    pub fn material(&self) -> &Material {
        &self.material
    }

    pub fn set_ambient(&mut self, r: f32, g: f32, b: f32) {
        self.ambient = Vec3::new(r, g, b);
        self.dirty.insert(EnvDirty::AMBIENT);
    }

    pub fn ambient(&self) -> Vec3 {
        self.ambient
    }

    /// Configure LUT slot `id`. `None` disables that term of the equation.
    ///
    /// For [`LutIdE::Spotlight`] only the input selector and sign mode are
    /// recorded; spotlight tables are attached per light with
    /// [`LightState::set_spot_lut`].
    pub fn set_lut(
        &mut self,
        id: LutIdE,
        input: LutInputE,
        negative: bool,
        lut: Option<Arc<LightLut>>,
    ) {
        let lane = id.bits() as usize;
        self.lut_inputs[lane] = LutInputConfig { input, negative };
        if id.table_select().is_some() {
            self.luts[lane] = lut;
        }
        self.dirty.insert(EnvDirty::lut(id));
    }

    pub fn lut(&self, id: LutIdE) -> Option<&Arc<LightLut>> {
        self.luts[id.bits() as usize].as_ref()
    }

    pub fn lut_input(&self, id: LutIdE) -> LutInputConfig {
        self.lut_inputs[id.bits() as usize]
    }

    pub fn set_fresnel_selector(&mut self, selector: FresnelSelE) {
        self.fresnel = selector;
        self.dirty.insert(EnvDirty::FRESNEL);
    }

    pub fn fresnel_selector(&self) -> FresnelSelE {
        self.fresnel
    }

    pub fn set_bump_mode(&mut self, mode: BumpModeE) {
        self.bump_mode = mode;
        self.dirty.insert(EnvDirty::BUMP_MODE);
    }

    pub fn bump_mode(&self) -> BumpModeE {
        self.bump_mode
    }

    /// Select the texture unit (0..=2) sampled for bump mapping.
    pub fn set_bump_texture_unit(&mut self, unit: u8) -> Result<(), LightingError> {
        check_texture_unit(unit)?;
        self.bump_unit = unit;
        self.dirty.insert(EnvDirty::BUMP_UNIT);
        Ok(())
    }

    pub fn bump_texture_unit(&self) -> u8 {
        self.bump_unit
    }

    /// Take the normal's Z from the bump map instead of reconstructing it.
    pub fn set_bump_normal_z(&mut self, use_z: bool) {
        self.bump_normal_z = use_z;
        self.dirty.insert(EnvDirty::BUMP_NORMAL_Z);
    }

    pub fn bump_normal_z(&self) -> bool {
        self.bump_normal_z
    }

    pub fn set_shadow_mode(&mut self, mode: ShadowMode) {
        self.shadow_mode = mode;
        self.dirty.insert(EnvDirty::SHADOW_MODE);
    }

    pub fn shadow_mode(&self) -> ShadowMode {
        self.shadow_mode
    }

    /// Select the texture unit (0..=2) holding the shadow map.
    ///
    /// Hardware only samples shadow textures on unit 0; other units are
    /// accepted but give undefined shading.
    pub fn set_shadow_texture_unit(&mut self, unit: u8) -> Result<(), LightingError> {
        check_texture_unit(unit)?;
        self.shadow_unit = unit;
        self.dirty.insert(EnvDirty::SHADOW_UNIT);
        Ok(())
    }

    pub fn shadow_texture_unit(&self) -> u8 {
        self.shadow_unit
    }

    pub fn set_clamp_highlights(&mut self, clamp: bool) {
        self.clamp_highlights = clamp;
        self.dirty.insert(EnvDirty::CLAMP_HIGHLIGHTS);
    }

    pub fn clamp_highlights(&self) -> bool {
        self.clamp_highlights
    }

    // --- Dirty state ---

    /// Environment-level dirty mask, including per-light aggregate bits.
    pub fn dirty(&self) -> EnvDirty {
        self.dirty
    }

    /// True when a flush would emit nothing.
    pub fn is_clean(&self) -> bool {
        self.dirty.is_empty() && self.stale_slots == 0
    }

    /// Dirty mask of light `id`, or `None` for a vacant slot.
    pub fn light_dirty(&self, id: LightId) -> Option<LightDirty> {
        self.light(id).map(LightState::dirty)
    }

    /// Ids whose aggregate bit is set. Lights without it are not visited.
    pub fn changed_lights(&self) -> impl Iterator<Item = LightId> + '_ {
        (0..MAX_LIGHTS)
            .filter(|&slot| self.dirty.contains(EnvDirty::light(slot)))
            .filter(|&slot| self.lights[slot].is_some())
            .map(|slot| LightId::from_slot(slot as u8))
    }
}

fn check_texture_unit(unit: u8) -> Result<(), LightingError> {
    if unit > MAX_TEXTURE_UNIT {
        return Err(LightingError::InvalidIndex {
            what: "texture unit",
            index: unit as usize,
            max: MAX_TEXTURE_UNIT as usize,
        });
    }
    Ok(())
}
