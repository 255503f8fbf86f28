//! Register packing for [`LightEnvironment`].
//!
//! Writes come out in three groups, each in ascending address order:
//! environment words, light blocks (slot 0 first), then LUT uploads.

use alloc::vec::Vec;

use fraglight_hal::{RegisterSink, RegisterWrite};
use fraglight_registers::map;
use fraglight_registers::reg::Register;
use fraglight_registers::{LightingConfig0Reg, LightingConfig1Reg, LutIdE, LutIndexReg};
use log::{debug, trace};

use super::{EnvDirty, LightEnvironment, ShadowMode, MAX_LIGHTS};
use crate::light::{LightDirty, LightId, LightState};
use crate::lut::LightLut;
use crate::math::fixed;

// LUT usage bits for layer selection.
const USE_D0: u8 = 1 << 0;
const USE_D1: u8 = 1 << 1;
const USE_SP: u8 = 1 << 2;
const USE_FR: u8 = 1 << 3;
const USE_RB: u8 = 1 << 4;
const USE_RG: u8 = 1 << 5;
const USE_RR: u8 = 1 << 6;
const USE_DA: u8 = 1 << 7;

/// LUTs each hardware layer configuration can evaluate, by layer code.
const LAYERS: [u8; 7] = [
    USE_D0 | USE_RR | USE_SP | USE_DA,
    USE_FR | USE_RR | USE_SP | USE_DA,
    USE_D0 | USE_D1 | USE_RR | USE_DA,
    USE_D0 | USE_D1 | USE_FR | USE_DA,
    0xFF & !USE_FR,
    0xFF & !USE_D1,
    0xFF & !(USE_RB | USE_RG),
];

/// Layer code used when no configuration covers the LUTs in use.
const LAYER_ALL: u8 = 8;

/// Pick the first layer configuration that evaluates every LUT in `used`.
pub(crate) fn select_layer(used: u8) -> u8 {
    LAYERS
        .iter()
        .position(|&layer| layer & used == used)
        .map_or(LAYER_ALL, |code| code as u8)
}

fn usage_bit(id: LutIdE) -> u8 {
    match id {
        LutIdE::D0 => USE_D0,
        LutIdE::D1 => USE_D1,
        LutIdE::Spotlight => USE_SP,
        LutIdE::Fresnel => USE_FR,
        LutIdE::ReflectBlue => USE_RB,
        LutIdE::ReflectGreen => USE_RG,
        LutIdE::ReflectRed => USE_RR,
    }
}

impl LightEnvironment {
    /// Register writes the next flush would emit, without clearing anything.
    pub fn pending_writes(&self) -> Vec<RegisterWrite> {
        let mut writes = Vec::new();
        self.pack(&mut |w| writes.push(w));
        writes
    }

    /// Emit the writes for every dirty region and clear the dirty state.
    ///
    /// A second flush with no mutation in between returns nothing.
    pub fn flush(&mut self) -> Vec<RegisterWrite> {
        let writes = self.pending_writes();
        self.commit();
        debug!("lighting flush: {} writes", writes.len());
        writes
    }

    /// Send the pending writes to `sink`, clearing the dirty state only once
    /// every write was accepted. Runs of writes to one address (LUT data)
    /// go out through [`RegisterSink::write_repeated`].
    ///
    /// # Errors
    /// The first sink error. Dirty state is left untouched so the next flush
    /// retries the full set.
    pub fn flush_to<S: RegisterSink>(&mut self, sink: &mut S) -> Result<usize, S::Error> {
        let writes = self.pending_writes();
        for run in writes.chunk_by(|a, b| a.addr == b.addr) {
            if let [w] = run {
                sink.write_register(w.addr, w.data)?;
            } else {
                let data: Vec<u32> = run.iter().map(|w| w.data).collect();
                sink.write_repeated(run[0].addr, &data)?;
            }
        }
        self.commit();
        debug!("lighting flush: {} writes", writes.len());
        Ok(writes.len())
    }

    fn commit(&mut self) {
        for light in self.lights.iter_mut().flatten() {
            light.clear_dirty(LightDirty::all());
        }
        self.dirty = EnvDirty::empty();
        self.stale_slots = 0;
    }

    /// Light slots that take part in this flush, with the regions to pack.
    fn changed_slots(&self) -> [Option<LightDirty>; MAX_LIGHTS] {
        let mut out = [None; MAX_LIGHTS];
        let material = self.dirty.contains(EnvDirty::MATERIAL);
        for (slot, entry) in out.iter_mut().enumerate() {
            match &self.lights[slot] {
                Some(light) => {
                    let mut dirty = LightDirty::empty();
                    if self.dirty.contains(EnvDirty::light(slot)) {
                        dirty = light.dirty();
                    }
                    if material {
                        dirty.insert(LightDirty::COLORS);
                    }
                    if !dirty.is_empty() {
                        *entry = Some(dirty);
                    }
                }
                None if self.stale_slots & (1 << slot) != 0 => {
                    *entry = Some(LightDirty::all());
                }
                None => {}
            }
        }
        out
    }

    fn pack(&self, out: &mut dyn FnMut(RegisterWrite)) {
        let changed = self.changed_slots();
        let light_dirty = changed
            .iter()
            .flatten()
            .fold(LightDirty::empty(), |acc, &d| acc | d);
        let env = self.dirty;

        // Environment words.
        if env.intersects(EnvDirty::MATERIAL | EnvDirty::AMBIENT) {
            let ambient = self.material.scene_ambient(self.ambient);
            out(RegisterWrite::new(
                map::LIGHTING_AMBIENT,
                fixed::encode_color_vec(ambient),
            ));
        }

        let count_dirty =
            env.contains(EnvDirty::LIGHT_COUNT) || light_dirty.contains(LightDirty::ENABLED);
        if count_dirty {
            out(RegisterWrite::new(map::LIGHTING_NUM_LIGHTS, self.num_lights_word()));
        }

        let luts_dirty = env.intersects(EnvDirty::LUTS);
        let stages_dirty = light_dirty.intersects(LightDirty::STAGE_ENABLES);
        if env.intersects(EnvDirty::CONFIG0) || luts_dirty || stages_dirty {
            out(RegisterWrite::new(map::LIGHTING_CONFIG0, self.config0_word()));
        }
        if luts_dirty || stages_dirty {
            out(RegisterWrite::new(map::LIGHTING_CONFIG1, self.config1_word()));
        }
        if luts_dirty {
            let [abs, select] = self.lut_input_words();
            out(RegisterWrite::new(map::LIGHTING_LUTINPUT_ABS, abs));
            out(RegisterWrite::new(map::LIGHTING_LUTINPUT_SELECT, select));
        }
        if count_dirty {
            out(RegisterWrite::new(
                map::LIGHTING_LIGHT_PERMUTATION,
                self.permutation_word(),
            ));
        }

        // Light blocks.
        for (slot, dirty) in changed.iter().enumerate() {
            let Some(dirty) = *dirty else { continue };
            match &self.lights[slot] {
                Some(light) => light.pack(dirty, &self.material, out),
                None => LightState::new(LightId::from_slot(slot as u8)).pack(
                    dirty,
                    &self.material,
                    out,
                ),
            }
        }

        // LUT uploads.
        for id in LutIdE::ALL {
            let (Some(select), Some(lut)) = (id.table_select(), self.lut(id)) else {
                continue;
            };
            if env.contains(EnvDirty::lut(id)) {
                upload_lut(select, lut, out);
            }
        }
        for (slot, dirty) in changed.iter().enumerate() {
            let (Some(dirty), Some(light)) = (dirty, &self.lights[slot]) else {
                continue;
            };
            if let (true, Some(lut)) = (dirty.contains(LightDirty::SPOT_LUT), light.spot_lut()) {
                upload_lut(map::lut_select_spot(slot as u8), lut, out);
            }
        }
        for (slot, dirty) in changed.iter().enumerate() {
            let (Some(dirty), Some(light)) = (dirty, &self.lights[slot]) else {
                continue;
            };
            if let (true, Some(da)) = (
                dirty.contains(LightDirty::DIST_ATTN_LUT),
                light.distance_attenuation(),
            ) {
                upload_lut(map::lut_select_dist_attn(slot as u8), da.lut(), out);
            }
        }
    }

    /// LUTs the shading equation samples: env slots holding a table, plus
    /// SP / DA when any light enables them.
    fn used_luts(&self) -> u8 {
        let mut used = 0;
        for id in LutIdE::ALL {
            if self.lut(id).is_some() {
                used |= usage_bit(id);
            }
        }
        for light in self.lights() {
            if light.spot_enabled() {
                used |= USE_SP;
            }
            if light.distance_attenuation_enabled() {
                used |= USE_DA;
            }
        }
        used
    }

    /// NUM_LIGHTS word: enabled lights minus one.
    pub fn num_lights_word(&self) -> u32 {
        self.enabled_light_count().saturating_sub(1) as u32
    }

    /// LIGHT_PERMUTATION word: enabled light ids, one 4-bit lane each.
    pub fn permutation_word(&self) -> u32 {
        let enabled: heapless::Vec<u8, MAX_LIGHTS> = self
            .lights()
            .filter(|l| l.enabled())
            .map(|l| l.id().raw())
            .collect();
        enabled
            .iter()
            .enumerate()
            .fold(0, |word, (lane, &id)| word | (u32::from(id) << (4 * lane)))
    }

    /// LIGHTING_CONFIG0 word.
    pub fn config0_word(&self) -> u32 {
        let shadow = self.shadow_mode;
        let mut reg = LightingConfig0Reg::default();
        reg.set_shadow_factor_en(shadow.intersects(ShadowMode::PRIMARY | ShadowMode::SECONDARY));
        reg.set_fresnel_sel(self.fresnel);
        reg.set_layer_config(select_layer(self.used_luts()));
        reg.set_shadow_primary(shadow.contains(ShadowMode::PRIMARY));
        reg.set_shadow_secondary(shadow.contains(ShadowMode::SECONDARY));
        reg.set_shadow_invert(shadow.contains(ShadowMode::INVERT));
        reg.set_shadow_alpha(shadow.contains(ShadowMode::ALPHA));
        reg.set_bump_unit(self.bump_unit);
        reg.set_shadow_unit(self.shadow_unit);
        reg.set_clamp_highlights(self.clamp_highlights);
        reg.set_bump_mode(self.bump_mode);
        reg.set_bump_renorm_dis(self.bump_normal_z);
        reg.set_rsvd_one(true);
        reg.to_raw()
    }

    /// LIGHTING_CONFIG1 word. Vacant slots count as lights with every
    /// stage off.
    pub fn config1_word(&self) -> u32 {
        let mut shadow_dis = 0xFFu8;
        let mut spot_dis = 0xFFu8;
        let mut dist_attn_dis = 0xFFu8;
        for light in self.lights() {
            let bit = 1u8 << light.id().raw();
            if light.shadow_enabled() {
                shadow_dis &= !bit;
            }
            if light.spot_enabled() {
                spot_dis &= !bit;
            }
            if light.distance_attenuation_enabled() {
                dist_attn_dis &= !bit;
            }
        }

        let mut lut_dis = 0u8;
        for id in LutIdE::ALL {
            let disabled = match id {
                LutIdE::Spotlight => spot_dis == 0xFF,
                _ => self.lut(id).is_none(),
            };
            if disabled {
                lut_dis |= 1 << id.bits();
            }
        }

        let mut reg = LightingConfig1Reg::default();
        reg.set_shadow_dis(shadow_dis);
        reg.set_spot_dis(spot_dis);
        reg.set_lut_dis(lut_dis);
        reg.set_dist_attn_dis(dist_attn_dis);
        reg.to_raw()
    }

    /// LUTINPUT_ABS and LUTINPUT_SELECT words.
    pub fn lut_input_words(&self) -> [u32; 2] {
        let mut abs = 0;
        let mut select = 0;
        for id in LutIdE::ALL {
            let lane = 4 * u32::from(id.bits());
            let cfg = self.lut_input(id);
            if !cfg.negative {
                abs |= 1 << (lane + 1);
            }
            select |= u32::from(cfg.input.bits()) << lane;
        }
        [abs, select]
    }
}

fn upload_lut(select: u8, lut: &LightLut, out: &mut dyn FnMut(RegisterWrite)) {
    trace!("uploading LUT table {select}");
    let mut index = LutIndexReg::default();
    index.set_select(select);
    index.set_index(0);
    out(RegisterWrite::new(map::LIGHTING_LUT_INDEX, index.to_raw()));
    for &word in lut.entries() {
        out(RegisterWrite::new(map::LIGHTING_LUT_DATA, word));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_luts_uses_first_layer() {
        assert_eq!(select_layer(0), 0);
        assert_eq!(select_layer(USE_D0 | USE_RR), 0);
    }

    #[test]
    fn fresnel_with_reflection_skips_d0_layers() {
        assert_eq!(select_layer(USE_FR | USE_RR), 1);
        assert_eq!(select_layer(USE_D0 | USE_D1 | USE_FR), 3);
    }

    #[test]
    fn full_reflection_needs_later_layers() {
        assert_eq!(select_layer(USE_D0 | USE_RR | USE_RG | USE_RB), 4);
        assert_eq!(select_layer(USE_D0 | USE_FR | USE_RR | USE_RG | USE_RB), 5);
        assert_eq!(select_layer(0xFF), LAYER_ALL);
    }
}
