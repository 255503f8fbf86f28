//! Tests for per-light state and dirty isolation.

use std::sync::Arc;

use fraglight_core::math::fixed;
use fraglight_core::{
    LightDirty, LightEnvironment, LightId, LightLut, LightLutDa, LightingError, Material,
};
use glam::{Vec3, Vec4};

/// Environment with two registered lights and all dirty state flushed.
fn clean_env_with_two_lights() -> (LightEnvironment, LightId, LightId) {
    let mut env = LightEnvironment::init();
    let a = env.add_light().expect("first light should register");
    let b = env.add_light().expect("second light should register");
    env.flush();
    (env, a, b)
}

mod id_tests {
    use super::*;

    #[test]
    fn ids_are_bounded() {
        assert_eq!(LightId::new(7).map(LightId::index), Ok(7));
        assert_eq!(
            LightId::new(8),
            Err(LightingError::InvalidIndex {
                what: "light",
                index: 8,
                max: 7
            })
        );
    }
}

mod defaults_tests {
    use super::*;

    #[test]
    fn new_light_defaults() {
        let mut env = LightEnvironment::init();
        let id = env.add_light().expect("light should register");
        let light = env.light(id).expect("registered light should exist");

        assert!(light.enabled());
        assert!(!light.spot_enabled());
        assert!(!light.distance_attenuation_enabled());
        assert!(!light.shadow_enabled());
        assert!(!light.two_sided_diffuse());
        assert!(!light.is_directional());
        assert_eq!(light.position(), Vec4::W);
        assert_eq!(light.diffuse(), Vec3::ZERO);
    }
}

// ============================================================================
// Dirty isolation
// ============================================================================

mod dirty_tests {
    use super::*;

    #[test]
    fn diffuse_only_marks_diffuse() {
        let (mut env, a, b) = clean_env_with_two_lights();
        env.light_mut(a)
            .expect("light a should exist")
            .set_diffuse(1.0, 0.0, 0.0);

        assert_eq!(env.light_dirty(a), Some(LightDirty::DIFFUSE));
        assert_eq!(env.light_dirty(b), Some(LightDirty::empty()));
        assert_eq!(env.changed_lights().collect::<Vec<_>>(), vec![a]);
    }

    #[test]
    fn each_setter_marks_its_own_bit() {
        let (mut env, a, _) = clean_env_with_two_lights();
        let light = env.light_mut(a).expect("light a should exist");

        light.set_spot_direction(0.0, 0.0, -1.0);
        assert_eq!(light.dirty(), LightDirty::SPOT_DIRECTION);

        light.set_spot_enable(true);
        assert_eq!(
            light.dirty(),
            LightDirty::SPOT_DIRECTION | LightDirty::SPOT_ENABLE
        );

        light.set_spot_lut(Some(Arc::new(LightLut::spotlight(0.5))));
        assert!(light.dirty().contains(LightDirty::SPOT_LUT));
        assert!(!light.dirty().intersects(LightDirty::COLORS | LightDirty::POSITION));
    }

    #[test]
    fn distance_attenuation_bits_are_independent() {
        let (mut env, a, _) = clean_env_with_two_lights();
        let light = env.light_mut(a).expect("light a should exist");

        light.set_distance_attenuation_enable(true);
        assert_eq!(light.dirty(), LightDirty::DIST_ATTN_ENABLE);

        let da = LightLutDa::quadratic(0.0, 10.0, 0.1, 0.01).expect("valid range should build");
        light.set_distance_attenuation(Some(Arc::new(da)));
        assert_eq!(
            light.dirty(),
            LightDirty::DIST_ATTN_ENABLE | LightDirty::DIST_ATTN_LUT
        );
    }

    #[test]
    fn flags_mark_single_bits() {
        let (mut env, a, _) = clean_env_with_two_lights();
        let light = env.light_mut(a).expect("light a should exist");

        light.set_two_sided_diffuse(true);
        assert_eq!(light.dirty(), LightDirty::TWO_SIDED_DIFFUSE);
        light.set_shadow_enable(true);
        light.set_enabled(false);
        assert_eq!(
            light.dirty(),
            LightDirty::TWO_SIDED_DIFFUSE | LightDirty::SHADOW_ENABLE | LightDirty::ENABLED
        );
        assert!(LightDirty::FLAGS.contains(light.dirty()));
    }

    #[test]
    fn set_color_marks_three_channels() {
        let (mut env, a, _) = clean_env_with_two_lights();
        let light = env.light_mut(a).expect("light a should exist");
        light.set_color(0.5, 0.5, 0.5);
        assert_eq!(
            light.dirty(),
            LightDirty::DIFFUSE | LightDirty::SPECULAR0 | LightDirty::SPECULAR1
        );
        assert_eq!(light.specular1(), Vec3::splat(0.5));
    }

    #[test]
    fn geo_factor_slot_is_checked() {
        let (mut env, a, _) = clean_env_with_two_lights();
        let light = env.light_mut(a).expect("light a should exist");

        assert_eq!(light.set_geo_factor_enable(1, true), Ok(()));
        assert_eq!(light.dirty(), LightDirty::GEO_FACTOR1);
        assert!(light.geo_factor_enabled(1));

        assert_eq!(
            light.set_geo_factor_enable(2, true),
            Err(LightingError::InvalidIndex {
                what: "geometric factor",
                index: 2,
                max: 1
            })
        );
        // The failed call leaves state untouched.
        assert_eq!(light.dirty(), LightDirty::GEO_FACTOR1);
        assert!(!light.geo_factor_enabled(0));
    }
}

// ============================================================================
// Packed words
// ============================================================================

mod word_tests {
    use super::*;

    #[test]
    fn colors_are_material_blended() {
        let mut env = LightEnvironment::init();
        let id = env.add_light().expect("light should register");
        let light = env.light_mut(id).expect("light should exist");
        light.set_diffuse(1.0, 0.5, 0.0);
        light.set_specular0(1.0, 1.0, 1.0);

        let mtl = Material {
            diffuse: Vec3::new(0.5, 1.0, 1.0),
            specular0: Vec3::splat(0.2),
            ..Material::default()
        };
        let [spec0, spec1, diffuse, ambient] = light.color_words(&mtl);
        assert_eq!(diffuse, fixed::encode_color(0.5, 0.5, 0.0));
        assert_eq!(spec0, fixed::encode_color(0.2, 0.2, 0.2));
        assert_eq!(spec1, 0);
        assert_eq!(ambient, 0);
    }

    #[test]
    fn directional_flag_follows_w() {
        let mut env = LightEnvironment::init();
        let id = env.add_light().expect("light should register");
        let light = env.light_mut(id).expect("light should exist");

        assert_eq!(light.config_word() & 1, 0);
        light.set_position(Vec4::new(0.0, -1.0, 0.0, 0.0));
        assert!(light.is_directional());
        assert_eq!(light.config_word() & 1, 1);

        light.set_two_sided_diffuse(true);
        light
            .set_geo_factor_enable(0, true)
            .expect("slot 0 should be valid");
        assert_eq!(light.config_word(), 0b0111);
    }

    #[test]
    fn spot_direction_is_negated_and_normalized() {
        let mut env = LightEnvironment::init();
        let id = env.add_light().expect("light should register");
        let light = env.light_mut(id).expect("light should exist");

        light.set_spot_direction(0.0, 0.0, -4.0);
        assert_eq!(light.spot_direction(), Vec3::new(0.0, 0.0, -4.0));
        assert_eq!(light.spot_direction_words(), [0, 0x800]);

        light.set_spot_direction(0.0, 0.0, 0.0);
        assert_eq!(light.spot_direction_words(), [0, 0]);
    }

    #[test]
    fn attenuation_words_without_table_are_zero() {
        let mut env = LightEnvironment::init();
        let id = env.add_light().expect("light should register");
        let light = env.light_mut(id).expect("light should exist");
        assert_eq!(light.dist_attn_words(), [0, 0]);

        let da = LightLutDa::quadratic(2.0, 10.0, 0.0, 0.0).expect("valid range should build");
        let expected = da.param_words();
        light.set_distance_attenuation(Some(Arc::new(da)));
        assert_eq!(light.dist_attn_words(), expected);
    }

    #[test]
    fn shared_tables_are_not_copied() {
        let mut env = LightEnvironment::init();
        let a = env.add_light().expect("light should register");
        let b = env.add_light().expect("light should register");
        let lut = Arc::new(LightLut::spotlight(0.3));

        env.light_mut(a)
            .expect("light a should exist")
            .set_spot_lut(Some(Arc::clone(&lut)));
        env.light_mut(b)
            .expect("light b should exist")
            .set_spot_lut(Some(Arc::clone(&lut)));
        assert_eq!(Arc::strong_count(&lut), 3);

        drop(env);
        assert_eq!(Arc::strong_count(&lut), 1);
    }
}
