//! Tests for lookup table synthesis.

use fraglight_core::lut::{quadratic_dist_attn, spot_step};
use fraglight_core::{LightLut, LightLutDa, LightingError, LUT_SIZE};

fn identity(x: f32, _: f32) -> f32 {
    x
}

fn dist_identity(d: f32, _: f32, _: f32) -> f32 {
    d / 16.0
}

// ============================================================================
// from_array
// ============================================================================

mod from_array_tests {
    use super::*;

    #[test]
    fn rejects_wrong_length() {
        let short = [0.5f32; 255];
        assert_eq!(
            LightLut::from_array(&short),
            Err(LightingError::SizeMismatch {
                expected: 256,
                actual: 255
            })
        );
        let long = [0.5f32; 300];
        assert!(matches!(
            LightLut::from_array(&long),
            Err(LightingError::SizeMismatch { actual: 300, .. })
        ));
    }

    #[test]
    fn values_and_neighbour_deltas() {
        let data: Vec<f32> = (0..LUT_SIZE).map(|i| i as f32 / 512.0).collect();
        let lut = LightLut::from_array(&data).expect("256 samples should build");

        assert!(!lut.is_negative());
        assert_eq!(lut.value_at(0), 0.0);
        assert_eq!(lut.value_at(128), 0.25);
        assert_eq!(lut.delta_at(10), 1.0 / 512.0);
        assert_eq!(lut.delta_at(LUT_SIZE - 1), 0.0);
    }

    #[test]
    fn values_are_clamped() {
        let mut data = [0.0f32; LUT_SIZE];
        data[0] = 5.0;
        data[1] = -5.0;
        let lut = LightLut::from_array(&data).expect("256 samples should build");
        assert_eq!(lut.value_at(0), 4095.0 / 4096.0);
        assert_eq!(lut.value_at(1), 0.0);
    }
}

// ============================================================================
// from_fn
// ============================================================================

mod from_fn_tests {
    use super::*;

    #[test]
    fn unsigned_domain_samples_i_over_256() {
        let lut = LightLut::from_fn(identity, 0.0, false);
        assert_eq!(lut.sample(0), Some(0.0));
        assert_eq!(lut.sample(64), Some(0.25));
        assert_eq!(lut.sample(128), Some(0.5));
        assert_eq!(lut.index_of(255), Some(255));
        assert_eq!(lut.index_of(256), None);
        assert_eq!(lut.index_of(-1), None);
    }

    #[test]
    fn last_unsigned_delta_uses_sample_past_the_end() {
        let lut = LightLut::from_fn(identity, 0.0, false);
        // f(256/256) - f(255/256)
        assert_eq!(lut.delta_at(255), 1.0 / 256.0);
    }

    #[test]
    fn signed_remap_wraps_around() {
        let lut = LightLut::from_fn(identity, 0.0, true);
        assert!(lut.is_negative());
        assert_eq!(lut.index_of(0), Some(0));
        assert_eq!(lut.index_of(-1), Some(255));
        assert_eq!(lut.index_of(127), Some(127));
        assert_eq!(lut.index_of(-128), Some(128));
        assert_eq!(lut.index_of(128), None);
    }

    #[test]
    fn signed_table_holds_samples_at_wrapped_indices() {
        let lut = LightLut::from_fn(|x, _| x.abs(), 0.0, true);
        // x = 64/128 at index 64, x = -64/128 at index 192
        assert_eq!(lut.value_at(64), 0.5);
        assert_eq!(lut.value_at(192), 0.5);
        assert_eq!(lut.sample(-64), Some(0.5));
        // Logical -1 (index 255) interpolates toward logical 0.
        assert_eq!(lut.delta_at(255), -1.0 / 128.0);
    }

    #[test]
    fn param_is_forwarded() {
        let lut = LightLut::from_fn(|_, p| p, 0.75, false);
        assert!((0..LUT_SIZE).all(|i| lut.value_at(i) == 0.75));
        assert!((0..LUT_SIZE).all(|i| lut.delta_at(i) == 0.0));
    }
}

// ============================================================================
// Distance attenuation
// ============================================================================

mod dist_attn_tests {
    use super::*;

    #[test]
    fn scale_and_bias_cover_range() {
        let da = LightLutDa::from_fn(dist_identity, 2.0, 10.0, 0.0, 0.0)
            .expect("valid range should build");
        assert_eq!(da.scale(), 255.0 / 8.0);
        assert_eq!(da.bias(), 2.0);
        assert_eq!(da.index_for(2.0), 0);
        assert_eq!(da.index_for(10.0), 255);
    }

    #[test]
    fn index_is_clamped() {
        let da = LightLutDa::from_fn(dist_identity, 2.0, 10.0, 0.0, 0.0)
            .expect("valid range should build");
        assert_eq!(da.index_for(0.0), 0);
        assert_eq!(da.index_for(100.0), 255);
    }

    #[test]
    fn samples_span_from_to() {
        let da = LightLutDa::from_fn(dist_identity, 2.0, 10.0, 0.0, 0.0)
            .expect("valid range should build");
        assert_eq!(da.lut().value_at(0), 2.0 / 16.0);
        let last = da.lut().value_at(255);
        assert!((last - 10.0 / 16.0).abs() < 1.0 / 4096.0);
    }

    #[test]
    fn param_words_encode_bias_and_scale() {
        let da = LightLutDa::from_fn(dist_identity, 2.0, 10.0, 0.0, 0.0)
            .expect("valid range should build");
        assert_eq!(da.param_words(), [64 << 12, (67 << 12) | 0xFE0]);
    }

    #[test]
    fn empty_or_reversed_range_is_rejected() {
        assert_eq!(
            LightLutDa::from_fn(dist_identity, 5.0, 5.0, 0.0, 0.0),
            Err(LightingError::InvalidRange { from: 5.0, to: 5.0 })
        );
        assert!(matches!(
            LightLutDa::from_fn(dist_identity, 10.0, 2.0, 0.0, 0.0),
            Err(LightingError::InvalidRange { .. })
        ));
    }

    #[test]
    fn non_finite_range_is_rejected() {
        assert!(matches!(
            LightLutDa::from_fn(dist_identity, 0.0, f32::INFINITY, 0.0, 0.0),
            Err(LightingError::InvalidParameter { .. })
        ));
    }
}

// ============================================================================
// Generators
// ============================================================================

mod generator_tests {
    use super::*;

    #[test]
    fn phong_is_power_curve() {
        let lut = LightLut::phong(2.0);
        assert!(!lut.is_negative());
        assert_eq!(lut.sample(0), Some(0.0));
        assert_eq!(lut.sample(128), Some(0.25));
    }

    #[test]
    fn spotlight_cone_is_signed_step() {
        // 60 degrees: cos = 0.5
        let lut = LightLut::spotlight(core::f32::consts::FRAC_PI_3);
        assert!(lut.is_negative());
        assert_eq!(lut.sample(127), Some(4095.0 / 4096.0));
        assert_eq!(lut.sample(32), Some(0.0));
        assert_eq!(lut.sample(-64), Some(0.0));
    }

    #[test]
    fn spot_step_edges() {
        assert_eq!(spot_step(0.5, 0.5), 1.0);
        assert_eq!(spot_step(0.49, 0.5), 0.0);
    }

    #[test]
    fn quadratic_falloff() {
        assert_eq!(quadratic_dist_attn(0.0, 1.0, 1.0), 1.0);
        assert_eq!(quadratic_dist_attn(1.0, 1.0, 2.0), 0.25);

        let da = LightLutDa::quadratic(0.0, 8.0, 0.0, 1.0).expect("valid range should build");
        assert_eq!(da.lut().value_at(0), 4095.0 / 4096.0);
        assert!(da.lut().value_at(255) < 0.02);
    }
}
