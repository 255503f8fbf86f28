//! Tests for the fixed-point and reduced-precision register encodings.

use fraglight_core::math::fixed;
use fraglight_core::LightingError;
use glam::Vec3;

// ============================================================================
// Colors
// ============================================================================

mod color_tests {
    use super::*;

    #[test]
    fn channels_land_in_ten_bit_lanes() {
        let word = fixed::encode_color(1.0, 0.0, 0.0);
        assert_eq!(word, 0xFF << 20);

        let word = fixed::encode_color(0.0, 1.0, 0.0);
        assert_eq!(word, 0xFF << 10);

        let word = fixed::encode_color(0.0, 0.0, 1.0);
        assert_eq!(word, 0xFF);
    }

    #[test]
    fn out_of_range_is_clamped() {
        assert_eq!(
            fixed::encode_color(2.0, -1.0, 0.5),
            fixed::encode_color(1.0, 0.0, 0.5)
        );
        assert_eq!(fixed::f32_to_unorm8(f32::NAN), 0);
    }

    #[test]
    fn round_trip_within_one_step() {
        for i in 0..=1000 {
            let f = i as f32 / 1000.0;
            let decoded = fixed::decode_color(fixed::encode_color(f, f, f));
            for channel in decoded.to_array() {
                assert!(
                    (channel - f).abs() <= 1.0 / 255.0,
                    "channel {channel} too far from {f}"
                );
            }
        }
    }

    #[test]
    fn rounds_to_nearest() {
        // 0.2 * 255 = 51.0
        assert_eq!(fixed::f32_to_unorm8(0.2), 51);
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(fixed::f32_to_unorm8(0.5), 128);
    }
}

// ============================================================================
// Directions
// ============================================================================

mod direction_tests {
    use super::*;

    #[test]
    fn unit_axes() {
        assert_eq!(fixed::f32_to_s1_11(1.0), 0x800);
        assert_eq!(fixed::f32_to_s1_11(-1.0), 0x1800);
        assert_eq!(fixed::f32_to_s1_11(0.5), 0x400);
    }

    #[test]
    fn saturates_outside_unit_range() {
        assert_eq!(fixed::f32_to_s1_11(3.0), fixed::f32_to_s1_11(1.0));
        assert_eq!(fixed::f32_to_s1_11(-3.0), fixed::f32_to_s1_11(-1.0));
        assert_eq!(fixed::f32_to_s1_11(f32::NAN), 0);
    }

    #[test]
    fn packs_xy_and_z_words() {
        let [xy, z] = fixed::encode_direction(Vec3::new(0.5, -0.5, 1.0));
        assert_eq!(xy & 0x1FFF, 0x400);
        assert_eq!(xy >> 16, 0x1C00);
        assert_eq!(z, 0x800);

        let decoded = fixed::decode_direction([xy, z]);
        assert_eq!(decoded, Vec3::new(0.5, -0.5, 1.0));
    }
}

// ============================================================================
// Positions
// ============================================================================

mod position_tests {
    use super::*;

    #[test]
    fn half_float_lanes() {
        let [xy, z] = fixed::encode_position(Vec3::new(1.0, 2.0, -0.5));
        // f16: 1.0 = 0x3C00, 2.0 = 0x4000, -0.5 = 0xB800
        assert_eq!(xy, 0x3C00 | (0x4000 << 16));
        assert_eq!(z, 0xB800);
    }
}

// ============================================================================
// float20 distance parameters
// ============================================================================

mod f20_tests {
    use super::*;

    #[test]
    fn exact_values() {
        assert_eq!(fixed::f32_to_f20(1.0), Ok(63 << 12));
        assert_eq!(fixed::f32_to_f20(0.0), Ok(0));
        assert_eq!(fixed::f32_to_f20(-2.0), Ok((1 << 19) | (64 << 12)));
    }

    #[test]
    fn attenuation_scale_round_trips() {
        // 255 / 8: exponent 4, mantissa 127/128
        let bits = fixed::f32_to_f20(31.875).expect("finite value should encode");
        assert_eq!(bits, (67 << 12) | 0xFE0);
        assert_eq!(fixed::f20_to_f32(bits), 31.875);
    }

    #[test]
    fn tiny_flushes_and_huge_saturates() {
        assert_eq!(fixed::f32_to_f20(1.0e-30), Ok(0));
        let huge = fixed::f32_to_f20(1.0e30).expect("finite value should encode");
        assert_eq!(huge, (0x7E << 12) | 0xFFF);
    }

    #[test]
    fn non_finite_is_rejected() {
        assert!(matches!(
            fixed::f32_to_f20(f32::INFINITY),
            Err(LightingError::InvalidParameter { .. })
        ));
        assert!(matches!(
            fixed::encode_distance_param(f32::NAN, 1.0),
            Err(LightingError::InvalidParameter { .. })
        ));
        assert!(matches!(
            fixed::encode_distance_param(0.0, f32::NEG_INFINITY),
            Err(LightingError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn distance_param_pair() {
        let words = fixed::encode_distance_param(2.0, 31.875).expect("finite values should encode");
        assert_eq!(words, [64 << 12, (67 << 12) | 0xFE0]);
    }
}

// ============================================================================
// LUT entries
// ============================================================================

mod lut_entry_tests {
    use super::*;

    #[test]
    fn value_and_delta_fields() {
        let word = fixed::encode_lut_entry(0.5, 0.25);
        assert_eq!(word & 0xFFF, 0x800);
        assert_eq!((word >> 12) & 0xFFF, 0x200);
        assert_eq!(fixed::lut_entry_value(word), 0.5);
        assert_eq!(fixed::lut_entry_delta(word), 0.25);
    }

    #[test]
    fn negative_delta_is_sign_magnitude() {
        let word = fixed::encode_lut_entry(1.0, -0.5);
        assert_eq!((word >> 12) & 0xFFF, 0x800 | 0x400);
        assert_eq!(fixed::lut_entry_delta(word), -0.5);
    }

    #[test]
    fn value_saturates() {
        assert_eq!(fixed::encode_lut_entry(1.0, 0.0), 0xFFF);
        assert_eq!(fixed::encode_lut_entry(7.0, 0.0), 0xFFF);
        assert_eq!(fixed::encode_lut_entry(-1.0, 0.0), 0);
    }
}
