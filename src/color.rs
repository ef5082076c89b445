//! 8-bit / normalized color channel conversions
//!
//! The picker works in 8-bit channels; the host wants normalized floats.
//! Rounding to 3 decimals is for display only, the host always receives
//! full-precision values.

/// Convert an 8-bit RGB triple to normalized float channels.
pub fn normalized(rgb: [u8; 3]) -> [f32; 3] {
    rgb.map(|c| c as f32 / 255.0)
}

/// Round a normalized channel to 3 decimal places for display.
pub fn display_channel(value: f32) -> f32 {
    (value * 1000.0).round() / 1000.0
}

/// Map normalized channels back to 8-bit, rounding to nearest.
pub fn eight_bit(rgb: [f32; 3]) -> [u8; 3] {
    rgb.map(|c| (c * 255.0).round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_recovers_channels_within_one() {
        for c in 0..=255u8 {
            let back = eight_bit(normalized([c, c, c]));
            for channel in back {
                assert!(
                    (channel as i16 - c as i16).abs() <= 1,
                    "channel {} came back as {}",
                    c,
                    channel
                );
            }
        }
    }

    #[test]
    fn test_normalized_bounds() {
        assert_eq!(normalized([0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(normalized([255, 255, 255]), [1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_display_channel_rounds_to_three_decimals() {
        let display = display_channel(128.0 / 255.0);
        assert!((display - 0.502).abs() < 1e-6);
    }

    #[test]
    fn test_eight_bit_clamps_out_of_range() {
        assert_eq!(eight_bit([-0.5, 1.5, 0.5]), [0, 255, 128]);
    }
}
