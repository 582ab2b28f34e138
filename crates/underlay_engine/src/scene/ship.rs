//! Spacecraft bobbing and flag pulse phases

use crate::foundation::math::utils::{deg_to_rad, wrap_degrees, wrap_degrees_once};

/// Degrees the ship phase advances per second (one bob every two seconds)
pub const SHIP_PHASE_SPEED: f32 = 180.0;

/// Degrees the flag pulse phase advances per second
pub const FLAG_PULSE_SPEED: f32 = SHIP_PHASE_SPEED * 5.0;

/// Phase of the ship's vertical bob
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShipMotion {
    /// Phase angle in degrees
    pub phase_deg: f32,
}

impl ShipMotion {
    /// Advance the phase, wrapping by at most one turn
    pub fn advance(&mut self, seconds: f32) {
        self.phase_deg = wrap_degrees_once(self.phase_deg + seconds * SHIP_PHASE_SPEED);
    }

    /// Vertical bob in `[-1, 1]`, scaled by the bob radius when drawn
    pub fn bob_offset(&self) -> f32 {
        deg_to_rad(self.phase_deg).cos()
    }
}

/// Phase of the flag trail pulse
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FlagPulse {
    /// Phase angle in degrees
    pub phase_deg: f32,
}

impl FlagPulse {
    /// Advance the phase, wrapping as many turns as needed
    pub fn advance(&mut self, seconds: f32) {
        self.phase_deg = wrap_degrees(self.phase_deg + seconds * FLAG_PULSE_SPEED);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ship_phase_advances_and_wraps() {
        let mut ship = ShipMotion::default();
        ship.advance(0.5);
        assert_relative_eq!(ship.phase_deg, 90.0);

        ship.advance(1.75);
        assert_relative_eq!(ship.phase_deg, 45.0, epsilon = 1e-4);
    }

    #[test]
    fn test_ship_phase_matches_modulo_for_short_ticks() {
        for &(start, seconds) in &[(0.0, 0.0), (350.0, 0.1), (10.0, 1.9), (359.0, 1.99), (0.0, 2.0)] {
            let mut ship = ShipMotion { phase_deg: start };
            ship.advance(seconds);

            let expected = (start + SHIP_PHASE_SPEED * seconds).rem_euclid(360.0);
            assert_relative_eq!(ship.phase_deg, expected, epsilon = 1e-3);
            assert!((0.0..360.0).contains(&ship.phase_deg));
        }
    }

    #[test]
    fn test_ship_phase_wraps_only_once() {
        let mut ship = ShipMotion::default();
        ship.advance(5.0);
        assert_relative_eq!(ship.phase_deg, 540.0);
    }

    #[test]
    fn test_bob_offset_follows_cosine() {
        assert_relative_eq!(ShipMotion { phase_deg: 0.0 }.bob_offset(), 1.0);
        assert_relative_eq!(ShipMotion { phase_deg: 90.0 }.bob_offset(), 0.0, epsilon = 1e-6);
        assert_relative_eq!(ShipMotion { phase_deg: 180.0 }.bob_offset(), -1.0);
    }

    #[test]
    fn test_flag_pulse_wraps_fully() {
        let mut flag = FlagPulse::default();
        flag.advance(0.1);
        assert_relative_eq!(flag.phase_deg, 90.0, epsilon = 1e-4);

        let mut flag = FlagPulse { phase_deg: 300.0 };
        flag.advance(1.0);
        // 300 + 900 = 1200 -> 120
        assert_relative_eq!(flag.phase_deg, 120.0, epsilon = 1e-3);
    }

    #[test]
    fn test_flag_pulse_stays_in_range_for_any_elapsed_time() {
        for seconds in [0.0, 0.016, 0.4, 1.0, 3.7, 60.0, 3600.0, 1.0e9, f32::MAX / 1000.0] {
            let mut flag = FlagPulse { phase_deg: 123.0 };
            flag.advance(seconds);
            assert!((0.0..360.0).contains(&flag.phase_deg), "{seconds} -> {}", flag.phase_deg);
        }
    }
}
