//! Animation state of one underlay source
//!
//! All motion is advanced by [`SceneState::tick`] once per host frame and
//! only read while rendering.

pub mod starfield;
pub mod ship;

pub use starfield::{Star, StarLayer, StarTier, Starfield};
pub use ship::{FlagPulse, ShipMotion};

use rand::Rng;

/// Canvas width in pixels
pub const CANVAS_WIDTH: f32 = 1920.0;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: f32 = 1080.0;

/// Canvas size reported to the host
pub const CANVAS_SIZE: (u32, u32) = (1920, 1080);

/// Everything that moves
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    /// Three star tiers
    pub starfield: Starfield,
    /// Ship bob phase
    pub ship: ShipMotion,
    /// Flag trail pulse phase
    pub flag: FlagPulse,
    /// Draw the ship and its flag trail
    pub show_ship: bool,
}

impl SceneState {
    /// Fresh scene with randomly placed stars and zeroed phases
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            starfield: Starfield::random(rng),
            ship: ShipMotion::default(),
            flag: FlagPulse::default(),
            show_ship: false,
        }
    }

    /// Advance the animation by `seconds` of host time
    pub fn tick(&mut self, seconds: f32, rng: &mut impl Rng) {
        self.starfield.advance(seconds, rng);
        self.ship.advance(seconds);
        self.flag.advance(seconds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_canvas_size_matches_float_constants() {
        assert_eq!(CANVAS_SIZE.0 as f32, CANVAS_WIDTH);
        assert_eq!(CANVAS_SIZE.1 as f32, CANVAS_HEIGHT);
    }

    #[test]
    fn test_new_scene_starts_at_zero_phase() {
        let scene = SceneState::new(&mut StdRng::seed_from_u64(1));
        assert_eq!(scene.ship.phase_deg, 0.0);
        assert_eq!(scene.flag.phase_deg, 0.0);
        assert!(!scene.show_ship);
    }

    #[test]
    fn test_tick_advances_every_part() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut scene = SceneState::new(&mut rng);
        let before = scene.clone();

        scene.tick(0.1, &mut rng);

        assert_relative_eq!(scene.ship.phase_deg, 18.0, epsilon = 1e-4);
        assert_relative_eq!(scene.flag.phase_deg, 90.0, epsilon = 1e-4);
        assert_ne!(scene.starfield, before.starfield);
    }

    #[test]
    fn test_zero_tick_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut scene = SceneState::new(&mut rng);
        for _ in 0..120 {
            scene.tick(1.0 / 60.0, &mut rng);
        }
        let before = scene.clone();

        scene.tick(0.0, &mut rng);
        assert_eq!(scene, before);
    }
}
