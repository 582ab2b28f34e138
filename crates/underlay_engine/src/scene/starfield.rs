//! Parallax starfield
//!
//! Three tiers of stars drift left to right at different speeds. A star
//! that leaves the canvas on the right is respawned somewhere off the left
//! edge with a new height and brightness.

use rand::Rng;

use crate::foundation::math::Vec2;
use crate::scene::{CANVAS_HEIGHT, CANVAS_WIDTH};

/// Maximum fraction of brightness a star can lose to variation
pub const VARIATION_AMOUNT: f32 = 0.6;

/// Extra distance past the sprite scale a star travels before respawning
const RESPAWN_PADDING: f32 = 2.0;

/// How far beyond the left edge a respawned star may start, in margins
const RESPAWN_SPREAD: f32 = 8.0;

/// Stars in the distant tier
pub const DISTANT_STARS: usize = 100;

/// Stars in the mid tier
pub const MID_STARS: usize = 40;

/// Stars in the near tier
pub const NEAR_STARS: usize = 20;

/// Star tier, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarTier {
    /// Small, dim, slow stars
    Distant,
    /// Medium stars
    Mid,
    /// Large, bright, fast stars
    Near,
}

impl StarTier {
    /// All tiers in draw order
    pub const ALL: [Self; 3] = [Self::Distant, Self::Mid, Self::Near];

    /// Number of stars in the tier
    pub const fn count(self) -> usize {
        match self {
            Self::Distant => DISTANT_STARS,
            Self::Mid => MID_STARS,
            Self::Near => NEAR_STARS,
        }
    }

    /// Edge length of a star quad in pixels
    pub const fn scale(self) -> f32 {
        match self {
            Self::Distant => 15.0,
            Self::Mid => 27.0,
            Self::Near => 40.0,
        }
    }

    /// Fraction of the canvas width crossed per second is `1 / divisor`
    pub const fn speed_divisor(self) -> f32 {
        match self {
            Self::Distant => 8.0,
            Self::Mid => 6.0,
            Self::Near => 4.0,
        }
    }

    /// Brightness multiplier before per-star variation
    pub const fn lightness(self) -> f32 {
        match self {
            Self::Distant => 0.5,
            Self::Mid => 0.7,
            Self::Near => 1.0,
        }
    }

    /// Distance past the canvas edge before a star respawns
    pub fn respawn_margin(self) -> f32 {
        self.scale() + RESPAWN_PADDING
    }

    /// Horizontal distance travelled in `seconds`
    pub fn travel(self, seconds: f32) -> f32 {
        seconds * CANVAS_WIDTH / self.speed_divisor()
    }
}

/// One star of a layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    /// Top-left corner of the star quad in canvas pixels
    pub position: Vec2,
    /// Brightness variation in `(1 - VARIATION_AMOUNT, 1]`
    pub variation: f32,
}

impl Star {
    /// Star at a uniformly random canvas position
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            position: Vec2::new(rng.gen::<f32>() * CANVAS_WIDTH, rng.gen::<f32>() * CANVAS_HEIGHT),
            variation: random_variation(rng),
        }
    }

    /// Move the star off the left edge with fresh height and brightness
    fn respawn(&mut self, margin: f32, rng: &mut impl Rng) {
        self.position.x = -margin - rng.gen::<f32>() * RESPAWN_SPREAD * margin;
        self.position.y = rng.gen::<f32>() * CANVAS_HEIGHT;
        self.variation = random_variation(rng);
    }

    /// Brightness of the star within its tier
    pub fn brightness(&self, tier: StarTier) -> f32 {
        tier.lightness() * self.variation
    }
}

fn random_variation(rng: &mut impl Rng) -> f32 {
    1.0 - VARIATION_AMOUNT * rng.gen::<f32>()
}

/// Fixed-size collection of stars belonging to one tier
#[derive(Debug, Clone, PartialEq)]
pub struct StarLayer<const N: usize> {
    tier: StarTier,
    stars: [Star; N],
}

impl<const N: usize> StarLayer<N> {
    /// Layer of randomly placed stars
    pub fn random(tier: StarTier, rng: &mut impl Rng) -> Self {
        debug_assert_eq!(N, tier.count());
        Self {
            tier,
            stars: std::array::from_fn(|_| Star::random(rng)),
        }
    }

    /// Layer with explicit stars
    pub const fn from_stars(tier: StarTier, stars: [Star; N]) -> Self {
        Self { tier, stars }
    }

    /// Tier of this layer
    pub const fn tier(&self) -> StarTier {
        self.tier
    }

    /// Stars of this layer
    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Advance every star by the tier's travel for `seconds`
    pub fn advance(&mut self, seconds: f32, rng: &mut impl Rng) {
        let distance = self.tier.travel(seconds);
        let margin = self.tier.respawn_margin();
        let limit = CANVAS_WIDTH + margin;

        for star in &mut self.stars {
            star.position.x += distance;
            if star.position.x > limit {
                star.respawn(margin, rng);
            }
        }
    }
}

/// The three star layers
#[derive(Debug, Clone, PartialEq)]
pub struct Starfield {
    /// Background tier
    pub distant: StarLayer<DISTANT_STARS>,
    /// Middle tier
    pub mid: StarLayer<MID_STARS>,
    /// Foreground tier
    pub near: StarLayer<NEAR_STARS>,
}

impl Starfield {
    /// Starfield with every star at a random canvas position
    pub fn random(rng: &mut impl Rng) -> Self {
        Self {
            distant: StarLayer::random(StarTier::Distant, rng),
            mid: StarLayer::random(StarTier::Mid, rng),
            near: StarLayer::random(StarTier::Near, rng),
        }
    }

    /// Advance all layers
    pub fn advance(&mut self, seconds: f32, rng: &mut impl Rng) {
        self.distant.advance(seconds, rng);
        self.mid.advance(seconds, rng);
        self.near.advance(seconds, rng);
    }

    /// Layers back to front
    pub fn layers(&self) -> [(StarTier, &[Star]); 3] {
        [
            (self.distant.tier(), self.distant.stars()),
            (self.mid.tier(), self.mid.stars()),
            (self.near.tier(), self.near.stars()),
        ]
    }

    /// Total number of stars
    pub fn len(&self) -> usize {
        self.layers().iter().map(|(_, stars)| stars.len()).sum()
    }

    /// Always false, every tier has stars
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
