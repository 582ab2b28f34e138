//! Frame builder
//!
//! Stars go first with additive blending, back to front. The ship and its
//! flag trail are drawn on top with the host's default blending.

use crate::foundation::math::Vec2;
use crate::render::{
    BlendMode, DrawCommand, DrawList, EffectRef, QuadDraw, QuadPlacement, SceneResources,
    ShaderParam, ShipSprite, Technique, TextureHandle,
};
use crate::scene::{SceneState, CANVAS_WIDTH};

/// Ship sprite is drawn at this multiple of its texture size
pub const SHIP_PIXEL_SCALE: f32 = 3.0;

/// Gap between the canvas's left edge and the ship's nose
pub const SHIP_LEFT_MARGIN: f32 = 100.0;

/// Resting height of the ship's top edge
pub const SHIP_BASE_Y: f32 = 940.0;

/// Vertical bob amplitude
pub const SHIP_BOB_RADIUS: f32 = 20.0;

/// Base effect parameter names
pub mod params {
    /// Texture of the base effect
    pub const IMAGE: &str = "image";
    /// Brightness multiplier of the base effect's `DrawMultiply`
    pub const MULTIPLIER: &str = "multiplier";
    /// First flag texture of the trail effect
    pub const TRANS_FLAG: &str = "trans_flag";
    /// Second flag texture of the trail effect
    pub const LESBIAN_FLAG: &str = "lesbian_flag";
    /// Ship bob phase in degrees, drives the trail wave
    pub const WAVE_ROT: &str = "wave_rot";
    /// Flag pulse phase in degrees
    pub const PULSE_ROT: &str = "pulse_rot";
}

/// Ship and trail geometry for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipLayout {
    /// Mirrored ship quad
    pub ship: QuadPlacement,
    /// Trail quad from the ship to the right edge
    pub trail: QuadPlacement,
}

impl ShipLayout {
    /// Lay out a ship sprite at the given bob offset in `[-1, 1]`
    pub fn new(sprite: &ShipSprite, bob_offset: f32) -> Self {
        let ship_cx = sprite.width as f32 * SHIP_PIXEL_SCALE;
        let ship_cy = sprite.height as f32 * SHIP_PIXEL_SCALE;

        // The sprite faces right, so it is mirrored around its right edge
        let ship_x = SHIP_LEFT_MARGIN + ship_cx;
        let ship_y = SHIP_BASE_Y + bob_offset * SHIP_BOB_RADIUS;

        Self {
            ship: QuadPlacement::new(Vec2::new(ship_x, ship_y), Vec2::new(-ship_cx, ship_cy)),
            trail: QuadPlacement::new(
                Vec2::new(ship_x, SHIP_BASE_Y - SHIP_BOB_RADIUS),
                Vec2::new(CANVAS_WIDTH - ship_x, ship_cy + SHIP_BOB_RADIUS * 2.0),
            ),
        }
    }
}

fn push_stars(list: &mut DrawList, state: &SceneState, star: TextureHandle) {
    list.push(DrawCommand::PushBlend(BlendMode::Additive));
    for (tier, stars) in state.starfield.layers() {
        for s in stars {
            list.push(DrawCommand::Quad(QuadDraw {
                placement: QuadPlacement::uniform(s.position, tier.scale()),
                effect: EffectRef::Base,
                technique: Technique::DrawMultiply,
                params: vec![
                    ShaderParam::texture(params::IMAGE, star),
                    ShaderParam::float(params::MULTIPLIER, s.brightness(tier)),
                ],
                sampler: None,
            }));
        }
    }
    list.push(DrawCommand::PopBlend);
}

fn push_ship(list: &mut DrawList, state: &SceneState, resources: &SceneResources, sprite: &ShipSprite) {
    let layout = ShipLayout::new(sprite, state.ship.bob_offset());

    list.push(DrawCommand::Quad(QuadDraw {
        placement: layout.ship,
        effect: EffectRef::Base,
        technique: Technique::Draw,
        params: vec![ShaderParam::texture(params::IMAGE, sprite.texture)],
        sampler: resources.nearest,
    }));

    let (Some(effect), Some(trans), Some(lesbian)) =
        (resources.flag_effect, resources.trans_flag, resources.lesbian_flag)
    else {
        return;
    };

    list.push(DrawCommand::Quad(QuadDraw {
        placement: layout.trail,
        effect: EffectRef::Custom(effect),
        technique: Technique::Draw,
        params: vec![
            ShaderParam::texture(params::TRANS_FLAG, trans),
            ShaderParam::texture(params::LESBIAN_FLAG, lesbian),
            ShaderParam::float(params::WAVE_ROT, state.ship.phase_deg),
            ShaderParam::float(params::PULSE_ROT, state.flag.phase_deg),
        ],
        sampler: None,
    }));
}

/// Build the draw list for the current scene
///
/// Draws that need a missing resource are left out.
pub fn build_frame(state: &SceneState, resources: &SceneResources) -> DrawList {
    let Some(quad) = resources.quad else {
        return DrawList::new();
    };

    let mut list = DrawList::with_capacity(state.starfield.len() + 5);
    list.push(DrawCommand::BindQuad(quad));

    if let Some(star) = resources.star {
        push_stars(&mut list, state, star);
    }

    if state.show_ship {
        if let Some(sprite) = &resources.ship {
            push_ship(&mut list, state, resources, sprite);
        }
    }

    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{EffectHandle, ParamValue, QuadHandle, SamplerHandle};
    use crate::scene::{StarTier, CANVAS_HEIGHT};
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn scene(show_ship: bool) -> SceneState {
        let mut scene = SceneState::new(&mut StdRng::seed_from_u64(7));
        scene.show_ship = show_ship;
        scene
    }

    fn full_resources() -> SceneResources {
        SceneResources {
            quad: Some(QuadHandle(1)),
            star: Some(TextureHandle(2)),
            ship: Some(ShipSprite { texture: TextureHandle(3), width: 56, height: 32 }),
            nearest: Some(SamplerHandle(4)),
            flag_effect: Some(EffectHandle(5)),
            trans_flag: Some(TextureHandle(6)),
            lesbian_flag: Some(TextureHandle(7)),
        }
    }

    #[test]
    fn test_frame_structure() {
        let frame = build_frame(&scene(true), &full_resources());

        assert_eq!(frame.commands[0], DrawCommand::BindQuad(QuadHandle(1)));
        assert_eq!(frame.commands[1], DrawCommand::PushBlend(BlendMode::Additive));
        assert_eq!(frame.commands[2 + 160], DrawCommand::PopBlend);
        assert_eq!(frame.len(), 1 + 1 + 160 + 1 + 2);
        assert_eq!(frame.quads().count(), 162);
    }

    #[test]
    fn test_stars_drawn_back_to_front() {
        let state = scene(false);
        let frame = build_frame(&state, &full_resources());
        let quads: Vec<_> = frame.quads().collect();
        assert_eq!(quads.len(), 160);

        let expected_tiers = std::iter::repeat(StarTier::Distant).take(100)
            .chain(std::iter::repeat(StarTier::Mid).take(40))
            .chain(std::iter::repeat(StarTier::Near).take(20));
        let stars = state.starfield.layers().into_iter().flat_map(|(_, stars)| stars.iter());

        for ((quad, tier), star) in quads.iter().zip(expected_tiers).zip(stars) {
            assert_eq!(quad.placement, QuadPlacement::uniform(star.position, tier.scale()));
            assert_eq!(quad.technique, Technique::DrawMultiply);
            assert_eq!(quad.effect, EffectRef::Base);
            assert_eq!(quad.param(params::IMAGE), Some(ParamValue::Texture(TextureHandle(2))));
            assert_eq!(
                quad.param(params::MULTIPLIER),
                Some(ParamValue::Float(tier.lightness() * star.variation))
            );
        }
    }

    #[test]
    fn test_ship_quad_is_mirrored_and_bobs() {
        let mut state = scene(true);
        state.ship.phase_deg = 180.0;
        let frame = build_frame(&state, &full_resources());
        let ship = frame.quads().nth(160).unwrap();

        // 56x32 sprite at 3x, nose 100px from the left edge
        assert_relative_eq!(ship.placement.origin.x, 268.0);
        assert_relative_eq!(ship.placement.origin.y, 920.0, epsilon = 1e-3);
        assert_eq!(ship.placement.scale, Vec2::new(-168.0, 96.0));
        assert!(ship.placement.is_mirrored_x());
        assert_relative_eq!(ship.placement.map(Vec2::new(1.0, 0.0)).x, 100.0);

        assert_eq!(ship.technique, Technique::Draw);
        assert_eq!(ship.sampler, Some(SamplerHandle(4)));
        assert_eq!(ship.param(params::IMAGE), Some(ParamValue::Texture(TextureHandle(3))));
    }

    #[test]
    fn test_trail_spans_to_right_edge() {
        let mut state = scene(true);
        state.ship.phase_deg = 45.0;
        state.flag.phase_deg = 300.0;
        let frame = build_frame(&state, &full_resources());
        let trail = frame.quads().last().unwrap();

        assert_eq!(trail.effect, EffectRef::Custom(EffectHandle(5)));
        assert_eq!(trail.technique, Technique::Draw);
        assert_eq!(trail.placement.origin, Vec2::new(268.0, 920.0));
        assert_eq!(trail.placement.scale, Vec2::new(CANVAS_WIDTH - 268.0, 96.0 + 40.0));
        assert_relative_eq!(trail.placement.map(Vec2::new(1.0, 1.0)).x, CANVAS_WIDTH);
        assert!(trail.placement.map(Vec2::new(1.0, 1.0)).y <= CANVAS_HEIGHT);

        assert_eq!(trail.param(params::TRANS_FLAG), Some(ParamValue::Texture(TextureHandle(6))));
        assert_eq!(trail.param(params::LESBIAN_FLAG), Some(ParamValue::Texture(TextureHandle(7))));
        assert_eq!(trail.param(params::WAVE_ROT), Some(ParamValue::Float(45.0)));
        assert_eq!(trail.param(params::PULSE_ROT), Some(ParamValue::Float(300.0)));
    }

    #[test]
    fn test_hidden_ship_draws_only_stars() {
        let frame = build_frame(&scene(false), &full_resources());
        assert_eq!(frame.len(), 1 + 1 + 160 + 1);
        assert!(frame.quads().all(|quad| quad.effect == EffectRef::Base));
    }

    #[test]
    fn test_missing_quad_draws_nothing() {
        let resources = SceneResources { quad: None, ..full_resources() };
        assert!(build_frame(&scene(true), &resources).is_empty());
    }

    #[test]
    fn test_missing_star_texture_skips_star_pass() {
        let resources = SceneResources { star: None, ..full_resources() };
        let frame = build_frame(&scene(true), &resources);

        assert!(!frame.commands.contains(&DrawCommand::PopBlend));
        assert_eq!(frame.quads().count(), 2);
    }

    #[test]
    fn test_missing_ship_skips_ship_and_trail() {
        let resources = SceneResources { ship: None, ..full_resources() };
        let frame = build_frame(&scene(true), &resources);
        assert_eq!(frame.quads().count(), 160);
    }

    #[test]
    fn test_missing_flag_skips_only_trail() {
        let resources = SceneResources { lesbian_flag: None, ..full_resources() };
        let frame = build_frame(&scene(true), &resources);
        assert_eq!(frame.quads().count(), 161);

        // No sampler falls back to the effect's own sampling
        let resources = SceneResources { nearest: None, flag_effect: None, ..full_resources() };
        let frame = build_frame(&scene(true), &resources);
        let ship = frame.quads().last().unwrap();
        assert_eq!(ship.sampler, None);
        assert_eq!(frame.quads().count(), 161);
    }
}
