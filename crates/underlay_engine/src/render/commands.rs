//! Draw commands for one frame
//!
//! # Design Philosophy
//!
//! The renderer should be a passive list builder that:
//! - Accepts pre-computed placements (no animation logic)
//! - Accepts resource handles (no resource lifetime)
//! - Leaves the actual draw calls to the backend

use crate::foundation::math::{Mat4, Vec2, Vec3};
use crate::render::{EffectHandle, QuadHandle, SamplerHandle, TextureHandle};

/// Blend mode for a run of draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlendMode {
    /// Standard alpha blending (the host default)
    AlphaBlend,
    /// `ONE, ONE` additive blending, for glowing stars
    Additive,
}

/// Which effect a quad is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EffectRef {
    /// The host's default textured effect
    Base,
    /// An effect loaded by the source
    Custom(EffectHandle),
}

/// Technique of the effect to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Technique {
    /// Plain textured draw
    Draw,
    /// Textured draw scaled by the `multiplier` parameter
    DrawMultiply,
}

impl Technique {
    /// Technique name inside the effect file
    pub const fn name(self) -> &'static str {
        match self {
            Self::Draw => "Draw",
            Self::DrawMultiply => "DrawMultiply",
        }
    }
}

/// Value bound to an effect parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Texture parameter
    Texture(TextureHandle),
    /// Float parameter
    Float(f32),
}

/// Named effect parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShaderParam {
    /// Parameter name in the effect
    pub name: &'static str,
    /// Bound value
    pub value: ParamValue,
}

impl ShaderParam {
    /// Texture parameter
    pub const fn texture(name: &'static str, texture: TextureHandle) -> Self {
        Self { name, value: ParamValue::Texture(texture) }
    }

    /// Float parameter
    pub const fn float(name: &'static str, value: f32) -> Self {
        Self { name, value: ParamValue::Float(value) }
    }
}

/// Where the unit quad lands on the canvas
///
/// The quad corner `uv` maps to `origin + scale ⊙ uv`. A negative scale
/// mirrors the quad around `origin`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadPlacement {
    /// Canvas position of quad corner `(0, 0)`
    pub origin: Vec2,
    /// Size along each axis, may be negative
    pub scale: Vec2,
}

impl QuadPlacement {
    /// Placement from origin and scale
    pub const fn new(origin: Vec2, scale: Vec2) -> Self {
        Self { origin, scale }
    }

    /// Square placement with edge `size`
    pub fn uniform(origin: Vec2, size: f32) -> Self {
        Self::new(origin, Vec2::new(size, size))
    }

    /// Translate-then-scale model matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::new_translation(&Vec3::new(self.origin.x, self.origin.y, 0.0))
            * Mat4::new_nonuniform_scaling(&Vec3::new(self.scale.x, self.scale.y, 1.0))
    }

    /// Canvas position of a quad-space point
    pub fn map(&self, uv: Vec2) -> Vec2 {
        self.origin + self.scale.component_mul(&uv)
    }

    /// Whether the quad is drawn mirrored horizontally
    pub fn is_mirrored_x(&self) -> bool {
        self.scale.x < 0.0
    }
}

/// One textured quad draw
#[derive(Debug, Clone, PartialEq)]
pub struct QuadDraw {
    /// Where the quad lands
    pub placement: QuadPlacement,
    /// Effect to draw with
    pub effect: EffectRef,
    /// Technique of the effect
    pub technique: Technique,
    /// Parameters set before drawing
    pub params: Vec<ShaderParam>,
    /// Sampler override for the base effect's `image` parameter
    pub sampler: Option<SamplerHandle>,
}

impl QuadDraw {
    /// Look up a parameter value by name
    pub fn param(&self, name: &str) -> Option<ParamValue> {
        self.params.iter().find(|param| param.name == name).map(|param| param.value)
    }
}

/// Frame-level draw command
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Load the unit quad as the current vertex buffer
    BindQuad(QuadHandle),
    /// Push a blend state
    PushBlend(BlendMode),
    /// Restore the previous blend state
    PopBlend,
    /// Draw the bound quad
    Quad(QuadDraw),
}

/// Ordered draw commands of one frame
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DrawList {
    /// Commands in submission order
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a list with pre-allocated capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: Vec::with_capacity(capacity),
        }
    }

    /// Append a command
    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Number of commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Quad draws in order
    pub fn quads(&self) -> impl Iterator<Item = &QuadDraw> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Quad(quad) => Some(quad),
            _ => None,
        })
    }
}
