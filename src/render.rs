//! Render collaborator contract
//!
//! The core computes world matrices and sprite placements; an injected
//! `Renderer` turns them into pixels. Texture ids are opaque string keys
//! resolved by the host's loaders, the core consumes no return values.

use glam::{Mat4, Vec2};

/// Opaque texture key
pub type TextureKey = &'static str;

/// Texture keys the scenes draw with
pub mod textures {
    use super::TextureKey;

    pub const BACKGROUND: TextureKey = "bg.jpg";
    pub const STAGE: TextureKey = "stage2.jpg";
    pub const PLAYER: TextureKey = "player.png";
    pub const BEAM: TextureKey = "beam.png";
    pub const ENEMY: TextureKey = "enemy.png";
    pub const TITLE: TextureKey = "title.png";
    pub const ENTER: TextureKey = "enter.png";
    pub const GAME_OVER: TextureKey = "gameover.png";
    pub const SCORE_LABEL: TextureKey = "score.png";
    pub const NUMBERS: TextureKey = "number.png";
}

/// Drawing collaborator
pub trait Renderer {
    /// Draw a textured model at a world matrix
    fn draw_model(&mut self, world: Mat4, texture: TextureKey);
    /// Draw a full sprite at a screen position
    fn draw_sprite(&mut self, texture: TextureKey, pos: Vec2);
    /// Draw a sub-rectangle of a sprite sheet at a screen position
    fn draw_sprite_region(
        &mut self,
        texture: TextureKey,
        pos: Vec2,
        src_offset: Vec2,
        src_size: Vec2,
        size: Vec2,
    );
    /// Draw a text overlay line
    fn draw_text(&mut self, text: &str, pos: Vec2, scale: f32);
}

/// Renderer that draws nothing (headless runs and tests)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw_model(&mut self, _world: Mat4, _texture: TextureKey) {}

    fn draw_sprite(&mut self, _texture: TextureKey, _pos: Vec2) {}

    fn draw_sprite_region(
        &mut self,
        _texture: TextureKey,
        _pos: Vec2,
        _src_offset: Vec2,
        _src_size: Vec2,
        _size: Vec2,
    ) {
    }

    fn draw_text(&mut self, _text: &str, _pos: Vec2, _scale: f32) {}
}
