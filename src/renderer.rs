use crate::geometry::{Rect, Size, Vec2};
use uuid::Uuid;

pub type Color = [f32; 4];

pub const WHITE: Color = [1.0, 1.0, 1.0, 1.0];

/// Opaque handle to a texture owned by the rendering backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(Uuid);

impl TextureHandle {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn id(&self) -> Uuid {
        self.0
    }
}

/// Point the rotation (and text layout) pivots around.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextOrigin {
    TopLeft,
    Center,
}

/// Drawing capability the scene graph is written against. The backend owns
/// texture and font lifetimes; the tree only holds handles.
pub trait Renderer {
    fn draw_textured_rect(&mut self, texture: TextureHandle, dest: Rect, rotation: f32, tint: Color);

    /// Solid fill, used for backgrounds, borders and the text caret.
    fn draw_rect(&mut self, dest: Rect, rotation: f32, color: Color);

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        font: &str,
        text: &str,
        position: Vec2,
        color: Color,
        scale: f32,
        rotation: f32,
        origin: TextOrigin,
    );

    fn measure_text(&self, font: &str, text: &str, scale: f32) -> Size;

    /// Scissor region applied to subsequent draws; `None` clears it.
    fn set_clip(&mut self, clip: Option<Rect>);
}
