use super::button::ButtonCore;
use crate::caret::TextCaret;
use crate::container::ElementId;
use crate::geometry::{Rect, RotatedRect, Size, Vec2};
use crate::measure::OwnerGeometry;
use crate::renderer::{Color, Renderer, TextOrigin, WHITE};
use crate::FrameContext;
use uuid::Uuid;

/// Button + live text buffer + caret. Pressing requests focus; typed input
/// is consumed only while this box holds it.
pub struct InputBoxState {
    pub core: ButtonCore,
    pub text: String,
    pub font: String,
    pub color: Color,
    pub background: Color,
    pub caret: TextCaret,
}

impl InputBoxState {
    pub fn new(font: impl Into<String>) -> Self {
        Self {
            core: ButtonCore::new(),
            text: String::new(),
            font: font.into(),
            color: WHITE,
            background: [0.12, 0.12, 0.15, 1.0],
            caret: TextCaret::new(),
        }
    }

    pub(crate) fn update(
        &mut self,
        handle: Uuid,
        id: &ElementId,
        ctx: &mut FrameContext<'_>,
        hit: &RotatedRect,
    ) {
        let frame = self.core.update(id, &ctx.input.pointer, hit);
        if frame.pressed {
            ctx.focus.set_focus(handle);
            self.caret.move_to_end(&self.text);
        }
        if ctx.focus.is_focused(handle) {
            for event in &ctx.input.typed {
                self.caret.apply(*event, ctx.input.modifiers, &mut self.text);
            }
        }
    }

    pub(crate) fn draw(
        &self,
        renderer: &mut dyn Renderer,
        geometry: &OwnerGeometry,
        rotation: f32,
        focused: bool,
        scale: f32,
    ) {
        let rect = Rect::from_pixels(geometry.position, geometry.size);
        renderer.draw_rect(rect, rotation, self.background);
        renderer.draw_text(
            &self.font,
            &self.text,
            geometry.position,
            self.color,
            scale,
            rotation,
            TextOrigin::TopLeft,
        );
        if focused {
            let before: String = self.text.chars().take(self.caret.cursor()).collect();
            let caret_x = renderer.measure_text(&self.font, &before, scale).width;
            let caret_rect = Rect::from_pixels(
                geometry.position + Vec2::new(caret_x, 1.0),
                Size::new(1.0, (geometry.size.height - 2.0).max(1.0)),
            );
            renderer.draw_rect(caret_rect, rotation, self.color);
        }
    }

    /// Copy with interaction state reset; the caller re-resolves scripts.
    pub(crate) fn fresh_copy(&self) -> InputBoxState {
        InputBoxState {
            core: ButtonCore::new(),
            text: self.text.clone(),
            font: self.font.clone(),
            color: self.color,
            background: self.background,
            caret: TextCaret::new(),
        }
    }
}
