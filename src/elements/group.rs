use crate::behavior::ScriptRegistry;
use crate::container::ElementContainer;
use crate::geometry::{Rect, RotatedRect, Vec2};
use crate::measure::OwnerGeometry;
use crate::renderer::Renderer;
use crate::{FocusState, FrameContext};

/// Vertical stacking container with a clamped scroll offset. Children keep
/// their own x placement; their y placement accumulates the resolved heights
/// of prior children.
pub struct StackedList {
    pub children: ElementContainer,
    pub spacing: f32,
    scroll_offset: f32,
}

impl StackedList {
    pub fn new(spacing: f32) -> Self {
        Self {
            children: ElementContainer::new(),
            spacing,
            scroll_offset: 0.0,
        }
    }

    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Shifts the stack; the offset is clamped so the stack can neither
    /// scroll past its content bounds nor before its origin.
    pub fn scroll_by(&mut self, delta: f32, geometry: &OwnerGeometry) {
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, self.max_scroll(geometry));
    }

    fn content_height(&self, geometry: &OwnerGeometry) -> f32 {
        let mut total = 0.0;
        let mut count = 0usize;
        for child in self.children.iter() {
            total += child.raw_size(geometry).height;
            count += 1;
        }
        if count > 1 {
            total += self.spacing * (count - 1) as f32;
        }
        total
    }

    fn max_scroll(&self, geometry: &OwnerGeometry) -> f32 {
        (self.content_height(geometry) - geometry.size.height).max(0.0)
    }

    pub(crate) fn update(
        &mut self,
        ctx: &mut FrameContext<'_>,
        geometry: &OwnerGeometry,
        hit: &RotatedRect,
    ) {
        if ctx.input.scroll_delta != 0.0 && hit.contains(ctx.input.pointer.position) {
            self.scroll_offset -= ctx.input.scroll_delta;
        }
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll(geometry));

        let mut cursor = 0.0;
        let spacing = self.spacing;
        let offset = self.scroll_offset;
        for child in self.children.iter_mut() {
            let child_owner = OwnerGeometry::new(
                geometry.position + Vec2::new(0.0, cursor - offset),
                geometry.size,
            );
            let height = child.raw_size(&child_owner).height;
            child.update(ctx, &child_owner);
            cursor += height + spacing;
        }
    }

    pub(crate) fn draw(
        &self,
        renderer: &mut dyn Renderer,
        geometry: &OwnerGeometry,
        focus: &FocusState,
    ) {
        renderer.set_clip(Some(Rect::from_pixels(geometry.position, geometry.size)));
        let mut cursor = 0.0;
        for child in self.children.iter() {
            let child_owner = OwnerGeometry::new(
                geometry.position + Vec2::new(0.0, cursor - self.scroll_offset),
                geometry.size,
            );
            child.draw(renderer, &child_owner, focus);
            cursor += child.raw_size(&child_owner).height + self.spacing;
        }
        renderer.set_clip(None);
    }

    pub(crate) fn deep_clone(&self, registry: &ScriptRegistry) -> StackedList {
        let mut copy = StackedList::new(self.spacing);
        copy.scroll_offset = self.scroll_offset;
        self.children
            .clone_elements_into(&mut copy.children, registry);
        copy
    }
}
