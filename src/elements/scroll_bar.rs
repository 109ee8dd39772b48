use crate::geometry::{Rect, Size, Vec2};
use crate::measure::OwnerGeometry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttachmentEdge {
    Left,
    Right,
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Scroll bar utility attached to a container's edge. Not an element itself:
/// its rectangles are pure functions of the current owner geometry, the
/// attachment edge and a clamped 0..1 fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollBar {
    pub edge: AttachmentEdge,
    pub thickness: f32,
    pub button_length: f32,
    pub bar_length: f32,
    fraction: f32,
}

impl ScrollBar {
    pub fn new(edge: AttachmentEdge) -> Self {
        Self {
            edge,
            thickness: 16.0,
            button_length: 16.0,
            bar_length: 32.0,
            fraction: 0.0,
        }
    }

    /// Vertical when hugging a side edge, horizontal when hugging top or
    /// bottom.
    pub fn orientation(&self) -> Orientation {
        match self.edge {
            AttachmentEdge::Left | AttachmentEdge::Right => Orientation::Vertical,
            AttachmentEdge::Top | AttachmentEdge::Bottom => Orientation::Horizontal,
        }
    }

    pub fn fraction(&self) -> f32 {
        self.fraction
    }

    pub fn set_fraction(&mut self, fraction: f32) {
        self.fraction = fraction.clamp(0.0, 1.0);
    }

    fn track_origin(&self, owner: &OwnerGeometry) -> Vec2 {
        let pos = owner.position;
        let size = owner.size;
        match self.edge {
            AttachmentEdge::Left => pos,
            AttachmentEdge::Right => pos + Vec2::new(size.width - self.thickness, 0.0),
            AttachmentEdge::Top => pos,
            AttachmentEdge::Bottom => pos + Vec2::new(0.0, size.height - self.thickness),
        }
    }

    /// Step button at the start of the track (up, or left).
    pub fn decrease_button_rect(&self, owner: &OwnerGeometry) -> Rect {
        let origin = self.track_origin(owner);
        match self.orientation() {
            Orientation::Vertical => {
                Rect::from_pixels(origin, Size::new(self.thickness, self.button_length))
            }
            Orientation::Horizontal => {
                Rect::from_pixels(origin, Size::new(self.button_length, self.thickness))
            }
        }
    }

    /// Step button at the end of the track (down, or right).
    pub fn increase_button_rect(&self, owner: &OwnerGeometry) -> Rect {
        let origin = self.track_origin(owner);
        match self.orientation() {
            Orientation::Vertical => Rect::from_pixels(
                origin + Vec2::new(0.0, owner.size.height - self.button_length),
                Size::new(self.thickness, self.button_length),
            ),
            Orientation::Horizontal => Rect::from_pixels(
                origin + Vec2::new(owner.size.width - self.button_length, 0.0),
                Size::new(self.button_length, self.thickness),
            ),
        }
    }

    /// Drag bar positioned along the track by the current fraction.
    pub fn drag_bar_rect(&self, owner: &OwnerGeometry) -> Rect {
        let origin = self.track_origin(owner);
        match self.orientation() {
            Orientation::Vertical => {
                let track = (owner.size.height - 2.0 * self.button_length).max(0.0);
                let travel = (track - self.bar_length).max(0.0);
                Rect::from_pixels(
                    origin + Vec2::new(0.0, self.button_length + self.fraction * travel),
                    Size::new(self.thickness, self.bar_length.min(track)),
                )
            }
            Orientation::Horizontal => {
                let track = (owner.size.width - 2.0 * self.button_length).max(0.0);
                let travel = (track - self.bar_length).max(0.0);
                Rect::from_pixels(
                    origin + Vec2::new(self.button_length + self.fraction * travel, 0.0),
                    Size::new(self.bar_length.min(track), self.thickness),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Size;

    fn owner() -> OwnerGeometry {
        OwnerGeometry::new(Vec2::new(100.0, 200.0), Size::new(300.0, 400.0))
    }

    #[test]
    fn side_edges_are_vertical() {
        assert_eq!(
            ScrollBar::new(AttachmentEdge::Right).orientation(),
            Orientation::Vertical
        );
        assert_eq!(
            ScrollBar::new(AttachmentEdge::Bottom).orientation(),
            Orientation::Horizontal
        );
    }

    #[test]
    fn fraction_is_clamped() {
        let mut bar = ScrollBar::new(AttachmentEdge::Left);
        bar.set_fraction(2.5);
        assert_eq!(bar.fraction(), 1.0);
        bar.set_fraction(-1.0);
        assert_eq!(bar.fraction(), 0.0);
    }

    #[test]
    fn drag_bar_spans_the_track_range() {
        let mut bar = ScrollBar::new(AttachmentEdge::Right);
        bar.set_fraction(0.0);
        let start = bar.drag_bar_rect(&owner());
        bar.set_fraction(1.0);
        let end = bar.drag_bar_rect(&owner());
        assert_eq!(start.y, 200 + 16);
        // Track = 400 - 32 = 368; travel = 368 - 32 = 336.
        assert_eq!(end.y, 200 + 16 + 336);
        assert_eq!(start.x, end.x);
        // Hugs the right edge.
        assert_eq!(start.x, (100.0_f32 + 300.0 - 16.0) as i32);
    }
}
