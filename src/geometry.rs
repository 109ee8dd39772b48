use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };
    pub const ONE: Vec2 = Vec2 { x: 1.0, y: 1.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Perpendicular (normal) of this vector, not normalized.
    pub fn perpendicular(self) -> Vec2 {
        Vec2 {
            x: -self.y,
            y: self.x,
        }
    }

    pub fn length(self) -> f32 {
        self.dot(self).sqrt()
    }

    /// Rotates this point about `origin` by `radians`.
    pub fn rotated_about(self, origin: Vec2, radians: f32) -> Vec2 {
        let (sin, cos) = radians.sin_cos();
        let rel = self - origin;
        Vec2 {
            x: rel.x * cos - rel.y * sin,
            y: rel.x * sin + rel.y * cos,
        } + origin
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    fn mul(self, factor: f32) -> Vec2 {
        Vec2::new(self.x * factor, self.y * factor)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Mul<f32> for Size {
    type Output = Size;
    fn mul(self, factor: f32) -> Size {
        Size::new(self.width * factor, self.height * factor)
    }
}

/// Pixel-quantized placement rectangle. Rotation math stays in floating
/// point; quantization only happens when one of these is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn from_pixels(position: Vec2, size: Size) -> Self {
        Self {
            x: position.x.round() as i32,
            y: position.y.round() as i32,
            width: size.width.round() as i32,
            height: size.height.round() as i32,
        }
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.y as f32)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }

    /// Boundary-inclusive containment.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.x as f32
            && point.x <= (self.x + self.width) as f32
            && point.y >= self.y as f32
            && point.y <= (self.y + self.height) as f32
    }
}

/// A placement rectangle plus a rotation (radians) about its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RotatedRect {
    pub rect: Rect,
    pub rotation: f32,
}

impl RotatedRect {
    pub fn new(rect: Rect, rotation: f32) -> Self {
        Self { rect, rotation }
    }

    /// Absolute-space corners in order: top-left, top-right, bottom-right,
    /// bottom-left. Consecutive pairs (wrapping) form the polygon edges.
    pub fn corners(&self) -> [Vec2; 4] {
        let origin = self.rect.pos();
        let w = self.rect.width as f32;
        let h = self.rect.height as f32;
        let aligned = [
            origin,
            origin + Vec2::new(w, 0.0),
            origin + Vec2::new(w, h),
            origin + Vec2::new(0.0, h),
        ];
        if self.rotation == 0.0 {
            return aligned;
        }
        aligned.map(|corner| corner.rotated_about(origin, self.rotation))
    }

    /// Separating Axis Theorem over both polygons' edge normals. Touching
    /// edges count as intersecting.
    pub fn intersects(&self, other: &RotatedRect) -> bool {
        polygons_overlap(&self.corners(), &other.corners())
    }

    /// SAT against a degenerate one-point polygon.
    pub fn contains(&self, point: Vec2) -> bool {
        polygons_overlap(&self.corners(), &[point])
    }
}

fn projected_range(polygon: &[Vec2], axis: Vec2) -> (f32, f32) {
    let mut min = f32::INFINITY;
    let mut max = f32::NEG_INFINITY;
    for point in polygon {
        let p = point.dot(axis);
        min = min.min(p);
        max = max.max(p);
    }
    (min, max)
}

fn separated_on_axes(edges_of: &[Vec2], a: &[Vec2], b: &[Vec2]) -> bool {
    let count = edges_of.len();
    for i in 0..count {
        let edge = edges_of[(i + 1) % count] - edges_of[i];
        // Degenerate inputs (points, zero-size rects) produce zero-length
        // edges; those contribute no axis.
        if edge.length() < f32::EPSILON {
            continue;
        }
        let axis = edge.perpendicular();
        let (min_a, max_a) = projected_range(a, axis);
        let (min_b, max_b) = projected_range(b, axis);
        // Strict comparison: touching ranges do not separate.
        if max_a < min_b || max_b < min_a {
            return true;
        }
    }
    false
}

fn polygons_overlap(a: &[Vec2], b: &[Vec2]) -> bool {
    !separated_on_axes(a, a, b) && !separated_on_axes(b, a, b)
}
