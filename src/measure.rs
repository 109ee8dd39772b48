use crate::geometry::{Rect, Size, Vec2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasurementUnit {
    /// Value is taken verbatim as pixels.
    #[default]
    Pixel,
    /// Value multiplies component-wise against the reference size.
    Ratio,
}

/// A 2D value tagged with a unit. Immutable; only meaningful once resolved
/// against an explicit reference size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub value: Vec2,
    pub unit: MeasurementUnit,
}

impl Measurement {
    pub fn pixels(x: f32, y: f32) -> Self {
        Self {
            value: Vec2::new(x, y),
            unit: MeasurementUnit::Pixel,
        }
    }

    pub fn ratio(x: f32, y: f32) -> Self {
        Self {
            value: Vec2::new(x, y),
            unit: MeasurementUnit::Ratio,
        }
    }

    /// Resolves to absolute pixels. A zero reference is fine: Ratio simply
    /// yields zero.
    pub fn to_pixels(&self, reference: Size) -> Vec2 {
        match self.unit {
            MeasurementUnit::Pixel => self.value,
            MeasurementUnit::Ratio => Vec2::new(
                self.value.x * reference.width,
                self.value.y * reference.height,
            ),
        }
    }
}

impl Default for Measurement {
    fn default() -> Self {
        Measurement::pixels(0.0, 0.0)
    }
}

/// Resolved geometry of the thing an element is positioned against.
///
/// The default is the zero position with a 1x1 size, so an unparented
/// element's Ratio measurements resolve against a unit reference and its
/// Pixel measurements are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OwnerGeometry {
    pub position: Vec2,
    pub size: Size,
}

impl Default for OwnerGeometry {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            size: Size::new(1.0, 1.0),
        }
    }
}

impl OwnerGeometry {
    pub fn new(position: Vec2, size: Size) -> Self {
        Self { position, size }
    }

    pub fn of_rect(rect: Rect) -> Self {
        Self {
            position: rect.pos(),
            size: rect.size(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementTransform {
    pub position: Measurement,
    pub scale: Vec2,
    pub rotation: f32,
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self {
            position: Measurement::default(),
            scale: Vec2::ONE,
            rotation: 0.0,
        }
    }
}

impl ElementTransform {
    /// Absolute pixel position: the measurement resolved against the owner's
    /// size, offset by the owner's position. Pure.
    pub fn draw_position(&self, owner: &OwnerGeometry) -> Vec2 {
        self.position.to_pixels(owner.size) + owner.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_resolves_against_reference() {
        let m = Measurement::ratio(0.5, 0.25);
        let px = m.to_pixels(Size::new(200.0, 100.0));
        assert_eq!(px, Vec2::new(100.0, 25.0));
    }

    #[test]
    fn pixel_ignores_reference() {
        let m = Measurement::pixels(42.0, 7.0);
        assert_eq!(m.to_pixels(Size::new(9999.0, 1.0)), Vec2::new(42.0, 7.0));
    }

    #[test]
    fn zero_reference_is_not_an_error() {
        let m = Measurement::ratio(0.5, 0.5);
        assert_eq!(m.to_pixels(Size::new(0.0, 0.0)), Vec2::ZERO);
    }

    #[test]
    fn unowned_draw_position_uses_unit_reference() {
        let transform = ElementTransform {
            position: Measurement::ratio(0.5, 0.5),
            ..Default::default()
        };
        let pos = transform.draw_position(&OwnerGeometry::default());
        assert_eq!(pos, Vec2::new(0.5, 0.5));
    }
}
