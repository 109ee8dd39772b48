use crate::behavior::{ScriptInfo, ScriptRegistry};
use crate::container::ElementContainer;
use crate::elements::{Border, Element};
use crate::geometry::{Rect, Size, Vec2};
use crate::measure::{Measurement, MeasurementUnit, OwnerGeometry};
use crate::renderer::{Color, Renderer, TextureHandle, WHITE};
use crate::{FocusState, FrameContext};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Root container: owns its element tree and resolves its own geometry
/// against the viewport.
pub struct Panel {
    pub name: String,
    pub position: Measurement,
    pub size: Measurement,
    pub background: Option<TextureHandle>,
    pub background_color: Option<Color>,
    pub border: Option<Border>,
    pub displayed: bool,
    pub elements: ElementContainer,
}

impl Panel {
    pub fn new(name: impl Into<String>, position: Measurement, size: Measurement) -> Self {
        Self {
            name: name.into(),
            position,
            size,
            background: None,
            background_color: None,
            border: None,
            displayed: false,
            elements: ElementContainer::new(),
        }
    }

    /// This panel's resolved geometry for the given viewport.
    pub fn viewport_geometry(&self, viewport: Size) -> OwnerGeometry {
        let position = self.position.to_pixels(viewport);
        let size = self.size.to_pixels(viewport);
        OwnerGeometry::new(position, Size::new(size.x, size.y))
    }

    pub fn update(&mut self, ctx: &mut FrameContext<'_>, viewport: Size) {
        let geometry = self.viewport_geometry(viewport);
        for element in self.elements.iter_mut() {
            element.update(ctx, &geometry);
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, viewport: Size, focus: &FocusState) {
        let geometry = self.viewport_geometry(viewport);
        let rect = Rect::from_pixels(geometry.position, geometry.size);
        if let Some(color) = self.background_color {
            renderer.draw_rect(rect, 0.0, color);
        }
        if let Some(texture) = self.background {
            renderer.draw_textured_rect(texture, rect, 0.0, WHITE);
        }
        for element in self.elements.iter() {
            element.draw(renderer, &geometry, focus);
        }
        if let Some(border) = &self.border {
            let t = border.thickness.max(1);
            for edge in [
                Rect::new(rect.x, rect.y, rect.width, t),
                Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
                Rect::new(rect.x, rect.y, t, rect.height),
                Rect::new(rect.x + rect.width - t, rect.y, t, rect.height),
            ] {
                renderer.draw_rect(edge, 0.0, border.color);
            }
        }
    }

    pub fn dispose(&mut self) {
        self.elements.dispose();
    }
}

fn default_scale() -> Vec2 {
    Vec2::ONE
}

fn default_visible() -> bool {
    true
}

fn default_color() -> Color {
    WHITE
}

/// Persisted panel record, as produced by an external deserializer or the
/// serde_json helpers on the manager.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelDescription {
    pub name: String,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub position_unit: MeasurementUnit,
    pub size: Vec2,
    #[serde(default)]
    pub size_unit: MeasurementUnit,
    /// Texture name, resolved through the manager's registered texture table.
    #[serde(default)]
    pub background: Option<String>,
    #[serde(default)]
    pub background_color: Option<Color>,
    #[serde(default)]
    pub border: Option<Border>,
    #[serde(default)]
    pub displayed: bool,
    #[serde(default)]
    pub elements: Vec<ElementDescription>,
}

impl PanelDescription {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDescription {
    pub name: String,
    #[serde(flatten)]
    pub kind: ElementKindDescription,
    #[serde(default)]
    pub position: Vec2,
    #[serde(default)]
    pub position_unit: MeasurementUnit,
    #[serde(default)]
    pub size: Vec2,
    #[serde(default)]
    pub size_unit: MeasurementUnit,
    #[serde(default = "default_scale")]
    pub scale: Vec2,
    #[serde(default)]
    pub rotation: f32,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub border: Option<Border>,
    #[serde(default)]
    pub scripts: Vec<ScriptInfo>,
}

/// Type-specific payload of an element record. Texture references are names
/// resolved through the manager's registered texture table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKindDescription {
    Label {
        text: String,
        font: String,
        #[serde(default = "default_color")]
        color: Color,
    },
    StaticTexture {
        #[serde(default)]
        texture: Option<String>,
    },
    BaseButton,
    TextButton {
        text: String,
        font: String,
    },
    TextureButton {
        #[serde(default)]
        texture: Option<String>,
    },
    TextureTextButton {
        #[serde(default)]
        texture: Option<String>,
        text: String,
        font: String,
    },
    InputTextBox {
        #[serde(default)]
        text: String,
        font: String,
    },
    Group {
        #[serde(default)]
        children: Vec<ElementDescription>,
    },
    StackedList {
        #[serde(default)]
        children: Vec<ElementDescription>,
        #[serde(default)]
        spacing: f32,
    },
}

/// Materializes a panel description. Script failures are logged and skipped,
/// missing textures are logged and left unset: the result is always a
/// reduced-but-valid panel, never an error.
pub fn build_panel(
    description: &PanelDescription,
    registry: &ScriptRegistry,
    textures: &HashMap<String, TextureHandle>,
) -> Panel {
    let mut panel = Panel::new(
        description.name.clone(),
        Measurement {
            value: description.position,
            unit: description.position_unit,
        },
        Measurement {
            value: description.size,
            unit: description.size_unit,
        },
    );
    if let Some(name) = &description.background {
        panel.background = textures.get(name).copied();
        if panel.background.is_none() {
            log::warn!("texture `{name}` is not registered; panel `{}` gets none", description.name);
        }
    }
    panel.background_color = description.background_color;
    panel.border = description.border;
    panel.displayed = description.displayed;
    for element in &description.elements {
        let built = build_element(element, registry, textures);
        panel.elements.add(built);
    }
    panel
}

pub fn build_element(
    description: &ElementDescription,
    registry: &ScriptRegistry,
    textures: &HashMap<String, TextureHandle>,
) -> Element {
    let resolve_texture = |name: &Option<String>| -> Option<TextureHandle> {
        let name = name.as_ref()?;
        let handle = textures.get(name).copied();
        if handle.is_none() {
            log::warn!("texture `{name}` is not registered; element `{}` gets none", description.name);
        }
        handle
    };

    let mut element = match &description.kind {
        ElementKindDescription::Label { text, font, color } => {
            let mut e = Element::label(&description.name, text, font);
            if let crate::elements::ElementKind::Label(part) = &mut e.kind {
                part.color = *color;
            }
            e
        }
        ElementKindDescription::StaticTexture { texture } => {
            Element::static_texture(&description.name, resolve_texture(texture))
        }
        ElementKindDescription::BaseButton => Element::base_button(&description.name),
        ElementKindDescription::TextButton { text, font } => {
            Element::text_button(&description.name, text, font)
        }
        ElementKindDescription::TextureButton { texture } => {
            Element::texture_button(&description.name, resolve_texture(texture))
        }
        ElementKindDescription::TextureTextButton {
            texture,
            text,
            font,
        } => Element::texture_text_button(&description.name, resolve_texture(texture), text, font),
        ElementKindDescription::InputTextBox { text, font } => {
            let mut e = Element::input_box(&description.name, font);
            if let crate::elements::ElementKind::InputTextBox(state) = &mut e.kind {
                state.text = text.clone();
            }
            e
        }
        ElementKindDescription::Group { children } => {
            let mut e = Element::group(&description.name);
            if let Some(container) = e.children_mut() {
                for child in children {
                    container.add(build_element(child, registry, textures));
                }
            }
            e
        }
        ElementKindDescription::StackedList { children, spacing } => {
            let mut e = Element::stacked_list(&description.name, *spacing);
            if let Some(container) = e.children_mut() {
                for child in children {
                    container.add(build_element(child, registry, textures));
                }
            }
            e
        }
    };

    element = element
        .with_position(Measurement {
            value: description.position,
            unit: description.position_unit,
        })
        .with_size(Measurement {
            value: description.size,
            unit: description.size_unit,
        })
        .with_scale(description.scale)
        .with_rotation(description.rotation);
    element.visible = description.visible;
    element.border = description.border;

    for script in &description.scripts {
        element.attach_script(registry, script.clone());
    }
    element
}
