pub mod button;
pub mod group;
pub mod input_box;
pub mod scroll_bar;

use crate::behavior::{
    load_button_script, load_script, ScriptBinding, ScriptInfo, ScriptRegistry, ScriptUpdate,
};
use crate::container::{ElementContainer, ElementId};
use crate::geometry::{Rect, RotatedRect, Size, Vec2};
use crate::input::FrameInput;
use crate::measure::{ElementTransform, Measurement, OwnerGeometry};
use crate::renderer::{Color, Renderer, TextOrigin, TextureHandle, WHITE};
use crate::{FocusState, FrameContext};
use button::ButtonCore;
use group::StackedList;
use input_box::InputBoxState;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Border {
    pub thickness: i32,
    pub color: Color,
}

/// Text content shared by labels and the text-bearing button variants.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPart {
    pub text: String,
    pub font: String,
    pub color: Color,
}

impl TextPart {
    pub fn new(text: impl Into<String>, font: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font: font.into(),
            color: WHITE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TexturePart {
    pub texture: Option<TextureHandle>,
    pub tint: Color,
}

impl TexturePart {
    pub fn new(texture: Option<TextureHandle>) -> Self {
        Self {
            texture,
            tint: WHITE,
        }
    }
}

/// Variant data. Capability access goes through `button_core`/`children`
/// style accessors on `Element` rather than downcasts.
pub enum ElementKind {
    Label(TextPart),
    StaticTexture(TexturePart),
    /// Hit region plus event bus, no visual of its own.
    BaseButton(ButtonCore),
    TextButton {
        core: ButtonCore,
        text: TextPart,
        background: Color,
    },
    TextureButton {
        core: ButtonCore,
        texture: TexturePart,
    },
    TextureTextButton {
        core: ButtonCore,
        texture: TexturePart,
        text: TextPart,
    },
    InputTextBox(InputBoxState),
    Group(ElementContainer),
    StackedList(StackedList),
}

/// One node of the UI tree: identity, transform, optional border, scripts
/// and the variant payload.
pub struct Element {
    pub(crate) handle: Uuid,
    pub(crate) id: ElementId,
    pub transform: ElementTransform,
    pub size: Measurement,
    pub visible: bool,
    pub border: Option<Border>,
    pub(crate) scripts: Vec<ScriptBinding>,
    pub kind: ElementKind,
}

impl Element {
    pub fn new(name: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            handle: Uuid::new_v4(),
            id: ElementId::unowned(name),
            transform: ElementTransform::default(),
            size: Measurement::default(),
            visible: true,
            border: None,
            scripts: Vec::new(),
            kind,
        }
    }

    pub fn label(name: impl Into<String>, text: impl Into<String>, font: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Label(TextPart::new(text, font)))
    }

    pub fn static_texture(name: impl Into<String>, texture: Option<TextureHandle>) -> Self {
        Self::new(name, ElementKind::StaticTexture(TexturePart::new(texture)))
    }

    pub fn base_button(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::BaseButton(ButtonCore::new()))
    }

    pub fn text_button(
        name: impl Into<String>,
        text: impl Into<String>,
        font: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            ElementKind::TextButton {
                core: ButtonCore::new(),
                text: TextPart::new(text, font),
                background: [0.2, 0.2, 0.25, 1.0],
            },
        )
    }

    pub fn texture_button(name: impl Into<String>, texture: Option<TextureHandle>) -> Self {
        Self::new(
            name,
            ElementKind::TextureButton {
                core: ButtonCore::new(),
                texture: TexturePart::new(texture),
            },
        )
    }

    pub fn texture_text_button(
        name: impl Into<String>,
        texture: Option<TextureHandle>,
        text: impl Into<String>,
        font: impl Into<String>,
    ) -> Self {
        Self::new(
            name,
            ElementKind::TextureTextButton {
                core: ButtonCore::new(),
                texture: TexturePart::new(texture),
                text: TextPart::new(text, font),
            },
        )
    }

    pub fn input_box(name: impl Into<String>, font: impl Into<String>) -> Self {
        Self::new(name, ElementKind::InputTextBox(InputBoxState::new(font)))
    }

    pub fn group(name: impl Into<String>) -> Self {
        Self::new(name, ElementKind::Group(ElementContainer::new()))
    }

    pub fn stacked_list(name: impl Into<String>, spacing: f32) -> Self {
        Self::new(name, ElementKind::StackedList(StackedList::new(spacing)))
    }

    pub fn with_position(mut self, position: Measurement) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_size(mut self, size: Measurement) -> Self {
        self.size = size;
        self
    }

    pub fn with_rotation(mut self, radians: f32) -> Self {
        self.transform.rotation = radians;
        self
    }

    pub fn with_scale(mut self, scale: Vec2) -> Self {
        self.transform.scale = scale;
        self
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }

    pub fn id(&self) -> &ElementId {
        &self.id
    }

    /// Per-instance handle, used for focus tracking. Clones get a fresh one.
    pub fn handle(&self) -> Uuid {
        self.handle
    }

    pub fn script_count(&self) -> usize {
        self.scripts.len()
    }

    pub fn has_script(&self, name: &str) -> bool {
        self.scripts.iter().any(|b| b.info.name == name)
    }

    /// The live instance behind an attached script, if it loaded.
    pub fn script_instance(&self, name: &str) -> Option<crate::behavior::SharedScript> {
        self.scripts
            .iter()
            .find(|b| b.info.name == name)
            .map(|b| std::rc::Rc::clone(&b.instance))
    }

    /// Absolute pixel position, recomputed on demand from the owner's
    /// current geometry.
    pub fn raw_position(&self, owner: &OwnerGeometry) -> Vec2 {
        self.transform.draw_position(owner)
    }

    pub fn raw_size(&self, owner: &OwnerGeometry) -> Size {
        let resolved = self.size.to_pixels(owner.size);
        Size::new(
            resolved.x * self.transform.scale.x,
            resolved.y * self.transform.scale.y,
        )
    }

    pub fn raw_rect(&self, owner: &OwnerGeometry) -> Rect {
        Rect::from_pixels(self.raw_position(owner), self.raw_size(owner))
    }

    pub fn hit_rect(&self, owner: &OwnerGeometry) -> RotatedRect {
        RotatedRect::new(self.raw_rect(owner), self.transform.rotation)
    }

    pub fn button_core(&self) -> Option<&ButtonCore> {
        match &self.kind {
            ElementKind::BaseButton(core)
            | ElementKind::TextButton { core, .. }
            | ElementKind::TextureButton { core, .. }
            | ElementKind::TextureTextButton { core, .. } => Some(core),
            ElementKind::InputTextBox(state) => Some(&state.core),
            _ => None,
        }
    }

    pub fn button_core_mut(&mut self) -> Option<&mut ButtonCore> {
        match &mut self.kind {
            ElementKind::BaseButton(core)
            | ElementKind::TextButton { core, .. }
            | ElementKind::TextureButton { core, .. }
            | ElementKind::TextureTextButton { core, .. } => Some(core),
            ElementKind::InputTextBox(state) => Some(&mut state.core),
            _ => None,
        }
    }

    pub fn children(&self) -> Option<&ElementContainer> {
        match &self.kind {
            ElementKind::Group(children) => Some(children),
            ElementKind::StackedList(list) => Some(&list.children),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut ElementContainer> {
        match &mut self.kind {
            ElementKind::Group(children) => Some(children),
            ElementKind::StackedList(list) => Some(&mut list.children),
            _ => None,
        }
    }

    /// Resolves the script and wires it up. Button-hosting elements load
    /// through the button specialization and get their handlers spliced into
    /// the event bus. Failures are logged and the element proceeds without
    /// the script.
    pub fn attach_script(&mut self, registry: &ScriptRegistry, info: ScriptInfo) -> bool {
        let result = if self.button_core().is_some() {
            load_button_script(registry, &info)
        } else {
            load_script(registry, &info, &[])
        };
        match result {
            Ok(instance) => {
                if let Some(core) = self.button_core_mut() {
                    crate::behavior::splice_button_handlers(&instance, &mut core.events);
                }
                self.scripts.push(ScriptBinding { info, instance });
                true
            }
            Err(err) => {
                log::warn!(
                    "skipping script `{}` on element `{}`: {err}",
                    info.name,
                    self.id
                );
                false
            }
        }
    }

    pub fn update(&mut self, ctx: &mut FrameContext<'_>, owner: &OwnerGeometry) {
        let geometry = OwnerGeometry::new(self.raw_position(owner), self.raw_size(owner));
        let hit = RotatedRect::new(
            Rect::from_pixels(geometry.position, geometry.size),
            self.transform.rotation,
        );
        let id = self.id.clone();
        let handle = self.handle;

        match &mut self.kind {
            ElementKind::Label(_) | ElementKind::StaticTexture(_) => {}
            ElementKind::BaseButton(core) => {
                core.update(&id, &ctx.input.pointer, &hit);
            }
            ElementKind::TextButton { core, .. }
            | ElementKind::TextureButton { core, .. }
            | ElementKind::TextureTextButton { core, .. } => {
                core.update(&id, &ctx.input.pointer, &hit);
            }
            ElementKind::InputTextBox(state) => state.update(handle, &id, ctx, &hit),
            ElementKind::Group(children) => {
                for child in children.iter_mut() {
                    child.update(ctx, &geometry);
                }
            }
            ElementKind::StackedList(list) => list.update(ctx, &geometry, &hit),
        }

        self.run_script_updates(ctx.dt, ctx.input);
    }

    fn run_script_updates(&mut self, dt: f32, input: &FrameInput) {
        if self.scripts.is_empty() {
            return;
        }
        let id = self.id.clone();
        let ctx = ScriptUpdate {
            dt,
            pointer: input.pointer,
        };
        for binding in &self.scripts {
            let mut script = binding.instance.borrow_mut();
            if script.enabled() {
                script.update(&id, &ctx);
            }
        }
    }

    pub fn draw(&self, renderer: &mut dyn Renderer, owner: &OwnerGeometry, focus: &FocusState) {
        if !self.visible {
            return;
        }
        let geometry = OwnerGeometry::new(self.raw_position(owner), self.raw_size(owner));
        let rect = Rect::from_pixels(geometry.position, geometry.size);
        let rotation = self.transform.rotation;

        match &self.kind {
            ElementKind::Label(part) => {
                renderer.draw_text(
                    &part.font,
                    &part.text,
                    geometry.position,
                    part.color,
                    self.transform.scale.x,
                    rotation,
                    TextOrigin::Center,
                );
            }
            ElementKind::StaticTexture(part) => {
                if let Some(texture) = part.texture {
                    renderer.draw_textured_rect(texture, rect, rotation, part.tint);
                }
            }
            ElementKind::BaseButton(_) => {}
            ElementKind::TextButton {
                text, background, ..
            } => {
                renderer.draw_rect(rect, rotation, *background);
                renderer.draw_text(
                    &text.font,
                    &text.text,
                    geometry.position,
                    text.color,
                    self.transform.scale.x,
                    rotation,
                    TextOrigin::TopLeft,
                );
            }
            ElementKind::TextureButton { texture, .. } => {
                if let Some(handle) = texture.texture {
                    renderer.draw_textured_rect(handle, rect, rotation, texture.tint);
                }
            }
            ElementKind::TextureTextButton { texture, text, .. } => {
                if let Some(handle) = texture.texture {
                    renderer.draw_textured_rect(handle, rect, rotation, texture.tint);
                }
                renderer.draw_text(
                    &text.font,
                    &text.text,
                    geometry.position,
                    text.color,
                    self.transform.scale.x,
                    rotation,
                    TextOrigin::TopLeft,
                );
            }
            ElementKind::InputTextBox(state) => {
                state.draw(
                    renderer,
                    &geometry,
                    rotation,
                    focus.is_focused(self.handle),
                    self.transform.scale.x,
                );
            }
            ElementKind::Group(children) => {
                for child in children.iter() {
                    child.draw(renderer, &geometry, focus);
                }
            }
            ElementKind::StackedList(list) => list.draw(renderer, &geometry, focus),
        }

        if let Some(border) = &self.border {
            draw_border(renderer, rect, rotation, border);
        }
    }

    /// Fully independent copy: fresh handle, reset interaction state, cloned
    /// payload, scripts re-resolved against the clone. The copy starts
    /// unowned.
    pub fn deep_clone(&self, registry: &ScriptRegistry) -> Element {
        let mut clone = Element {
            handle: Uuid::new_v4(),
            id: ElementId::unowned(self.id.name.clone()),
            transform: self.transform,
            size: self.size,
            visible: self.visible,
            border: self.border,
            scripts: Vec::new(),
            kind: self.kind.deep_clone(registry),
        };
        for binding in &self.scripts {
            clone.attach_script(registry, binding.info.clone());
        }
        clone
    }

    /// Recursive disposal: children first, then this element's script
    /// instances.
    pub fn dispose(&mut self) {
        match &mut self.kind {
            ElementKind::Group(children) => children.dispose(),
            ElementKind::StackedList(list) => list.children.dispose(),
            _ => {}
        }
        for binding in self.scripts.drain(..) {
            binding.instance.borrow_mut().dispose();
        }
    }
}

impl ElementKind {
    fn deep_clone(&self, registry: &ScriptRegistry) -> ElementKind {
        match self {
            ElementKind::Label(part) => ElementKind::Label(part.clone()),
            ElementKind::StaticTexture(part) => ElementKind::StaticTexture(*part),
            ElementKind::BaseButton(_) => ElementKind::BaseButton(ButtonCore::new()),
            ElementKind::TextButton {
                text, background, ..
            } => ElementKind::TextButton {
                core: ButtonCore::new(),
                text: text.clone(),
                background: *background,
            },
            ElementKind::TextureButton { texture, .. } => ElementKind::TextureButton {
                core: ButtonCore::new(),
                texture: *texture,
            },
            ElementKind::TextureTextButton { texture, text, .. } => {
                ElementKind::TextureTextButton {
                    core: ButtonCore::new(),
                    texture: *texture,
                    text: text.clone(),
                }
            }
            ElementKind::InputTextBox(state) => ElementKind::InputTextBox(state.fresh_copy()),
            ElementKind::Group(children) => {
                let mut copy = ElementContainer::new();
                children.clone_elements_into(&mut copy, registry);
                ElementKind::Group(copy)
            }
            ElementKind::StackedList(list) => ElementKind::StackedList(list.deep_clone(registry)),
        }
    }
}

/// Four thin edge rects along the (possibly rotated) outline. Edge corners
/// are rotated in floating point about the rect's top-left and quantized at
/// the draw call.
fn draw_border(renderer: &mut dyn Renderer, rect: Rect, rotation: f32, border: &Border) {
    let t = border.thickness.max(1);
    let edges = [
        Rect::new(rect.x, rect.y, rect.width, t),
        Rect::new(rect.x, rect.y + rect.height - t, rect.width, t),
        Rect::new(rect.x, rect.y, t, rect.height),
        Rect::new(rect.x + rect.width - t, rect.y, t, rect.height),
    ];
    if rotation == 0.0 {
        for edge in edges {
            renderer.draw_rect(edge, 0.0, border.color);
        }
        return;
    }
    let origin = rect.pos();
    for edge in edges {
        let top_left = edge.pos().rotated_about(origin, rotation);
        renderer.draw_rect(Rect::from_pixels(top_left, edge.size()), rotation, border.color);
    }
}
