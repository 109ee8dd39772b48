pub mod behavior;
pub mod caret;
pub mod container;
pub mod elements;
pub mod events;
pub mod geometry;
pub mod input;
pub mod measure;
pub mod panel;
pub mod renderer;

use crate::behavior::ScriptRegistry;
use crate::elements::Element;
use crate::geometry::Size;
use crate::input::FrameInput;
use crate::panel::{build_panel, Panel, PanelDescription};
use crate::renderer::{Renderer, TextureHandle};
use std::collections::HashMap;
use std::path::Path;
use uuid::Uuid;

/// Host-side convenience: routes `log` output to stderr, honoring `RUST_LOG`.
/// Safe to call more than once.
pub fn init_logging() {
    let _ = env_logger::Builder::from_default_env().try_init();
}

/// Process-wide "which element currently receives keyboard input" marker.
/// At most one element holds focus; setting a new holder atomically revokes
/// the previous one.
#[derive(Debug, Clone, Default)]
pub struct FocusState {
    focused: Option<Uuid>,
}

impl FocusState {
    pub fn set_focus(&mut self, handle: Uuid) {
        self.focused = Some(handle);
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    pub fn is_focused(&self, handle: Uuid) -> bool {
        self.focused == Some(handle)
    }

    pub fn focused(&self) -> Option<Uuid> {
        self.focused
    }
}

/// Per-frame context threaded through the tree during `update`.
pub struct FrameContext<'a> {
    pub dt: f32,
    pub input: &'a FrameInput,
    pub focus: &'a mut FocusState,
}

/// Owns the loaded panels, the script registry, the texture name table and
/// the focus marker. One logical thread drives `update` then `draw` once per
/// frame; update always completes for a panel before that panel draws.
pub struct UserInterfaceManager {
    viewport: Size,
    panels: Vec<Panel>,
    focus: FocusState,
    registry: ScriptRegistry,
    textures: HashMap<String, TextureHandle>,
}

impl UserInterfaceManager {
    pub fn new(viewport: Size) -> Self {
        Self::with_registry(viewport, ScriptRegistry::new())
    }

    pub fn with_registry(viewport: Size, registry: ScriptRegistry) -> Self {
        Self {
            viewport,
            panels: Vec::new(),
            focus: FocusState::default(),
            registry,
            textures: HashMap::new(),
        }
    }

    pub fn registry(&self) -> &ScriptRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut ScriptRegistry {
        &mut self.registry
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Maps a texture name used by descriptions onto a backend handle.
    pub fn register_texture(&mut self, name: impl Into<String>, handle: TextureHandle) {
        self.textures.insert(name.into(), handle);
    }

    /// Materializes and stores a panel. Bad scripts or textures inside only
    /// reduce the panel; they never fail the load.
    pub fn load_panel(&mut self, description: &PanelDescription) -> &mut Panel {
        let panel = build_panel(description, &self.registry, &self.textures);
        self.panels.push(panel);
        self.panels.last_mut().expect("panel was just pushed")
    }

    pub fn load_panel_json(&mut self, json: &str) -> Result<(), serde_json::Error> {
        let description = PanelDescription::from_json(json)?;
        self.load_panel(&description);
        Ok(())
    }

    /// Loads every readable, parseable panel file; unreadable or malformed
    /// paths are logged and skipped, the rest still load. Returns how many
    /// panels were loaded.
    pub fn load_panels_from_files<P: AsRef<Path>>(&mut self, paths: &[P]) -> usize {
        let mut loaded = 0;
        for path in paths {
            let path = path.as_ref();
            let json = match std::fs::read_to_string(path) {
                Ok(json) => json,
                Err(err) => {
                    log::warn!("skipping panel file {}: {err}", path.display());
                    continue;
                }
            };
            match self.load_panel_json(&json) {
                Ok(()) => loaded += 1,
                Err(err) => log::warn!("skipping panel file {}: {err}", path.display()),
            }
        }
        loaded
    }

    /// Adds an already-built panel.
    pub fn add_panel(&mut self, panel: Panel) {
        self.panels.push(panel);
    }

    /// Lookup by name; unknown names are not an error.
    pub fn panel(&self, name: &str) -> Option<&Panel> {
        self.panels.iter().find(|p| p.name == name)
    }

    pub fn panel_mut(&mut self, name: &str) -> Option<&mut Panel> {
        self.panels.iter_mut().find(|p| p.name == name)
    }

    pub fn display_panel(&mut self, name: &str) {
        match self.panel_mut(name) {
            Some(panel) => panel.displayed = true,
            None => log::debug!("display_panel: no panel named `{name}`"),
        }
    }

    pub fn hide_panel(&mut self, name: &str) {
        match self.panel_mut(name) {
            Some(panel) => panel.displayed = false,
            None => log::debug!("hide_panel: no panel named `{name}`"),
        }
    }

    /// Convenience search across a panel's top-level elements.
    pub fn find_element(&self, panel: &str, element: &str) -> Option<&Element> {
        self.panel(panel)?.elements.get_named(element)
    }

    pub fn focus(&self) -> &FocusState {
        &self.focus
    }

    pub fn clear_focus(&mut self) {
        self.focus.clear();
    }

    /// Advances every displayed panel, depth-first in insertion order.
    pub fn update(&mut self, dt: f32, input: &FrameInput) {
        let viewport = self.viewport;
        let mut ctx = FrameContext {
            dt,
            input,
            focus: &mut self.focus,
        };
        for panel in self.panels.iter_mut().filter(|p| p.displayed) {
            panel.update(&mut ctx, viewport);
        }
    }

    /// Draws every displayed panel in load order.
    pub fn draw(&self, renderer: &mut dyn Renderer) {
        for panel in self.panels.iter().filter(|p| p.displayed) {
            panel.draw(renderer, self.viewport, &self.focus);
        }
    }

    /// Disposes every panel's tree (elements first, then their script
    /// instances) and drops the panel set.
    pub fn dispose(&mut self) {
        for panel in &mut self.panels {
            panel.dispose();
        }
        self.panels.clear();
        self.focus.clear();
    }
}
