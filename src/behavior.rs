use crate::container::ElementId;
use crate::events::{ButtonEventArgs, ButtonEvents};
use crate::geometry::Vec2;
use crate::input::PointerState;
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;
use thiserror::Error;

/// Script names in panel descriptions are bare; registry keys carry this
/// conventional prefix.
pub const SCRIPT_NAME_PREFIX: &str = "scripts.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArgKind {
    Bool,
    Int,
    Float,
    Text,
    Vector,
}

/// A supplied script argument. `Late` is a late-bound value wrapper: it
/// carries only the runtime kind it will eventually produce, which is what
/// schema validation checks it against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Vector(Vec2),
    Late(ArgKind),
}

impl ArgValue {
    pub fn kind(&self) -> ArgKind {
        match self {
            ArgValue::Bool(_) => ArgKind::Bool,
            ArgValue::Int(_) => ArgKind::Int,
            ArgValue::Float(_) => ArgKind::Float,
            ArgValue::Text(_) => ArgKind::Text,
            ArgValue::Vector(_) => ArgKind::Vector,
            ArgValue::Late(kind) => *kind,
        }
    }

    pub fn matches(&self, expected: ArgKind) -> bool {
        self.kind() == expected
    }
}

pub type ArgumentMap = BTreeMap<String, ArgValue>;

/// One entry of a script's self-declared argument schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArgumentSpec {
    pub name: &'static str,
    pub kind: ArgKind,
}

impl ArgumentSpec {
    pub fn new(name: &'static str, kind: ArgKind) -> Self {
        Self { name, kind }
    }
}

/// Capabilities a registry entry declares, checked against what a load site
/// requires. Implementing `BehaviorScript` is the base capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    FrameUpdate,
    ButtonEvents,
}

/// Per-frame context handed to script update hooks.
#[derive(Debug, Clone, Copy)]
pub struct ScriptUpdate {
    pub dt: f32,
    pub pointer: PointerState,
}

/// An externally supplied behavior attached to an element.
pub trait BehaviorScript {
    /// Declared argument schema; supplied arguments are validated against
    /// this at load time.
    fn schema(&self) -> Vec<ArgumentSpec> {
        Vec::new()
    }

    /// The loader assigns the persisted enabled flag and argument map here
    /// right after construction.
    fn configure(&mut self, enabled: bool, arguments: ArgumentMap);

    fn enabled(&self) -> bool;

    fn update(&mut self, _element: &ElementId, _ctx: &ScriptUpdate) {}

    /// Button-capable scripts hand out their event interface here.
    fn as_button_behavior(&mut self) -> Option<&mut dyn ButtonBehavior> {
        None
    }

    fn dispose(&mut self) {}
}

/// Button event interface. Every handler defaults to a no-op, so a behavior
/// only interested in presses simply skips the rest.
pub trait ButtonBehavior {
    fn on_cursor_enter(&mut self, _args: &ButtonEventArgs) {}
    fn on_cursor_exit(&mut self, _args: &ButtonEventArgs) {}
    fn on_pressed(&mut self, _args: &ButtonEventArgs) {}
    fn on_released(&mut self, _args: &ButtonEventArgs) {}
}

impl std::fmt::Debug for dyn BehaviorScript {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BehaviorScript")
    }
}

pub type SharedScript = Rc<RefCell<dyn BehaviorScript>>;
type ScriptFactory = Box<dyn Fn(&ArgumentMap) -> SharedScript>;

/// Persisted per-element script binding record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default)]
    pub arguments: ArgumentMap,
}

impl ScriptInfo {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            enabled: true,
            arguments: ArgumentMap::new(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

/// A live binding held by an element. Only scripts that loaded successfully
/// become bindings; failures are logged at the attach site and dropped.
pub struct ScriptBinding {
    pub info: ScriptInfo,
    pub(crate) instance: SharedScript,
}

struct ScriptEntry {
    capabilities: Vec<Capability>,
    factory: Option<ScriptFactory>,
}

/// Explicit name-to-factory registry; how it is populated (static table,
/// plugin init, test setup) is the host's business.
#[derive(Default)]
pub struct ScriptRegistry {
    entries: HashMap<String, ScriptEntry>,
}

impl ScriptRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: &str, capabilities: &[Capability], factory: F)
    where
        F: Fn(&ArgumentMap) -> SharedScript + 'static,
    {
        self.entries.insert(
            qualify(name),
            ScriptEntry {
                capabilities: capabilities.to_vec(),
                factory: Some(Box::new(factory)),
            },
        );
    }

    /// Registers a capability declaration without a factory. Loading such an
    /// entry fails with `ScriptError::NoFactory`.
    pub fn register_stub(&mut self, name: &str, capabilities: &[Capability]) {
        self.entries.insert(
            qualify(name),
            ScriptEntry {
                capabilities: capabilities.to_vec(),
                factory: None,
            },
        );
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(&qualify(name))
    }

    fn resolve(&self, name: &str) -> Option<&ScriptEntry> {
        self.entries.get(&qualify(name))
    }
}

fn qualify(name: &str) -> String {
    if name.starts_with(SCRIPT_NAME_PREFIX) {
        name.to_string()
    } else {
        format!("{SCRIPT_NAME_PREFIX}{name}")
    }
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("script `{0}` not found in registry")]
    NotFound(String),
    #[error("script `{name}` is missing required capabilities {missing:?}")]
    MissingCapabilities {
        name: String,
        missing: Vec<Capability>,
    },
    #[error("script `{0}` has no factory registered")]
    NoFactory(String),
    #[error("script `{name}`: required argument `{argument}` was not supplied")]
    ArgumentMissing { name: String, argument: String },
    #[error("script `{name}`: argument `{argument}` does not match declared kind {expected:?}")]
    ArgumentMismatch {
        name: String,
        argument: String,
        expected: ArgKind,
    },
}

/// Resolves, instantiates, configures and validates one script. All failure
/// modes are non-fatal to callers: the instance is simply discarded and the
/// element proceeds without it.
pub fn load_script(
    registry: &ScriptRegistry,
    info: &ScriptInfo,
    required: &[Capability],
) -> Result<SharedScript, ScriptError> {
    let entry = registry
        .resolve(&info.name)
        .ok_or_else(|| ScriptError::NotFound(info.name.clone()))?;

    // Collect every missing capability before failing, for diagnostics.
    let missing: Vec<Capability> = required
        .iter()
        .filter(|cap| !entry.capabilities.contains(cap))
        .copied()
        .collect();
    if !missing.is_empty() {
        return Err(ScriptError::MissingCapabilities {
            name: info.name.clone(),
            missing,
        });
    }

    let factory = entry
        .factory
        .as_ref()
        .ok_or_else(|| ScriptError::NoFactory(info.name.clone()))?;

    let instance = factory(&info.arguments);
    instance
        .borrow_mut()
        .configure(info.enabled, info.arguments.clone());

    let schema = instance.borrow().schema();
    for spec in schema {
        match info.arguments.get(spec.name) {
            None => {
                return Err(ScriptError::ArgumentMissing {
                    name: info.name.clone(),
                    argument: spec.name.to_string(),
                })
            }
            Some(value) if !value.matches(spec.kind) => {
                return Err(ScriptError::ArgumentMismatch {
                    name: info.name.clone(),
                    argument: spec.name.to_string(),
                    expected: spec.kind,
                })
            }
            Some(_) => {}
        }
    }

    Ok(instance)
}

/// Specialization for button-hosting elements: requires the button-events
/// capability on top of the base contract.
pub fn load_button_script(
    registry: &ScriptRegistry,
    info: &ScriptInfo,
) -> Result<SharedScript, ScriptError> {
    load_script(registry, info, &[Capability::ButtonEvents])
}

/// Splices a loaded script's four handlers into the event bus. Handlers the
/// behavior leaves as default no-ops still attach and simply do nothing.
pub fn splice_button_handlers(instance: &SharedScript, events: &mut ButtonEvents) {
    let script = Rc::clone(instance);
    events.cursor_enter.attach(Box::new(move |args| {
        dispatch(&script, args, |b, a| b.on_cursor_enter(a));
    }));
    let script = Rc::clone(instance);
    events.cursor_exit.attach(Box::new(move |args| {
        dispatch(&script, args, |b, a| b.on_cursor_exit(a));
    }));
    let script = Rc::clone(instance);
    events.pressed.attach(Box::new(move |args| {
        dispatch(&script, args, |b, a| b.on_pressed(a));
    }));
    let script = Rc::clone(instance);
    events.released.attach(Box::new(move |args| {
        dispatch(&script, args, |b, a| b.on_released(a));
    }));
}

fn dispatch<F>(script: &SharedScript, args: &ButtonEventArgs, f: F)
where
    F: FnOnce(&mut dyn ButtonBehavior, &ButtonEventArgs),
{
    let mut script = script.borrow_mut();
    if !script.enabled() {
        return;
    }
    if let Some(behavior) = script.as_button_behavior() {
        f(behavior, args);
    }
}
