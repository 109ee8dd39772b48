use crate::geometry::Vec2;

pub const POINTER_BUTTON_COUNT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Extra1,
    Extra2,
}

impl PointerButton {
    pub fn index(self) -> usize {
        match self {
            PointerButton::Left => 0,
            PointerButton::Right => 1,
            PointerButton::Middle => 2,
            PointerButton::Extra1 => 3,
            PointerButton::Extra2 => 4,
        }
    }
}

/// One frame's pointer snapshot, as supplied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    pub position: Vec2,
    pub buttons: [bool; POINTER_BUTTON_COUNT],
}

impl PointerState {
    pub fn at(x: f32, y: f32) -> Self {
        Self {
            position: Vec2::new(x, y),
            buttons: [false; POINTER_BUTTON_COUNT],
        }
    }

    pub fn with_button(mut self, button: PointerButton, down: bool) -> Self {
        self.buttons[button.index()] = down;
        self
    }

    pub fn is_down(&self, button: PointerButton) -> bool {
        self.buttons[button.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyboardModifiers {
    pub shift: bool,
    pub control: bool,
}

/// Push-style typed-input feed consumed by the text caret. The host converts
/// its own key events into these before each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEvent {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

/// Everything the tree consumes for one `update` call.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub pointer: PointerState,
    pub modifiers: KeyboardModifiers,
    pub typed: Vec<TextEvent>,
    pub scroll_delta: f32,
}
