use crate::container::ElementId;
use crate::events::{ButtonEventArgs, ButtonEvents};
use crate::geometry::RotatedRect;
use crate::input::{PointerState, POINTER_BUTTON_COUNT};

/// What happened on a button during one update.
#[derive(Debug, Clone, Copy, Default)]
pub struct ButtonFrame {
    pub pressed: bool,
    pub released: bool,
    pub hovering: bool,
}

/// Hit-region state machine plus the event bus. Hover and press/release are
/// independent machines; press/release only fire while hovering.
pub struct ButtonCore {
    pub events: ButtonEvents,
    hovering: bool,
    prev_buttons: [bool; POINTER_BUTTON_COUNT],
}

impl Default for ButtonCore {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonCore {
    pub fn new() -> Self {
        Self {
            events: ButtonEvents::default(),
            hovering: false,
            prev_buttons: [false; POINTER_BUTTON_COUNT],
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn update(
        &mut self,
        id: &ElementId,
        pointer: &PointerState,
        hit: &RotatedRect,
    ) -> ButtonFrame {
        let args = ButtonEventArgs {
            element: id.clone(),
            pointer: *pointer,
        };
        let inside = hit.contains(pointer.position);
        if inside && !self.hovering {
            self.hovering = true;
            self.events.cursor_enter.invoke(&args);
        } else if !inside && self.hovering {
            self.hovering = false;
            self.events.cursor_exit.invoke(&args);
        }

        let mut frame = ButtonFrame {
            hovering: self.hovering,
            ..Default::default()
        };
        if self.hovering {
            // At most one press and one release per frame, even if several
            // pointer buttons transitioned at once.
            for i in 0..POINTER_BUTTON_COUNT {
                if pointer.buttons[i] && !self.prev_buttons[i] {
                    self.events.pressed.invoke(&args);
                    frame.pressed = true;
                    break;
                }
            }
            for i in 0..POINTER_BUTTON_COUNT {
                if !pointer.buttons[i] && self.prev_buttons[i] {
                    self.events.released.invoke(&args);
                    frame.released = true;
                    break;
                }
            }
        }
        self.prev_buttons = pointer.buttons;
        frame
    }
}
