use crate::container::ElementId;
use crate::input::PointerState;

/// Payload handed to every button event handler.
#[derive(Debug, Clone)]
pub struct ButtonEventArgs {
    pub element: ElementId,
    pub pointer: PointerState,
}

type Handler = Box<dyn FnMut(&ButtonEventArgs)>;

/// One multicast callback list. Invoking an empty slot is a no-op; handlers
/// run in attachment order.
#[derive(Default)]
pub struct EventSlot {
    handlers: Vec<Handler>,
}

impl EventSlot {
    pub fn attach(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    pub fn invoke(&mut self, args: &ButtonEventArgs) {
        for handler in &mut self.handlers {
            handler(args);
        }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// The four event slots every button carries.
#[derive(Default)]
pub struct ButtonEvents {
    pub cursor_enter: EventSlot,
    pub cursor_exit: EventSlot,
    pub pressed: EventSlot,
    pub released: EventSlot,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn handlers_run_in_attachment_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut slot = EventSlot::default();
        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            slot.attach(Box::new(move |_| order.borrow_mut().push(tag)));
        }
        let args = ButtonEventArgs {
            element: ElementId::unowned("btn"),
            pointer: PointerState::default(),
        };
        slot.invoke(&args);
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_slot_invoke_is_a_noop() {
        let mut slot = EventSlot::default();
        let args = ButtonEventArgs {
            element: ElementId::unowned("btn"),
            pointer: PointerState::default(),
        };
        slot.invoke(&args);
        assert!(slot.is_empty());
    }
}
