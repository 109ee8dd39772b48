use std::cell::RefCell;
use std::rc::Rc;
use stratum_ui::elements::Element;
use stratum_ui::input::{FrameInput, PointerButton, PointerState};
use stratum_ui::measure::{Measurement, OwnerGeometry};
use stratum_ui::{FocusState, FrameContext};

#[derive(Default, Debug, PartialEq, Eq)]
struct Counts {
    enter: u32,
    exit: u32,
    press: u32,
    release: u32,
}

fn instrumented_button() -> (Element, Rc<RefCell<Counts>>) {
    let mut element = Element::base_button("btn")
        .with_position(Measurement::pixels(0.0, 0.0))
        .with_size(Measurement::pixels(100.0, 50.0));
    let counts = Rc::new(RefCell::new(Counts::default()));
    let core = element.button_core_mut().unwrap();
    let c = Rc::clone(&counts);
    core.events
        .cursor_enter
        .attach(Box::new(move |_| c.borrow_mut().enter += 1));
    let c = Rc::clone(&counts);
    core.events
        .cursor_exit
        .attach(Box::new(move |_| c.borrow_mut().exit += 1));
    let c = Rc::clone(&counts);
    core.events
        .pressed
        .attach(Box::new(move |_| c.borrow_mut().press += 1));
    let c = Rc::clone(&counts);
    core.events
        .released
        .attach(Box::new(move |_| c.borrow_mut().release += 1));
    (element, counts)
}

fn step(element: &mut Element, pointer: PointerState) {
    let input = FrameInput {
        pointer,
        ..Default::default()
    };
    let mut focus = FocusState::default();
    let mut ctx = FrameContext {
        dt: 1.0 / 60.0,
        input: &input,
        focus: &mut focus,
    };
    element.update(&mut ctx, &OwnerGeometry::default());
}

#[test]
fn hover_enter_and_leave_fire_exactly_once() {
    let (mut element, counts) = instrumented_button();
    let outside = PointerState::at(500.0, 500.0);
    let inside = PointerState::at(50.0, 25.0);

    step(&mut element, outside);
    assert_eq!(counts.borrow().enter, 0);
    step(&mut element, inside);
    assert_eq!(counts.borrow().enter, 1);
    step(&mut element, inside);
    assert_eq!(counts.borrow().enter, 1);
    assert_eq!(counts.borrow().exit, 0);
    step(&mut element, outside);
    assert_eq!(counts.borrow().enter, 1);
    assert_eq!(counts.borrow().exit, 1);
}

#[test]
fn press_and_release_fire_once_while_hovering() {
    let (mut element, counts) = instrumented_button();
    let up = PointerState::at(50.0, 25.0);
    let down = up.with_button(PointerButton::Left, true);

    step(&mut element, up);
    step(&mut element, down);
    assert_eq!(counts.borrow().press, 1);
    step(&mut element, down);
    assert_eq!(counts.borrow().press, 1);
    assert_eq!(counts.borrow().release, 0);
    step(&mut element, up);
    assert_eq!(counts.borrow().press, 1);
    assert_eq!(counts.borrow().release, 1);
}

#[test]
fn press_sequence_without_hover_fires_nothing() {
    let (mut element, counts) = instrumented_button();
    let up = PointerState::at(500.0, 500.0);
    let down = up.with_button(PointerButton::Left, true);

    step(&mut element, up);
    step(&mut element, down);
    step(&mut element, down);
    step(&mut element, up);
    assert_eq!(*counts.borrow(), Counts::default());
}

#[test]
fn pointer_on_the_edge_counts_as_hovering() {
    let (mut element, counts) = instrumented_button();
    step(&mut element, PointerState::at(100.0, 25.0));
    assert_eq!(counts.borrow().enter, 1);
}

#[test]
fn rotated_button_hit_tests_its_rotated_footprint() {
    let (mut element, counts) = instrumented_button();
    element.transform.rotation = std::f32::consts::FRAC_PI_2;
    // Rotated 90° about the top-left, the body now lies along -x.
    step(&mut element, PointerState::at(50.0, 25.0));
    assert_eq!(counts.borrow().enter, 0);
    step(&mut element, PointerState::at(-25.0, 50.0));
    assert_eq!(counts.borrow().enter, 1);
}
