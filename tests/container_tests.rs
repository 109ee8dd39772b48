use stratum_ui::behavior::ScriptRegistry;
use stratum_ui::container::{ElementContainer, ElementId};
use stratum_ui::elements::Element;
use stratum_ui::measure::{Measurement, OwnerGeometry};

#[test]
fn same_name_gets_distinct_disambiguators() {
    let mut container = ElementContainer::new();
    let first = container.add(Element::base_button("ok"));
    let second = container.add(Element::base_button("ok"));
    assert_eq!(first.disambiguator, 0);
    assert_eq!(second.disambiguator, 1);
}

#[test]
fn lowest_free_disambiguator_is_reused() {
    let mut container = ElementContainer::new();
    let first = container.add(Element::base_button("ok"));
    container.add(Element::base_button("ok"));
    container.remove(&first).expect("first should be present");
    let replacement = container.add(Element::base_button("ok"));
    assert_eq!(replacement.disambiguator, 0);
    // The survivor keeps its id.
    assert!(container
        .get(&ElementId {
            name: "ok".into(),
            disambiguator: 1
        })
        .is_some());
}

#[test]
fn removed_element_reports_disambiguator_zero() {
    let mut container = ElementContainer::new();
    container.add(Element::label("title", "hi", "roboto"));
    let second = container.add(Element::label("title", "there", "roboto"));
    let detached = container.remove(&second).expect("second should be present");
    assert_eq!(detached.id().disambiguator, 0);
    assert_eq!(container.len(), 1);
}

#[test]
fn insertion_order_is_preserved() {
    let mut container = ElementContainer::new();
    container.add(Element::label("a", "", "f"));
    container.add(Element::label("b", "", "f"));
    container.insert(1, Element::label("c", "", "f"));
    let names: Vec<&str> = container.iter().map(|e| e.id().name.as_str()).collect();
    assert_eq!(names, vec!["a", "c", "b"]);
}

#[test]
fn clear_empties_the_container() {
    let mut container = ElementContainer::new();
    for _ in 0..3 {
        container.add(Element::base_button("b"));
    }
    container.clear();
    assert!(container.is_empty());
}

#[test]
fn cloned_elements_are_independent() {
    let registry = ScriptRegistry::new();
    let mut source = ElementContainer::new();
    source.add(
        Element::label("title", "hello", "roboto").with_position(Measurement::pixels(5.0, 5.0)),
    );
    let mut dest = ElementContainer::new();
    source.clone_elements_into(&mut dest, &registry);
    assert_eq!(dest.len(), 1);

    let original = source.get_named("title").unwrap();
    let clone = dest.get_named("title").unwrap();
    assert_ne!(original.handle(), clone.handle());
    assert_eq!(
        original.raw_position(&OwnerGeometry::default()),
        clone.raw_position(&OwnerGeometry::default())
    );
}

#[test]
fn nested_group_clone_copies_children() {
    let registry = ScriptRegistry::new();
    let mut group = Element::group("menu");
    group
        .children_mut()
        .unwrap()
        .add(Element::text_button("play", "Play", "roboto"));
    let clone = group.deep_clone(&registry);
    assert_eq!(clone.children().unwrap().len(), 1);
    assert_ne!(
        group.children().unwrap().get_named("play").unwrap().handle(),
        clone.children().unwrap().get_named("play").unwrap().handle()
    );
}
