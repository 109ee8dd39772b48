use crate::behavior::ScriptRegistry;
use crate::elements::Element;
use std::fmt;

/// Identity of an element within its container: a declared name plus the
/// integer that distinguishes same-named siblings. An element with no owner
/// always reports disambiguator 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ElementId {
    pub name: String,
    pub disambiguator: u32,
}

impl ElementId {
    pub fn unowned(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            disambiguator: 0,
        }
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.name, self.disambiguator)
    }
}

/// Ordered collection of elements, owned by value. Insertion order is draw
/// and update order. Moving an element in or out of a container *is* the
/// re-parent operation, so membership can never be split across two owners.
#[derive(Default)]
pub struct ElementContainer {
    elements: Vec<Element>,
}

impl ElementContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends, assigning the lowest unused disambiguator for the element's
    /// name. Name collisions are resolved this way, never rejected.
    pub fn add(&mut self, element: Element) -> ElementId {
        self.insert(self.elements.len(), element)
    }

    pub fn insert(&mut self, index: usize, mut element: Element) -> ElementId {
        element.id.disambiguator = self.lowest_free_disambiguator(&element.id.name);
        let id = element.id.clone();
        self.elements.insert(index.min(self.elements.len()), element);
        id
    }

    fn lowest_free_disambiguator(&self, name: &str) -> u32 {
        let mut candidate = 0;
        loop {
            let taken = self
                .elements
                .iter()
                .any(|e| e.id.name == name && e.id.disambiguator == candidate);
            if !taken {
                return candidate;
            }
            candidate += 1;
        }
    }

    /// Detaches without disposing. The detached element reports
    /// disambiguator 0 again.
    pub fn remove(&mut self, id: &ElementId) -> Option<Element> {
        let index = self.elements.iter().position(|e| &e.id == id)?;
        Some(self.remove_at(index))
    }

    pub fn remove_at(&mut self, index: usize) -> Element {
        let mut element = self.elements.remove(index);
        element.id.disambiguator = 0;
        element
    }

    /// Removes everything, highest index first.
    pub fn clear(&mut self) {
        while !self.elements.is_empty() {
            self.remove_at(self.elements.len() - 1);
        }
    }

    pub fn get(&self, id: &ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| &e.id == id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| &e.id == id)
    }

    /// First element with the given declared name, any disambiguator.
    pub fn get_named(&self, name: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id.name == name)
    }

    pub fn get_named_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.elements.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.elements.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Deep-clones every element into `dest`, re-resolving scripts against
    /// each clone. The clones are fully independent of the source.
    pub fn clone_elements_into(&self, dest: &mut ElementContainer, registry: &ScriptRegistry) {
        for element in &self.elements {
            dest.add(element.deep_clone(registry));
        }
    }

    /// Depth-first disposal: every element releases its own state and its
    /// script instances, then the container empties.
    pub fn dispose(&mut self) {
        for element in &mut self.elements {
            element.dispose();
        }
        self.clear();
    }
}
