use crate::document::Element;
use crate::error::PageError;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;

/// The element tree, reduced to what the handlers consume: lookup by
/// identifier. Elements sit behind `RefCell`s so a handler can mutate one
/// through the shared document reference it is given.
#[derive(Debug, Default)]
pub struct Document {
    elements: HashMap<String, RefCell<Element>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an element under its identifier, replacing any previous
    /// element with the same id.
    pub fn insert(&mut self, element: Element) {
        self.elements
            .insert(element.id().to_string(), RefCell::new(element));
    }

    pub fn contains(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    pub fn element(&self, id: &str) -> Result<Ref<'_, Element>, PageError> {
        self.elements
            .get(id)
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))?
            .try_borrow()
            .map_err(|_| PageError::ElementBusy(id.to_string()))
    }

    pub fn element_mut(&self, id: &str) -> Result<RefMut<'_, Element>, PageError> {
        self.elements
            .get(id)
            .ok_or_else(|| PageError::ElementNotFound(id.to_string()))?
            .try_borrow_mut()
            .map_err(|_| PageError::ElementBusy(id.to_string()))
    }
}
