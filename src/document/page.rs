use crate::document::{Document, Event, EventKind};
use crate::error::PageError;
use std::collections::HashMap;

type EventHandler = Box<dyn Fn(&Event, &Document) -> Result<(), PageError>>;

/// The document plus its listener registry.
///
/// Dispatch is synchronous and single-threaded: each handler runs to
/// completion before the next one fires, which is exactly the scheduling
/// model of the UI runtime this mirrors. Handlers are closures capturing
/// their component instance, so there is no global name lookup and no
/// `this`-rebinding to work around.
pub struct Page {
    document: Document,
    listeners: HashMap<(String, EventKind), Vec<EventHandler>>,
}

impl Page {
    pub fn new(document: Document) -> Self {
        Self {
            document,
            listeners: HashMap::new(),
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Subscribe a handler to an interaction on the element with the given
    /// id. Subscribing to an element that is not in the document is a
    /// wiring bug and is reported as such.
    pub fn listen<F>(&mut self, id: &str, kind: EventKind, handler: F) -> Result<(), PageError>
    where
        F: Fn(&Event, &Document) -> Result<(), PageError> + 'static,
    {
        if !self.document.contains(id) {
            return Err(PageError::ElementNotFound(id.to_string()));
        }
        self.listeners
            .entry((id.to_string(), kind))
            .or_default()
            .push(Box::new(handler));
        Ok(())
    }

    /// Fire an interaction at an element and run every subscribed handler
    /// in registration order. The event is handed back so the caller can
    /// check whether a handler suppressed the default action.
    pub fn dispatch(&self, id: &str, kind: EventKind) -> Result<Event, PageError> {
        if !self.document.contains(id) {
            return Err(PageError::ElementNotFound(id.to_string()));
        }
        let event = Event::new(kind);
        if let Some(handlers) = self.listeners.get(&(id.to_string(), kind)) {
            for handler in handlers {
                handler(&event, &self.document)?;
            }
        }
        Ok(event)
    }
}
