use std::cell::Cell;

/// The two interactions this page subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    Submit,
}

/// A single interaction in flight.
///
/// Handlers receive a shared reference, so the default-suppression flag
/// lives in a `Cell`: any handler may cancel the default action, and the
/// dispatcher's caller can observe whether one did. This replaces the
/// legacy `returnValue` dance with one explicit flag.
#[derive(Debug)]
pub struct Event {
    kind: EventKind,
    default_prevented: Cell<bool>,
}

impl Event {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            default_prevented: Cell::new(false),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }

    /// Suppress the default action of the interaction, e.g. the page
    /// navigation a form submission would otherwise cause.
    pub fn prevent_default(&self) {
        self.default_prevented.set(true);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.get()
    }
}
