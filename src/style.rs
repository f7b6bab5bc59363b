//! Class-attribute manipulation and event-default suppression.
//!
//! The class attribute is treated as a set of whitespace-separated tokens:
//! adding is idempotent and removing matches whole tokens only, so repeated
//! show/submit cycles cannot grow the attribute and a class that happens to
//! contain another as a substring cannot be corrupted.

use crate::document::{Element, Event};

/// Add `class` to the element's class set if it is not already present.
pub fn add_class(element: &mut Element, class: &str) {
    if element.has_class(class) {
        return;
    }
    let current = element.class_attribute();
    let updated = if current.is_empty() {
        class.to_string()
    } else {
        format!("{} {}", current, class)
    };
    element.set_class_attribute(updated);
}

/// Remove every token equal to `class` from the element's class set.
pub fn remove_class(element: &mut Element, class: &str) {
    let remaining = element
        .class_attribute()
        .split_whitespace()
        .filter(|token| *token != class)
        .collect::<Vec<&str>>()
        .join(" ");
    element.set_class_attribute(remaining);
}

/// Make `class` membership match `present`.
pub fn set_class(element: &mut Element, class: &str, present: bool) {
    if present {
        add_class(element, class);
    } else {
        remove_class(element, class);
    }
}

/// Suppress the default action of the triggering interaction.
pub fn cancel_event(event: &Event) {
    event.prevent_default();
}
