use crate::constant::{FULL_MENU_ID, HIDE_MENU_LINK_ID, SHOW_MENU_LINK_ID};
use crate::document::{Document, Event, EventKind, Page};
use crate::error::PageError;
use crate::style;
use std::rc::Rc;

/// Shows and hides the full-page navigation panel by toggling a single
/// visibility class. The two handlers share nothing beyond that class.
#[derive(Debug)]
pub struct MenuToggle {
    visible_class: String,
}

impl MenuToggle {
    pub fn new(visible_class: String) -> Self {
        Self { visible_class }
    }

    #[tracing::instrument(name = "Show menu", skip(self, event, document))]
    pub fn show(&self, event: &Event, document: &Document) -> Result<(), PageError> {
        style::cancel_event(event);
        let mut panel = document.element_mut(FULL_MENU_ID)?;
        style::add_class(&mut panel, &self.visible_class);
        tracing::debug!("Menu shown.");
        Ok(())
    }

    #[tracing::instrument(name = "Hide menu", skip(self, event, document))]
    pub fn hide(&self, event: &Event, document: &Document) -> Result<(), PageError> {
        style::cancel_event(event);
        let mut panel = document.element_mut(FULL_MENU_ID)?;
        style::remove_class(&mut panel, &self.visible_class);
        tracing::debug!("Menu hidden.");
        Ok(())
    }

    /// Subscribe the show handler to the show link and the hide handler to
    /// the hide link. If this were purely mobile, touch events would be
    /// preferable to clicks; the model only carries clicks.
    pub fn wire(self, page: &mut Page) -> Result<(), PageError> {
        let toggle = Rc::new(self);

        let on_show = Rc::clone(&toggle);
        page.listen(SHOW_MENU_LINK_ID, EventKind::Click, move |event, document| {
            on_show.show(event, document)
        })?;

        let on_hide = toggle;
        page.listen(HIDE_MENU_LINK_ID, EventKind::Click, move |event, document| {
            on_hide.hide(event, document)
        })?;

        Ok(())
    }
}
