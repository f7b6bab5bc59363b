use crate::helpers::spawn_page;
use signup_ui::constant::{FULL_MENU_ID, HIDE_MENU_LINK_ID, SHOW_MENU_LINK_ID};
use signup_ui::document::EventKind;

#[test]
fn clicking_the_show_link_makes_the_menu_visible() {
    let app = spawn_page();

    let event = app.page().dispatch(SHOW_MENU_LINK_ID, EventKind::Click).unwrap();

    assert!(event.default_prevented());
    assert!(app
        .page()
        .document()
        .element(FULL_MENU_ID)
        .unwrap()
        .has_class("full-menu--is-visible"));
}

#[test]
fn clicking_the_hide_link_hides_the_menu_again() {
    let app = spawn_page();
    let page = app.page();

    page.dispatch(SHOW_MENU_LINK_ID, EventKind::Click).unwrap();
    let event = page.dispatch(HIDE_MENU_LINK_ID, EventKind::Click).unwrap();

    assert!(event.default_prevented());
    assert!(!page
        .document()
        .element(FULL_MENU_ID)
        .unwrap()
        .has_class("full-menu--is-visible"));
}

#[test]
fn showing_the_menu_twice_keeps_a_single_visibility_class() {
    let app = spawn_page();
    let page = app.page();

    page.dispatch(SHOW_MENU_LINK_ID, EventKind::Click).unwrap();
    page.dispatch(SHOW_MENU_LINK_ID, EventKind::Click).unwrap();

    assert_eq!(
        page.document().element(FULL_MENU_ID).unwrap().class_attribute(),
        "full-menu--is-visible"
    );
}

#[test]
fn hiding_an_already_hidden_menu_is_harmless() {
    let app = spawn_page();
    let page = app.page();

    page.dispatch(HIDE_MENU_LINK_ID, EventKind::Click).unwrap();

    assert!(!page
        .document()
        .element(FULL_MENU_ID)
        .unwrap()
        .has_class("full-menu--is-visible"));
}
