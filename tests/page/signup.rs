use crate::helpers::{spawn_page, submit_signup};
use signup_ui::constant::{
    INVALID_SIGNUP_ALERT_ID, PASSWORD_INPUT_ID, TOGGLE_PASSWORD_LINK_ID, USERNAME_INPUT_ID,
};
use signup_ui::document::{EventKind, InputMode};

#[test]
fn a_blank_form_shows_every_error_message() {
    // Arrange
    let app = spawn_page();

    // Act
    submit_signup(&app, "", "abc");

    // Assert
    let document = app.page().document();
    let alert = document.element(INVALID_SIGNUP_ALERT_ID).unwrap();
    assert!(alert.has_class("alert--is-visible"));
    assert_eq!(
        alert.text(),
        "Username cannot be blank.\n\
         Password must be 6 or more characters.\n\
         Password must contain one capital letter and one non-alphanumeric character."
    );
    assert!(document
        .element(USERNAME_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
    assert!(document
        .element(PASSWORD_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
}

#[test]
fn a_valid_form_keeps_the_alert_hidden_and_the_fields_unmarked() {
    let app = spawn_page();

    submit_signup(&app, "joe", "Secret1!");

    let document = app.page().document();
    let alert = document.element(INVALID_SIGNUP_ALERT_ID).unwrap();
    assert!(!alert.has_class("alert--is-visible"));
    assert_eq!(alert.text(), "");
    assert!(!document
        .element(USERNAME_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
    assert!(!document
        .element(PASSWORD_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
}

#[test]
fn a_password_without_a_capital_letter_reports_only_the_format_rule() {
    let app = spawn_page();

    submit_signup(&app, "joe", "secret!");

    let document = app.page().document();
    let alert = document.element(INVALID_SIGNUP_ALERT_ID).unwrap();
    assert!(alert.has_class("alert--is-visible"));
    assert_eq!(
        alert.text(),
        "Password must contain one capital letter and one non-alphanumeric character."
    );
    // Only the password field is at fault.
    assert!(!document
        .element(USERNAME_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
    assert!(document
        .element(PASSWORD_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
}

#[test]
fn revalidation_clears_stale_error_state() {
    let app = spawn_page();

    // A failing pass first, then a clean one.
    submit_signup(&app, "", "abc");
    submit_signup(&app, "joe", "Secret1!");

    let document = app.page().document();
    let alert = document.element(INVALID_SIGNUP_ALERT_ID).unwrap();
    assert!(!alert.has_class("alert--is-visible"));
    assert_eq!(alert.text(), "");
    assert!(!document
        .element(USERNAME_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
    assert!(!document
        .element(PASSWORD_INPUT_ID)
        .unwrap()
        .has_class("signup-form__input--has-error"));
}

#[test]
fn repeated_failing_submissions_do_not_grow_the_class_attribute() {
    let app = spawn_page();

    submit_signup(&app, "", "abc");
    submit_signup(&app, "", "abc");
    submit_signup(&app, "", "abc");

    let document = app.page().document();
    assert_eq!(
        document.element(USERNAME_INPUT_ID).unwrap().class_attribute(),
        "signup-form__input--has-error"
    );
    assert_eq!(
        document
            .element(INVALID_SIGNUP_ALERT_ID)
            .unwrap()
            .class_attribute(),
        "alert--is-visible"
    );
}

#[test]
fn submitting_never_navigates_away() {
    let app = spawn_page();

    let failing = submit_signup(&app, "", "abc");
    let passing = submit_signup(&app, "joe", "Secret1!");

    assert!(failing.default_prevented());
    assert!(passing.default_prevented());
}

#[test]
fn toggling_the_password_reveals_it_and_toggling_again_masks_it() {
    let app = spawn_page();
    let page = app.page();

    let event = page
        .dispatch(TOGGLE_PASSWORD_LINK_ID, EventKind::Click)
        .unwrap();
    assert!(event.default_prevented());
    assert_eq!(
        page.document().element(PASSWORD_INPUT_ID).unwrap().mode(),
        InputMode::Plaintext
    );

    page.dispatch(TOGGLE_PASSWORD_LINK_ID, EventKind::Click)
        .unwrap();
    assert_eq!(
        page.document().element(PASSWORD_INPUT_ID).unwrap().mode(),
        InputMode::Masked
    );
}
