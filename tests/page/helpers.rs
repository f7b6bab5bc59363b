use once_cell::sync::Lazy;
use signup_ui::configuration::{ApplicationSettings, ClassSettings, Settings};
use signup_ui::constant::{PASSWORD_INPUT_ID, SIGNUP_FORM_ID, USERNAME_INPUT_ID};
use signup_ui::document::{Event, EventKind};
use signup_ui::startup::Application;
use signup_ui::telemetry;

// Ensure that the `tracing` stack is only initialised once using `once_cell`
static TRACING: Lazy<()> = Lazy::new(|| {
    let subscriber = telemetry::get_subscriber("test".into(), "info".into(), std::io::sink);
    telemetry::init_subscriber(subscriber).expect("Failed to initialise the subscriber");
});

/// Build a fully wired page. We are running tests, so it is not worth it
/// to propagate errors: if we fail to perform the required setup we can
/// just panic and crash all the things.
pub fn spawn_page() -> Application {
    Lazy::force(&TRACING);
    Application::build(test_settings()).expect("Failed to build the page")
}

pub fn test_settings() -> Settings {
    Settings {
        application: ApplicationSettings {
            name: "test".into(),
            default_log_filter: "info".into(),
        },
        classes: ClassSettings {
            menu_visible: "full-menu--is-visible".into(),
            alert_visible: "alert--is-visible".into(),
            field_error: "signup-form__input--has-error".into(),
        },
    }
}

/// Type both fields and submit the form, handing back the submit event so
/// tests can check what happened to its default action.
pub fn submit_signup(app: &Application, username: &str, password: &str) -> Event {
    let document = app.page().document();
    document
        .element_mut(USERNAME_INPUT_ID)
        .unwrap()
        .set_value(username);
    document
        .element_mut(PASSWORD_INPUT_ID)
        .unwrap()
        .set_value(password);
    app.page()
        .dispatch(SIGNUP_FORM_ID, EventKind::Submit)
        .expect("Failed to dispatch the submit event")
}
