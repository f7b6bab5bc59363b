/// environment variable
pub const LOCAL_ENVIRONMENT: &str = "local";
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// element identifiers, the stable contract between the page markup and us
pub const SIGNUP_FORM_ID: &str = "signup-form";
pub const INVALID_SIGNUP_ALERT_ID: &str = "invalid-signup-alert";
pub const USERNAME_INPUT_ID: &str = "username";
pub const PASSWORD_INPUT_ID: &str = "password";
pub const TOGGLE_PASSWORD_LINK_ID: &str = "toggle-password-link";
pub const FULL_MENU_ID: &str = "full-menu";
pub const SHOW_MENU_LINK_ID: &str = "show-menu-link";
pub const HIDE_MENU_LINK_ID: &str = "hide-menu-link";

/// error messages are joined with a line break before they reach the alert
pub const MESSAGE_SEPARATOR: &str = "\n";
