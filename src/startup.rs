use crate::configuration::{ClassSettings, Settings};
use crate::constant::{
    FULL_MENU_ID, HIDE_MENU_LINK_ID, INVALID_SIGNUP_ALERT_ID, PASSWORD_INPUT_ID, SHOW_MENU_LINK_ID,
    SIGNUP_FORM_ID, TOGGLE_PASSWORD_LINK_ID, USERNAME_INPUT_ID,
};
use crate::document::{Document, Element, EventKind, Page};
use crate::domain::SignupAttempt;
use crate::error::PageError;
use crate::handlers::{MenuToggle, SignupForm};
use std::io::BufRead;

/// The fully wired page: document built, components constructed from
/// configuration, handlers subscribed on load.
pub struct Application {
    page: Page,
    classes: ClassSettings,
}

impl Application {
    pub fn build(config: Settings) -> Result<Self, PageError> {
        let mut document = Document::new();
        document.insert(Element::new(SIGNUP_FORM_ID));
        document.insert(Element::new(INVALID_SIGNUP_ALERT_ID));
        document.insert(Element::new(USERNAME_INPUT_ID));
        // The password input starts out masked.
        document.insert(Element::masked(PASSWORD_INPUT_ID));
        document.insert(Element::new(TOGGLE_PASSWORD_LINK_ID));
        document.insert(Element::new(FULL_MENU_ID));
        document.insert(Element::new(SHOW_MENU_LINK_ID));
        document.insert(Element::new(HIDE_MENU_LINK_ID));

        let mut page = Page::new(document);
        MenuToggle::new(config.classes.menu_visible.clone()).wire(&mut page)?;
        SignupForm::new(
            config.classes.field_error.clone(),
            config.classes.alert_visible.clone(),
        )
        .wire(&mut page)?;

        Ok(Self {
            page,
            classes: config.classes,
        })
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    /// A line-oriented driver standing in for the browser: it feeds
    /// interactions into the page until stdin closes or `quit` is typed.
    pub fn run_until_stopped(self) -> Result<(), PageError> {
        print_help();
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let line = line.map_err(PageError::ReadInputError)?;
            if !self.handle_command(line.trim())? {
                break;
            }
        }
        Ok(())
    }

    /// Returns `false` when the driver should stop.
    fn handle_command(&self, line: &str) -> Result<bool, PageError> {
        let mut parts = line.split_whitespace();
        match parts.next() {
            None => {}
            Some("signup") => {
                let username = parts.next().unwrap_or("").to_string();
                let password = parts.next().unwrap_or("").to_string();
                self.signup(username, password)?;
            }
            Some("toggle-password") => {
                self.page
                    .dispatch(TOGGLE_PASSWORD_LINK_ID, EventKind::Click)?;
                let field = self.page.document().element(PASSWORD_INPUT_ID)?;
                println!("The password is now displayed {}.", field.mode().as_str());
            }
            Some("show-menu") => {
                self.page.dispatch(SHOW_MENU_LINK_ID, EventKind::Click)?;
                println!("The menu is visible.");
            }
            Some("hide-menu") => {
                self.page.dispatch(HIDE_MENU_LINK_ID, EventKind::Click)?;
                println!("The menu is hidden.");
            }
            Some("state") => self.print_state()?,
            Some("help") => print_help(),
            Some("quit") | Some("exit") => return Ok(false),
            Some(other) => println!("Unknown command '{}'. Type `help` for the list.", other),
        }
        Ok(true)
    }

    fn signup(&self, username: String, password: String) -> Result<(), PageError> {
        let document = self.page.document();
        document
            .element_mut(USERNAME_INPUT_ID)?
            .set_value(username.clone());
        document
            .element_mut(PASSWORD_INPUT_ID)?
            .set_value(password.clone());

        self.page.dispatch(SIGNUP_FORM_ID, EventKind::Submit)?;

        let alert = document.element(INVALID_SIGNUP_ALERT_ID)?;
        if alert.has_class(&self.classes.alert_visible) {
            println!("Signup rejected:");
            println!("{}", alert.text());
        } else {
            drop(alert);
            // The page accepted the form; hand a parsed attempt downstream.
            if let Ok(attempt) = SignupAttempt::parse(username, password) {
                println!("Signed up as '{}'.", attempt.username());
            }
        }
        Ok(())
    }

    fn print_state(&self) -> Result<(), PageError> {
        let document = self.page.document();
        let username = document.element(USERNAME_INPUT_ID)?;
        println!(
            "username: '{}' [{}]",
            username.value(),
            username.class_attribute()
        );
        let password = document.element(PASSWORD_INPUT_ID)?;
        println!(
            "password: {} [{}]",
            password.mode().as_str(),
            password.class_attribute()
        );
        let alert = document.element(INVALID_SIGNUP_ALERT_ID)?;
        println!(
            "alert: {} '{}'",
            if alert.has_class(&self.classes.alert_visible) {
                "shown"
            } else {
                "hidden"
            },
            alert.text()
        );
        let menu = document.element(FULL_MENU_ID)?;
        println!(
            "menu: {}",
            if menu.has_class(&self.classes.menu_visible) {
                "visible"
            } else {
                "hidden"
            }
        );
        Ok(())
    }
}

fn print_help() {
    println!("Commands:");
    println!("  signup <username> <password>   submit the signup form");
    println!("  toggle-password                flip masked/plaintext display");
    println!("  show-menu | hide-menu          toggle the navigation panel");
    println!("  state                          print the page state");
    println!("  quit                           leave");
}
