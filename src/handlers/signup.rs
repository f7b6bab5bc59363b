use crate::constant::{
    INVALID_SIGNUP_ALERT_ID, PASSWORD_INPUT_ID, SIGNUP_FORM_ID, TOGGLE_PASSWORD_LINK_ID,
    USERNAME_INPUT_ID,
};
use crate::document::{Document, Event, EventKind, Page};
use crate::domain::ValidationReport;
use crate::error::PageError;
use crate::style;
use std::rc::Rc;

/// Validates the signup form on submission and toggles the password
/// field's display mode on demand.
#[derive(Debug)]
pub struct SignupForm {
    field_error_class: String,
    alert_visible_class: String,
}

impl SignupForm {
    pub fn new(field_error_class: String, alert_visible_class: String) -> Self {
        Self {
            field_error_class,
            alert_visible_class,
        }
    }

    /// One validation pass: evaluate every rule, mark the offending
    /// fields, rebuild the alert text and set the alert's visibility to
    /// match. The whole visual state is recomputed each pass, so no stale
    /// error indicator can survive a revalidation.
    #[tracing::instrument(name = "Validate signup form", skip(self, event, document))]
    pub fn validate(
        &self,
        event: &Event,
        document: &Document,
    ) -> Result<ValidationReport, PageError> {
        // The submission must never navigate away, whatever the outcome.
        style::cancel_event(event);

        let username = document.element(USERNAME_INPUT_ID)?.value().to_string();
        let password = document.element(PASSWORD_INPUT_ID)?.value().to_string();
        let report = ValidationReport::evaluate(&username, &password);

        {
            let mut field = document.element_mut(USERNAME_INPUT_ID)?;
            style::set_class(&mut field, &self.field_error_class, !report.username_is_valid());
        }
        {
            let mut field = document.element_mut(PASSWORD_INPUT_ID)?;
            style::set_class(&mut field, &self.field_error_class, !report.password_is_valid());
        }
        {
            let mut alert = document.element_mut(INVALID_SIGNUP_ALERT_ID)?;
            alert.set_text(report.message());
            style::set_class(&mut alert, &self.alert_visible_class, !report.is_valid());
        }

        if report.is_valid() {
            tracing::info!(username = %username, "Signup form is valid.");
        } else {
            tracing::info!(failing_rules = report.failures().len(), "Signup form is invalid.");
        }
        Ok(report)
    }

    /// Flip the password field between masked and plaintext display.
    /// Two invocations restore the original mode.
    #[tracing::instrument(name = "Toggle password visibility", skip(self, event, document))]
    pub fn toggle_password_visibility(
        &self,
        event: &Event,
        document: &Document,
    ) -> Result<(), PageError> {
        style::cancel_event(event);
        let mut field = document.element_mut(PASSWORD_INPUT_ID)?;
        let next = field.mode().toggled();
        field.set_mode(next);
        tracing::debug!(mode = next.as_str(), "Password display mode toggled.");
        Ok(())
    }

    /// Subscribe the validation handler to the form's submission and the
    /// visibility toggle to its dedicated link.
    pub fn wire(self, page: &mut Page) -> Result<(), PageError> {
        let form = Rc::new(self);

        let on_submit = Rc::clone(&form);
        page.listen(SIGNUP_FORM_ID, EventKind::Submit, move |event, document| {
            on_submit.validate(event, document).map(|_| ())
        })?;

        let on_toggle = form;
        page.listen(
            TOGGLE_PASSWORD_LINK_ID,
            EventKind::Click,
            move |event, document| on_toggle.toggle_password_visibility(event, document),
        )?;

        Ok(())
    }
}
