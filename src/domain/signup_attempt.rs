use crate::constant::MESSAGE_SEPARATOR;
use crate::domain::{meets_format_rule, meets_length_rule, Password, Username};

/// A signup whose fields passed every rule.
#[derive(Debug)]
pub struct SignupAttempt {
    username: Username,
    password: Password,
}

impl SignupAttempt {
    pub fn parse(username: String, password: String) -> Result<Self, Vec<InvalidReason>> {
        let report = ValidationReport::evaluate(&username, &password);
        if !report.is_valid() {
            return Err(report.failures());
        }
        // The report already vouched for both fields; parsing again only
        // moves them into their newtypes.
        let username = Username::parse(username).map_err(|reason| vec![reason])?;
        let password = Password::parse(password)?;
        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        self.username.as_ref()
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidReason {
    UsernameIsBlank,
    PasswordTooShort,
    PasswordMissingRequiredCharacters,
}

impl InvalidReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            InvalidReason::UsernameIsBlank => "Username cannot be blank.",
            InvalidReason::PasswordTooShort => "Password must be 6 or more characters.",
            InvalidReason::PasswordMissingRequiredCharacters => {
                "Password must contain one capital letter and one non-alphanumeric character."
            }
        }
    }
}

/// The outcome of one validation pass over the signup fields.
///
/// Every rule is evaluated, none short-circuits, so a submission that
/// breaks several rules surfaces every applicable message at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    username_present: bool,
    password_long_enough: bool,
    password_well_formed: bool,
}

impl ValidationReport {
    pub fn evaluate(username: &str, password: &str) -> Self {
        Self {
            username_present: !username.trim().is_empty(),
            password_long_enough: meets_length_rule(password),
            password_well_formed: meets_format_rule(password),
        }
    }

    pub fn username_is_valid(&self) -> bool {
        self.username_present
    }

    /// Both password rules must hold for the field to be valid.
    pub fn password_is_valid(&self) -> bool {
        self.password_long_enough && self.password_well_formed
    }

    pub fn is_valid(&self) -> bool {
        self.username_is_valid() && self.password_is_valid()
    }

    /// The failing rules, always in the same order: username, password
    /// length, password format.
    pub fn failures(&self) -> Vec<InvalidReason> {
        let mut failures = Vec::new();
        if !self.username_present {
            failures.push(InvalidReason::UsernameIsBlank);
        }
        if !self.password_long_enough {
            failures.push(InvalidReason::PasswordTooShort);
        }
        if !self.password_well_formed {
            failures.push(InvalidReason::PasswordMissingRequiredCharacters);
        }
        failures
    }

    /// The aggregated alert text: one line per failing rule.
    pub fn message(&self) -> String {
        self.failures()
            .iter()
            .map(InvalidReason::as_str)
            .collect::<Vec<&str>>()
            .join(MESSAGE_SEPARATOR)
    }
}
