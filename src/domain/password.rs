use crate::domain::InvalidReason;
use secrecy::{ExposeSecret, Secret};
use unicode_segmentation::UnicodeSegmentation;

/// A password that passed both the length rule and the format rule.
///
/// The inner value is wrapped in `Secret` so it never lands in logs or
/// `Debug` output by accident.
#[derive(Debug)]
pub struct Password(Secret<String>);

impl Password {
    /// The two rules are evaluated independently so a candidate that fails
    /// both is reported for both, not just the first.
    pub fn parse(candidate: String) -> Result<Self, Vec<InvalidReason>> {
        let mut reasons = Vec::new();
        if !meets_length_rule(&candidate) {
            reasons.push(InvalidReason::PasswordTooShort);
        }
        if !meets_format_rule(&candidate) {
            reasons.push(InvalidReason::PasswordMissingRequiredCharacters);
        }
        if reasons.is_empty() {
            Ok(Self(Secret::new(candidate)))
        } else {
            Err(reasons)
        }
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Passwords must be 6 or more characters.
///
/// A grapheme is a "user-perceived" character, which is what a person
/// counting the characters in their password would count.
pub fn meets_length_rule(candidate: &str) -> bool {
    candidate.graphemes(true).count() >= 6
}

/// Passwords must contain one capital letter and one character that is
/// neither alphanumeric, an underscore nor whitespace.
///
/// The two-character floor is all this rule itself demands; the overall
/// length requirement is handled independently for more flexibility.
pub fn meets_format_rule(candidate: &str) -> bool {
    let has_uppercase = candidate.chars().any(|c| c.is_ascii_uppercase());
    let has_special = candidate
        .chars()
        .any(|c| !c.is_ascii_alphanumeric() && c != '_' && !c.is_whitespace());
    has_uppercase && has_special && candidate.graphemes(true).count() >= 2
}
