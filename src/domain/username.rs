use crate::domain::InvalidReason;

#[derive(Debug)]
pub struct Username(String);

impl Username {
    /// Returns an instance of `Username` if the input satisfies our only
    /// constraint on usernames: it must not be blank.
    ///
    /// `.trim()` returns a view over the input without leading or trailing
    /// whitespace-like characters, so a string of spaces is blank too.
    pub fn parse(candidate: String) -> Result<Self, InvalidReason> {
        if candidate.trim().is_empty() {
            return Err(InvalidReason::UsernameIsBlank);
        }
        Ok(Self(candidate))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}
