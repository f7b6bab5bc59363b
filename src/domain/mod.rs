mod password;
mod signup_attempt;
mod username;

pub use password::{meets_format_rule, meets_length_rule, Password};
pub use signup_attempt::{InvalidReason, SignupAttempt, ValidationReport};
pub use username::Username;
