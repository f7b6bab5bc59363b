mod menu;
mod signup;

pub use menu::MenuToggle;
pub use signup::SignupForm;
