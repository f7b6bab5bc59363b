mod helpers;
mod menu;
mod signup;
