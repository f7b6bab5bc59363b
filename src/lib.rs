pub mod configuration;
pub mod constant;
pub mod document;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod startup;
pub mod style;
pub mod telemetry;
