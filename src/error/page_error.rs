use std::fmt::{Debug, Formatter};

#[derive(thiserror::Error)]
pub enum PageError {
    // DOCUMENT LOOKUP
    #[error("Element '{0}' is not in the document.")]
    ElementNotFound(String),

    #[error("Element '{0}' is still borrowed by the running handler.")]
    ElementBusy(String),

    // CONFIGURATION
    #[error("Failed to get current dir.")]
    GetCurrentDirError(#[source] std::io::Error),

    #[error("Failed to parse APP_ENVIRONMENT: {0}")]
    ParseEnvironmentVariableError(String),

    #[error("Failed to build config sources.")]
    BuildConfigSourcesError(#[source] config::ConfigError),

    #[error("Failed to deserialize config file.")]
    DeserializeConfigurationFileError(#[source] config::ConfigError),

    // TELEMETRY
    #[error("Failed to set logger.")]
    SetLoggerError(#[source] tracing_log::log::SetLoggerError),

    #[error("Failed to set subscriber.")]
    SetSubscriberError(#[source] tracing::dispatcher::SetGlobalDefaultError),

    // INTERACTIVE DRIVER
    #[error("Failed to read a line from standard input.")]
    ReadInputError(#[source] std::io::Error),
}

impl Debug for PageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        crate::error::error_chain_fmt(self, f)
    }
}
