use crate::constant::{LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT};
use crate::error::PageError;
use config::{Config, File};
use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub classes: ClassSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApplicationSettings {
    pub name: String,
    /// Fallback filter directive when RUST_LOG is not set.
    pub default_log_filter: String,
}

/// Class names the handlers toggle to drive visual state.
///
/// The element identifiers are a stable contract with the markup and live in
/// `constant`; the class names are only shared with the stylesheet, so they
/// come from configuration instead.
#[derive(Deserialize, Clone)]
pub struct ClassSettings {
    pub menu_visible: String,
    pub alert_visible: String,
    pub field_error: String,
}

pub fn get_configuration() -> Result<Settings, PageError> {
    let base_path = std::env::current_dir().map_err(|e| {
        tracing::error!("Failed to get current dir.");
        PageError::GetCurrentDirError(e)
    })?;
    let config_dir = base_path.join("configuration");
    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| LOCAL_ENVIRONMENT.into())
        .try_into()
        .map_err(|e| {
            tracing::error!("Failed to parse APP_ENVIRONMENT: {:?}", e);
            PageError::ParseEnvironmentVariableError(e)
        })?;
    let environment_filename = format!("{}.yaml", environment.as_str());
    // Initialise our configuration reader
    let settings = Config::builder()
        .add_source(File::from(config_dir.join("base.yaml")))
        .add_source(File::from(config_dir.join(environment_filename)))
        .build()
        .map_err(|e| {
            tracing::error!("Failed to build config sources.");
            PageError::BuildConfigSourcesError(e)
        })?;
    // Try to convert the configuration values it read into our Settings type
    settings.try_deserialize().map_err(|e| {
        tracing::error!("Failed to deserialize config file.");
        PageError::DeserializeConfigurationFileError(e)
    })
}

/// The possible runtime environment for our application.
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => LOCAL_ENVIRONMENT,
            Environment::Production => PRODUCTION_ENVIRONMENT,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            LOCAL_ENVIRONMENT => Ok(Environment::Local),
            PRODUCTION_ENVIRONMENT => Ok(Environment::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `{}` or `{}`.",
                other, LOCAL_ENVIRONMENT, PRODUCTION_ENVIRONMENT
            )),
        }
    }
}
