use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment as ConfigEnvironment, File};
use serde_aux::field_attributes::deserialize_number_from_string;
use tracing::{debug, info};

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    #[serde(default)]
    pub document: DocumentSettings,
    #[serde(default)]
    pub root_value: RootValueSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
    pub host: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

/// Knobs for the document shell's head and body slots.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct DocumentSettings {
    #[serde(default = "default_lang")]
    pub lang: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stylesheets: Vec<String>,
    #[serde(default)]
    pub scripts: Vec<String>,
    #[serde(default = "default_true")]
    pub scroll_restoration: bool,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            lang: default_lang(),
            title: None,
            description: None,
            stylesheets: vec!["/static/tailwind.css".to_string()],
            scripts: Vec::new(),
            scroll_restoration: true,
        }
    }
}

#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct RootValueSettings {
    /// JSON file holding the distributed value. `null` is used when unset.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

fn default_lang() -> String {
    "en".to_string()
}

fn default_true() -> bool {
    true
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| ConfigError::Message(format!("Failed to determine current directory: {e}")))?
        .join("configuration");

    let environment: AppEnvironment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    get_configuration_from(&base_path, environment)
}

/// Layers `base.yaml`, then `{environment}.yaml`, then `APP_*` variables.
pub fn get_configuration_from(
    base_path: &Path,
    environment: AppEnvironment,
) -> Result<Settings, ConfigError> {
    let environment_filename = format!("{}.yaml", environment.as_str());
    info!(
        "Loading configuration for {} from {}",
        environment.as_str(),
        base_path.display()
    );

    let settings = Config::builder()
        .add_source(File::from(base_path.join("base.yaml")))
        .add_source(File::from(base_path.join(&environment_filename)).required(false))
        .add_source(
            ConfigEnvironment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>()?;

    debug!("Application: {}:{}", settings.application.host, settings.application.port);
    debug!("Document lang: {}", settings.document.lang);
    match &settings.root_value.file {
        Some(file) => debug!("Root value file: {}", file.display()),
        None => debug!("Root value file: none, distributing null"),
    }

    Ok(settings)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Local,
    Production,
}

impl AppEnvironment {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppEnvironment::Local => "local",
            AppEnvironment::Production => "production",
        }
    }
}

impl TryFrom<String> for AppEnvironment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                other
            )),
        }
    }
}
