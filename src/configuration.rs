use std::path::Path;

use serde::Deserialize;
use serde_aux::field_attributes::deserialize_option_number_from_string;

use crate::{domain::TargetUrl, error::ProbeError, probe::KeepAliveClient};

/// The backend kept awake when nothing else is configured.
pub const DEFAULT_TARGET_URL: &str = "https://car-management-backend-day6.onrender.com";

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Grab the execution directory
    let base_path = std::env::current_dir().map_err(|e| {
        config::ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;

    // Detect the running environment
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;

    get_configuration_from(&base_path.join("configuration"), environment)
}

/// Layers defaults, `base.yml`, `<environment>.yml` and `APP_*` variables, in that order.
/// Both files are optional so the probe still runs from a bare checkout.
pub fn get_configuration_from(
    configuration_directory: &Path,
    environment: Environment,
) -> Result<Settings, config::ConfigError> {
    // Generate the name of the environment-specific config file.
    let environment_filename = format!("{}.yml", environment.as_str());

    let settings = config::Config::builder()
        .set_default("probe.target_url", DEFAULT_TARGET_URL)?
        .add_source(config::File::from(configuration_directory.join("base.yml")).required(false))
        .add_source(
            config::File::from(configuration_directory.join(environment_filename))
                .required(false),
        )
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    let settings = settings.try_deserialize::<Settings>();
    tracing::debug!("Settings values: {:?}", &settings);

    settings
}

#[derive(Clone, Debug, Deserialize)]
pub struct Settings {
    pub probe: ProbeSettings,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProbeSettings {
    pub target_url: String,
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    pub timeout_milliseconds: Option<u64>,
}

impl ProbeSettings {
    pub fn client(self) -> Result<KeepAliveClient, ProbeError> {
        let target = self.target().map_err(ProbeError::InvalidTarget)?;
        let timeout = self.timeout();
        KeepAliveClient::new(target, timeout)
    }

    pub fn target(&self) -> Result<TargetUrl, String> {
        TargetUrl::parse(self.target_url.clone())
    }

    /// `None` leaves the request without a deadline.
    pub fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_milliseconds
            .map(std::time::Duration::from_millis)
    }
}

/// The possible runtime environments for this application.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Environment {
    Local,
    Production,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{} is not a supported environment. Use either 'local' or 'production'",
                other
            )),
        }
    }
}
