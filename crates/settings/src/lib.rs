use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub use secrecy::{ExposeSecret, SecretString};
pub use url::Url;

/// Reads `configuration/base.json`, the environment specific file and then
/// `APP_*` variables, in that order.
pub fn get_configuration() -> Result<Configuration, ConfigError> {
    dotenvy::dotenv().ok();

    // this can be compile time because we are providing from the .cargo/config.toml
    let configuration_dir = PathBuf::from(concat!(env!("CARGO_WORKSPACE_DIR"), "/configuration"));

    // this can't be as it can be changed in runtime
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or("local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    // this would set APP_{Section}__{Field}, e.g. APP_ORDERING__CLOSED=true
    let settings = Config::builder()
        .add_source(File::from(configuration_dir.join("base.json")))
        .add_source(File::from(
            configuration_dir.join(format!("{}.json", environment.as_str())),
        ))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Configuration>()
}

pub type Port = u16;

#[derive(Deserialize, Debug, Clone)]
pub struct Configuration {
    pub application: ApplicationConfiguration,
    pub site: SiteConfiguration,
    pub ordering: OrderingConfiguration,
    pub store: StoreConfiguration,
    pub mobile: MobileConfiguration,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ApplicationConfiguration {
    pub port: Port,
    pub host: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct SiteConfiguration {
    base_url: String,
}

impl SiteConfiguration {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Public URL of the site, never ending with `/`.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

/// The switch gating whether new orders are accepted.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct OrderingConfiguration {
    pub closed: bool,
    pub closed_message: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct StoreConfiguration {
    pub base_url: Url,
    pub api_key: SecretString,
    pub timeout_ms: u64,
}

impl StoreConfiguration {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Packaging metadata of the native shell.
#[derive(Deserialize, Debug, Clone)]
pub struct MobileConfiguration {
    pub app_id: String,
    pub app_name: String,
    /// Exported web assets, served before the not-found page.
    pub web_dir: PathBuf,
    /// Where the native shell reaches the api.
    pub server_url: Url,
}

impl MobileConfiguration {
    pub fn user_agent(&self) -> String {
        format!("{} ({})", self.app_name, self.app_id)
    }
}

#[derive(Debug)]
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

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "production" => Ok(Self::Production),
            other => Err(format!(
                "{other} is not a supported environment. Use either `local` or `production`."
            )),
        }
    }
}
