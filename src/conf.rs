use config::{Config, ConfigError, Environment};
use lazy_static::lazy_static;
use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct Settings {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_listen_port")]
    pub listen_port: String,
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
    // whether the extracted candidate name is included in responses
    #[serde(default)]
    pub include_name: bool,
}

fn default_service_name() -> String {
    "resumatch".into()
}

fn default_listen_port() -> String {
    "8000".into()
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let conf = Config::builder()
            .add_source(Environment::default())
            .build()?;
        conf.try_deserialize()
    }
}

lazy_static! {
    pub static ref settings: Settings = Settings::new().expect("improperly configured");
}
