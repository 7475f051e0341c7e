use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};

/// Prefix for environment overrides, e.g. `TODO_MONGODB_URL`.
pub const ENV_PREFIX: &str = "TODO_";

pub const DEFAULT_COLLECTION: &str = "todo";

/// Runtime configuration. Defaults point at a local MongoDB on its
/// conventional port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mongodb_url: String,
    pub database: String,
    pub collection: String,
    pub loglevel: String,
    /// Only applied when set; otherwise the driver default stands.
    pub server_selection_timeout_ms: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_url: "mongodb://localhost:27017".to_string(),
            database: "test".to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            loglevel: "info".to_string(),
            server_selection_timeout_ms: None,
        }
    }
}

impl Config {
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }

    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }
}
