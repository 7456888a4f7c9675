use figment::{
    providers::{Env, Serialized},
    Figment,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Listen address (e.g. "127.0.0.1:3000")
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Serve on a unix socket instead of TCP when set
    pub socket: Option<String>,
}

fn default_listen() -> String {
    "127.0.0.1:3000".to_string()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Supports the following env vars:
    /// - TRACE_LISTEN
    /// - TRACE_SOCKET
    pub fn load() -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Serialized::defaults(ConfigDefaults::default()))
            .merge(Env::prefixed("TRACE_"))
            .extract()
    }
}

/// Helper struct for default values in figment
#[derive(Debug, Serialize)]
struct ConfigDefaults {
    listen: String,
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self {
            listen: default_listen(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::load().unwrap();
        assert_eq!(config.listen, "127.0.0.1:3000");
        assert!(config.socket.is_none());
    }
}
