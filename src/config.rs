//! Platform configuration.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::client::{HttpConnector, NanoleafClient};
use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

fn default_port() -> u16 {
    NanoleafClient::PORT
}

/// Configuration for one Nanoleaf light, as read from the host.
///
/// # Examples
///
/// ```
/// use nanoleaf_lights_rs::PlatformConfig;
/// use serde_json::json;
///
/// let config = PlatformConfig::from_value(&json!({
///     "addr": "192.168.1.50",
///     "token": "xYz123",
/// }))
/// .unwrap();
/// assert_eq!(config.title, None);
/// assert!(!config.brightness_only);
/// assert_eq!(config.port, 16021);
/// ```
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlatformConfig {
    /// Controller IP address or hostname.
    pub addr: String,

    /// Auth token obtained by pairing with the controller.
    pub token: String,

    /// Entity name; falls back to the name the controller reports.
    #[serde(default)]
    pub title: Option<String>,

    /// Only expose brightness, never query or report color.
    #[serde(default)]
    pub brightness_only: bool,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl PlatformConfig {
    pub fn new(addr: &str, token: &str) -> Self {
        PlatformConfig {
            addr: addr.to_string(),
            token: token.to_string(),
            title: None,
            brightness_only: false,
            port: default_port(),
        }
    }

    pub fn from_value(value: &Value) -> Result<Self> {
        let config = Self::deserialize(value).map_err(|e| Error::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(Error::JsonLoad)?;
        Self::from_value(&value)
    }

    pub fn validate(&self) -> Result<()> {
        if self.addr.trim().is_empty() {
            return Err(Error::InvalidConfig("addr must not be empty".to_string()));
        }
        if self.token.trim().is_empty() {
            return Err(Error::InvalidConfig("token must not be empty".to_string()));
        }
        if self.port == 0 {
            return Err(Error::InvalidConfig("port must not be 0".to_string()));
        }
        Ok(())
    }

    pub fn connector(&self) -> HttpConnector {
        HttpConnector::new(&self.addr, self.port, &self.token)
    }
}
