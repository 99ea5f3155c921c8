use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::utils::error::{FolioError, ResultExt};

pub const DEFAULT_RELAY_URL: &str = "https://api.emailjs.com";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub owner: OwnerIdentity,

    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// EmailJS account settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RelayConfig {
    pub api_url: String,
    pub public_key: String,
    pub service_id: String,
    pub template_id: String,
    pub auto_reply_template_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_seconds: Option<u64>,
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_RELAY_URL.to_string(),
            public_key: "YOUR_PUBLIC_KEY".to_string(),
            service_id: "YOUR_SERVICE_ID".to_string(),
            template_id: "YOUR_TEMPLATE_ID".to_string(),
            auto_reply_template_id: "YOUR_AUTO_REPLY_TEMPLATE_ID".to_string(),
            timeout_seconds: None,
        }
    }
}

impl RelayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds.unwrap_or(30))
    }
}

/// Static identity of the site owner, used as the message recipient
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OwnerIdentity {
    pub name: String,
    pub email: String,
    pub title: String,
}

impl Default for OwnerIdentity {
    fn default() -> Self {
        Self {
            name: "KAVIN P".to_string(),
            email: "kavin22cs024@gmail.com".to_string(),
            title: "UI/UX Designer & Software Engineer".to_string(),
        }
    }
}

/// Notification timings in milliseconds
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NotificationConfig {
    pub auto_dismiss_ms: u64,
    pub transition_ms: u64,
    pub enter_delay_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            auto_dismiss_ms: 8000,
            transition_ms: 300,
            enter_delay_ms: 100,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).with_file_context(&path.display().to_string())?;
        let config: Config =
            serde_json::from_str(&content).with_config_context(&path.display().to_string())?;
        Ok(config)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get_config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio")
            .join("config.json")
    }

    /// Load `~/.folio/config.json` if it parses, otherwise defaults.
    /// Environment overrides are applied in both cases.
    pub fn load_or_default() -> Result<Self> {
        let config_path = Self::get_config_path();

        let mut config = if config_path.exists() {
            match Self::load_from_file(&config_path) {
                Ok(config) => config,
                Err(e) => {
                    crate::utils::logger::warn(&format!(
                        "Ignoring unreadable config {}: {}",
                        config_path.display(),
                        e
                    ));
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to_file(Self::get_config_path())
    }

    /// Replace relay settings with `FOLIO_EMAILJS_*` variables when set
    pub fn apply_env_overrides(&mut self) {
        let overrides: [(&str, &mut String); 4] = [
            ("FOLIO_EMAILJS_PUBLIC_KEY", &mut self.relay.public_key),
            ("FOLIO_EMAILJS_SERVICE_ID", &mut self.relay.service_id),
            ("FOLIO_EMAILJS_TEMPLATE_ID", &mut self.relay.template_id),
            (
                "FOLIO_EMAILJS_AUTO_REPLY_TEMPLATE_ID",
                &mut self.relay.auto_reply_template_id,
            ),
        ];

        for (var, slot) in overrides {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    *slot = value;
                }
            }
        }
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        let required = [
            ("relay.api_url", &self.relay.api_url),
            ("relay.public_key", &self.relay.public_key),
            ("relay.service_id", &self.relay.service_id),
            ("relay.template_id", &self.relay.template_id),
            ("relay.auto_reply_template_id", &self.relay.auto_reply_template_id),
        ];

        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(FolioError::Config(format!("{} must not be empty", name)));
            }
        }

        if !self.owner.email.contains('@') {
            return Err(FolioError::Config(format!(
                "owner.email is not an email address: {}",
                self.owner.email
            )));
        }

        Ok(())
    }
}
