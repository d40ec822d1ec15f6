use std::env;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_RECIPIENT: &str = "5511989217827";
pub const DEFAULT_CONTACT_EMAIL: &str = "janieles9898@gmail.com";
pub const DEFAULT_PROFILE_PHOTO: &str = "https://files.manuscdn.com/user_upload_by_module/session_file/310419663029665950/eKXrKEBApCOGRWuq.jpeg";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid number: {value}")]
    NotANumber { var: &'static str, value: String },
    #[error("WHATSAPP_RECIPIENT must be a non-empty string of digits, got: {0}")]
    BadRecipient(String),
}

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub bind_addr: String,
    pub port: u16,
    /// Directory served under `/assets`, e.g. the profile photo.
    pub assets_dir: Option<PathBuf>,
    /// Point this at `/assets/...` to serve the photo locally.
    pub profile_photo_url: String,
    pub messaging_base_url: String,
    pub whatsapp_recipient: String,
    pub contact_email: String,
    /// First name used in the greeting of the prefilled message.
    pub greeting_name: String,
    /// Time between the success notice and opening the messaging link.
    pub handoff_delay: Duration,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0".to_string(),
            port: 3000,
            assets_dir: None,
            profile_photo_url: DEFAULT_PROFILE_PHOTO.to_string(),
            messaging_base_url: "https://wa.me".to_string(),
            whatsapp_recipient: DEFAULT_RECIPIENT.to_string(),
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            greeting_name: "Janiele".to_string(),
            handoff_delay: Duration::from_millis(1000),
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads every setting through `lookup`, falling back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_number("PORT", &port)?;
        }
        config.assets_dir = lookup("ASSETS_DIR")
            .filter(|dir| !dir.is_empty())
            .map(PathBuf::from);
        if let Some(photo) = lookup("PROFILE_PHOTO_URL").filter(|url| !url.is_empty()) {
            config.profile_photo_url = photo;
        }
        if let Some(base) = lookup("MESSAGING_BASE_URL") {
            config.messaging_base_url = base;
        }
        if let Some(recipient) = lookup("WHATSAPP_RECIPIENT") {
            if recipient.is_empty() || !recipient.chars().all(|c| c.is_ascii_digit()) {
                return Err(ConfigError::BadRecipient(recipient));
            }
            config.whatsapp_recipient = recipient;
        }
        if let Some(email) = lookup("CONTACT_EMAIL") {
            config.contact_email = email;
        }
        if let Some(name) = lookup("GREETING_NAME") {
            config.greeting_name = name;
        }
        if let Some(delay) = lookup("HANDOFF_DELAY_MS") {
            config.handoff_delay = Duration::from_millis(parse_number("HANDOFF_DELAY_MS", &delay)?);
        }

        Ok(config)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<SiteConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
        assert_eq!(config.whatsapp_recipient, DEFAULT_RECIPIENT);
        assert_eq!(config.handoff_delay, Duration::from_secs(1));
        assert!(config.assets_dir.is_none());
        assert_eq!(config.profile_photo_url, DEFAULT_PROFILE_PHOTO);
    }

    #[test]
    fn overrides_are_applied() {
        let config = from_pairs(&[
            ("PORT", "8080"),
            ("ASSETS_DIR", "/srv/assets"),
            ("WHATSAPP_RECIPIENT", "5521999990000"),
            ("HANDOFF_DELAY_MS", "250"),
            ("GREETING_NAME", "Dra. Ana"),
            ("PROFILE_PHOTO_URL", "/assets/profile.jpeg"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.assets_dir, Some(PathBuf::from("/srv/assets")));
        assert_eq!(config.whatsapp_recipient, "5521999990000");
        assert_eq!(config.handoff_delay, Duration::from_millis(250));
        assert_eq!(config.greeting_name, "Dra. Ana");
        assert_eq!(config.profile_photo_url, "/assets/profile.jpeg");
    }

    #[test]
    fn rejects_bad_values() {
        assert_eq!(
            from_pairs(&[("PORT", "http")]).unwrap_err(),
            ConfigError::NotANumber {
                var: "PORT",
                value: "http".to_string()
            }
        );
        assert!(matches!(
            from_pairs(&[("WHATSAPP_RECIPIENT", "+55 11")]),
            Err(ConfigError::BadRecipient(_))
        ));
        assert!(from_pairs(&[("HANDOFF_DELAY_MS", "-1")]).is_err());
    }
}
