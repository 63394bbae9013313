use serde::{Deserialize, Serialize};
use thiserror::Error;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

/// Errors raised when loading or validating connector settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A required environment variable was not set.
    #[error("Missing environment variable: {0}")]
    MissingVar(String),

    /// A URL setting carried an unsupported scheme.
    #[error("Invalid URL for {field}: {value}")]
    InvalidUrl { field: &'static str, value: String },

    /// The request timeout was not a positive number of seconds.
    #[error("Invalid request timeout: {0}")]
    InvalidTimeout(String),

    /// A required setting was empty.
    #[error("Setting must not be empty: {0}")]
    EmptyField(&'static str),
}

/// Connection settings for the job service and the workload analytics
/// service, plus the front-end base URL used by the query broker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectorSettings {
    pub service_url: String,
    pub analytics_url: String,
    pub access_token: String,
    pub cluster_name: String,
    pub frontend_url: String,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

impl ConnectorSettings {
    /// Load and validate settings from the environment.
    pub fn from_env() -> Result<Self, SettingsError> {
        let settings = ConnectorSettings {
            service_url: require_var("ADB_SERVICE_URL")?,
            analytics_url: require_var("ADB_ANALYTICS_URL")?,
            access_token: require_var("ADB_ACCESS_TOKEN")?,
            cluster_name: require_var("ADB_CLUSTER_NAME")?,
            frontend_url: require_var("NOTEBOOK_FRONTEND_URL")?,
            request_timeout_secs: match std::env::var("ADB_REQUEST_TIMEOUT_SECS") {
                Ok(raw) => raw
                    .parse()
                    .map_err(|_| SettingsError::InvalidTimeout(raw))?,
                Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
            },
        };
        settings.validated()
    }

    /// Normalize the URL fields and check every setting, returning settings
    /// ready for client construction.
    pub fn validated(mut self) -> Result<Self, SettingsError> {
        self.service_url = normalize_url("service_url", &self.service_url)?;
        self.analytics_url = normalize_url("analytics_url", &self.analytics_url)?;
        self.frontend_url = normalize_url("frontend_url", &self.frontend_url)?;

        if self.access_token.trim().is_empty() {
            return Err(SettingsError::EmptyField("access_token"));
        }
        if self.cluster_name.trim().is_empty() {
            return Err(SettingsError::EmptyField("cluster_name"));
        }
        if self.request_timeout_secs == 0 {
            return Err(SettingsError::InvalidTimeout("0".to_string()));
        }

        Ok(self)
    }
}

fn require_var(name: &str) -> Result<String, SettingsError> {
    std::env::var(name).map_err(|_| SettingsError::MissingVar(name.to_string()))
}

/// Trim trailing slashes and default to https when no scheme is given.
fn normalize_url(field: &'static str, raw: &str) -> Result<String, SettingsError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(SettingsError::EmptyField(field));
    }

    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else if trimmed.contains("://") {
        Err(SettingsError::InvalidUrl {
            field,
            value: raw.to_string(),
        })
    } else {
        Ok(format!("https://{trimmed}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ConnectorSettings {
        ConnectorSettings {
            service_url: "https://adb.example.com".to_string(),
            analytics_url: "https://analytics.example.com".to_string(),
            access_token: "token-123".to_string(),
            cluster_name: "warehouse".to_string(),
            frontend_url: "https://hue.example.com".to_string(),
            request_timeout_secs: 60,
        }
    }

    #[test]
    fn valid_settings_pass_unchanged() {
        let validated = settings().validated().unwrap();
        assert_eq!(validated.service_url, "https://adb.example.com");
        assert_eq!(validated.request_timeout_secs, 60);
    }

    #[test]
    fn urls_are_normalized() {
        let mut raw = settings();
        raw.service_url = "adb.example.com/".to_string();
        raw.frontend_url = "http://hue.example.com///".to_string();

        let validated = raw.validated().unwrap();
        assert_eq!(validated.service_url, "https://adb.example.com");
        assert_eq!(validated.frontend_url, "http://hue.example.com");
    }

    #[test]
    fn unsupported_scheme_is_rejected() {
        let mut raw = settings();
        raw.analytics_url = "ftp://analytics.example.com".to_string();
        assert!(matches!(
            raw.validated(),
            Err(SettingsError::InvalidUrl { field: "analytics_url", .. })
        ));
    }

    #[test]
    fn empty_token_is_rejected() {
        let mut raw = settings();
        raw.access_token = "  ".to_string();
        assert!(matches!(
            raw.validated(),
            Err(SettingsError::EmptyField("access_token"))
        ));
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let mut raw = settings();
        raw.request_timeout_secs = 0;
        assert!(matches!(
            raw.validated(),
            Err(SettingsError::InvalidTimeout(_))
        ));
    }

    #[test]
    fn missing_timeout_defaults_in_serde() {
        let parsed: ConnectorSettings = serde_json::from_str(
            r#"{
                "service_url": "https://adb.example.com",
                "analytics_url": "https://analytics.example.com",
                "access_token": "token-123",
                "cluster_name": "warehouse",
                "frontend_url": "https://hue.example.com"
            }"#,
        )
        .unwrap();
        assert_eq!(parsed.request_timeout_secs, 60);
    }
}
