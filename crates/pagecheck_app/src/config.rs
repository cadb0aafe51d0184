use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use pagecheck_core::{BadgeStyle, ValidatorEndpoint, DEFAULT_ENDPOINT};
use pagecheck_engine::HttpSettings;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid endpoint {endpoint:?}: {source}")]
    Endpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },
}

/// Settings read from a RON file, e.g.
///
/// ```ron
/// (
///     endpoint: "https://validator.w3.org/nu/",
///     request_timeout_secs: 20,
///     output_dir: Some("annotated"),
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub pass_color: String,
    pub fail_color: String,
    pub output_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let http = HttpSettings::default();
        let style = BadgeStyle::default();
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: http.connect_timeout.as_secs(),
            request_timeout_secs: http.request_timeout.as_secs(),
            max_bytes: http.max_bytes,
            pass_color: style.pass_color,
            fail_color: style.fail_color,
            output_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron(&text)
    }

    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(text)?)
    }

    pub fn http_settings(&self) -> HttpSettings {
        HttpSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..HttpSettings::default()
        }
    }

    pub fn endpoint(&self) -> Result<ValidatorEndpoint, ConfigError> {
        ValidatorEndpoint::parse(&self.endpoint).map_err(|source| ConfigError::Endpoint {
            endpoint: self.endpoint.clone(),
            source,
        })
    }

    pub fn badge_style(&self) -> BadgeStyle {
        BadgeStyle {
            pass_color: self.pass_color.clone(),
            fail_color: self.fail_color.clone(),
        }
    }
}
