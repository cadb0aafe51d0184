use pagecheck_core::{HttpMethod, ValidationRequest};
use pagecheck_logging::pagecheck_debug;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use crate::http::{ensure_success, map_reqwest_error, read_capped};
use crate::{FailureKind, FetchError, HttpSettings};

/// Sends a [`ValidationRequest`] and returns the parsed JSON body.
#[async_trait::async_trait]
pub trait ValidatorClient: Send + Sync {
    async fn submit(&self, request: &ValidationRequest) -> Result<Value, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestValidatorClient {
    settings: HttpSettings,
    client: reqwest::Client,
}

impl ReqwestValidatorClient {
    pub fn new(settings: HttpSettings) -> Result<Self, FetchError> {
        let client = settings.build_client(None)?;
        Ok(Self { settings, client })
    }
}

#[async_trait::async_trait]
impl ValidatorClient for ReqwestValidatorClient {
    async fn submit(&self, request: &ValidationRequest) -> Result<Value, FetchError> {
        let mut builder = match request.method {
            HttpMethod::Get => self.client.get(request.url.clone()),
            HttpMethod::Post => self.client.post(request.url.clone()),
        };
        if let Some(content_type) = request.content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;
        ensure_success(&response)?;
        let bytes = read_capped(response, self.settings.max_bytes).await?;
        pagecheck_debug!("validator answered with {} bytes", bytes.len());

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::InvalidJson, err.to_string()))
    }
}
