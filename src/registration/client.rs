// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP client for the model registration REST API
//!
//! Routes (relative to the configured endpoint):
//! - `POST   /v1/model_registrations/embedding`
//! - `GET    /v1/model_registrations/embedding`
//! - `DELETE /v1/model_registrations/embedding/{model_name}`

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};
use url::Url;

use super::error::RegistrationError;

const REGISTRATION_PATH: [&str; 3] = ["v1", "model_registrations", "embedding"];

/// Body of `POST /v1/model_registrations/embedding`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterModelRequest {
    /// JSON-encoded model description, sent as a string
    pub model: String,
    /// Keep the registration across backend restarts
    pub persist: bool,
}

/// One entry of the registration listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelRegistration {
    pub model_name: String,
    #[serde(default)]
    pub is_builtin: bool,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Sends registration requests to a backend
#[async_trait]
pub trait RegistrationTransport: Send + Sync {
    /// Register a model; `Ok` for any 2xx response
    async fn register(&self, request: &RegisterModelRequest) -> Result<(), RegistrationError>;
}

/// `reqwest`-backed client for the registration API
#[derive(Debug, Clone)]
pub struct HttpRegistrationClient {
    http: Client,
    base: Url,
}

impl HttpRegistrationClient {
    /// Client with no request timeout
    pub fn new(endpoint: &str) -> Result<Self, RegistrationError> {
        Self::with_timeout(endpoint, None)
    }

    pub fn with_timeout(
        endpoint: &str,
        timeout: Option<Duration>,
    ) -> Result<Self, RegistrationError> {
        let base = parse_endpoint(endpoint)?;

        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        debug!("Registration client configured: endpoint={}", base);
        Ok(Self { http, base })
    }

    /// Base URL all routes are resolved against
    pub fn endpoint(&self) -> &Url {
        &self.base
    }

    /// `{endpoint}/v1/model_registrations/embedding[/extra...]`
    pub fn registration_url(&self, extra: &[&str]) -> Result<Url, RegistrationError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RegistrationError::InvalidEndpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(REGISTRATION_PATH.iter().chain(extra.iter()));
        Ok(url)
    }

    /// List registered embedding models, built-in ones included
    pub async fn list(&self) -> Result<Vec<ModelRegistration>, RegistrationError> {
        let url = self.registration_url(&[])?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        Ok(response.json().await?)
    }

    /// Remove a custom model registration
    pub async fn unregister(&self, model_name: &str) -> Result<(), RegistrationError> {
        let url = self.registration_url(&[model_name])?;
        debug!("DELETE {}", url);

        let response = self.http.delete(url).send().await?;
        if !response.status().is_success() {
            return Err(server_error(response).await);
        }

        info!("Unregistered embedding model '{}'", model_name);
        Ok(())
    }
}

#[async_trait]
impl RegistrationTransport for HttpRegistrationClient {
    async fn register(&self, request: &RegisterModelRequest) -> Result<(), RegistrationError> {
        let url = self.registration_url(&[])?;
        debug!("POST {} (persist={})", url, request.persist);

        // `.json()` sets `Content-Type: application/json`
        let response = self.http.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(server_error(response).await);
        }

        info!("Registration accepted with status {}", status.as_u16());
        Ok(())
    }
}

/// Parse and check a base URL; a trailing `/` is dropped
pub fn parse_endpoint(endpoint: &str) -> Result<Url, RegistrationError> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| RegistrationError::InvalidEndpoint(format!("{}: {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(RegistrationError::InvalidEndpoint(format!(
                "{}: unsupported scheme '{}'",
                endpoint, other
            )))
        }
    }

    if url.cannot_be_a_base() {
        return Err(RegistrationError::InvalidEndpoint(endpoint.to_string()));
    }

    Ok(url)
}

/// Turn a non-2xx response into `RegistrationError::Server`.
///
/// A body that is not JSON, or has no usable `detail`, yields `detail: None`.
/// This intentionally differs from the web form, which surfaced the JSON
/// parse failure itself; here the status code is always reported.
async fn server_error(response: Response) -> RegistrationError {
    let status = response.status().as_u16();
    let detail = match response.json::<ErrorBody>().await {
        Ok(body) => body.detail.and_then(detail_text),
        Err(e) => {
            warn!("Error response {} has no JSON body: {}", status, e);
            None
        }
    };

    RegistrationError::Server { status, detail }
}

fn detail_text(detail: serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s),
        other => Some(other.to_string()),
    }
}
