//! HTTP client for the insights REST API
//!
//! Every call is made relative to one base prefix (scheme, host and an
//! optional path such as `/api`). Failed responses surface the server's
//! `error` message.

use std::time::Duration;

use insights_core::{env_parse_with_default, Insight};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::api_types::{CreateInsightRequest, ErrorResponse, MessageResponse};

/// Configuration for the insights HTTP client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Prefix for every call, e.g. `http://127.0.0.1:8080` or `https://host/api`
    pub api_base: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    #[must_use]
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            timeout_secs: env_parse_with_default("INSIGHTS_CLIENT_TIMEOUT_SECS", 30),
        }
    }
}

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: StatusCode, message: String },

    /// Connection, timeout or decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl ClientError {
    /// HTTP status when the server answered, `None` for transport failures.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
        }
    }
}

pub struct InsightsClient {
    http: Client,
    base: String,
}

impl InsightsClient {
    /// # Errors
    /// Returns error if the underlying HTTP client cannot be built.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let http = Client::builder().timeout(Duration::from_secs(config.timeout_secs)).build()?;
        let base = config.api_base.trim_end_matches('/').to_owned();
        Ok(Self { http, base })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    /// # Errors
    /// Returns error on transport failure or a non-success response.
    pub async fn fetch_insights(&self) -> Result<Vec<Insight>, ClientError> {
        let response = self.http.get(self.url("/insights")).send().await?;
        handle_response(response).await
    }

    /// # Errors
    /// Returns error on transport failure or a non-success response, including 404.
    pub async fn fetch_insight(&self, id: i64) -> Result<Insight, ClientError> {
        let response = self.http.get(self.url(&format!("/insights/{id}"))).send().await?;
        handle_response(response).await
    }

    /// # Errors
    /// Returns error on transport failure or a non-success response, including
    /// validation rejections.
    pub async fn create_insight(&self, brand: i64, text: &str) -> Result<Insight, ClientError> {
        let body = CreateInsightRequest { brand, text: text.to_owned() };
        let response = self.http.post(self.url("/insights")).json(&body).send().await?;
        handle_response(response).await
    }

    /// # Errors
    /// Returns error on transport failure or a non-success response, including 404.
    pub async fn delete_insight(&self, id: i64) -> Result<(), ClientError> {
        let response = self.http.delete(self.url(&format!("/insights/{id}"))).send().await?;
        let _: MessageResponse = handle_response(response).await?;
        Ok(())
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if !status.is_success() {
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => format!("Request failed: {status}"),
        };
        tracing::debug!(%status, %message, "insights API returned an error");
        return Err(ClientError::Api { status, message });
    }
    Ok(response.json().await?)
}
