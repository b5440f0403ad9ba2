use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use tracing::debug;

use crate::error::HttpError;

pub mod openweather;

/// Status and body of a completed GET request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The network capability the widget is constructed with.
///
/// A non-success status is not an error at this layer; only failures to
/// complete the exchange are.
#[async_trait]
pub trait HttpClient: Send + Sync + Debug {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, HttpError>;
}

/// [`HttpClient`] backed by `reqwest`. No timeout is applied.
#[derive(Debug, Clone, Default)]
pub struct ReqwestClient {
    http: Client,
}

impl ReqwestClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
        }
    }
}

#[async_trait]
impl HttpClient for ReqwestClient {
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<HttpResponse, HttpError> {
        debug!(url, "sending GET request");

        let res = self
            .http
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| HttpError::Send {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = res.status().as_u16();
        let body = res.text().await.map_err(|e| HttpError::Body {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        debug!(url, status, bytes = body.len(), "received response");
        Ok(HttpResponse { status, body })
    }
}
