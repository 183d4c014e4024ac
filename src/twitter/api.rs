//! Core Twitter API utilities.
//!
//! This module contains the transport contract the facade relies on
//! (`CredentialedClient`), the plain-data request and response types that
//! cross it, and `OAuthClient`, the reqwest-backed implementation that signs
//! every request with OAuth 1.0a.

use async_trait::async_trait;
use log::debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

use crate::oauth::{build_oauth1_header, encode_params, generate_nonce};
use crate::session::AccountSession;

/// Sanitizes text for safe logging by truncating and escaping control characters.
///
/// This function:
/// - Truncates long text to prevent log flooding
/// - Replaces control characters that could manipulate log output
/// - Escapes newlines to prevent log injection
///
/// # Parameters
///
/// - `text`: The text to sanitize
/// - `max_len`: Maximum length in characters before truncation
///
/// # Returns
///
/// A sanitized string safe for logging
pub(crate) fn sanitize_for_logging(text: &str, max_len: usize) -> String {
    let sanitized: String = text
        .chars()
        .map(|c| match c {
            '\n' | '\r' | '\t' => ' ',
            c if c.is_control() => '?',
            c => c,
        })
        .collect();

    if sanitized.chars().count() > max_len {
        let truncated: String = sanitized.chars().take(max_len).collect();
        format!(
            "{}... [truncated, {} total bytes]",
            truncated,
            text.len()
        )
    } else {
        sanitized
    }
}

/// HTTP verbs used by the v1.1 endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call to the API: verb, path below `1.1/`, and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RequestDescriptor {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            params: Vec::new(),
        }
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            params: Vec::new(),
        }
    }

    /// Appends a parameter. Booleans render as `true`/`false`.
    pub fn param(mut self, name: &str, value: impl ToString) -> Self {
        self.params.push((name.to_string(), value.to_string()));
        self
    }

    /// Looks up the value of a parameter by name.
    pub fn param_value(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Metadata about the request that produced a response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RequestInfo {
    /// The fully resolved URL, including the query string for GET requests
    pub url: String,
}

/// The call-scoped result of one request: raw body, status and request info.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TransportResponse {
    pub body: String,
    pub status: u16,
    pub info: RequestInfo,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            info: RequestInfo { url: url.into() },
        }
    }

    /// Response recorded when the request never produced an HTTP status.
    pub fn failed(url: impl Into<String>) -> Self {
        Self::new(0, String::new(), url)
    }
}

/// A client that performs signed requests on behalf of one account.
///
/// Implementations return a fresh `TransportResponse` per call and keep no
/// "last response" state, so one client can serve concurrent callers.
#[async_trait]
pub trait CredentialedClient: Send + Sync {
    /// Resolves a provider path such as `1.1/statuses/update` to a full URL.
    fn url_for(&self, path: &str) -> String;

    /// Sends one signed request.
    ///
    /// Non-2xx statuses are not errors; `Err` means no HTTP response was obtained.
    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<TransportResponse, Box<dyn std::error::Error + Send + Sync>>;
}

/// `CredentialedClient` backed by reqwest and OAuth 1.0a HMAC-SHA1 signing.
#[derive(Debug, Clone)]
pub struct OAuthClient {
    http: Client,
    session: Arc<AccountSession>,
    base_url: String,
}

impl OAuthClient {
    /// Creates a client for `base_url` (scheme and host, e.g. `https://api.twitter.com`).
    pub fn new(
        session: Arc<AccountSession>,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            session,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CredentialedClient for OAuthClient {
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}.json", self.base_url, path.trim_start_matches('/'))
    }

    async fn request(
        &self,
        method: HttpMethod,
        url: &str,
        params: &[(String, String)],
    ) -> Result<TransportResponse, Box<dyn std::error::Error + Send + Sync>> {
        let nonce = generate_nonce();
        let timestamp = chrono::Utc::now().timestamp();
        let auth_header = build_oauth1_header(
            self.session.credentials(),
            method.as_str(),
            url,
            params,
            &nonce,
            timestamp,
        )?;
        debug!("Request headers: Authorization: OAuth [REDACTED]");

        let encoded = encode_params(params);
        let request_builder = match method {
            HttpMethod::Get => {
                let target = if encoded.is_empty() {
                    url.to_string()
                } else {
                    format!("{}?{}", url, encoded)
                };
                self.http.get(target)
            }
            HttpMethod::Post => self
                .http
                .post(url)
                .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(encoded),
        };

        let response = request_builder
            .header(AUTHORIZATION, auth_header)
            .send()
            .await?;

        let status = response.status().as_u16();
        let resolved_url = response.url().to_string();
        let body = response.text().await?;

        Ok(TransportResponse::new(status, body, resolved_url))
    }
}
