//! Twitter/X API integration module.
//!
//! This module contains the `Twitter` facade, which maps each high-level
//! operation (timelines, search, users, posting, favorites, replies) onto one
//! v1.1 endpoint call and returns a normalized `ResponseEnvelope`.

mod api;
mod envelope;
mod replies;
mod search;
mod timeline;
mod tweets;
mod users;

use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::config::TwitterConfig;
use crate::session::AccountSession;

// Re-export public API
pub use api::{
    CredentialedClient, HttpMethod, OAuthClient, RequestDescriptor, RequestInfo,
    TransportResponse,
};
pub use envelope::{decode_body, normalize, ResponseEnvelope};
pub use replies::{filter_replies, reply_target};
pub use tweets::FavoriteAction;
pub use users::UserIds;

pub(crate) use api::sanitize_for_logging;

/// API version prefix every endpoint path is resolved under.
const API_VERSION: &str = "1.1";

/// Facade over the Twitter REST API for one authenticated account.
///
/// Operations never fail at the Rust level: provider errors, undecodable
/// bodies and transport failures all surface through the returned
/// `ResponseEnvelope`.
pub struct Twitter<C = OAuthClient> {
    client: C,
    session: Arc<AccountSession>,
}

impl Twitter<OAuthClient> {
    /// Builds a facade backed by a new `OAuthClient` for the configured account.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use twitter_facade::{Twitter, TwitterConfig};
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    ///     let config = TwitterConfig::from_env()?;
    ///     let twitter = Twitter::new(&config)?;
    ///     let envelope = twitter.get_timeline(None).await;
    ///     println!("{} {}", envelope.code, envelope.response);
    ///     Ok(())
    /// }
    /// ```
    pub fn new(config: &TwitterConfig) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let session = Arc::new(AccountSession::from_config(config)?);
        let client = OAuthClient::new(
            Arc::clone(&session),
            &config.base_url,
            Duration::from_secs(config.timeout_secs),
        )?;
        info!("Twitter facade ready at {}", config.base_url);
        Ok(Self { client, session })
    }
}

impl<C: CredentialedClient> Twitter<C> {
    /// Builds a facade over any credentialed client.
    pub fn with_client(client: C, session: Arc<AccountSession>) -> Self {
        Self { client, session }
    }

    pub fn session(&self) -> &AccountSession {
        &self.session
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Issues one request and returns its call-scoped transport result.
    ///
    /// A client error is logged and recorded as status 0 with an empty body.
    pub(crate) async fn send(
        &self,
        descriptor: RequestDescriptor,
        operation_name: &str,
    ) -> TransportResponse {
        let url = self
            .client
            .url_for(&format!("{}/{}", API_VERSION, descriptor.path));

        info!(
            "Making authenticated request for operation: {}",
            operation_name
        );
        debug!(
            "Request: {} {} params={:?}",
            descriptor.method, url, descriptor.params
        );

        match self
            .client
            .request(descriptor.method, &url, &descriptor.params)
            .await
        {
            Ok(transport) => {
                info!(
                    "Received response with status: {} for operation: {}",
                    transport.status, operation_name
                );
                debug!(
                    "Response summary for '{}': {} bytes received",
                    operation_name,
                    transport.body.len()
                );
                if !(200..300).contains(&transport.status) {
                    warn!(
                        "Operation '{}' returned status {}: {}",
                        operation_name,
                        transport.status,
                        sanitize_for_logging(&transport.body, 200)
                    );
                }
                transport
            }
            Err(e) => {
                error!("Operation '{}' failed in transport: {}", operation_name, e);
                TransportResponse::failed(url)
            }
        }
    }

    /// Issues one request and normalizes the result.
    pub(crate) async fn execute(
        &self,
        descriptor: RequestDescriptor,
        operation_name: &str,
    ) -> ResponseEnvelope {
        normalize(&self.send(descriptor, operation_name).await)
    }
}
