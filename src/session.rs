//! Account session shared by the facade and the OAuth client.

use log::info;

use crate::config::TwitterConfig;
use crate::oauth::OAuthCredentials;

/// Credentials and screen name of the one account this process acts as.
///
/// Built once at startup and never mutated afterwards, so it is shared
/// behind an `Arc` without locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountSession {
    credentials: OAuthCredentials,
    screen_name: String,
}

impl AccountSession {
    pub fn new(credentials: OAuthCredentials, screen_name: impl Into<String>) -> Self {
        Self {
            credentials,
            screen_name: screen_name.into(),
        }
    }

    /// Builds a session from a validated configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(AccountSession)`: If every credential and the screen name are non-empty
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If the configuration is incomplete
    pub fn from_config(
        config: &TwitterConfig,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        config.validate()?;
        info!("Creating account session for @{}", config.screen_name);

        Ok(Self::new(
            OAuthCredentials {
                consumer_key: config.consumer_key.clone(),
                consumer_secret: config.consumer_secret.clone(),
                user_token: config.user_token.clone(),
                user_secret: config.user_secret.clone(),
            },
            config.screen_name.clone(),
        ))
    }

    pub fn credentials(&self) -> &OAuthCredentials {
        &self.credentials
    }

    pub fn screen_name(&self) -> &str {
        &self.screen_name
    }
}
