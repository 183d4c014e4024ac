//! Configuration module for the twitter-facade service.
//!
//! This module contains configuration structures and environment variable handling
//! for the Twitter/X API integration.

use log::{debug, error, info, warn};
use std::env;

/// Default API host used when `xapi_base_url` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.twitter.com";

/// Default request timeout used when `xapi_timeout_secs` is not set.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default server port used when `PORT` is not set or invalid.
pub const DEFAULT_PORT: u16 = 3000;

/// Configuration struct for Twitter/X API credentials.
///
/// Holds the OAuth 1.0a consumer and user credentials for one account together
/// with the account's screen name, which operations like the user timeline and
/// the followers list default to.
#[derive(Debug, Clone)]
pub struct TwitterConfig {
    /// The application's consumer key
    pub consumer_key: String,
    /// The application's consumer secret
    pub consumer_secret: String,
    /// The account's access token
    pub user_token: String,
    /// The account's access token secret
    pub user_secret: String,
    /// The screen name of the authenticated account
    pub screen_name: String,
    /// Scheme and host the API paths are resolved against
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client
    pub timeout_secs: u64,
}

/// Masks a credential for logging, keeping at most the first and last 8 characters.
///
/// # Example
///
/// ```rust
/// use twitter_facade::config::mask_credential;
///
/// assert_eq!(mask_credential("abcdefghijklmnopqrstuvwxyz"), "abcdefgh...stuvwxyz");
/// assert_eq!(mask_credential("short"), "short...");
/// ```
pub fn mask_credential(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    let len = chars.len();

    let prefix: String = chars.iter().take(8).collect();
    if len > 16 {
        let suffix: String = chars[len - 8..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        format!("{}...", prefix)
    }
}

/// Reads a required, non-empty credential from the environment.
fn load_required_var(name: &str) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    match env::var(name) {
        Ok(value) => {
            info!(
                "Found {} environment variable with length: {}",
                name,
                value.len()
            );
            debug!("{} (masked): {}", name, mask_credential(&value));

            if value.trim().is_empty() {
                error!("{} is empty", name);
                return Err(format!("{} cannot be empty", name).into());
            }

            if value.len() < 10 && name != "xapi_screen_name" {
                warn!(
                    "{} seems unusually short ({} characters)",
                    name,
                    value.len()
                );
            }

            Ok(value)
        }
        Err(e) => {
            error!("Failed to load {} from environment: {}", name, e);
            error!("Make sure {} environment variable is set", name);
            Err(format!("Missing {} environment variable: {}", name, e).into())
        }
    }
}

impl TwitterConfig {
    /// Creates a new `TwitterConfig` instance by loading credentials from environment variables.
    ///
    /// # Required Environment Variables
    ///
    /// - `xapi_consumer_key`: The application's consumer key
    /// - `xapi_consumer_secret`: The application's consumer secret
    /// - `xapi_user_token`: The account's access token
    /// - `xapi_user_secret`: The account's access token secret
    /// - `xapi_screen_name`: The screen name of the account
    ///
    /// # Optional Environment Variables
    ///
    /// - `xapi_base_url`: API host (defaults to `https://api.twitter.com`)
    /// - `xapi_timeout_secs`: Request timeout in seconds (defaults to 30)
    ///
    /// # Returns
    ///
    /// - `Ok(TwitterConfig)`: If every required variable is present and valid
    /// - `Err(Box<dyn std::error::Error + Send + Sync>)`: If a variable is missing, empty or malformed
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        info!("Loading Twitter configuration from environment variables");

        let consumer_key = load_required_var("xapi_consumer_key")?;
        let consumer_secret = load_required_var("xapi_consumer_secret")?;
        let user_token = load_required_var("xapi_user_token")?;
        let user_secret = load_required_var("xapi_user_secret")?;
        let screen_name = load_required_var("xapi_screen_name")?;

        let base_url = match env::var("xapi_base_url") {
            Ok(url) if !url.trim().is_empty() => {
                info!("Using API base URL from xapi_base_url: {}", url);
                url
            }
            _ => {
                debug!("No xapi_base_url set, using {}", DEFAULT_BASE_URL);
                DEFAULT_BASE_URL.to_string()
            }
        };

        let timeout_secs = match env::var("xapi_timeout_secs") {
            Ok(raw) => raw.trim().parse::<u64>().map_err(|e| {
                error!("xapi_timeout_secs is not a valid number: {}", e);
                format!("Invalid xapi_timeout_secs '{}': {}", raw, e)
            })?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };

        let config = TwitterConfig {
            consumer_key,
            consumer_secret,
            user_token,
            user_secret,
            screen_name,
            base_url,
            timeout_secs,
        };
        config.validate()?;

        info!(
            "Twitter configuration loaded successfully for @{}",
            config.screen_name
        );
        Ok(config)
    }

    /// Checks that every credential is non-empty and the base URL parses.
    ///
    /// Authenticated calls cannot succeed without all four credentials and the
    /// screen name, so an incomplete configuration is rejected up front.
    pub fn validate(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let fields = [
            ("consumer_key", &self.consumer_key),
            ("consumer_secret", &self.consumer_secret),
            ("user_token", &self.user_token),
            ("user_secret", &self.user_secret),
            ("screen_name", &self.screen_name),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                error!("Twitter configuration field '{}' is empty", name);
                return Err(format!("Twitter configuration field '{}' cannot be empty", name).into());
            }
        }

        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| format!("Invalid base URL '{}': {}", self.base_url, e))?;
        if parsed.scheme() != "https" && parsed.scheme() != "http" {
            return Err(format!("Base URL must be http(s), got '{}'", parsed.scheme()).into());
        }

        Ok(())
    }
}

/// Gets the server port from environment variables or returns the default.
///
/// This function reads the `PORT` environment variable and parses it as a u16.
/// If the environment variable is not set or cannot be parsed, it defaults to 3000.
///
/// # Example
///
/// ```rust
/// use twitter_facade::get_server_port;
///
/// // With no PORT set
/// let port = get_server_port(); // Returns 3000
/// ```
pub fn get_server_port() -> u16 {
    match env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("PORT '{}' is not a valid port, using {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => DEFAULT_PORT,
    }
}
