//! # twitter-facade Library
//!
//! A facade over the Twitter/X REST API v1.1. A fixed set of high-level
//! operations (timelines, search, user lookups, posting, favorites, deletion
//! and reply derivation) is mapped onto the provider's endpoints, and every
//! call comes back as the same `{code, query, response}` envelope.
//!
//! ## Features
//!
//! - OAuth 1.0a (HMAC-SHA1) signed requests through a pluggable client trait
//! - Uniform response envelopes with lossless handling of large numeric ids
//! - Client-side derivation of replies to a tweet from the mentions timeline
//! - Optional HTTP service exposing every operation as a JSON endpoint
//! - Structured logging
//!
//! ## Configuration
//!
//! The following environment variables are required:
//! - `xapi_consumer_key`, `xapi_consumer_secret`: application credentials
//! - `xapi_user_token`, `xapi_user_secret`: account credentials
//! - `xapi_screen_name`: screen name of the account
//!
//! Optional:
//! - `xapi_base_url`: API host (defaults to `https://api.twitter.com`)
//! - `xapi_timeout_secs`: request timeout (defaults to 30)
//! - `PORT`: Server port (defaults to 3000)

pub mod config;
pub mod handlers;
pub mod oauth;
pub mod session;
pub mod twitter;

// Re-export commonly used types and functions
pub use config::{get_server_port, TwitterConfig};
pub use handlers::build_router;
pub use oauth::{build_oauth1_header, OAuthCredentials};
pub use session::AccountSession;
pub use twitter::{
    filter_replies, normalize, CredentialedClient, FavoriteAction, HttpMethod, OAuthClient,
    RequestDescriptor, ResponseEnvelope, TransportResponse, Twitter, UserIds,
};
