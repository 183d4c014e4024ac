//! OAuth authentication module for Twitter/X API integration.
//!
//! This module implements OAuth 1.0a request signing (HMAC-SHA1) as used by the
//! Twitter REST API v1.1 for user-context operations such as reading timelines
//! and posting statuses.

use base64::Engine;
use hmac::{Hmac, Mac};
use rand::Rng;
use sha1::Sha1;

type HmacSha1 = Hmac<Sha1>;

const NONCE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
const NONCE_LENGTH: usize = 32;

/// The four OAuth 1.0a credential strings for one account.
#[derive(Clone, PartialEq, Eq)]
pub struct OAuthCredentials {
    pub consumer_key: String,
    pub consumer_secret: String,
    pub user_token: String,
    pub user_secret: String,
}

impl std::fmt::Debug for OAuthCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthCredentials")
            .field("consumer_key", &crate::config::mask_credential(&self.consumer_key))
            .field("consumer_secret", &"[REDACTED]")
            .field("user_token", &crate::config::mask_credential(&self.user_token))
            .field("user_secret", &"[REDACTED]")
            .finish()
    }
}

/// Percent-encodes a string per RFC 3986, keeping only unreserved characters.
///
/// # Example
///
/// ```rust
/// use twitter_facade::oauth::percent_encode;
///
/// assert_eq!(percent_encode("Ladies + Gentlemen"), "Ladies%20%2B%20Gentlemen");
/// assert_eq!(percent_encode("a-b.c_d~e"), "a-b.c_d~e");
/// ```
pub fn percent_encode(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encodes parameters as `k=v` pairs joined by `&`, keeping their order.
pub fn encode_params(params: &[(String, String)]) -> String {
    params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Generates a random alphanumeric nonce.
pub fn generate_nonce() -> String {
    let mut rng = rand::thread_rng();
    (0..NONCE_LENGTH)
        .map(|_| {
            let idx = rng.gen_range(0..NONCE_CHARSET.len());
            NONCE_CHARSET[idx] as char
        })
        .collect()
}

/// Builds the OAuth 1.0a signature base string.
///
/// Parameters are percent-encoded, sorted by key then value, and joined into a
/// single normalized parameter string before the whole is encoded again.
///
/// # Parameters
///
/// - `method`: The HTTP method (`GET` or `POST`)
/// - `url`: The request URL without a query string
/// - `params`: Request parameters and `oauth_*` parameters together
pub fn signature_base_string(method: &str, url: &str, params: &[(String, String)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (percent_encode(k), percent_encode(v)))
        .collect();
    encoded.sort();

    let normalized = encoded
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!(
        "{}&{}&{}",
        method.to_uppercase(),
        percent_encode(url),
        percent_encode(&normalized)
    )
}

/// Signs a base string with HMAC-SHA1 and returns the base64 signature.
pub fn sign(
    base_string: &str,
    consumer_secret: &str,
    user_secret: &str,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let key = format!(
        "{}&{}",
        percent_encode(consumer_secret),
        percent_encode(user_secret)
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())
        .map_err(|e| format!("Failed to initialise HMAC-SHA1: {}", e))?;
    mac.update(base_string.as_bytes());
    let digest = mac.finalize().into_bytes();
    Ok(base64::engine::general_purpose::STANDARD.encode(digest))
}

/// Builds the Authorization header for an OAuth 1.0a signed request.
///
/// # Parameters
///
/// - `credentials`: Consumer and user credentials of the account
/// - `method`: The HTTP method (`GET` or `POST`)
/// - `url`: The request URL without a query string
/// - `params`: The request parameters (query string or form body)
/// - `nonce`: A unique random string for this request
/// - `timestamp`: Seconds since the Unix epoch
///
/// # Format
///
/// ```text
/// OAuth oauth_consumer_key="...", oauth_nonce="...", oauth_signature="...",
///       oauth_signature_method="HMAC-SHA1", oauth_timestamp="...",
///       oauth_token="...", oauth_version="1.0"
/// ```
pub fn build_oauth1_header(
    credentials: &OAuthCredentials,
    method: &str,
    url: &str,
    params: &[(String, String)],
    nonce: &str,
    timestamp: i64,
) -> Result<String, Box<dyn std::error::Error + Send + Sync>> {
    let mut oauth_params: Vec<(String, String)> = vec![
        ("oauth_consumer_key".into(), credentials.consumer_key.clone()),
        ("oauth_nonce".into(), nonce.to_string()),
        ("oauth_signature_method".into(), "HMAC-SHA1".into()),
        ("oauth_timestamp".into(), timestamp.to_string()),
        ("oauth_token".into(), credentials.user_token.clone()),
        ("oauth_version".into(), "1.0".into()),
    ];

    let mut all_params = params.to_vec();
    all_params.extend(oauth_params.iter().cloned());

    let base_string = signature_base_string(method, url, &all_params);
    let signature = sign(
        &base_string,
        &credentials.consumer_secret,
        &credentials.user_secret,
    )?;

    oauth_params.push(("oauth_signature".into(), signature));
    oauth_params.sort();

    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!("OAuth {}", fields))
}
