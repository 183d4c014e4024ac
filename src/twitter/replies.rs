//! Mentions and client-side reply derivation.
//!
//! The v1.1 API has no "replies to tweet X" query. Replies are derived from
//! the mentions timeline instead: mentions newer than X (`since_id`) are
//! fetched and only those whose in-reply-to id equals X are kept. The result
//! is approximate, bounded by `count` and by how far back the mentions
//! timeline reaches.

use log::{info, warn};
use serde_json::Value;

use super::api::{CredentialedClient, RequestDescriptor, TransportResponse};
use super::envelope::{decode_body, normalize, ResponseEnvelope};
use super::Twitter;

const DEFAULT_MENTIONS_COUNT: u32 = 50;
const DEFAULT_REPLIES_COUNT: u32 = 100;

/// Returns the id a mention replies to, as a string.
///
/// Prefers `in_reply_to_status_id_str` and falls back to
/// `in_reply_to_status_id`; a missing or null target yields `""`.
pub fn reply_target(entry: &Value) -> String {
    if let Some(id) = entry
        .get("in_reply_to_status_id_str")
        .and_then(|v| v.as_str())
    {
        return id.to_string();
    }

    match entry.get("in_reply_to_status_id") {
        Some(Value::String(id)) => id.clone(),
        Some(Value::Number(id)) => id.to_string(),
        _ => String::new(),
    }
}

/// Keeps only the mentions that reply to `target_id`.
///
/// A non-200 fetch is returned unfiltered. Otherwise the retained entries
/// replace the body and the result is normalized again, so `code` and
/// `query` still describe the mentions fetch.
pub fn filter_replies(transport: &TransportResponse, target_id: &str) -> ResponseEnvelope {
    if transport.status != 200 {
        warn!(
            "Mentions fetch returned status {}, skipping reply filtering",
            transport.status
        );
        return normalize(transport);
    }

    let mentions = match decode_body(&transport.body) {
        Value::Array(mentions) => mentions,
        _ => {
            warn!("Mentions response is not a list, skipping reply filtering");
            return normalize(transport);
        }
    };

    let total = mentions.len();
    let replies: Vec<Value> = mentions
        .into_iter()
        .filter(|mention| reply_target(mention) == target_id)
        .collect();
    info!(
        "Kept {} of {} mentions as replies to {}",
        replies.len(),
        total,
        target_id
    );

    let filtered = TransportResponse {
        body: Value::Array(replies).to_string(),
        ..transport.clone()
    };
    normalize(&filtered)
}

impl<C: CredentialedClient> Twitter<C> {
    /// Fetches recent tweets mentioning the authenticated account.
    ///
    /// # Parameters
    ///
    /// - `count`: Number of mentions to request (defaults to 50)
    pub async fn mentions(&self, count: Option<u32>) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("statuses/mentions_timeline")
            .param("count", count.unwrap_or(DEFAULT_MENTIONS_COUNT))
            .param("include_entities", true);

        self.execute(descriptor, "mentions").await
    }

    /// Fetches replies to one of the account's tweets.
    ///
    /// # Parameters
    ///
    /// - `tweet_id`: The tweet whose replies are wanted
    /// - `count`: Size of the mentions window searched (defaults to 100)
    pub async fn replies(&self, tweet_id: &str, count: Option<u32>) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("statuses/mentions_timeline")
            .param("since_id", tweet_id)
            .param("count", count.unwrap_or(DEFAULT_REPLIES_COUNT))
            .param("include_entities", true);

        let transport = self.send(descriptor, "replies").await;
        filter_replies(&transport, tweet_id)
    }
}
