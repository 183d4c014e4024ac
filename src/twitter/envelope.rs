//! Response normalization.
//!
//! Every facade operation ends by turning the raw transport result into a
//! `ResponseEnvelope`, the single shape callers ever receive.

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::api::{sanitize_for_logging, TransportResponse};

/// The uniform `{code, query, response}` result of every operation.
///
/// `response` is `Value::Null` when the body was empty or not valid JSON;
/// callers check `code` and `response` themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    /// HTTP status code, or 0 when no response was received
    pub code: u16,
    /// The fully resolved request URL
    pub query: String,
    /// The decoded JSON payload
    pub response: Value,
}

impl ResponseEnvelope {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }
}

/// Wraps a transport result into an envelope.
///
/// Pure over its input: the same `TransportResponse` always yields the same
/// envelope, and nothing is re-requested.
pub fn normalize(transport: &TransportResponse) -> ResponseEnvelope {
    ResponseEnvelope {
        code: transport.status,
        query: transport.info.url.clone(),
        response: decode_body(&transport.body),
    }
}

/// Decodes a response body into a JSON tree.
///
/// Integers too wide for 64 bits come back as strings holding their exact
/// digits; anything that is not JSON decodes to `Value::Null`.
pub fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Null;
    }

    match serde_json::from_str::<Value>(body) {
        Ok(value) => stringify_wide_integers(value),
        Err(e) => {
            debug!(
                "Response body is not valid JSON ({}): {}",
                e,
                sanitize_for_logging(body, 200)
            );
            Value::Null
        }
    }
}

fn stringify_wide_integers(value: Value) -> Value {
    match value {
        Value::Number(n) if !(n.is_i64() || n.is_u64()) => {
            let text = n.to_string();
            if is_integer_literal(&text) {
                Value::String(text)
            } else {
                Value::Number(n)
            }
        }
        Value::Array(items) => {
            Value::Array(items.into_iter().map(stringify_wide_integers).collect())
        }
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (k, stringify_wide_integers(v)))
                .collect(),
        ),
        other => other,
    }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix('-').unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}
