//! HTTP route handlers for the twitter-facade service.
//!
//! Each route forwards to one `Twitter` operation and answers with the
//! operation's `ResponseEnvelope` as JSON. The envelope carries the provider
//! status in `code`, so the HTTP status of these routes is always 200.

use axum::{
    extract::{Path, Query, State},
    response::Json,
    routing::{get, post},
    Router,
};
use log::info;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::twitter::{CredentialedClient, ResponseEnvelope, Twitter};

/// Shared facade handed to every handler.
pub type SharedTwitter<C> = State<Arc<Twitter<C>>>;

/// Query string for operations that only take a count.
#[derive(Debug, Default, Deserialize)]
pub struct CountQuery {
    pub count: Option<u32>,
}

/// Query string for `GET /search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    pub count: Option<u32>,
}

/// Query string for `GET /users`.
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    #[serde(default)]
    pub ids: String,
}

/// JSON body for `POST /tweets`.
#[derive(Debug, Default, Deserialize)]
pub struct PostStatusBody {
    #[serde(default)]
    pub status: String,
    pub in_reply_to_status_id: Option<String>,
}

/// Builds the application router with every facade route.
///
/// # Routes
///
/// - `GET /`, `GET /health`
/// - `GET /timeline`, `GET /home`, `GET /mentions`, `GET /replies/:id`
/// - `GET /search`, `GET /tweets/:id`, `POST /tweets`, `DELETE /tweets/:id`
/// - `POST /favorites/:action/:id`
/// - `GET /followers`, `GET /users`, `GET /users/:screen_name`
pub fn build_router<C: CredentialedClient + 'static>(twitter: Arc<Twitter<C>>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/health", get(handle_health))
        .route("/timeline", get(handle_timeline::<C>))
        .route("/home", get(handle_home_timeline::<C>))
        .route("/search", get(handle_search::<C>))
        .route("/tweets", post(handle_post::<C>))
        .route(
            "/tweets/:id",
            get(handle_find::<C>).delete(handle_delete::<C>),
        )
        .route("/favorites/:action/:id", post(handle_favorite::<C>))
        .route("/followers", get(handle_followers::<C>))
        .route("/users", get(handle_users::<C>))
        .route("/users/:screen_name", get(handle_user::<C>))
        .route("/mentions", get(handle_mentions::<C>))
        .route("/replies/:id", get(handle_replies::<C>))
        .with_state(twitter)
}

/// Handles GET requests to the root `/` endpoint.
pub async fn handle_root() -> &'static str {
    "twitter-facade is running"
}

/// Handles GET requests to the `/health` endpoint.
///
/// # Example Response
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "twitter-facade"
/// }
/// ```
pub async fn handle_health() -> Json<Value> {
    Json(json!({"status": "healthy", "service": "twitter-facade"}))
}

pub async fn handle_timeline<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Query(query): Query<CountQuery>,
) -> Json<ResponseEnvelope> {
    Json(twitter.get_timeline(query.count).await)
}

pub async fn handle_home_timeline<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Query(query): Query<CountQuery>,
) -> Json<ResponseEnvelope> {
    Json(twitter.home_timeline(query.count).await)
}

pub async fn handle_search<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Query(query): Query<SearchQuery>,
) -> Json<ResponseEnvelope> {
    Json(twitter.search(&query.q, query.count).await)
}

pub async fn handle_find<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Path(id): Path<String>,
) -> Json<ResponseEnvelope> {
    Json(twitter.find(&id).await)
}

/// Handles POST requests to the `/tweets` endpoint.
///
/// # Request Body
///
/// ```json
/// {
///   "status": "Hello world",
///   "in_reply_to_status_id": "1234567890"
/// }
/// ```
///
/// `in_reply_to_status_id` is optional and is only forwarded when present.
pub async fn handle_post<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Json(body): Json<PostStatusBody>,
) -> Json<ResponseEnvelope> {
    info!("Received status post request");
    Json(
        twitter
            .post(&body.status, body.in_reply_to_status_id.as_deref())
            .await,
    )
}

pub async fn handle_delete<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Path(id): Path<String>,
) -> Json<ResponseEnvelope> {
    info!("Received delete request for tweet {}", id);
    Json(twitter.delete(&id).await)
}

pub async fn handle_favorite<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Path((action, id)): Path<(String, String)>,
) -> Json<ResponseEnvelope> {
    Json(twitter.favorite(&action, &id).await)
}

pub async fn handle_followers<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
) -> Json<ResponseEnvelope> {
    Json(twitter.followers().await)
}

pub async fn handle_users<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Query(query): Query<UsersQuery>,
) -> Json<ResponseEnvelope> {
    Json(twitter.users(query.ids).await)
}

pub async fn handle_user<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Path(screen_name): Path<String>,
) -> Json<ResponseEnvelope> {
    Json(twitter.user(&screen_name).await)
}

pub async fn handle_mentions<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Query(query): Query<CountQuery>,
) -> Json<ResponseEnvelope> {
    Json(twitter.mentions(query.count).await)
}

pub async fn handle_replies<C: CredentialedClient>(
    State(twitter): SharedTwitter<C>,
    Path(id): Path<String>,
    Query(query): Query<CountQuery>,
) -> Json<ResponseEnvelope> {
    Json(twitter.replies(&id, query.count).await)
}
