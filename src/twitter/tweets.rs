//! Tweet operations for Twitter API.
//!
//! This module contains functions for posting, deleting and favoriting
//! tweets using the Twitter API v1.1.

use log::{info, warn};

use super::api::{CredentialedClient, RequestDescriptor};
use super::envelope::ResponseEnvelope;
use super::Twitter;

/// Whether a favorite call adds or removes the favorite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FavoriteAction {
    #[default]
    Create,
    Destroy,
}

impl FavoriteAction {
    /// Resolves an action name; anything but `create` or `destroy` becomes `Create`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use twitter_facade::FavoriteAction;
    ///
    /// assert_eq!(FavoriteAction::from_name("destroy"), FavoriteAction::Destroy);
    /// assert_eq!(FavoriteAction::from_name("bogus"), FavoriteAction::Create);
    /// ```
    pub fn from_name(name: &str) -> Self {
        match name {
            "create" => FavoriteAction::Create,
            "destroy" => FavoriteAction::Destroy,
            other => {
                warn!("Unknown favorite action '{}', using 'create'", other);
                FavoriteAction::Create
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteAction::Create => "create",
            FavoriteAction::Destroy => "destroy",
        }
    }
}

impl<C: CredentialedClient> Twitter<C> {
    /// Favorites (`create`) or unfavorites (`destroy`) a tweet.
    ///
    /// # Parameters
    ///
    /// - `action`: `create` or `destroy`; any other value is treated as `create`
    /// - `id`: The ID of the tweet
    pub async fn favorite(&self, action: &str, id: &str) -> ResponseEnvelope {
        let action = FavoriteAction::from_name(action);
        info!("Favorite action '{}' on tweet {}", action.as_str(), id);

        let descriptor = RequestDescriptor::post(format!("favorites/{}", action.as_str()))
            .param("id", id)
            .param("include_entities", false);

        self.execute(descriptor, "favorite").await
    }

    /// Posts a status update, optionally as a reply.
    ///
    /// The provider only threads the reply if `text` mentions the author of
    /// the tweet being replied to.
    ///
    /// # Parameters
    ///
    /// - `text`: The text content of the tweet
    /// - `in_reply_to_status_id`: The ID of the tweet to reply to; `None` leaves
    ///   the parameter out of the request entirely
    pub async fn post(&self, text: &str, in_reply_to_status_id: Option<&str>) -> ResponseEnvelope {
        info!("Starting tweet post operation ({} characters)", text.chars().count());

        let mut descriptor = RequestDescriptor::post("statuses/update").param("status", text);
        if let Some(reply_to) = in_reply_to_status_id {
            info!("Posting as a reply to tweet {}", reply_to);
            descriptor = descriptor.param("in_reply_to_status_id", reply_to);
        }

        self.execute(descriptor, "post").await
    }

    /// Deletes one of the account's tweets.
    pub async fn delete(&self, id: &str) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::post(format!("statuses/destroy/{}", id))
            .param("id", id)
            .param("trim_user", true);

        self.execute(descriptor, "delete").await
    }
}
