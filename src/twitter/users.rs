//! User lookups and the account's followers list.

use super::api::{CredentialedClient, RequestDescriptor};
use super::envelope::ResponseEnvelope;
use super::Twitter;

/// User ids for a bulk lookup, either already comma-joined or as a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserIds {
    Joined(String),
    List(Vec<String>),
}

impl UserIds {
    /// Comma-joins the ids, keeping their order and any duplicates.
    pub fn joined(&self) -> String {
        match self {
            UserIds::Joined(ids) => ids.clone(),
            UserIds::List(ids) => ids.join(","),
        }
    }
}

impl From<&str> for UserIds {
    fn from(ids: &str) -> Self {
        UserIds::Joined(ids.to_string())
    }
}

impl From<String> for UserIds {
    fn from(ids: String) -> Self {
        UserIds::Joined(ids)
    }
}

impl From<Vec<String>> for UserIds {
    fn from(ids: Vec<String>) -> Self {
        UserIds::List(ids)
    }
}

impl From<Vec<&str>> for UserIds {
    fn from(ids: Vec<&str>) -> Self {
        UserIds::List(ids.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for UserIds {
    fn from(ids: &[&str]) -> Self {
        UserIds::List(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for UserIds {
    fn from(ids: [&str; N]) -> Self {
        UserIds::List(ids.iter().map(|id| id.to_string()).collect())
    }
}

impl<C: CredentialedClient> Twitter<C> {
    /// Lists the followers of the authenticated account.
    pub async fn followers(&self) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("followers/list")
            .param("screen_name", self.session().screen_name());

        self.execute(descriptor, "followers").await
    }

    /// Looks up several users at once by numeric id.
    ///
    /// # Parameters
    ///
    /// - `user_ids`: A comma-separated string of ids or a list of ids
    pub async fn users(&self, user_ids: impl Into<UserIds>) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("users/lookup")
            .param("user_id", user_ids.into().joined())
            .param("include_entities", true);

        self.execute(descriptor, "users").await
    }

    /// Fetches the profile of one user by screen name.
    pub async fn user(&self, username: &str) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("users/show")
            .param("screen_name", username)
            .param("include_entities", true);

        self.execute(descriptor, "user").await
    }
}
