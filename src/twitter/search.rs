//! Tweet search and lookup for Twitter API.

use super::api::{CredentialedClient, RequestDescriptor};
use super::envelope::ResponseEnvelope;
use super::Twitter;

const DEFAULT_SEARCH_COUNT: u32 = 100;

impl<C: CredentialedClient> Twitter<C> {
    /// Searches recent English-language tweets.
    ///
    /// # Parameters
    ///
    /// - `query`: The search query, using the standard search operators
    /// - `count`: Number of tweets to request (defaults to 100)
    pub async fn search(&self, query: &str, count: Option<u32>) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("search/tweets")
            .param("q", query)
            .param("count", count.unwrap_or(DEFAULT_SEARCH_COUNT))
            .param("lang", "en");

        self.execute(descriptor, "search").await
    }

    /// Fetches a single tweet with its author and entities.
    pub async fn find(&self, id: &str) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("statuses/show")
            .param("id", id)
            .param("trim_user", false)
            .param("include_entities", true);

        self.execute(descriptor, "find").await
    }
}
