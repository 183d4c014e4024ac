//! Timeline operations: the account's own tweets and its home timeline.

use super::api::{CredentialedClient, RequestDescriptor};
use super::envelope::ResponseEnvelope;
use super::Twitter;

const DEFAULT_USER_TIMELINE_COUNT: u32 = 10;
const DEFAULT_HOME_TIMELINE_COUNT: u32 = 20;

impl<C: CredentialedClient> Twitter<C> {
    /// Fetches the most recent tweets posted by the authenticated account,
    /// retweets included.
    ///
    /// # Parameters
    ///
    /// - `count`: Number of tweets to request (defaults to 10)
    pub async fn get_timeline(&self, count: Option<u32>) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("statuses/user_timeline")
            .param("screen_name", self.session().screen_name())
            .param("count", count.unwrap_or(DEFAULT_USER_TIMELINE_COUNT))
            .param("include_entities", 1)
            .param("include_rts", 1);

        self.execute(descriptor, "get_timeline").await
    }

    /// Fetches the home timeline: tweets from the account and everyone it follows.
    ///
    /// # Parameters
    ///
    /// - `count`: Number of tweets to request (defaults to 20)
    pub async fn home_timeline(&self, count: Option<u32>) -> ResponseEnvelope {
        let descriptor = RequestDescriptor::get("statuses/home_timeline")
            .param("count", count.unwrap_or(DEFAULT_HOME_TIMELINE_COUNT))
            .param("include_entities", true);

        self.execute(descriptor, "home_timeline").await
    }
}
