use serde::Serialize;

use crate::{Error, Result};

/// Body of a request token issuance call.
#[derive(Serialize, Debug)]
pub(crate) struct RequestTokenRequest<'a> {
    pub consumer_key: &'a str,
    #[serde(rename = "redirectUri")]
    pub redirect_uri: &'a str,
}

/// Body of an access token exchange call.
#[derive(Serialize, Debug)]
pub(crate) struct AccessTokenRequest<'a> {
    pub consumer_key: &'a str,
    pub code: &'a str,
}

/// Body of a bookmark submission call.
#[derive(Serialize, Debug)]
pub(crate) struct AddRequest<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub tags: String,
    pub tweet_id: u64,
    pub consumer_key: &'a str,
    pub access_token: &'a str,
}

/// A bookmark submission.
#[derive(Debug, Clone, Default)]
pub struct AddInput {
    /// Address of the page to save. Required.
    pub url: String,
    /// Display title. The service falls back to the page title when empty.
    pub title: String,
    /// Tags to attach; joined with commas on the wire.
    pub tags: Vec<String>,
    /// Tweet the save is attributed to, when saving from a tweet.
    pub tweet_id: Option<u64>,
    /// Token obtained through the authorization flow. Required.
    pub access_token: String,
}

impl AddInput {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.url.is_empty() {
            return Err(Error::Validation("required url value is empty"));
        }

        if self.access_token.is_empty() {
            return Err(Error::Validation("access token is empty"));
        }

        Ok(())
    }

    pub(crate) fn generate_request<'a>(&'a self, consumer_key: &'a str) -> AddRequest<'a> {
        AddRequest {
            url: &self.url,
            title: &self.title,
            tags: self.tags.join(","),
            tweet_id: self.tweet_id.unwrap_or(0),
            consumer_key,
            access_token: &self.access_token,
        }
    }
}
