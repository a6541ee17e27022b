use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client as ReqwestClient, StatusCode};
use serde::Serialize;

use crate::form_reader::{AuthorizeResponse, FormReader, FormValues, REQUEST_TOKEN_KEY};
use crate::request::{AccessTokenRequest, AddInput, RequestTokenRequest};
use crate::{
    Error, Result, AUTHORIZE_PAGE, ENDPOINT_ADD, ENDPOINT_AUTHORIZE, ENDPOINT_REQUEST_TOKEN, HOST,
    X_ERROR_HEADER,
};

const CONTENT_TYPE_JSON: &str = "application/json; charset=UTF8";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Pocket API client.
///
/// Holds the application's consumer key and a pre-configured
/// `reqwest::Client`. Immutable after construction; a single instance may be
/// shared and invoked from multiple tasks concurrently.
#[derive(Debug, Clone)]
pub struct Client {
    inner: ReqwestClient,
    consumer_key: String,
    base_url: String,
}

impl Client {
    /// Constructs a new `Client` for the given consumer key.
    ///
    /// The inner transport is built with a 5 second total request timeout.
    ///
    /// # Errors
    ///
    /// This method fails when `consumer_key` is empty, or when the TLS
    /// backend of the transport cannot be initialized. No network access
    /// occurs during construction.
    pub fn new<S: Into<String>>(consumer_key: S) -> Result<Self> {
        let inner = ReqwestClient::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::new_with_client(consumer_key, inner)
    }

    /// Constructs a new `Client` with specifying inner `reqwest::Client`.
    ///
    /// The supplied client's own timeout configuration applies instead of
    /// the default 5 second ceiling.
    ///
    /// # Errors
    ///
    /// This method fails when `consumer_key` is empty.
    pub fn new_with_client<S: Into<String>>(consumer_key: S, client: ReqwestClient) -> Result<Self> {
        let consumer_key = consumer_key.into();
        if consumer_key.is_empty() {
            return Err(Error::Validation("consumer key is empty"));
        }

        Ok(Client {
            inner: client,
            consumer_key,
            base_url: HOST.to_string(),
        })
    }

    /// Redirects API calls to a different host, e.g. a local test server.
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Obtains a request token, the first step of the authorization flow.
    ///
    /// The service redirects the user's browser back to `redirect_uri` once
    /// they have approved access; the URI's syntax is not validated here.
    ///
    /// # Errors
    ///
    /// This method fails when `redirect_uri` is empty (no request is made),
    /// on transport errors, on non-200 responses, and when the decoded
    /// response carries no usable `code` field.
    pub async fn get_request_token(&self, redirect_uri: &str) -> Result<String> {
        if redirect_uri.is_empty() {
            return Err(Error::Validation("redirect uri is empty"));
        }

        let inp = RequestTokenRequest {
            consumer_key: &self.consumer_key,
            redirect_uri,
        };

        let values = self.do_http(ENDPOINT_REQUEST_TOKEN, &inp).await?;
        let request_token = values.get_required(REQUEST_TOKEN_KEY)?;

        Ok(request_token.to_string())
    }

    /// Formats the URL the end user must visit to approve access.
    ///
    /// Pure string formatting; no request is made and neither value is
    /// additionally percent-encoded.
    ///
    /// # Errors
    ///
    /// This method fails when either input is empty.
    pub fn get_authorization_url(&self, request_token: &str, redirect_url: &str) -> Result<String> {
        if request_token.is_empty() {
            return Err(Error::Validation("request token is empty"));
        }
        if redirect_url.is_empty() {
            return Err(Error::Validation("redirect url is empty"));
        }

        Ok(format!(
            "{}?request_token={}&redirect_uri={}",
            AUTHORIZE_PAGE, request_token, redirect_url
        ))
    }

    /// Exchanges an authorized request token for a long-lived access token,
    /// the final step of the authorization flow.
    ///
    /// # Errors
    ///
    /// This method fails when `request_token` is empty (no request is made),
    /// on transport errors, on non-200 responses, and when the decoded
    /// response carries no usable `access_token` field.
    pub async fn get_access_token(&self, request_token: &str) -> Result<String> {
        if request_token.is_empty() {
            return Err(Error::Validation("request token is empty"));
        }

        let inp = AccessTokenRequest {
            consumer_key: &self.consumer_key,
            code: request_token,
        };

        let values = self.do_http(ENDPOINT_AUTHORIZE, &inp).await?;
        let resp = AuthorizeResponse::from_values(values)?;

        Ok(resp.access_token)
    }

    /// Saves a bookmark to the authorized user's list.
    ///
    /// Any 200 response counts as success; the response payload is
    /// discarded.
    ///
    /// # Errors
    ///
    /// This method fails when the input is incomplete (no request is made),
    /// on transport errors and on non-200 responses.
    pub async fn add(&self, input: AddInput) -> Result<()> {
        input.validate()?;

        let inp = input.generate_request(&self.consumer_key);

        self.do_http(ENDPOINT_ADD, &inp).await?;

        Ok(())
    }

    /// Issues a POST with a JSON body and decodes the form-encoded response.
    ///
    /// Non-200 statuses carry their error detail in the `X-Error` response
    /// header, not the body.
    async fn do_http<B: Serialize>(&self, endpoint: &str, body: &B) -> Result<FormValues> {
        let body = serde_json::to_vec(body)?;

        let resp = self
            .inner
            .post(format!("{}{}", self.base_url, endpoint))
            .header(CONTENT_TYPE, CONTENT_TYPE_JSON)
            .body(body)
            .send()
            .await?;

        if resp.status() != StatusCode::OK {
            let message = resp
                .headers()
                .get(X_ERROR_HEADER)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_string();
            return Err(Error::RemoteApi {
                status: resp.status(),
                message,
            });
        }

        resp.parse_form_values().await
    }
}
