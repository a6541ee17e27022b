/*!
pocket-client: Pocket ♡ reqwest.

# Overview

This library provides a typed client for the [Pocket](https://getpocket.com)
bookmarking service's REST API built on the
[reqwest](https://crates.io/crates/reqwest) crate, covering the three-legged
authorization flow and bookmark submission.

The protocol has an asymmetry this crate preserves: request bodies are JSON,
but success responses are `application/x-www-form-urlencoded` strings, and
error detail for non-200 responses travels in the `X-Error` response header
rather than the body.

# How to use

## Basic usecase 1 - authorizing the application

```no_run
# async fn run() -> pocket_client::Result<()> {
use pocket_client::Client;

// prepare authorization info
let consumer_key = "[CONSUMER_KEY]";
let redirect_uri = "https://example.org/callback";

let client = Client::new(consumer_key)?;

// step 1: acquire the request token
let request_token = client.get_request_token(redirect_uri).await?;

// step 2: let the user approve access in their browser
let url = client.get_authorization_url(&request_token, redirect_uri)?;
println!("please access to: {}", url);

// step 3: once approved, trade the request token for an access token
let access_token = client.get_access_token(&request_token).await?;
println!("your access token is: {}", access_token);
# Ok(())
# }
```

## Basic usecase 2 - saving a bookmark

```no_run
# async fn run() -> pocket_client::Result<()> {
use pocket_client::{AddInput, Client};

let client = Client::new("[CONSUMER_KEY]")?;

let input = AddInput {
    url: "https://www.rust-lang.org".to_string(),
    title: "Rust".to_string(),
    tags: vec!["rust".to_string(), "lang".to_string()],
    access_token: "[ACCESS_TOKEN]".to_string(),
    ..AddInput::default()
};

client.add(input).await?;
# Ok(())
# }
```
*/
mod client;
mod error;
mod form_reader;
mod request;

// exposed to external program
pub use client::Client;
pub use error::{Error, FormReaderError, FormReaderResult, Result};
pub use form_reader::{AuthorizeResponse, FormReader, FormValues};
pub use request::AddInput;

// crate-private constant variables
pub(crate) const HOST: &str = "https://getpocket.com/v3";
pub(crate) const AUTHORIZE_PAGE: &str = "https://getpocket.com/auth/authorize";
pub(crate) const ENDPOINT_REQUEST_TOKEN: &str = "/oauth/request";
pub(crate) const ENDPOINT_AUTHORIZE: &str = "/oauth/authorize";
pub(crate) const ENDPOINT_ADD: &str = "/add";
pub(crate) const X_ERROR_HEADER: &str = "X-Error";
