use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Response;
use serde::Deserialize;

use crate::{FormReaderError, FormReaderResult, Result};

pub(crate) const REQUEST_TOKEN_KEY: &str = "code";

const ACCESS_TOKEN_KEY: &str = "access_token";

const USERNAME_KEY: &str = "username";

/// Represents response of the access token exchange.
#[derive(Deserialize, Debug)]
pub struct AuthorizeResponse {
    /// Long-lived access token.
    pub access_token: String,
    /// Account the token was issued for.
    #[serde(default)]
    pub username: String,
    /// Other contents
    #[serde(flatten)]
    pub remain: HashMap<String, String>,
}

impl AuthorizeResponse {
    /// Extracts the authorize response from decoded form values.
    ///
    /// The access token must be present and non-empty; the username is
    /// optional and defaults to the empty string.
    pub fn from_values(values: FormValues) -> FormReaderResult<Self> {
        let mut values = values.0;
        let access_token = match values.remove(ACCESS_TOKEN_KEY) {
            None => return Err(FormReaderError::KeyNotFound(ACCESS_TOKEN_KEY)),
            Some(v) if v.is_empty() => return Err(FormReaderError::EmptyValue(ACCESS_TOKEN_KEY)),
            Some(v) => v,
        };
        let username = values.remove(USERNAME_KEY).unwrap_or_default();
        Ok(AuthorizeResponse {
            access_token,
            username,
            remain: values,
        })
    }
}

/// Field-to-value mapping decoded from a form-encoded response body.
#[derive(Debug, Default)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Returns the value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns the value of `key`, requiring it to be present and non-empty.
    pub fn get_required(&self, key: &'static str) -> FormReaderResult<&str> {
        match self.0.get(key) {
            None => Err(FormReaderError::KeyNotFound(key)),
            Some(v) if v.is_empty() => Err(FormReaderError::EmptyValue(key)),
            Some(v) => Ok(v),
        }
    }
}

/// Add parse_form_values / parse_authorize_response features to reqwest::Response.
// this trait is sealed
#[async_trait(?Send)]
pub trait FormReader: private::Sealed {
    async fn parse_form_values(self) -> Result<FormValues>;
    async fn parse_authorize_response(self) -> Result<AuthorizeResponse>;
}

#[async_trait(?Send)]
impl FormReader for Response {
    async fn parse_form_values(self) -> Result<FormValues> {
        let text = self.text().await?;
        Ok(read_form_values(&text)?)
    }

    async fn parse_authorize_response(self) -> Result<AuthorizeResponse> {
        let text = self.text().await?;
        Ok(read_authorize_response(&text)?)
    }
}

pub(crate) fn read_form_values(text: &str) -> FormReaderResult<FormValues> {
    let destructured = serde_urlencoded::from_str::<HashMap<String, String>>(text)?;
    Ok(FormValues(destructured))
}

pub(crate) fn read_authorize_response(text: &str) -> FormReaderResult<AuthorizeResponse> {
    AuthorizeResponse::from_values(read_form_values(text)?)
}

mod private {
    use reqwest::Response;

    pub trait Sealed {}
    impl Sealed for Response {}
}

#[cfg(test)]
mod test {

    use super::*;

    #[test]
    fn parse_values_typical() {
        let resp_str_sample = "code=dcba4321-dcba-4321-dcba-4321dcba4321&state=none";
        let values = read_form_values(resp_str_sample).unwrap();
        assert_eq!(
            values.get_required(REQUEST_TOKEN_KEY).unwrap(),
            "dcba4321-dcba-4321-dcba-4321dcba4321"
        );
        assert_eq!(values.get("state"), Some("none"));
        assert_eq!(values.get("missing"), None);
    }

    #[test]
    fn parse_values_percent_encoded() {
        let resp_str_sample = "code=qwe%2Drty&note=hello%20world";
        let values = read_form_values(resp_str_sample).unwrap();
        assert_eq!(values.get_required(REQUEST_TOKEN_KEY).unwrap(), "qwe-rty");
        assert_eq!(values.get("note"), Some("hello world"));
    }

    #[test]
    fn parse_values_empty_body() {
        let values = read_form_values("").unwrap();
        let parsed = values.get_required(REQUEST_TOKEN_KEY);
        assert!(parsed.is_err());
        if let Err(FormReaderError::KeyNotFound(key)) = parsed {
            assert_eq!(key, REQUEST_TOKEN_KEY);
        } else {
            panic!("expected KeyNotFound");
        }
    }

    #[test]
    fn parse_values_empty_value() {
        let values = read_form_values("code=").unwrap();
        let parsed = values.get_required(REQUEST_TOKEN_KEY);
        assert!(parsed.is_err());
        if let Err(FormReaderError::EmptyValue(key)) = parsed {
            assert_eq!(key, REQUEST_TOKEN_KEY);
        } else {
            panic!("expected EmptyValue");
        }
    }

    #[test]
    fn parse_authorize_typical() {
        let resp_str_sample = "access_token=5678defg-5678-defg-5678-defg5678defg&username=pocketuser";
        for parsed in &[
            read_authorize_response(resp_str_sample).unwrap(),
            serde_urlencoded::from_str::<AuthorizeResponse>(resp_str_sample).unwrap(),
        ] {
            assert_eq!(parsed.access_token, "5678defg-5678-defg-5678-defg5678defg");
            assert_eq!(parsed.username, "pocketuser");
            assert_eq!(parsed.remain.len(), 0);
        }
    }

    #[test]
    fn parse_authorize_extra_fields() {
        let resp_str_sample = "access_token=abc&state=confirmed";
        let parsed = read_authorize_response(resp_str_sample).unwrap();
        assert_eq!(parsed.access_token, "abc");
        assert_eq!(parsed.username, "");
        assert_eq!(parsed.remain.len(), 1);
        let state = parsed.remain.get("state").unwrap();
        assert_eq!(state, "confirmed");
    }

    #[test]
    fn parse_authorize_token_notfound() {
        let resp_str_sample = "username=pocketuser";
        let parsed = read_authorize_response(resp_str_sample);
        assert!(parsed.is_err());
        if let Err(FormReaderError::KeyNotFound(key)) = parsed {
            assert_eq!(key, ACCESS_TOKEN_KEY);
        } else {
            panic!("expected KeyNotFound");
        }
    }

    #[test]
    fn parse_authorize_token_empty() {
        let resp_str_sample = "access_token=&username=pocketuser";
        let parsed = read_authorize_response(resp_str_sample);
        assert!(parsed.is_err());
        if let Err(FormReaderError::EmptyValue(key)) = parsed {
            assert_eq!(key, ACCESS_TOKEN_KEY);
        } else {
            panic!("expected EmptyValue");
        }
    }
}
