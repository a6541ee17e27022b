use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;
pub type FormReaderResult<T> = std::result::Result<T, FormReaderError>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid input : {0}")]
    Validation(&'static str),
    #[error("request body encoding failed : {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("request failed : {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API error : {message}")]
    RemoteApi {
        status: reqwest::StatusCode,
        /// Contents of the `X-Error` response header, empty when absent.
        message: String,
    },
    #[error("response decoding failed : {0}")]
    FormReader(#[from] FormReaderError),
}

#[derive(Error, Debug, Clone)]
pub enum FormReaderError {
    #[error("response has malformed format : {0}")]
    Malformed(#[from] serde_urlencoded::de::Error),
    #[error("not found {0} in response")]
    KeyNotFound(&'static str),
    #[error("empty value of {0} in response")]
    EmptyValue(&'static str),
}
