use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// The only error returned by [`crate::Api`].
///
/// Wraps whatever the transport reported (connect failure, non-2xx status,
/// undecodable body) together with the upstream status code, when there was
/// one, and the most useful message available.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct Error {
    message: String,
    status_code: Option<StatusCode>,
    #[source]
    source: reqwest::Error,
}

/// Error body returned by the Published-Data API, e.g.
/// `{"code": 0, "message": "User \"foo\" not found."}`.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl Error {
    /// Normalize a transport failure.
    ///
    /// `body` is the raw error response body, if the upstream produced a
    /// response at all. A non-empty `message` field in it wins over the
    /// transport's own message; anything else falls back to the latter.
    pub fn from_failure(source: reqwest::Error, body: Option<&[u8]>) -> Self {
        let status_code = source.status();
        let message = body
            .and_then(|body| serde_json::from_slice::<ErrorBody>(body).ok())
            .and_then(|body| body.message)
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| source.to_string());
        Self {
            message,
            status_code,
            source,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Present only when the upstream answered with an HTTP response.
    pub fn status_code(&self) -> Option<StatusCode> {
        self.status_code
    }

    pub fn original_error(&self) -> &reqwest::Error {
        &self.source
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code == Some(StatusCode::NOT_FOUND)
    }
}

impl From<reqwest::Error> for Error {
    fn from(source: reqwest::Error) -> Self {
        Self::from_failure(source, None)
    }
}

pub type Result<T> = std::result::Result<T, Error>;
