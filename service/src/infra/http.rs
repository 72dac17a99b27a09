//! HTTP [`Client`] shared by the infrastructure implementations.

use std::time;

use derive_more::{Display, Error as StdError, From};
use serde::de::DeserializeOwned;
use tracerr::Traced;
use tracing as log;

pub use reqwest::{StatusCode, Url};

/// [`Client`] configuration.
#[derive(Clone, Debug)]
pub struct Config {
    /// Base [`Url`] requests are sent to.
    pub url: Url,

    /// Timeout of a single request, including reading its body.
    pub timeout: time::Duration,
}

/// JSON over HTTP client bound to a single base [`Url`].
///
/// Keeps no per-request state, so overlapping requests are independent.
#[derive(Clone, Debug)]
pub struct Client {
    /// Underlying [`reqwest::Client`].
    inner: reqwest::Client,

    /// Base [`Url`] of this [`Client`].
    url: Url,
}

impl Client {
    /// Creates a new [`Client`] with the provided [`Config`].
    ///
    /// # Errors
    ///
    /// If the underlying TLS backend fails to initialize.
    pub fn new(conf: &Config) -> Result<Self, Traced<Error>> {
        let inner = reqwest::Client::builder()
            .timeout(conf.timeout)
            .build()
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        Ok(Self {
            inner,
            url: conf.url.clone(),
        })
    }

    /// Returns the base [`Url`] of this [`Client`].
    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Sends a `GET` request to the provided `path` (relative to the base
    /// [`Url`]) with the provided `query` and decodes its JSON body.
    ///
    /// # Errors
    ///
    /// If the request fails, its status is not successful or its body cannot
    /// be decoded into a `T`.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &[&str],
        query: &[(&str, &str)],
    ) -> Result<T, Traced<Error>> {
        let mut url = self.url.clone();
        if !path.is_empty() {
            _ = url
                .path_segments_mut()
                .map_err(|()| tracerr::new!(Error::BaseUrl))?
                .pop_if_empty()
                .extend(path);
        }

        log::debug!("GET `{url}`");

        let resp = self
            .inner
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(tracerr::new!(Error::Status(status)));
        }

        let body = resp
            .bytes()
            .await
            .map_err(tracerr::from_and_wrap!(=> Error))?;
        serde_json::from_slice(&body).map_err(tracerr::from_and_wrap!(=> Error))
    }
}

/// Error of a [`Client`] request.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Base [`Url`] cannot have a path appended, e.g. a `data:` URL.
    #[display("base URL cannot be a base")]
    #[from(ignore)]
    BaseUrl,

    /// Request failed to be sent or its body failed to be read.
    #[display("HTTP request failed: {_0}")]
    Request(reqwest::Error),

    /// Response status is not successful.
    #[display("unexpected HTTP status: {_0}")]
    #[from(ignore)]
    Status(#[error(not(source))] StatusCode),

    /// Response body is not the expected JSON.
    #[display("failed to decode HTTP response body: {_0}")]
    Decode(serde_json::Error),
}

impl Error {
    /// Indicates whether this [`Error`] is caused by the request timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Request(e) if e.is_timeout())
    }

    /// Returns the [`StatusCode`] of the unsuccessful response, if any.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status(s) => Some(*s),
            Self::BaseUrl | Self::Request(_) | Self::Decode(_) => None,
        }
    }
}
