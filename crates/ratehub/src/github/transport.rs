use crate::prelude::*;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, LINK, USER_AGENT};
use serde::de::DeserializeOwned;

/// A response reduced to what the catalog reads from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
    /// Value of the `Link` header, if any
    pub link: Option<String>,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turn a non-success response into [`Error::Transport`]
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::Transport {
                status: self.status,
                message: self.body,
            })
        }
    }

    pub fn json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
        serde_json::from_str(&self.body).map_err(|e| Error::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

/// One GET request per call, no retries
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn get(&self, url: &str) -> Result<RawResponse, Error>;
}

/// Transport backed by reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, Error> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("ratehub/", env!("CARGO_PKG_VERSION"))),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| Error::Network(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<RawResponse, Error> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Failed to send request to {url}: {e}")))?;

        let status = response.status().as_u16();
        let link = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("Failed to read response from {url}: {e}")))?;

        Ok(RawResponse { status, body, link })
    }
}
