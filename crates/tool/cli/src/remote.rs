//! Retrieval of a remote network's height over JSON-RPC.

use std::time::Duration;

use alloy_primitives::U64;
use devnet_config::{ForkingConfig, RemoteHeight};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, InvalidHeaderName, InvalidHeaderValue};
use serde::{Deserialize, Serialize};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An error that occurs when querying a remote network's height.
#[derive(Debug, thiserror::Error)]
pub enum RemoteHeightError {
    /// The request could not be sent or the response could not be decoded.
    #[error(transparent)]
    Http(reqwest::Error),
    /// A configured HTTP header has an invalid name.
    #[error(transparent)]
    InvalidHeaderName(#[from] InvalidHeaderName),
    /// A configured HTTP header has an invalid value.
    #[error(transparent)]
    InvalidHeaderValue(#[from] InvalidHeaderValue),
    /// The node responded with a JSON-RPC error.
    #[error("JSON-RPC error {code}: {message}")]
    Rpc { code: i64, message: String },
    /// The response contains neither a result nor an error.
    #[error("JSON-RPC response contains neither a result nor an error")]
    MissingResult,
}

impl From<reqwest::Error> for RemoteHeightError {
    fn from(error: reqwest::Error) -> Self {
        // Node URLs often embed API keys.
        Self::Http(error.without_url())
    }
}

#[derive(Serialize)]
struct Request<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: [(); 0],
}

#[derive(Deserialize)]
struct ErrorObject {
    code: i64,
    message: String,
}

#[derive(Deserialize)]
struct Response {
    result: Option<U64>,
    error: Option<ErrorObject>,
}

/// Queries `eth_blockNumber` of the remote network with a blocking HTTP
/// client.
pub struct JsonRpcRemoteHeight {
    client: reqwest::blocking::Client,
}

impl JsonRpcRemoteHeight {
    /// Constructs a new instance.
    pub fn new() -> Result<Self, RemoteHeightError> {
        Self::with_builder(reqwest::blocking::Client::builder())
    }

    fn with_builder(
        builder: reqwest::blocking::ClientBuilder,
    ) -> Result<Self, RemoteHeightError> {
        let client = builder.timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self { client })
    }
}

fn header_map(fork: &ForkingConfig) -> Result<HeaderMap, RemoteHeightError> {
    let mut headers = HeaderMap::new();
    for (name, value) in fork.http_headers.iter().flatten() {
        headers.insert(
            HeaderName::from_bytes(name.as_bytes())?,
            HeaderValue::from_str(value)?,
        );
    }

    Ok(headers)
}

impl RemoteHeight for JsonRpcRemoteHeight {
    type Error = RemoteHeightError;

    fn latest_block_number(&self, fork: &ForkingConfig) -> Result<u64, Self::Error> {
        log::debug!("Requesting eth_blockNumber from remote network");

        let response: Response = self
            .client
            .post(&fork.url)
            .headers(header_map(fork)?)
            .json(&Request {
                jsonrpc: "2.0",
                id: 1,
                method: "eth_blockNumber",
                params: [],
            })
            .send()?
            .error_for_status()?
            .json()?;

        if let Some(ErrorObject { code, message }) = response.error {
            return Err(RemoteHeightError::Rpc { code, message });
        }

        response
            .result
            .map(|block_number| block_number.as_limbs()[0])
            .ok_or(RemoteHeightError::MissingResult)
    }
}
