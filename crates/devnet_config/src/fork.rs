use core::fmt;
use std::path::PathBuf;

use indexmap::IndexMap;

use crate::redact::RedactedHeaders;

fn default_enabled() -> bool {
    true
}

fn is_enabled(enabled: &bool) -> bool {
    *enabled
}

/// Forking section of a network profile: the remote network whose state is
/// the starting point of the simulation.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ForkingConfig {
    /// JSON-RPC endpoint of the remote network.
    pub url: String,
    /// Height at which the remote state is pinned. When absent, the latest
    /// block at start-up is used and runs are not reproducible.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_number: Option<u64>,
    /// Whether forking is enabled.
    #[serde(default = "default_enabled", skip_serializing_if = "is_enabled")]
    pub enabled: bool,
    /// Headers sent with every request to the remote network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<IndexMap<String, String>>,
}

impl fmt::Debug for ForkingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForkingConfig")
            .field("url", &self.url)
            .field("block_number", &self.block_number)
            .field("enabled", &self.enabled)
            .field("http_headers", &self.http_headers.as_ref().map(RedactedHeaders))
            .finish()
    }
}

/// Configuration for forking a blockchain
#[derive(Clone, PartialEq, Eq)]
pub struct ForkConfig {
    pub block_number: Option<u64>,
    pub cache_dir: PathBuf,
    pub http_headers: Option<IndexMap<String, String>>,
    pub url: String,
}

impl From<ForkingConfig> for ForkConfig {
    fn from(value: ForkingConfig) -> Self {
        Self {
            block_number: value.block_number,
            cache_dir: PathBuf::from(devnet_defaults::CACHE_DIR),
            http_headers: value.http_headers,
            url: value.url,
        }
    }
}

impl fmt::Debug for ForkConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForkConfig")
            .field("block_number", &self.block_number)
            .field("cache_dir", &self.cache_dir)
            .field("http_headers", &self.http_headers.as_ref().map(RedactedHeaders))
            .field("url", &self.url)
            .finish()
    }
}

/// A source of the latest block number of a remote network.
pub trait RemoteHeight {
    /// The type of error returned when the height cannot be retrieved.
    type Error: std::error::Error;

    /// Retrieves the number of the latest block of the forked network,
    /// sending the fork's HTTP headers with the request.
    fn latest_block_number(&self, fork: &ForkingConfig) -> Result<u64, Self::Error>;
}
