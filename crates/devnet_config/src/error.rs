use std::{io, path::PathBuf};

use devnet_chain_l1::Hardfork;

use crate::{DerivationPathError, IntervalConfigConversionError};

/// An error that occurs when a network profile is inconsistent.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    /// The chain ID is zero.
    #[error("Chain ID must be a positive integer")]
    ZeroChainId,
    /// An initial base fee is configured for a hardfork without EIP-1559.
    #[error("initialBaseFeePerGas is only valid for hardforks with EIP-1559, found {hardfork}")]
    BaseFeeRequiresLondon {
        /// The configured hardfork.
        hardfork: Hardfork,
    },
    /// The fork URL cannot be parsed.
    #[error("Invalid fork URL: {0}")]
    InvalidForkUrl(#[from] url::ParseError),
    /// The fork URL does not use an HTTP or WebSocket scheme.
    #[error("Unsupported fork URL scheme `{0}`, expected one of http, https, ws, wss")]
    UnsupportedForkUrlScheme(String),
    /// The mining interval is invalid.
    #[error(transparent)]
    Interval(#[from] IntervalConfigConversionError),
    /// The test accounts' derivation paths cannot be constructed.
    #[error("Invalid test accounts: {0}")]
    DerivationPath(#[from] DerivationPathError),
    /// The pinned fork block is beyond the remote network's latest block.
    #[error(
        "Fork block number {block_number} is greater than the latest block number {latest} of the remote network"
    )]
    ForkBlockNumberExceedsRemote {
        /// The configured fork block number.
        block_number: u64,
        /// The remote network's latest block number.
        latest: u64,
    },
    /// The remote network's height could not be retrieved.
    #[error("Failed to retrieve the remote network's latest block number: {0}")]
    RemoteHeight(String),
}

/// An error that occurs when loading or resolving a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file cannot be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A JSON configuration cannot be (de)serialized.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    /// A TOML configuration cannot be deserialized.
    #[error(transparent)]
    TomlDe(#[from] toml::de::Error),
    /// A configuration cannot be serialized to TOML.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
    /// The file extension is neither `.toml` nor `.json`.
    #[error("Unsupported configuration file format: {0}")]
    UnsupportedFormat(PathBuf),
    /// No network profile with the requested name exists.
    #[error("Unknown network: {0}")]
    UnknownNetwork(String),
    /// The network profile is inconsistent.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
