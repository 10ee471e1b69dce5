//! Configuration of simulated networks.
//!
//! A settings file declares one or more network profiles under a `networks`
//! mapping. Each profile is a [`NetworkConfig`]: the hardfork to emulate, the
//! chain ID, an optional remote network to fork, the initial base fee, and the
//! HD wallet from which funded test accounts are derived.
//!
//! Profiles are loaded with [`HardhatConfig::load`], checked with
//! [`NetworkConfig::validate`], and resolved into a [`ProviderConfig`] with
//! all defaults applied.

mod accounts;
mod decimal;
mod derivation;
mod error;
mod fork;
mod hardhat;
mod mining;
mod mnemonic;
mod network;
mod profile;
mod provider;
mod redact;

pub use devnet_chain_l1::{ChainId, Hardfork};

pub use self::{
    accounts::HdAccountsConfig,
    derivation::{ChildIndex, DerivationPath, DerivationPathError},
    error::{ConfigError, ValidationError},
    fork::{ForkConfig, ForkingConfig, RemoteHeight},
    hardhat::{ConfigFormat, HardhatConfig},
    mining::{
        Interval, IntervalConfig, IntervalConfigConversionError, MemPool, MemPoolConfig,
        MineOrdering, Mining, MiningConfig,
    },
    mnemonic::{Mnemonic, MnemonicError},
    network::NetworkConfig,
    profile::{MAINNET_FORK_BLOCK_NUMBER, MAINNET_FORK_URL, hardhat_network},
    provider::{AccountConfig, ProviderConfig},
};
