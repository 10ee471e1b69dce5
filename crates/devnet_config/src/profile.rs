//! The `hardhat` network profile: a London-rules simulation of Ethereum
//! mainnet, forked at a pinned block, with zero base fee and ten accounts
//! derived from the public test mnemonic.

use devnet_chain_l1::{Hardfork, chains::L1_MAINNET_CHAIN_ID};
use indexmap::IndexMap;

use crate::{DerivationPath, ForkingConfig, HardhatConfig, HdAccountsConfig, Mnemonic, NetworkConfig};

/// Public JSON-RPC endpoint of Ethereum mainnet from which state is forked.
pub const MAINNET_FORK_URL: &str = "https://eth.public-rpc.com";

/// Mainnet block at which the forked state is pinned.
pub const MAINNET_FORK_BLOCK_NUMBER: u64 = 16_727_000;

const ACCOUNT_COUNT: u32 = 10;

/// Returns the `hardhat` network profile.
///
/// The accounts are derived from the public test mnemonic; their keys are
/// published and must never hold real funds.
pub fn hardhat_network() -> NetworkConfig {
    NetworkConfig {
        hardfork: Hardfork::London,
        chain_id: L1_MAINNET_CHAIN_ID,
        forking: Some(ForkingConfig {
            url: MAINNET_FORK_URL.to_owned(),
            block_number: Some(MAINNET_FORK_BLOCK_NUMBER),
            enabled: true,
            http_headers: None,
        }),
        // Base fee of 0 allows use of 0 gas price when testing
        initial_base_fee_per_gas: Some(0),
        accounts: HdAccountsConfig {
            mnemonic: Mnemonic::public_test_phrase(),
            path: DerivationPath::ethereum_account(),
            count: ACCOUNT_COUNT,
            initial_index: None,
            passphrase: None,
            accounts_balance: None,
        },
        ..NetworkConfig::default()
    }
}

impl HardhatConfig {
    /// Returns the built-in settings object, holding only the `hardhat`
    /// network profile.
    pub fn builtin() -> Self {
        Self {
            networks: IndexMap::from([(
                devnet_defaults::NETWORK_NAME.to_owned(),
                hardhat_network(),
            )]),
        }
    }
}
