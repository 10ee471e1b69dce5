//! Default values of the simulated network configuration.

use alloy_primitives::{Address, U256, address, uint};

/// The directory in which remote state of forked networks is cached.
pub const CACHE_DIR: &str = "./devnet-cache";

/// The name of the network profile that runs the in-process simulator.
pub const NETWORK_NAME: &str = "hardhat";

/// Chain ID of a local network that does not fork a remote one.
pub const CHAIN_ID: u64 = 31_337;

/// The publicly known test mnemonic.
///
/// Every account derived from this phrase has a published secret key. It must
/// never hold real funds.
pub const MNEMONIC: &str = "test test test test test test test test test test test junk";

/// BIP-44 path of the first Ethereum account, without the address index.
pub const HD_PATH: &str = "m/44'/60'/0'/0";

/// Number of accounts derived from the mnemonic when none is configured.
pub const ACCOUNT_COUNT: u32 = 20;

/// Balance of each derived account: 10,000 ether.
pub const ACCOUNT_BALANCE: U256 = uint!(10_000_000_000_000_000_000_000_U256);

/// Block gas limit of the simulated network.
pub const BLOCK_GAS_LIMIT: u64 = 30_000_000;

/// Base fee of the genesis block of a non-forked network: 1 gwei.
pub const INITIAL_BASE_FEE_PER_GAS: u128 = 1_000_000_000;

/// Beneficiary of mined blocks.
pub const COINBASE: Address = address!("0xc014ba5ec014ba5ec014ba5ec014ba5ec014ba5e");
