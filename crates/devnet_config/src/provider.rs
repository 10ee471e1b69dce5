use core::{fmt, num::NonZeroU64};

use alloy_primitives::{Address, U256};
use devnet_chain_l1::{ChainId, Hardfork};

use crate::{
    ConfigError, DerivationPath, ForkConfig, Mining, Mnemonic, NetworkConfig, ValidationError,
    redact::REDACTED,
};

// SAFETY: literal is non-zero
const DEFAULT_BLOCK_GAS_LIMIT: NonZeroU64 =
    unsafe { NonZeroU64::new_unchecked(devnet_defaults::BLOCK_GAS_LIMIT) };

/// A funded test account whose key is derived at `path`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountConfig {
    pub path: DerivationPath,
    pub balance: U256,
}

/// Configuration for the provider, with all defaults applied.
#[derive(Clone)]
pub struct ProviderConfig {
    pub accounts: Vec<AccountConfig>,
    pub allow_blocks_with_same_timestamp: bool,
    pub allow_unlimited_contract_size: bool,
    pub block_gas_limit: NonZeroU64,
    pub chain_id: ChainId,
    pub coinbase: Address,
    pub fork: Option<ForkConfig>,
    pub hardfork: Hardfork,
    /// `None` when the base fee of the forked block is to be used, or when the
    /// hardfork has no EIP-1559 fee market.
    pub initial_base_fee_per_gas: Option<u128>,
    pub logger_enabled: bool,
    pub min_gas_price: u128,
    pub mining: Mining,
    /// Seed phrase from which the accounts' keys are derived.
    pub mnemonic: Mnemonic,
    pub network_id: u64,
    pub passphrase: String,
}

impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let passphrase = if self.passphrase.is_empty() {
            ""
        } else {
            REDACTED
        };

        f.debug_struct("ProviderConfig")
            .field("accounts", &self.accounts)
            .field(
                "allow_blocks_with_same_timestamp",
                &self.allow_blocks_with_same_timestamp,
            )
            .field(
                "allow_unlimited_contract_size",
                &self.allow_unlimited_contract_size,
            )
            .field("block_gas_limit", &self.block_gas_limit)
            .field("chain_id", &self.chain_id)
            .field("coinbase", &self.coinbase)
            .field("fork", &self.fork)
            .field("hardfork", &self.hardfork)
            .field("initial_base_fee_per_gas", &self.initial_base_fee_per_gas)
            .field("logger_enabled", &self.logger_enabled)
            .field("min_gas_price", &self.min_gas_price)
            .field("mining", &self.mining)
            .field("mnemonic", &self.mnemonic)
            .field("network_id", &self.network_id)
            .field("passphrase", &passphrase)
            .finish()
    }
}

impl TryFrom<NetworkConfig> for ProviderConfig {
    type Error = ConfigError;

    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    fn try_from(value: NetworkConfig) -> Result<Self, Self::Error> {
        value.validate()?;

        let mining = value
            .mining
            .as_ref()
            .map(Mining::try_from)
            .transpose()
            .map_err(ValidationError::from)?
            .unwrap_or_default();

        let balance = value.accounts.balance();
        let accounts = value
            .accounts
            .derivation_paths()
            .map_err(ValidationError::from)?
            .into_iter()
            .map(|path| AccountConfig { path, balance })
            .collect::<Vec<_>>();

        let fork = value
            .forking
            .filter(|fork| fork.enabled)
            .map(ForkConfig::from);

        let initial_base_fee_per_gas = if value.hardfork.supports_eip1559() {
            value
                .initial_base_fee_per_gas
                .map(u128::from)
                .or_else(|| {
                    fork.is_none()
                        .then_some(devnet_defaults::INITIAL_BASE_FEE_PER_GAS)
                })
        } else {
            None
        };

        log::debug!(
            "Resolved network with chain ID {} and {} account(s)",
            value.chain_id,
            accounts.len()
        );

        Ok(Self {
            accounts,
            allow_blocks_with_same_timestamp: value.allow_blocks_with_same_timestamp,
            allow_unlimited_contract_size: value.allow_unlimited_contract_size,
            block_gas_limit: value.block_gas_limit.unwrap_or(DEFAULT_BLOCK_GAS_LIMIT),
            chain_id: value.chain_id,
            coinbase: value.coinbase.unwrap_or(devnet_defaults::COINBASE),
            fork,
            hardfork: value.hardfork,
            initial_base_fee_per_gas,
            logger_enabled: value.logging_enabled,
            min_gas_price: value.min_gas_price.map_or(0, u128::from),
            mining,
            mnemonic: value.accounts.mnemonic,
            network_id: value.chain_id,
            passphrase: value.accounts.passphrase.unwrap_or_default(),
        })
    }
}
