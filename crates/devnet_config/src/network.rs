use core::num::NonZeroU64;

use alloy_primitives::Address;
use devnet_chain_l1::{ChainId, Hardfork, chains::l1_chain_config};

use crate::{
    ForkingConfig, HdAccountsConfig, Interval, MiningConfig, RemoteHeight, ValidationError,
};

const SUPPORTED_FORK_URL_SCHEMES: [&str; 4] = ["http", "https", "ws", "wss"];

fn default_chain_id() -> ChainId {
    devnet_defaults::CHAIN_ID
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Parameters of one simulated network profile.
///
/// The record is read-only after loading. Fields that are absent in the
/// configuration file stay `None` here; defaults are applied when resolving
/// into a [`ProviderConfig`](crate::ProviderConfig).
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NetworkConfig {
    /// The protocol rule-set revision to emulate.
    #[serde(default)]
    pub hardfork: Hardfork,
    /// The chain ID reported to clients and used for replay protection.
    #[serde(default = "default_chain_id")]
    pub chain_id: ChainId,
    /// The remote network whose state is the simulation's starting point.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forking: Option<ForkingConfig>,
    /// Base fee of the first block. Zero allows transactions with a zero gas
    /// price.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_base_fee_per_gas: Option<u64>,
    /// The deterministic, funded test accounts.
    #[serde(default)]
    pub accounts: HdAccountsConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_gas_limit: Option<NonZeroU64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_gas_price: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coinbase: Option<Address>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_unlimited_contract_size: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub allow_blocks_with_same_timestamp: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub logging_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mining: Option<MiningConfig>,
}

impl NetworkConfig {
    /// Returns the forking configuration, if forking is enabled.
    pub fn enabled_fork(&self) -> Option<&ForkingConfig> {
        self.forking.as_ref().filter(|fork| fork.enabled)
    }

    /// Checks the consistency of the profile.
    ///
    /// Findings that don't prevent running the simulation are logged as
    /// warnings.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.chain_id == 0 {
            return Err(ValidationError::ZeroChainId);
        }

        if self.initial_base_fee_per_gas.is_some() && !self.hardfork.supports_eip1559() {
            return Err(ValidationError::BaseFeeRequiresLondon {
                hardfork: self.hardfork,
            });
        }

        if let Some(mining) = &self.mining {
            Option::<Interval>::try_from(&mining.interval)?;
        }

        if let Some(fork) = self.enabled_fork() {
            let url = url::Url::parse(&fork.url)?;
            if !SUPPORTED_FORK_URL_SCHEMES.contains(&url.scheme()) {
                return Err(ValidationError::UnsupportedForkUrlScheme(
                    url.scheme().to_owned(),
                ));
            }

            match fork.block_number {
                Some(block_number) => self.warn_on_stale_hardfork(block_number),
                None => log::warn!(
                    "Forking without a block number; the simulation's starting point changes between runs"
                ),
            }
        }

        self.accounts.derivation_paths()?;
        if self.accounts.count == 0 {
            log::warn!("No test accounts are derived because `accounts.count` is zero");
        }

        if let Some(chain_config) = l1_chain_config(self.chain_id) {
            if !chain_config.hardfork_activations.contains(&self.hardfork) {
                log::warn!(
                    "Hardfork {} was never active on {} (chain ID {})",
                    self.hardfork,
                    chain_config.name,
                    self.chain_id
                );
            }
        }

        Ok(())
    }

    fn warn_on_stale_hardfork(&self, block_number: u64) {
        if let Some((chain_name, remote_hardfork)) = self.stale_hardfork(block_number) {
            log::warn!(
                "Hardfork {} predates {remote_hardfork}, which is active on {chain_name} at fork block {block_number}",
                self.hardfork,
            );
        }
    }

    /// Returns the name of the known chain and the hardfork active at
    /// `block_number`, if that hardfork is newer than the configured one.
    fn stale_hardfork(&self, block_number: u64) -> Option<(&'static str, Hardfork)> {
        let chain_config = l1_chain_config(self.chain_id)?;

        chain_config
            .hardfork_activations
            .hardfork_at_block_number(block_number)
            .filter(|remote_hardfork| self.hardfork < *remote_hardfork)
            .map(|remote_hardfork| (chain_config.name.as_str(), remote_hardfork))
    }

    /// Checks that the pinned fork block exists on the remote network.
    ///
    /// Succeeds without contacting the remote network when forking is
    /// disabled or no block number is pinned.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
    pub fn check_fork_block_number<RemoteT: RemoteHeight>(
        &self,
        remote: &RemoteT,
    ) -> Result<(), ValidationError> {
        let Some((fork, block_number)) = self
            .enabled_fork()
            .and_then(|fork| fork.block_number.map(|number| (fork, number)))
        else {
            log::debug!("No pinned fork block to check");
            return Ok(());
        };

        let latest = remote
            .latest_block_number(fork)
            .map_err(|error| ValidationError::RemoteHeight(error.to_string()))?;

        log::debug!("Remote network is at block {latest}, fork is pinned at {block_number}");

        if block_number > latest {
            Err(ValidationError::ForkBlockNumberExceedsRemote {
                block_number,
                latest,
            })
        } else {
            Ok(())
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            hardfork: Hardfork::default(),
            chain_id: default_chain_id(),
            forking: None,
            initial_base_fee_per_gas: None,
            accounts: HdAccountsConfig::default(),
            block_gas_limit: None,
            min_gas_price: None,
            coinbase: None,
            allow_unlimited_contract_size: false,
            allow_blocks_with_same_timestamp: false,
            logging_enabled: false,
            mining: None,
        }
    }
}
