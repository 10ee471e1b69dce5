use core::fmt;

use alloy_primitives::U256;

use crate::{DerivationPath, DerivationPathError, Mnemonic, redact::redacted};

fn default_count() -> u32 {
    devnet_defaults::ACCOUNT_COUNT
}

/// Configuration of the funded test accounts, derived from a seed phrase.
#[derive(Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HdAccountsConfig {
    /// Seed phrase of the HD wallet.
    #[serde(default = "Mnemonic::public_test_phrase")]
    pub mnemonic: Mnemonic,
    /// Path template; the n-th account is derived at `path/(initialIndex + n)`.
    #[serde(default = "DerivationPath::ethereum")]
    pub path: DerivationPath,
    /// Number of accounts to derive.
    #[serde(default = "default_count")]
    pub count: u32,
    /// Index of the first derived account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_index: Option<u32>,
    /// BIP-39 passphrase of the seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub passphrase: Option<String>,
    /// Initial balance of every derived account, in wei.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "crate::decimal::opt"
    )]
    pub accounts_balance: Option<U256>,
}

impl HdAccountsConfig {
    /// Returns the derivation path of every configured account, in order.
    pub fn derivation_paths(&self) -> Result<Vec<DerivationPath>, DerivationPathError> {
        let initial_index = self.initial_index.unwrap_or_default();

        (0..self.count)
            .map(|offset| {
                let index = initial_index.checked_add(offset).ok_or_else(|| {
                    DerivationPathError::IndexOutOfRange(
                        u64::from(initial_index) + u64::from(offset),
                    )
                })?;

                self.path.child(index)
            })
            .collect()
    }

    /// Returns the initial balance of every account, falling back to the
    /// default of 10,000 ether.
    pub fn balance(&self) -> U256 {
        self.accounts_balance
            .unwrap_or(devnet_defaults::ACCOUNT_BALANCE)
    }
}

impl fmt::Debug for HdAccountsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HdAccountsConfig")
            .field("mnemonic", &self.mnemonic)
            .field("path", &self.path)
            .field("count", &self.count)
            .field("initial_index", &self.initial_index)
            .field("passphrase", &redacted(self.passphrase.as_ref()))
            .field("accounts_balance", &self.accounts_balance)
            .finish()
    }
}

impl Default for HdAccountsConfig {
    fn default() -> Self {
        Self {
            mnemonic: Mnemonic::public_test_phrase(),
            path: DerivationPath::ethereum(),
            count: default_count(),
            initial_index: None,
            passphrase: None,
            accounts_balance: None,
        }
    }
}
