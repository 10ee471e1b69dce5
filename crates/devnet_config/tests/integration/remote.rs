use std::cell::RefCell;

use devnet_config::{
    ForkingConfig, MAINNET_FORK_BLOCK_NUMBER, MAINNET_FORK_URL, NetworkConfig, RemoteHeight,
    ValidationError, hardhat_network,
};
use devnet_test_utils::remote::{StaticRemoteHeight, UnreachableRemote};
use indexmap::IndexMap;

/// Remembers the headers of the fork it was asked about.
#[derive(Default)]
struct HeaderRecorder {
    headers: RefCell<Option<IndexMap<String, String>>>,
}

impl RemoteHeight for HeaderRecorder {
    type Error = core::convert::Infallible;

    fn latest_block_number(&self, fork: &ForkingConfig) -> Result<u64, Self::Error> {
        self.headers.replace(fork.http_headers.clone());

        Ok(u64::MAX)
    }
}

#[test]
fn pinned_block_below_remote_height_passes() -> anyhow::Result<()> {
    let network = hardhat_network();

    network.check_fork_block_number(&StaticRemoteHeight(MAINNET_FORK_BLOCK_NUMBER))?;
    network.check_fork_block_number(&StaticRemoteHeight(20_000_000))?;

    Ok(())
}

#[test]
fn pinned_block_above_remote_height_fails() {
    let network = hardhat_network();

    let result = network.check_fork_block_number(&StaticRemoteHeight(16_000_000));

    assert!(matches!(
        result,
        Err(ValidationError::ForkBlockNumberExceedsRemote {
            block_number: MAINNET_FORK_BLOCK_NUMBER,
            latest: 16_000_000,
        })
    ));
}

#[test]
fn fork_headers_reach_the_remote() -> anyhow::Result<()> {
    let headers = IndexMap::from([("Authorization".to_owned(), "Bearer token".to_owned())]);
    let network = NetworkConfig {
        forking: Some(ForkingConfig {
            http_headers: Some(headers.clone()),
            ..hardhat_network().forking.expect("profile forks mainnet")
        }),
        ..hardhat_network()
    };

    let remote = HeaderRecorder::default();
    network.check_fork_block_number(&remote)?;

    assert_eq!(remote.headers.into_inner(), Some(headers));

    Ok(())
}

#[test]
fn unreachable_remote_is_reported() {
    let network = hardhat_network();

    let error = network
        .check_fork_block_number(&UnreachableRemote)
        .expect_err("remote is unreachable");

    assert!(matches!(error, ValidationError::RemoteHeight(_)));
    assert!(!error.to_string().contains(MAINNET_FORK_URL));
}

#[test]
fn unpinned_or_disabled_fork_skips_remote() -> anyhow::Result<()> {
    let unpinned = NetworkConfig {
        forking: Some(ForkingConfig {
            block_number: None,
            ..hardhat_network().forking.expect("profile forks mainnet")
        }),
        ..hardhat_network()
    };
    unpinned.check_fork_block_number(&UnreachableRemote)?;

    let disabled = NetworkConfig {
        forking: Some(ForkingConfig {
            enabled: false,
            ..hardhat_network().forking.expect("profile forks mainnet")
        }),
        ..hardhat_network()
    };
    disabled.check_fork_block_number(&UnreachableRemote)?;

    NetworkConfig::default().check_fork_block_number(&UnreachableRemote)?;

    Ok(())
}
