//! Stand-ins for remote networks.

use devnet_config::{ForkingConfig, RemoteHeight};

/// A remote network that is always at the same height.
#[derive(Clone, Copy, Debug)]
pub struct StaticRemoteHeight(pub u64);

impl RemoteHeight for StaticRemoteHeight {
    type Error = core::convert::Infallible;

    fn latest_block_number(&self, _fork: &ForkingConfig) -> Result<u64, Self::Error> {
        Ok(self.0)
    }
}

/// Error returned by [`UnreachableRemote`].
#[derive(Debug, thiserror::Error)]
#[error("remote network is unreachable")]
pub struct UnreachableError;

/// A remote network that cannot be reached.
#[derive(Clone, Copy, Debug)]
pub struct UnreachableRemote;

impl RemoteHeight for UnreachableRemote {
    type Error = UnreachableError;

    fn latest_block_number(&self, _fork: &ForkingConfig) -> Result<u64, Self::Error> {
        Err(UnreachableError)
    }
}
