//! Ethereum L1 chain types

pub mod chains;
mod hardfork;

pub use self::hardfork::{ConversionError, Hardfork, name};

/// Chain identifier used for replay protection.
pub type ChainId = u64;
