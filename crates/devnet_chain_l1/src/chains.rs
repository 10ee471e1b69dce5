//! Configurations for Ethereum L1 chains.

use std::sync::OnceLock;

use devnet_chain_config::{ChainConfig, ForkCondition, HardforkActivation};

use crate::{ChainId, Hardfork};

/// Mainnet chain ID
pub const L1_MAINNET_CHAIN_ID: ChainId = 0x1;

const MAINNET_HARDFORKS: &[HardforkActivation<Hardfork>] = &[
    HardforkActivation {
        condition: ForkCondition::Block(0),
        hardfork: Hardfork::Chainstart,
    },
    HardforkActivation {
        condition: ForkCondition::Block(1_150_000),
        hardfork: Hardfork::Homestead,
    },
    HardforkActivation {
        condition: ForkCondition::Block(1_920_000),
        hardfork: Hardfork::Dao,
    },
    HardforkActivation {
        condition: ForkCondition::Block(2_463_000),
        hardfork: Hardfork::TangerineWhistle,
    },
    HardforkActivation {
        condition: ForkCondition::Block(2_675_000),
        hardfork: Hardfork::SpuriousDragon,
    },
    HardforkActivation {
        condition: ForkCondition::Block(4_370_000),
        hardfork: Hardfork::Byzantium,
    },
    HardforkActivation {
        condition: ForkCondition::Block(7_280_000),
        hardfork: Hardfork::Constantinople,
    },
    HardforkActivation {
        condition: ForkCondition::Block(7_280_000),
        hardfork: Hardfork::Petersburg,
    },
    HardforkActivation {
        condition: ForkCondition::Block(9_069_000),
        hardfork: Hardfork::Istanbul,
    },
    HardforkActivation {
        condition: ForkCondition::Block(9_200_000),
        hardfork: Hardfork::MuirGlacier,
    },
    HardforkActivation {
        condition: ForkCondition::Block(12_244_000),
        hardfork: Hardfork::Berlin,
    },
    HardforkActivation {
        condition: ForkCondition::Block(12_965_000),
        hardfork: Hardfork::London,
    },
    HardforkActivation {
        condition: ForkCondition::Block(13_773_000),
        hardfork: Hardfork::ArrowGlacier,
    },
    HardforkActivation {
        condition: ForkCondition::Block(15_050_000),
        hardfork: Hardfork::GrayGlacier,
    },
    HardforkActivation {
        condition: ForkCondition::Block(15_537_394),
        hardfork: Hardfork::Merge,
    },
    HardforkActivation {
        condition: ForkCondition::Block(17_034_870),
        hardfork: Hardfork::Shanghai,
    },
    HardforkActivation {
        condition: ForkCondition::Block(19_426_589),
        hardfork: Hardfork::Cancun,
    },
    HardforkActivation {
        condition: ForkCondition::Timestamp(1_746_612_311),
        hardfork: Hardfork::Prague,
    },
    HardforkActivation {
        condition: ForkCondition::Timestamp(1_764_798_551),
        hardfork: Hardfork::Osaka,
    },
];

fn mainnet_config() -> &'static ChainConfig<Hardfork> {
    static CONFIG: OnceLock<ChainConfig<Hardfork>> = OnceLock::new();

    CONFIG.get_or_init(|| ChainConfig {
        name: "Mainnet".to_owned(),
        hardfork_activations: MAINNET_HARDFORKS.into(),
    })
}

/// Sepolia chain ID
pub const SEPOLIA_CHAIN_ID: ChainId = 0xaa36a7;

const SEPOLIA_HARDFORKS: &[HardforkActivation<Hardfork>] = &[
    HardforkActivation {
        condition: ForkCondition::Block(0),
        hardfork: Hardfork::London,
    },
    HardforkActivation {
        condition: ForkCondition::Block(1_450_409),
        hardfork: Hardfork::Merge,
    },
    HardforkActivation {
        condition: ForkCondition::Block(2_990_908),
        hardfork: Hardfork::Shanghai,
    },
    HardforkActivation {
        condition: ForkCondition::Block(5_187_023),
        hardfork: Hardfork::Cancun,
    },
    HardforkActivation {
        condition: ForkCondition::Timestamp(1_741_159_776),
        hardfork: Hardfork::Prague,
    },
    HardforkActivation {
        condition: ForkCondition::Timestamp(1_760_427_360),
        hardfork: Hardfork::Osaka,
    },
];

fn sepolia_config() -> &'static ChainConfig<Hardfork> {
    static CONFIG: OnceLock<ChainConfig<Hardfork>> = OnceLock::new();

    CONFIG.get_or_init(|| ChainConfig {
        name: "Sepolia".to_owned(),
        hardfork_activations: SEPOLIA_HARDFORKS.into(),
    })
}

/// Returns the configuration of the L1 chain with the provided ID, if it is
/// known.
pub fn l1_chain_config(chain_id: ChainId) -> Option<&'static ChainConfig<Hardfork>> {
    match chain_id {
        L1_MAINNET_CHAIN_ID => Some(mainnet_config()),
        SEPOLIA_CHAIN_ID => Some(sepolia_config()),
        _ => None,
    }
}
