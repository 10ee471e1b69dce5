use devnet_chain_l1::{Hardfork, chains::l1_chain_config};
use devnet_config::{HardhatConfig, MAINNET_FORK_BLOCK_NUMBER, NetworkConfig, hardhat_network};
use devnet_test_utils::workspace_config_path;

fn load_hardhat_network() -> anyhow::Result<NetworkConfig> {
    let config = HardhatConfig::load(workspace_config_path())?;
    Ok(config.network(devnet_defaults::NETWORK_NAME)?.clone())
}

#[test]
fn workspace_file_matches_builtin_profile() -> anyhow::Result<()> {
    let loaded = HardhatConfig::load(workspace_config_path())?;

    assert_eq!(loaded, HardhatConfig::builtin());

    Ok(())
}

#[test]
fn mainnet_hardfork_implies_mainnet_chain_id() -> anyhow::Result<()> {
    let network = load_hardhat_network()?;

    let mainnet = l1_chain_config(1).expect("mainnet is a known chain");
    assert!(mainnet.hardfork_activations.contains(&network.hardfork));
    assert_eq!(network.chain_id, 1);

    Ok(())
}

#[test]
fn fork_block_number_is_pinned() -> anyhow::Result<()> {
    let first = load_hardhat_network()?;
    let second = load_hardhat_network()?;

    let block_number = |network: &NetworkConfig| {
        network
            .forking
            .as_ref()
            .and_then(|fork| fork.block_number)
    };

    assert_eq!(block_number(&first), Some(MAINNET_FORK_BLOCK_NUMBER));
    assert_eq!(block_number(&first), block_number(&second));

    Ok(())
}

#[test]
fn test_accounts_fixture_has_not_drifted() -> anyhow::Result<()> {
    let network = load_hardhat_network()?;

    assert_eq!(network.accounts.count, 10);
    assert_eq!(
        network.accounts.mnemonic.phrase(),
        "test test test test test test test test test test test junk"
    );
    assert_eq!(network.accounts.path.to_string(), "m/44'/60'/0'");

    Ok(())
}

#[test]
fn mnemonic_is_public_test_data() -> anyhow::Result<()> {
    let network = load_hardhat_network()?;

    // The phrase is published; accounts derived from it must never hold real
    // funds.
    assert!(network.accounts.mnemonic.is_public_test_phrase());

    Ok(())
}

#[test]
fn base_fee_is_zero() -> anyhow::Result<()> {
    let network = load_hardhat_network()?;

    assert_eq!(network.initial_base_fee_per_gas, Some(0));
    assert_eq!(network.hardfork, Hardfork::London);
    assert!(network.hardfork.supports_eip1559());

    Ok(())
}

#[test]
fn loading_twice_yields_equal_records() -> anyhow::Result<()> {
    assert_eq!(load_hardhat_network()?, load_hardhat_network()?);
    assert_eq!(hardhat_network(), hardhat_network());

    Ok(())
}

#[test]
fn builtin_profile_is_valid() -> anyhow::Result<()> {
    hardhat_network().validate()?;

    Ok(())
}
