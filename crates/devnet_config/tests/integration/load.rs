use std::fs;

use assert_json_diff::assert_json_eq;
use devnet_config::{
    ConfigError, ConfigFormat, HardhatConfig, Hardfork, NetworkConfig, hardhat_network,
};

const HARDHAT_JSON: &str = r#"{
  "networks": {
    "hardhat": {
      "hardfork": "london",
      "chainId": 1,
      "forking": {
        "url": "https://eth.public-rpc.com",
        "blockNumber": 16727000
      },
      "initialBaseFeePerGas": 0,
      "accounts": {
        "mnemonic": "test test test test test test test test test test test junk",
        "path": "m/44'/60'/0'",
        "count": 10
      }
    }
  }
}"#;

#[test]
fn json_file_loads() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("hardhat.json");
    fs::write(&path, HARDHAT_JSON)?;

    let config = HardhatConfig::load(&path)?;
    assert_eq!(config, HardhatConfig::builtin());

    Ok(())
}

#[test]
fn serializes_to_the_authored_shape() -> anyhow::Result<()> {
    let serialized: serde_json::Value =
        serde_json::from_str(&HardhatConfig::builtin().to_json_string()?)?;
    let authored: serde_json::Value = serde_json::from_str(HARDHAT_JSON)?;

    assert_json_eq!(serialized, authored);

    Ok(())
}

#[test]
fn round_trips_through_both_formats() -> anyhow::Result<()> {
    let config = HardhatConfig::builtin();

    for format in [ConfigFormat::Toml, ConfigFormat::Json] {
        let serialized = config.to_string_with_format(format)?;
        let parsed = HardhatConfig::from_str_with_format(&serialized, format)?;

        assert_eq!(parsed, config, "{format:?} round trip");
    }

    Ok(())
}

#[test]
fn round_trips_supplemented_fields() -> anyhow::Result<()> {
    let config = HardhatConfig::from_toml_str(
        r#"
        [networks.local]
        hardfork = "cancun"
        chainId = 1337
        blockGasLimit = 60000000
        minGasPrice = 1
        coinbase = "0x0000000000000000000000000000000000000001"
        allowUnlimitedContractSize = true
        loggingEnabled = true

        [networks.local.accounts]
        initialIndex = 3
        passphrase = "pass"
        accountsBalance = "5000000000000000000"

        [networks.local.mining]
        auto = false
        interval = [1000, 2000]

        [networks.local.mining.mempool]
        order = "fifo"

        [networks.local.forking]
        url = "wss://example.com"
        enabled = false
        httpHeaders = { Authorization = "Bearer token" }
        "#,
    )?;

    let toml = HardhatConfig::from_toml_str(&config.to_toml_string()?)?;
    let json = HardhatConfig::from_json_str(&config.to_json_string()?)?;

    assert_eq!(toml, config);
    assert_eq!(json, config);

    let network = config.network("local")?;
    assert_eq!(network.accounts.count, devnet_defaults::ACCOUNT_COUNT);
    assert!(network.forking.as_ref().is_some_and(|fork| !fork.enabled));

    Ok(())
}

#[test]
fn omitted_accounts_use_defaults() -> anyhow::Result<()> {
    let config = HardhatConfig::from_json_str(r#"{ "networks": { "hardhat": {} } }"#)?;

    assert_eq!(config.network("hardhat")?, &NetworkConfig::default());

    Ok(())
}

#[test]
fn typos_are_rejected() {
    let result = HardhatConfig::from_json_str(r#"{ "networks": { "hardhat": { "chainID": 1 } } }"#);

    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn newest_hardfork_is_accepted() -> anyhow::Result<()> {
    let config = HardhatConfig::from_toml_str(
        r#"
        [networks.hardhat]
        hardfork = "osaka"
        "#,
    )?;

    assert_eq!(config.network("hardhat")?.hardfork, Hardfork::Osaka);

    Ok(())
}

#[test]
fn unknown_hardfork_is_rejected() {
    let result = HardhatConfig::from_toml_str(
        r#"
        [networks.hardhat]
        hardfork = "paris"
        "#,
    );

    let error = result.expect_err("paris is spelled merge");
    assert!(error.to_string().contains("Unknown hardfork name: paris"));
}

#[test]
fn zero_block_gas_limit_is_rejected() {
    let result = HardhatConfig::from_json_str(
        r#"{ "networks": { "hardhat": { "blockGasLimit": 0 } } }"#,
    );

    assert!(result.is_err());
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("missing.toml");

    let error = HardhatConfig::load(&path).expect_err("file does not exist");
    assert!(matches!(error, ConfigError::Io { path: ref error_path, .. } if *error_path == path));
}

#[test]
fn javascript_config_is_unsupported() {
    let result = HardhatConfig::load("hardhat.config.js");

    assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
}

#[test]
fn unchanged_profile_serializes_identically() -> anyhow::Result<()> {
    let first = serde_json::to_string(&hardhat_network())?;
    let second = serde_json::to_string(&hardhat_network())?;

    assert_eq!(first, second);

    Ok(())
}
