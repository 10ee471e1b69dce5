mod remote;

use std::path::PathBuf;

use anyhow::anyhow;
use clap::{Parser, Subcommand, ValueEnum};
use devnet_config::{ConfigFormat, HardhatConfig, ProviderConfig};
use log::{LevelFilter, Log, Record};

use crate::remote::JsonRpcRemoteHeight;

const LOGGER: SimpleLogger = SimpleLogger;

/// Inspects the network profiles of the simulated blockchain.
#[derive(Parser)]
#[clap(name = "devnet", version)]
struct CliArgs {
    /// Enables verbose mode
    #[clap(short, long, takes_value = false)]
    verbose: bool,
    /// Configuration file (`.toml` or `.json`). Defaults to the built-in
    /// profiles.
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Prints a network profile.
    Show {
        #[clap(short, long, default_value = devnet_defaults::NETWORK_NAME)]
        network: String,
        #[clap(short, long, value_enum, default_value = "toml")]
        format: OutputFormat,
    },
    /// Validates a network profile.
    Check {
        #[clap(short, long, default_value = devnet_defaults::NETWORK_NAME)]
        network: String,
        /// Checks the pinned fork block against the remote network's height.
        #[clap(long, takes_value = false)]
        remote: bool,
    },
    /// Lists the derivation paths and balances of the test accounts.
    Accounts {
        #[clap(short, long, default_value = devnet_defaults::NETWORK_NAME)]
        network: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Toml,
    Json,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(value: OutputFormat) -> Self {
        match value {
            OutputFormat::Toml => ConfigFormat::Toml,
            OutputFormat::Json => ConfigFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logger(args.verbose)?;

    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = load_config(args.config)?;

    match args.command {
        Command::Show { network, format } => show(&config, &network, format),
        Command::Check { network, remote } => check(&config, &network, remote),
        Command::Accounts { network } => accounts(&config, &network),
    }
}

struct SimpleLogger;

impl Log for SimpleLogger {
    fn enabled(&self, metadata: &log::Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{} - {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

fn init_logger(verbose: bool) -> anyhow::Result<()> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(level))
        .map_err(|error| anyhow!(error))
}

fn load_config(path: Option<PathBuf>) -> anyhow::Result<HardhatConfig> {
    match path {
        Some(path) => Ok(HardhatConfig::load(path)?),
        None => {
            log::debug!("Using built-in network profiles");
            Ok(HardhatConfig::builtin())
        }
    }
}

fn show(config: &HardhatConfig, network: &str, format: OutputFormat) -> anyhow::Result<()> {
    let selected = config.select(network)?;
    println!("{}", selected.to_string_with_format(format.into())?);

    Ok(())
}

fn check(config: &HardhatConfig, network: &str, remote: bool) -> anyhow::Result<()> {
    let profile = config.network(network)?;
    profile.validate()?;

    if remote {
        profile.check_fork_block_number(&JsonRpcRemoteHeight::new()?)?;
    }

    println!("Network `{network}` is valid");

    Ok(())
}

fn accounts(config: &HardhatConfig, network: &str) -> anyhow::Result<()> {
    let provider = ProviderConfig::try_from(config.network(network)?.clone())?;

    if provider.mnemonic.is_public_test_phrase() {
        println!("Accounts are derived from the public test mnemonic. Never send real funds to them.");
    }

    for (idx, account) in provider.accounts.iter().enumerate() {
        println!("#{idx}: {} ({} wei)", account.path, account.balance);
    }

    Ok(())
}
