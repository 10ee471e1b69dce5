pub mod env;
pub mod remote;

use std::path::PathBuf;

/// Returns the path of the configuration file at the root of the workspace.
pub fn workspace_config_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../..")
        .join("devnet.toml")
}
