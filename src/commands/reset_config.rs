//! Reset-config command implementation

use anyhow::Result;

use crate::config::{ConfigStore, CONFIG_FILE};
use crate::utils::paths::project_root_or_cwd;
use crate::utils::terminal::{print_banner, print_success};

/// Remove the saved configuration file
#[derive(Debug)]
pub struct ResetConfigCommand;

impl ResetConfigCommand {
    /// Execute the reset-config command
    pub fn execute(self, _verbose: bool) -> Result<()> {
        let project_root = project_root_or_cwd()?;
        let store = ConfigStore::new(&project_root);

        if !store.path().exists() {
            println!(
                "Configuration file '{}' does not exist. Nothing to reset.",
                CONFIG_FILE
            );
            return Ok(());
        }

        print_banner("Resetting Configuration");
        store.reset()?;
        print_success(&format!("removed configuration file: {}", CONFIG_FILE));
        Ok(())
    }
}
