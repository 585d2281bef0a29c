//! Configuration commands.

use anyhow::Result;
use beescore_core::config::paths;

use crate::cli::ConfigCommands;

pub fn run(command: &ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Path => {
            println!("{}", paths::config_path().display());
            Ok(())
        }
    }
}
