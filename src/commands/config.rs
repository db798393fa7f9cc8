//! Config command: show the effective configuration

use anyhow::Result;

use crate::core::config::Config;

/// Prints the configuration in effect, after file and flag overrides, as TOML
pub fn handle_print_config_command(config: &Config) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}
