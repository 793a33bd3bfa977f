//! Print the effective configuration

use taskgate::config::Config;

/// Print `config` as TOML
pub fn show_config(config: &Config) -> anyhow::Result<()> {
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
